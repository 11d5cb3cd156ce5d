use std::io::Read;
use std::str::FromStr;

use tablemap_core::{DependencyGraph, Direction, TableDependency};
use tablemap_layout::layout_dependency_graph;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Direction(tablemap_core::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Direction(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Stats,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    direction: Direction,
    current: Option<String>,
}

fn usage() -> &'static str {
    "tablemap-cli\n\
\n\
USAGE:\n\
  tablemap-cli [layout] [--direction TB|LR] [--current <database>.<table>] [--pretty] [<path>|-]\n\
  tablemap-cli stats [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is a JSON array of dependency records (source_database,\n\
    source_table, source_engine, target_database, target_table,\n\
    dependency_type, extra_info).\n\
  - layout prints the positioned graph as JSON; stats prints node/edge\n\
    counts only.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut i = 0;

    match argv.first().map(String::as_str) {
        Some("layout") => {
            args.command = Command::Layout;
            i = 1;
        }
        Some("stats") => {
            args.command = Command::Stats;
            i = 1;
        }
        _ => {}
    }

    while i < argv.len() {
        match argv[i].as_str() {
            "--pretty" => args.pretty = true,
            "--direction" => {
                i += 1;
                let value = argv
                    .get(i)
                    .ok_or(CliError::Usage("--direction expects a value (TB or LR)"))?;
                args.direction = Direction::from_str(value).map_err(CliError::Direction)?;
            }
            "--current" => {
                i += 1;
                let value = argv
                    .get(i)
                    .ok_or(CliError::Usage("--current expects <database>.<table>"))?;
                args.current = Some(value.clone());
            }
            "-h" | "--help" => {
                println!("{}", usage());
                std::process::exit(0);
            }
            other if other.starts_with("--") => {
                return Err(CliError::Usage("Unknown option"));
            }
            _ => {
                if args.input.is_some() {
                    return Err(CliError::Usage("Multiple input paths given"));
                }
                args.input = Some(argv[i].clone());
            }
        }
        i += 1;
    }

    Ok(args)
}

fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn run() -> Result<(), CliError> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&argv)?;

    let text = read_input(args.input.as_deref())?;
    let records: Vec<TableDependency> = serde_json::from_str(&text)?;

    let current = match args.current.as_deref() {
        Some(pair) => Some(
            pair.split_once('.')
                .ok_or(CliError::Usage("--current expects <database>.<table>"))?,
        ),
        None => None,
    };

    match args.command {
        Command::Layout => {
            let result = layout_dependency_graph(&records, current, args.direction);
            print_json(&result, args.pretty)?;
        }
        Command::Stats => {
            let graph = DependencyGraph::build(&records, current);
            let stats = serde_json::json!({
                "node_count": graph.nodes.len(),
                "edge_count": graph.edge_count,
            });
            print_json(&stats, args.pretty)?;
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        match err {
            CliError::Usage(msg) => eprintln!("{msg}\n\n{}", usage()),
            other => eprintln!("{other}"),
        }
        std::process::exit(1);
    }
}
