use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tablemap_core::{DependencyKind, Direction, TableDependency};
use tablemap_layout::layout_dependency_graph;

fn feed(chained: usize, isolated: usize) -> Vec<TableDependency> {
    let mut records = Vec::with_capacity(chained + isolated);
    for i in 0..chained {
        records.push(TableDependency {
            source_database: "db".to_string(),
            source_table: format!("t{i}"),
            source_engine: "MergeTree".to_string(),
            target_database: Some("db".to_string()),
            target_table: Some(format!("t{}", i + 1)),
            kind: Some(if i % 3 == 0 {
                DependencyKind::MvTarget
            } else {
                DependencyKind::Dependency
            }),
            extra_info: None,
        });
    }
    for i in 0..isolated {
        records.push(TableDependency {
            source_database: "db".to_string(),
            source_table: format!("bare{i}"),
            source_engine: "Memory".to_string(),
            target_database: None,
            target_table: None,
            kind: None,
            extra_info: None,
        });
    }
    records
}

fn bench_pipeline(c: &mut Criterion) {
    let records = feed(120, 30);
    c.bench_function("layout_150_tables_tb", |b| {
        b.iter(|| layout_dependency_graph(black_box(&records), None, Direction::Tb))
    });
    c.bench_function("layout_150_tables_lr", |b| {
        b.iter(|| layout_dependency_graph(black_box(&records), None, Direction::Lr))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
