//! Edge classification: relationship kind to visual treatment.

use crate::model::DependencyKind;

/// Visual treatment for one dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeStyle {
    pub color: &'static str,
    pub label: Option<&'static str>,
    pub dashed: bool,
    pub animated: bool,
}

/// Map a relationship kind to its visual treatment.
///
/// Total over all inputs: unknown or absent kinds get the plain-dependency
/// styling, so graph construction can never fail on styling.
pub fn classify(kind: Option<DependencyKind>) -> EdgeStyle {
    match kind {
        Some(DependencyKind::MvTarget) => EdgeStyle {
            color: "#f97316",
            label: Some("MV"),
            dashed: false,
            animated: true,
        },
        Some(DependencyKind::DictGet) => EdgeStyle {
            color: "#8b5cf6",
            label: Some("dictGet"),
            dashed: true,
            animated: false,
        },
        Some(DependencyKind::JoinGet) => EdgeStyle {
            color: "#0ea5e9",
            label: Some("joinGet"),
            dashed: true,
            animated: false,
        },
        Some(DependencyKind::DictSource) => EdgeStyle {
            color: "#22c55e",
            label: Some("source"),
            dashed: false,
            animated: false,
        },
        Some(DependencyKind::ExternalEngine) => EdgeStyle {
            color: "#64748b",
            label: Some("external"),
            dashed: true,
            animated: false,
        },
        Some(DependencyKind::Dependency) | None => EdgeStyle {
            color: "#94a3b8",
            label: None,
            dashed: false,
            animated: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_materialized_view_targets_animate() {
        for kind in [
            DependencyKind::Dependency,
            DependencyKind::DictGet,
            DependencyKind::JoinGet,
            DependencyKind::MvTarget,
            DependencyKind::DictSource,
            DependencyKind::ExternalEngine,
        ] {
            assert_eq!(
                classify(Some(kind)).animated,
                kind == DependencyKind::MvTarget
            );
        }
        assert!(!classify(None).animated);
    }

    #[test]
    fn absent_kind_gets_plain_styling() {
        let plain = classify(None);
        assert_eq!(plain, classify(Some(DependencyKind::Dependency)));
        assert_eq!(plain.label, None);
        assert!(!plain.dashed);
    }

    #[test]
    fn lookup_calls_are_dashed_and_labeled() {
        let dict = classify(Some(DependencyKind::DictGet));
        assert!(dict.dashed);
        assert_eq!(dict.label, Some("dictGet"));

        let join = classify(Some(DependencyKind::JoinGet));
        assert!(join.dashed);
        assert_eq!(join.label, Some("joinGet"));
        assert_ne!(dict.color, join.color);
    }
}
