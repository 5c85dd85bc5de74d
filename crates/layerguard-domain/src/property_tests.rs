//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - evaluation determinism
//! - relative and non-architectural imports never being flagged
//! - direction monotonicity against the dependency table
//! - findings ordering

use crate::engine::{compare_findings, evaluate};
use crate::layers::{DependencyTable, Layer};
use crate::model::{ImportEdge, SourceModel, ViolationKind};
use crate::test_support::{config_with_checks, fsd_policy};
use crate::PolicyEngine;
use layerguard_types::{RepoPath, Severity};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_layer() -> impl Strategy<Value = Layer> {
    prop::sample::select(Layer::ALL.to_vec())
}

fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-zA-Z0-9_-]{0,11}").unwrap()
}

/// Repo-relative source file living inside `layer`.
fn arb_source_file(layer: Layer) -> impl Strategy<Value = String> {
    (
        arb_segment(),
        prop::collection::vec(arb_segment(), 0..3),
        prop_oneof![Just("ts"), Just("tsx"), Just("test.tsx")],
    )
        .prop_map(move |(slice, dirs, ext)| {
            let mut parts = vec!["src".to_string(), layer.as_str().to_string(), slice];
            parts.extend(dirs);
            format!("{}/index.{}", parts.join("/"), ext)
        })
}

fn arb_any_source_file() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_layer().prop_flat_map(arb_source_file),
        Just("config/jest/setupTests.ts".to_string()),
        Just("src/index.tsx".to_string()),
    ]
}

fn arb_relative_import() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("."), Just("./"), Just("../"), Just("../../")],
        prop::collection::vec(arb_segment(), 0..4),
    )
        .prop_map(|(prefix, rest)| {
            if prefix == "." {
                ".".to_string()
            } else {
                format!("{}{}", prefix, rest.join("/"))
            }
        })
}

/// Absolute import whose first segment is a layer, with or without the alias.
fn arb_layer_import() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        arb_layer(),
        prop::collection::vec(arb_segment(), 0..4),
    )
        .prop_map(|(aliased, layer, rest)| {
            let mut parts = vec![layer.as_str().to_string()];
            parts.extend(rest);
            let path = parts.join("/");
            if aliased { format!("@/{path}") } else { path }
        })
}

/// First segment is guaranteed not to be a layer name.
fn arb_foreign_import() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[a-z][a-z0-9-]{0,11}")
            .unwrap()
            .prop_filter("not a layer", |s| Layer::from_name(s).is_none()),
        prop::collection::vec(arb_segment(), 0..4),
        prop_oneof![Just(""), Just("@/"), Just("@scope/")],
    )
        .prop_map(|(head, rest, prefix)| {
            let mut parts = vec![head];
            parts.extend(rest);
            format!("{prefix}{}", parts.join("/"))
        })
}

fn arb_any_import() -> impl Strategy<Value = String> {
    prop_oneof![arb_relative_import(), arb_layer_import(), arb_foreign_import()]
}

fn arb_edge() -> impl Strategy<Value = ImportEdge> {
    (arb_any_source_file(), arb_any_import(), 1u32..500, 1u32..80)
        .prop_map(|(src, import, line, col)| ImportEdge::new(src.as_str(), import).at(line, col))
}

// ============================================================================
// Per-edge properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn evaluation_is_deterministic(edge in arb_edge()) {
        let policy = fsd_policy();
        let engine = PolicyEngine::new(&policy);
        let first = engine.evaluate_edge(&edge);
        for _ in 0..3 {
            prop_assert_eq!(&engine.evaluate_edge(&edge), &first);
        }
        prop_assert!(first.len() <= 2);
    }

    #[test]
    fn relative_imports_are_always_exempt(
        src in arb_any_source_file(),
        import in arb_relative_import(),
        forced in prop::option::of(arb_layer()),
    ) {
        let policy = fsd_policy();
        let engine = PolicyEngine::new(&policy);
        let edge = ImportEdge::new(src.as_str(), import);
        prop_assert!(engine.evaluate_edge(&edge).is_empty());
        prop_assert!(engine.evaluate(&edge, forced).is_empty());
    }

    #[test]
    fn non_architectural_imports_are_always_exempt(
        src in arb_any_source_file(),
        import in arb_foreign_import(),
    ) {
        let policy = fsd_policy();
        let engine = PolicyEngine::new(&policy);
        let edge = ImportEdge::new(src.as_str(), import);
        prop_assert!(engine.evaluate_edge(&edge).is_empty());
    }

    #[test]
    fn allowed_layers_never_trigger_direction(
        from in arb_layer(),
        slice in arb_segment(),
        aliased in any::<bool>(),
        file_seed in arb_segment(),
    ) {
        let policy = fsd_policy();
        let engine = PolicyEngine::new(&policy);
        let src = format!("src/{}/{file_seed}/index.ts", from.as_str());
        for to in DependencyTable::standard().allowed_imports(from) {
            let import = if aliased {
                format!("@/{}/{slice}", to.as_str())
            } else {
                format!("{}/{slice}", to.as_str())
            };
            let out = engine.evaluate_edge(&ImportEdge::new(src.as_str(), import));
            prop_assert!(out.iter().all(|v| v.kind != ViolationKind::LayerDirection));
        }
    }

    #[test]
    fn disallowed_layers_always_trigger_direction(
        from in arb_layer(),
        to in arb_layer(),
        slice in arb_segment(),
    ) {
        prop_assume!(!DependencyTable::standard().allows(from, to));
        let policy = fsd_policy();
        let engine = PolicyEngine::new(&policy);
        let edge = ImportEdge::new(
            format!("src/{}/x/index.ts", from.as_str()).as_str(),
            format!("@/{}/{slice}", to.as_str()),
        );
        let kinds: Vec<ViolationKind> = engine.evaluate_edge(&edge).iter().map(|v| v.kind).collect();
        prop_assert_eq!(kinds, vec![ViolationKind::LayerDirection]);
    }

    #[test]
    fn public_api_entry_points_never_trigger_boundary(
        src in arb_any_source_file(),
        layer in arb_layer(),
        slice in prop::option::of(arb_segment()),
    ) {
        let policy = fsd_policy();
        let engine = PolicyEngine::new(&policy);
        let import = match slice {
            Some(s) => format!("@/{}/{s}", layer.as_str()),
            None => format!("@/{}", layer.as_str()),
        };
        let out = engine.evaluate_edge(&ImportEdge::new(src.as_str(), import));
        prop_assert!(out.iter().all(|v| v.kind == ViolationKind::LayerDirection));
    }
}

// ============================================================================
// Report properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn report_is_independent_of_edge_order(
        edges in prop::collection::vec(arb_edge(), 0..40),
        seed in any::<u64>(),
    ) {
        let cfg = config_with_checks(Severity::Error);

        let mut shuffled = edges.clone();
        let n = shuffled.len();
        if n > 1 {
            // Deterministic Fisher-Yates driven by the seed.
            let mut state = seed;
            for i in (1..n).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let j = (state >> 33) as usize % (i + 1);
                shuffled.swap(i, j);
            }
        }

        let a = evaluate(&model(edges), &cfg);
        let b = evaluate(&model(shuffled), &cfg);
        prop_assert_eq!(a.findings, b.findings);
        prop_assert_eq!(a.verdict, b.verdict);
    }

    #[test]
    fn report_findings_are_sorted_and_bounded(
        edges in prop::collection::vec(arb_edge(), 0..40),
        max in 0usize..10,
    ) {
        let mut cfg = config_with_checks(Severity::Warning);
        cfg.max_findings = max;
        let report = evaluate(&model(edges), &cfg);

        prop_assert!(report.findings.len() <= max);
        prop_assert_eq!(report.findings.len() as u32, report.data.findings_emitted);
        prop_assert!(report.data.findings_total >= report.data.findings_emitted);
        for pair in report.findings.windows(2) {
            prop_assert_ne!(compare_findings(&pair[0], &pair[1]), std::cmp::Ordering::Greater);
        }
    }
}

fn model(edges: Vec<ImportEdge>) -> SourceModel {
    let mut files: Vec<RepoPath> = edges.iter().map(|e| e.source_file.clone()).collect();
    files.sort();
    files.dedup();
    SourceModel {
        repo_root: RepoPath::new("."),
        files,
        edges,
    }
}
