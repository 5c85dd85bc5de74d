use crate::model::{ImportEdge, SourceModel};
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn, PolicyConfig};
use layerguard_types::{RepoPath, Severity, ids};
use std::collections::BTreeMap;

/// The policy most tests use: `@` alias, a couple of ignore and test patterns.
pub fn fsd_policy() -> PolicyConfig {
    PolicyConfig::default()
        .with_alias("@")
        .with_ignore_import_patterns(["**/StoreProvider"])
        .expect("valid ignore patterns")
        .with_test_file_patterns(["**/*.test.*", "**/*.stories.*", "**/StoreDecorator.tsx"])
        .expect("valid test patterns")
}

pub fn edge(source: &str, import: &str) -> ImportEdge {
    ImportEdge::new(source, import).at(1, 1)
}

pub fn source_model(pairs: &[(&str, &str)]) -> SourceModel {
    let mut files: Vec<RepoPath> = pairs.iter().map(|(s, _)| RepoPath::new(s)).collect();
    files.sort();
    files.dedup();
    SourceModel {
        repo_root: RepoPath::new("."),
        files,
        edges: pairs.iter().map(|(s, i)| edge(s, i)).collect(),
    }
}

pub fn config_with_checks(severity: Severity) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(
        ids::CHECK_LAYERS_DIRECTION.to_string(),
        CheckPolicy::enabled(severity),
    );
    checks.insert(
        ids::CHECK_LAYERS_PUBLIC_API.to_string(),
        CheckPolicy::enabled(severity),
    );
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
        policy: fsd_policy(),
    }
}
