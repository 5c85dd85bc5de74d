use crate::{model::LayerguardConfigV1, presets};
use anyhow::Context;
use layerguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, PolicyConfig};
use layerguard_types::{Severity, explain};

pub const DEFAULT_SOURCE_ROOT: &str = "src";
pub const DEFAULT_EXTENSIONS: [&str; 6] = ["ts", "tsx", "js", "jsx", "mjs", "cjs"];
pub const DEFAULT_TEST_FILE_PATTERNS: [&str; 3] = ["**/*.test.*", "**/*.spec.*", "**/*.stories.*"];

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
    pub alias: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    /// Directory to scan, relative to the repo root.
    pub source_root: String,
    /// Extensions to scan, without the leading dot.
    pub extensions: Vec<String>,
}

pub fn resolve_config(
    cfg: LayerguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        if !explain::all_check_ids().contains(&check_id.as_str()) {
            anyhow::bail!(
                "unknown check id in [checks]: {check_id} (expected one of: {})",
                explain::all_check_ids().join(", ")
            );
        }
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    effective.policy = resolve_policy(&cfg, &overrides)?;

    let source_root = cfg
        .source_root
        .clone()
        .unwrap_or_else(|| DEFAULT_SOURCE_ROOT.to_string());
    let extensions = match &cfg.extensions {
        Some(exts) => exts
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect(),
        None => DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
    };

    Ok(ResolvedConfig {
        effective,
        source_root,
        extensions,
    })
}

fn resolve_policy(cfg: &LayerguardConfigV1, overrides: &Overrides) -> anyhow::Result<PolicyConfig> {
    let mut policy = PolicyConfig::default();

    if let Some(alias) = overrides.alias.as_deref().or(cfg.alias.as_deref()) {
        policy = policy.with_alias(alias);
    }
    if let Some(marker) = cfg.root_marker.as_deref() {
        if marker.is_empty() || marker.contains('/') {
            anyhow::bail!("invalid root_marker: {marker:?} (expected a single directory name)");
        }
        policy = policy.with_root_marker(marker);
    }

    policy = policy
        .with_ignore_import_patterns(&cfg.ignore_import_patterns)
        .context("invalid ignore_import_patterns")?;

    policy = match &cfg.test_file_patterns {
        Some(patterns) => policy.with_test_file_patterns(patterns),
        None => policy.with_test_file_patterns(DEFAULT_TEST_FILE_PATTERNS),
    }
    .context("invalid test_file_patterns")?;

    if let Some(layers) = &cfg.public_api_layers {
        policy = policy
            .with_public_api_layers(layers)
            .context("invalid public_api_layers")?;
    }
    if let Some(testing_api) = cfg.testing_api {
        policy = policy.with_testing_api(testing_api);
    }

    Ok(policy)
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
