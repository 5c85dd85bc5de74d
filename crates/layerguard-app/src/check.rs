//! The `check` use case: evaluate policy and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use layerguard_repo::SourceOptions;
use layerguard_settings::{Overrides, ResolvedConfig};
use layerguard_types::{LayerguardReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Repository root path.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: LayerguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, scan the source tree, evaluate policy, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        layerguard_settings::LayerguardConfigV1::default()
    } else {
        layerguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = layerguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let options = SourceOptions {
        source_root: resolved.source_root.clone(),
        extensions: resolved.extensions.clone(),
    };
    let model = layerguard_repo::build_source_model(input.repo_root, &options)
        .context("build source model")?;

    let domain_report = layerguard_domain::evaluate(&model, &resolved.effective);
    let layerguard_domain::report::DomainReport {
        verdict,
        findings,
        data,
        counts,
    } = domain_report;

    tracing::info!(
        profile = %data.profile,
        files = data.files_scanned,
        imports = data.imports_scanned,
        errors = counts.error,
        warnings = counts.warning,
        verdict = ?verdict,
        "check complete"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "layerguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
