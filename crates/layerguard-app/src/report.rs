use anyhow::Context;
use layerguard_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use layerguard_types::{
    Finding, LayerguardData, LayerguardReport, ReportEnvelope, SCHEMA_REPORT_V1, Severity,
    ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<LayerguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unsupported report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse layerguard report")
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &LayerguardReport) -> anyhow::Result<Vec<u8>> {
    let mut out = serde_json::to_vec_pretty(report).context("serialize report")?;
    out.push(b'\n');
    Ok(out)
}

pub fn to_renderable(report: &LayerguardReport) -> RenderableReport {
    let verdict = match report.verdict {
        Verdict::Pass => RenderableVerdictStatus::Pass,
        Verdict::Warn => RenderableVerdictStatus::Warn,
        Verdict::Fail => RenderableVerdictStatus::Fail,
    };

    RenderableReport {
        verdict,
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            files_scanned: report.data.files_scanned,
            imports_scanned: report.data.imports_scanned,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|l| RenderableLocation {
            path: l.path.as_str().to_string(),
            line: l.line,
            col: l.col,
        }),
        import: f
            .data
            .get("import")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        help: f.help.clone(),
    }
}

/// A failing report carrying a single `tool.runtime` finding.
pub fn runtime_error_report(message: &str) -> LayerguardReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "layerguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run layerguard.".to_string()),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: LayerguardData {
            profile: "unknown".to_string(),
            findings_total: 1,
            findings_emitted: 1,
            ..LayerguardData::default()
        },
    }
}
