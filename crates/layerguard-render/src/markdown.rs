use crate::{RenderableFinding, RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Layerguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    let data = &report.data;
    out.push_str(&format!("- Verdict: **{}**\n", verdict));
    if !data.profile.is_empty() {
        out.push_str(&format!("- Profile: `{}`\n", data.profile));
    }
    out.push_str(&format!(
        "- Scanned: {} files, {} imports\n- Findings: {} (emitted) / {} (total)\n\n",
        data.files_scanned, data.imports_scanned, data.findings_emitted, data.findings_total
    ));

    if let Some(r) = &data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n");

    // Findings arrive sorted by severity first; group by file without reordering.
    let mut current_file: Option<Option<&str>> = None;
    for f in &report.findings {
        let file = f.location.as_ref().map(|l| l.path.as_str());
        if current_file != Some(file) {
            out.push_str(&format!("\n### `{}`\n\n", file.unwrap_or("(no location)")));
            current_file = Some(file);
        }
        push_finding(&mut out, f);
    }

    out
}

fn push_finding(out: &mut String, f: &RenderableFinding) {
    let sev = match f.severity {
        RenderableSeverity::Info => "INFO",
        RenderableSeverity::Warning => "WARN",
        RenderableSeverity::Error => "ERROR",
    };

    let position = f
        .location
        .as_ref()
        .and_then(|l| match (l.line, l.col) {
            (Some(line), Some(col)) => Some(format!("L{}:{} ", line, col)),
            (Some(line), None) => Some(format!("L{} ", line)),
            _ => None,
        })
        .unwrap_or_default();

    out.push_str(&format!(
        "- [{}] {}`{}` / `{}`: {}",
        sev, position, f.check_id, f.code, f.message
    ));
    if let Some(import) = &f.import {
        out.push_str(&format!(" (`{}`)", import));
    }
    out.push('\n');

    if let Some(help) = &f.help {
        out.push_str(&format!("  - help: {}\n", help));
    }
}
