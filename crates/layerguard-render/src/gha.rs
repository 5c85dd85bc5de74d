use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line},col={col}::[{check_id}:{code}] {message}`
///
/// At most `max` annotations are produced, in report order.
pub fn render_github_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    let mut out = Vec::new();

    for f in report.findings.iter().take(max) {
        let level = match f.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let mut meta = String::new();
        if let Some(loc) = &f.location {
            meta.push_str(&format!("file={}", escape_property(&loc.path)));
            if let Some(line) = loc.line {
                meta.push_str(&format!(",line={}", line));
            }
            if let Some(col) = loc.col {
                meta.push_str(&format!(",col={}", col));
            }
        }

        let mut text = format!("[{}:{}] {}", f.check_id, f.code, f.message);
        if let Some(import) = &f.import {
            text.push_str(&format!(" ({})", import));
        }
        let message = escape_data(&text);

        if meta.is_empty() {
            out.push(format!("::{}::{}", level, message));
        } else {
            out.push(format!("::{} {}::{}", level, meta, message));
        }
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableFinding, RenderableLocation, RenderableVerdictStatus};

    fn finding(severity: RenderableSeverity, path: Option<&str>) -> RenderableFinding {
        RenderableFinding {
            severity,
            check_id: "layers.direction".to_string(),
            code: "upper_layer_import".to_string(),
            message: "Allows imports only from underlying layers".to_string(),
            location: path.map(|p| RenderableLocation {
                path: p.to_string(),
                line: Some(3),
                col: Some(24),
            }),
            import: Some("@/widgets/header".to_string()),
            help: None,
        }
    }

    fn report(findings: Vec<RenderableFinding>) -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings,
            data: RenderableData::default(),
        }
    }

    #[test]
    fn renders_levels_and_location() {
        let r = report(vec![
            finding(RenderableSeverity::Error, Some("src/features/a/ui/A.tsx")),
            finding(RenderableSeverity::Warning, None),
            finding(RenderableSeverity::Info, None),
        ]);
        let lines = render_github_annotations(&r, 10);
        assert_eq!(
            lines[0],
            "::error file=src/features/a/ui/A.tsx,line=3,col=24::[layers.direction:upper_layer_import] \
             Allows imports only from underlying layers (@/widgets/header)"
        );
        assert!(lines[1].starts_with("::warning::[layers.direction"));
        assert!(lines[2].starts_with("::notice::"));
    }

    #[test]
    fn respects_max() {
        let r = report(vec![
            finding(RenderableSeverity::Error, None),
            finding(RenderableSeverity::Error, None),
            finding(RenderableSeverity::Error, None),
        ]);
        assert_eq!(render_github_annotations(&r, 2).len(), 2);
        assert!(render_github_annotations(&r, 0).is_empty());
    }

    #[test]
    fn escapes_workflow_command_characters() {
        let mut f = finding(RenderableSeverity::Error, Some("src/a,b:c.ts"));
        f.message = "100%\nsure".to_string();
        let lines = render_github_annotations(&report(vec![f]), 1);
        assert!(lines[0].contains("file=src/a%2Cb%3Ac.ts,"));
        assert!(lines[0].contains("100%25%0Asure"));
    }
}
