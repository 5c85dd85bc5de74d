//! Render use cases: markdown and GitHub annotations from in-memory reports.

use layerguard_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    layerguard_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    layerguard_render::render_github_annotations(report, max)
}
