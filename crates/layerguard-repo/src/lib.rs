//! Repository adapters: discover source files and extract their import declarations.
//!
//! This crate is allowed to do filesystem IO. It should not spawn external processes.

#![forbid(unsafe_code)]

mod discover;
mod imports;

use camino::Utf8Path;
use layerguard_domain::model::{ImportEdge, SourceModel};
use layerguard_types::RepoPath;
use rayon::prelude::*;

pub use discover::discover_sources;
pub use imports::{ImportSite, extract_imports};

/// What to scan, relative to the repo root.
#[derive(Clone, Debug)]
pub struct SourceOptions {
    pub source_root: String,
    /// Extensions without the leading dot.
    pub extensions: Vec<String>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            source_root: "src".to_string(),
            extensions: ["ts", "tsx", "js", "jsx", "mjs", "cjs"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

/// Build the in-memory source model used by the policy engine.
///
/// `repo_root` is the project root; every path in the model is relative to it.
/// Files that cannot be read as UTF-8 are skipped with a warning.
pub fn build_source_model(
    repo_root: &Utf8Path,
    options: &SourceOptions,
) -> anyhow::Result<SourceModel> {
    let files = discover::discover_sources(repo_root, &options.source_root, &options.extensions)?;

    let per_file: Vec<(RepoPath, Vec<ImportEdge>)> = files
        .par_iter()
        .filter_map(|path| {
            let abs = repo_root.join(path.as_str());
            match std::fs::read_to_string(&abs) {
                Ok(text) => Some((path.clone(), edges_for(path, &text))),
                Err(err) => {
                    tracing::warn!(path = %path, error = %err, "skipping unreadable source file");
                    None
                }
            }
        })
        .collect();

    let mut model = SourceModel {
        repo_root: RepoPath::from(repo_root),
        files: Vec::with_capacity(per_file.len()),
        edges: Vec::new(),
    };
    for (path, edges) in per_file {
        model.files.push(path);
        model.edges.extend(edges);
    }

    // Stable order: path, then position.
    model.files.sort();
    model.edges.sort_by(|a, b| {
        a.source_file
            .cmp(&b.source_file)
            .then_with(|| position(a).cmp(&position(b)))
    });

    tracing::debug!(
        files = model.files.len(),
        imports = model.edges.len(),
        "built source model"
    );

    Ok(model)
}

fn edges_for(path: &RepoPath, text: &str) -> Vec<ImportEdge> {
    extract_imports(text)
        .into_iter()
        .map(|site| ImportEdge::new(path.clone(), site.specifier).at(site.line, site.col))
        .collect()
}

fn position(edge: &ImportEdge) -> (u32, u32) {
    edge.location
        .as_ref()
        .map(|l| (l.line.unwrap_or(0), l.col.unwrap_or(0)))
        .unwrap_or((0, 0))
}
