use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use layerguard_types::RepoPath;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Directories never descended into, in addition to dot-directories.
const SKIPPED_DIRS: [&str; 1] = ["node_modules"];

/// Discover source files under `<repo_root>/<source_root>`.
///
/// Behavior:
/// - skips `node_modules` and any directory whose name starts with `.`
/// - keeps files whose extension (without the dot) is listed in `extensions`
/// - returns repo-relative paths in lexicographic order
pub fn discover_sources(
    repo_root: &Utf8Path,
    source_root: &str,
    extensions: &[String],
) -> anyhow::Result<Vec<RepoPath>> {
    let scan_root = repo_root.join(source_root);
    let meta = std::fs::metadata(&scan_root)
        .with_context(|| format!("source root {scan_root} not found"))?;
    if !meta.is_dir() {
        anyhow::bail!("source root {scan_root} is not a directory");
    }

    let mut out: Vec<RepoPath> = WalkDir::new(&scan_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
        .filter(|abs| has_extension(abs, extensions))
        .map(|abs| RepoPath::relative_to(repo_root, &abs))
        .inspect(|p| tracing::debug!(path = %p, "discovered source file"))
        .collect();

    // Stable order.
    out.sort();
    out.dedup();

    Ok(out)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

fn has_extension(path: &Utf8Path, extensions: &[String]) -> bool {
    path.extension()
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
