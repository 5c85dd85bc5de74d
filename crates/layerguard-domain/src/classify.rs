//! Path classification. Never fails: anything unrecognised is simply unclassified.

use crate::layers::Layer;
use crate::model::ModuleReference;
use crate::policy::PolicyConfig;
use layerguard_types::RepoPath;

/// `.`, `..`, `./x`, `../x` (any specifier starting with a dot).
pub fn is_relative(raw: &str) -> bool {
    raw.starts_with('.')
}

/// Drop a leading `<alias>/`. An empty alias strips nothing.
pub fn strip_alias<'a>(raw: &'a str, alias: &str) -> &'a str {
    if alias.is_empty() {
        return raw;
    }
    raw.strip_prefix(alias)
        .and_then(|r| r.strip_prefix('/'))
        .unwrap_or(raw)
}

pub fn classify_import_path(raw: &str, cfg: &PolicyConfig) -> ModuleReference {
    if is_relative(raw) {
        return ModuleReference::unclassified();
    }

    // Empty parts count: `/app/x` has no layer and `entities/a/` is three segments deep.
    let mut segments = strip_alias(raw, &cfg.alias).split('/');

    let Some(layer) = segments.next().and_then(Layer::from_name) else {
        return ModuleReference::unclassified();
    };

    ModuleReference {
        layer: Some(layer),
        slice: segments.next().map(str::to_string),
        rest: segments.map(str::to_string).collect(),
    }
}

/// Layer owning `file_path`: the segment right after the first `root_marker` segment.
pub fn classify_file_path(file_path: &str, root_marker: &str) -> Option<Layer> {
    let path = RepoPath::new(file_path);
    let mut segments = path.segments();
    segments.find(|s| *s == root_marker)?;
    segments.next().and_then(Layer::from_name)
}
