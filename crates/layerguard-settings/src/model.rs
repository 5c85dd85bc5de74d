use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `layerguard.toml` schema v1.
///
/// This is a *user-facing* config model: every key is optional so an empty file is valid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LayerguardConfigV1 {
    /// Optional schema string for tooling (`layerguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `strict` (default), `warn` or `compat`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// When to fail the check: `error` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Root import alias, e.g. `@` for `@/entities/user`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Directory name after which a file's layer appears (default `src`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_marker: Option<String>,

    /// Directory to scan, relative to the repo root (default `src`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,

    /// File extensions to scan, without the dot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Import specifiers exempt from the layer direction check.
    #[serde(default)]
    pub ignore_import_patterns: Vec<String>,

    /// Source files allowed to import `<layer>/<slice>/testing`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_file_patterns: Option<Vec<String>>,

    /// Layers whose slices must be imported through their public entry point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_api_layers: Option<Vec<String>>,

    /// Allow test files to import the `testing` surface (default true).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testing_api: Option<bool>,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Override preset severity: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}
