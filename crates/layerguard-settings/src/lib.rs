//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, LayerguardConfigV1};
pub use resolve::{
    DEFAULT_EXTENSIONS, DEFAULT_SOURCE_ROOT, DEFAULT_TEST_FILE_PATTERNS, Overrides, ResolvedConfig,
};

/// Parse `layerguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<LayerguardConfigV1> {
    let cfg: LayerguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profiles + overrides + per-check config).
pub fn resolve_config(
    cfg: LayerguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
