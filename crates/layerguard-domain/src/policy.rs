use crate::layers::Layer;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use layerguard_types::Severity;
use std::collections::{BTreeMap, BTreeSet};

/// Directory segment after which a source file's layer name appears.
pub const DEFAULT_ROOT_MARKER: &str = "src";

/// Third path segment that names a slice's test-only public surface.
pub const TESTING_SEGMENT: &str = "testing";

/// Layers whose slices must be imported through their public entry point.
pub const DEFAULT_PUBLIC_API_LAYERS: [Layer; 4] =
    [Layer::Entities, Layer::Features, Layer::Pages, Layer::Widgets];

/// Configuration problems. Raised while building a policy, never during evaluation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("invalid glob pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("unknown layer `{0}` (expected app|pages|widgets|features|entities|shared)")]
    UnknownLayer(String),
}

/// A compiled set of glob patterns.
///
/// `*` and `?` never cross a `/`; `**` spans any number of directories.
#[derive(Clone, Debug, Default)]
pub struct PatternSet {
    patterns: Vec<String>,
    set: Option<GlobSet>,
}

impl PatternSet {
    pub fn new<I, S>(patterns: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        if patterns.is_empty() {
            return Ok(Self::default());
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| PolicyError::InvalidPattern {
                    pattern: pattern.clone(),
                    reason: e.kind().to_string(),
                })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|e| PolicyError::InvalidPattern {
            pattern: patterns.join(", "),
            reason: e.to_string(),
        })?;

        Ok(Self {
            patterns,
            set: Some(set),
        })
    }

    /// True when `value` matches at least one pattern.
    pub fn is_match(&self, value: &str) -> bool {
        self.set.as_ref().is_some_and(|set| set.is_match(value))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Everything the classifier and checkers need. Built once per run, read-only afterwards.
#[derive(Clone, Debug)]
pub struct PolicyConfig {
    /// Import alias stripped before classification (`@` strips `@/`). Empty disables stripping.
    pub alias: String,
    pub root_marker: String,
    /// Exempt matching import paths from the direction check only.
    pub ignore_import_patterns: PatternSet,
    /// Source files allowed to import `<layer>/<slice>/testing`.
    pub test_file_patterns: PatternSet,
    pub public_api_layers: BTreeSet<Layer>,
    /// When false, `<layer>/<slice>/testing` is just another deep import.
    pub testing_api: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            alias: String::new(),
            root_marker: DEFAULT_ROOT_MARKER.to_string(),
            ignore_import_patterns: PatternSet::default(),
            test_file_patterns: PatternSet::default(),
            public_api_layers: DEFAULT_PUBLIC_API_LAYERS.into_iter().collect(),
            testing_api: true,
        }
    }
}

impl PolicyConfig {
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = alias.trim_end_matches('/').to_string();
        self
    }

    pub fn with_root_marker(mut self, marker: &str) -> Self {
        self.root_marker = marker.trim_matches('/').to_string();
        self
    }

    pub fn with_ignore_import_patterns<I, S>(mut self, patterns: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_import_patterns = PatternSet::new(patterns)?;
        Ok(self)
    }

    pub fn with_test_file_patterns<I, S>(mut self, patterns: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_file_patterns = PatternSet::new(patterns)?;
        Ok(self)
    }

    pub fn with_public_api_layers<I, S>(mut self, names: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.public_api_layers = names
            .into_iter()
            .map(|n| n.as_ref().parse::<Layer>())
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    pub fn with_testing_api(mut self, enabled: bool) -> Self {
        self.testing_api = enabled;
        self
    }

    pub fn enforces_public_api(&self, layer: Layer) -> bool {
        self.public_api_layers.contains(&layer)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug)]
pub struct CheckPolicy {
    pub enabled: bool,
    pub severity: Severity,
}

impl CheckPolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: Severity::Info,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    pub checks: BTreeMap<String, CheckPolicy>,
    pub policy: PolicyConfig,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}
