use layerguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, PolicyConfig};
use layerguard_types::{Severity, ids};
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything project-specific goes into layerguard.toml.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        "compat" => compat_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    base("strict", checks(Severity::Error, Severity::Error))
}

fn warn_profile() -> EffectiveConfig {
    base("warn", checks(Severity::Warning, Severity::Warning))
}

/// For codebases migrating to layers: direction is enforced, deep imports only warn.
fn compat_profile() -> EffectiveConfig {
    base("compat", checks(Severity::Error, Severity::Warning))
}

fn base(profile: &str, checks: BTreeMap<String, CheckPolicy>) -> EffectiveConfig {
    EffectiveConfig {
        profile: profile.to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
        policy: PolicyConfig::default(),
    }
}

fn checks(direction: Severity, public_api: Severity) -> BTreeMap<String, CheckPolicy> {
    let mut m = BTreeMap::new();
    m.insert(
        ids::CHECK_LAYERS_DIRECTION.to_string(),
        CheckPolicy::enabled(direction),
    );
    m.insert(
        ids::CHECK_LAYERS_PUBLIC_API.to_string(),
        CheckPolicy::enabled(public_api),
    );
    m
}
