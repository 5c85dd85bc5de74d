//! Fuzz target for pattern compilation and edge evaluation.
//!
//! Goal: building a policy from arbitrary globs may fail, but must not panic; evaluating
//! arbitrary edges must not panic and yields at most one violation per check family.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_evaluation
//! ```

#![no_main]

use arbitrary::Arbitrary;
use layerguard_domain::PolicyEngine;
use layerguard_domain::model::ImportEdge;
use layerguard_domain::policy::PolicyConfig;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct PolicyInput {
    alias: String,
    ignore_patterns: Vec<String>,
    test_patterns: Vec<String>,
    testing_api: bool,
    edges: Vec<(String, String)>,
}

fuzz_target!(|input: PolicyInput| {
    if input.ignore_patterns.len() > 16
        || input.test_patterns.len() > 16
        || input.edges.len() > 64
    {
        return;
    }

    let Ok(policy) = PolicyConfig::default()
        .with_alias(&input.alias)
        .with_testing_api(input.testing_api)
        .with_ignore_import_patterns(input.ignore_patterns)
        .and_then(|p| p.with_test_file_patterns(input.test_patterns))
    else {
        return;
    };

    let engine = PolicyEngine::new(&policy);
    for (source, import) in input.edges {
        let violations = engine.evaluate_edge(&ImportEdge::new(source.as_str(), import));
        assert!(violations.len() <= 2);
    }
});
