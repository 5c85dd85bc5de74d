use crate::model::{ModuleReference, ViolationKind};
use crate::policy::{PatternSet, PolicyConfig, TESTING_SEGMENT};

/// Reject imports that reach below `<layer>/<slice>`.
///
/// `<layer>/<slice>/testing` (and anything under it) is a second public surface,
/// reserved for test files while `cfg.testing_api` is on.
pub fn check_public_api_boundary(
    source_file: &str,
    import: &ModuleReference,
    cfg: &PolicyConfig,
) -> Option<ViolationKind> {
    let layer = import.layer?;
    if !cfg.enforces_public_api(layer) {
        return None;
    }

    let depth = import.depth();
    if depth <= 2 {
        return None;
    }

    if cfg.testing_api && import.rest.first().is_some_and(|s| s == TESTING_SEGMENT) {
        return check_testing_api(source_file, &cfg.test_file_patterns);
    }

    Some(ViolationKind::PublicApiBoundary)
}

/// Only files matching `test_file_patterns` may use a testing surface.
pub fn check_testing_api(source_file: &str, test_file_patterns: &PatternSet) -> Option<ViolationKind> {
    if test_file_patterns.is_match(source_file) {
        None
    } else {
        Some(ViolationKind::TestingApiBoundary)
    }
}
