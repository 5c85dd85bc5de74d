use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for an import finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - source file (repo-relative)
/// - import specifier as written
///
/// Line numbers are left out so findings survive unrelated edits above them.
pub fn fingerprint_for_import(
    check_id: &str,
    code: &str,
    source_file: &str,
    import_path: &str,
) -> String {
    let canonical = [check_id, code, source_file, import_path].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
