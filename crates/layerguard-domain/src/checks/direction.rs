use crate::layers::{DependencyTable, Layer};
use crate::model::{ModuleReference, ViolationKind};
use crate::policy::PatternSet;

/// Reject imports that point at a layer `source_layer` may not depend on.
///
/// Unclassified sides are not applicable. `ignore` is matched against the raw
/// specifier (alias included), so patterns are written the way imports are.
pub fn check_direction(
    table: &DependencyTable,
    source_layer: Option<Layer>,
    import: &ModuleReference,
    ignore: &PatternSet,
    raw_import: &str,
) -> Option<ViolationKind> {
    let (Some(from), Some(to)) = (source_layer, import.layer) else {
        return None;
    };

    if ignore.is_match(raw_import) {
        return None;
    }

    if table.allows(from, to) {
        None
    } else {
        Some(ViolationKind::LayerDirection)
    }
}
