//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_LAYERS_DIRECTION: &str = "layers.direction";
pub const CHECK_LAYERS_PUBLIC_API: &str = "layers.public_api";

// Codes: layers.direction
pub const CODE_UPPER_LAYER_IMPORT: &str = "upper_layer_import";

// Codes: layers.public_api
pub const CODE_PUBLIC_API_BYPASS: &str = "public_api_bypass";
pub const CODE_TESTING_API_OUTSIDE_TESTS: &str = "testing_api_outside_tests";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
