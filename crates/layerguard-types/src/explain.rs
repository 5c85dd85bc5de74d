//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after code examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would trigger a finding.
    pub before: &'static str,
    /// Code that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_LAYERS_DIRECTION => Some(explain_direction()),
        ids::CHECK_LAYERS_PUBLIC_API => Some(explain_public_api()),

        // Codes
        ids::CODE_UPPER_LAYER_IMPORT => Some(explain_upper_layer_import()),
        ids::CODE_PUBLIC_API_BYPASS => Some(explain_public_api_bypass()),
        ids::CODE_TESTING_API_OUTSIDE_TESTS => Some(explain_testing_api_outside_tests()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_LAYERS_DIRECTION, ids::CHECK_LAYERS_PUBLIC_API]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_UPPER_LAYER_IMPORT,
        ids::CODE_PUBLIC_API_BYPASS,
        ids::CODE_TESTING_API_OUTSIDE_TESTS,
    ]
}

// --- Check-level explanations ---

fn explain_direction() -> Explanation {
    Explanation {
        title: "Layer Import Direction",
        description: "\
Detects absolute imports that point at a layer the importing file's layer may not depend on.

Layers are ordered from top to bottom:

    app -> pages -> widgets -> features -> entities -> shared

A module may only import from layers below its own. `entities` may additionally import
other entities, and `shared` may import only `shared`. Importing upwards couples low-level
code to the screens and processes built on top of it and creates import cycles.",
        remediation: "\
Move the imported code down to a layer the importer is allowed to use, or move the
importing code up. If an upward import is deliberate (for example an app-level store
provider used in a decorator), add its path to `ignore_import_patterns` in layerguard.toml.",
        examples: ExamplePair {
            before: r#"// src/widgets/header/ui/Header.tsx
import { HomePage } from "@/pages/home";"#,
            after: r#"// src/widgets/header/ui/Header.tsx
import { LoginButton } from "@/features/auth";"#,
        },
    }
}

fn explain_public_api() -> Explanation {
    Explanation {
        title: "Slice Public API",
        description: "\
Detects absolute imports that reach past a slice's public entry point.

Each slice in `pages`, `widgets`, `features` and `entities` publishes its API from its root
(`<layer>/<slice>`, usually an index file). Everything deeper is private to the slice.
A second, narrower surface `<layer>/<slice>/testing` exposes fixtures and mocks, and is
only importable from test files (see `test_file_patterns`).",
        remediation: "\
Re-export what you need from the slice's public entry point and import it from there.
Test fixtures belong in the slice's `testing` entry point and should be imported only from
files matched by `test_file_patterns`.",
        examples: ExamplePair {
            before: r#"import { Article } from "@/entities/article/model/types/article";"#,
            after: r#"import { Article } from "@/entities/article";"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_upper_layer_import() -> Explanation {
    let mut exp = explain_direction();
    exp.title = "Import From Upper Layer";
    exp
}

fn explain_public_api_bypass() -> Explanation {
    let mut exp = explain_public_api();
    exp.title = "Public API Bypass";
    exp
}

fn explain_testing_api_outside_tests() -> Explanation {
    Explanation {
        title: "Testing API Outside Tests",
        description: "\
A non-test file imports a slice's testing entry point (`<layer>/<slice>/testing`).

The testing surface carries mocks, fixtures and builders. Shipping it in production code
bloats bundles and lets fake data leak into real flows.",
        remediation: "\
Import from the slice's public entry point instead. If the importing file really is a test,
story or decorator, extend `test_file_patterns` in layerguard.toml so it is recognised.",
        examples: ExamplePair {
            before: r#"// src/features/comments/ui/CommentList.tsx
import { articleMock } from "@/entities/article/testing";"#,
            after: r#"// src/features/comments/ui/CommentList.test.tsx
import { articleMock } from "@/entities/article/testing";"#,
        },
    }
}
