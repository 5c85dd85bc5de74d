use crate::layers::Layer;
use layerguard_types::{Location, RepoPath, ids};

/// Structured form of an import target (or any module path).
///
/// `layer == None` means the path is outside the layered taxonomy (relative imports,
/// packages, unknown roots); `slice` and `rest` are then empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleReference {
    pub layer: Option<Layer>,
    pub slice: Option<String>,
    pub rest: Vec<String>,
}

impl ModuleReference {
    pub fn unclassified() -> Self {
        Self::default()
    }

    pub fn is_classified(&self) -> bool {
        self.layer.is_some()
    }

    /// Total segment count of the alias-stripped path.
    pub fn depth(&self) -> usize {
        usize::from(self.layer.is_some()) + usize::from(self.slice.is_some()) + self.rest.len()
    }
}

/// One import statement: who imports, what, and where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportEdge {
    pub source_file: RepoPath,
    /// The import specifier exactly as written.
    pub import_path: String,
    pub location: Option<Location>,
}

impl ImportEdge {
    pub fn new(source_file: impl Into<RepoPath>, import_path: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            import_path: import_path.into(),
            location: None,
        }
    }

    pub fn at(mut self, line: u32, col: u32) -> Self {
        self.location = Some(Location::at(self.source_file.clone(), line, col));
        self
    }
}

/// The discovered sources of one run: every scanned file and every import found in them.
#[derive(Clone, Debug, Default)]
pub struct SourceModel {
    pub repo_root: RepoPath,
    pub files: Vec<RepoPath>,
    pub edges: Vec<ImportEdge>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViolationKind {
    LayerDirection,
    PublicApiBoundary,
    TestingApiBoundary,
}

impl ViolationKind {
    pub fn check_id(self) -> &'static str {
        match self {
            ViolationKind::LayerDirection => ids::CHECK_LAYERS_DIRECTION,
            ViolationKind::PublicApiBoundary | ViolationKind::TestingApiBoundary => {
                ids::CHECK_LAYERS_PUBLIC_API
            }
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ViolationKind::LayerDirection => ids::CODE_UPPER_LAYER_IMPORT,
            ViolationKind::PublicApiBoundary => ids::CODE_PUBLIC_API_BYPASS,
            ViolationKind::TestingApiBoundary => ids::CODE_TESTING_API_OUTSIDE_TESTS,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ViolationKind::LayerDirection => "Allows imports only from underlying layers",
            ViolationKind::PublicApiBoundary => {
                "Absolute import is only allowed from the public API"
            }
            ViolationKind::TestingApiBoundary => {
                "Testing data import is only allowed from the testing API"
            }
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            ViolationKind::LayerDirection => {
                "Import only from layers below this one, or list the path in ignore_import_patterns."
            }
            ViolationKind::PublicApiBoundary => {
                "Import from the slice root (`<layer>/<slice>`) and re-export what you need there."
            }
            ViolationKind::TestingApiBoundary => {
                "Only files matched by test_file_patterns may import `<layer>/<slice>/testing`."
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub edge: ImportEdge,
}
