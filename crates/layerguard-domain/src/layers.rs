//! The layer taxonomy and the fixed "may import from" table.

use crate::policy::PolicyError;
use std::fmt;
use std::str::FromStr;

/// Architectural layers, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    App,
    Pages,
    Widgets,
    Features,
    Entities,
    Shared,
}

impl Layer {
    pub const ALL: [Layer; 6] = [
        Layer::App,
        Layer::Pages,
        Layer::Widgets,
        Layer::Features,
        Layer::Entities,
        Layer::Shared,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Layer::App => "app",
            Layer::Pages => "pages",
            Layer::Widgets => "widgets",
            Layer::Features => "features",
            Layer::Entities => "entities",
            Layer::Shared => "shared",
        }
    }

    /// Exact, case-sensitive lookup by directory name.
    pub fn from_name(name: &str) -> Option<Layer> {
        Layer::ALL.into_iter().find(|l| l.as_str() == name)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layer::from_name(s).ok_or_else(|| PolicyError::UnknownLayer(s.to_string()))
    }
}

/// Directed allow-list: for each layer, the layers it may import from.
#[derive(Debug)]
pub struct DependencyTable {
    edges: &'static [(Layer, &'static [Layer])],
}

/// `entities -> entities` is deliberate: entities compose across slices.
/// No other layer lists itself.
pub static STANDARD_TABLE: DependencyTable = DependencyTable {
    edges: &[
        (
            Layer::App,
            &[
                Layer::Pages,
                Layer::Widgets,
                Layer::Features,
                Layer::Entities,
                Layer::Shared,
            ],
        ),
        (
            Layer::Pages,
            &[Layer::Widgets, Layer::Features, Layer::Entities, Layer::Shared],
        ),
        (
            Layer::Widgets,
            &[Layer::Features, Layer::Entities, Layer::Shared],
        ),
        (Layer::Features, &[Layer::Entities, Layer::Shared]),
        (Layer::Entities, &[Layer::Entities, Layer::Shared]),
        (Layer::Shared, &[Layer::Shared]),
    ],
};

impl DependencyTable {
    pub fn standard() -> &'static DependencyTable {
        &STANDARD_TABLE
    }

    pub fn allowed_imports(&self, from: Layer) -> &'static [Layer] {
        self.edges
            .iter()
            .find(|(layer, _)| *layer == from)
            .map(|(_, allowed)| *allowed)
            .unwrap_or(&[])
    }

    pub fn allows(&self, from: Layer, to: Layer) -> bool {
        self.allowed_imports(from).contains(&to)
    }
}
