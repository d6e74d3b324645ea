//! Pattern generators for self-supporting infill lattices.
//!
//! Each pattern places closed cell outlines (and, for the chevron lattice,
//! connector struts) inside the inset working frame and returns them as one
//! [`Layout`](crate::layout::Layout).

mod chevron;
mod hexmesh;

pub use chevron::{
    ChevronParams, ChevronSpec, StrutSpec, compute_chevron, compute_strut,
    generate_chevron_lattice,
};
pub use hexmesh::{HexParams, compute_hexagon, generate_hex_mesh};

/// Metadata describing a pattern for UI display.
#[derive(Debug, Clone, Copy)]
pub struct PatternMetadata {
    /// Label for the cell-size parameters
    pub size_label: &'static str,
    /// Label for the wall/gap parameter
    pub detail_label: &'static str,
    /// Brief description of the pattern
    pub description: &'static str,
}

impl PatternMetadata {
    /// Create new pattern metadata.
    pub const fn new(
        size_label: &'static str,
        detail_label: &'static str,
        description: &'static str,
    ) -> Self {
        Self { size_label, detail_label, description }
    }
}

/// Available pattern types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Chevrons,
    Hexmesh,
}

impl Pattern {
    /// Get all available patterns.
    pub fn all() -> &'static [Pattern] {
        &[Pattern::Chevrons, Pattern::Hexmesh]
    }

    /// Get pattern name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Chevrons => "chevrons",
            Pattern::Hexmesh => "hexmesh",
        }
    }

    /// Get UI metadata for this pattern.
    pub fn metadata(&self) -> PatternMetadata {
        match self {
            Pattern::Chevrons => PatternMetadata::new(
                "Columns / Rows",
                "Webbing",
                "Ascending chevron lattice with connector struts",
            ),
            Pattern::Hexmesh => PatternMetadata::new(
                "Hex Width",
                "Hex Spacing",
                "Staggered hexagonal mesh",
            ),
        }
    }

    /// Parse pattern from string.
    pub fn from_name(name: &str) -> Option<Pattern> {
        match name.to_lowercase().as_str() {
            "chevrons" | "chevron" | "ascending" => Some(Pattern::Chevrons),
            "hexmesh" | "hex" | "honeycomb" => Some(Pattern::Hexmesh),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for pattern in Pattern::all() {
            assert_eq!(Pattern::from_name(pattern.name()), Some(*pattern));
        }
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(Pattern::from_name("chevron"), Some(Pattern::Chevrons));
        assert_eq!(Pattern::from_name("ASCENDING"), Some(Pattern::Chevrons));
        assert_eq!(Pattern::from_name("honeycomb"), Some(Pattern::Hexmesh));
        assert_eq!(Pattern::from_name("gyroid"), None);
    }
}
