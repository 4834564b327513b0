//! A Marching Cubes lookup-table toolkit.
//!
//! The central asset is [`McTable`]: for every sign configuration of the
//! eight corners of a unit cube (or a richer label alphabet for interval
//! volumes) it stores a pre-computed, topologically consistent set of
//! simplices. Around it:
//!
//! - the polytope model ([`Polytope`], [`HalfEdgePoly3`]) and isosurface
//!   vertex descriptors ([`IsoVertex`])
//! - the property record ([`TableProperties`]) with its eleven axes
//! - the orientation engine ([`orient_mcube_table`],
//!   [`check_mcube_table_orientation`]) that makes simplices face the
//!   positive (or negative) side consistently across all entries
//! - the inverter ([`invert_mcube_table`]) that swaps separation
//! - `.xit` serialization ([`read_xit`], [`write_xit`]) in both format
//!   versions
//! - the scalar grid collaborator ([`Grid3`], [`ScalarGrid3`]) that a
//!   per-cube extractor walks to form table indices
//!
//! A table is built by generating the polytope, sizing the isosurface
//! vertex array, populating entries, setting properties, and optionally
//! running the orientation engine; or by reading an `.xit` file.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod grid;

pub use grid::{Grid3, ScalarGrid3};

pub use mcubes_core::{
    decompose_index, int_power, EnumLabel, McError, Report, Result, UnionFind, VertexBitset,
    MAX_ISO_VERTICES, MAX_POLY_VERTICES,
};
pub use mcubes_table::{
    check_mcube_table_orientation, generate_prism, invert_mcube_table, num_table_entries,
    opposite_cube_facet, orient_mcube_table, simplex, Encoding, FacetIsoVertices, HalfEdge,
    HalfEdgePoly3, IsoPolyOrientation, IsoVertex, IsoVertexIndex, IsoVertexSite, McTable,
    OrientInfo, PolyShape, Polytope, SeparateOpposite, SeparationKind, SimplexOrientInfo,
    TableIndex, TableKind, TableProperties, TriangulationKind, VertexLabelKind,
};
pub use mcubes_xit::{read_xit, read_xit_v1, write_xit, write_xit_v1, write_xit_v2, XitError,
    XitResult, XitVersion};

// Re-export glam types for convenience
pub use glam::Vec3;
