//! Marching Cubes lookup tables.
//!
//! The central type is [`McTable`]: for every sign configuration of the
//! polytope vertices it stores a pre-computed list of isosurface simplices.
//! Around it this crate provides:
//! - [`Polytope`] - the host cell model (cube, simplex, pyramid, prism)
//! - [`IsoVertex`] - isosurface vertex descriptors on polytope features
//! - [`TableProperties`] - the property record of a table
//! - [`simplex`] - pure orientation/connectivity algebra on simplex lists
//! - [`orient`] - the cross-entry orientation engine and its verifiers
//! - [`invert_mcube_table`] - the separation-flipping table inverter

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod halfedge;
pub mod invert;
pub mod isovertex;
pub mod orient;
pub mod polytope;
pub mod properties;
pub mod simplex;
pub mod table;

pub use halfedge::{HalfEdge, HalfEdgePoly3};
pub use invert::invert_mcube_table;
pub use isovertex::{IsoVertex, IsoVertexSite};
pub use orient::{
    check_mcube_table_orientation, orient_mcube_table, FacetIsoVertices, OrientInfo,
    SimplexOrientInfo,
};
pub use polytope::{generate_prism, opposite_cube_facet, PolyShape, Polytope};
pub use properties::{
    Encoding, IsoPolyOrientation, SeparateOpposite, SeparationKind, TableKind, TableProperties,
    TriangulationKind, VertexLabelKind,
};
pub use table::{num_table_entries, IsoVertexIndex, McTable, TableIndex};

// Re-export the vector type used by explicit-point isosurface vertices.
pub use glam::Vec3;
