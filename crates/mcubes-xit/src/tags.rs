//! The `.xit` element alphabet.
//!
//! Exact tag names, shared by the reader and the writers for
//! interoperability with existing files.

pub const ISOTABLE: &str = "isotable";
pub const VERSION: &str = "version";
pub const CREATION_DATE: &str = "creationDate";
pub const TABLE_TYPE: &str = "tableType";
pub const DIMENSION: &str = "dimension";
pub const POLY: &str = "poly";
pub const POLY_SHAPE: &str = "polyShape";
pub const VERTICES: &str = "vertices";
pub const NUM_VERTICES: &str = "numVertices";
pub const C: &str = "c";
pub const EDGES: &str = "edges";
pub const NUM_EDGES: &str = "numEdges";
pub const V: &str = "v";
pub const W: &str = "w";
pub const FACETS: &str = "facets";
pub const NUM_FACETS: &str = "numFacets";
pub const F: &str = "f";
pub const ISO_VERTICES: &str = "isoVertices";
pub const IN_E: &str = "inE";
pub const IN_V: &str = "inV";
pub const IN_F: &str = "inF";
pub const L: &str = "L";
pub const TABLE: &str = "table";
pub const ENCODING: &str = "encoding";
pub const TABLE_PROPERTIES: &str = "tableProperties";
pub const POLY_VERTEX_LABEL_TYPE: &str = "polyVertexLabelType";
pub const SEPARATION_TYPE: &str = "separationType";
pub const TRIANGULATION_TYPE: &str = "triangulationType";
pub const SEPARATE_OPPOSITE: &str = "separateOpposite";
pub const ISO_POLY_ORIENTATION: &str = "isoPolyOrientation";
pub const NUM_ENTRIES: &str = "numEntries";
pub const S: &str = "s";
