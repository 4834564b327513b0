//! The Marching Cubes lookup table.
//!
//! A table owns one polytope, one isosurface-vertex array, one property
//! record, and `base^num_poly_vertices` entries. Entry `it` decomposes
//! digit-by-digit into per-vertex labels: digit 0 labels polytope vertex 0.
//! Each entry is a flat list of simplex vertex indices; the order of
//! vertices within a simplex encodes its orientation.

use mcubes_core::{decompose_index, int_power, McError, Report, Result, MAX_POLY_VERTICES};

use crate::isovertex::{IsoVertex, IsoVertexSite};
use crate::polytope::Polytope;
use crate::properties::{Encoding, TableKind, TableProperties};
use crate::simplex;

/// Index of a table entry.
pub type TableIndex = usize;

/// Index of an isosurface vertex within a table.
pub type IsoVertexIndex = u8;

/// Number of table entries for `num_vertices` polytope vertices and
/// `num_labels` labels per vertex.
pub fn num_table_entries(num_vertices: usize, num_labels: usize) -> Result<usize> {
    int_power(num_labels, u32::try_from(num_vertices).expect("vertex count fits in u32"))
}

/// Isosurface (or interval-volume) lookup table.
#[derive(Debug, Clone, Default)]
pub struct McTable {
    properties: TableProperties,
    polytope: Polytope,
    simplex_dimension: usize,
    iso_vertices: Vec<IsoVertex>,
    entries: Vec<Vec<IsoVertexIndex>>,
}

impl McTable {
    /// Creates an empty isosurface table: polytope dimension 3, simplex
    /// dimension 2.
    #[must_use]
    pub fn new() -> Self {
        Self::with_simplex_dimension(2)
    }

    /// Creates an empty table with the given simplex dimension (2 for
    /// isosurfaces, 3 for interval volumes).
    #[must_use]
    pub fn with_simplex_dimension(simplex_dimension: usize) -> Self {
        Self {
            properties: TableProperties::new(),
            polytope: Polytope::new(3),
            simplex_dimension,
            iso_vertices: Vec::new(),
            entries: Vec::new(),
        }
    }

    // *** Get functions ***

    /// Table properties.
    #[must_use]
    pub fn properties(&self) -> &TableProperties {
        &self.properties
    }

    /// Mutable table properties.
    pub fn properties_mut(&mut self) -> &mut TableProperties {
        &mut self.properties
    }

    /// Table encoding.
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.properties.encoding
    }

    /// The table polytope.
    #[must_use]
    pub fn polytope(&self) -> &Polytope {
        &self.polytope
    }

    /// Mutable access to the table polytope.
    pub fn polytope_mut(&mut self) -> &mut Polytope {
        &mut self.polytope
    }

    /// Polytope dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.polytope.dimension()
    }

    /// Isosurface simplex dimension.
    #[must_use]
    pub fn simplex_dimension(&self) -> usize {
        self.simplex_dimension
    }

    /// Returns true if this table represents an interval volume.
    #[must_use]
    pub fn is_interval_volume(&self) -> bool {
        self.dimension() == self.simplex_dimension()
    }

    /// Number of vertices in each isosurface simplex.
    #[must_use]
    pub fn num_vertices_per_simplex(&self) -> usize {
        self.simplex_dimension + 1
    }

    /// Number of isosurface vertices.
    #[must_use]
    pub fn num_iso_vertices(&self) -> usize {
        self.iso_vertices.len()
    }

    /// The `iw`'th isosurface vertex.
    #[must_use]
    pub fn iso_vertex(&self, iw: usize) -> &IsoVertex {
        &self.iso_vertices[iw]
    }

    /// Number of lookup table entries.
    #[must_use]
    pub fn num_table_entries(&self) -> usize {
        self.entries.len()
    }

    /// Number of simplices in entry `it`.
    #[must_use]
    pub fn num_simplices(&self, it: TableIndex) -> usize {
        self.entries[it].len() / self.num_vertices_per_simplex()
    }

    /// The `k`'th vertex of simplex `is` of entry `it`.
    #[must_use]
    pub fn simplex_vertex(&self, it: TableIndex, is: usize, k: usize) -> IsoVertexIndex {
        self.entries[it][is * self.num_vertices_per_simplex() + k]
    }

    /// The vertices of all simplices of entry `it`.
    #[must_use]
    pub fn simplex_vertices(&self, it: TableIndex) -> &[IsoVertexIndex] {
        &self.entries[it]
    }

    /// The vertices of simplex `is` of entry `it`.
    #[must_use]
    pub fn simplex_vertices_of(&self, it: TableIndex, is: usize) -> &[IsoVertexIndex] {
        let nv = self.num_vertices_per_simplex();
        &self.entries[it][is * nv..(is + 1) * nv]
    }

    /// Base of the table-index encoding: 2 for binary, 3 otherwise.
    #[must_use]
    pub fn base(&self) -> usize {
        if self.encoding() == Encoding::Base3 {
            3
        } else {
            2
        }
    }

    /// The digit representing a negative vertex label.
    #[must_use]
    pub fn negative_label_value(&self) -> u8 {
        0
    }

    /// The digit representing a positive vertex label: 2 for base-3
    /// encoding, 1 for binary.
    #[must_use]
    pub fn positive_label_value(&self) -> u8 {
        if self.encoding() == Encoding::Base3 {
            2
        } else {
            1
        }
    }

    /// Decomposes `it` into per-vertex label digits.
    pub fn vertex_labels(&self, it: TableIndex) -> Result<Vec<u8>> {
        let mut digits = vec![0_u8; self.polytope.num_vertices()];
        decompose_index(it, self.base(), &mut digits)?;
        Ok(digits)
    }

    /// Returns true if entries `it_a` and `it_b` assign the same label to
    /// every vertex of polytope facet `jf`.
    pub fn are_all_facet_vertex_labels_identical(
        &self,
        it_a: TableIndex,
        it_b: TableIndex,
        jf: usize,
    ) -> Result<bool> {
        let digits_a = self.vertex_labels(it_a)?;
        let digits_b = self.vertex_labels(it_b)?;

        for k in 0..self.polytope.num_facet_vertices(jf) {
            let iv = usize::from(self.polytope.facet_vertex(jf, k));
            if digits_a[iv] != digits_b[iv] {
                return Ok(false);
            }
        }
        Ok(true)
    }

    // *** Set functions ***

    /// Sets the simplex dimension.
    pub fn set_simplex_dimension(&mut self, d: usize) {
        self.simplex_dimension = d;
    }

    /// Sets the table kind.
    pub fn set_table_kind(&mut self, kind: TableKind) {
        self.properties.table_kind = kind;
    }

    /// Sets the index encoding.
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.properties.encoding = encoding;
    }

    /// Replaces the table polytope.
    pub fn set_polytope(&mut self, polytope: Polytope) {
        self.polytope = polytope;
    }

    /// Sets the number of isosurface vertices, discarding existing ones.
    pub fn set_num_iso_vertices(&mut self, num_vertices: usize) {
        self.iso_vertices = vec![IsoVertex::default(); num_vertices];
    }

    /// Sets isosurface vertex `iw`.
    pub fn set_iso_vertex(&mut self, iw: usize, vertex: IsoVertex) -> Result<()> {
        const PROC: &str = "McTable::set_iso_vertex";

        if self.num_iso_vertices() == 0 {
            let mut report = Report::in_procedure(PROC);
            report.add("Programming error. Call McTable::set_num_iso_vertices()");
            report.add("  before calling McTable::set_iso_vertex().");
            return Err(McError::InvariantViolation(report));
        }
        if iw >= self.num_iso_vertices() {
            let mut report = Report::in_procedure(PROC);
            report.add(format!(
                "Programming error. Illegal isosurface vertex index {iw}."
            ));
            report.add(format!(
                "  Isosurface vertices should be in range [0..{}].",
                self.num_iso_vertices() - 1
            ));
            return Err(McError::IllegalArgument(report));
        }

        self.iso_vertices[iw] = vertex;
        Ok(())
    }

    /// Sets the site of isosurface vertex `iw`.
    pub fn set_iso_vertex_site(&mut self, iw: usize, site: IsoVertexSite) {
        self.iso_vertices[iw].site = site;
    }

    /// Sets the label of isosurface vertex `iw`.
    pub fn set_iso_vertex_label(&mut self, iw: usize, label: impl Into<String>) {
        self.iso_vertices[iw].label = Some(label.into());
    }

    /// Verifies that slots `vstart .. vstart + numv` exist in the
    /// isosurface vertex array.
    fn check_iso_vertices_alloc(&self, procedure: &str, vstart: usize, numv: usize) -> Result<()> {
        if numv == 0 {
            return Ok(());
        }
        if self.iso_vertices.is_empty() {
            return Err(McError::invariant(
                procedure,
                "Set number of isosurface vertices before storing vertices.",
            ));
        }
        if vstart + numv > self.num_iso_vertices() {
            return Err(McError::illegal_argument(
                procedure,
                "Illegal isosurface vertex index.",
            ));
        }
        Ok(())
    }

    /// Stores one isosurface vertex per polytope vertex, starting at slot
    /// `vstart`.
    pub fn store_poly_vertices_as_iso_vertices(&mut self, vstart: usize) -> Result<()> {
        let num_polyv = self.polytope.num_vertices();
        self.check_iso_vertices_alloc("McTable::store_poly_vertices_as_iso_vertices", vstart, num_polyv)?;

        for iv in 0..num_polyv {
            self.iso_vertices[vstart + iv] = IsoVertex::new(IsoVertexSite::OnVertex(
                u8::try_from(iv).expect("vertex index fits in u8"),
            ));
        }
        Ok(())
    }

    /// Stores one isosurface vertex per polytope edge, starting at slot
    /// `vstart`.
    pub fn store_poly_edges_as_iso_vertices(&mut self, vstart: usize) -> Result<()> {
        let num_polye = self.polytope.num_edges();
        self.check_iso_vertices_alloc("McTable::store_poly_edges_as_iso_vertices", vstart, num_polye)?;

        for ie in 0..num_polye {
            self.iso_vertices[vstart + ie] = IsoVertex::new(IsoVertexSite::OnEdge(
                u8::try_from(ie).expect("edge index fits in u8"),
            ));
        }
        Ok(())
    }

    /// Stores one isosurface vertex per polytope facet, starting at slot
    /// `vstart`.
    pub fn store_poly_facets_as_iso_vertices(&mut self, vstart: usize) -> Result<()> {
        let num_polyf = self.polytope.num_facets();
        self.check_iso_vertices_alloc("McTable::store_poly_facets_as_iso_vertices", vstart, num_polyf)?;

        for jf in 0..num_polyf {
            self.iso_vertices[vstart + jf] = IsoVertex::new(IsoVertexSite::OnFacet(
                u8::try_from(jf).expect("facet index fits in u8"),
            ));
        }
        Ok(())
    }

    /// Allocates `num_table_entries` empty entries, discarding existing
    /// ones.
    pub fn set_num_table_entries(&mut self, num_table_entries: usize) {
        self.entries = vec![Vec::new(); num_table_entries];
    }

    /// (Re)allocates the simplex-vertex list of entry `it` for `nums`
    /// simplices.
    ///
    /// `nums == 0` is legal and frees the entry's storage.
    pub fn set_num_simplices(&mut self, it: TableIndex, nums: usize) -> Result<()> {
        const PROC: &str = "McTable::set_num_simplices";

        if self.entries.is_empty() {
            return Err(McError::invariant(
                PROC,
                "Table must be allocated before entering table entries.",
            ));
        }
        if it >= self.num_table_entries() {
            return Err(McError::illegal_argument(PROC, "Illegal table index."));
        }

        let nv = self.num_vertices_per_simplex();
        self.entries[it] = vec![0; nums * nv];
        Ok(())
    }

    /// Sets the `k`'th vertex of simplex `is` of entry `it` to `isov`.
    ///
    /// The stored index is not range-checked here; [`McTable::check`]
    /// detects indices outside the isosurface vertex array.
    pub fn set_simplex_vertex(&mut self, it: TableIndex, is: usize, k: usize, isov: IsoVertexIndex) {
        let nv = self.num_vertices_per_simplex();
        self.entries[it][is * nv + k] = isov;
    }

    /// Bulk-stores the simplex vertices of entry `it`.
    ///
    /// `simplex_vertices` holds `num_vertices_per_simplex` indices per
    /// simplex.
    pub fn set_simplex_vertices(
        &mut self,
        it: TableIndex,
        simplex_vertices: &[IsoVertexIndex],
    ) -> Result<()> {
        const PROC: &str = "McTable::set_simplex_vertices";

        let nv = self.num_vertices_per_simplex();
        if simplex_vertices.len() % nv != 0 {
            return Err(McError::illegal_argument(
                PROC,
                "Simplex vertex list length must be a multiple of the vertices per simplex.",
            ));
        }

        self.set_num_simplices(it, simplex_vertices.len() / nv)?;
        self.entries[it].copy_from_slice(simplex_vertices);
        Ok(())
    }

    // *** Copy functions ***

    /// Copies the polytope from `other`.
    pub fn copy_polytope(&mut self, other: &McTable) {
        self.polytope = other.polytope.clone();
    }

    /// Copies the isosurface vertices from `other`.
    pub fn copy_iso_vertices(&mut self, other: &McTable) {
        self.iso_vertices = other.iso_vertices.clone();
    }

    /// Copies the property record from `other`.
    pub fn copy_properties(&mut self, other: &McTable) {
        self.properties = other.properties;
    }

    /// Builds the canonical 3D cube polytope.
    pub fn gen_cube3d(&mut self) -> Result<()> {
        self.polytope.gen_cube3d()
    }

    // *** Process simplex orientations ***

    /// Sorts the vertices of simplex `is` of entry `it` ascending.
    ///
    /// Used to orient the initial simplex when setting the table
    /// orientation.
    pub fn sort_simplex_vertices(&mut self, it: TableIndex, is: usize) {
        let nv = self.num_vertices_per_simplex();
        self.entries[it][is * nv..(is + 1) * nv].sort_unstable();
    }

    /// Flips the orientation of simplex `is` of entry `it` by swapping its
    /// last two vertices.
    pub fn flip_iso_poly_orientation(&mut self, it: TableIndex, is: usize) {
        let nv = self.num_vertices_per_simplex();
        if nv < 2 {
            // Nothing to switch.
            return;
        }
        self.entries[it].swap(is * nv + nv - 2, is * nv + nv - 1);
    }

    /// Flips the orientation of every simplex of entry `it`.
    pub fn flip_all_iso_poly_orientations_in_entry(&mut self, it: TableIndex) {
        for is in 0..self.num_simplices(it) {
            self.flip_iso_poly_orientation(it, is);
        }
    }

    /// Flips the orientation of every simplex of every entry and reverses
    /// the orientation property.
    pub fn flip_all_iso_poly_orientations(&mut self) {
        for it in 0..self.num_table_entries() {
            self.flip_all_iso_poly_orientations_in_entry(it);
        }
        self.properties.iso_poly_orientation = self.properties.opposite_iso_poly_orientation();
    }

    /// Orients the simplices of entry `it` in the facet-connected
    /// component of simplex `istart` consistently with it.
    pub fn orient_simplices_in_entry(&mut self, it: TableIndex, istart: usize) {
        let nv = self.num_vertices_per_simplex();
        let mut is_oriented = vec![false; self.num_simplices(it)];
        simplex::orient_simplices(&mut self.entries[it], nv, istart, &mut is_oriented);
    }

    /// Consistently orients every connected component of entry `it`.
    ///
    /// The orientation of each component is arbitrary. Returns the number
    /// of components.
    pub fn orient_all_simplices_in_entry(&mut self, it: TableIndex) -> usize {
        let nv = self.num_vertices_per_simplex();
        simplex::orient_all_simplices(&mut self.entries[it], nv)
    }

    /// Returns the first inconsistently oriented simplex pair of entry
    /// `it`, or `None` if the entry is consistently oriented.
    #[must_use]
    pub fn find_inconsistently_oriented_pair(&self, it: TableIndex) -> Option<(usize, usize)> {
        simplex::find_inconsistently_oriented_pair(
            &self.entries[it],
            self.num_vertices_per_simplex(),
        )
    }

    // *** Check functions ***

    /// Returns an error if `it` is not a valid table index.
    pub fn check_table_index(&self, it: TableIndex) -> Result<()> {
        const PROC: &str = "McTable::check_table_index";

        if self.num_table_entries() == 0 {
            let mut report = Report::in_procedure(PROC);
            report.add("Programming error. No table entries.");
            report.add("  Call set_num_table_entries() to create table entries.");
            return Err(McError::InvariantViolation(report));
        }
        if it >= self.num_table_entries() {
            let mut report = Report::in_procedure(PROC);
            report.add(format!(
                "Programming error. Table index {it} out of bounds."
            ));
            report.add(format!(
                "  Number of table entries: {}",
                self.num_table_entries()
            ));
            report.add("  Table index must be less than number of table entries.");
            return Err(McError::IllegalArgument(report));
        }
        Ok(())
    }

    /// Verifies the whole table: the polytope, every entry, and every
    /// stored simplex-vertex index.
    pub fn check(&self) -> Result<()> {
        self.polytope.check()?;
        self.check_table()
    }

    fn check_table(&self) -> Result<()> {
        if self.polytope.num_vertices() >= MAX_POLY_VERTICES {
            return Err(McError::Consistency(
                Report::new().with("Too many polytope vertices"),
            ));
        }
        if self.polytope.num_vertices() < 1 {
            return Err(McError::Consistency(
                Report::new().with("Polytope must have at least one vertex."),
            ));
        }

        let nv = self.num_vertices_per_simplex();
        for (it, entry) in self.entries.iter().enumerate() {
            if entry.len() % nv != 0 {
                return Err(McError::Consistency(Report::new().with(format!(
                    "Error detected at isosurface table entry {it}: partial simplex."
                ))));
            }
        }

        for (it, entry) in self.entries.iter().enumerate() {
            for &iso_v in entry {
                if usize::from(iso_v) >= self.num_iso_vertices() {
                    return Err(McError::Consistency(Report::new().with(format!(
                        "Illegal isosurface vertex {iso_v} in isosurface table entry {it}."
                    ))));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{IsoPolyOrientation, SeparationKind};

    fn cube_table() -> McTable {
        let mut table = McTable::new();
        table.gen_cube3d().unwrap();
        table.set_encoding(Encoding::Binary);
        table.set_num_iso_vertices(12);
        table.store_poly_edges_as_iso_vertices(0).unwrap();
        table.set_num_table_entries(256);
        table
    }

    #[test]
    fn test_cube_table_shape() {
        let table = cube_table();
        assert_eq!(table.dimension(), 3);
        assert_eq!(table.simplex_dimension(), 2);
        assert!(!table.is_interval_volume());
        assert_eq!(table.num_vertices_per_simplex(), 3);
        assert_eq!(table.num_iso_vertices(), 12);
        assert_eq!(table.num_table_entries(), 256);
        assert_eq!(table.base(), 2);
        assert_eq!(table.negative_label_value(), 0);
        assert_eq!(table.positive_label_value(), 1);
        table.check().unwrap();
    }

    #[test]
    fn test_num_table_entries_helper() {
        assert_eq!(num_table_entries(8, 2).unwrap(), 256);
        assert_eq!(num_table_entries(8, 3).unwrap(), 6561);
    }

    #[test]
    fn test_iso_vertices_on_edges() {
        let table = cube_table();
        for ie in 0..12 {
            assert_eq!(
                table.iso_vertex(ie).site,
                IsoVertexSite::OnEdge(u8::try_from(ie).unwrap())
            );
            assert!(!table.iso_vertex(ie).is_label_set());
        }
    }

    #[test]
    fn test_store_iso_vertices_requires_room() {
        let mut table = McTable::new();
        table.gen_cube3d().unwrap();
        table.set_num_iso_vertices(4);
        assert!(table.store_poly_edges_as_iso_vertices(0).is_err());
        assert!(table.store_poly_facets_as_iso_vertices(2).is_err());

        table.set_num_iso_vertices(26);
        table.store_poly_vertices_as_iso_vertices(0).unwrap();
        table.store_poly_edges_as_iso_vertices(8).unwrap();
        table.store_poly_facets_as_iso_vertices(20).unwrap();
        assert_eq!(table.iso_vertex(8).site, IsoVertexSite::OnEdge(0));
        assert_eq!(table.iso_vertex(20).site, IsoVertexSite::OnFacet(0));
    }

    #[test]
    fn test_entry_write_and_read() {
        let mut table = cube_table();
        table.set_num_simplices(5, 2).unwrap();
        table.set_simplex_vertex(5, 0, 0, 0);
        table.set_simplex_vertex(5, 0, 1, 3);
        table.set_simplex_vertex(5, 0, 2, 8);
        table.set_simplex_vertex(5, 1, 0, 3);
        table.set_simplex_vertex(5, 1, 1, 2);
        table.set_simplex_vertex(5, 1, 2, 8);

        assert_eq!(table.num_simplices(5), 2);
        assert_eq!(table.simplex_vertex(5, 1, 1), 2);
        assert_eq!(table.simplex_vertices(5), &[0, 3, 8, 3, 2, 8]);
        assert_eq!(table.simplex_vertices_of(5, 1), &[3, 2, 8]);
        table.check().unwrap();
    }

    #[test]
    fn test_set_num_simplices_zero_frees_entry() {
        let mut table = cube_table();
        table.set_simplex_vertices(7, &[0, 1, 2]).unwrap();
        assert_eq!(table.num_simplices(7), 1);
        table.set_num_simplices(7, 0).unwrap();
        assert_eq!(table.num_simplices(7), 0);
        assert!(table.simplex_vertices(7).is_empty());
    }

    #[test]
    fn test_set_num_simplices_bounds() {
        let mut table = cube_table();
        assert!(table.set_num_simplices(256, 1).is_err());
        let mut empty = McTable::new();
        assert!(empty.set_num_simplices(0, 1).is_err());
    }

    #[test]
    fn test_check_detects_bad_simplex_vertex() {
        let mut table = cube_table();
        table.set_simplex_vertices(3, &[0, 1, 12]).unwrap();
        let err = table.check().unwrap_err();
        assert!(err.to_string().contains("Illegal isosurface vertex 12"));
    }

    #[test]
    fn test_vertex_labels_binary() {
        let table = cube_table();
        let digits = table.vertex_labels(85).unwrap();
        assert_eq!(digits, vec![1, 0, 1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_facet_vertex_labels_identical() {
        let table = cube_table();
        // Entries 1 and 17 differ only in the label of vertex 4, which
        // lies on facet 5 but not on facet 4.
        assert!(table.are_all_facet_vertex_labels_identical(1, 17, 4).unwrap());
        // They disagree on facet 5 (z-high, vertices {4,5,6,7}).
        assert!(!table.are_all_facet_vertex_labels_identical(1, 17, 5).unwrap());
        // An entry always agrees with itself.
        assert!(table.are_all_facet_vertex_labels_identical(99, 99, 0).unwrap());
    }

    #[test]
    fn test_flip_twice_is_identity() {
        let mut table = cube_table();
        table.set_simplex_vertices(5, &[0, 3, 8, 3, 2, 8]).unwrap();
        let before = table.simplex_vertices(5).to_vec();
        table.flip_all_iso_poly_orientations_in_entry(5);
        assert_eq!(table.simplex_vertices(5), &[0, 8, 3, 3, 8, 2]);
        table.flip_all_iso_poly_orientations_in_entry(5);
        assert_eq!(table.simplex_vertices(5), before.as_slice());
    }

    #[test]
    fn test_flip_all_toggles_orientation_property() {
        let mut table = cube_table();
        table.properties_mut().iso_poly_orientation = IsoPolyOrientation::PositiveOrient;
        table.flip_all_iso_poly_orientations();
        assert_eq!(
            table.properties().iso_poly_orientation,
            IsoPolyOrientation::NegativeOrient
        );
        table.flip_all_iso_poly_orientations();
        assert_eq!(
            table.properties().iso_poly_orientation,
            IsoPolyOrientation::PositiveOrient
        );
    }

    #[test]
    fn test_flip_empty_entry_is_noop() {
        let mut table = cube_table();
        table.flip_all_iso_poly_orientations_in_entry(0);
        assert_eq!(table.num_simplices(0), 0);
    }

    #[test]
    fn test_sort_simplex_vertices_idempotent() {
        let mut table = cube_table();
        table.set_simplex_vertices(9, &[8, 0, 3]).unwrap();
        table.sort_simplex_vertices(9, 0);
        assert_eq!(table.simplex_vertices_of(9, 0), &[0, 3, 8]);
        table.sort_simplex_vertices(9, 0);
        assert_eq!(table.simplex_vertices_of(9, 0), &[0, 3, 8]);
    }

    #[test]
    fn test_orient_entry_from_first_simplex() {
        let mut table = cube_table();
        table.set_simplex_vertices(20, &[0, 1, 2, 1, 2, 3]).unwrap();
        table.orient_simplices_in_entry(20, 0);
        assert_eq!(table.simplex_vertices(20), &[0, 1, 2, 1, 3, 2]);
        assert_eq!(table.find_inconsistently_oriented_pair(20), None);
    }

    #[test]
    fn test_properties_round_trip_through_table() {
        let mut table = cube_table();
        table.properties_mut().separation_kind = SeparationKind::SeparateNeg;
        assert_eq!(
            table.properties().opposite_separation_kind(),
            SeparationKind::SeparatePos
        );
    }
}
