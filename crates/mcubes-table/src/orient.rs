//! Orientation engine for Marching Cubes lookup tables.
//!
//! Individual entries of an assembled table may be oriented arbitrarily.
//! [`orient_mcube_table`] makes the whole table globally consistent: for
//! every pair of entries whose vertex labels agree on some polytope facet,
//! the simplices whose boundary facets meet on that polytope facet end up
//! with matching normal direction.
//!
//! Alignment works on per-simplex bitsets over isosurface vertices: which
//! vertices a simplex uses, which of its facets are boundary facets within
//! the entry, and the swap parity of each facet. Two simplices in the same
//! entry are consistent across a shared facet when their parities differ;
//! two simplices in different entries aligned through a polytope facet are
//! consistent when their parities agree.

use mcubes_core::{McError, Report, Result, VertexBitset};

use crate::isovertex::IsoVertexSite;
use crate::simplex;
use crate::table::{McTable, TableIndex};

/// Log progress every this many completed entries.
const OUTPUT_TRIGGER: usize = 64;

/// Orientation metadata of one simplex.
#[derive(Debug, Clone, Default)]
pub struct SimplexOrientInfo {
    /// Bit `iw` set iff isosurface vertex `iw` is in this simplex.
    pub in_simplex: VertexBitset,
    /// Bit `iw` set iff the facet omitting vertex `iw` appears in no other
    /// simplex of the entry. Meaningful only for vertices of the simplex.
    pub is_boundary_facet: VertexBitset,
    /// Bit `iw` holds the swap parity of the facet omitting vertex `iw`.
    /// Meaningful only for vertices of the simplex.
    pub facet_swap_parity: VertexBitset,
    component: usize,
}

impl SimplexOrientInfo {
    /// Index of the facet-connected component containing this simplex.
    #[must_use]
    pub fn component(&self) -> usize {
        self.component
    }

    /// Returns true if some facet of this simplex is a boundary facet.
    #[must_use]
    pub fn has_boundary_facet(&self) -> bool {
        self.is_boundary_facet.any()
    }
}

/// Which isosurface vertices lie in which polytope facet.
#[derive(Debug, Clone)]
pub struct FacetIsoVertices {
    num_iso_vertices: usize,
    in_facet: Vec<VertexBitset>,
}

impl FacetIsoVertices {
    /// Flags, for every polytope facet, the isosurface vertices lying in
    /// it: a vertex-sited iso vertex if its host vertex is in the facet,
    /// an edge-sited one if both edge endpoints are, a facet-sited one if
    /// it names the facet itself. Explicit points lie in no facet.
    #[must_use]
    pub fn new(table: &McTable) -> Self {
        let poly = table.polytope();
        let mut in_facet = vec![VertexBitset::EMPTY; poly.num_facets()];

        for (jf, bits) in in_facet.iter_mut().enumerate() {
            for iw in 0..table.num_iso_vertices() {
                let contained = match table.iso_vertex(iw).site {
                    IsoVertexSite::OnVertex(iv) => poly.is_vertex_in_facet(jf, usize::from(iv)),
                    IsoVertexSite::OnEdge(ie) => {
                        let ie = usize::from(ie);
                        poly.is_vertex_in_facet(jf, usize::from(poly.edge_endpoint(ie, 0)))
                            && poly.is_vertex_in_facet(jf, usize::from(poly.edge_endpoint(ie, 1)))
                    }
                    IsoVertexSite::OnFacet(kf) => usize::from(kf) == jf,
                    IsoVertexSite::AtPoint(_) => false,
                };
                if contained {
                    bits.set(iw);
                }
            }
        }

        Self {
            num_iso_vertices: table.num_iso_vertices(),
            in_facet,
        }
    }

    /// Number of polytope facets.
    #[must_use]
    pub fn num_facets(&self) -> usize {
        self.in_facet.len()
    }

    /// Number of isosurface vertices.
    #[must_use]
    pub fn num_iso_vertices(&self) -> usize {
        self.num_iso_vertices
    }

    /// Bitset of the isosurface vertices in facet `jf`.
    #[must_use]
    pub fn in_facet(&self, jf: usize) -> VertexBitset {
        self.in_facet[jf]
    }

    /// Returns true if every vertex flagged in `isov_bitset` lies in facet
    /// `jf`.
    #[must_use]
    pub fn are_vertices_in_facet(&self, isov_bitset: VertexBitset, jf: usize) -> bool {
        let shared = isov_bitset & self.in_facet[jf];
        (isov_bitset ^ shared).none()
    }
}

/// Orientation metadata of one table entry.
#[derive(Debug, Clone, Default)]
struct EntryOrientInfo {
    simplex_info: Vec<SimplexOrientInfo>,
    num_components: usize,
    /// Bit `ic` set iff facet-connected component `ic` is oriented.
    is_component_oriented: VertexBitset,
}

impl EntryOrientInfo {
    fn num_simplices(&self) -> usize {
        self.simplex_info.len()
    }

    fn num_oriented_components(&self) -> usize {
        self.is_component_oriented.count()
    }

    fn are_all_simplices_oriented(&self) -> bool {
        self.num_components == self.num_oriented_components()
    }

    fn is_simplex_oriented(&self, is: usize) -> bool {
        self.is_component_oriented.get(self.simplex_info[is].component)
    }
}

/// Result of comparing two simplices for a shared facet.
#[derive(Debug, Clone, Copy)]
struct SharedFacet {
    shared_vert: VertexBitset,
    num_shared_vertices: usize,
    /// True if the shared facet has the same swap parity in both
    /// simplices. For duplicate simplices, whole-parity-bitset equality.
    parities_equal: bool,
    not_in_facet_a: VertexBitset,
    not_in_facet_b: VertexBitset,
}

/// Per-entry, per-simplex orientation metadata over a lookup table.
#[derive(Debug, Clone)]
pub struct OrientInfo {
    num_vertices_per_simplex: usize,
    num_iso_vertices: usize,
    entries: Vec<EntryOrientInfo>,
    facet_info: FacetIsoVertices,
}

impl OrientInfo {
    /// Builds orientation metadata for every entry of `table`.
    #[must_use]
    pub fn new(table: &McTable) -> Self {
        let mut info = Self {
            num_vertices_per_simplex: table.num_vertices_per_simplex(),
            num_iso_vertices: table.num_iso_vertices(),
            entries: vec![EntryOrientInfo::default(); table.num_table_entries()],
            facet_info: FacetIsoVertices::new(table),
        };

        for it in 0..table.num_table_entries() {
            let num_simplices = table.num_simplices(it);
            info.entries[it].simplex_info = vec![SimplexOrientInfo::default(); num_simplices];

            info.flag_vertices_in_each_simplex(it, table);
            info.set_connected_component_indices(it, table);
            info.set_facet_swap_parities(it, table);
            info.flag_boundary_facets(it);
        }
        info
    }

    // *** Get routines ***

    /// Number of table entries.
    #[must_use]
    pub fn num_table_entries(&self) -> usize {
        self.entries.len()
    }

    /// Number of vertices per simplex.
    #[must_use]
    pub fn num_vertices_per_simplex(&self) -> usize {
        self.num_vertices_per_simplex
    }

    /// Number of vertices per simplex facet.
    #[must_use]
    pub fn num_vertices_per_simplex_facet(&self) -> usize {
        self.num_vertices_per_simplex - 1
    }

    /// Number of simplices in entry `it`.
    #[must_use]
    pub fn num_simplices(&self, it: TableIndex) -> usize {
        self.entries[it].num_simplices()
    }

    /// Orientation metadata of simplex `is` in entry `it`.
    #[must_use]
    pub fn simplex_info(&self, it: TableIndex, is: usize) -> &SimplexOrientInfo {
        &self.entries[it].simplex_info[is]
    }

    /// The facet membership bitsets.
    #[must_use]
    pub fn facet_info(&self) -> &FacetIsoVertices {
        &self.facet_info
    }

    /// Number of facet-connected components in entry `it`.
    #[must_use]
    pub fn num_connected_components(&self, it: TableIndex) -> usize {
        self.entries[it].num_components
    }

    /// Number of oriented components in entry `it`.
    #[must_use]
    pub fn num_oriented_components(&self, it: TableIndex) -> usize {
        self.entries[it].num_oriented_components()
    }

    /// Returns true if component `ic` of entry `it` is oriented.
    #[must_use]
    pub fn is_component_oriented(&self, it: TableIndex, ic: usize) -> bool {
        self.entries[it].is_component_oriented.get(ic)
    }

    /// Returns true if every component of entry `it` is oriented.
    #[must_use]
    pub fn are_all_simplices_oriented(&self, it: TableIndex) -> bool {
        self.entries[it].are_all_simplices_oriented()
    }

    /// Returns the first entry with an unoriented component, or `None` if
    /// all entries are oriented.
    #[must_use]
    pub fn find_unoriented_entry(&self) -> Option<TableIndex> {
        (0..self.num_table_entries()).find(|&it| !self.are_all_simplices_oriented(it))
    }

    /// Returns true if some simplex of component `ic` of entry `it` has a
    /// boundary facet.
    #[must_use]
    pub fn component_has_boundary_facet(&self, it: TableIndex, ic: usize) -> bool {
        self.entries[it]
            .simplex_info
            .iter()
            .any(|s| s.component == ic && s.has_boundary_facet())
    }

    /// Returns true if some simplex of entry `it` has a boundary facet.
    #[must_use]
    pub fn some_simplex_has_boundary_facet(&self, it: TableIndex) -> bool {
        self.entries[it]
            .simplex_info
            .iter()
            .any(SimplexOrientInfo::has_boundary_facet)
    }

    /// Finds a table entry with exactly one connected component that has
    /// at least one boundary facet. Such an entry seeds the cross-entry
    /// propagation.
    #[must_use]
    pub fn find_entry_with_single_component_with_boundary(&self) -> Option<TableIndex> {
        (0..self.num_table_entries()).find(|&it| {
            self.num_connected_components(it) == 1 && self.component_has_boundary_facet(it, 0)
        })
    }

    // *** Metadata construction ***

    fn flag_vertices_in_each_simplex(&mut self, it: TableIndex, table: &McTable) {
        for is in 0..self.entries[it].num_simplices() {
            let mut in_simplex = VertexBitset::EMPTY;
            for &jw in table.simplex_vertices_of(it, is) {
                in_simplex.set(usize::from(jw));
            }
            self.entries[it].simplex_info[is].in_simplex = in_simplex;
        }
    }

    fn set_connected_component_indices(&mut self, it: TableIndex, table: &McTable) {
        let (component, num_components) = simplex::facet_connected_components(
            table.simplex_vertices(it),
            self.num_vertices_per_simplex,
        );
        self.entries[it].num_components = num_components;
        for (is, &ic) in component.iter().enumerate() {
            self.entries[it].simplex_info[is].component = ic;
        }
    }

    /// Recomputes the facet swap parity bitset of simplex `is` from its
    /// current vertex order.
    fn set_simplex_facet_swap_parity(&mut self, it: TableIndex, is: usize, table: &McTable) {
        let simplex_vertices = table.simplex_vertices_of(it, is);
        let mut parity_bits = VertexBitset::EMPTY;

        for jloc in 0..self.num_vertices_per_simplex {
            let jw = simplex_vertices[jloc];
            if simplex::facet_swap_parity(simplex_vertices, jloc) == 1 {
                parity_bits.set(usize::from(jw));
            }
        }
        self.entries[it].simplex_info[is].facet_swap_parity = parity_bits;
    }

    fn set_facet_swap_parities(&mut self, it: TableIndex, table: &McTable) {
        for is in 0..self.entries[it].num_simplices() {
            self.set_simplex_facet_swap_parity(it, is, table);
        }
    }

    /// A facet is a boundary facet iff no other simplex of the entry
    /// contains it, detected by pairwise bitset comparison.
    fn flag_boundary_facets(&mut self, it: TableIndex) {
        let num_simplices = self.entries[it].num_simplices();
        for is_a in 0..num_simplices {
            let in_simplex_a = self.entries[it].simplex_info[is_a].in_simplex;

            // Start with every facet marked boundary.
            let mut is_boundary = in_simplex_a;

            for is_b in 0..num_simplices {
                if is_a == is_b {
                    continue;
                }
                let in_simplex_b = self.entries[it].simplex_info[is_b].in_simplex;
                let shared_vert = in_simplex_a & in_simplex_b;
                let num_shared = shared_vert.count();

                if num_shared == self.num_vertices_per_simplex {
                    // Duplicate simplex in the entry. Ignore simplex B.
                    continue;
                }
                if num_shared == self.num_vertices_per_simplex_facet() {
                    // Shared facet: not on the boundary.
                    let not_in_facet = in_simplex_a ^ shared_vert;
                    is_boundary &= !not_in_facet;
                }
            }
            self.entries[it].simplex_info[is_a].is_boundary_facet = is_boundary;
        }
    }

    // *** Shared facet queries ***

    /// Compares simplices `is_a` of entry `it_a` and `is_b` of entry
    /// `it_b`; `Some` if they share a facet (or are duplicates).
    fn shared_facet(
        &self,
        it_a: TableIndex,
        is_a: usize,
        it_b: TableIndex,
        is_b: usize,
    ) -> Option<SharedFacet> {
        let info_a = self.simplex_info(it_a, is_a);
        let info_b = self.simplex_info(it_b, is_b);

        let shared_vert = info_a.in_simplex & info_b.in_simplex;
        let num_shared_vertices = shared_vert.count();

        if num_shared_vertices == self.num_vertices_per_simplex {
            // Duplicate simplex.
            return Some(SharedFacet {
                shared_vert,
                num_shared_vertices,
                parities_equal: info_a.facet_swap_parity == info_b.facet_swap_parity,
                not_in_facet_a: VertexBitset::EMPTY,
                not_in_facet_b: VertexBitset::EMPTY,
            });
        }

        if num_shared_vertices == self.num_vertices_per_simplex_facet() {
            let not_in_facet_a = info_a.in_simplex ^ shared_vert;
            let not_in_facet_b = info_b.in_simplex ^ shared_vert;

            let parity_a = (not_in_facet_a & info_a.facet_swap_parity).none();
            let parity_b = (not_in_facet_b & info_b.facet_swap_parity).none();

            return Some(SharedFacet {
                shared_vert,
                num_shared_vertices,
                parities_equal: parity_a == parity_b,
                not_in_facet_a,
                not_in_facet_b,
            });
        }

        None
    }

    /// Like [`OrientInfo::shared_facet`], but requires the shared facet to
    /// be a boundary facet in both entries.
    fn shared_boundary_facet(
        &self,
        it_a: TableIndex,
        is_a: usize,
        it_b: TableIndex,
        is_b: usize,
    ) -> Option<SharedFacet> {
        let shared = self.shared_facet(it_a, is_a, it_b, is_b)?;

        let boundary_a = self.simplex_info(it_a, is_a).is_boundary_facet;
        let boundary_b = self.simplex_info(it_b, is_b).is_boundary_facet;

        if shared.num_shared_vertices == self.num_vertices_per_simplex {
            // Duplicate simplex: some facet must be boundary in both.
            if (boundary_a & boundary_b).none() {
                return None;
            }
            return Some(shared);
        }

        if (shared.not_in_facet_a & boundary_a).none() {
            // Shared facet is not a boundary facet in entry A.
            return None;
        }
        if (shared.not_in_facet_b & boundary_b).none() {
            // Shared facet is not a boundary facet in entry B.
            return None;
        }
        Some(shared)
    }

    // *** Orient routines ***

    /// Marks component `ic` of entry `it` oriented (or not).
    pub fn set_component_oriented(&mut self, it: TableIndex, ic: usize, flag: bool) {
        self.entries[it].is_component_oriented.assign(ic, flag);
    }

    /// Ors `oriented` into the component-oriented bitset of entry `it`.
    pub fn update_components_oriented(&mut self, it: TableIndex, oriented: VertexBitset) {
        self.entries[it].is_component_oriented |= oriented;
    }

    /// Orients all simplices in the connected component containing
    /// `is_start` consistently with it, modifying `table` and the stored
    /// swap parities.
    pub fn orient_connected_component(
        &mut self,
        it: TableIndex,
        is_start: usize,
        table: &mut McTable,
    ) {
        let num_simplices = self.num_simplices(it);
        let mut is_oriented = vec![false; num_simplices];
        let mut stack = Vec::new();

        is_oriented[is_start] = true;
        stack.push(is_start);

        while let Some(is_b) = stack.pop() {
            let component_b = self.simplex_info(it, is_b).component;

            for is_c in 0..num_simplices {
                if is_b == is_c || is_oriented[is_c] {
                    continue;
                }
                if self.simplex_info(it, is_c).component != component_b {
                    continue;
                }

                let Some(shared) = self.shared_facet(it, is_b, it, is_c) else {
                    continue;
                };
                if shared.parities_equal {
                    // Simplex C has the opposite orientation to simplex B.
                    table.flip_iso_poly_orientation(it, is_c);
                    self.set_simplex_facet_swap_parity(it, is_c, table);
                }

                is_oriented[is_c] = true;
                stack.push(is_c);
            }
        }
    }

    /// Consistently orients all simplices within each connected component
    /// of entry `it`. The orientation of each component is arbitrary.
    pub fn orient_all_simplices_in_entry(&mut self, it: TableIndex, table: &mut McTable) {
        let num_components = self.num_connected_components(it);
        let mut component_done = vec![false; num_components];

        for is in 0..self.num_simplices(it) {
            let ic = self.simplex_info(it, is).component;
            if !component_done[ic] {
                self.orient_connected_component(it, is, table);
                component_done[ic] = true;
            }
        }
    }

    /// Flips every simplex in component `ic` of entry `it`, recomputing
    /// the stored swap parities.
    pub fn flip_simplices_in_component(
        &mut self,
        it: TableIndex,
        ic: usize,
        table: &mut McTable,
    ) {
        for is in 0..self.num_simplices(it) {
            if self.simplex_info(it, is).component == ic {
                table.flip_iso_poly_orientation(it, is);
                self.set_simplex_facet_swap_parity(it, is, table);
            }
        }
    }

    /// Orients unoriented components of entry `it_b` from boundary facets
    /// of entry `it_a`.
    ///
    /// A shared boundary facet aligns the entries only if it lies in a
    /// polytope facet on which both table indices assign identical vertex
    /// labels. Components aligned with opposite parity are flipped; every
    /// aligned component is marked oriented.
    pub fn orient_two_table_entries(
        &mut self,
        it_a: TableIndex,
        it_b: TableIndex,
        table: &mut McTable,
    ) -> Result<()> {
        if self.are_all_simplices_oriented(it_b) {
            // Nothing left to orient.
            return Ok(());
        }

        for is_b in 0..self.num_simplices(it_b) {
            if self.entries[it_b].is_simplex_oriented(is_b) {
                continue;
            }

            'scan_a: for is_a in 0..self.num_simplices(it_a) {
                let Some(shared) = self.shared_boundary_facet(it_a, is_a, it_b, is_b) else {
                    continue;
                };

                for jf in 0..self.facet_info.num_facets() {
                    if !self.facet_info.are_vertices_in_facet(shared.shared_vert, jf) {
                        continue;
                    }
                    if !table.are_all_facet_vertex_labels_identical(it_a, it_b, jf)? {
                        continue;
                    }

                    let component_b = self.simplex_info(it_b, is_b).component;

                    if !shared.parities_equal {
                        // Opposite orientations: reverse component B.
                        self.flip_simplices_in_component(it_b, component_b, table);
                    }

                    self.set_component_oriented(it_b, component_b, true);

                    if self.are_all_simplices_oriented(it_b) {
                        return Ok(());
                    }
                    break 'scan_a;
                }
            }
        }

        Ok(())
    }

    // *** Check routines ***

    /// Verifies this metadata against `table`.
    pub fn check_against(&self, table: &McTable) -> Result<()> {
        let mut report = Report::new();

        if self.num_iso_vertices != table.num_iso_vertices() {
            report.add("Programming error. Incorrect value for num_iso_vertices().");
            return Err(McError::InvariantViolation(report));
        }
        if self.num_vertices_per_simplex != table.num_vertices_per_simplex() {
            report.add("Programming error. Incorrect value for num_vertices_per_simplex().");
            return Err(McError::InvariantViolation(report));
        }
        if self.num_table_entries() != table.num_table_entries() {
            report.add("Programming error. Incorrect value for num_table_entries().");
            return Err(McError::InvariantViolation(report));
        }

        for it in 0..table.num_table_entries() {
            if self.num_simplices(it) != table.num_simplices(it) {
                report.add(format!(
                    "Programming error. Incorrect number of simplices for table entry {it}."
                ));
                return Err(McError::InvariantViolation(report));
            }
            self.check_in_simplex_is_set(it)?;

            for is in 0..table.num_simplices(it) {
                for &iw in table.simplex_vertices_of(it, is) {
                    if !self.simplex_info(it, is).in_simplex.get(usize::from(iw)) {
                        report.add(format!(
                            "Programming error. Missing isosurface vertex {iw} in table entry {it}, simplex {is}."
                        ));
                        return Err(McError::InvariantViolation(report));
                    }
                }
            }
        }

        Ok(())
    }

    /// Verifies that every `in_simplex` bitset flags exactly one bit per
    /// simplex vertex.
    fn check_in_simplex_is_set(&self, it: TableIndex) -> Result<()> {
        for is in 0..self.num_simplices(it) {
            let num_ones = self.simplex_info(it, is).in_simplex.count();
            if num_ones != self.num_vertices_per_simplex {
                let mut report = Report::new();
                if num_ones == 0 {
                    report.add("Programming error. Bitset in_simplex not set.");
                    report.add(format!("  Table index: {it}  Simplex: {is}"));
                } else {
                    report.add("Programming error. Incorrect number of ones in bitset in_simplex.");
                    report.add(format!("  Table index: {it}  Simplex: {is}"));
                    report.add(format!("  Bitset in_simplex has {num_ones} ones."));
                    report.add(format!(
                        "  Number of ones should match number of simplex vertices, {}.",
                        self.num_vertices_per_simplex
                    ));
                }
                return Err(McError::InvariantViolation(report));
            }
        }
        Ok(())
    }

    /// Verifies that all simplex pairs within entry `it` are consistently
    /// oriented.
    pub fn check_orientations_in_table_entry(&self, it: TableIndex) -> Result<()> {
        let num_simplices = self.num_simplices(it);
        for is_a in 0..num_simplices {
            for is_b in is_a + 1..num_simplices {
                let Some(shared) = self.shared_facet(it, is_a, it, is_b) else {
                    continue;
                };
                if shared.parities_equal {
                    // Simplex B has the opposite orientation to simplex A.
                    let mut report = Report::new();
                    report.add(format!(
                        "Simplices {is_a} and {is_b} in table entry {it} are not consistently oriented."
                    ));
                    return Err(McError::Consistency(report));
                }
            }
        }
        Ok(())
    }

    /// Verifies local orientation consistency of every table entry.
    ///
    /// Does not compare simplices in different entries.
    pub fn check_orientations_in_every_table_entry(&self) -> Result<()> {
        if self.num_vertices_per_simplex < 2 {
            // Nothing to check.
            return Ok(());
        }
        for it in 0..self.num_table_entries() {
            self.check_orientations_in_table_entry(it)?;
        }
        Ok(())
    }

    /// Verifies that the orientations of entry `it_b` are consistent with
    /// the orientations of entry `it_a` wherever the two align through a
    /// polytope facet.
    ///
    /// Returns the bitset of components of `it_b` that were aligned with
    /// some boundary facet of `it_a`.
    pub fn check_orientations_of_two_table_entries(
        &self,
        table: &McTable,
        it_a: TableIndex,
        it_b: TableIndex,
    ) -> Result<VertexBitset> {
        let mut component_b_checked = VertexBitset::EMPTY;

        for is_b in 0..self.num_simplices(it_b) {
            let component_b = self.simplex_info(it_b, is_b).component;
            if component_b_checked.get(component_b) {
                // Some simplex of this component was already aligned.
                continue;
            }

            'scan_a: for is_a in 0..self.num_simplices(it_a) {
                let Some(shared) = self.shared_boundary_facet(it_a, is_a, it_b, is_b) else {
                    continue;
                };

                for jf in 0..self.facet_info.num_facets() {
                    if !self.facet_info.are_vertices_in_facet(shared.shared_vert, jf) {
                        continue;
                    }
                    if !table.are_all_facet_vertex_labels_identical(it_a, it_b, jf)? {
                        continue;
                    }

                    if !shared.parities_equal {
                        let mut report = Report::new();
                        report.add(format!(
                            "  Simplex {is_a} in table entry {it_a} has inconsistent orientation"
                        ));
                        report.add(format!(
                            "  with simplex {is_b} in table entry {it_b}."
                        ));
                        return Err(McError::Consistency(report));
                    }

                    component_b_checked.set(component_b);
                    break 'scan_a;
                }
            }
        }

        Ok(component_b_checked)
    }

    /// Verifies entry `it_a` against every other table entry.
    pub fn check_orientation_of_table_entry_against_all_others(
        &self,
        table: &McTable,
        it_a: TableIndex,
    ) -> Result<()> {
        for it in 0..self.num_table_entries() {
            if it == it_a {
                continue;
            }
            self.check_orientations_of_two_table_entries(table, it_a, it)?;
        }
        Ok(())
    }
}

/// Verifies that the starting entry has at least one simplex and exactly
/// one connected component.
fn check_starting_table_entry(
    table: &McTable,
    info: &OrientInfo,
    istart: TableIndex,
) -> Result<()> {
    let mut report = Report::new();

    if table.num_simplices(istart) < 1 {
        report.add(format!(
            "Programming error. Marching Cubes lookup table entry {istart} has no simplices."
        ));
        report.add("  Table index must have at least one simplex to orient MC table.");
        return Err(McError::IllegalArgument(report));
    }

    let numc = info.num_connected_components(istart);
    if numc != 1 {
        report.add(format!(
            "Programming error. Marching Cubes table entry {istart} has {numc} connected components."
        ));
        report.add("  Routine must start from table entry with exactly one connected component.");
        return Err(McError::IllegalArgument(report));
    }

    Ok(())
}

/// Orients the simplex lists of `table` globally consistently, starting
/// from entry `istart`.
///
/// `istart` must hold exactly one connected component with at least one
/// boundary facet; all other entries are aligned to it by propagation
/// across agreeing polytope facets. Closed components (no boundary facet)
/// have nothing to align against and are accepted as already oriented.
/// Entries left unoriented by the propagation are reported through
/// `log::warn!`; the caller decides whether to proceed.
pub fn orient_mcube_table(table: &mut McTable, istart: TableIndex) -> Result<()> {
    let mut info = OrientInfo::new(table);

    if info.num_vertices_per_simplex() < 2 {
        // Nothing to orient.
        return Ok(());
    }

    table.check_table_index(istart)?;

    for it in 0..table.num_table_entries() {
        info.orient_all_simplices_in_entry(it, table);
    }

    check_starting_table_entry(table, &info, istart)?;

    let mut num_completed = 1;

    // Mark closed components as oriented: nothing to align them against.
    for it in 0..info.num_table_entries() {
        for ic in 0..info.num_connected_components(it) {
            if !info.component_has_boundary_facet(it, ic) {
                info.set_component_oriented(it, ic, true);
                if info.are_all_simplices_oriented(it) {
                    num_completed += 1;
                }
            }
        }
    }

    // Worklist of entries that still need orientation.
    let mut unoriented: Vec<TableIndex> = (0..info.num_table_entries())
        .filter(|&it| it != istart && !info.are_all_simplices_oriented(it))
        .collect();

    // Oriented entries with a single component propagate further; entries
    // with multiple components are kept on a second stack.
    let mut stack_single: Vec<TableIndex> = Vec::new();
    let mut stack_multi: Vec<TableIndex> = Vec::new();

    let ic = info.simplex_info(istart, 0).component;
    info.set_component_oriented(istart, ic, true);
    stack_single.push(istart);

    while let Some(it_a) = stack_single.pop() {
        drain_worklist(
            table,
            &mut info,
            it_a,
            &mut unoriented,
            &mut stack_single,
            &mut stack_multi,
            &mut num_completed,
        )?;
    }

    if !unoriented.is_empty() {
        // Try using the multi-component entries to orient the rest.
        while let Some(it_a) = stack_multi.pop() {
            let mut dummy_single = Vec::new();
            drain_worklist(
                table,
                &mut info,
                it_a,
                &mut unoriented,
                &mut dummy_single,
                &mut stack_multi,
                &mut num_completed,
            )?;
            stack_multi.extend(dummy_single);
        }
    }

    match info.find_unoriented_entry() {
        None => {
            log::debug!("completed orientation of all isosurface table entries");
        }
        Some(it) => {
            log::warn!("unable to determine orientation for table index {it}");
        }
    }

    Ok(())
}

/// One pass of `it_a` against the unoriented worklist.
#[allow(clippy::too_many_arguments)]
fn drain_worklist(
    table: &mut McTable,
    info: &mut OrientInfo,
    it_a: TableIndex,
    unoriented: &mut Vec<TableIndex>,
    stack_single: &mut Vec<TableIndex>,
    stack_multi: &mut Vec<TableIndex>,
    num_completed: &mut usize,
) -> Result<()> {
    let mut j = 0;
    while j < unoriented.len() {
        let it_b = unoriented[j];

        if info.are_all_simplices_oriented(it_b)
            || it_a == it_b
            || table.num_simplices(it_b) == 0
        {
            // None of these should happen, but just in case.
            unoriented.swap_remove(j);
            continue;
        }

        info.orient_two_table_entries(it_a, it_b, table)?;

        if info.are_all_simplices_oriented(it_b) {
            if info.num_connected_components(it_b) == 1 {
                stack_single.push(it_b);
            } else {
                stack_multi.push(it_b);
            }
            unoriented.swap_remove(j);

            *num_completed += 1;
            if *num_completed % OUTPUT_TRIGGER == 0 {
                log::debug!(
                    "completed orientation of {num_completed} isosurface table entries"
                );
            }
            continue;
        }

        j += 1;
    }
    Ok(())
}

/// Verifies that the simplex lists of `table` are globally consistently
/// oriented.
///
/// Checks per-entry consistency first. The fast pass then traverses the
/// entry graph from a seed entry, skipping entries once all their
/// components have matched some other entry; with `check_all_pairs` every
/// pair of entries is compared instead (slow, for auditing).
pub fn check_mcube_table_orientation(table: &McTable, check_all_pairs: bool) -> Result<()> {
    let info = OrientInfo::new(table);

    if info.num_vertices_per_simplex() < 2 {
        // Nothing to check.
        return Ok(());
    }

    info.check_orientations_in_every_table_entry()?;
    log::debug!("all table entries have internal orientation consistency");

    if check_all_pairs {
        for it_a in 0..table.num_table_entries() {
            for it_b in it_a + 1..table.num_table_entries() {
                info.check_orientations_of_two_table_entries(table, it_a, it_b)?;
            }
        }
        return Ok(());
    }

    check_orientation_by_traversal(table, info)
}

fn check_orientation_by_traversal(table: &McTable, mut info: OrientInfo) -> Result<()> {
    let Some(istart) = info.find_entry_with_single_component_with_boundary() else {
        let mut report = Report::new();
        report.add("No table entries with single connected component");
        report.add("  where connected component has a boundary.");
        return Err(McError::Consistency(report));
    };

    let mut num_checked = 1;
    let ic = info.simplex_info(istart, 0).component;
    info.set_component_oriented(istart, ic, true);

    let mut stack = vec![istart];
    while let Some(it_a) = stack.pop() {
        for it_b in 0..table.num_table_entries() {
            if info.are_all_simplices_oriented(it_b) {
                // Entry B has already been checked.
                continue;
            }

            let component_b_checked =
                info.check_orientations_of_two_table_entries(table, it_a, it_b)?;
            info.update_components_oriented(it_b, component_b_checked);

            if info.are_all_simplices_oriented(it_b) {
                if info.num_connected_components(it_b) == 1 {
                    stack.push(it_b);
                }
                num_checked += 1;
                if num_checked % OUTPUT_TRIGGER == 0 {
                    log::debug!(
                        "checked {num_checked} of {} isosurface table entry orientations",
                        table.num_table_entries()
                    );
                }
            }
        }
    }

    // Entries the traversal never reached are checked against all others.
    for it in 0..info.num_table_entries() {
        if info.are_all_simplices_oriented(it) {
            continue;
        }
        if !info.some_simplex_has_boundary_facet(it) {
            // Closed components: nothing to check against other entries.
            continue;
        }
        info.check_orientation_of_table_entry_against_all_others(table, it)?;
        num_checked += 1;
    }

    log::debug!(
        "checked orientations on all {} isosurface table entries",
        table.num_table_entries()
    );
    Ok(())
}
