//! Half-edge extension of the 3D polytope.
//!
//! For edge `e` directed from endpoint 0 to endpoint 1 the forward half
//! edge has index `2e`; the reverse half edge has index `2e+1`. Each facet
//! traverses a cycle of half edges; `next`/`prev` link the cycle. Facet
//! cycles are derived from edge membership, so they do not depend on the
//! order in which facet vertex lists are stored, and the two facets meeting
//! at an edge always use opposite half edges.

use mcubes_core::{McError, Report, Result};

use crate::polytope::Polytope;

/// Index of a directed polytope edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HalfEdge(u8);

impl HalfEdge {
    /// Forward half edge of edge `ie` (endpoint 0 to endpoint 1).
    #[must_use]
    pub fn forward(ie: usize) -> Self {
        Self(u8::try_from(2 * ie).expect("half-edge index fits in u8"))
    }

    /// Reverse half edge of edge `ie` (endpoint 1 to endpoint 0).
    #[must_use]
    pub fn reverse(ie: usize) -> Self {
        Self(u8::try_from(2 * ie + 1).expect("half-edge index fits in u8"))
    }

    /// Half-edge index in `[0, 2*num_edges)`.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Index of the underlying undirected edge.
    #[must_use]
    pub fn edge_index(self) -> usize {
        usize::from(self.0) / 2
    }

    /// Returns true if this is the reverse half edge of its edge.
    #[must_use]
    pub fn is_reversed(self) -> bool {
        self.0 % 2 == 1
    }

    /// The oppositely directed half edge of the same edge.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Origin vertex of this half edge in `poly`.
    #[must_use]
    pub fn from_vertex(self, poly: &Polytope) -> u8 {
        poly.edge_endpoint(self.edge_index(), usize::from(self.is_reversed()))
    }

    /// Destination vertex of this half edge in `poly`.
    #[must_use]
    pub fn to_vertex(self, poly: &Polytope) -> u8 {
        poly.edge_endpoint(self.edge_index(), usize::from(!self.is_reversed()))
    }
}

/// 3D polytope with next/prev half-edge links within each facet.
#[derive(Debug, Clone)]
pub struct HalfEdgePoly3 {
    poly: Polytope,
    next_in_facet: Vec<HalfEdge>,
    prev_in_facet: Vec<HalfEdge>,
    facet_of: Vec<u8>,
}

impl HalfEdgePoly3 {
    /// Builds the half-edge structure over `poly`.
    ///
    /// Fails if the polytope is not 3-dimensional, or if some facet's edges
    /// do not form a single cycle through all its vertices (the polytope
    /// boundary must be a closed surface).
    pub fn from_polytope(poly: Polytope) -> Result<Self> {
        const PROC: &str = "HalfEdgePoly3::from_polytope";

        if poly.dimension() != 3 {
            return Err(McError::illegal_argument(
                PROC,
                "Polytope dimension must be 3.",
            ));
        }
        if poly.num_edges() < 1 {
            return Err(McError::invariant(
                PROC,
                "Number of polytope edges not set.",
            ));
        }
        poly.check()?;

        let num_half_edges = 2 * poly.num_edges();
        let mut next_in_facet = vec![HalfEdge::default(); num_half_edges];
        let mut prev_in_facet = vec![HalfEdge::default(); num_half_edges];
        let mut facet_of = vec![u8::MAX; num_half_edges];

        let cycles = facet_cycles(&poly)?;
        let oriented = orient_facet_cycles(cycles);

        for (jf, cycle) in oriented.iter().enumerate() {
            let half_edges: Vec<HalfEdge> = cycle
                .iter()
                .map(|&(ie, reversed)| {
                    if reversed {
                        HalfEdge::reverse(usize::from(ie))
                    } else {
                        HalfEdge::forward(usize::from(ie))
                    }
                })
                .collect();

            for (k, &h) in half_edges.iter().enumerate() {
                if facet_of[h.index()] != u8::MAX {
                    let mut report = Report::in_procedure(PROC);
                    report.add(format!(
                        "Half edge {} is traversed by facets {} and {jf}.",
                        h.index(),
                        facet_of[h.index()]
                    ));
                    report.add("  Polytope boundary is not an orientable closed surface.");
                    return Err(McError::Consistency(report));
                }
                facet_of[h.index()] = u8::try_from(jf).expect("facet index fits in u8");
                let h_next = half_edges[(k + 1) % half_edges.len()];
                next_in_facet[h.index()] = h_next;
                prev_in_facet[h_next.index()] = h;
            }
        }

        Ok(Self {
            poly,
            next_in_facet,
            prev_in_facet,
            facet_of,
        })
    }

    /// The underlying polytope.
    #[must_use]
    pub fn polytope(&self) -> &Polytope {
        &self.poly
    }

    /// Next half edge within the containing facet.
    #[must_use]
    pub fn next_half_edge_in_facet(&self, h: HalfEdge) -> HalfEdge {
        self.next_in_facet[h.index()]
    }

    /// Previous half edge within the containing facet.
    #[must_use]
    pub fn prev_half_edge_in_facet(&self, h: HalfEdge) -> HalfEdge {
        self.prev_in_facet[h.index()]
    }

    /// Facet traversed by half edge `h`.
    #[must_use]
    pub fn facet_of(&self, h: HalfEdge) -> usize {
        usize::from(self.facet_of[h.index()])
    }

    /// Verifies the half-edge links.
    ///
    /// Checks that next and prev are inverses, that following a half edge
    /// stays inside one facet, and that each facet cycle is as long as its
    /// vertex count.
    pub fn check(&self) -> Result<()> {
        self.poly.check()?;

        for i in 0..self.next_in_facet.len() {
            let h = if i % 2 == 0 {
                HalfEdge::forward(i / 2)
            } else {
                HalfEdge::reverse(i / 2)
            };
            let next = self.next_half_edge_in_facet(h);
            if self.prev_half_edge_in_facet(next) != h {
                return Err(McError::Consistency(Report::new().with(format!(
                    "Half edge {} is not the prev of its next half edge.",
                    h.index()
                ))));
            }
            if self.facet_of(h) != self.facet_of(next) {
                return Err(McError::Consistency(Report::new().with(format!(
                    "Half edge {} and its next lie in different facets.",
                    h.index()
                ))));
            }
            if next.from_vertex(&self.poly) != h.to_vertex(&self.poly) {
                return Err(McError::Consistency(Report::new().with(format!(
                    "Half edge {} does not end where its next begins.",
                    h.index()
                ))));
            }
        }

        for jf in 0..self.poly.num_facets() {
            let cycle_len = self.facet_of.iter().filter(|&&f| usize::from(f) == jf).count();
            if cycle_len != self.poly.num_facet_vertices(jf) {
                return Err(McError::Consistency(Report::new().with(format!(
                    "Facet {jf} cycle has {cycle_len} half edges but {} vertices.",
                    self.poly.num_facet_vertices(jf)
                ))));
            }
        }

        Ok(())
    }
}

/// Undirected facet boundary cycles, one per facet.
///
/// Each cycle is a list of `(edge, reversed)` steps; the starting vertex
/// and winding direction are arbitrary at this stage.
fn facet_cycles(poly: &Polytope) -> Result<Vec<Vec<(u8, bool)>>> {
    const PROC: &str = "HalfEdgePoly3::from_polytope";

    let mut cycles = Vec::with_capacity(poly.num_facets());
    for jf in 0..poly.num_facets() {
        let bitset = poly.facet_vertex_bitset(jf);
        let facet_edges: Vec<usize> = (0..poly.num_edges())
            .filter(|&ie| {
                bitset.get(usize::from(poly.edge_endpoint(ie, 0)))
                    && bitset.get(usize::from(poly.edge_endpoint(ie, 1)))
            })
            .collect();

        if facet_edges.len() != poly.num_facet_vertices(jf) {
            let mut report = Report::in_procedure(PROC);
            report.add(format!(
                "Facet {jf} has {} vertices but {} boundary edges.",
                poly.num_facet_vertices(jf),
                facet_edges.len()
            ));
            return Err(McError::Consistency(report));
        }

        // Walk the cycle starting from the lowest-indexed facet edge.
        let mut cycle: Vec<(u8, bool)> = Vec::with_capacity(facet_edges.len());
        let first = facet_edges[0];
        let start = poly.edge_endpoint(first, 0);
        let mut at = poly.edge_endpoint(first, 1);
        cycle.push((u8::try_from(first).expect("edge index fits in u8"), false));
        let mut used = vec![false; poly.num_edges()];
        used[first] = true;

        while at != start {
            let Some(&ie) = facet_edges.iter().find(|&&ie| {
                !used[ie]
                    && (poly.edge_endpoint(ie, 0) == at || poly.edge_endpoint(ie, 1) == at)
            }) else {
                let mut report = Report::in_procedure(PROC);
                report.add(format!("Facet {jf} boundary edges do not form a cycle."));
                return Err(McError::Consistency(report));
            };
            let reversed = poly.edge_endpoint(ie, 0) != at;
            at = poly.edge_endpoint(ie, usize::from(!reversed));
            used[ie] = true;
            cycle.push((u8::try_from(ie).expect("edge index fits in u8"), reversed));
        }

        if cycle.len() != facet_edges.len() {
            let mut report = Report::in_procedure(PROC);
            report.add(format!("Facet {jf} boundary edges form more than one cycle."));
            return Err(McError::Consistency(report));
        }

        cycles.push(cycle);
    }
    Ok(cycles)
}

/// Flips facet cycles so that the two facets meeting at each edge traverse
/// it in opposite directions.
///
/// Standard orientation propagation over the facet adjacency graph; for a
/// connected closed surface one pass from facet 0 suffices.
fn orient_facet_cycles(mut cycles: Vec<Vec<(u8, bool)>>) -> Vec<Vec<(u8, bool)>> {
    let num_facets = cycles.len();
    let mut oriented = vec![false; num_facets];
    let mut stack = Vec::new();

    for seed in 0..num_facets {
        if oriented[seed] {
            continue;
        }
        oriented[seed] = true;
        stack.push(seed);

        while let Some(jf) = stack.pop() {
            for jg in 0..num_facets {
                if oriented[jg] {
                    continue;
                }
                let Some(same_direction) = shared_edge_direction(&cycles[jf], &cycles[jg]) else {
                    continue;
                };
                if same_direction {
                    flip_cycle(&mut cycles[jg]);
                }
                oriented[jg] = true;
                stack.push(jg);
            }
        }
    }

    cycles
}

/// If the two cycles share an edge, returns whether both traverse it in
/// the same direction.
fn shared_edge_direction(a: &[(u8, bool)], b: &[(u8, bool)]) -> Option<bool> {
    for &(ie, rev_a) in a {
        for &(je, rev_b) in b {
            if ie == je {
                return Some(rev_a == rev_b);
            }
        }
    }
    None
}

/// Reverses a cycle in place, flipping each step's direction.
fn flip_cycle(cycle: &mut Vec<(u8, bool)>) {
    cycle.reverse();
    for step in cycle.iter_mut() {
        step.1 = !step.1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_half_edge() -> HalfEdgePoly3 {
        let mut poly = Polytope::new(3);
        poly.gen_cube3d().unwrap();
        HalfEdgePoly3::from_polytope(poly).unwrap()
    }

    #[test]
    fn test_half_edge_index_arithmetic() {
        let h = HalfEdge::forward(5);
        assert_eq!(h.index(), 10);
        assert_eq!(h.edge_index(), 5);
        assert!(!h.is_reversed());
        let r = h.opposite();
        assert_eq!(r.index(), 11);
        assert!(r.is_reversed());
        assert_eq!(r.opposite(), h);
    }

    #[test]
    fn test_half_edge_endpoints() {
        let mut poly = Polytope::new(3);
        poly.gen_cube3d().unwrap();
        // Edge 0 is (0,1).
        assert_eq!(HalfEdge::forward(0).from_vertex(&poly), 0);
        assert_eq!(HalfEdge::forward(0).to_vertex(&poly), 1);
        assert_eq!(HalfEdge::reverse(0).from_vertex(&poly), 1);
        assert_eq!(HalfEdge::reverse(0).to_vertex(&poly), 0);
    }

    #[test]
    fn test_cube_half_edge_links() {
        let he = cube_half_edge();
        he.check().unwrap();

        // Every facet of the cube is a quad: next^4 is the identity.
        for ie in 0..12 {
            for h in [HalfEdge::forward(ie), HalfEdge::reverse(ie)] {
                let mut walk = h;
                for _ in 0..4 {
                    walk = he.next_half_edge_in_facet(walk);
                }
                assert_eq!(walk, h);
            }
        }
    }

    #[test]
    fn test_cube_facets_use_opposite_half_edges() {
        let he = cube_half_edge();
        for ie in 0..12 {
            let f = he.facet_of(HalfEdge::forward(ie));
            let r = he.facet_of(HalfEdge::reverse(ie));
            assert_ne!(f, r);
        }
    }

    #[test]
    fn test_prev_inverts_next() {
        let he = cube_half_edge();
        for ie in 0..12 {
            for h in [HalfEdge::forward(ie), HalfEdge::reverse(ie)] {
                assert_eq!(he.prev_half_edge_in_facet(he.next_half_edge_in_facet(h)), h);
            }
        }
    }

    #[test]
    fn test_requires_dimension_3() {
        let mut poly = Polytope::new(2);
        poly.set_size(3, 3, 3).unwrap();
        assert!(HalfEdgePoly3::from_polytope(poly).is_err());
    }
}
