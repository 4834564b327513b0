//! Pure operations on simplex vertex lists.
//!
//! A simplex list is a flat slice of isosurface-vertex indices: simplex
//! `js` occupies `list[js*nv .. (js+1)*nv]` where `nv` is the number of
//! vertices per simplex. The order of vertices within a simplex encodes
//! its orientation; swapping the last two vertices flips it.
//!
//! The canonical form of a simplex facet moves the omitted vertex to the
//! last position and sorts the rest ascending, recording the parity of the
//! adjacent transpositions this takes. Two simplices are consistently
//! oriented across a shared facet iff the facet's swap parities differ.

use mcubes_core::UnionFind;

/// Largest simplex handled: a tetrahedron (interval-volume tables).
const MAX_VERTICES_PER_SIMPLEX: usize = 4;

/// Sorts the facet of `simplex` opposite `simplex[iloc]` into `out`.
///
/// `out` receives the facet vertices ascending followed by `simplex[iloc]`
/// in the last slot. Returns the swap parity (0 = even, 1 = odd) of the
/// rearrangement.
pub fn sort_simplex_facet_vertices(simplex: &[u8], iloc: usize, out: &mut [u8]) -> u8 {
    let nv = simplex.len();
    if nv <= 1 {
        // Nothing to sort.
        return 0;
    }

    out[nv - 1] = simplex[iloc];
    let mut swap_parity = u8::from((nv + 1 - iloc) % 2 == 1);

    // Insertion sort the facet vertices.
    let mut i1 = 0;
    for i0 in 0..nv {
        if i0 == iloc {
            continue;
        }
        let iv0 = simplex[i0];
        out[i1] = iv0;

        let mut i2 = i1;
        while i2 > 0 && out[i2 - 1] > iv0 {
            out.swap(i2, i2 - 1);
            i2 -= 1;
            swap_parity ^= 1;
        }
        i1 += 1;
    }

    swap_parity
}

/// Swap parity of the facet of `simplex` opposite `simplex[iloc]`.
#[must_use]
pub fn facet_swap_parity(simplex: &[u8], iloc: usize) -> u8 {
    debug_assert!(simplex.len() <= MAX_VERTICES_PER_SIMPLEX);
    let mut sorted = [0_u8; MAX_VERTICES_PER_SIMPLEX];
    sort_simplex_facet_vertices(simplex, iloc, &mut sorted[..simplex.len()])
}

/// Returns the location of the vertex of `simplex` not in `facet`, if the
/// simplex contains the facet.
///
/// `facet` is a canonicalized facet: its first `nv - 1` entries are the
/// facet vertices. Containment is unordered.
#[must_use]
pub fn simplex_contains_facet(simplex: &[u8], facet: &[u8]) -> Option<usize> {
    let nv = simplex.len();
    debug_assert!(nv <= MAX_VERTICES_PER_SIMPLEX);
    let mut matched = [false; MAX_VERTICES_PER_SIMPLEX];
    let mut num_matched = 0;

    for i in 0..nv - 1 {
        for j in 0..nv {
            if facet[i] == simplex[j] && !matched[j] {
                matched[j] = true;
                num_matched += 1;
                break;
            }
        }
    }

    if num_matched + 1 == nv {
        let jloc = (0..nv).find(|&j| !matched[j]);
        debug_assert!(jloc.is_some(), "exactly one simplex vertex is unmatched");
        jloc
    } else {
        None
    }
}

/// Returns `(iloc_a, iloc_b)` if simplices `a` and `b` share a facet:
/// the locations of the vertex not in the shared facet in each simplex.
#[must_use]
pub fn simplices_share_facet(a: &[u8], b: &[u8]) -> Option<(usize, usize)> {
    let nv = a.len();
    let mut sorted = [0_u8; MAX_VERTICES_PER_SIMPLEX];

    for iloc_a in 0..nv {
        sort_simplex_facet_vertices(a, iloc_a, &mut sorted[..nv]);
        if let Some(iloc_b) = simplex_contains_facet(b, &sorted[..nv]) {
            return Some((iloc_a, iloc_b));
        }
    }
    None
}

/// Two-pointer intersection test over pre-sorted simplex vertex lists.
///
/// Returns a shared vertex if any.
#[must_use]
pub fn sorted_simplices_share_vertex(a: &[u8], b: &[u8]) -> Option<u8> {
    let mut ia = 0;
    let mut ib = 0;
    while ia < a.len() && ib < b.len() {
        match a[ia].cmp(&b[ib]) {
            std::cmp::Ordering::Less => ia += 1,
            std::cmp::Ordering::Greater => ib += 1,
            std::cmp::Ordering::Equal => return Some(a[ia]),
        }
    }
    None
}

/// Returns true if the facet of simplex `isimplex` opposite location
/// `iloc` appears in no other simplex of `list`.
#[must_use]
pub fn is_simplex_facet_a_boundary_facet(
    list: &[u8],
    nv: usize,
    isimplex: usize,
    iloc: usize,
) -> bool {
    let num_simplices = list.len() / nv;
    debug_assert!(isimplex < num_simplices);
    debug_assert!(iloc < nv);

    let mut sorted = [0_u8; MAX_VERTICES_PER_SIMPLEX];
    sort_simplex_facet_vertices(&list[isimplex * nv..(isimplex + 1) * nv], iloc, &mut sorted[..nv]);

    for js in 0..num_simplices {
        if js == isimplex {
            continue;
        }
        if simplex_contains_facet(&list[js * nv..(js + 1) * nv], &sorted[..nv]).is_some() {
            return false;
        }
    }
    true
}

/// Boundary facets of a simplex list, in canonical sorted form.
#[derive(Debug, Clone, Default)]
pub struct BoundaryFacets {
    /// Facet vertex lists, `nv - 1` entries per facet, concatenated.
    pub facet_vertices: Vec<u8>,
    /// The simplex contributing each facet.
    pub containing_simplex: Vec<usize>,
    /// The swap parity canonicalization required for each facet.
    pub swap_parity: Vec<u8>,
}

impl BoundaryFacets {
    /// Number of boundary facets found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.swap_parity.len()
    }

    /// Returns true if there are no boundary facets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swap_parity.is_empty()
    }
}

/// Enumerates the boundary facets of `list` in canonical sorted form.
#[must_use]
pub fn get_simplex_boundary_facets(list: &[u8], nv: usize) -> BoundaryFacets {
    let mut out = BoundaryFacets::default();
    if nv < 2 {
        // No facets.
        return out;
    }

    let num_simplices = list.len() / nv;
    let num_vert_per_facet = nv - 1;
    let mut sorted = [0_u8; MAX_VERTICES_PER_SIMPLEX];

    for isimplex in 0..num_simplices {
        for iloc in 0..nv {
            if is_simplex_facet_a_boundary_facet(list, nv, isimplex, iloc) {
                sort_simplex_facet_vertices(
                    &list[isimplex * nv..(isimplex + 1) * nv],
                    iloc,
                    &mut sorted[..nv],
                );
                out.facet_vertices
                    .extend_from_slice(&sorted[..num_vert_per_facet]);
                out.containing_simplex.push(isimplex);
                out.swap_parity
                    .push(facet_swap_parity(&list[isimplex * nv..(isimplex + 1) * nv], iloc));
            }
        }
    }
    out
}

/// Returns the first pair of simplices that share a facet with equal swap
/// parities, or `None` if every pair is consistently oriented.
#[must_use]
pub fn find_inconsistently_oriented_pair(list: &[u8], nv: usize) -> Option<(usize, usize)> {
    if nv < 2 {
        // No facets. Nothing to orient.
        return None;
    }

    let num_simplices = list.len() / nv;
    for js_a in 0..num_simplices {
        let a = &list[js_a * nv..(js_a + 1) * nv];
        for js_b in js_a + 1..num_simplices {
            let b = &list[js_b * nv..(js_b + 1) * nv];
            if let Some((iloc_a, iloc_b)) = simplices_share_facet(a, b) {
                if facet_swap_parity(a, iloc_a) == facet_swap_parity(b, iloc_b) {
                    // Shared facet has the same orientation in both.
                    return Some((js_a, js_b));
                }
            }
        }
    }
    None
}

/// Orients all simplices reachable from `istart` consistently with it.
///
/// Depth-first over facet connectivity: when a popped simplex shares a
/// facet with an unoriented one and the swap parities are equal, the
/// unoriented simplex is flipped (last two vertices swapped). Simplices
/// with `is_oriented` already true are ignored.
///
/// Requires each simplex facet to lie in at most two simplices and the
/// complex to be orientable.
pub fn orient_simplices(list: &mut [u8], nv: usize, istart: usize, is_oriented: &mut [bool]) {
    if nv < 2 {
        // No facets. Nothing to orient.
        return;
    }
    let num_simplices = list.len() / nv;
    if num_simplices == 0 {
        return;
    }

    let mut stack = Vec::new();
    is_oriented[istart] = true;
    stack.push(istart);

    while let Some(js_a) = stack.pop() {
        for js_b in 0..num_simplices {
            if is_oriented[js_b] {
                continue;
            }

            let a = &list[js_a * nv..(js_a + 1) * nv];
            let b = &list[js_b * nv..(js_b + 1) * nv];
            let Some((iloc_a, iloc_b)) = simplices_share_facet(a, b) else {
                continue;
            };

            if facet_swap_parity(a, iloc_a) == facet_swap_parity(b, iloc_b) {
                // Shared facet has the same orientation in both simplices.
                // Reorient simplex B.
                list.swap(js_b * nv + nv - 2, js_b * nv + nv - 1);
            }

            is_oriented[js_b] = true;
            stack.push(js_b);
        }
    }
}

/// Orients every simplex, starting a new traversal per unoriented simplex.
///
/// The orientation of each connected component is arbitrary. Returns the
/// number of facet-connected components (the number of starts needed).
pub fn orient_all_simplices(list: &mut [u8], nv: usize) -> usize {
    let num_simplices = if nv == 0 { 0 } else { list.len() / nv };
    let mut is_oriented = vec![false; num_simplices];
    let mut num_components = 0;

    for isimplex in 0..num_simplices {
        if !is_oriented[isimplex] {
            num_components += 1;
            orient_simplices(list, nv, isimplex, &mut is_oriented);
        }
    }
    num_components
}

/// Sorts the vertices of every simplex in ascending order.
pub fn sort_all_simplex_vertices(list: &mut [u8], nv: usize) {
    if nv == 0 {
        return;
    }
    for simplex in list.chunks_mut(nv) {
        simplex.sort_unstable();
    }
}

/// Connected components of the complex, joining simplices that share a
/// vertex.
///
/// Returns the per-simplex component index (compacted to `[0, count)`) and
/// the component count.
#[must_use]
pub fn vertex_connected_components(list: &[u8], nv: usize) -> (Vec<usize>, usize) {
    connected_components_by(list, nv, |a, b| sorted_simplices_share_vertex(a, b).is_some())
}

/// Connected components of the complex, joining simplices that share a
/// facet.
#[must_use]
pub fn facet_connected_components(list: &[u8], nv: usize) -> (Vec<usize>, usize) {
    connected_components_by(list, nv, |a, b| simplices_share_facet(a, b).is_some())
}

fn connected_components_by(
    list: &[u8],
    nv: usize,
    are_adjacent: impl Fn(&[u8], &[u8]) -> bool,
) -> (Vec<usize>, usize) {
    let num_simplices = if nv == 0 { 0 } else { list.len() / nv };
    if num_simplices == 0 {
        // Nothing to get.
        return (Vec::new(), 0);
    }

    let mut sorted = list.to_vec();
    sort_all_simplex_vertices(&mut sorted, nv);

    let mut sets = UnionFind::new(num_simplices);
    for js_a in 0..num_simplices {
        for js_b in js_a + 1..num_simplices {
            let a = &sorted[js_a * nv..(js_a + 1) * nv];
            let b = &sorted[js_b * nv..(js_b + 1) * nv];
            if are_adjacent(a, b) {
                sets.union(js_a, js_b);
            }
        }
    }
    sets.into_components()
}
