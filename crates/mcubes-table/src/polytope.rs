//! The lookup-table polytope.
//!
//! For 3D Marching Cubes the polytope is always a cube, but `.xit` files may
//! hold other cells, so the model stores arbitrary polytopes: vertex
//! coordinates, edge endpoint pairs, facet vertex lists mirrored by facet
//! vertex bitsets, and derived incident-edge lists.
//!
//! Vertex coordinates must be even integers so that edge midpoints remain
//! integral.

use mcubes_core::{EnumLabel, McError, Report, Result, VertexBitset, MAX_POLY_VERTICES};

/// Polytope shape tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolyShape {
    Cube,
    Simplex,
    Pyramid,
    SimplexPrism,
    #[default]
    Undefined,
}

impl EnumLabel for PolyShape {
    const UNDEFINED: Self = Self::Undefined;

    fn as_label(self) -> &'static str {
        match self {
            Self::Cube => "Cube",
            Self::Simplex => "Simplex",
            Self::Pyramid => "Pyramid",
            Self::SimplexPrism => "SimplexPrism",
            Self::Undefined => "UndefinedShape",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Cube,
            Self::Simplex,
            Self::Pyramid,
            Self::SimplexPrism,
            Self::Undefined,
        ]
    }
}

/// One facet: explicit vertex list plus a bitset for O(1) membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Facet {
    vertices: Vec<u8>,
    bitset: VertexBitset,
}

/// A finite abstract polytope.
///
/// Mutators must be called in sizing order: [`Polytope::set_size`] (or the
/// individual `set_num_*` calls) before any coordinate, edge, or facet
/// setter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polytope {
    shape: PolyShape,
    dimension: usize,
    num_vertices: usize,
    vertex_coord: Vec<i32>,
    edge_endpoint: Vec<[u8; 2]>,
    facets: Vec<Facet>,
    incident_edges: Vec<Vec<u8>>,
}

impl Polytope {
    /// Creates an empty polytope of the given dimension.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }

    // *** Get functions ***

    /// Polytope shape.
    #[must_use]
    pub fn shape(&self) -> PolyShape {
        self.shape
    }

    /// Polytope dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of polytope vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of polytope edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edge_endpoint.len()
    }

    /// Number of polytope facets.
    #[must_use]
    pub fn num_facets(&self) -> usize {
        self.facets.len()
    }

    /// Number of vertices of facet `jf`.
    #[must_use]
    pub fn num_facet_vertices(&self, jf: usize) -> usize {
        self.facets[jf].vertices.len()
    }

    /// `ic`'th coordinate of vertex `iv`.
    #[must_use]
    pub fn vertex_coord(&self, iv: usize, ic: usize) -> i32 {
        self.vertex_coord[iv * self.dimension + ic]
    }

    /// `j`'th endpoint of edge `ie` (`j` = 0 or 1).
    #[must_use]
    pub fn edge_endpoint(&self, ie: usize, j: usize) -> u8 {
        self.edge_endpoint[ie][j]
    }

    /// Returns `j` (0 or 1) where `edge_endpoint(ie, j) == iv`.
    ///
    /// Meaningful only if `iv` is an endpoint of edge `ie`.
    #[must_use]
    pub fn edge_endpoint_index(&self, ie: usize, iv: u8) -> usize {
        usize::from(iv != self.edge_endpoint(ie, 0))
    }

    /// Number of edges incident on vertex `iv`.
    #[must_use]
    pub fn num_incident_edges(&self, iv: usize) -> usize {
        self.incident_edges[iv].len()
    }

    /// `j`'th edge incident on vertex `iv`.
    #[must_use]
    pub fn incident_edge(&self, iv: usize, j: usize) -> u8 {
        self.incident_edges[iv][j]
    }

    /// `ic`'th coordinate of the midpoint of edge `ie`.
    ///
    /// Vertex coordinates are all even, so the midpoint is integral.
    #[must_use]
    pub fn midpoint_coord(&self, ie: usize, ic: usize) -> i32 {
        let iv0 = usize::from(self.edge_endpoint(ie, 0));
        let iv1 = usize::from(self.edge_endpoint(ie, 1));
        (self.vertex_coord(iv0, ic) + self.vertex_coord(iv1, ic)) / 2
    }

    /// Bitset of the vertices in facet `jf`.
    #[must_use]
    pub fn facet_vertex_bitset(&self, jf: usize) -> VertexBitset {
        self.facets[jf].bitset
    }

    /// Returns true if vertex `iv` is in facet `jf`.
    #[must_use]
    pub fn is_vertex_in_facet(&self, jf: usize, iv: usize) -> bool {
        self.facets[jf].bitset.get(iv)
    }

    /// `k`'th vertex of facet `jf`.
    #[must_use]
    pub fn facet_vertex(&self, jf: usize, k: usize) -> u8 {
        self.facets[jf].vertices[k]
    }

    /// Vertex list of facet `jf`.
    #[must_use]
    pub fn facet_vertices(&self, jf: usize) -> &[u8] {
        &self.facets[jf].vertices
    }

    // *** Set/compute functions ***

    /// Sets the polytope shape.
    pub fn set_shape(&mut self, shape: PolyShape) {
        self.shape = shape;
    }

    /// Sets the polytope dimension, discarding all stored data.
    pub fn set_dimension(&mut self, dimension: usize) {
        *self = Self::new(dimension);
    }

    /// Sets the number of vertices; must precede any coordinate setter.
    ///
    /// Discards previously stored vertices, edges, and facets.
    pub fn set_num_vertices(&mut self, numv: usize) -> Result<()> {
        const PROC: &str = "Polytope::set_num_vertices";

        if !self.check_dimension() {
            return Err(McError::invariant(PROC, "Illegal polytope dimension."));
        }

        let dimension = self.dimension;
        let shape = self.shape;
        *self = Self::new(dimension);
        self.shape = shape;

        if numv == 0 {
            return Err(McError::illegal_argument(
                PROC,
                "Number of vertices must be non-zero.",
            ));
        }

        // Note that even if numv <= MAX_POLY_VERTICES, there may not be
        // enough memory to store the isosurface table.
        if numv > MAX_POLY_VERTICES {
            return Err(McError::illegal_argument(
                PROC,
                "Number of polytope vertices is too large.",
            ));
        }

        self.num_vertices = numv;
        self.vertex_coord = vec![0; numv * self.dimension];
        self.incident_edges = vec![Vec::new(); numv];
        Ok(())
    }

    /// Sets the number of edges; must precede any edge setter.
    pub fn set_num_edges(&mut self, nume: usize) -> Result<()> {
        const PROC: &str = "Polytope::set_num_edges";

        self.edge_endpoint.clear();

        if !self.check_dimension() {
            return Err(McError::invariant(PROC, "Illegal dimension."));
        }

        if self.num_vertices == 0 {
            return Err(McError::invariant(
                PROC,
                "Number of vertices must be set before number of edges.",
            ));
        }

        if nume < 1 {
            return Err(McError::illegal_argument(
                PROC,
                "Number of edges must be non-zero.",
            ));
        }

        if nume > usize::from(u8::MAX) {
            return Err(McError::illegal_argument(
                PROC,
                "Number of polytope edges is too large.",
            ));
        }

        self.edge_endpoint = vec![[0, 0]; nume];
        Ok(())
    }

    /// Sets the number of facets; must precede any facet setter.
    pub fn set_num_facets(&mut self, numf: usize) -> Result<()> {
        const PROC: &str = "Polytope::set_num_facets";

        self.facets.clear();

        if !self.check_dimension() {
            return Err(McError::invariant(PROC, "Illegal dimension."));
        }

        if self.num_vertices == 0 {
            return Err(McError::invariant(
                PROC,
                "Number of vertices must be set before number of facets.",
            ));
        }

        if numf < 1 {
            return Err(McError::illegal_argument(
                PROC,
                "Number of facets must be non-zero.",
            ));
        }

        if numf > usize::from(u8::MAX) {
            return Err(McError::illegal_argument(
                PROC,
                "Number of polytope facets is too large.",
            ));
        }

        self.facets = vec![Facet::default(); numf];
        Ok(())
    }

    /// Sets the number of vertices, edges, and facets in one call.
    pub fn set_size(&mut self, numv: usize, nume: usize, numf: usize) -> Result<()> {
        self.set_num_vertices(numv)?;
        self.set_num_edges(nume)?;
        self.set_num_facets(numf)
    }

    /// Sets the `ic`'th coordinate of vertex `iv`.
    ///
    /// Fails if `coord` is odd: midpoint coordinates must remain integral.
    pub fn set_vertex_coord(&mut self, iv: usize, ic: usize, coord: i32) -> Result<()> {
        const PROC: &str = "Polytope::set_vertex_coord";

        if iv >= self.num_vertices {
            return Err(McError::illegal_argument(PROC, "Illegal vertex index."));
        }
        if ic >= self.dimension {
            return Err(McError::illegal_argument(
                PROC,
                "Illegal vertex coordinate index.",
            ));
        }
        if coord % 2 != 0 {
            return Err(McError::illegal_argument(
                PROC,
                "Illegal vertex coordinate.  Vertex coordinate must be even.",
            ));
        }

        self.vertex_coord[iv * self.dimension + ic] = coord;
        Ok(())
    }

    /// Sets the endpoints of edge `ie`.
    pub fn set_edge(&mut self, ie: usize, iv0: usize, iv1: usize) -> Result<()> {
        const PROC: &str = "Polytope::set_edge";

        if ie >= self.num_edges() {
            return Err(McError::illegal_argument(PROC, "Illegal edge index."));
        }
        if iv0 >= self.num_vertices || iv1 >= self.num_vertices {
            return Err(McError::illegal_argument(PROC, "Illegal vertex index."));
        }

        self.edge_endpoint[ie] = [
            u8::try_from(iv0).expect("vertex index fits in u8"),
            u8::try_from(iv1).expect("vertex index fits in u8"),
        ];
        Ok(())
    }

    /// Sets the number of vertices of facet `jf`, clearing its vertex list.
    pub fn set_num_facet_vertices(&mut self, jf: usize, numv: usize) -> Result<()> {
        const PROC: &str = "Polytope::set_num_facet_vertices";

        if jf >= self.num_facets() {
            return Err(McError::illegal_argument(PROC, "Illegal facet index."));
        }

        self.facets[jf].vertices = vec![0; numv];
        self.facets[jf].bitset.reset();
        Ok(())
    }

    /// Sets the `k`'th vertex of facet `jf`, recording it in both the list
    /// and the bitset.
    pub fn set_facet_vertex(&mut self, jf: usize, k: usize, iv: usize) -> Result<()> {
        const PROC: &str = "Polytope::set_facet_vertex";

        if jf >= self.num_facets() || k >= self.num_facet_vertices(jf) {
            return Err(McError::illegal_argument(
                PROC,
                "Illegal index to list of facet vertices.",
            ));
        }
        if iv >= self.num_vertices {
            return Err(McError::illegal_argument(PROC, "Illegal vertex index."));
        }

        self.facets[jf].vertices[k] = u8::try_from(iv).expect("vertex index fits in u8");
        self.facets[jf].bitset.set(iv);
        Ok(())
    }

    /// Derives the incident-edge list of every vertex in one pass.
    ///
    /// All edges should be set before calling this routine. Idempotent.
    pub fn compute_incident_edges(&mut self) {
        if self.num_vertices == 0 || self.num_edges() == 0 {
            // Nothing to compute.
            return;
        }

        for list in &mut self.incident_edges {
            list.clear();
        }

        for (ie, endpoints) in self.edge_endpoint.iter().enumerate() {
            for &iend in endpoints {
                self.incident_edges[usize::from(iend)]
                    .push(u8::try_from(ie).expect("edge index fits in u8"));
            }
        }
    }

    /// Builds the canonical 3D cube: 8 vertices at the even-coordinate
    /// corners of `[0,2]^3`, 12 axis-aligned edges grouped by axis, and
    /// 6 facets numbered `2*axis + side`.
    pub fn gen_cube3d(&mut self) -> Result<()> {
        self.set_dimension(3);
        self.shape = PolyShape::Cube;
        self.set_size(8, 12, 6)?;

        // Vertex iv has coordinate 2*bit(d) along axis d.
        for iv in 0..8 {
            for d in 0..3 {
                self.set_vertex_coord(iv, d, (((iv >> d) & 1) as i32) * 2)?;
            }
        }

        // Edges grouped by direction: x-edges, then y-edges, then z-edges.
        let mut ie = 0;
        for d in 0..3 {
            let stride = 1 << d;
            for iv in 0..8 {
                if (iv >> d) & 1 == 0 {
                    self.set_edge(ie, iv, iv + stride)?;
                    ie += 1;
                }
            }
        }

        // Facet 2d+side holds the vertices whose d'th coordinate bit
        // equals side, listed in increasing order.
        for d in 0..3 {
            for side in 0..2 {
                let jf = 2 * d + side;
                self.set_num_facet_vertices(jf, 4)?;
                let mut k = 0;
                for iv in 0..8 {
                    if (iv >> d) & 1 == side {
                        self.set_facet_vertex(jf, k, iv)?;
                        k += 1;
                    }
                }
            }
        }

        self.compute_incident_edges();
        Ok(())
    }

    // *** Check functions ***

    /// Returns true if the dimension is at least 1.
    #[must_use]
    pub fn check_dimension(&self) -> bool {
        self.dimension >= 1
    }

    /// Verifies the polytope invariants.
    ///
    /// Checks dimension, non-empty vertex and edge lists, even vertex
    /// coordinates, valid edge endpoints, facet list/bitset duality, and
    /// agreement of materialized incident-edge lists with the edge list.
    pub fn check(&self) -> Result<()> {
        if !self.check_dimension() {
            return Err(McError::Consistency(Report::new().with(format!(
                "Illegal polyhedron dimension {}.",
                self.dimension
            ))));
        }

        if self.num_vertices < 1 {
            return Err(McError::Consistency(
                Report::new().with("Illegal number of vertices."),
            ));
        }

        if self.num_edges() < 1 {
            return Err(McError::Consistency(
                Report::new().with("Illegal number of edges."),
            ));
        }

        for iv in 0..self.num_vertices {
            for ic in 0..self.dimension {
                if self.vertex_coord(iv, ic) % 2 != 0 {
                    return Err(McError::Consistency(
                        Report::new().with("Vertex coordinates must be even integers."),
                    ));
                }
            }
        }

        for ie in 0..self.num_edges() {
            for j in 0..2 {
                let iv = usize::from(self.edge_endpoint(ie, j));
                if iv >= self.num_vertices {
                    return Err(McError::Consistency(Report::new().with(format!(
                        "Illegal edge endpoint {iv} for edge {ie}."
                    ))));
                }
            }
        }

        for (jf, facet) in self.facets.iter().enumerate() {
            let mut from_list = VertexBitset::EMPTY;
            for &iv in &facet.vertices {
                from_list.set(usize::from(iv));
            }
            if from_list != facet.bitset {
                return Err(McError::Consistency(Report::new().with(format!(
                    "Facet {jf} vertex list does not match facet vertex bitset."
                ))));
            }
        }

        if self.incident_edges.iter().any(|list| !list.is_empty()) {
            for iv in 0..self.num_vertices {
                let expected = self
                    .edge_endpoint
                    .iter()
                    .filter(|endpoints| {
                        endpoints.contains(&u8::try_from(iv).expect("vertex index fits in u8"))
                    })
                    .count();
                if self.num_incident_edges(iv) != expected {
                    return Err(McError::Consistency(Report::new().with(format!(
                        "Vertex {iv} has {} incident edges but edge list implies {expected}.",
                        self.num_incident_edges(iv)
                    ))));
                }
            }
        }

        Ok(())
    }
}

/// Opposite facet of facet `jf` on the canonical cube.
#[must_use]
pub fn opposite_cube_facet(jf: usize) -> usize {
    jf ^ 1
}

/// Orthogonal axis direction of facet `jf` on the canonical cube.
#[must_use]
pub fn cube_facet_axis(jf: usize) -> usize {
    jf / 2
}

/// Side (0 = low, 1 = high) of facet `jf` on the canonical cube.
#[must_use]
pub fn cube_facet_side(jf: usize) -> usize {
    jf % 2
}

/// Generates a prism over `base`.
///
/// The first `numv` vertices are the base at last coordinate 0, the next
/// `numv` the copy at last coordinate 2. The first `2*nume` edges are the
/// two base copies, followed by `numv` vertical edges connecting
/// corresponding vertices. Facets: the two base copies, then one per base
/// facet with `2 * num_facet_vertices` vertices.
pub fn generate_prism(base: &Polytope) -> Result<Polytope> {
    let numv = base.num_vertices();
    let nume = base.num_edges();
    let numf = base.num_facets();
    let prism_dim = base.dimension() + 1;
    let prism_lastc = prism_dim - 1;

    let mut prism = Polytope::new(prism_dim);
    prism.set_shape(PolyShape::SimplexPrism);
    prism.set_size(numv * 2, nume * 2 + numv, 2 + numf)?;

    for iv in 0..numv {
        for ic in 0..prism_lastc {
            let coord = base.vertex_coord(iv, ic);
            prism.set_vertex_coord(iv, ic, coord)?;
            prism.set_vertex_coord(iv + numv, ic, coord)?;
        }
        prism.set_vertex_coord(iv, prism_lastc, 0)?;
        prism.set_vertex_coord(iv + numv, prism_lastc, 2)?;
    }

    for ie in 0..nume {
        let iv0 = usize::from(base.edge_endpoint(ie, 0));
        let iv1 = usize::from(base.edge_endpoint(ie, 1));
        prism.set_edge(ie, iv0, iv1)?;
        prism.set_edge(ie + nume, iv0 + numv, iv1 + numv)?;
    }
    for iv in 0..numv {
        prism.set_edge(2 * nume + iv, iv, iv + numv)?;
    }

    prism.set_num_facet_vertices(0, numv)?;
    prism.set_num_facet_vertices(1, numv)?;
    for iv in 0..numv {
        prism.set_facet_vertex(0, iv, iv)?;
        prism.set_facet_vertex(1, iv, iv + numv)?;
    }

    for jf in 0..numf {
        let prism_jf = 2 + jf;
        let base_num_fv = base.num_facet_vertices(jf);
        prism.set_num_facet_vertices(prism_jf, 2 * base_num_fv)?;
        for k in 0..base_num_fv {
            let iv = usize::from(base.facet_vertex(jf, k));
            prism.set_facet_vertex(prism_jf, k, iv)?;
            prism.set_facet_vertex(prism_jf, k + base_num_fv, iv + numv)?;
        }
    }

    prism.compute_incident_edges();
    Ok(prism)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> Polytope {
        let mut poly = Polytope::new(3);
        poly.gen_cube3d().unwrap();
        poly
    }

    #[test]
    fn test_cube_counts() {
        let cube = cube();
        assert_eq!(cube.num_vertices(), 8);
        assert_eq!(cube.num_edges(), 12);
        assert_eq!(cube.num_facets(), 6);
        assert_eq!(cube.shape(), PolyShape::Cube);
        cube.check().unwrap();
    }

    #[test]
    fn test_cube_facets() {
        let cube = cube();
        // Facet 0 is low-x, facet 1 is high-x.
        assert_eq!(cube.facet_vertices(0), &[0, 2, 4, 6]);
        assert_eq!(cube.facet_vertices(1), &[1, 3, 5, 7]);
        assert_eq!(cube.facet_vertices(4), &[0, 1, 2, 3]);
        for jf in 0..6 {
            assert_eq!(cube.num_facet_vertices(jf), 4);
            assert_eq!(cube.facet_vertex_bitset(jf).count(), 4);
        }
        assert_eq!(opposite_cube_facet(0), 1);
        assert_eq!(opposite_cube_facet(5), 4);
        assert_eq!(cube_facet_axis(3), 1);
        assert_eq!(cube_facet_side(3), 1);
    }

    #[test]
    fn test_cube_midpoint() {
        let cube = cube();
        // Edge 0 is (0,1); its midpoint along x is 1.
        assert_eq!(cube.edge_endpoint(0, 0), 0);
        assert_eq!(cube.edge_endpoint(0, 1), 1);
        assert_eq!(cube.edge_endpoint_index(0, 0), 0);
        assert_eq!(cube.edge_endpoint_index(0, 1), 1);
        assert_eq!(cube.midpoint_coord(0, 0), 1);
        assert_eq!(cube.midpoint_coord(0, 1), 0);
    }

    #[test]
    fn test_cube_incident_edges() {
        let cube = cube();
        for iv in 0..8 {
            assert_eq!(cube.num_incident_edges(iv), 3);
        }
        // Vertex 0 meets the first edge of each direction group.
        assert_eq!(cube.incident_edge(0, 0), 0);
        assert_eq!(cube.incident_edge(0, 1), 4);
        assert_eq!(cube.incident_edge(0, 2), 8);
    }

    #[test]
    fn test_odd_coordinate_rejected() {
        let mut poly = Polytope::new(3);
        poly.set_num_vertices(2).unwrap();
        let err = poly.set_vertex_coord(0, 0, 1).unwrap_err();
        assert!(err.to_string().contains("must be even"));
    }

    #[test]
    fn test_edge_endpoint_range_checked() {
        let mut poly = Polytope::new(3);
        poly.set_num_vertices(2).unwrap();
        poly.set_num_edges(1).unwrap();
        assert!(poly.set_edge(0, 0, 2).is_err());
        assert!(poly.set_edge(0, 0, 1).is_ok());
    }

    #[test]
    fn test_size_before_setters() {
        let mut poly = Polytope::new(3);
        assert!(poly.set_num_edges(1).is_err());
        assert!(poly.set_num_facets(1).is_err());
    }

    #[test]
    fn test_vertex_ceiling() {
        let mut poly = Polytope::new(3);
        assert!(poly.set_num_vertices(MAX_POLY_VERTICES + 1).is_err());
    }

    #[test]
    fn test_compute_incident_edges_idempotent() {
        let mut cube = cube();
        let before = cube.incident_edges.clone();
        cube.compute_incident_edges();
        assert_eq!(cube.incident_edges, before);
    }

    #[test]
    fn test_prism_over_triangle() {
        // Triangle in the plane: 3 vertices, 3 edges, 3 facets (the edges).
        let mut triangle = Polytope::new(2);
        triangle.set_shape(PolyShape::Simplex);
        triangle.set_size(3, 3, 3).unwrap();
        triangle.set_vertex_coord(0, 0, 0).unwrap();
        triangle.set_vertex_coord(0, 1, 0).unwrap();
        triangle.set_vertex_coord(1, 0, 2).unwrap();
        triangle.set_vertex_coord(1, 1, 0).unwrap();
        triangle.set_vertex_coord(2, 0, 0).unwrap();
        triangle.set_vertex_coord(2, 1, 2).unwrap();
        for (ie, (a, b)) in [(0, 1), (1, 2), (2, 0)].iter().enumerate() {
            triangle.set_edge(ie, *a, *b).unwrap();
            triangle.set_num_facet_vertices(ie, 2).unwrap();
            triangle.set_facet_vertex(ie, 0, *a).unwrap();
            triangle.set_facet_vertex(ie, 1, *b).unwrap();
        }

        let prism = generate_prism(&triangle).unwrap();
        assert_eq!(prism.shape(), PolyShape::SimplexPrism);
        assert_eq!(prism.dimension(), 3);
        assert_eq!(prism.num_vertices(), 6);
        assert_eq!(prism.num_edges(), 9);
        assert_eq!(prism.num_facets(), 5);
        assert_eq!(prism.vertex_coord(0, 2), 0);
        assert_eq!(prism.vertex_coord(3, 2), 2);
        // Vertical edge connecting copies of vertex 0.
        assert_eq!(prism.edge_endpoint(6, 0), 0);
        assert_eq!(prism.edge_endpoint(6, 1), 3);
        // Side facet over base facet 0 holds both copies of its vertices.
        assert_eq!(prism.facet_vertices(2), &[0, 1, 3, 4]);
        prism.check().unwrap();
    }

    #[test]
    fn test_shape_labels() {
        assert_eq!(PolyShape::from_label("cube"), PolyShape::Cube);
        assert_eq!(PolyShape::from_label("SimplexPrism"), PolyShape::SimplexPrism);
        assert!(PolyShape::from_label("dodecahedron").is_undefined());
    }
}
