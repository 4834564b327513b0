//! Regular 3D scalar grids.
//!
//! The external collaborator of the lookup table: a per-cube extractor
//! reads the eight corner scalars of each grid cube, labels them against
//! the isovalue, and keys the resulting configuration into the table.
//! Cube corner order matches the canonical cube polytope: corner `k`
//! offsets by bit `d` of `k` along axis `d`.

use glam::UVec3;

/// Number of corners of a grid cube.
pub const CUBE_NUM_VERTICES: usize = 8;

/// A regular axis-aligned 3D grid.
///
/// Vertices are indexed in x-fastest row-major order; cubes are indexed
/// the same way over the `(nx-1, ny-1, nz-1)` cube lattice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid3 {
    axis_size: [usize; 3],
    axis_increment: [usize; 3],
    cube_vertex_increment: [usize; CUBE_NUM_VERTICES],
    num_vertices: usize,
    num_cubes: usize,
}

impl Grid3 {
    /// Creates a grid with the given number of vertices per axis.
    #[must_use]
    pub fn new(axis_size: [usize; 3]) -> Self {
        let axis_increment = [1, axis_size[0], axis_size[0] * axis_size[1]];

        let mut cube_vertex_increment = [0; CUBE_NUM_VERTICES];
        for (k, increment) in cube_vertex_increment.iter_mut().enumerate() {
            for d in 0..3 {
                if (k >> d) & 1 == 1 {
                    *increment += axis_increment[d];
                }
            }
        }

        let num_vertices = axis_size[0] * axis_size[1] * axis_size[2];
        let num_cubes = axis_size.iter().map(|&n| n.saturating_sub(1)).product();

        Self {
            axis_size,
            axis_increment,
            cube_vertex_increment,
            num_vertices,
            num_cubes,
        }
    }

    /// Grid dimension (always 3).
    #[must_use]
    pub fn dimension(&self) -> usize {
        3
    }

    /// Number of grid vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of grid cubes.
    #[must_use]
    pub fn num_cubes(&self) -> usize {
        self.num_cubes
    }

    /// Number of vertices along axis `d`.
    #[must_use]
    pub fn axis_size(&self, d: usize) -> usize {
        self.axis_size[d]
    }

    /// Vertex-index increment along axis `d`.
    #[must_use]
    pub fn axis_increment(&self, d: usize) -> usize {
        self.axis_increment[d]
    }

    /// Index of the next vertex after `iv` along axis `d`.
    ///
    /// Does not check that the next vertex exists.
    #[must_use]
    pub fn next_vertex(&self, iv: usize, d: usize) -> usize {
        iv + self.axis_increment[d]
    }

    /// Index of the previous vertex before `iv` along axis `d`.
    ///
    /// Does not check that the previous vertex exists.
    #[must_use]
    pub fn prev_vertex(&self, iv: usize, d: usize) -> usize {
        iv - self.axis_increment[d]
    }

    /// Decomposes vertex index `iv` into grid coordinates.
    #[must_use]
    pub fn vertex_coord(&self, iv: usize) -> UVec3 {
        let x = iv % self.axis_size[0];
        let y = (iv / self.axis_size[0]) % self.axis_size[1];
        let z = iv / (self.axis_size[0] * self.axis_size[1]);
        UVec3::new(
            u32::try_from(x).expect("axis coordinate fits in u32"),
            u32::try_from(y).expect("axis coordinate fits in u32"),
            u32::try_from(z).expect("axis coordinate fits in u32"),
        )
    }

    /// Composes grid coordinates into a vertex index.
    #[must_use]
    pub fn vertex_index(&self, coord: UVec3) -> usize {
        coord.x as usize * self.axis_increment[0]
            + coord.y as usize * self.axis_increment[1]
            + coord.z as usize * self.axis_increment[2]
    }

    /// Index of the primary (lowest) vertex of cube `icube`.
    #[must_use]
    pub fn cube_vertex(&self, icube: usize) -> usize {
        let nx = self.axis_size[0].saturating_sub(1).max(1);
        let ny = self.axis_size[1].saturating_sub(1).max(1);
        let x = icube % nx;
        let y = (icube / nx) % ny;
        let z = icube / (nx * ny);
        x + y * self.axis_increment[1] + z * self.axis_increment[2]
    }

    /// Index of corner `k` of cube `icube`, in canonical cube corner
    /// order.
    #[must_use]
    pub fn cube_corner(&self, icube: usize, k: usize) -> usize {
        self.cube_vertex(icube) + self.cube_vertex_increment[k]
    }
}

/// A scalar field sampled on a regular 3D grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid3 {
    grid: Grid3,
    scalar: Vec<f32>,
}

impl ScalarGrid3 {
    /// Creates a zero-filled scalar grid.
    #[must_use]
    pub fn new(axis_size: [usize; 3]) -> Self {
        let grid = Grid3::new(axis_size);
        let scalar = vec![0.0; grid.num_vertices()];
        Self { grid, scalar }
    }

    /// The underlying grid.
    #[must_use]
    pub fn grid(&self) -> &Grid3 {
        &self.grid
    }

    /// Scalar value at vertex `iv`.
    #[must_use]
    pub fn scalar(&self, iv: usize) -> f32 {
        self.scalar[iv]
    }

    /// All scalar values in vertex-index order.
    #[must_use]
    pub fn scalars(&self) -> &[f32] {
        &self.scalar
    }

    /// Sets the scalar value at vertex `iv`.
    pub fn set_scalar(&mut self, iv: usize, value: f32) {
        self.scalar[iv] = value;
    }

    /// Sets every scalar value.
    pub fn set_all_scalars(&mut self, value: f32) {
        self.scalar.fill(value);
    }

    /// The eight corner scalars of cube `icube`, in canonical corner
    /// order.
    #[must_use]
    pub fn cube_corner_values(&self, icube: usize) -> [f32; CUBE_NUM_VERTICES] {
        let mut values = [0.0; CUBE_NUM_VERTICES];
        for (k, value) in values.iter_mut().enumerate() {
            *value = self.scalar[self.grid.cube_corner(icube, k)];
        }
        values
    }

    /// Forms the binary table index of cube `icube` against `isovalue`.
    ///
    /// Corner `k` contributes digit `base^k`; corners with scalar value
    /// greater than or equal to the isovalue are labeled positive.
    #[must_use]
    pub fn cube_table_index(&self, icube: usize, isovalue: f32) -> usize {
        let mut index = 0;
        for (k, value) in self.cube_corner_values(icube).iter().enumerate() {
            if *value >= isovalue {
                index |= 1 << k;
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_counts() {
        let grid = Grid3::new([4, 3, 2]);
        assert_eq!(grid.num_vertices(), 24);
        assert_eq!(grid.num_cubes(), 6);
        assert_eq!(grid.axis_size(0), 4);
        assert_eq!(grid.axis_increment(1), 4);
        assert_eq!(grid.axis_increment(2), 12);
    }

    #[test]
    fn test_vertex_coord_round_trip() {
        let grid = Grid3::new([4, 3, 2]);
        for iv in 0..grid.num_vertices() {
            assert_eq!(grid.vertex_index(grid.vertex_coord(iv)), iv);
        }
    }

    #[test]
    fn test_next_prev_vertex() {
        let grid = Grid3::new([4, 3, 2]);
        let iv = grid.vertex_index(UVec3::new(1, 1, 0));
        assert_eq!(grid.next_vertex(iv, 0), iv + 1);
        assert_eq!(grid.prev_vertex(grid.next_vertex(iv, 2), 2), iv);
    }

    #[test]
    fn test_cube_corners_match_cube_vertex_order() {
        let grid = Grid3::new([3, 3, 3]);
        // Cube 0 has its primary vertex at the origin.
        assert_eq!(grid.cube_corner(0, 0), 0);
        assert_eq!(grid.cube_corner(0, 1), 1);
        assert_eq!(grid.cube_corner(0, 2), 3);
        assert_eq!(grid.cube_corner(0, 4), 9);
        assert_eq!(grid.cube_corner(0, 7), 13);

        // Cube 1 is offset by one along x.
        assert_eq!(grid.cube_corner(1, 0), 1);
        // Cube 4 wraps to the second slab.
        assert_eq!(grid.cube_vertex(4), 9);
    }

    #[test]
    fn test_scalar_grid_access() {
        let mut field = ScalarGrid3::new([3, 3, 3]);
        assert_eq!(field.scalar(13), 0.0);
        field.set_scalar(13, 2.5);
        assert_eq!(field.scalar(13), 2.5);
        field.set_all_scalars(-1.0);
        assert_eq!(field.scalar(13), -1.0);
    }

    #[test]
    fn test_cube_table_index() {
        let mut field = ScalarGrid3::new([2, 2, 2]);
        // All corners below the isovalue: entry 0.
        assert_eq!(field.cube_table_index(0, 1.0), 0);

        // Raise corner 0 only.
        field.set_scalar(0, 5.0);
        assert_eq!(field.cube_table_index(0, 1.0), 1);

        // Raise every corner: the all-positive entry.
        field.set_all_scalars(5.0);
        assert_eq!(field.cube_table_index(0, 1.0), 255);
    }
}
