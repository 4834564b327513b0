//! Table inversion.
//!
//! Entry `N-1-i` under a complemented encoding carries the sign-flipped
//! configuration of entry `i`, so exchanging them swaps which side of the
//! isosurface is enclosed.

use crate::table::McTable;

/// Produces the separation-flipped table.
///
/// The result shares no storage with `table`: polytope, isosurface
/// vertices, simplex dimension, and properties are copied; the separation
/// type and the isosurface polytope orientation are flipped to their
/// opposites; entry `i` receives the simplex list of entry `N-1-i`.
#[must_use]
pub fn invert_mcube_table(table: &McTable) -> McTable {
    let num_entries = table.num_table_entries();

    let mut inverted = McTable::with_simplex_dimension(table.simplex_dimension());
    inverted.copy_polytope(table);
    inverted.copy_iso_vertices(table);
    inverted.copy_properties(table);
    inverted.set_num_table_entries(num_entries);

    let properties = inverted.properties_mut();
    properties.separation_kind = table.properties().opposite_separation_kind();
    properties.iso_poly_orientation = table.properties().opposite_iso_poly_orientation();

    for it in 0..num_entries {
        let source = num_entries - it - 1;
        inverted
            .set_simplex_vertices(it, table.simplex_vertices(source))
            .expect("entry allocated by set_num_table_entries");
    }

    inverted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{Encoding, IsoPolyOrientation, SeparationKind};

    fn two_entry_table() -> McTable {
        let mut table = McTable::new();
        table.gen_cube3d().unwrap();
        table.set_encoding(Encoding::Binary);
        table.set_num_iso_vertices(12);
        table.store_poly_edges_as_iso_vertices(0).unwrap();
        table.set_num_table_entries(2);
        table.set_simplex_vertices(0, &[0, 1, 2]).unwrap();
        table.set_simplex_vertices(1, &[0, 2, 1]).unwrap();
        table.properties_mut().separation_kind = SeparationKind::SeparateNeg;
        table.properties_mut().iso_poly_orientation = IsoPolyOrientation::PositiveOrient;
        table
    }

    #[test]
    fn test_invert_swaps_entries_and_flips_properties() {
        let table = two_entry_table();
        let inverted = invert_mcube_table(&table);

        assert_eq!(inverted.simplex_vertices(0), &[0, 2, 1]);
        assert_eq!(inverted.simplex_vertices(1), &[0, 1, 2]);
        assert_eq!(
            inverted.properties().separation_kind,
            SeparationKind::SeparatePos
        );
        assert_eq!(
            inverted.properties().iso_poly_orientation,
            IsoPolyOrientation::NegativeOrient
        );
        assert_eq!(inverted.num_iso_vertices(), 12);
        assert_eq!(
            inverted.polytope().num_vertices(),
            table.polytope().num_vertices()
        );
    }

    #[test]
    fn test_invert_is_involution() {
        let table = two_entry_table();
        let twice = invert_mcube_table(&invert_mcube_table(&table));

        for it in 0..table.num_table_entries() {
            assert_eq!(twice.simplex_vertices(it), table.simplex_vertices(it));
        }
        assert_eq!(twice.properties(), table.properties());
    }

    #[test]
    fn test_invert_copies_rather_than_aliases() {
        let table = two_entry_table();
        let mut inverted = invert_mcube_table(&table);
        inverted.set_simplex_vertices(0, &[3, 4, 5]).unwrap();
        assert_eq!(table.simplex_vertices(1), &[0, 2, 1]);
    }
}
