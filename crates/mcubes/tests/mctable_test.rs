//! End-to-end tests over the public API: table construction, orientation,
//! inversion, and `.xit` round trips.

use mcubes_rs::{
    check_mcube_table_orientation, invert_mcube_table, orient_mcube_table, read_xit, write_xit,
    write_xit_v2, Encoding, IsoPolyOrientation, IsoVertexSite, McTable, SeparationKind, TableKind,
    TriangulationKind, VertexLabelKind, XitVersion,
};

/// Binary cube table with one isosurface vertex per edge and entries for
/// the configurations separating vertex 0, vertex 4, and both.
fn build_test_table() -> McTable {
    let mut table = McTable::new();
    table.gen_cube3d().unwrap();
    table.set_table_kind(TableKind::Isosurface);
    table.set_encoding(Encoding::Binary);
    table.set_num_iso_vertices(12);
    table.store_poly_edges_as_iso_vertices(0).unwrap();
    table.set_num_table_entries(256);

    // Vertex 0 positive: one triangle across edges 0, 4, 8.
    table.set_simplex_vertices(1, &[0, 4, 8]).unwrap();
    // Vertex 4 positive: one triangle across edges 2, 6, 8.
    table.set_simplex_vertices(16, &[2, 6, 8]).unwrap();
    // Vertices 0 and 4 positive: quad across edges 0, 4, 6, 2.
    table.set_simplex_vertices(17, &[0, 2, 6, 0, 6, 4]).unwrap();

    let properties = table.properties_mut();
    properties.vertex_label_kind = VertexLabelKind::NegPos;
    properties.triangulation_kind = TriangulationKind::ConvexHull;
    properties.separation_kind = SeparationKind::SeparatePos;
    table
}

#[test]
fn test_canonical_cube_polytope() {
    let mut table = McTable::new();
    table.gen_cube3d().unwrap();
    let poly = table.polytope();

    assert_eq!(poly.num_vertices(), 8);
    assert_eq!(poly.num_edges(), 12);
    assert_eq!(poly.num_facets(), 6);
    assert_eq!(poly.facet_vertices(0), &[0, 2, 4, 6]);
    assert_eq!(poly.facet_vertices(1), &[1, 3, 5, 7]);
    assert_eq!(poly.midpoint_coord(0, 0), 1);
    poly.check().unwrap();
}

#[test]
fn test_binary_index_decomposition() {
    let table = build_test_table();
    let digits = table.vertex_labels(0b0101_0101).unwrap();
    assert_eq!(digits, vec![1, 0, 1, 0, 1, 0, 1, 0]);
    for (iv, &digit) in digits.iter().enumerate() {
        if iv % 2 == 0 {
            assert_eq!(digit, table.positive_label_value());
        } else {
            assert_eq!(digit, table.negative_label_value());
        }
    }
}

#[test]
fn test_table_inversion() {
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

    // Involution on entries.
    let twice = invert_mcube_table(&inverted);
    for it in 0..table.num_table_entries() {
        assert_eq!(twice.simplex_vertices(it), table.simplex_vertices(it));
    }
}

#[test]
fn test_orient_engine_end_to_end() {
    let mut table = build_test_table();
    // Scramble orientations.
    table.flip_all_iso_poly_orientations_in_entry(16);
    table.flip_iso_poly_orientation(17, 0);

    orient_mcube_table(&mut table, 1).unwrap();
    check_mcube_table_orientation(&table, false).unwrap();
    check_mcube_table_orientation(&table, true).unwrap();
}

#[test]
fn test_orient_survives_inversion() {
    let mut table = build_test_table();
    orient_mcube_table(&mut table, 1).unwrap();

    // Inversion maps entry i to N-1-i, relabeling every configuration
    // consistently, so the inverted table stays consistently oriented.
    let inverted = invert_mcube_table(&table);
    check_mcube_table_orientation(&inverted, false).unwrap();
}

#[test]
fn test_flip_all_is_involution() {
    let mut table = build_test_table();
    table.properties_mut().iso_poly_orientation = IsoPolyOrientation::PositiveOrient;
    let entries: Vec<Vec<u8>> = (0..256).map(|it| table.simplex_vertices(it).to_vec()).collect();

    table.flip_all_iso_poly_orientations();
    table.flip_all_iso_poly_orientations();

    for (it, entry) in entries.iter().enumerate() {
        assert_eq!(table.simplex_vertices(it), entry.as_slice());
    }
    assert_eq!(
        table.properties().iso_poly_orientation,
        IsoPolyOrientation::PositiveOrient
    );
}

#[test]
fn test_xit_v2_round_trip() {
    let mut table = build_test_table();
    orient_mcube_table(&mut table, 1).unwrap();
    table.properties_mut().iso_poly_orientation = IsoPolyOrientation::PositiveOrient;

    let mut buffer = Vec::new();
    write_xit_v2(&mut buffer, &table).unwrap();
    let back = read_xit(buffer.as_slice()).unwrap();

    assert_eq!(back.properties(), table.properties());
    assert_eq!(back.polytope(), table.polytope());
    assert_eq!(back.num_iso_vertices(), table.num_iso_vertices());
    for iw in 0..table.num_iso_vertices() {
        assert_eq!(back.iso_vertex(iw), table.iso_vertex(iw));
    }
    for it in 0..table.num_table_entries() {
        assert_eq!(back.simplex_vertices(it), table.simplex_vertices(it));
    }

    // The round-tripped table verifies like the original.
    back.check().unwrap();
    check_mcube_table_orientation(&back, false).unwrap();
}

#[test]
fn test_xit_v1_round_trip() {
    let table = build_test_table();

    let mut buffer = Vec::new();
    write_xit(&mut buffer, XitVersion::V1_0, &table).unwrap();
    let back = read_xit(buffer.as_slice()).unwrap();

    assert_eq!(back.polytope().num_vertices(), 8);
    assert_eq!(back.encoding(), Encoding::Binary);
    for it in 0..table.num_table_entries() {
        assert_eq!(back.simplex_vertices(it), table.simplex_vertices(it));
    }
}

#[test]
fn test_prism_polytope_table() {
    // A table may host any polytope read from a file; build one over a
    // triangle prism and size its entry array from the encoding base.
    let mut triangle = mcubes_rs::Polytope::new(2);
    triangle.set_size(3, 3, 3).unwrap();
    triangle.set_vertex_coord(1, 0, 2).unwrap();
    triangle.set_vertex_coord(2, 1, 2).unwrap();
    for (ie, (a, b)) in [(0, 1), (1, 2), (2, 0)].iter().enumerate() {
        triangle.set_edge(ie, *a, *b).unwrap();
        triangle.set_num_facet_vertices(ie, 2).unwrap();
        triangle.set_facet_vertex(ie, 0, *a).unwrap();
        triangle.set_facet_vertex(ie, 1, *b).unwrap();
    }

    let prism = mcubes_rs::generate_prism(&triangle).unwrap();
    let mut table = McTable::new();
    table.set_polytope(prism);
    table.set_encoding(Encoding::Binary);
    table.set_num_iso_vertices(9);
    table.store_poly_edges_as_iso_vertices(0).unwrap();

    let num_entries =
        mcubes_rs::num_table_entries(table.polytope().num_vertices(), table.base()).unwrap();
    assert_eq!(num_entries, 64);
    table.set_num_table_entries(num_entries);
    table.check().unwrap();
}

#[test]
fn test_iso_vertex_sites_round_trip() {
    let table = build_test_table();
    for ie in 0..12 {
        assert_eq!(
            table.iso_vertex(ie).site,
            IsoVertexSite::OnEdge(u8::try_from(ie).unwrap())
        );
    }
}

#[test]
fn test_properties_check_against_expected() {
    let table = build_test_table();

    let mut expected = mcubes_rs::TableProperties::new();
    expected.separation_kind = SeparationKind::SeparatePos;
    expected.vertex_label_kind = VertexLabelKind::NegPos;
    table.properties().check(&expected).unwrap();

    expected.separation_kind = SeparationKind::SeparateNeg;
    assert!(table.properties().check(&expected).is_err());

    // The vertex label axis is compared like every other axis.
    expected.separation_kind = SeparationKind::SeparatePos;
    expected.vertex_label_kind = VertexLabelKind::NegStarPos;
    let err = table.properties().check(&expected).unwrap_err();
    assert!(err
        .to_string()
        .contains("Incorrect isosurface lookup table vertex label type."));
}
