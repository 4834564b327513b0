//! `.xit` serialization.
//!
//! Output layout matches existing `.xit` files byte for byte where they
//! are regular: one element per line, element text padded with single
//! spaces, facet vertices written in increasing order from the facet
//! bitset.

use std::io::Write;

use mcubes_core::EnumLabel;
use mcubes_table::{IsoVertexSite, McTable, PolyShape};

use crate::error::{XitError, XitResult};
use crate::tags;
use crate::version::XitVersion;

/// Writes `table` in the given `.xit` version.
pub fn write_xit<W: Write>(out: &mut W, version: XitVersion, table: &McTable) -> XitResult<()> {
    match version {
        XitVersion::V1_0 => write_xit_v1(out, table),
        XitVersion::V2_0 | XitVersion::V2x => write_xit_v2(out, table),
        XitVersion::Unknown => Err(XitError::Malformed(
            "unable to write unknown .xit version".to_string(),
        )),
    }
}

/// Writes a version 2.0 `.xit` file.
pub fn write_xit_v2<W: Write>(out: &mut W, table: &McTable) -> XitResult<()> {
    write_header_info(out, "2.0")?;

    writeln!(
        out,
        "<{0}> {1} </{0}>",
        tags::TABLE_TYPE,
        table.properties().table_kind.as_label()
    )?;
    write_dimension(out, table)?;

    writeln!(out, "<{}>", tags::POLY)?;
    writeln!(
        out,
        "<{0}> {1} </{0}>",
        tags::POLY_SHAPE,
        table.polytope().shape().as_label()
    )?;
    write_polytope_vertices(out, table)?;
    write_polytope_edges(out, table)?;
    write_polytope_facets(out, table)?;
    writeln!(out, "</{}>", tags::POLY)?;

    write_isosurface_vertices(out, table)?;

    writeln!(out, "<{}>", tags::TABLE)?;
    write_table_encoding(out, table)?;
    write_table_properties(out, table)?;
    write_lookup_table_entries(out, table)?;
    writeln!(out, "</{}>", tags::TABLE)?;

    writeln!(out, "</{}>", tags::ISOTABLE)?;
    Ok(())
}

/// Writes an (old) version 1.0 `.xit` file.
///
/// The v1 format has no `tableType`, `polyShape`, or `tableProperties`.
pub fn write_xit_v1<W: Write>(out: &mut W, table: &McTable) -> XitResult<()> {
    write_header_info(out, "1.0")?;

    write_dimension(out, table)?;

    writeln!(out, "<{}>", tags::POLY)?;
    write_polytope_vertices(out, table)?;
    write_polytope_edges(out, table)?;
    write_polytope_facets(out, table)?;
    writeln!(out, "</{}>", tags::POLY)?;

    write_isosurface_vertices(out, table)?;

    writeln!(out, "<{}>", tags::TABLE)?;
    write_table_encoding(out, table)?;
    write_lookup_table_entries(out, table)?;
    writeln!(out, "</{}>", tags::TABLE)?;

    writeln!(out, "</{}>", tags::ISOTABLE)?;
    Ok(())
}

fn write_header_info<W: Write>(out: &mut W, version_str: &str) -> XitResult<()> {
    writeln!(out, "<?xml version=\"1.0\"?>")?;
    writeln!(out, "<{}>", tags::ISOTABLE)?;
    writeln!(out, "<!-- Isosurface lookup table -->")?;
    writeln!(out, "<{0}> {version_str} </{0}>", tags::VERSION)?;
    let date = chrono::Local::now().format("%Y-%m-%d");
    writeln!(out, "<{0}> {date} </{0}>", tags::CREATION_DATE)?;
    Ok(())
}

fn write_dimension<W: Write>(out: &mut W, table: &McTable) -> XitResult<()> {
    writeln!(
        out,
        "<{0}> {1}  {2} </{0}>",
        tags::DIMENSION,
        table.dimension(),
        table.simplex_dimension()
    )?;
    Ok(())
}

fn write_polytope_vertices<W: Write>(out: &mut W, table: &McTable) -> XitResult<()> {
    let poly = table.polytope();

    writeln!(out, "<{}>", tags::VERTICES)?;
    writeln!(out, "<{0}> {1} </{0}>", tags::NUM_VERTICES, poly.num_vertices())?;
    for iv in 0..poly.num_vertices() {
        write!(out, "<{}> ", tags::C)?;
        for ic in 0..poly.dimension() {
            write!(out, "{} ", poly.vertex_coord(iv, ic))?;
        }
        writeln!(out, "</{}>", tags::C)?;
    }
    writeln!(out, "</{}>", tags::VERTICES)?;
    Ok(())
}

fn write_polytope_edges<W: Write>(out: &mut W, table: &McTable) -> XitResult<()> {
    let poly = table.polytope();

    writeln!(out, "<{}>", tags::EDGES)?;
    writeln!(out, "<{0}> {1} </{0}>", tags::NUM_EDGES, poly.num_edges())?;
    for ie in 0..poly.num_edges() {
        writeln!(
            out,
            "<{0}> {1} {2} </{0}>",
            tags::V,
            poly.edge_endpoint(ie, 0),
            poly.edge_endpoint(ie, 1)
        )?;
    }
    writeln!(out, "</{}>", tags::EDGES)?;
    Ok(())
}

fn write_polytope_facets<W: Write>(out: &mut W, table: &McTable) -> XitResult<()> {
    let poly = table.polytope();

    writeln!(out, "<{}>", tags::FACETS)?;
    writeln!(out, "<{0}> {1} </{0}>", tags::NUM_FACETS, poly.num_facets())?;
    for jf in 0..poly.num_facets() {
        write!(out, "<{}> ", tags::F)?;
        write!(out, "{} ", poly.num_facet_vertices(jf))?;
        // Count, then the facet vertices in increasing order.
        for iv in 0..poly.num_vertices() {
            if poly.is_vertex_in_facet(jf, iv) {
                write!(out, "{iv} ")?;
            }
        }
        writeln!(out, "</{}>", tags::F)?;
    }
    writeln!(out, "</{}>", tags::FACETS)?;
    Ok(())
}

fn write_isosurface_vertices<W: Write>(out: &mut W, table: &McTable) -> XitResult<()> {
    writeln!(out, "<{}>", tags::ISO_VERTICES)?;
    writeln!(
        out,
        "<{0}> {1} </{0}>",
        tags::NUM_VERTICES,
        table.num_iso_vertices()
    )?;

    for iw in 0..table.num_iso_vertices() {
        let vertex = table.iso_vertex(iw);
        write!(out, "<{}> ", tags::W)?;
        match vertex.site {
            IsoVertexSite::OnVertex(iv) => {
                write!(out, "<{0}> {iv} </{0}>", tags::IN_V)?;
            }
            IsoVertexSite::OnEdge(ie) => {
                write!(out, "<{0}> {ie} </{0}>", tags::IN_E)?;
            }
            IsoVertexSite::OnFacet(jf) => {
                write!(out, "<{0}> {jf} </{0}>", tags::IN_F)?;
            }
            IsoVertexSite::AtPoint(point) => {
                write!(out, "<{0}> {1} {2} {3} </{0}>", tags::C, point.x, point.y, point.z)?;
            }
        }
        if let Some(label) = &vertex.label {
            write!(out, " <{0}> {label} </{0}>", tags::L)?;
        }
        writeln!(out, " </{}>", tags::W)?;
    }

    writeln!(out, "</{}>", tags::ISO_VERTICES)?;
    Ok(())
}

fn write_table_encoding<W: Write>(out: &mut W, table: &McTable) -> XitResult<()> {
    writeln!(
        out,
        "<{0}> {1} </{0}>",
        tags::ENCODING,
        table.encoding().as_label()
    )?;
    Ok(())
}

fn write_table_properties<W: Write>(out: &mut W, table: &McTable) -> XitResult<()> {
    let properties = table.properties();

    writeln!(out, "<{}>", tags::TABLE_PROPERTIES)?;
    if properties.vertex_label_kind.is_defined() {
        writeln!(
            out,
            "<{0}> {1} </{0}>",
            tags::POLY_VERTEX_LABEL_TYPE,
            properties.vertex_label_kind.as_label()
        )?;
    }
    if properties.triangulation_kind.is_defined() {
        writeln!(
            out,
            "<{0}> {1} </{0}>",
            tags::TRIANGULATION_TYPE,
            properties.triangulation_kind.as_label()
        )?;
    }
    if properties.separation_kind.is_defined() {
        writeln!(
            out,
            "<{0}> {1} </{0}>",
            tags::SEPARATION_TYPE,
            properties.separation_kind.as_label()
        )?;
    }
    if table.polytope().shape() == PolyShape::Cube && properties.separate_opposite.is_defined() {
        writeln!(
            out,
            "<{0}> {1} </{0}>",
            tags::SEPARATE_OPPOSITE,
            properties.separate_opposite.as_label()
        )?;
    }
    if properties.iso_poly_orientation.is_defined() {
        writeln!(
            out,
            "<{0}> {1} </{0}>",
            tags::ISO_POLY_ORIENTATION,
            properties.iso_poly_orientation.as_label()
        )?;
    }
    writeln!(out, "</{}>", tags::TABLE_PROPERTIES)?;
    Ok(())
}

fn write_lookup_table_entries<W: Write>(out: &mut W, table: &McTable) -> XitResult<()> {
    writeln!(
        out,
        "<{0}> {1} </{0}>",
        tags::NUM_ENTRIES,
        table.num_table_entries()
    )?;

    for it in 0..table.num_table_entries() {
        write!(out, "<{}> ", tags::S)?;
        write!(out, "{} ", table.num_simplices(it))?;
        for &iw in table.simplex_vertices(it) {
            write!(out, "{iw} ")?;
        }
        writeln!(out, "</{}>", tags::S)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::read_xit;
    use mcubes_table::{
        Encoding, IsoPolyOrientation, IsoVertex, SeparationKind, TableKind, TriangulationKind,
        Vec3, VertexLabelKind,
    };

    fn sample_table() -> McTable {
        let mut table = McTable::new();
        table.gen_cube3d().unwrap();
        table.set_table_kind(TableKind::Isosurface);
        table.set_encoding(Encoding::Binary);
        table.set_num_iso_vertices(13);
        table.store_poly_edges_as_iso_vertices(0).unwrap();
        table
            .set_iso_vertex(12, IsoVertex::new(IsoVertexSite::AtPoint(Vec3::new(1.0, 1.0, 1.0))))
            .unwrap();
        table.set_iso_vertex_label(12, "center");
        table.set_num_table_entries(4);
        table.set_simplex_vertices(1, &[0, 4, 8]).unwrap();
        table.set_simplex_vertices(2, &[0, 3, 8, 3, 2, 8]).unwrap();

        let properties = table.properties_mut();
        properties.vertex_label_kind = VertexLabelKind::NegPos;
        properties.triangulation_kind = TriangulationKind::ConvexHull;
        properties.separation_kind = SeparationKind::SeparateNeg;
        properties.iso_poly_orientation = IsoPolyOrientation::PositiveOrient;
        table
    }

    #[test]
    fn test_v2_layout() {
        let table = sample_table();
        let mut out = Vec::new();
        write_xit_v2(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("<?xml version=\"1.0\"?>\n<isotable>\n"));
        assert!(text.contains("<tableType> ISOSURFACE </tableType>"));
        assert!(text.contains("<dimension> 3  2 </dimension>"));
        assert!(text.contains("<polyShape> Cube </polyShape>"));
        assert!(text.contains("<c> 0 0 0 </c>"));
        assert!(text.contains("<f> 4 0 2 4 6 </f>"));
        assert!(text.contains("<w> <inE> 0 </inE> </w>"));
        assert!(text.contains("<w> <c> 1 1 1 </c> <L> center </L> </w>"));
        assert!(text.contains("<separationType> SeparateNeg </separationType>"));
        assert!(text.contains("<s> 0 </s>"));
        assert!(text.contains("<s> 2 0 3 8 3 2 8 </s>"));
        assert!(text.ends_with("</isotable>\n"));
    }

    #[test]
    fn test_v1_omits_v2_elements() {
        let table = sample_table();
        let mut out = Vec::new();
        write_xit_v1(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("<version> 1.0 </version>"));
        assert!(!text.contains("tableType"));
        assert!(!text.contains("polyShape"));
        assert!(!text.contains("tableProperties"));
        assert!(text.contains("<encoding> BINARY </encoding>"));
    }

    #[test]
    fn test_v2_round_trip() {
        let table = sample_table();
        let mut out = Vec::new();
        write_xit_v2(&mut out, &table).unwrap();

        let back = read_xit(out.as_slice()).unwrap();
        assert_eq!(back.properties(), table.properties());
        assert_eq!(back.polytope(), table.polytope());
        assert_eq!(back.num_iso_vertices(), table.num_iso_vertices());
        for iw in 0..table.num_iso_vertices() {
            assert_eq!(back.iso_vertex(iw), table.iso_vertex(iw));
        }
        assert_eq!(back.num_table_entries(), table.num_table_entries());
        for it in 0..table.num_table_entries() {
            assert_eq!(back.simplex_vertices(it), table.simplex_vertices(it));
        }
    }

    #[test]
    fn test_v1_round_trip() {
        let table = sample_table();
        let mut out = Vec::new();
        write_xit_v1(&mut out, &table).unwrap();

        let back = read_xit(out.as_slice()).unwrap();
        // v1 carries no polyShape or property block.
        assert!(back.polytope().shape() == PolyShape::Undefined);
        assert_eq!(back.encoding(), Encoding::Binary);
        assert_eq!(back.polytope().num_vertices(), 8);
        for it in 0..table.num_table_entries() {
            assert_eq!(back.simplex_vertices(it), table.simplex_vertices(it));
        }
    }

    #[test]
    fn test_write_unknown_version_fails() {
        let table = sample_table();
        let mut out = Vec::new();
        assert!(write_xit(&mut out, XitVersion::Unknown, &table).is_err());
    }

    #[test]
    fn test_write_then_rewrite_is_stable() {
        let table = sample_table();
        let mut first = Vec::new();
        write_xit_v2(&mut first, &table).unwrap();
        let back = read_xit(first.as_slice()).unwrap();
        let mut second = Vec::new();
        write_xit_v2(&mut second, &back).unwrap();
        assert_eq!(first, second);
    }
}
