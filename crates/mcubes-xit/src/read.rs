//! `.xit` deserialization.
//!
//! Event-driven parse: a tokenizer over `quick-xml` events feeds a
//! recursive descent over the element alphabet. Scanning for an expected
//! tag skips everything in between, so unknown elements interleaved with
//! the expected structure are tolerated, as are unknown elements inside
//! `tableProperties`.

use std::collections::VecDeque;
use std::io::BufRead;

use quick_xml::events::Event;
use quick_xml::Reader;

use mcubes_core::EnumLabel;
use mcubes_table::{IsoVertexSite, McTable, PolyShape, TableKind, Vec3};

use crate::error::{XitError, XitResult};
use crate::tags;
use crate::version::XitVersion;

/// Reads a `.xit` file of either version.
///
/// Version selection follows the `version` element; `2.x` versions other
/// than `2.0` are read tolerantly with the v2 reader.
pub fn read_xit<R: BufRead>(reader: R) -> XitResult<McTable> {
    let mut tokens = XmlTokens::new(reader);
    let mut table = McTable::new();

    tokens.expect_start(tags::ISOTABLE)?;
    tokens.expect_start(tags::VERSION)?;
    let version_str = tokens.read_text()?.trim().to_string();
    tokens.expect_start(tags::CREATION_DATE)?;

    match XitVersion::from_version_str(&version_str) {
        XitVersion::V1_0 => read_v1_data(&mut tokens, &mut table)?,
        XitVersion::V2_0 | XitVersion::V2x => read_v2_data(&mut tokens, &mut table)?,
        XitVersion::Unknown => return Err(XitError::UnknownVersion(version_str)),
    }

    Ok(table)
}

/// Reads an (old) version 1.0 `.xit` file without consulting its version
/// element content.
pub fn read_xit_v1<R: BufRead>(reader: R) -> XitResult<McTable> {
    let mut tokens = XmlTokens::new(reader);
    let mut table = McTable::new();

    tokens.expect_start(tags::VERSION)?;
    tokens.expect_start(tags::CREATION_DATE)?;
    read_v1_data(&mut tokens, &mut table)?;
    Ok(table)
}

fn read_v2_data<R: BufRead>(tokens: &mut XmlTokens<R>, table: &mut McTable) -> XitResult<()> {
    read_table_type(tokens, table)?;
    read_dimension(tokens, table)?;

    tokens.expect_start(tags::POLY)?;
    read_poly_shape(tokens, table)?;
    read_polytope_vertices(tokens, table)?;
    read_polytope_edges(tokens, table)?;
    read_polytope_facets(tokens, table)?;

    read_isosurface_vertices(tokens, table)?;

    tokens.expect_start(tags::TABLE)?;
    read_table_encoding(tokens, table)?;
    read_table_properties(tokens, table)?;
    read_lookup_table_entries(tokens, table)
}

fn read_v1_data<R: BufRead>(tokens: &mut XmlTokens<R>, table: &mut McTable) -> XitResult<()> {
    read_dimension(tokens, table)?;

    tokens.expect_start(tags::POLY)?;
    read_polytope_vertices(tokens, table)?;
    read_polytope_edges(tokens, table)?;
    read_polytope_facets(tokens, table)?;

    read_isosurface_vertices(tokens, table)?;

    tokens.expect_start(tags::TABLE)?;
    read_table_encoding(tokens, table)?;
    read_lookup_table_entries(tokens, table)
}

fn read_table_type<R: BufRead>(tokens: &mut XmlTokens<R>, table: &mut McTable) -> XitResult<()> {
    tokens.expect_start(tags::TABLE_TYPE)?;
    let text = tokens.read_text()?;
    table
        .properties_mut()
        .set_table_kind_from_label(text.trim());
    Ok(())
}

fn read_dimension<R: BufRead>(tokens: &mut XmlTokens<R>, table: &mut McTable) -> XitResult<()> {
    tokens.expect_start(tags::DIMENSION)?;
    let text = tokens.read_text()?;
    let dims = parse_ints(&text, 2, "error reading dimension")?;
    let (poly_dimension, simplex_dimension) = (dims[0], dims[1]);

    if poly_dimension != 3 {
        return Err(XitError::BadPolyDimension(poly_dimension));
    }
    if simplex_dimension != 2 && simplex_dimension != 3 {
        return Err(XitError::BadSimplexDimension(simplex_dimension));
    }

    table.polytope_mut().set_dimension(3);
    table.set_simplex_dimension(usize::try_from(simplex_dimension).expect("2 or 3"));

    if poly_dimension == simplex_dimension {
        table.set_table_kind(TableKind::IntervalVolume);
    } else {
        table.set_table_kind(TableKind::Isosurface);
    }
    Ok(())
}

fn read_poly_shape<R: BufRead>(tokens: &mut XmlTokens<R>, table: &mut McTable) -> XitResult<()> {
    tokens.expect_start(tags::POLY_SHAPE)?;
    let text = tokens.read_text()?;
    let shape = PolyShape::from_label(text.trim());
    table.polytope_mut().set_shape(shape);
    Ok(())
}

fn read_polytope_vertices<R: BufRead>(
    tokens: &mut XmlTokens<R>,
    table: &mut McTable,
) -> XitResult<()> {
    let dimension = table.dimension();

    tokens.expect_start(tags::VERTICES)?;
    tokens.expect_start(tags::NUM_VERTICES)?;
    let num_vertices = parse_count(&tokens.read_text()?, "error reading number of vertices")?;
    table.polytope_mut().set_num_vertices(num_vertices)?;

    for iv in 0..num_vertices {
        tokens.expect_start(tags::C)?;
        let text = tokens.read_text()?;
        let coords = parse_ints(
            &text,
            dimension,
            &format!("error reading vertex coordinates of polyhedron vertex {iv}"),
        )?;
        for (ic, &coord) in coords.iter().take(dimension).enumerate() {
            table.polytope_mut().set_vertex_coord(
                iv,
                ic,
                i32::try_from(coord).map_err(|_| XitError::IndexOutOfRange {
                    context: format!("error reading polyhedron vertex {iv}, coordinate {ic}"),
                    value: coord,
                })?,
            )?;
        }
    }
    Ok(())
}

fn read_polytope_edges<R: BufRead>(
    tokens: &mut XmlTokens<R>,
    table: &mut McTable,
) -> XitResult<()> {
    let num_vertices = table.polytope().num_vertices();

    tokens.expect_start(tags::EDGES)?;
    tokens.expect_start(tags::NUM_EDGES)?;
    let num_edges = parse_count(&tokens.read_text()?, "error reading number of edges")?;
    table.polytope_mut().set_num_edges(num_edges)?;

    for ie in 0..num_edges {
        tokens.expect_start(tags::V)?;
        let text = tokens.read_text()?;
        let ends = parse_ints(&text, 2, &format!("error reading polyhedron edge {ie}"))?;
        for &end in &ends[..2] {
            if end < 0 || end >= i64::try_from(num_vertices).expect("vertex count fits in i64") {
                return Err(XitError::IndexOutOfRange {
                    context: format!("error reading polyhedron edge {ie}: illegal vertex indices"),
                    value: end,
                });
            }
        }
        table.polytope_mut().set_edge(
            ie,
            usize::try_from(ends[0]).expect("checked non-negative"),
            usize::try_from(ends[1]).expect("checked non-negative"),
        )?;
    }
    Ok(())
}

fn read_polytope_facets<R: BufRead>(
    tokens: &mut XmlTokens<R>,
    table: &mut McTable,
) -> XitResult<()> {
    let num_vertices = table.polytope().num_vertices();

    tokens.expect_start(tags::FACETS)?;
    tokens.expect_start(tags::NUM_FACETS)?;
    let num_facets = parse_count(&tokens.read_text()?, "error reading number of facets")?;
    table.polytope_mut().set_num_facets(num_facets)?;

    for jf in 0..num_facets {
        tokens.expect_start(tags::F)?;
        let text = tokens.read_text()?;
        let values = parse_ints(&text, 1, &format!("error reading polyhedron facet {jf}"))?;
        let num_fv = usize::try_from(values[0]).map_err(|_| XitError::IndexOutOfRange {
            context: format!("error reading polyhedron facet {jf}"),
            value: values[0],
        })?;
        if values.len() < 1 + num_fv {
            return Err(XitError::NonNumeric {
                context: format!("error reading polyhedron facet {jf}"),
                text: text.trim().to_string(),
            });
        }

        table.polytope_mut().set_num_facet_vertices(jf, num_fv)?;
        for (k, &iv) in values[1..=num_fv].iter().enumerate() {
            if iv < 0 || iv >= i64::try_from(num_vertices).expect("vertex count fits in i64") {
                return Err(XitError::IndexOutOfRange {
                    context: format!("error reading polyhedron facet {jf}, vertex {k}"),
                    value: iv,
                });
            }
            table.polytope_mut().set_facet_vertex(
                jf,
                k,
                usize::try_from(iv).expect("checked non-negative"),
            )?;
        }
    }

    table.polytope_mut().compute_incident_edges();
    Ok(())
}

fn read_isosurface_vertices<R: BufRead>(
    tokens: &mut XmlTokens<R>,
    table: &mut McTable,
) -> XitResult<()> {
    tokens.expect_start(tags::ISO_VERTICES)?;
    tokens.expect_start(tags::NUM_VERTICES)?;
    let num_iso_vertices = parse_count(
        &tokens.read_text()?,
        "error reading number of isosurface vertices",
    )?;
    table.set_num_iso_vertices(num_iso_vertices);

    for isov in 0..num_iso_vertices {
        read_isosurface_vertex(tokens, table, isov)?;
    }
    Ok(())
}

fn read_isosurface_vertex<R: BufRead>(
    tokens: &mut XmlTokens<R>,
    table: &mut McTable,
    isov: usize,
) -> XitResult<()> {
    tokens.expect_start(tags::W)?;

    // Scan for the site element: exactly one of inV/inE/inF/c.
    let site_tag = loop {
        match tokens.next()? {
            Token::Start(name)
                if matches!(name.as_str(), tags::IN_V | tags::IN_E | tags::IN_F | tags::C) =>
            {
                break name;
            }
            Token::Eof | Token::End(_) => {
                return Err(XitError::Malformed(format!(
                    "error reading isosurface vertex {isov} from .xit file: missing site element"
                )));
            }
            Token::Text(_) | Token::Start(_) => {}
        }
    };

    let text = tokens.read_text()?;
    let site = match site_tag.as_str() {
        tags::C => {
            let coords = parse_floats(
                &text,
                3,
                &format!("error reading isosurface vertex {isov}"),
            )?;
            IsoVertexSite::AtPoint(Vec3::new(coords[0], coords[1], coords[2]))
        }
        _ => {
            let context = format!("error reading isosurface vertex {isov}");
            let index = parse_ints(&text, 1, &context)?[0];
            let index = u8::try_from(index)
                .map_err(|_| XitError::IndexOutOfRange { context, value: index })?;
            match site_tag.as_str() {
                tags::IN_V => IsoVertexSite::OnVertex(index),
                tags::IN_E => IsoVertexSite::OnEdge(index),
                _ => IsoVertexSite::OnFacet(index),
            }
        }
    };
    table.set_iso_vertex_site(isov, site);
    tokens.expect_end(&site_tag)?;

    // Optional label before the closing </w>.
    loop {
        match tokens.next()? {
            Token::Start(name) if name == tags::L => {
                let label = tokens.read_text()?;
                table.set_iso_vertex_label(isov, label.trim().to_string());
            }
            Token::End(name) if name == tags::W => return Ok(()),
            Token::Eof => {
                return Err(XitError::Malformed(
                    "missing end tag for isosurface vertex tag <w>".to_string(),
                ));
            }
            _ => {}
        }
    }
}

fn read_table_encoding<R: BufRead>(
    tokens: &mut XmlTokens<R>,
    table: &mut McTable,
) -> XitResult<()> {
    tokens.expect_start(tags::ENCODING)?;
    let text = tokens.read_text()?;
    table.properties_mut().set_encoding_from_label(text.trim());
    Ok(())
}

fn read_table_properties<R: BufRead>(
    tokens: &mut XmlTokens<R>,
    table: &mut McTable,
) -> XitResult<()> {
    tokens.expect_start(tags::TABLE_PROPERTIES)?;

    loop {
        match tokens.next()? {
            Token::Start(name) => {
                let properties = table.properties_mut();
                match name.as_str() {
                    tags::POLY_VERTEX_LABEL_TYPE => {
                        let text = tokens.read_text()?;
                        properties.set_vertex_label_kind_from_label(text.trim());
                    }
                    tags::SEPARATION_TYPE => {
                        let text = tokens.read_text()?;
                        properties.set_separation_kind_from_label(text.trim());
                    }
                    tags::TRIANGULATION_TYPE => {
                        let text = tokens.read_text()?;
                        properties.set_triangulation_kind_from_label(text.trim());
                    }
                    tags::SEPARATE_OPPOSITE => {
                        let text = tokens.read_text()?;
                        properties.set_separate_opposite_from_label(text.trim());
                    }
                    tags::ISO_POLY_ORIENTATION => {
                        let text = tokens.read_text()?;
                        properties.set_iso_poly_orientation_from_label(text.trim());
                    }
                    _ => {
                        // Ignore unknown property elements.
                    }
                }
            }
            Token::End(name) if name == tags::TABLE_PROPERTIES => return Ok(()),
            Token::Eof => {
                return Err(XitError::Malformed(
                    "error reading table properties: missing end tag </tableProperties>"
                        .to_string(),
                ));
            }
            _ => {}
        }
    }
}

fn read_lookup_table_entries<R: BufRead>(
    tokens: &mut XmlTokens<R>,
    table: &mut McTable,
) -> XitResult<()> {
    tokens.expect_start(tags::NUM_ENTRIES)?;
    let num_entries = parse_count(
        &tokens.read_text()?,
        "error reading number of lookup table entries",
    )?;
    table.set_num_table_entries(num_entries);

    let nv = table.num_vertices_per_simplex();
    for it in 0..num_entries {
        tokens.expect_start(tags::S)?;
        let text = tokens.read_text()?;
        let context = format!("error reading table entry {it}");
        let values = parse_ints(&text, 1, &context)?;

        let num_simplices = usize::try_from(values[0]).map_err(|_| XitError::IndexOutOfRange {
            context: context.clone(),
            value: values[0],
        })?;
        if values.len() < 1 + num_simplices * nv {
            return Err(XitError::NonNumeric {
                context,
                text: text.trim().to_string(),
            });
        }

        let mut simplex_vertices = Vec::with_capacity(num_simplices * nv);
        for &value in &values[1..=num_simplices * nv] {
            let iw = u8::try_from(value).map_err(|_| XitError::IndexOutOfRange {
                context: format!("error reading table entry {it}: illegal isosurface vertex"),
                value,
            })?;
            simplex_vertices.push(iw);
        }
        table.set_simplex_vertices(it, &simplex_vertices)?;
    }
    Ok(())
}

// *** Tokenizer ***

/// One owned XML token.
#[derive(Debug, Clone)]
enum Token {
    Start(String),
    End(String),
    Text(String),
    Eof,
}

/// Owned-token stream over `quick-xml` events.
///
/// Declarations, comments, and processing instructions are skipped, as are
/// whitespace-only text nodes; self-closing elements yield a start token
/// followed by an end token.
struct XmlTokens<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    pending: VecDeque<Token>,
}

impl<R: BufRead> XmlTokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader: Reader::from_reader(reader),
            buf: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    fn next(&mut self) -> XitResult<Token> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(token);
        }

        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(e) => {
                    return Ok(Token::Start(
                        String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                    ));
                }
                Event::End(e) => {
                    return Ok(Token::End(
                        String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                    ));
                }
                Event::Empty(e) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    self.pending.push_back(Token::End(name.clone()));
                    return Ok(Token::Start(name));
                }
                Event::Text(t) => {
                    let text = t.unescape()?.into_owned();
                    if text.trim().is_empty() {
                        continue;
                    }
                    return Ok(Token::Text(text));
                }
                Event::Eof => return Ok(Token::Eof),
                _ => {
                    // Declarations, comments, CDATA, processing instructions.
                }
            }
        }
    }

    fn push_back(&mut self, token: Token) {
        self.pending.push_front(token);
    }

    /// Scans forward to the start tag `tag`, skipping everything else.
    fn expect_start(&mut self, tag: &str) -> XitResult<()> {
        loop {
            match self.next()? {
                Token::Start(name) if name == tag => return Ok(()),
                Token::Eof => return Err(XitError::MissingStartTag(tag.to_string())),
                _ => {}
            }
        }
    }

    /// Scans forward to the end tag `tag`, skipping everything else.
    fn expect_end(&mut self, tag: &str) -> XitResult<()> {
        loop {
            match self.next()? {
                Token::End(name) if name == tag => return Ok(()),
                Token::Eof => return Err(XitError::MissingEndTag(tag.to_string())),
                _ => {}
            }
        }
    }

    /// Returns the next text node, or an empty string if the next token is
    /// markup (which is pushed back).
    fn read_text(&mut self) -> XitResult<String> {
        match self.next()? {
            Token::Text(text) => Ok(text),
            Token::Eof => Ok(String::new()),
            other => {
                self.push_back(other);
                Ok(String::new())
            }
        }
    }
}

// *** Numeric parsing ***

/// Parses at least `min_count` whitespace-separated integers.
fn parse_ints(text: &str, min_count: usize, context: &str) -> XitResult<Vec<i64>> {
    let values: Result<Vec<i64>, _> = text.split_whitespace().map(str::parse).collect();
    match values {
        Ok(values) if values.len() >= min_count => Ok(values),
        _ => Err(XitError::NonNumeric {
            context: context.to_string(),
            text: text.trim().to_string(),
        }),
    }
}

/// Parses a single non-negative count.
fn parse_count(text: &str, context: &str) -> XitResult<usize> {
    let value = parse_ints(text, 1, context)?[0];
    usize::try_from(value).map_err(|_| XitError::IndexOutOfRange {
        context: context.to_string(),
        value,
    })
}

/// Parses at least `min_count` whitespace-separated floats.
fn parse_floats(text: &str, min_count: usize, context: &str) -> XitResult<Vec<f32>> {
    let values: Result<Vec<f32>, _> = text.split_whitespace().map(str::parse).collect();
    match values {
        Ok(values) if values.len() >= min_count => Ok(values),
        _ => Err(XitError::NonNumeric {
            context: context.to_string(),
            text: text.trim().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcubes_table::{Encoding, SeparationKind};

    const SMALL_V2: &str = r#"<?xml version="1.0"?>
<isotable>
<!-- Isosurface lookup table -->
<version> 2.0 </version>
<creationDate> 2024-11-05 </creationDate>
<tableType> ISOSURFACE </tableType>
<dimension> 3  2 </dimension>
<poly>
<polyShape> Cube </polyShape>
<vertices>
<numVertices> 8 </numVertices>
<c> 0 0 0 </c>
<c> 2 0 0 </c>
<c> 0 2 0 </c>
<c> 2 2 0 </c>
<c> 0 0 2 </c>
<c> 2 0 2 </c>
<c> 0 2 2 </c>
<c> 2 2 2 </c>
</vertices>
<edges>
<numEdges> 12 </numEdges>
<v> 0 1 </v>
<v> 2 3 </v>
<v> 4 5 </v>
<v> 6 7 </v>
<v> 0 2 </v>
<v> 1 3 </v>
<v> 4 6 </v>
<v> 5 7 </v>
<v> 0 4 </v>
<v> 1 5 </v>
<v> 2 6 </v>
<v> 3 7 </v>
</edges>
<facets>
<numFacets> 6 </numFacets>
<f> 4 0 2 4 6 </f>
<f> 4 1 3 5 7 </f>
<f> 4 0 1 4 5 </f>
<f> 4 2 3 6 7 </f>
<f> 4 0 1 2 3 </f>
<f> 4 4 5 6 7 </f>
</facets>
</poly>
<isoVertices>
<numVertices> 12 </numVertices>
<w> <inE> 0 </inE> </w>
<w> <inE> 1 </inE> </w>
<w> <inE> 2 </inE> </w>
<w> <inE> 3 </inE> </w>
<w> <inE> 4 </inE> </w>
<w> <inE> 5 </inE> </w>
<w> <inE> 6 </inE> </w>
<w> <inE> 7 </inE> </w>
<w> <inE> 8 </inE> </w>
<w> <inE> 9 </inE> <L> corner </L> </w>
<w> <inE> 10 </inE> </w>
<w> <inE> 11 </inE> </w>
</isoVertices>
<table>
<encoding> BINARY </encoding>
<tableProperties>
<polyVertexLabelType> NegPos </polyVertexLabelType>
<separationType> SeparateNeg </separationType>
<isoPolyOrientation> PositiveOrient </isoPolyOrientation>
</tableProperties>
<numEntries> 4 </numEntries>
<s> 0 </s>
<s> 1 0 4 8 </s>
<s> 2 0 3 8 3 2 8 </s>
<s> 0 </s>
</table>
</isotable>
"#;

    #[test]
    fn test_read_small_v2() {
        let table = read_xit(SMALL_V2.as_bytes()).unwrap();

        assert_eq!(table.dimension(), 3);
        assert_eq!(table.simplex_dimension(), 2);
        assert_eq!(table.polytope().num_vertices(), 8);
        assert_eq!(table.polytope().num_edges(), 12);
        assert_eq!(table.polytope().num_facets(), 6);
        assert_eq!(table.polytope().shape(), PolyShape::Cube);
        assert_eq!(table.polytope().facet_vertices(0), &[0, 2, 4, 6]);
        assert_eq!(table.num_iso_vertices(), 12);
        assert_eq!(table.iso_vertex(3).site, IsoVertexSite::OnEdge(3));
        assert_eq!(table.iso_vertex(9).label.as_deref(), Some("corner"));
        assert_eq!(table.encoding(), Encoding::Binary);
        assert_eq!(
            table.properties().separation_kind,
            SeparationKind::SeparateNeg
        );
        assert_eq!(table.num_table_entries(), 4);
        assert_eq!(table.num_simplices(0), 0);
        assert_eq!(table.simplex_vertices(1), &[0, 4, 8]);
        assert_eq!(table.simplex_vertices(2), &[0, 3, 8, 3, 2, 8]);
        assert_eq!(table.properties().table_kind, TableKind::Isosurface);
        table.check().unwrap();
    }

    #[test]
    fn test_read_rejects_unknown_version() {
        let doc = SMALL_V2.replace("<version> 2.0 </version>", "<version> 7.1 </version>");
        let err = read_xit(doc.as_bytes()).unwrap_err();
        assert!(matches!(err, XitError::UnknownVersion(v) if v == "7.1"));
    }

    #[test]
    fn test_read_tolerates_2x_version() {
        let doc = SMALL_V2.replace("<version> 2.0 </version>", "<version> 2.3 </version>");
        let table = read_xit(doc.as_bytes()).unwrap();
        assert_eq!(table.num_table_entries(), 4);
    }

    #[test]
    fn test_read_rejects_bad_dimension() {
        let doc = SMALL_V2.replace("<dimension> 3  2 </dimension>", "<dimension> 4  3 </dimension>");
        let err = read_xit(doc.as_bytes()).unwrap_err();
        assert!(matches!(err, XitError::BadPolyDimension(4)));
    }

    #[test]
    fn test_read_rejects_bad_edge_endpoint() {
        let doc = SMALL_V2.replace("<v> 3 7 </v>", "<v> 3 9 </v>");
        let err = read_xit(doc.as_bytes()).unwrap_err();
        assert!(matches!(err, XitError::IndexOutOfRange { value: 9, .. }));
    }

    #[test]
    fn test_read_rejects_non_numeric_content() {
        let doc = SMALL_V2.replace("<numEntries> 4 </numEntries>", "<numEntries> four </numEntries>");
        let err = read_xit(doc.as_bytes()).unwrap_err();
        assert!(matches!(err, XitError::NonNumeric { .. }));
    }

    #[test]
    fn test_read_missing_tag() {
        let doc = SMALL_V2.replace("<numEntries> 4 </numEntries>", "");
        let err = read_xit(doc.as_bytes()).unwrap_err();
        assert!(matches!(err, XitError::MissingStartTag(tag) if tag == "numEntries"));
    }

    #[test]
    fn test_interval_volume_dimension_cross_check() {
        // Polytope dim == simplex dim selects the interval-volume type.
        let doc = SMALL_V2
            .replace("<dimension> 3  2 </dimension>", "<dimension> 3  3 </dimension>")
            .replace("<s> 1 0 4 8 </s>", "<s> 1 0 4 8 2 </s>")
            .replace("<s> 2 0 3 8 3 2 8 </s>", "<s> 2 0 3 8 5 3 2 8 5 </s>");
        let table = read_xit(doc.as_bytes()).unwrap();
        assert_eq!(table.properties().table_kind, TableKind::IntervalVolume);
        assert!(table.is_interval_volume());
        assert_eq!(table.num_vertices_per_simplex(), 4);
    }
}
