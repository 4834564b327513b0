//! Build a small cube lookup table programmatically, orient it, and write
//! it to stdout as `.xit` version 2.
//!
//! The table holds entries for the configurations separating cube vertex
//! 0, cube vertex 4, and both; every other entry is empty. It exercises
//! the full construction sequence: generate polytope, size the isosurface
//! vertex array, populate entries, set properties, run the orientation
//! engine, serialize.

use std::io::{self, Write};
use std::process::ExitCode;

use mcubes_rs::{
    check_mcube_table_orientation, orient_mcube_table, write_xit_v2, Encoding, McTable,
    SeparationKind, TableKind, TriangulationKind, VertexLabelKind,
};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let mut table = McTable::new();
    table.gen_cube3d().map_err(|e| e.to_string())?;
    table.set_table_kind(TableKind::Isosurface);
    table.set_encoding(Encoding::Binary);

    // One isosurface vertex per cube edge.
    table.set_num_iso_vertices(12);
    table
        .store_poly_edges_as_iso_vertices(0)
        .map_err(|e| e.to_string())?;

    table.set_num_table_entries(256);

    // Vertex 0 positive: triangle across the three edges incident to it.
    table
        .set_simplex_vertices(1, &[0, 4, 8])
        .map_err(|e| e.to_string())?;
    // Vertex 4 positive.
    table
        .set_simplex_vertices(16, &[2, 6, 8])
        .map_err(|e| e.to_string())?;
    // Vertices 0 and 4 positive: quad split into two triangles.
    table
        .set_simplex_vertices(17, &[0, 2, 6, 0, 6, 4])
        .map_err(|e| e.to_string())?;

    let properties = table.properties_mut();
    properties.vertex_label_kind = VertexLabelKind::NegPos;
    properties.triangulation_kind = TriangulationKind::ConvexHull;
    properties.separation_kind = SeparationKind::SeparatePos;

    table.check().map_err(|e| e.to_string())?;

    // Seed the orientation from the single-triangle entry.
    table.sort_simplex_vertices(1, 0);
    orient_mcube_table(&mut table, 1).map_err(|e| e.to_string())?;
    check_mcube_table_orientation(&table, false).map_err(|e| e.to_string())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_xit_v2(&mut out, &table).map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())?;
    Ok(())
}
