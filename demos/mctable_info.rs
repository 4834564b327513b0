//! Print information about a Marching Cubes lookup table.
//!
//! Usage: `mctable_info {MCtable .xit file}`

use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use mcubes_rs::{check_mcube_table_orientation, read_xit, EnumLabel, McTable};

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(filename) = args.next() else {
        eprintln!("Usage: mctable_info {{MCtable .xit file}}");
        return ExitCode::FAILURE;
    };
    if args.next().is_some() {
        eprintln!("Usage: mctable_info {{MCtable .xit file}}");
        return ExitCode::FAILURE;
    }

    match run(&filename) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(filename: &str) -> Result<(), String> {
    let file = File::open(filename).map_err(|e| format!("Unable to open {filename}: {e}"))?;
    let table = read_xit(BufReader::new(file)).map_err(|e| e.to_string())?;

    table.check().map_err(|e| e.to_string())?;
    print_table_info(&table);
    Ok(())
}

fn print_table_info(table: &McTable) {
    let poly = table.polytope();

    println!("Polytope shape: {}", poly.shape().as_label());
    println!("Polytope dimension: {}", table.dimension());
    println!("Simplex dimension: {}", table.simplex_dimension());
    println!("Number of polytope vertices: {}", poly.num_vertices());
    println!("Number of polytope edges: {}", poly.num_edges());
    println!("Number of polytope facets: {}", poly.num_facets());
    println!("Number of isosurface vertices: {}", table.num_iso_vertices());
    println!("Number of table entries: {}", table.num_table_entries());
    print!("{}", table.properties());

    let total_simplices: usize = (0..table.num_table_entries())
        .map(|it| table.num_simplices(it))
        .sum();
    let max_simplices = (0..table.num_table_entries())
        .map(|it| table.num_simplices(it))
        .max()
        .unwrap_or(0);
    let num_empty = (0..table.num_table_entries())
        .filter(|&it| table.num_simplices(it) == 0)
        .count();

    println!("Total number of simplices: {total_simplices}");
    println!("Max simplices per entry: {max_simplices}");
    println!("Empty entries: {num_empty}");

    match check_mcube_table_orientation(table, false) {
        Ok(()) => println!("Orientation: consistent"),
        Err(e) => println!("Orientation: INCONSISTENT\n{e}"),
    }
}
