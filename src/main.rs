//! Flowmap CLI - cubemap velocity field to flow map converter.
//!
//! Reads a raw per-face cubemap velocity field, projects every sample into
//! the tangent frame of a subdivided sphere mesh, and writes six per-face
//! flow map PNGs.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use flowmap::export::{export_flow_maps, PngExportOptions};
use flowmap::field::VelocityField;
use flowmap::mesh::SphereMesh;
use flowmap::project::project_field;

/// Converts a cubemap velocity field into per-face tangent-space flow maps.
#[derive(Parser)]
#[command(name = "flowmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the raw velocity field dump (6 faces of DxD 3-float samples,
    /// host byte order).
    #[arg(short = 'v', long)]
    velocity_field: PathBuf,

    /// Output directory for the six flow map PNGs.
    #[arg(short = 'f', long)]
    flow_map: PathBuf,

    /// Per-face resolution of the velocity field in texels.
    #[arg(short, long, default_value = "2048")]
    resolution: u32,

    /// Sphere mesh subdivision level per cube face.
    #[arg(short, long, default_value = "64")]
    subdivision: u32,

    /// Base name for output files.
    #[arg(short, long, default_value = "flow")]
    name: String,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    std::process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    if cli.resolution < 2 || cli.resolution > 8192 || cli.resolution % 2 != 0 {
        eprintln!("Error: Resolution must be even and between 2 and 8192");
        return 1;
    }

    if cli.subdivision < 2 || cli.subdivision > 512 || cli.subdivision % 2 != 0 {
        eprintln!("Error: Subdivision must be even and between 2 and 512");
        return 1;
    }

    println!("Flowmap - Cubemap Velocity Field Converter");
    println!("==========================================");
    println!("Resolution:  {}x{} per face", cli.resolution, cli.resolution);
    println!("Subdivision: {} per face", cli.subdivision);
    println!("Output:      {}", cli.flow_map.display());

    let start = Instant::now();

    println!("\nLoading velocity field: {}", cli.velocity_field.display());
    let field = match VelocityField::load(&cli.velocity_field, cli.resolution) {
        Ok(field) => field,
        Err(e) => {
            eprintln!("Error loading velocity field: {}", e);
            return 2;
        }
    };
    println!(
        "  Loaded {} bytes in {:.2?}",
        VelocityField::file_size(cli.resolution),
        start.elapsed()
    );

    println!("Building sphere mesh...");
    let mesh_start = Instant::now();
    let mesh = SphereMesh::spherified_cube(cli.subdivision);
    println!(
        "  {} vertices, {} triangles in {:.2?}",
        mesh.vertices().len(),
        mesh.triangles().len(),
        mesh_start.elapsed()
    );

    println!("Projecting velocity field into tangent space...");
    let project_start = Instant::now();
    let flow = project_field(&field, &mesh);
    println!("  Projection completed in {:.2?}", project_start.elapsed());

    println!("Writing flow maps...");
    let options = PngExportOptions::default();
    match export_flow_maps(&flow, &cli.flow_map, &cli.name, &options) {
        Ok(0) => println!("  Exported 6 PNG files: {}_*.png", cli.name),
        Ok(failures) => eprintln!("  {} of 6 flow maps failed to write", failures),
        Err(e) => eprintln!("Error writing flow maps: {}", e),
    }

    println!("\nTotal time: {:.2?}", start.elapsed());
    println!("Done!");
    0
}
