//! PCK CLI commands
//!
//! Commands for inspecting PCK files and exporting their meshes.

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{CUBE, DISK, LOOKING_GLASS, print_done, print_step};
use crate::config::Settings;
use crate::converter::write_obj;
use crate::formats::pck::parse_pck_bytes;
use crate::mesh::MeshReport;
use crate::mesh::report::{hex_string, section_bytes};

/// Export flags given on the command line; they override the config file.
pub struct ExportFlags<'a> {
    pub include_inactive: bool,
    pub scale: bool,
    pub config: Option<&'a Path>,
    pub quiet: bool,
}

/// Inspect a PCK file and display its vertex groups.
pub fn inspect(path: &Path, hex: bool) -> anyhow::Result<()> {
    println!("Inspecting PCK file: {}", path.display());
    println!();

    let data = std::fs::read(path)?;
    let collection = parse_pck_bytes(&data)?;

    println!("Vertex groups found: {}", collection.len());
    for submesh in collection.submeshes() {
        let stats = submesh.stats();
        let vertex_section = submesh.vertex_section();

        println!();
        println!("Group {} (pattern {}):", submesh.index() + 1, submesh.variant());
        println!("  Vertices:        {}", stats.vertex_count);
        println!(
            "  Vertex offset:   0x{:X} - 0x{:X}",
            vertex_section.offset,
            vertex_section.end()
        );
        println!("  UVs:             {}", stats.uv_count);
        println!("  Active faces:    {}", stats.active_face_count);
        println!("  Inactive faces:  {}", stats.inactive_face_count);

        for section in submesh.sections() {
            println!(
                "    {:6} | 0x{:06X} | {:>3} records | {:>4} bytes",
                section.kind.to_string(),
                section.offset,
                section.record_count,
                section.byte_len
            );
            if hex {
                println!("      {}", hex_string(section_bytes(&data, section)));
            }
        }
    }

    let totals = collection.totals();
    println!();
    println!("Totals");
    println!("======");
    println!("Vertices:        {}", totals.vertex_count);
    println!("UVs:             {}", totals.uv_count);
    println!("Active faces:    {}", totals.active_face_count);
    println!("Inactive faces:  {}", totals.inactive_face_count);

    Ok(())
}

/// Write the mesh report as JSON.
pub fn info(path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let collection = crate::formats::pck::read_pck(path)?;
    let json = MeshReport::from_collection(&collection)
        .with_file_path(path.display().to_string())
        .to_json()?;

    if let Some(output) = output {
        std::fs::write(output, json)?;
        println!("Written to: {}", output.display());
    } else {
        println!("{json}");
    }
    Ok(())
}

/// Export a PCK file to OBJ.
pub fn export(path: &Path, output: Option<&Path>, flags: &ExportFlags<'_>) -> anyhow::Result<()> {
    let started = Instant::now();
    let output_path = output.map_or_else(|| path.with_extension("obj"), Path::to_path_buf);

    let mut options = Settings::load_or_default(flags.config)?.export;
    options.include_inactive |= flags.include_inactive;
    options.scale_vertices |= flags.scale;

    if !flags.quiet {
        print_step(1, 3, LOOKING_GLASS, &format!("Reading {}...", path.display()));
    }
    let data = std::fs::read(path)?;

    if !flags.quiet {
        print_step(2, 3, CUBE, "Reconciling submeshes...");
    }
    let collection = parse_pck_bytes(&data)?;
    drop(data);

    if !flags.quiet {
        print_step(3, 3, DISK, &format!("Writing {}...", output_path.display()));
    }
    write_obj(&output_path, &collection, &options)?;

    if !flags.quiet {
        let totals = collection.totals();
        println!(
            "  {} groups, {} vertices, {} UVs, {} faces",
            collection.len(),
            totals.vertex_count,
            totals.uv_count,
            totals.exported_face_count(options.include_inactive)
        );
        print_done(started.elapsed());
    }
    Ok(())
}
