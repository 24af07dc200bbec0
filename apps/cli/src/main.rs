//! `memoria` — host memory report and classic memory-management demos.
//!
//! Invoked bare, it prints the three-line host memory report and exits.
//! The subcommands walk the paging, segmentation and swapping models
//! through their demo sequences.

use anyhow::Result;
use clap::{Parser, Subcommand};
use memoria_mm::paging::PageTable;
use memoria_mm::segmentation::SegmentTable;
use memoria_mm::swapping::SwappedProcess;
use memoria_system::memory::{HostMemoryProvider, MemoryInfoProvider};
use memoria_system::report;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "memoria", version, about = "Host memory report and classic memory-management demos")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the one-shot host memory report (the default)
    Report,
    /// Load, access and free two pages of a fixed page table
    Paging,
    /// Lay out code, data and stack segments, then tear them down
    Segmentation,
    /// Move one process into memory and back to the swap area
    Swapping,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed command line");

    match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => run_report(),
        Commands::Paging => run_paging(),
        Commands::Segmentation => run_segmentation(),
        Commands::Swapping => run_swapping(),
    }
}

/// Logs go to stderr so stdout carries exactly the report lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Query the host once, print the three report lines, exit.
///
/// A provider failure propagates: non-zero exit, diagnostic on stderr,
/// no retry, no fallback figures.
fn run_report() -> Result<()> {
    let snapshot = HostMemoryProvider.snapshot()?;
    println!("{}", report::render(&snapshot));
    Ok(())
}

fn run_paging() -> Result<()> {
    let mut table = PageTable::with_defaults();

    for page in [0, 1] {
        let loaded = table.load_page(page)?;
        println!(
            "Página {} cargada en la dirección {:#x}.",
            loaded.page, loaded.frame
        );
    }
    for page in [0, 1] {
        let resident = table.access(page)?;
        println!(
            "Accediendo a datos en la página {} en {:#x}.",
            resident.page, resident.frame
        );
    }
    for page in [0, 1] {
        table.free_page(page)?;
        println!("Página {page} liberada de la memoria.");
    }
    Ok(())
}

fn run_segmentation() -> Result<()> {
    let mut table = SegmentTable::new(3);

    for (segment, size) in [(0, 1024), (1, 2048), (2, 512)] {
        let loaded = table.load_segment(segment, size)?;
        println!(
            "Segmento {} asignado con tamaño {} bytes en la dirección {:#x}.",
            loaded.segment, loaded.size, loaded.base
        );
    }
    for (segment, name) in [(0, "código"), (1, "datos")] {
        let resident = table.access(segment)?;
        println!("Accediendo a segmento de {name} en {:#x}.", resident.base);
    }
    for segment in 0..3 {
        table.free_segment(segment)?;
        println!("Segmento {segment} liberado de la memoria.");
    }
    Ok(())
}

fn run_swapping() -> Result<()> {
    let mut process = SwappedProcess::new(1, 1024)?;

    let base = process.swap_in()?;
    println!(
        "Proceso {} movido a memoria desde el área de swap.",
        process.pid()
    );
    println!(
        "Accediendo a proceso {} en la memoria en {:#x}.",
        process.pid(),
        base
    );

    process.swap_out()?;
    println!("Proceso {} movido al área de swap.", process.pid());
    Ok(())
}
