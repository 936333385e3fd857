//! Regenerates the block palette constant tables.
//!
//! Usage: `block-palette-gen <palette-file>`
//!
//! The tables are written under `generated/` in the working directory. Set
//! `RUST_LOG=block_palette_gen=debug` for per-stage details.

use std::path::Path;
use std::process::ExitCode;

use block_palette_gen::{GeneratorConfig, generate};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!(
            "This tool regenerates BlockTypeNames, BlockStateNames and BlockStateStringValues from a given palette file"
        );
        eprintln!(
            "Usage: {} <palette-file>",
            args.first().map_or("block-palette-gen", String::as_str)
        );
        return ExitCode::FAILURE;
    }

    match run(Path::new(&args[1])) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[allow(clippy::print_stdout)]
fn run(palette: &Path) -> eyre::Result<()> {
    // Logs go to stderr so stdout only carries the result line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("block_palette_gen=info".parse()?),
        )
        .init();

    let summary = generate(palette, &GeneratorConfig::default())?;

    println!(
        "Done. Generated {} block type names, {} state names and {} state string values from {} block states.",
        summary.type_names, summary.properties, summary.string_values, summary.states
    );
    Ok(())
}
