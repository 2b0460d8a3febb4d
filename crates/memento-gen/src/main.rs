use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use memento_codegen::{FsFiler, GenerationConfig, MemoryFiler, Processor};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod manifest;

use manifest::Manifest;

#[derive(Parser)]
#[command(
    name = "memento-gen",
    about = "Generate $Memento companions for retained activity fields"
)]
struct Cli {
    /// Path to the JSON manifest describing types and retained fields
    manifest: PathBuf,
    /// Directory to write generated sources to (prints to stdout if omitted)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
    /// Spaces per indentation level
    #[arg(long, default_value_t = 2)]
    indent: usize,
    /// Package of the runtime library defining MementoMethods
    #[arg(long)]
    library_package: Option<String>,
    /// Log classification details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli, &mut std::io::stdout().lock())
}

/// Generates every companion described by the manifest. Sources go to
/// `--out-dir` when given, otherwise to `stdout`.
fn run(cli: Cli, stdout: &mut impl Write) -> anyhow::Result<()> {
    let contents = fs::read_to_string(&cli.manifest)
        .with_context(|| format!("failed to read {}", cli.manifest.display()))?;
    let manifest = Manifest::parse(&contents)
        .with_context(|| format!("invalid manifest {}", cli.manifest.display()))?;
    let fields = manifest.annotated_fields()?;

    let config = GenerationConfig::builder()
        .indent_width(cli.indent)
        .maybe_library_package(cli.library_package)
        .build();
    let processor = Processor::new(config);

    match cli.out_dir {
        Some(out_dir) => {
            let mut filer = FsFiler::new(out_dir);
            let units = processor.process(&fields, &mut filer)?;
            for unit in &units {
                info!(
                    "wrote {}",
                    filer.path_for(&unit.qualified_class_name).display()
                );
            }
        }
        None => {
            let mut filer = MemoryFiler::new();
            processor.process(&fields, &mut filer)?;
            for (name, source) in filer.sources() {
                writeln!(stdout, "// {name}")?;
                write!(stdout, "{source}")?;
            }
            stdout.flush()?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
