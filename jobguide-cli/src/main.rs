//! jobguide CLI
//!
//! Compiles a locale-tagged scrape manifest into the normalized dataset:
//! one JSON file per role/job group plus one language pack per locale.
//! Fetching the guide pages and downloading icons are separate concerns
//! and not handled here.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use jobguide_compiler::{Compiler, EntityGroup, EntityKind, Locales, Manifest};

mod error;
use error::CliError;

#[derive(Parser)]
#[command(name = "jobguide")]
#[command(about = "Compile scraped job-guide pages into a normalized dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a scrape manifest and write the dataset files
    Compile {
        /// Path to the scrape manifest (JSON)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Output directory for dataset and language pack files
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Compile a manifest and print table statistics without writing files
    Inspect {
        /// Path to the scrape manifest (JSON)
        #[arg(short, long)]
        manifest: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile { manifest, out } => run_compile(&manifest, &out),
        Commands::Inspect { manifest } => run_inspect(&manifest),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_compile(manifest_path: &Path, out: &Path) -> Result<(), CliError> {
    let (compiler, groups) = compile_manifest(manifest_path)?;
    let written = write_outputs(out, &groups, &compiler)?;
    println!(
        "Compiled {} groups into {} files under {}",
        groups.len(),
        written.len(),
        out.display()
    );
    Ok(())
}

fn run_inspect(manifest_path: &Path) -> Result<(), CliError> {
    let (compiler, groups) = compile_manifest(manifest_path)?;
    let tables = compiler.tables();
    let actions: usize = groups.iter().map(|g| g.actions.len()).sum();

    println!("Locales:          {}", compiler.locales().tags().join(", "));
    println!("Groups:           {}", groups.len());
    println!("Actions:          {actions}");
    println!("Role names:       {}", tables.roles.len());
    println!("Job names:        {}", tables.jobs.len());
    println!("Action names:     {}", tables.actions.len());
    println!("Classifications:  {}", tables.classifications.len());
    println!("Content blocks:   {}", tables.contents.len());
    Ok(())
}

fn compile_manifest(path: &Path) -> Result<(Compiler, Vec<EntityGroup>), CliError> {
    let raw = fs::read_to_string(path)?;
    let manifest: Manifest = serde_json::from_str(&raw)?;
    let mut compiler = Compiler::new(Locales::new(manifest.locales)?);
    let groups = compiler.compile(&manifest.entities)?;
    Ok((compiler, groups))
}

/// Write one dataset file per group and one language pack per locale,
/// returning the filenames written.
fn write_outputs(
    out: &Path,
    groups: &[EntityGroup],
    compiler: &Compiler,
) -> Result<Vec<String>, CliError> {
    fs::create_dir_all(out)?;
    let mut written = Vec::new();

    for group in groups {
        let filename = match group.kind {
            EntityKind::Role => format!("common_actions.{}.json", group.slug),
            EntityKind::Job => format!("only_actions.{}.json", group.slug),
        };
        fs::write(out.join(&filename), serde_json::to_string(group)?)?;
        log::info!("wrote {} ({} actions)", filename, group.actions.len());
        written.push(filename);
    }

    for (i, tag) in compiler.locales().tags().iter().enumerate() {
        let filename = format!("lang_text.{tag}.json");
        let pack = compiler.tables().language_pack(i);
        fs::write(out.join(&filename), serde_json::to_string(&pack)?)?;
        log::info!("wrote {filename}");
        written.push(filename);
    }

    Ok(written)
}
