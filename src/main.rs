// ============================================================================
// main.rs — iconsmith CLI entry point
// ============================================================================

use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use colored::*;

use iconsmith::options::{CliOptions, Command, GenerateArgs};
use iconsmith::{clean_icons, generate_icons, Config, GenerateEvent, GenerateOptions, IconRenderer};

fn main() {
    let options = CliOptions::parse();

    let result = match options.into_command() {
        Command::Generate(args) => run_generate(&args),
        Command::Clean { out_dir, sizes, config, verbose } => {
            run_clean(out_dir, sizes, config.as_deref(), verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "✗ Error:".red().bold(), e);
        process::exit(1);
    }
}

/// Config file (explicit or discovered in the working directory) merged with
/// command-line overrides.
fn resolve_options(
    config_path: Option<&Path>,
    out_dir: Option<PathBuf>,
    sizes: Vec<u32>,
    keep_going: bool,
) -> anyhow::Result<(GenerateOptions, Option<PathBuf>)> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let (config, used) = Config::discover(config_path, &cwd)?;
    Ok((GenerateOptions::resolve(&config, out_dir, sizes, keep_going), used))
}

fn run_generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let start_time = Instant::now();
    let verbose = args.show_verbose_output();
    let quiet = args.quiet;

    let (opts, used_config) = resolve_options(
        args.config.as_deref(),
        args.out_dir.clone(),
        args.sizes.clone(),
        args.keep_going,
    )?;

    if verbose {
        println!("{}", format!("iconsmith v{}", env!("CARGO_PKG_VERSION")).cyan().bold());
        match &used_config {
            Some(path) => println!("  Config: {}", path.display()),
            None => println!("  Config: (built-in defaults)"),
        }
        println!("  Output: {}", opts.output_dir.display());
        println!("  Sizes: {:?}", opts.sizes);
        if opts.keep_going {
            println!("  Keep going after failures");
        }
    }

    let renderer = IconRenderer::default();
    let report = generate_icons(&opts, &renderer, |event| match event {
        GenerateEvent::DirectoryReady(dir) => {
            if verbose {
                println!("  Output directory ready: {}", dir.display());
            }
        }
        GenerateEvent::Generated { path, size, scale, stroke } => {
            if !quiet {
                println!("{} Generated {} ({}x{})", "✓".green(), path.display(), size, size);
            }
            if verbose {
                println!("    scale {:.4}, stroke {}px", scale, stroke);
            }
        }
        GenerateEvent::Failed { path, size, error } => {
            eprintln!("{} {} ({}x{}): {}", "✗".red(), path.display(), size, size, error);
        }
    })
    .context("icon generation failed")?;

    if !quiet {
        println!(
            "{}",
            format!(
                "✓ {} icon(s) written to {} in {:.0?}",
                report.icons.len(),
                opts.output_dir.display(),
                start_time.elapsed()
            )
            .green()
            .bold()
        );
    }
    Ok(())
}

fn run_clean(
    out_dir: Option<PathBuf>,
    sizes: Vec<u32>,
    config_path: Option<&Path>,
    verbose: bool,
) -> anyhow::Result<()> {
    let (opts, _) = resolve_options(config_path, out_dir, sizes, false)?;
    let removed = clean_icons(&opts.output_dir, &opts.sizes)?;
    if verbose {
        for path in &removed {
            println!("  Removed {}", path.display());
        }
    }
    if removed.is_empty() {
        println!("  No generated icons to clean in {}.", opts.output_dir.display());
    } else {
        println!(
            "{}",
            format!("✓ Cleaned {} icon file{}.", removed.len(), if removed.len() == 1 { "" } else { "s" })
                .green()
        );
    }
    Ok(())
}
