use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anstyle::{AnsiColor, Effects, Style};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use relpack_core::AppManifest;
use relpack_resolver::{sort_applications, CycleError};

#[derive(Parser, Debug)]
#[command(name = "relpack")]
#[command(about = "Compute the application load order for a release", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the load order, dependencies first
    Order { paths: Vec<PathBuf> },
    /// Verify a load order exists without printing it
    Check { paths: Vec<PathBuf> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Order { paths } => {
            let apps = load_manifests(&paths)?;
            check_dependencies(&apps)?;
            match sort_applications(apps) {
                Ok(ordered) => {
                    for app in &ordered {
                        println!("{}", format_order_line(app));
                    }
                }
                Err(cycle) => {
                    report_cycle(&cycle);
                    std::process::exit(1);
                }
            }
        }
        Commands::Check { paths } => {
            let apps = load_manifests(&paths)?;
            check_dependencies(&apps)?;
            let count = apps.len();
            match sort_applications(apps) {
                Ok(_) => println!("ok: {count} applications, load order exists"),
                Err(cycle) => {
                    report_cycle(&cycle);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn load_manifests(paths: &[PathBuf]) -> Result<Vec<AppManifest>> {
    if paths.is_empty() {
        bail!("no manifest paths given");
    }

    let mut apps = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries = Vec::new();
            for entry in fs::read_dir(path)
                .with_context(|| format!("failed to read directory {}", path.display()))?
            {
                let entry =
                    entry.with_context(|| format!("failed to read directory {}", path.display()))?;
                let entry_path = entry.path();
                if entry_path.extension().is_some_and(|ext| ext == "toml") {
                    entries.push(entry_path);
                }
            }
            entries.sort();
            for entry_path in entries {
                apps.push(read_manifest(&entry_path)?);
            }
        } else {
            apps.push(read_manifest(path)?);
        }
    }
    Ok(apps)
}

fn read_manifest(path: &Path) -> Result<AppManifest> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    AppManifest::from_toml_str(&raw)
        .with_context(|| format!("invalid application manifest {}", path.display()))
}

fn check_dependencies(apps: &[AppManifest]) -> Result<()> {
    let known: HashSet<&str> = apps.iter().map(|app| app.name.as_str()).collect();
    for app in apps {
        for dependency in app.dependency_names() {
            if !known.contains(dependency) {
                bail!(
                    "application '{}' depends on '{}', but no manifest for it was given",
                    app.name,
                    dependency
                );
            }
        }
    }
    Ok(())
}

fn format_order_line(app: &AppManifest) -> String {
    format!("{} {}", app.name, app.version)
}

fn report_cycle(cycle: &CycleError) {
    let style = Style::new()
        .fg_color(Some(AnsiColor::Red.into()))
        .effects(Effects::BOLD);
    eprintln!("{}error{}: {cycle}", style.render(), style.render_reset());
}

#[cfg(test)]
mod tests;
