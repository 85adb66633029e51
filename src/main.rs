#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::Catalog;

/// Global content catalog, resolved from the command line before launch
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Get the content catalog (loaded from --catalog, or the built-in one)
pub fn get_catalog() -> Catalog {
    CATALOG.get().cloned().unwrap_or_else(Catalog::builtin)
}

/// Portfolio - single-page developer portfolio as a desktop app
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio page with project cards and detail modals")]
struct Args {
    /// JSON content catalog replacing the built-in content
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let catalog = match args.catalog {
        Some(path) => Catalog::from_path(&path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };

    let title = format!("{} - Portfolio", catalog.profile.name);
    tracing::info!(
        "Starting portfolio with {} projects, {} skill groups",
        catalog.projects.len(),
        catalog.skill_groups.len()
    );

    let _ = CATALOG.set(catalog);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
