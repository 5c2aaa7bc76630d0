#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod resume_file;
mod sections;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{Portfolio, DEFAULT_PREVIEW_TIMEOUT};
use tracing_subscriber::EnvFilter;

use crate::context::SiteSettings;
use crate::resume_file::ResumeDocument;

/// Portfolio - personal site in a desktop window
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio and resume site")]
struct Args {
    /// Content file to show instead of the bundled content (JSON)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Disable reveal animations regardless of the OS setting
    #[arg(long)]
    reduced_motion: bool,

    /// Location of the resume document (defaults to the bundled copy)
    #[arg(long)]
    resume_url: Option<String>,

    /// Give up on the embedded resume preview after this long
    #[arg(long, default_value_t = DEFAULT_PREVIEW_TIMEOUT.as_millis() as u64)]
    preview_timeout_ms: u64,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Log filter, e.g. "info" or "portfolio_core=debug" (defaults to RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_portfolio(args: &Args) -> anyhow::Result<Portfolio> {
    let portfolio = match args.content {
        Some(ref path) => Portfolio::from_path(path)
            .with_context(|| format!("failed to load content from {}", path.display()))?,
        None => Portfolio::builtin().context("bundled content is invalid")?,
    };
    Ok(match args.resume_url {
        Some(ref url) => portfolio.with_resume_url(url.clone()),
        None => portfolio,
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log.as_deref());

    let portfolio = load_portfolio(&args)?;
    let resume = ResumeDocument::resolve(
        portfolio.personal.resume_url.as_deref(),
        &resume_file::default_copy_dir(),
    );
    tracing::debug!(url = resume.asset.url(), bundled = resume.bundled, "Resume resolved");
    let settings = SiteSettings {
        force_reduced_motion: args.reduced_motion,
        preview_timeout: Duration::from_millis(args.preview_timeout_ms),
        resume,
    };

    let title = format!("{} \u{2014} {}", portfolio.personal.name, portfolio.personal.title);
    tracing::info!(
        "Starting '{}' ({} projects, reduced motion forced: {})",
        portfolio.personal.name,
        portfolio.projects.len(),
        settings.force_reduced_motion
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(Arc::new(portfolio))
        .with_context(settings)
        .launch(app::App);

    Ok(())
}
