use clap::{Parser, Subcommand};

use brandforge::generator;

/// Batch branding asset generator.
///
/// Runs against the current directory: sources under logo/, outputs under
/// banners/ and icons/.
#[derive(Parser)]
#[command(name = "brandforge", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Task>,
}

#[derive(Subcommand)]
enum Task {
    /// Generate the full banner and icon set from logo/logo.png (default)
    Assets,
    /// Derive the resized logo series from logo/master.png
    Logos,
    /// Generate content-sized wordmark banners
    Wordmark,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let root = std::env::current_dir()?;
    match cli.command.unwrap_or(Task::Assets) {
        Task::Assets => generator::generate_assets(&root)?,
        Task::Logos => generator::generate_logos(&root)?,
        Task::Wordmark => generator::generate_wordmark_banners(&root)?,
    }
    Ok(())
}
