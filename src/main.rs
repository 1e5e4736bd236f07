pub mod types;
pub mod config;
pub mod data;
pub mod normalize;
pub mod tally;
pub mod scale;
pub mod genres;
pub mod processing;
pub mod render;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate the catalogue and write the map markers and genre table
    Generate {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
    },
    /// Print the genre frequency table
    Genres {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
        /// Only show the first N genres
        #[arg(short, long)]
        top: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate { config } => {
            info!("Generating map data with config: {:?}", config);
            let app_config = config::AppConfig::load_from_file(config)?;

            // 1. Load Data
            let rows = data::load_data(&app_config)?;

            // 2. Aggregate
            let summaries = processing::build_summaries(&app_config.processing, rows);

            // 3. Hand off to the renderer
            let (locations, genres) = render::write_outputs(&app_config, &summaries)?;

            info!(
                "Generation complete: rows={}, excluded={}, unlocated={}, locations={:?}, genres={:?}",
                summaries.rows_in,
                summaries.rows_excluded,
                summaries.records_unlocated,
                locations,
                genres
            );
        }
        Commands::Genres { config, top } => {
            let app_config = config::AppConfig::load_from_file(config)?;
            let rows = data::load_data(&app_config)?;
            let summaries = processing::build_summaries(&app_config.processing, rows);

            print!("{}", render::format_genre_table(&summaries.genre_frequencies, *top));
        }
    }

    Ok(())
}
