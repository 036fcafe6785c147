mod commands;
mod config;
mod init;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use smogscan::ColorCondition;

use crate::config::{Config, DEFAULT_CONFIG_FILE};

/// Find and rank red or cyan markings on a pollution map image.
#[derive(Debug, Parser)]
#[command(name = "smogscan", version)]
struct Cli {
    /// TOML configuration file. Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Map image, overriding the configured one.
    #[arg(long, global = true)]
    image: Option<PathBuf>,

    /// Output directory, overriding the configured one.
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the mask of red pixels.
    Red,
    /// Write the mask of cyan pixels.
    Cyan,
    /// Label connected components and write the unsorted report.
    Components {
        #[arg(long, default_value_t = ColorCondition::Red)]
        condition: ColorCondition,
    },
    /// Rank components by size, write the sorted report and the top-N mask.
    Sorted {
        #[arg(long, default_value_t = ColorCondition::Red)]
        condition: ColorCondition,
        /// Number of largest components to extract (defaults to `top_n` from config).
        #[arg(long)]
        top: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(image) = cli.image {
        config.image = image;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    init::init(&config)?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Command::Red => {
            let path = commands::filter(&config, ColorCondition::Red)?;
            println!("Red pixel mask written to {}", path.display());
        }
        Command::Cyan => {
            let path = commands::filter(&config, ColorCondition::Cyan)?;
            println!("Cyan pixel mask written to {}", path.display());
        }
        Command::Components { condition } => {
            let label_map = commands::components(&config, condition)?;
            println!("{}", label_map.component_table_report());
        }
        Command::Sorted { condition, top } => {
            let top_n = top.unwrap_or(config.top_n);
            let mask = commands::sorted(&config, condition, top_n)?;
            println!(
                "Top {top_n} {condition} components cover {} pixels",
                mask.count_ones()
            );
        }
    }

    Ok(())
}
