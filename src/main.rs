use clap::Parser;
use ingredient_finder::{FinderConfig, IngredientFinder};
use log::{debug, LevelFilter};
use std::path::PathBuf;

/// Find known ingredient names in text recognized from photos
#[derive(Parser, Debug)]
#[command(name = "ingredient-finder", version, about)]
struct Cli {
    /// Images to recognize with Google Cloud Vision (needs GOOGLE_API_KEY)
    #[arg(required_unless_present_any = ["text", "text_file"])]
    images: Vec<String>,

    /// Use this text instead of recognizing images
    #[arg(long, conflicts_with_all = ["images", "text_file"])]
    text: Option<String>,

    /// Read already recognized text from a file
    #[arg(long, conflicts_with = "images")]
    text_file: Option<PathBuf>,

    /// File whose first line lists the known ingredients, comma-separated
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// Trim whitespace around reference entries
    #[arg(long)]
    trim_entries: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let config = FinderConfig::load()?;
    debug!("{:#?}", config);

    let mut builder = IngredientFinder::builder().config(config);

    if let Some(text) = cli.text {
        builder = builder.text(text);
    } else if let Some(path) = cli.text_file {
        builder = builder.text_file(path);
    } else {
        for image in cli.images {
            builder = builder.image(image);
        }
    }

    if let Some(reference) = cli.reference {
        builder = builder.reference_file(reference);
    }
    if cli.trim_entries {
        builder = builder.trim_entries(true);
    }

    let extracted = builder.extract().await?;
    if !cli.json {
        println!("{:?}", extracted.words());
    }

    let report = extracted.filter()?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{:?}", report.ingredients);
    }

    Ok(())
}
