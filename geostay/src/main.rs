use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use geostay::{
    browser,
    extract::{ExtractOptions, DEFAULT_LAT_KEY, DEFAULT_LNG_KEY},
    map_renderer::{RenderOptions, DEFAULT_TITLE},
    Job, DEFAULT_OUTPUT,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "geostay")]
#[command(about = "Plot GPS stays on a map", long_about = None)]
struct Cli {
    /// Path to JSON file
    input: PathBuf,
    /// Dotted path to stays array (e.g. 'route.stays')
    #[arg(short = 'a', long, default_value = "")]
    array_path: String,
    /// Key or path for latitude in each object
    #[arg(short = 'x', long, default_value = DEFAULT_LAT_KEY)]
    lat_key: String,
    /// Key or path for longitude in each object
    #[arg(short = 'y', long, default_value = DEFAULT_LNG_KEY)]
    lng_key: String,
    /// Output HTML file name
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Page title of the map
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,
    /// Also write the route as GeoJSON
    #[arg(long)]
    geojson: Option<PathBuf>,
    /// Skip stays whose coordinates can't be extracted instead of failing
    #[arg(long)]
    skip_invalid: bool,
    /// Don't open the map in a browser
    #[arg(long)]
    no_open: bool,
}

impl Cli {
    fn job(&self) -> Job {
        Job {
            input: self.input.clone(),
            array_path: self.array_path.clone(),
            output: self.output.clone(),
            geojson: self.geojson.clone(),
            extract: ExtractOptions {
                lat_key: self.lat_key.clone(),
                lng_key: self.lng_key.clone(),
                skip_invalid: self.skip_invalid,
            },
            render: RenderOptions {
                title: self.title.clone(),
                ..Default::default()
            },
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let summary = match geostay::run(&cli.job()) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("❌ {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    println!("✅ Map saved to {}", summary.output.display());

    if !cli.no_open {
        match browser::open_in_browser(&summary.output) {
            Ok(url) => println!("🌐 Opening {}", url),
            Err(err) => tracing::warn!("Could not open browser: {:#}", anyhow::Error::from(err)),
        }
    }

    ExitCode::SUCCESS
}
