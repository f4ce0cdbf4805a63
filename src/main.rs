//! `menuboard` binary: load config and data, then run the terminal UI.

use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use menuboard::dataset::Dataset;
use menuboard::store::Store;
use menuboard::terminal::{self, SessionConfig};
use menuboard::{app, config, telemetry, App};

#[derive(Debug, Parser)]
#[command(name = "menuboard", version, about = "Browse a restaurant menu in the terminal")]
struct Cli {
    /// Config file. Defaults to ./menuboard.toml when present.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Dataset JSON file. The embedded menu is used otherwise.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Prefix joined onto dish image paths.
    #[arg(long, value_name = "URL")]
    image_base_url: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("menuboard: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> menuboard::Result<()> {
    let mut config = config::load(cli.config.as_deref())?;
    if let Some(path) = cli.data {
        config.data.path = Some(path);
    }
    if let Some(url) = cli.image_base_url {
        config.ui.image_base_url = url;
    }

    let _telemetry = telemetry::init(&config.logging, cli.verbose)?;
    let dataset = Dataset::load_or_embedded(config.data.path.as_deref())?;
    tracing::info!(
        dishes = dataset.catalog.len(),
        comments = dataset.comments.len(),
        "dataset loaded"
    );

    let alternate_screen = config.ui.alternate_screen;
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        terminal::restore(alternate_screen);
        default_hook(info);
    }));

    let mut app = App::new(
        Store::new(dataset.catalog, dataset.comments),
        config.ui.image_base_url.clone(),
    );
    app::run(
        &mut app,
        SessionConfig {
            alternate_screen,
            input_poll_timeout: config.ui.input_poll_timeout(),
        },
    )?;
    Ok(())
}
