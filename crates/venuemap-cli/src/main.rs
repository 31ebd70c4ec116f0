mod console;
mod session;

use std::io;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use venuemap_core::InteractionController;
use venuemap_foursquare::FoursquareClient;

use crate::console::{ConsoleList, ConsoleMap};
use crate::session::{apply_command, load_venues, run_interactive, Flow, SessionCommand};

#[derive(Debug, Parser)]
#[command(name = "venuemap")]
#[command(about = "Explore top venues around a location on a console map")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load venues once, optionally filter and focus one, then exit.
    Explore {
        /// Keyword matched against venue names and categories.
        #[arg(long)]
        filter: Option<String>,
        /// Venue id to focus after filtering.
        #[arg(long)]
        select: Option<String>,
    },
    /// Load venues and read commands from stdin.
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = venuemap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let client = FoursquareClient::from_app_config(&config)?;
    let mut controller =
        InteractionController::new(ConsoleMap::new(io::stdout()), ConsoleList::new(io::stdout()));

    tracing::info!(
        env = %config.env,
        location = %config.location_name,
        center = %config.center,
        "loading venues"
    );
    let venues = load_venues(&mut controller, &client, config.center).await?;
    tracing::info!(venues, "venues ready");

    match cli.command.unwrap_or(Commands::Explore {
        filter: None,
        select: None,
    }) {
        Commands::Explore { filter, select } => {
            let mut commands = Vec::new();
            if let Some(keyword) = filter {
                commands.push(SessionCommand::Filter(keyword));
            }
            if let Some(id) = select {
                commands.push(SessionCommand::Select(id));
            }
            for command in commands {
                if let Flow::Continue(Some(message)) = apply_command(&mut controller, command) {
                    println!("{message}");
                }
            }
        }
        Commands::Interactive => run_interactive(&mut controller).await?,
    }

    tracing::debug!(
        live_markers = controller.map().live_markers(),
        "session finished"
    );

    Ok(())
}
