//! Drives an [`InteractionController`] from the command line.

use tokio::io::{AsyncBufReadExt, BufReader};
use venuemap_core::{
    InteractionController, LatLng, LoadOutcome, MapWidget, Presenter, VenueError,
};
use venuemap_foursquare::FoursquareClient;

/// One line of input in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    List,
    Filter(String),
    Select(String),
    Click(String),
    Markers,
    Help,
    Quit,
}

pub enum Flow {
    Continue(Option<String>),
    Quit,
}

pub const HELP: &str = "commands: list | filter [keyword] | select <venue-id> | click <venue-id> | markers | help | quit";

/// Parses a session line. `filter` without an argument clears the filter.
pub fn parse_session_command(line: &str) -> Option<SessionCommand> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    match (verb.to_ascii_lowercase().as_str(), rest) {
        ("list" | "ls", "") => Some(SessionCommand::List),
        ("filter" | "f", keyword) => Some(SessionCommand::Filter(keyword.to_string())),
        ("select" | "s", id) if !id.is_empty() => Some(SessionCommand::Select(id.to_string())),
        ("click", id) if !id.is_empty() => Some(SessionCommand::Click(id.to_string())),
        ("markers", "") => Some(SessionCommand::Markers),
        ("help" | "?", "") => Some(SessionCommand::Help),
        ("quit" | "exit" | "q", "") => Some(SessionCommand::Quit),
        _ => None,
    }
}

/// Fetches venues around `center` and hands them to the controller.
///
/// # Errors
///
/// Fails when the provider is unreachable, when the payload cannot be loaded,
/// or when the session already failed.
pub async fn load_venues<W, P>(
    controller: &mut InteractionController<W, P>,
    client: &FoursquareClient,
    center: LatLng,
) -> Result<usize, VenueError>
where
    W: MapWidget,
    P: Presenter,
{
    let ticket = controller.begin_load()?;
    let result = client
        .explore(center)
        .await
        .map_err(|e| VenueError::ProviderUnavailable(e.to_string()));

    match controller.finish_load(ticket, result)? {
        LoadOutcome::Applied { venues } => Ok(venues),
        LoadOutcome::Stale => Ok(0),
    }
}

pub fn apply_command<W, P>(
    controller: &mut InteractionController<W, P>,
    command: SessionCommand,
) -> Flow
where
    W: MapWidget,
    P: Presenter,
{
    match command {
        SessionCommand::List => {
            controller.refresh_list();
            Flow::Continue(None)
        }
        SessionCommand::Filter(keyword) => {
            let report = controller.on_filter_changed(&keyword);
            tracing::info!(
                keyword = %keyword,
                added = report.added.len(),
                removed = report.removed.len(),
                "filter changed"
            );
            Flow::Continue(None)
        }
        SessionCommand::Select(id) => focus(controller.on_venue_selected(&id), &id),
        SessionCommand::Click(id) => focus(controller.on_marker_clicked(&id), &id),
        SessionCommand::Markers => {
            let ids = controller.markers().ids();
            let message = if ids.is_empty() {
                "no markers on the map".to_string()
            } else {
                format!("{} markers: {}", ids.len(), ids.join(", "))
            };
            Flow::Continue(Some(message))
        }
        SessionCommand::Help => Flow::Continue(Some(HELP.to_string())),
        SessionCommand::Quit => Flow::Quit,
    }
}

fn focus(found: bool, id: &str) -> Flow {
    if found {
        Flow::Continue(None)
    } else {
        Flow::Continue(Some(format!("no marker for venue {id} (hidden or unknown)")))
    }
}

/// Reads commands from stdin until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub async fn run_interactive<W, P>(controller: &mut InteractionController<W, P>) -> anyhow::Result<()>
where
    W: MapWidget,
    P: Presenter,
{
    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = parse_session_command(&line) else {
            println!("unrecognised command; {HELP}");
            continue;
        };
        match apply_command(controller, command) {
            Flow::Continue(Some(message)) => println!("{message}"),
            Flow::Continue(None) => {}
            Flow::Quit => break,
        }
    }
    Ok(())
}
