//! Interactive session: startup sequence and the input loop.

use crate::console::{Console, Flow};
use crate::dialogs::{FilePicker, NativeDialogs};
use anyhow::Result;
use bedplanner_core::PlannerEvent;
use bedplanner_designer::PlannerState;
use bedplanner_settings::{Config, FileStore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

/// Build the planner for `config`: recovery slot checked first, then the
/// catalog loaded. A catalog failure leaves placement disabled.
pub async fn start<W: std::io::Write>(
    config: Config,
    picker: Box<dyn FilePicker>,
    out: W,
) -> Result<Console<W>> {
    let store = FileStore::new(&config.storage.directory);
    let catalog_path = config.catalog.path.clone();
    let state = PlannerState::new(config, Box::new(store));
    spawn_event_log(&state);

    let mut console = Console::new(state, picker, out);

    // Read the slot before anything can overwrite it
    let pending = console.state_mut().check_recovery();

    match console.state_mut().load_catalog(&catalog_path).await {
        Ok(types) => console.say(format!("Loaded {} plant types", types))?,
        Err(e) => console.say(format!("error: {}; placement is disabled", e))?,
    }

    if let Some(count) = pending {
        console.say(format!(
            "Found an autosaved layout with {} markers. Type 'restore' or 'dismiss'.",
            count
        ))?;
    }
    Ok(console)
}

/// Log planner events as they are published.
fn spawn_event_log(state: &PlannerState) {
    let mut rx = state.events().subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(PlannerEvent::CatalogFailed(reason)) => {
                    tracing::warn!("Catalog failed: {}", reason)
                }
                Ok(event) => tracing::debug!("{}", event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!("Event log skipped {} events", skipped)
                }
                Err(RecvError::Closed) => break,
            }
        }
    });
}

/// Run the console on stdin/stdout until `quit` or end of input.
pub async fn run(config: Config) -> Result<()> {
    let mut console = start(config, Box::new(NativeDialogs), std::io::stdout()).await?;
    console.say("Type 'help' for commands.")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if console.handle_line(&line).await? == Flow::Quit {
            break;
        }
    }

    tracing::info!("Session ended");
    Ok(())
}
