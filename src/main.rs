//! Terminal host for the catalog explorer.
//!
//! Drives the library the way a browser page would: it mounts the explorer,
//! performs the requested fetch against a saved API response, maps typed
//! commands to events, and prints a fresh frame whenever the store reports a
//! change.
//!
//! # Usage
//!
//! ```text
//! canplayit <pieces.json> [config.toml]
//! ```
//!
//! `pieces.json` holds a collection response (`{ "array": [...] }`). A
//! credential can be provided through `CANPLAYIT_TOKEN`.
//!
//! # Commands
//!
//! - `type <text>`: edit the search query (shows suggestions)
//! - `search <text>`: search for an exact title
//! - `filter <author|year|difficulty|key> <value>`, `apply`, `clear`
//! - `page <n>`, `next`, `prev`
//! - `select <id>`, `hover <id|none>`, `unselect`, `open`, `go <id>`
//! - `map`, `tick`, `login <token>`, `skip`
//! - `quit`

#![allow(clippy::multiple_crate_versions)]

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use canplayit::app::{Action, Event, StaticSession, Store};
use canplayit::catalog::FilterField;
use canplayit::source::{JsonFilePieceSource, PieceSource};
use canplayit::{CatalogError, Config, PieceId, Result};

/// Frame size used for rendering.
const ROWS: usize = 40;
const COLS: usize = 100;

/// Environment variable holding a restored session credential.
const TOKEN_VAR: &str = "CANPLAYIT_TOKEN";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "explorer terminated");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let payload_path = args
        .next()
        .ok_or_else(|| CatalogError::Config("usage: canplayit <pieces.json> [config.toml]".to_string()))?;
    let config = match args.next() {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    canplayit::observability::init_tracing(&config);

    let span = tracing::debug_span!("host_run");
    let _guard = span.entered();
    tracing::debug!(payload = %payload_path, api_host = %config.api_host, "starting explorer host");

    let source = JsonFilePieceSource::new(&payload_path);
    let session = StaticSession::new(std::env::var(TOKEN_VAR).ok());
    let mut store = Store::new(&config, canplayit::load_theme(&config), session);
    store.subscribe(|state| {
        let frame = canplayit::ui::render(state, ROWS, COLS);
        let mut stdout = io::stdout().lock();
        if let Err(e) = write!(stdout, "\u{1b}[2J\u{1b}[H{frame}").and_then(|()| stdout.flush()) {
            tracing::debug!(error = %e, "failed to write frame");
        }
    });

    dispatch(&mut store, &source, Event::Mounted)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command == "quit" {
            break;
        }

        if let Some(credential) = command.strip_prefix("login ") {
            store.auth_mut().set_credential(Some(credential.trim().to_string()));
        }

        match parse_command(command) {
            Some(events) => {
                for event in events {
                    dispatch(&mut store, &source, event)?;
                }
            }
            None => eprintln!("unknown command: {command}"),
        }
        dispatch(&mut store, &source, Event::tick_now())?;
    }

    dispatch(&mut store, &source, Event::Unmounted)?;
    tracing::debug!(prompts = store.auth().prompts(), "explorer host stopped");
    Ok(())
}

/// Dispatches `event` and executes resulting actions until none are left.
fn dispatch(store: &mut Store<StaticSession>, source: &impl PieceSource, event: Event) -> Result<()> {
    let mut pending = VecDeque::from([event]);
    while let Some(event) = pending.pop_front() {
        for action in store.dispatch(&event)? {
            if let Some(follow_up) = execute_action(source, &action) {
                pending.push_back(follow_up);
            }
        }
    }
    Ok(())
}

/// Performs an action, returning the event that reports its result.
#[tracing::instrument(level = "debug", skip(source))]
fn execute_action(source: &impl PieceSource, action: &Action) -> Option<Event> {
    match action {
        Action::Fetch(request) => Some(match source.fetch_pieces(request) {
            Ok(pieces) => Event::PiecesLoaded(pieces),
            Err(e) => Event::LoadFailed { message: e.to_string() },
        }),
        Action::CancelFetch => {
            tracing::debug!("fetch cancelled");
            None
        }
        Action::Navigate { path } => {
            println!("navigate: {path}");
            None
        }
        Action::RequireLogin(options) => {
            tracing::debug!(?options, "login prompt left to the store");
            None
        }
    }
}

/// Maps a typed command to the events it stands for.
fn parse_command(command: &str) -> Option<Vec<Event>> {
    let (verb, rest) = command.split_once(' ').unwrap_or((command, ""));
    let rest = rest.trim();

    Some(match verb {
        "type" => vec![Event::EditQuery(rest.to_string())],
        "search" => vec![Event::EditQuery(rest.to_string()), Event::SubmitSearch],
        "filter" => {
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            vec![Event::EditFilter {
                field: FilterField::from_name(field)?,
                value: value.trim().to_string(),
            }]
        }
        "apply" => vec![Event::SubmitFilter],
        "clear" => vec![Event::ClearFilter],
        "page" => vec![Event::SelectPage(rest.parse().ok()?)],
        "next" => vec![Event::NextPage],
        "prev" => vec![Event::PreviousPage],
        "select" if !rest.is_empty() => vec![Event::SelectPiece(PieceId::new(rest))],
        "hover" if rest == "none" => vec![Event::HoverPiece(None)],
        "hover" if !rest.is_empty() => vec![Event::HoverPiece(Some(PieceId::new(rest)))],
        "unselect" => vec![Event::ClearSelection],
        "open" => vec![Event::OpenSelected],
        "go" if !rest.is_empty() => vec![Event::OpenPiece(PieceId::new(rest))],
        "map" => vec![Event::toggle_map_mode_now()],
        "tick" => vec![],
        "login" => vec![Event::LoginCompleted],
        "skip" => vec![Event::LoginSkipped],
        _ => return None,
    })
}
