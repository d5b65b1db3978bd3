// File: ./src/bin/tui.rs
use agenda::carousel::CarouselTick;
use agenda::config::Config;
use agenda::logging;
use agenda::model::DataState;
use agenda::paths::AppPaths;
use agenda::source::DataSource;
use agenda::tui::action::Action;
use agenda::tui::handlers;
use agenda::tui::state::AppState;
use agenda::tui::view;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use tokio::sync::{mpsc, watch};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    if let Err(e) = AppPaths::log_file().and_then(|p| logging::init_file_logger(&p, &config.log_level))
    {
        eprintln!("Logging disabled: {:#}", e);
    }

    // Leave an editable config behind on first run
    if !AppPaths::config_file()?.exists()
        && let Err(e) = config.save()
    {
        log::warn!("Could not write default config: {:#}", e);
    }

    // Optional positional argument overrides the configured document
    let data_file = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => config.events_file()?,
    };
    log::info!("Starting with event document {}", data_file.display());

    let source = DataSource::new();
    let mut data_rx = source.subscribe();
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();

    let mut state = AppState::new(data_file);
    state.carousel.mount(tick_tx);

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut state, &source, &mut data_rx, &mut tick_rx).await;
    ratatui::restore();

    state.carousel.unmount();
    if let Err(e) = &result {
        log::error!("Exiting with error: {:#}", e);
    }
    result
}

async fn run(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    source: &DataSource,
    data_rx: &mut watch::Receiver<DataState>,
    tick_rx: &mut mpsc::UnboundedReceiver<CarouselTick>,
) -> Result<()> {
    let mut events = EventStream::new();
    source.load_file(&state.data_file).await;

    loop {
        terminal.draw(|f| view::draw(f, state))?;

        tokio::select! {
            Some(tick) = tick_rx.recv() => state.carousel.on_tick(tick),

            changed = data_rx.changed() => {
                changed?;
                let data = data_rx.borrow_and_update().clone();
                state.set_data(data);
            }

            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    match handlers::action_for_key(key) {
                        Some(Action::Quit) => return Ok(()),
                        Some(Action::Reload) => {
                            state.apply(Action::Reload);
                            terminal.draw(|f| view::draw(f, state))?;
                            source.load_file(&state.data_file).await;
                        }
                        Some(action) => state.apply(action),
                        None => {}
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
        }
    }
}
