//! TUI runner - entry point and event loop

use nucamp_app::config::Settings;
use nucamp_app::message::Message;
use nucamp_app::signals;
use nucamp_app::{CampsiteStore, Engine};
use nucamp_core::prelude::*;
use nucamp_core::Campsite;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Show the info screen for `campsite` until the user quits
pub async fn run<S: CampsiteStore>(campsite: Campsite, settings: Settings, store: S) -> Result<()> {
    terminal::install_panic_hook();

    let mut engine = Engine::new(campsite, settings, store);

    let mut term = ratatui::init();

    // Signal listener sends Message::Quit on SIGINT/SIGTERM/SIGHUP
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    let signal_task = signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut engine, msg_rx);

    signal_task.abort();

    ratatui::restore();
    info!("Screen closed");

    result
}

fn run_loop<S: CampsiteStore>(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<S>,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !engine.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            engine.process_message(msg);
        }

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
