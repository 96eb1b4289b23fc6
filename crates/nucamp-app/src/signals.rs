//! OS signals that close the campsite screen
//!
//! Interrupt, terminate and (on unix) hangup all end the session. A comment
//! draft that is still open is dropped with the screen, just like Esc-ing the
//! form, so nothing reaches the store.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use nucamp_core::prelude::*;

/// Termination request delivered by the OS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT, or Ctrl+C on Windows
    Interrupt,
    /// SIGTERM
    Terminate,
    /// SIGHUP: the controlling terminal went away
    Hangup,
}

impl ShutdownSignal {
    pub fn name(self) -> &'static str {
        match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
            ShutdownSignal::Hangup => "SIGHUP",
        }
    }
}

/// Spawn the listener. The task ends after the first signal.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match next_signal().await {
            Ok(signal) => {
                forward(signal, &tx).await;
            }
            Err(e) => error!("Signal listener failed: {}", e),
        }
    })
}

/// Hand `signal` to the event loop as a quit request.
///
/// Returns false when the loop has already gone away.
pub async fn forward(signal: ShutdownSignal, tx: &mpsc::Sender<Message>) -> bool {
    info!("{} received, closing campsite screen", signal.name());
    tx.send(Message::Quit).await.is_ok()
}

#[cfg(unix)]
async fn next_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, signal_name: &str| {
        signal(kind).map_err(|e| {
            Error::terminal(format!("Cannot listen for {}: {}", signal_name, e))
        })
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;
    let mut hangup = listen(SignalKind::hangup(), "SIGHUP")?;

    let received = tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
        _ = hangup.recv() => ShutdownSignal::Hangup,
    };
    Ok(received)
}

#[cfg(windows)]
async fn next_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}
