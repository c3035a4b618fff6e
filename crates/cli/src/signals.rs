use crate::error::Error;
use flume::Sender;
use tokio::signal::unix::{SignalKind, signal};

/// Indefinitely listens to signals and sends signal events to the provided channel.
pub async fn wait_for_signal(signal_event: &Sender<SignalEvent>) -> Result<(), Error> {
    let mut sigusr1 = signal(SignalKind::user_defined1()).map_err(Error::SignalHandler)?;
    let mut sigusr2 = signal(SignalKind::user_defined2()).map_err(Error::SignalHandler)?;
    let mut sighup = signal(SignalKind::hangup()).map_err(Error::SignalHandler)?;
    let mut sigint = signal(SignalKind::interrupt()).map_err(Error::SignalHandler)?;
    let mut sigterm = signal(SignalKind::terminate()).map_err(Error::SignalHandler)?;

    loop {
        let event = tokio::select! {
            _ = sigusr1.recv() => SignalEvent::CycleNow,
            _ = sigusr2.recv() => SignalEvent::TogglePause,
            _ = sighup.recv() => SignalEvent::Reload,
            _ = sigint.recv() => SignalEvent::Shutdown,
            _ = sigterm.recv() => SignalEvent::Shutdown,
        };
        signal_event.send_async(event).await?;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalEvent {
    /// SIGUSR1
    CycleNow,
    /// SIGUSR2
    TogglePause,
    /// SIGHUP
    Reload,
    /// SIGINT or SIGTERM
    Shutdown,
}
