use clap::Parser;
use config::Config;
use flume::bounded;
use rotation::{ControlEvent, IntervalTrigger, ListSupplier, Rotator, Services};
use std::fs::File;
use std::sync::Mutex;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use wallrot::{
    cli::Cli,
    discovery::discover,
    error::Error,
    report::LogSink,
    signals::{SignalEvent, wait_for_signal},
};

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(cli.verbosity.tracing_level_filter().into())
        .from_env_lossy();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_file(true)
        .with_line_number(true);

    match &cli.logfile {
        Some(path) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config, config::Error> {
    match &cli.conffile {
        Some(path) => Config::load(path),
        _ => Ok(Config::new()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    debug!(config = ?cli);

    let config = load_config(&cli)?;
    let displays = cli.displays(&config);
    if displays.is_empty() {
        return Err(Error::NoDisplays.into());
    }

    let supplier = ListSupplier::new(discover(&cli.images)?);
    info!(wallpapers = supplier.len(), displays = displays.len(), "starting rotation");

    let mut paused = !config.rotation.autostart;
    let services = Services {
        suppliers: vec![Box::new(supplier.clone())],
        sink: Box::new(LogSink),
    };
    let mut rotator = Rotator::with_services(config, displays, services, Box::new(IntervalTrigger))?;

    let cancel = CancellationToken::new();
    let (control_tx, control_rx) = mpsc::unbounded_channel();
    let token = cancel.clone();
    let mut rotation = tokio::spawn(async move { rotator.run_until(token, control_rx).await });

    let (events_tx, events_rx) = bounded(8);
    let mut signals = tokio::spawn(async move { wait_for_signal(&events_tx).await });

    loop {
        tokio::select! {
            res = &mut rotation => {
                res??;
                break;
            }
            res = &mut signals => {
                if let Err(err) = res? {
                    tracing::error!(error = ?err, "Error while waiting for signal");
                    return Err(err.into());
                }
                break;
            }
            res = events_rx.recv_async() => {
                let event = res?;
                debug!(?event, "Received signal event");
                let control = match event {
                    SignalEvent::CycleNow => ControlEvent::CycleNow,
                    SignalEvent::TogglePause => {
                        paused = !paused;
                        if paused { ControlEvent::Pause } else { ControlEvent::Start }
                    }
                    SignalEvent::Reload => {
                        match (load_config(&cli), discover(&cli.images)) {
                            (Ok(config), Ok(images)) => {
                                supplier.replace(images);
                                ControlEvent::Reload(config)
                            }
                            (Err(err), _) => {
                                warn!(%err, "keeping current config");
                                continue;
                            }
                            (_, Err(err)) => {
                                warn!(%err, "keeping current wallpapers");
                                continue;
                            }
                        }
                    }
                    SignalEvent::Shutdown => {
                        cancel.cancel();
                        continue;
                    }
                };
                if control_tx.send(control).is_err() {
                    warn!("rotation is gone");
                }
            }
        }
    }

    Ok(())
}
