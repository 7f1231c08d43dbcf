use crate::config::MonitorConfig;
use crate::fleet::FleetTracker;
use crate::follower::JournalFollower;
use crate::{Error, Result};
use edjournal_decoder::JournalDecoder;
use edjournal_types::Event;
use notify::{EventKind, PollWatcher, RecursiveMode, Watcher};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread::JoinHandle;
use std::time::Duration;

/// Receives every decoded event, in journal order
pub type EventHandler = Arc<dyn Fn(Event) + Send + Sync>;

enum Signal {
    Changed,
    Stop,
}

struct Running {
    watcher: PollWatcher,
    tx: Sender<Signal>,
    handle: JoinHandle<()>,
}

/// Follows the live journal, decodes each new line and hands events to a handler
pub struct JournalMonitor {
    config: MonitorConfig,
    fleet: FleetTracker,
    handler: EventHandler,
    running: Option<Running>,
}

impl JournalMonitor {
    pub fn new<F>(config: MonitorConfig, handler: F) -> Self
    where
        F: Fn(Event) + Send + Sync + 'static,
    {
        Self {
            config,
            fleet: FleetTracker::new(),
            handler: Arc::new(handler),
            running: None,
        }
    }

    pub fn name(&self) -> &'static str {
        "Journal monitor"
    }

    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn description(&self) -> &'static str {
        "Follows the Elite Dangerous journal and decodes the events the game writes to it"
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn fleet(&self) -> &FleetTracker {
        &self.fleet
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Attach to the newest journal and start following it
    pub fn start(&mut self) -> Result<()> {
        if self.running.is_some() {
            return Err(Error::InvalidOperation(
                "journal monitor is already running".to_string(),
            ));
        }

        let dir = self.config.journal_dir()?;
        if !dir.is_dir() {
            return Err(Error::Config(format!(
                "journal directory does not exist: {}",
                dir.display()
            )));
        }

        let mut follower = JournalFollower::new(&dir, self.config.file_regex()?);
        follower.attach(self.config.start_at_end)?;

        let (tx, rx) = channel();
        let tx_fs = tx.clone();
        // Modification times only change once a second on some filesystems
        let poll_interval = self.config.poll_interval();
        let watch_config = notify::Config::default()
            .with_poll_interval(poll_interval)
            .with_compare_contents(true);
        let mut watcher = PollWatcher::new(
            move |res: notify::Result<notify::Event>| match res {
                Ok(event) if matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) => {
                    let _ = tx_fs.send(Signal::Changed);
                }
                Ok(_) => {}
                Err(err) => tracing::warn!(error = %err, "Journal watch error"),
            },
            watch_config,
        )?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        // Lines written between attach and the first poll
        let _ = tx.send(Signal::Changed);

        let decoder = JournalDecoder::new(self.fleet.registry());
        let fleet = self.fleet.clone();
        let handler = self.handler.clone();
        let handle = std::thread::Builder::new()
            .name("journal-monitor".to_string())
            .spawn(move || run_worker(rx, poll_interval, follower, decoder, fleet, handler))?;

        tracing::info!(dir = %dir.display(), monitor = self.name(), "Started");
        self.running = Some(Running {
            watcher,
            tx,
            handle,
        });
        Ok(())
    }

    /// Stop feeding lines; the line in flight finishes first
    pub fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };
        let _ = running.tx.send(Signal::Stop);
        drop(running.watcher);
        if running.handle.join().is_err() {
            tracing::error!("Journal monitor worker terminated abnormally");
        }
        tracing::info!(monitor = self.name(), "Stopped");
    }
}

impl Drop for JournalMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for JournalMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JournalMonitor")
            .field("config", &self.config)
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

fn run_worker(
    rx: Receiver<Signal>,
    poll_interval: Duration,
    mut follower: JournalFollower,
    decoder: JournalDecoder,
    fleet: FleetTracker,
    handler: EventHandler,
) {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        // A quiet interval polls as well, so lines the watcher missed still arrive
        'worker: loop {
            match rx.recv_timeout(poll_interval) {
                Ok(Signal::Stop) | Err(RecvTimeoutError::Disconnected) => break,
                Ok(Signal::Changed) | Err(RecvTimeoutError::Timeout) => {}
            }
            // Coalesce a burst of change notifications into one read
            while let Ok(next) = rx.try_recv() {
                if matches!(next, Signal::Stop) {
                    break 'worker;
                }
            }

            match follower.poll() {
                Ok(lines) => {
                    for line in lines {
                        decoder.forward(&line, |event| {
                            fleet.apply(&event);
                            handler(event);
                        });
                    }
                }
                Err(err) => tracing::warn!(error = %err, "Failed to read journal"),
            }
        }
    }));

    if let Err(panic_err) = result {
        let panic_msg = if let Some(s) = panic_err.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_err.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        tracing::error!(panic = %panic_msg, "Journal monitor worker panicked");
    }
}
