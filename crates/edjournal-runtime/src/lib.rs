pub mod config;
pub mod error;
pub mod fleet;
pub mod follower;
pub mod monitor;
pub mod state;

pub use config::{MonitorConfig, resolve_journal_dir};
pub use error::{Error, Result};
pub use fleet::FleetTracker;
pub use follower::JournalFollower;
pub use monitor::{EventHandler, JournalMonitor};
pub use state::{StateListener, StateStore, StateValue};
