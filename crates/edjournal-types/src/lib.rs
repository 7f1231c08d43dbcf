pub mod domain;
pub mod event;

pub use domain::*;
pub use event::*;
