pub mod decode;
pub mod kinds;
pub mod watch;
