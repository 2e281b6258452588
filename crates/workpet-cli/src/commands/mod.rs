pub mod coins;
pub mod config;
pub mod pet;
pub mod stats;
pub mod watch;
pub mod work;
