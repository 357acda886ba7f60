pub mod catalog;
pub mod config;
pub mod task;

pub use catalog::*;
pub use config::*;
pub use task::*;
