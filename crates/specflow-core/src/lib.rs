pub mod command;
pub mod config;
pub mod detect;
pub mod error;
pub mod io;
pub mod paths;
pub mod section;
pub mod sync;
pub mod task;

pub use error::{Result, SpecError};
