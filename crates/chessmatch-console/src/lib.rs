//! Console front end: coordinate input, board rendering, and the interactive game loop.

pub mod command;
pub mod console;
pub mod error;
pub mod render;

pub use command::Command;
pub use console::{Console, ConsoleConfig};
pub use error::ConsoleError;
