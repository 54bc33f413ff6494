//! `stockroom-console` — the interactive inventory menu.
//!
//! The controller is generic over its input and output streams; the
//! `stockroom` binary binds it to stdin/stdout.

pub mod controller;
pub mod error;
pub mod input;
pub mod menu;

pub use controller::{ConsoleController, ControllerState};
pub use error::{ConsoleError, ConsoleResult};
pub use menu::MenuChoice;
