//! Keyboard input system

pub mod default_handler;
pub mod handler;
pub mod help_handler;
pub mod keymap;

pub use default_handler::DefaultKeyHandler;
pub use handler::{HandlerAction, HandlerStack, KeyHandler};
pub use help_handler::HelpHandler;
pub use keymap::{create_default_keymap, KeyAction, KeySequence};
