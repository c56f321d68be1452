//! Modal help overlay handler
//!
//! Pushed onto the handler stack when the help overlay opens; the next
//! keypress dismisses it and repaints the slide.

use super::{HandlerAction, KeyHandler};
use crate::state::App;
use crate::Result;
use log::debug;

pub struct HelpHandler;

impl HelpHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HelpHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyHandler for HelpHandler {
    fn process(&mut self, _key: &[u8]) -> Result<HandlerAction> {
        Ok(HandlerAction::Remove)
    }

    fn process_with_context(&mut self, _key: &[u8], app: &mut App) -> Result<HandlerAction> {
        debug!("Leaving help overlay");
        app.redraw()?;
        Ok(HandlerAction::Remove)
    }
}
