//! Default key handler for the presentation viewer
//!
//! Maps bound keys to viewer commands and ignores everything else.

use super::{HandlerAction, KeyAction, KeyHandler};
use crate::enhance::EnhanceKind;
use crate::state::App;
use crate::Result;
use log::{debug, trace};
use std::collections::HashMap;

/// Default key handler for viewer commands
pub struct DefaultKeyHandler {
    /// Key bindings map
    keymap: HashMap<Vec<u8>, KeyAction>,
}

impl DefaultKeyHandler {
    /// Create a new default key handler
    pub fn new(keymap: HashMap<Vec<u8>, KeyAction>) -> Self {
        debug!("Creating default key handler with {} bindings", keymap.len());
        Self { keymap }
    }

    /// Process a key with the viewer's key bindings
    pub fn process_key(&mut self, key: &[u8], app: &mut App) -> Result<HandlerAction> {
        if let Some(action) = self.keymap.get(key).cloned() {
            trace!("Key action: {:?}", action);
            return self.execute_action(&action, app);
        }

        trace!("Unbound key: {:?}", key);
        Ok(HandlerAction::Ignored)
    }

    /// Execute a viewer action
    fn execute_action(&mut self, action: &KeyAction, app: &mut App) -> Result<HandlerAction> {
        use KeyAction::*;

        match action {
            NextSlide => app.next_slide()?,
            PrevSlide => app.prev_slide()?,
            FirstSlide => app.go_to_slide(1)?,
            LastSlide => app.go_to_slide(app.deck.total_slides())?,

            ToggleNarration => app.toggle_narration()?,
            PlayFullPresentation => app.play_full_presentation()?,
            StopNarration => app.stop_narration()?,

            ToggleNotes => app.toggle_notes()?,
            ToggleEnhancePanel => app.toggle_enhance_panel()?,

            EnhanceContent => app.request_enhancement(EnhanceKind::Content)?,
            GenerateInsights => app.request_enhancement(EnhanceKind::Insights)?,
            ImproveNarrative => app.request_enhancement(EnhanceKind::Narrative)?,

            CopyNotes => app.copy_notes()?,
            Redraw => app.redraw()?,

            Help => {
                debug!("Entering help overlay");
                app.show_help()?;
                app.handlers.push(Box::new(super::HelpHandler::new()));
            }

            Quit => return Ok(HandlerAction::Quit),
        }

        Ok(HandlerAction::Handled)
    }
}

impl KeyHandler for DefaultKeyHandler {
    fn process(&mut self, _key: &[u8]) -> Result<HandlerAction> {
        // Viewer commands need the application state
        Ok(HandlerAction::Ignored)
    }

    fn process_with_context(&mut self, key: &[u8], app: &mut App) -> Result<HandlerAction> {
        self.process_key(key, app)
    }
}
