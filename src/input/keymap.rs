//! Default key bindings for slidecast

use std::collections::HashMap;

/// Key sequence type
pub type KeySequence = Vec<u8>;

/// Action identifier for key bindings
///
/// Each variant represents a viewer command that can be triggered by a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    // Slide navigation
    NextSlide,
    PrevSlide,
    FirstSlide,
    LastSlide,

    // Narration control
    ToggleNarration,
    PlayFullPresentation,
    StopNarration,

    // Panels
    ToggleNotes,
    ToggleEnhancePanel,

    // AI enhancement requests
    EnhanceContent,
    GenerateInsights,
    ImproveNarrative,

    // Utility
    CopyNotes,
    Redraw,
    Help,
    Quit,
}

/// Create the default keymap
pub fn create_default_keymap() -> HashMap<KeySequence, KeyAction> {
    let mut map = HashMap::new();

    // Arrow keys (CSI and SS3 variants)
    map.insert(b"\x1b[C".to_vec(), KeyAction::NextSlide);
    map.insert(b"\x1b[B".to_vec(), KeyAction::NextSlide);
    map.insert(b"\x1bOC".to_vec(), KeyAction::NextSlide);
    map.insert(b"\x1bOB".to_vec(), KeyAction::NextSlide);
    map.insert(b"\x1b[D".to_vec(), KeyAction::PrevSlide);
    map.insert(b"\x1b[A".to_vec(), KeyAction::PrevSlide);
    map.insert(b"\x1bOD".to_vec(), KeyAction::PrevSlide);
    map.insert(b"\x1bOA".to_vec(), KeyAction::PrevSlide);

    // Space advances, like a clicker
    map.insert(b" ".to_vec(), KeyAction::NextSlide);

    // Page and edge jumps
    map.insert(b"\x1b[6~".to_vec(), KeyAction::NextSlide);
    map.insert(b"\x1b[5~".to_vec(), KeyAction::PrevSlide);
    map.insert(b"\x1b[H".to_vec(), KeyAction::FirstSlide);
    map.insert(b"\x1bOH".to_vec(), KeyAction::FirstSlide);
    map.insert(b"\x1b[1~".to_vec(), KeyAction::FirstSlide);
    map.insert(b"\x1b[F".to_vec(), KeyAction::LastSlide);
    map.insert(b"\x1bOF".to_vec(), KeyAction::LastSlide);
    map.insert(b"\x1b[4~".to_vec(), KeyAction::LastSlide);

    // Narration
    map.insert(b"n".to_vec(), KeyAction::ToggleNarration);
    map.insert(b"N".to_vec(), KeyAction::ToggleNarration);
    map.insert(b"p".to_vec(), KeyAction::PlayFullPresentation);
    map.insert(b"P".to_vec(), KeyAction::PlayFullPresentation);
    map.insert(b"s".to_vec(), KeyAction::StopNarration);
    map.insert(b"S".to_vec(), KeyAction::StopNarration);
    map.insert(b"\x1b".to_vec(), KeyAction::StopNarration);

    // Panels
    map.insert(b"o".to_vec(), KeyAction::ToggleNotes);
    map.insert(b"O".to_vec(), KeyAction::ToggleNotes);
    map.insert(b"a".to_vec(), KeyAction::ToggleEnhancePanel);
    map.insert(b"A".to_vec(), KeyAction::ToggleEnhancePanel);

    // Enhancement requests
    map.insert(b"e".to_vec(), KeyAction::EnhanceContent);
    map.insert(b"E".to_vec(), KeyAction::EnhanceContent);
    map.insert(b"g".to_vec(), KeyAction::GenerateInsights);
    map.insert(b"G".to_vec(), KeyAction::GenerateInsights);
    map.insert(b"m".to_vec(), KeyAction::ImproveNarrative);
    map.insert(b"M".to_vec(), KeyAction::ImproveNarrative);

    // Utility
    map.insert(b"c".to_vec(), KeyAction::CopyNotes);
    map.insert(b"C".to_vec(), KeyAction::CopyNotes);
    map.insert(b"r".to_vec(), KeyAction::Redraw);
    map.insert(b"R".to_vec(), KeyAction::Redraw);
    map.insert(b"?".to_vec(), KeyAction::Help);
    map.insert(b"q".to_vec(), KeyAction::Quit);
    map.insert(b"Q".to_vec(), KeyAction::Quit);
    map.insert(b"\x03".to_vec(), KeyAction::Quit);

    map
}
