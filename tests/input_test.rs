//! Input system tests
//!
//! Tests the key handler stack and the default key bindings

use slidecast::input::{create_default_keymap, HandlerAction, HandlerStack, KeyAction, KeyHandler};
use slidecast::Result;

struct TestHandler {
    handled: bool,
}

impl KeyHandler for TestHandler {
    fn process(&mut self, key: &[u8]) -> Result<HandlerAction> {
        if key == b"x" {
            self.handled = true;
            Ok(HandlerAction::Remove)
        } else {
            Ok(HandlerAction::Ignored)
        }
    }
}

#[test]
fn test_handler_stack() {
    let mut stack = HandlerStack::new();
    assert_eq!(stack.len(), 0);

    // Push handler
    stack.push(Box::new(TestHandler { handled: false }));
    assert_eq!(stack.len(), 1);

    // Process key that handler doesn't recognize
    let action = stack.process(b"a").unwrap();
    assert_eq!(action, HandlerAction::Ignored);
    assert_eq!(stack.len(), 1);

    // Process key that handler handles and removes itself
    let action = stack.process(b"x").unwrap();
    assert_eq!(action, HandlerAction::Remove);
    assert_eq!(stack.len(), 0);
}

#[test]
fn test_empty_stack_ignores_keys() {
    let mut stack = HandlerStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.process(b"x").unwrap(), HandlerAction::Ignored);
}

#[test]
fn test_handler_stack_multiple() {
    let mut stack = HandlerStack::new();

    stack.push(Box::new(TestHandler { handled: false }));
    stack.push(Box::new(TestHandler { handled: false }));
    assert_eq!(stack.len(), 2);

    // Top handler processes and removes itself
    let action = stack.process(b"x").unwrap();
    assert_eq!(action, HandlerAction::Remove);
    assert_eq!(stack.len(), 1);

    // Now the second handler processes
    let action = stack.process(b"x").unwrap();
    assert_eq!(action, HandlerAction::Remove);
    assert_eq!(stack.len(), 0);
}

#[test]
fn test_keymap_navigation_bindings() {
    let keymap = create_default_keymap();

    // Arrow keys, CSI and SS3 variants
    assert_eq!(keymap.get(&b"\x1b[C".to_vec()), Some(&KeyAction::NextSlide));
    assert_eq!(keymap.get(&b"\x1bOC".to_vec()), Some(&KeyAction::NextSlide));
    assert_eq!(keymap.get(&b"\x1b[D".to_vec()), Some(&KeyAction::PrevSlide));
    assert_eq!(keymap.get(&b"\x1bOD".to_vec()), Some(&KeyAction::PrevSlide));
    assert_eq!(keymap.get(&b"\x1b[A".to_vec()), Some(&KeyAction::PrevSlide));
    assert_eq!(keymap.get(&b"\x1b[B".to_vec()), Some(&KeyAction::NextSlide));

    // Space advances like a clicker
    assert_eq!(keymap.get(&b" ".to_vec()), Some(&KeyAction::NextSlide));

    // Edge jumps
    assert_eq!(keymap.get(&b"\x1b[H".to_vec()), Some(&KeyAction::FirstSlide));
    assert_eq!(keymap.get(&b"\x1b[F".to_vec()), Some(&KeyAction::LastSlide));
}

#[test]
fn test_keymap_narration_bindings() {
    let keymap = create_default_keymap();

    assert_eq!(keymap.get(&b"n".to_vec()), Some(&KeyAction::ToggleNarration));
    assert_eq!(
        keymap.get(&b"p".to_vec()),
        Some(&KeyAction::PlayFullPresentation)
    );
    assert_eq!(keymap.get(&b"s".to_vec()), Some(&KeyAction::StopNarration));
    assert_eq!(keymap.get(&b"\x1b".to_vec()), Some(&KeyAction::StopNarration));
}

#[test]
fn test_keymap_panel_and_utility_bindings() {
    let keymap = create_default_keymap();

    assert_eq!(keymap.get(&b"o".to_vec()), Some(&KeyAction::ToggleNotes));
    assert_eq!(
        keymap.get(&b"a".to_vec()),
        Some(&KeyAction::ToggleEnhancePanel)
    );
    assert_eq!(keymap.get(&b"e".to_vec()), Some(&KeyAction::EnhanceContent));
    assert_eq!(
        keymap.get(&b"g".to_vec()),
        Some(&KeyAction::GenerateInsights)
    );
    assert_eq!(
        keymap.get(&b"m".to_vec()),
        Some(&KeyAction::ImproveNarrative)
    );
    assert_eq!(keymap.get(&b"c".to_vec()), Some(&KeyAction::CopyNotes));
    assert_eq!(keymap.get(&b"?".to_vec()), Some(&KeyAction::Help));
    assert_eq!(keymap.get(&b"q".to_vec()), Some(&KeyAction::Quit));
    assert_eq!(keymap.get(&b"\x03".to_vec()), Some(&KeyAction::Quit));
}

#[test]
fn test_upper_and_lower_case_bound_alike() {
    let keymap = create_default_keymap();

    for (lower, upper) in [(b"n", b"N"), (b"p", b"P"), (b"q", b"Q"), (b"o", b"O")] {
        assert_eq!(
            keymap.get(&lower.to_vec()),
            keymap.get(&upper.to_vec()),
            "case variants of {:?} should match",
            lower
        );
    }
}
