//! Built-in deck tests
//!
//! The deck is static data; these tests pin the invariants the sequencer
//! relies on: contiguous 1-based indices and a narration script for every
//! slide.

use slidecast::deck::Deck;

#[test]
fn test_builtin_deck_loads() {
    let deck = Deck::builtin();
    assert_eq!(deck.total_slides(), 16);
}

#[test]
fn test_every_slide_has_a_script() {
    let deck = Deck::builtin();

    for index in 1..=deck.total_slides() {
        let slide = deck.slide(index).unwrap_or_else(|| panic!("slide {} missing", index));
        assert_eq!(slide.index, index);
        assert!(!slide.title.is_empty());
        assert!(!slide.bullets.is_empty());
        assert!(!slide.notes.is_empty());

        let script = deck.script(index).unwrap();
        assert_eq!(script.slide_index, index);
        assert!(!script.speech_text.is_empty());
        assert!(script.spoken_duration_secs > 0.0);
        assert!(script.reading_buffer_secs >= 0.0);
    }
}

#[test]
fn test_out_of_range_lookups_return_none() {
    let deck = Deck::builtin();
    assert!(deck.slide(0).is_none());
    assert!(deck.slide(deck.total_slides() + 1).is_none());
    assert!(deck.script(99).is_none());
}

#[test]
fn test_narration_windows_are_plausible() {
    // Scripted durations in the built-in deck run 35-70s of speech with
    // 5-12s of reading time; anything wildly outside that range is a typo.
    let deck = Deck::builtin();

    for slide in deck.iter() {
        let secs = slide.script.spoken_duration_secs;
        assert!(
            (10.0..=120.0).contains(&secs),
            "slide {} spoken duration {}s out of range",
            slide.index,
            secs
        );
        let buffer = slide.script.reading_buffer_secs;
        assert!(
            (0.0..=30.0).contains(&buffer),
            "slide {} reading buffer {}s out of range",
            slide.index,
            buffer
        );
    }
}

#[test]
fn test_iter_matches_indices() {
    let deck = Deck::builtin();
    let indices: Vec<u16> = deck.iter().map(|s| s.index).collect();
    let expected: Vec<u16> = (1..=deck.total_slides()).collect();
    assert_eq!(indices, expected);
}
