//! Configuration loading tests
//!
//! Tests that viewer configuration loads correctly and provides expected
//! default values, using a temp directory so the user's real config is
//! never touched.

use slidecast::state::config::Config;
use tempfile::TempDir;

fn temp_config() -> (TempDir, Config) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("slidecast.cfg");
    let config = Config::load_from(path).expect("Failed to load config");
    (dir, config)
}

#[test]
fn test_default_config_is_created() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("slidecast.cfg");
    assert!(!path.exists());

    let config = Config::load_from(path.clone()).expect("Failed to load config");
    assert!(path.exists());
    assert_eq!(config.path(), path.as_path());
}

#[test]
fn test_default_values() {
    let (_dir, config) = temp_config();

    // Speech defaults: engine defaults, real TTS preferred
    assert_eq!(config.rate(), None);
    assert_eq!(config.volume(), None);
    assert_eq!(config.voice_idx(), None);
    assert!(!config.force_simulated());

    // Narration: per-slide reading buffers
    assert_eq!(config.reading_buffer_override(), None);

    // Enhancement endpoint
    assert_eq!(config.enhance_url(), "http://localhost:11434");
    assert_eq!(config.enhance_model(), "llama3.2");
    assert_eq!(config.enhance_timeout_secs(), 30);
}

#[test]
fn test_set_save_reload_roundtrip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("slidecast.cfg");

    let mut config = Config::load_from(path.clone()).expect("load");
    config.set("speech", "rate", "60");
    config.set("speech", "force_simulated", "true");
    config.set("narration", "reading_buffer", "2.5");
    config.set("enhance", "model", "mistral");
    config.save().expect("save");

    let reloaded = Config::load_from(path).expect("reload");
    assert_eq!(reloaded.rate(), Some(60));
    assert!(reloaded.force_simulated());
    assert_eq!(reloaded.reading_buffer_override(), Some(2.5));
    assert_eq!(reloaded.enhance_model(), "mistral");
}

#[test]
fn test_out_of_range_values_fall_back() {
    let (_dir, mut config) = temp_config();

    config.set("speech", "rate", "150");
    assert_eq!(config.rate(), None, "rate above 100 is rejected");

    config.set("speech", "volume", "not-a-number");
    assert_eq!(config.volume(), None);

    config.set("narration", "reading_buffer", "-3");
    assert_eq!(config.reading_buffer_override(), None);

    config.set("enhance", "timeout", "0");
    assert_eq!(config.enhance_timeout_secs(), 1, "timeout clamps to 1s");
}
