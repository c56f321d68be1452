//! Configuration management

use crate::{Result, SlidecastError};
use ini::Ini;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Application configuration for the presentation viewer
///
/// Manages persistent settings: speech parameters, the narration reading
/// buffer, and the enhancement endpoint.
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.slidecast.cfg)
    path: PathBuf,
}

impl Config {
    /// Load configuration from disk or create default
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| SlidecastError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| SlidecastError::IniParse(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| SlidecastError::Config(format!("Failed to save config: {}", e)))
    }

    /// Get config file path (~/.slidecast.cfg)
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".slidecast.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create default configuration
    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("speech"))
            .set("force_simulated", "false");

        ini.with_section(Some("narration"))
            .set("reading_buffer", "-1");

        ini.with_section(Some("enhance"))
            .set("url", "http://localhost:11434")
            .set("model", "llama3.2")
            .set("timeout", "30");

        ini
    }

    /// Get a boolean value from config
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get an integer value from config
    pub fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get a float value from config
    pub fn get_float(&self, section: &str, key: &str, default: f32) -> f32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    // Viewer-specific configuration getters

    /// Speech rate (0-100), unset means the engine default
    pub fn rate(&self) -> Option<u8> {
        self.get_int("speech", "rate", -1).try_into().ok().filter(|&r| r <= 100)
    }

    /// Speech volume (0-100), unset means the engine default
    pub fn volume(&self) -> Option<u8> {
        self.get_int("speech", "volume", -1)
            .try_into()
            .ok()
            .filter(|&v| v <= 100)
    }

    /// Voice index for the TTS engine
    pub fn voice_idx(&self) -> Option<usize> {
        self.get_int("speech", "voice_idx", -1).try_into().ok()
    }

    /// Skip the platform TTS engine and use timer-only narration
    pub fn force_simulated(&self) -> bool {
        self.get_bool("speech", "force_simulated", false)
    }

    /// Reading-buffer override in seconds; negative keeps per-slide values
    pub fn reading_buffer_override(&self) -> Option<f32> {
        let value = self.get_float("narration", "reading_buffer", -1.0);
        if value >= 0.0 && value.is_finite() {
            Some(value)
        } else {
            None
        }
    }

    /// Enhancement endpoint base URL
    pub fn enhance_url(&self) -> String {
        self.get_string("enhance", "url", "http://localhost:11434")
    }

    /// Model name sent with generation requests
    pub fn enhance_model(&self) -> String {
        self.get_string("enhance", "model", "llama3.2")
    }

    /// Enhancement request timeout in seconds
    pub fn enhance_timeout_secs(&self) -> u64 {
        self.get_int("enhance", "timeout", 30).max(1) as u64
    }
}
