//! # Configuration
//!
//! Settings live in `config.json` next to the data documents. Missing fields
//! fall back to compiled defaults, so an old or partial file keeps working.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `voice` | `en` | Voice/language passed to the speech program |
//! | `speech-rate` | `0.95` | Relative speaking rate (1.0 = program default) |
//! | `speech-program` | `say` on macOS, else `espeak-ng` | TTS program; empty mutes speech |
//! | `prompt-delay-ms` | `300` | Pause before speaking the next quiz word |
//! | `fetch-timeout-secs` | `30` | Timeout for remote CSV downloads |

use crate::error::{Result, WordlyError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: &[&str] = &[
    "voice",
    "speech-rate",
    "speech-program",
    "prompt-delay-ms",
    "fetch-timeout-secs",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordlyConfig {
    #[serde(default = "default_voice")]
    pub voice: String,

    #[serde(default = "default_speech_rate")]
    pub speech_rate: f32,

    #[serde(default = "default_speech_program")]
    pub speech_program: String,

    #[serde(default = "default_prompt_delay_ms")]
    pub prompt_delay_ms: u64,

    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_voice() -> String {
    "en".to_string()
}

fn default_speech_rate() -> f32 {
    0.95
}

fn default_speech_program() -> String {
    if cfg!(target_os = "macos") {
        "say".to_string()
    } else {
        "espeak-ng".to_string()
    }
}

fn default_prompt_delay_ms() -> u64 {
    300
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

impl Default for WordlyConfig {
    fn default() -> Self {
        Self {
            voice: default_voice(),
            speech_rate: default_speech_rate(),
            speech_program: default_speech_program(),
            prompt_delay_ms: default_prompt_delay_ms(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl WordlyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path).map_err(WordlyError::Io)?;
        serde_json::from_str(&content).map_err(WordlyError::Serialization)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WordlyError::Io)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(WordlyError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(WordlyError::Io)?;
        Ok(())
    }

    pub fn prompt_delay(&self) -> Duration {
        Duration::from_millis(self.prompt_delay_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Speech is muted when no program is configured.
    pub fn speech_enabled(&self) -> bool {
        !self.speech_program.trim().is_empty()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "voice" => Some(self.voice.clone()),
            "speech-rate" => Some(self.speech_rate.to_string()),
            "speech-program" => Some(self.speech_program.clone()),
            "prompt-delay-ms" => Some(self.prompt_delay_ms.to_string()),
            "fetch-timeout-secs" => Some(self.fetch_timeout_secs.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid =
            |what: &str| WordlyError::Config(format!("{} expects {}, got {:?}", key, what, value));
        match key {
            "voice" => self.voice = value.trim().to_string(),
            "speech-rate" => {
                let rate: f32 = value.trim().parse().map_err(|_| invalid("a number"))?;
                if !(rate > 0.0 && rate <= 4.0) {
                    return Err(invalid("a number in (0, 4]"));
                }
                self.speech_rate = rate;
            }
            "speech-program" => self.speech_program = value.trim().to_string(),
            "prompt-delay-ms" => {
                self.prompt_delay_ms = value.trim().parse().map_err(|_| invalid("milliseconds"))?
            }
            "fetch-timeout-secs" => {
                let secs: u64 = value.trim().parse().map_err(|_| invalid("seconds"))?;
                if secs == 0 {
                    return Err(invalid("a positive number of seconds"));
                }
                self.fetch_timeout_secs = secs;
            }
            _ => return Err(WordlyError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    /// All settings as `(key, value)` pairs in documentation order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .map(|k| (*k, self.get(k).unwrap_or_default()))
            .collect()
    }
}
