use cfg_if::cfg_if;
use serde::{Deserialize, Serialize};

pub static DEFAULT_CONFIG: &[u8] = include_bytes!("../../default_config/speech.toml");

cfg_if! {
    if #[cfg(target_os = "macos")] {
        const DEFAULT_PROGRAM: &str = "say";
    } else {
        const DEFAULT_PROGRAM: &str = "espeak";
    }
}

/// Spoken-feedback settings. The announced text is handed to an external
/// text-to-speech program as its last argument.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SpeechConfig {
    pub enabled: bool,
    pub program: String,
    pub args: Vec<String>,
}

impl SpeechConfig {
    /// The configured program, or the platform default when left empty.
    pub fn program(&self) -> &str {
        if self.program.is_empty() {
            DEFAULT_PROGRAM
        } else {
            &self.program
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            program: String::new(),
            args: vec![],
        }
    }
}
