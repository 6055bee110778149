use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::profile::Profile;
use crate::tutorial::{TutorialStep, default_tutorial_steps};

/// Prompt and pacing of the interactive terminal.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TerminalSettings {
    pub prompt: String,
    /// Simulated processing delay between submit and dispatch
    pub processing_delay_ms: u64,
    /// Offer the guided tour on first visit
    pub show_welcome: bool,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            prompt: "guest@portfolio:~$".to_string(),
            processing_delay_ms: 250,
            show_welcome: true,
        }
    }
}

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub terminal: TerminalSettings,
    pub profile: Profile,
    /// Replaces the built-in tour when present
    #[serde(rename = "tutorial", skip_serializing_if = "Option::is_none")]
    pub tutorial: Option<Vec<TutorialStep>>,
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Configured tour, or the built-in one.
    pub fn tutorial_steps(&self) -> Vec<TutorialStep> {
        self.tutorial.clone().unwrap_or_else(default_tutorial_steps)
    }
}
