//! Optional TOML configuration.
//!
//! Nothing is read unless a path is passed explicitly; the defaults are a
//! plain interactive game with colored feedback.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{OperationType, QuestionLevel, SymbolStyle};

/// Top-level mathquiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Color correct/incorrect feedback.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Clear the terminal at the start of each round.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
    /// Glyph set for operations.
    #[serde(default)]
    pub symbols: SymbolStyle,
    /// Print a per-question review after the report.
    #[serde(default)]
    pub review: bool,
    /// Seed for reproducible questions.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Answers that skip the matching configuration prompts.
    #[serde(default)]
    pub preset: Preset,
}

/// Preselected quiz settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(default)]
    pub questions: Option<usize>,
    #[serde(default)]
    pub level: Option<QuestionLevel>,
    #[serde(default)]
    pub operation: Option<OperationType>,
}

fn default_true() -> bool {
    true
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            symbols: SymbolStyle::default(),
            review: false,
            seed: None,
            preset: Preset::default(),
        }
    }
}

impl QuizConfig {
    /// Parse a configuration document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: QuizConfig = toml::from_str(content).context("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.preset.questions == Some(0) {
            anyhow::bail!("preset.questions must be at least 1");
        }
        Ok(())
    }
}

/// Load config from an explicit path, or fall back to defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let Some(path) = path else {
        return Ok(QuizConfig::default());
    };
    if !path.exists() {
        anyhow::bail!("config file not found: {}", path.display());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = QuizConfig::from_toml(&content)
        .with_context(|| format!("invalid config: {}", path.display()))?;
    tracing::debug!(?config, "loaded config from {}", path.display());
    Ok(config)
}

/// Starter file written by `mathquiz init`.
pub const SAMPLE_CONFIG: &str = r#"# mathquiz configuration

# Color correct/incorrect feedback.
color = true

# Clear the terminal at the start of each round.
clear_screen = true

# Operation glyphs: "ascii" (+ - * /) or "unicode" (+ − × ÷).
symbols = "ascii"

# Show a table of every question after the final report.
review = false

# Fixed seed for reproducible questions.
# seed = 42

# Uncomment to skip the matching prompts.
[preset]
# questions = 10
# level = "mixed"        # easy, medium, hard, mixed
# operation = "mixed"    # addition, subtraction, multiplication, division, mixed
"#;
