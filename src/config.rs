use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use eframe::egui::Color32;
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    model::MAX_PERCENTAGE,
    progress::Cadence,
};

/// Runtime settings, read from an optional TOML file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Delay before each progress step, in milliseconds
    pub step_delay_ms: u64,
    /// Progress steps per session; at least 100 so a session can complete
    pub steps: u32,
    /// Duration of color, rotation, sweep and fade animations
    pub animation_ms: u64,
    pub in_progress_color: String,
    pub complete_color: String,
    pub background_color: String,
    /// TTF/OTF file for the label text; egui's proportional font when unset
    pub label_font: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_delay_ms: 20,
            steps: 101,
            animation_ms: 300,
            in_progress_color: "#0077BE".to_owned(),
            complete_color: "#90EE90".to_owned(),
            background_color: "#404040".to_owned(),
            label_font: None,
        }
    }
}

/// Colors resolved from [`Config`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub in_progress: Color32,
    pub complete: Color32,
    pub background: Color32,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_owned(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| AppError::ConfigParse {
            path: path.to_owned(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings under which a session could never reach 100%.
    pub fn validate(&self) -> Result<()> {
        if self.steps < u32::from(MAX_PERCENTAGE) {
            return Err(AppError::TooFewSteps { steps: self.steps });
        }
        Ok(())
    }

    /// Reads the configured label font, if any.
    pub fn label_font_data(&self) -> Result<Option<Vec<u8>>> {
        let Some(path) = &self.label_font else {
            return Ok(None);
        };
        std::fs::read(path)
            .map(Some)
            .map_err(|source| AppError::FontRead {
                path: path.clone(),
                source,
            })
    }

    /// Loads `path` if given, otherwise falls back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn cadence(&self) -> Cadence {
        Cadence {
            step_delay: Duration::from_millis(self.step_delay_ms),
            steps: self.steps,
        }
    }

    pub fn animation_secs(&self) -> f64 {
        Duration::from_millis(self.animation_ms).as_secs_f64()
    }

    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette {
            in_progress: parse_hex("in_progress_color", &self.in_progress_color)?,
            complete: parse_hex("complete_color", &self.complete_color)?,
            background: parse_hex("background_color", &self.background_color)?,
        })
    }
}

fn parse_hex(field: &'static str, value: &str) -> Result<Color32> {
    let invalid = || AppError::InvalidColor {
        field,
        value: value.to_owned(),
    };
    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}
