use super::color::ColorMode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Briefcase,
    GraduationCap,
    #[default]
    Code,
    Users,
    Award,
}

impl Icon {
    /// Text glyph drawn inside canvas bubbles and dialog headers.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Briefcase => "💼",
            Icon::GraduationCap => "🎓",
            Icon::Code => "⌨",
            Icon::Users => "👥",
            Icon::Award => "🏅",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub period: String,
    #[serde(default)]
    pub description: Option<Vec<String>>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub icon: Icon,
}

/// How the detail dialog lays out a selected item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    #[default]
    Standard,
    /// Achievements are shown as a step timeline over the leadership items.
    LeadershipTimeline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PickerLayout {
    #[default]
    Canvas,
    Grid,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    pub title: String,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub mode: RenderMode,
    #[serde(default)]
    pub layout: PickerLayout,
    #[serde(default = "default_section_colors")]
    pub colors: ColorMode,
    pub items: Vec<ExperienceItem>,
    #[serde(default)]
    pub leadership_items: Vec<ExperienceItem>,
}

fn default_section_colors() -> ColorMode {
    ColorMode::PerFrameRandom
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid section config: {0}")]
    Json(#[from] serde_json::Error),
}

impl SectionConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    #[inline]
    pub fn item(&self, index: usize) -> Option<&ExperienceItem> {
        self.items.get(index)
    }
}
