//! Presentation theme selected by the form author.

use serde::{Deserialize, Deserializer, Serialize};

/// Closed set of visual styles a form can request.
///
/// Unknown keys fall back to [`Theme::Cyberpunk`] rather than failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Cyberpunk,
    Minimal,
    Industrial,
    Academic,
    Solaris,
    Midnight,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Cyberpunk,
        Theme::Minimal,
        Theme::Industrial,
        Theme::Academic,
        Theme::Solaris,
        Theme::Midnight,
    ];

    /// Look up a theme by its wire key.
    pub fn from_key(key: &str) -> Option<Theme> {
        match key {
            "cyberpunk" => Some(Theme::Cyberpunk),
            "minimal" => Some(Theme::Minimal),
            "industrial" => Some(Theme::Industrial),
            "academic" => Some(Theme::Academic),
            "solaris" => Some(Theme::Solaris),
            "midnight" => Some(Theme::Midnight),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Theme::Cyberpunk => "cyberpunk",
            Theme::Minimal => "minimal",
            Theme::Industrial => "industrial",
            Theme::Academic => "academic",
            Theme::Solaris => "solaris",
            Theme::Midnight => "midnight",
        }
    }

    /// Human-readable name, as the backend labels it.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Cyberpunk => "Cyberpunk Neon",
            Theme::Minimal => "Minimalist Glass",
            Theme::Industrial => "Industrial Steel",
            Theme::Academic => "Academic Official",
            Theme::Solaris => "Solaris Vivid",
            Theme::Midnight => "Midnight Indigo",
        }
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = Option::<String>::deserialize(deserializer)?;
        Ok(key
            .as_deref()
            .and_then(Theme::from_key)
            .unwrap_or_default())
    }
}
