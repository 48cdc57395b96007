use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Unknown design: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fonts {
    pub heading: &'static str,
    pub body: &'static str,
}

/// How section content enters the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Fade,
    Float,
    Glitch,
    Bounce,
    Stagger,
}

impl Animation {
    pub fn class(self) -> &'static str {
        match self {
            Self::Fade => "animate-fade-in-up",
            Self::Float => "animate-float",
            Self::Glitch => "animate-glitch",
            Self::Bounce => "animate-pop",
            Self::Stagger => "animate-stagger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub palette: Palette,
    pub fonts: Fonts,
    pub animation: Animation,
}

impl Style {
    /// Inline CSS custom properties for the page root.
    pub fn css_vars(&self) -> String {
        let Palette {
            background,
            surface,
            text,
            muted,
            primary,
            accent,
        } = self.palette;
        format!(
            "--background: {background}; --surface: {surface}; --foreground: {text}; \
             --muted: {muted}; --primary: {primary}; --accent: {accent}; \
             --font-heading: {}; --font-body: {};",
            self.fonts.heading, self.fonts.body
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Glass,
    Material,
    Pastel,
    Neon,
    Organic,
    Brutalist,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Self::Glass,
        Self::Material,
        Self::Pastel,
        Self::Neon,
        Self::Organic,
        Self::Brutalist,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Glass => "glass",
            Self::Material => "material",
            Self::Pastel => "pastel",
            Self::Neon => "neon",
            Self::Organic => "organic",
            Self::Brutalist => "brutalist",
        }
    }

    pub fn href(self) -> String {
        match self {
            Self::Glass => "/".to_string(),
            t => format!("/design/{}", t.slug()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Glass => "Midnight Glass",
            Self::Material => "Material Kit",
            Self::Pastel => "3D Isometric World",
            Self::Neon => "Retro-Futuristic Neon",
            Self::Organic => "Organic Calm",
            Self::Brutalist => "Neo-Brutalist Zine",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Glass => "Dark glass cards, glowing gradients",
            Self::Material => "Zero-Dawn v2 reborn, rose and mint on near black",
            Self::Pastel => "Soft floating blocks, explorable diorama",
            Self::Neon => "Cyberpunk, neon glows, synthwave vibes",
            Self::Organic => "Sage and stone, serif calm",
            Self::Brutalist => "Stickers, stamps and hard shadows",
        }
    }

    pub fn style(self) -> Style {
        match self {
            Self::Glass => Style {
                palette: Palette {
                    background: "#09090b",
                    surface: "rgba(255,255,255,0.05)",
                    text: "#fafafa",
                    muted: "#a1a1aa",
                    primary: "#8b5cf6",
                    accent: "#6366f1",
                },
                fonts: Fonts {
                    heading: "'Inter', sans-serif",
                    body: "'Inter', sans-serif",
                },
                animation: Animation::Fade,
            },
            Self::Material => Style {
                palette: Palette {
                    background: "#1a1a1a",
                    surface: "#262626",
                    text: "#ffffff",
                    muted: "rgba(255,255,255,0.5)",
                    primary: "#e91e63",
                    accent: "#2dce89",
                },
                fonts: Fonts {
                    heading: "'Roboto', sans-serif",
                    body: "'Roboto', sans-serif",
                },
                animation: Animation::Fade,
            },
            Self::Pastel => Style {
                palette: Palette {
                    background: "#f8fafc",
                    surface: "rgba(255,255,255,0.8)",
                    text: "#1e293b",
                    muted: "#64748b",
                    primary: "#a78bfa",
                    accent: "#10b981",
                },
                fonts: Fonts {
                    heading: "'Outfit', sans-serif",
                    body: "'Space Grotesk', sans-serif",
                },
                animation: Animation::Float,
            },
            Self::Neon => Style {
                palette: Palette {
                    background: "#020617",
                    surface: "rgba(15,23,42,0.8)",
                    text: "#ffffff",
                    muted: "#94a3b8",
                    primary: "#00ffff",
                    accent: "#ff0080",
                },
                fonts: Fonts {
                    heading: "'Orbitron', sans-serif",
                    body: "'Rajdhani', sans-serif",
                },
                animation: Animation::Glitch,
            },
            Self::Organic => Style {
                palette: Palette {
                    background: "#faf8f5",
                    surface: "rgba(255,255,255,0.6)",
                    text: "#292524",
                    muted: "#78716c",
                    primary: "#87a878",
                    accent: "#d4a373",
                },
                fonts: Fonts {
                    heading: "'Cormorant Garamond', serif",
                    body: "'DM Sans', sans-serif",
                },
                animation: Animation::Stagger,
            },
            Self::Brutalist => Style {
                palette: Palette {
                    background: "#fde047",
                    surface: "#ffffff",
                    text: "#000000",
                    muted: "#27272a",
                    primary: "#db2777",
                    accent: "#2563eb",
                },
                fonts: Fonts {
                    heading: "'Anton', sans-serif",
                    body: "'Bebas Neue', sans-serif",
                },
                animation: Animation::Bounce,
            },
        }
    }

    pub fn is_light(self) -> bool {
        matches!(self, Self::Pastel | Self::Organic | Self::Brutalist)
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| ThemeError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(theme.slug().parse::<Theme>(), Ok(theme));
        }
        assert_eq!("NEON".parse::<Theme>(), Ok(Theme::Neon));
    }

    #[test]
    fn test_unknown_slug() {
        assert_eq!(
            "vaporwave".parse::<Theme>(),
            Err(ThemeError::Unknown("vaporwave".to_string()))
        );
    }

    #[test]
    fn test_hrefs() {
        assert_eq!(Theme::Glass.href(), "/");
        assert_eq!(Theme::Brutalist.href(), "/design/brutalist");
    }

    #[test]
    fn test_css_vars() {
        let vars = Theme::Neon.style().css_vars();
        assert!(vars.contains("--primary: #00ffff;"));
        assert!(vars.contains("--font-heading: 'Orbitron', sans-serif;"));
    }

    #[test]
    fn test_theme_persists_as_slug() {
        let json = serde_json::to_string(&Theme::Organic).unwrap();
        assert_eq!(json, "\"organic\"");
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Theme::Organic);
    }

    #[test]
    fn test_default_is_home_design() {
        assert_eq!(Theme::default(), Theme::Glass);
        assert_eq!(Theme::default().href(), "/");
    }
}
