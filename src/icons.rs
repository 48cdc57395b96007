use std::{convert::Infallible, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Github,
    Linkedin,
    Twitter,
    Facebook,
    Terminal,
    Code,
    ShieldCheck,
    Headset,
    GitBranch,
    GitMerge,
    Cloud,
    Globe,
    GraduationCap,
    School,
    Briefcase,
    Award,
    Cpu,
    Server,
    Clock,
    MapPin,
    FileText,
    Mail,
    ExternalLink,
    ArrowUp,
    ChevronDown,
    Menu,
    Close,
    /// Any key the table doesn't know; renders a generic glyph.
    Unknown,
}

impl Icon {
    pub fn from_key(key: &str) -> Self {
        match key {
            "Github" => Self::Github,
            "Linkedin" => Self::Linkedin,
            "Twitter" => Self::Twitter,
            "Facebook" => Self::Facebook,
            "Terminal" => Self::Terminal,
            "Code" | "Code2" => Self::Code,
            "ShieldCheck" => Self::ShieldCheck,
            "Headset" => Self::Headset,
            "GitBranch" => Self::GitBranch,
            "GitMerge" => Self::GitMerge,
            "Cloud" => Self::Cloud,
            "Globe" => Self::Globe,
            "GraduationCap" => Self::GraduationCap,
            "School" => Self::School,
            "Briefcase" => Self::Briefcase,
            "Award" => Self::Award,
            "Cpu" => Self::Cpu,
            "Server" => Self::Server,
            "Clock" => Self::Clock,
            "MapPin" => Self::MapPin,
            "FileText" => Self::FileText,
            "Mail" => Self::Mail,
            "ExternalLink" => Self::ExternalLink,
            "ArrowUp" => Self::ArrowUp,
            "ChevronDown" => Self::ChevronDown,
            "Menu" => Self::Menu,
            "Close" => Self::Close,
            _ => Self::Unknown,
        }
    }

    /// Font icon class, for the icons the site's icon fonts carry.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Github => Some("devicon-github-plain"),
            Self::Linkedin => Some("devicon-linkedin-plain"),
            Self::Twitter => Some("devicon-twitter-original"),
            Self::Facebook => Some("devicon-facebook-plain"),
            Self::MapPin => Some("extra-location"),
            Self::Mail => Some("extra-email"),
            Self::ExternalLink => Some("extra-link"),
            Self::FileText => Some("extra-download"),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Github => "🐙",
            Self::Linkedin => "💼",
            Self::Twitter => "𝕏",
            Self::Facebook => "📘",
            Self::Terminal => "🖥️",
            Self::Code => "⌨️",
            Self::ShieldCheck => "🛡️",
            Self::Headset => "🎧",
            Self::GitBranch => "🌿",
            Self::GitMerge => "🔀",
            Self::Cloud => "☁️",
            Self::Globe => "🌐",
            Self::GraduationCap => "🎓",
            Self::School => "🏫",
            Self::Briefcase => "💼",
            Self::Award => "🏆",
            Self::Cpu => "🧠",
            Self::Server => "🗄️",
            Self::Clock => "⏱️",
            Self::MapPin => "📍",
            Self::FileText => "📄",
            Self::Mail => "📧",
            Self::ExternalLink => "↗",
            Self::ArrowUp => "↑",
            Self::ChevronDown => "⌄",
            Self::Menu => "☰",
            Self::Close => "✕",
            Self::Unknown => "⚡",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "X",
            Self::Facebook => "Facebook",
            Self::Menu => "Open menu",
            Self::Close => "Close menu",
            Self::ArrowUp => "Scroll to top",
            Self::ChevronDown => "Scroll down",
            _ => "",
        }
    }
}

impl FromStr for Icon {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(Icon::from_key("Sparkles"), Icon::Unknown);
        assert_eq!("".parse::<Icon>(), Ok(Icon::Unknown));
        assert!(!Icon::Unknown.glyph().is_empty());
        assert_eq!(Icon::Unknown.class(), None);
    }

    #[test]
    fn test_brand_icons_use_font_classes() {
        assert_eq!(Icon::from_key("Github").class(), Some("devicon-github-plain"));
        assert_eq!(Icon::from_key("Linkedin").class(), Some("devicon-linkedin-plain"));
        assert_eq!("Twitter".parse::<Icon>(), Ok(Icon::Twitter));
    }

    #[test]
    fn test_close_has_one_key() {
        assert_eq!(Icon::from_key("Close"), Icon::Close);
        assert_eq!(Icon::from_key("X"), Icon::Unknown);
        assert_eq!(Icon::from_key("X-Close"), Icon::Unknown);
    }
}
