//! Closed enumerations for values the page scripts store as plain strings.
//!
//! Each enum serializes to the lowercase token the site already uses
//! (`"youtube"`, `"open"`, `"dark"`, ...), so stored JSON is unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A string did not name any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownVariant {
    /// Which enumeration was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

/// How an event or article's `mediaUrl` should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum MediaType {
    /// `mediaUrl` is an image path.
    Image,
    /// `mediaUrl` is a `YouTube` embed URL.
    Youtube,
}

impl MediaType {
    /// The stored token for this media type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Youtube => "youtube",
        }
    }

    /// Whether the media is a video embed.
    pub const fn is_video(self) -> bool {
        matches!(self, Self::Youtube)
    }
}

impl FromStr for MediaType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "youtube" => Ok(Self::Youtube),
            other => Err(UnknownVariant {
                kind: "media type",
                value: other.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Whether an event still accepts registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum RegistrationStatus {
    /// Registrations are accepted.
    Open,
    /// Registrations are closed.
    Closed,
}

impl RegistrationStatus {
    /// The stored token for this status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Explicit schedule status some events carry alongside their date.
///
/// The events page treats this as an override: an event marked `upcoming`
/// is listed under the upcoming filter regardless of its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum EventStatus {
    /// Listed as upcoming.
    Upcoming,
    /// Listed as past.
    Past,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Colour scheme preference persisted under the `theme` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Theme {
    /// Light scheme.
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// The stored token for this theme.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Pick the effective theme: a saved preference wins, otherwise follow
    /// the system colour scheme.
    pub const fn resolve(saved: Option<Self>, system_prefers_dark: bool) -> Self {
        match saved {
            Some(theme) => theme,
            None if system_prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownVariant {
                kind: "theme",
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_uses_lowercase_tokens() {
        let json = serde_json::to_string(&MediaType::Youtube).unwrap_or_default();
        assert_eq!(json, "\"youtube\"");
        let parsed: Result<MediaType, _> = serde_json::from_str("\"image\"");
        assert_eq!(parsed.ok(), Some(MediaType::Image));
    }

    #[test]
    fn media_type_rejects_unknown_token() {
        let parsed: Result<MediaType, _> = "vimeo".parse();
        let err = parsed.err();
        assert_eq!(
            err.map(|e| e.to_string()),
            Some(String::from("unknown media type value: \"vimeo\""))
        );
    }

    #[test]
    fn theme_resolution_prefers_saved_value() {
        assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn theme_toggle_and_parse() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!("dark".parse::<Theme>().ok(), Some(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn registration_status_round_trips() {
        let json = serde_json::to_string(&RegistrationStatus::Closed).unwrap_or_default();
        assert_eq!(json, "\"closed\"");
        assert_eq!(RegistrationStatus::Open.as_str(), "open");
    }
}
