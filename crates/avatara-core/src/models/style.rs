//! Style tags: the closed set of visual presets a client can request.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Enumerated identifier selecting a visual preset for avatar generation.
///
/// The set is closed; tags outside it coerce to [`StyleTag::default`] at
/// resolution time rather than failing (see [`StyleTag::resolve`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Pixar,
    Anime,
    Simpsons,
    Realistic,
    Cartoon,
    Fantasy,
}

impl StyleTag {
    pub const ALL: [StyleTag; 6] = [
        StyleTag::Pixar,
        StyleTag::Anime,
        StyleTag::Simpsons,
        StyleTag::Realistic,
        StyleTag::Cartoon,
        StyleTag::Fantasy,
    ];

    /// Strict parse: `None` for tags outside the known set.
    pub fn from_tag(tag: &str) -> Option<StyleTag> {
        match tag.to_lowercase().as_str() {
            "pixar" => Some(StyleTag::Pixar),
            "anime" => Some(StyleTag::Anime),
            "simpsons" => Some(StyleTag::Simpsons),
            "realistic" => Some(StyleTag::Realistic),
            "cartoon" => Some(StyleTag::Cartoon),
            "fantasy" => Some(StyleTag::Fantasy),
            _ => None,
        }
    }

    /// Lenient parse: unknown tags fall back to the default tag.
    ///
    /// The gateway already rejects absent styles, so by the time resolution
    /// runs the tag is present but possibly unknown; those coerce silently.
    pub fn resolve(tag: &str) -> StyleTag {
        StyleTag::from_tag(tag).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::Pixar => "pixar",
            StyleTag::Anime => "anime",
            StyleTag::Simpsons => "simpsons",
            StyleTag::Realistic => "realistic",
            StyleTag::Cartoon => "cartoon",
            StyleTag::Fantasy => "fantasy",
        }
    }
}

impl Default for StyleTag {
    fn default() -> Self {
        StyleTag::Pixar
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_known() {
        assert_eq!(StyleTag::from_tag("anime"), Some(StyleTag::Anime));
        assert_eq!(StyleTag::from_tag("FANTASY"), Some(StyleTag::Fantasy));
    }

    #[test]
    fn test_from_tag_unknown() {
        assert_eq!(StyleTag::from_tag("vaporwave"), None);
        assert_eq!(StyleTag::from_tag(""), None);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(StyleTag::resolve("vaporwave"), StyleTag::Pixar);
        assert_eq!(StyleTag::resolve("simpsons"), StyleTag::Simpsons);
    }

    #[test]
    fn test_round_trips_through_as_str() {
        for tag in StyleTag::ALL {
            assert_eq!(StyleTag::from_tag(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn test_serde_is_lowercase() {
        let json = serde_json::to_string(&StyleTag::Simpsons).unwrap();
        assert_eq!(json, "\"simpsons\"");
    }
}
