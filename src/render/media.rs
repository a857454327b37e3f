//! Media URL derivation and spacer scaling
//!
//! Deterministic helpers behind the video and spacer block renderers: embed
//! URL construction for hosted video providers, and the three-tier responsive
//! height scaling the spacer block honors (0.5x at the narrowest tier, 0.75x
//! at the medium tier, full height at the widest).

use tracing::warn;

/// Hosted video providers with a known embed URL template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoProvider {
    Youtube,
    Vimeo,
}

impl VideoProvider {
    /// Parse the provider tag; `direct` and unknown tags yield `None`
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "youtube" => Some(VideoProvider::Youtube),
            "vimeo" => Some(VideoProvider::Vimeo),
            _ => None,
        }
    }

    /// Derive the embeddable URL for a stored video `url`
    ///
    /// If the value already contains the provider's domain, the video id is
    /// parsed out of it; otherwise the whole value is treated as the id. The
    /// embed URL is then built from the provider's fixed template.
    pub fn embed_url(&self, url: &str) -> String {
        let id = self.extract_id(url);
        match self {
            VideoProvider::Youtube => format!("https://www.youtube.com/embed/{}", id),
            VideoProvider::Vimeo => format!("https://player.vimeo.com/video/{}", id),
        }
    }

    fn extract_id<'a>(&self, url: &'a str) -> &'a str {
        match self {
            VideoProvider::Youtube if url.contains("youtube.com") => {
                // watch URLs carry the id in the `v` query parameter
                url.split_once("v=")
                    .map(|(_, rest)| rest.split('&').next().unwrap_or(rest))
                    .unwrap_or_else(|| trailing_segment(url))
            }
            VideoProvider::Youtube if url.contains("youtu.be") => trailing_segment(url),
            VideoProvider::Vimeo if url.contains("vimeo.com") => trailing_segment(url),
            // Not a provider URL: the stored value is already the id.
            _ => url,
        }
    }
}

/// Last path segment of a URL, with any query string stripped
fn trailing_segment(url: &str) -> &str {
    let path = url.split('?').next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path)
}

/// Responsive presentation tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Narrowest contexts: heights scale to 50%
    Narrow,
    /// Medium contexts: heights scale to 75%
    Medium,
    /// Widest contexts: full height
    Wide,
}

impl Tier {
    /// The scale factor for this tier
    pub fn factor(&self) -> f64 {
        match self {
            Tier::Narrow => 0.5,
            Tier::Medium => 0.75,
            Tier::Wide => 1.0,
        }
    }
}

/// Scale a CSS length string for a presentation tier
///
/// Parses `<number><unit>` (e.g. `80px`, `2rem`, `1.5em`) and scales the
/// numeric part by the tier factor. A value that does not parse is returned
/// unchanged at every tier rather than failing the render.
pub fn scaled_height(height: &str, tier: Tier) -> String {
    let height = height.trim();
    let split = height
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.')
        .map(|(i, _)| i)
        .unwrap_or(height.len());
    let (number, unit) = height.split_at(split);

    match number.parse::<f64>() {
        Ok(value) => {
            let scaled = value * tier.factor();
            // Trim a trailing ".0" so whole values stay whole ("40px", not "40.0px")
            if (scaled - scaled.round()).abs() < f64::EPSILON {
                format!("{}{}", scaled.round() as i64, unit)
            } else {
                format!("{}{}", scaled, unit)
            }
        }
        Err(_) => {
            warn!(height, "unparsable length string, not scaling");
            height.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_watch_url() {
        let url = VideoProvider::Youtube.embed_url("https://www.youtube.com/watch?v=abc123");
        assert_eq!(url, "https://www.youtube.com/embed/abc123");
    }

    #[test]
    fn test_youtube_watch_url_with_extra_params() {
        let url =
            VideoProvider::Youtube.embed_url("https://www.youtube.com/watch?v=abc123&t=42s");
        assert_eq!(url, "https://www.youtube.com/embed/abc123");
    }

    #[test]
    fn test_youtube_short_url() {
        let url = VideoProvider::Youtube.embed_url("https://youtu.be/abc123");
        assert_eq!(url, "https://www.youtube.com/embed/abc123");
    }

    #[test]
    fn test_bare_id_is_used_directly() {
        let url = VideoProvider::Youtube.embed_url("abc123");
        assert_eq!(url, "https://www.youtube.com/embed/abc123");
    }

    #[test]
    fn test_vimeo_url() {
        let url = VideoProvider::Vimeo.embed_url("https://vimeo.com/987654");
        assert_eq!(url, "https://player.vimeo.com/video/987654");
    }

    #[test]
    fn test_vimeo_bare_id() {
        let url = VideoProvider::Vimeo.embed_url("987654");
        assert_eq!(url, "https://player.vimeo.com/video/987654");
    }

    #[test]
    fn test_scaled_height_tiers() {
        assert_eq!(scaled_height("80px", Tier::Narrow), "40px");
        assert_eq!(scaled_height("80px", Tier::Medium), "60px");
        assert_eq!(scaled_height("80px", Tier::Wide), "80px");
    }

    #[test]
    fn test_scaled_height_fractional() {
        assert_eq!(scaled_height("2rem", Tier::Narrow), "1rem");
        assert_eq!(scaled_height("2rem", Tier::Medium), "1.5rem");
    }

    #[test]
    fn test_unparsable_height_unchanged() {
        assert_eq!(scaled_height("auto", Tier::Narrow), "auto");
        assert_eq!(scaled_height("", Tier::Medium), "");
    }
}
