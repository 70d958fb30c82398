//! Display derivation, kept apart from markup.
//!
//! Everything here is a pure function of a stored record and the render
//! options, so the image and media fallbacks can be tested without templates.

use avn_store::query::parse_event_date;
use avn_types::{Article, Event, MediaType};
use chrono::DateTime;
use serde::Serialize;

use crate::renderer::RenderOptions;

/// Label shown for a missing or unreadable date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Which image an article card shows.
///
/// Inline data wins, then the caller's original image, then the stored
/// filename, then `fallback`. Empty strings count as absent.
pub fn display_image<'a>(article: &'a Article, fallback: &'a str) -> &'a str {
    article
        .image_data()
        .or_else(|| article.original_image())
        .or_else(|| article.featured_image())
        .unwrap_or(fallback)
}

/// Which media an article links to.
///
/// A `YouTube` article links its `mediaUrl` (which may be missing); any other
/// article links its `mediaUrl` or, failing that, its display image.
pub fn display_media(article: &Article, image: &str) -> Option<String> {
    match article.media_type {
        Some(MediaType::Youtube) => article.media_url.clone(),
        Some(MediaType::Image) | None => Some(
            article
                .media_url
                .clone()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| image.to_owned()),
        ),
    }
}

/// Format a creation timestamp or plain date with `format`.
///
/// Timestamps keep their own offset; a `Z` timestamp shows its UTC date.
pub fn timestamp_label(raw: Option<&str>, format: &str) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return INVALID_DATE.to_owned();
    };
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return stamp.format(format).to_string();
    }
    parse_event_date(raw).map_or_else(
        || INVALID_DATE.to_owned(),
        |date| date.format(format).to_string(),
    )
}

/// View model for one article card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleCard {
    /// Article id, used in the details link.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Short creation date label.
    pub date_label: String,
    /// Category tag, if any.
    pub category: Option<String>,
    /// Teaser text.
    pub summary: String,
    /// Image to show.
    pub image_url: String,
    /// Media to link, if any.
    pub media_url: Option<String>,
    /// Whether to show the video badge.
    pub is_video: bool,
}

impl ArticleCard {
    /// Derive the card for `article`.
    pub fn from_article(article: &Article, options: &RenderOptions) -> Self {
        let image = display_image(article, &options.fallback_article_image);
        let media_url = display_media(article, image);
        Self {
            id: article.id.clone().unwrap_or_default(),
            title: article.title.clone().unwrap_or_default(),
            date_label: timestamp_label(article.created_at.as_deref(), &options.short_date_format),
            category: article.category.clone().filter(|c| !c.is_empty()),
            summary: article.summary.clone().unwrap_or_default(),
            image_url: image.to_owned(),
            media_url,
            is_video: article.has_video(),
        }
    }
}

/// View model for one card on the events page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCard {
    /// Event id.
    pub id: String,
    /// Title.
    pub title: String,
    /// Long date label.
    pub date_label: String,
    /// Event type label.
    pub event_type: String,
    /// Card text.
    pub description: String,
    /// Venue, if any.
    pub location: Option<String>,
    /// Card image.
    pub image_url: String,
}

impl EventCard {
    /// Derive the card for `event`.
    pub fn from_event(event: &Event, options: &RenderOptions) -> Self {
        let date_label = event
            .date
            .as_deref()
            .and_then(parse_event_date)
            .map_or_else(
                || INVALID_DATE.to_owned(),
                |d| d.format(&options.long_date_format).to_string(),
            );
        Self {
            id: event.id.clone().unwrap_or_default(),
            title: event.title.clone().unwrap_or_default(),
            date_label,
            event_type: event.event_type.clone().unwrap_or_default(),
            description: event.description.clone().unwrap_or_default(),
            location: event.location.clone().filter(|l| !l.is_empty()),
            image_url: event
                .image
                .clone()
                .filter(|i| !i.is_empty())
                .unwrap_or_else(|| options.fallback_event_image.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "assets/default-article.jpg";

    fn article() -> Article {
        Article {
            featured_image: Some(String::from("assets/article2.jpg")),
            ..Article::default()
        }
    }

    #[test]
    fn inline_data_beats_everything() {
        let a = Article {
            image_data: Some(String::from("data:image/png;base64,AAA=")),
            original_image: Some(String::from("https://example.com/x.png")),
            ..article()
        };
        assert_eq!(display_image(&a, FALLBACK), "data:image/png;base64,AAA=");
    }

    #[test]
    fn original_image_beats_featured_image() {
        let a = Article {
            original_image: Some(String::from("https://example.com/x.png")),
            ..article()
        };
        assert_eq!(display_image(&a, FALLBACK), "https://example.com/x.png");
    }

    #[test]
    fn featured_image_then_fallback() {
        assert_eq!(display_image(&article(), FALLBACK), "assets/article2.jpg");
        assert_eq!(display_image(&Article::default(), FALLBACK), FALLBACK);
        let blank = Article {
            featured_image: Some(String::new()),
            ..Article::default()
        };
        assert_eq!(display_image(&blank, FALLBACK), FALLBACK);
    }

    #[test]
    fn youtube_media_is_the_embed_even_when_missing() {
        let a = Article {
            media_type: Some(MediaType::Youtube),
            media_url: Some(String::from("https://www.youtube.com/embed/abc")),
            ..article()
        };
        assert_eq!(
            display_media(&a, "img.jpg").as_deref(),
            Some("https://www.youtube.com/embed/abc")
        );

        let missing = Article {
            media_type: Some(MediaType::Youtube),
            ..article()
        };
        assert_eq!(display_media(&missing, "img.jpg"), None);
    }

    #[test]
    fn other_media_falls_back_to_image() {
        assert_eq!(display_media(&article(), "img.jpg").as_deref(), Some("img.jpg"));
        let with_url = Article {
            media_type: Some(MediaType::Image),
            media_url: Some(String::from("assets/photo.jpg")),
            ..article()
        };
        assert_eq!(display_media(&with_url, "img.jpg").as_deref(), Some("assets/photo.jpg"));
    }

    #[test]
    fn timestamp_labels() {
        assert_eq!(
            timestamp_label(Some("2025-10-01T08:30:00.000Z"), "%-m/%-d/%Y"),
            "10/1/2025"
        );
        assert_eq!(timestamp_label(Some("2025-03-15"), "%B %-d, %Y"), "March 15, 2025");
        assert_eq!(timestamp_label(None, "%-m/%-d/%Y"), INVALID_DATE);
        assert_eq!(timestamp_label(Some("yesterday"), "%-m/%-d/%Y"), INVALID_DATE);
    }

    #[test]
    fn article_card_collects_display_fields() {
        let options = RenderOptions::default();
        let a = Article {
            id: Some(String::from("a1")),
            title: Some(String::from("Hackathon Recap")),
            category: Some(String::new()),
            created_at: Some(String::from("2025-11-02T10:00:00Z")),
            media_type: Some(MediaType::Youtube),
            media_url: Some(String::from("https://www.youtube.com/embed/xyz")),
            ..article()
        };
        let card = ArticleCard::from_article(&a, &options);
        assert_eq!(card.id, "a1");
        assert_eq!(card.date_label, "11/2/2025");
        assert_eq!(card.category, None);
        assert_eq!(card.image_url, "assets/article2.jpg");
        assert!(card.is_video);
        assert_eq!(card.summary, "");
    }

    #[test]
    fn event_card_uses_long_date_and_fallback_image() {
        let options = RenderOptions::default();
        let e = Event {
            title: Some(String::from("Summit")),
            date: Some(String::from("2024-03-15")),
            event_type: Some(String::from("conference")),
            ..Event::default()
        };
        let card = EventCard::from_event(&e, &options);
        assert_eq!(card.date_label, "March 15, 2024");
        assert_eq!(card.image_url, options.fallback_event_image);
        assert_eq!(card.location, None);
    }
}
