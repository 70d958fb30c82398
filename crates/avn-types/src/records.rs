//! Event and article records as stored in the `avnEvents` and `avnArticles`
//! collections.
//!
//! Every field is optional because the page scripts store whatever a form
//! produced. Fields the types do not know about are kept in `extra` and
//! written back unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::enums::{EventStatus, MediaType, RegistrationStatus};

/// One line of an event's programme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScheduleItem {
    /// Start time label, e.g. `10:30`.
    #[serde(default)]
    pub time: String,
    /// What happens at that time.
    #[serde(default)]
    pub activity: String,
}

/// A club event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// Identifier, unique within the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::string_or_number")]
    #[ts(optional)]
    pub id: Option<String>,

    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub title: Option<String>,

    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub date: Option<String>,

    /// Time range label, e.g. `10:00 - 16:00`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub time: Option<String>,

    /// Kind of event (`conference`, `workshop`, `historical`, ...).
    #[serde(rename = "type")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub event_type: Option<String>,

    /// Topic category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub category: Option<String>,

    /// Venue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub location: Option<String>,

    /// Capacity label, e.g. `300 participants`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub capacity: Option<String>,

    /// Short description for cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub description: Option<String>,

    /// Long description for the details page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub detailed_description: Option<String>,

    /// Programme, in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub schedule: Option<Vec<ScheduleItem>>,

    /// Learning objectives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub objectives: Option<Vec<String>>,

    /// How `media_url` should be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub media_type: Option<MediaType>,

    /// Image path or embed URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub media_url: Option<String>,

    /// Card image path used by the events grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub image: Option<String>,

    /// Explicit upcoming/past marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub status: Option<EventStatus>,

    /// ISO 8601 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub created_at: Option<String>,

    /// Whether registration is open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub registration_status: Option<RegistrationStatus>,

    /// Fields this type does not model, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: BTreeMap<String, Value>,
}

impl Event {
    /// Whether the event is tagged as a historical (archive) entry.
    pub fn is_historical(&self) -> bool {
        self.event_type.as_deref() == Some("historical")
    }
}

/// A link attached to an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ArticleResource {
    /// Resource kind (`video`, `pdf`, `link`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Link text.
    #[serde(default)]
    pub title: String,
    /// Target URL.
    #[serde(default)]
    pub url: String,
}

/// Byline of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Author {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Role within the club.
    #[serde(default)]
    pub role: String,
    /// Avatar image path.
    #[serde(default)]
    pub avatar: String,
}

/// A published article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Article {
    /// Identifier, unique within the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::string_or_number")]
    #[ts(optional)]
    pub id: Option<String>,

    /// Headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub title: Option<String>,

    /// Section label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub category: Option<String>,

    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub tags: Option<Vec<String>>,

    /// Estimated reading time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub reading_time: Option<u32>,

    /// One-paragraph teaser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub summary: Option<String>,

    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub content: Option<String>,

    /// Image filename, normalised to `assets/article<N>.jpg` on save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub featured_image: Option<String>,

    /// Inline `data:` image payload moved out of `featured_image`.
    #[serde(rename = "_imageData")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub image_data: Option<String>,

    /// Caller-supplied image path or URL that did not follow the naming scheme.
    #[serde(rename = "_originalImage")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub original_image: Option<String>,

    /// How `media_url` should be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub media_type: Option<MediaType>,

    /// Image path or embed URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub media_url: Option<String>,

    /// Related links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub resources: Option<Vec<ArticleResource>>,

    /// Byline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub author: Option<Author>,

    /// ISO 8601 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "crate::de::lenient")]
    #[ts(optional)]
    pub created_at: Option<String>,

    /// Fields this type does not model, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: BTreeMap<String, Value>,
}

impl Article {
    /// `featured_image`, treating an empty string as absent.
    pub fn featured_image(&self) -> Option<&str> {
        non_empty(self.featured_image.as_ref())
    }

    /// `_imageData`, treating an empty string as absent.
    pub fn image_data(&self) -> Option<&str> {
        non_empty(self.image_data.as_ref())
    }

    /// `_originalImage`, treating an empty string as absent.
    pub fn original_image(&self) -> Option<&str> {
        non_empty(self.original_image.as_ref())
    }

    /// Whether the article's media is a video embed.
    pub fn has_video(&self) -> bool {
        self.media_type.is_some_and(MediaType::is_video)
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn event_uses_site_field_names() {
        let event = Event {
            id: Some(String::from("e1")),
            event_type: Some(String::from("workshop")),
            detailed_description: Some(String::from("Long form")),
            registration_status: Some(RegistrationStatus::Open),
            ..Event::default()
        };
        let value = serde_json::to_value(&event).unwrap_or_default();
        assert_eq!(
            value,
            json!({
                "id": "e1",
                "type": "workshop",
                "detailedDescription": "Long form",
                "registrationStatus": "open"
            })
        );
    }

    #[test]
    fn article_side_fields_keep_underscore_names() {
        let article = Article {
            image_data: Some(String::from("data:image/png;base64,AAA=")),
            original_image: Some(String::from("https://example.com/x.png")),
            ..Article::default()
        };
        let value = serde_json::to_value(&article).unwrap_or_default();
        assert_eq!(value["_imageData"], "data:image/png;base64,AAA=");
        assert_eq!(value["_originalImage"], "https://example.com/x.png");
    }

    #[test]
    fn unknown_fields_round_trip() {
        let stored = json!({
            "id": "a1",
            "title": "Hello",
            "pinned": true,
            "views": 12
        });
        let article: Article = serde_json::from_value(stored.clone()).unwrap_or_default();
        assert_eq!(article.extra.get("pinned"), Some(&json!(true)));
        let back = serde_json::to_value(&article).unwrap_or_default();
        assert_eq!(back, stored);
    }

    #[test]
    fn wrongly_typed_field_decodes_as_absent() {
        let stored = json!({
            "id": 7,
            "title": "Workshop",
            "readingTime": "five",
            "mediaType": "vimeo"
        });
        let article: Result<Article, _> = serde_json::from_value(stored);
        assert!(article.is_ok());
        let article = article.unwrap_or_default();
        assert_eq!(article.id.as_deref(), Some("7"));
        assert_eq!(article.reading_time, None);
        assert_eq!(article.media_type, None);
        assert_eq!(article.title.as_deref(), Some("Workshop"));
    }

    #[test]
    fn empty_strings_read_as_absent() {
        let article = Article {
            featured_image: Some(String::new()),
            ..Article::default()
        };
        assert_eq!(article.featured_image(), None);
    }

    #[test]
    fn historical_events_are_detected() {
        let event = Event {
            event_type: Some(String::from("historical")),
            ..Event::default()
        };
        assert!(event.is_historical());
        assert!(!Event::default().is_historical());
    }
}
