//! Sequential article image naming.
//!
//! Every saved article gets a `featuredImage` of the form
//! `assets/article<N>.jpg`, where `N` is one more than the highest number
//! already in use. The number is recomputed from the stored articles on every
//! save; nothing tracks it between calls. Image values that do not fit the
//! scheme are moved to a side field so they can still be displayed.

use std::num::FpCategory;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

/// Prefix of an inline image payload (a `data:` URL).
pub const INLINE_DATA_PREFIX: &str = "data:";

/// Field holding the article's image filename.
pub const FEATURED_IMAGE_FIELD: &str = "featuredImage";

/// Side field holding an inline `data:` payload.
pub const IMAGE_DATA_FIELD: &str = "_imageData";

/// Side field holding a caller-supplied image that did not fit the scheme.
pub const ORIGINAL_IMAGE_FIELD: &str = "_originalImage";

/// Trailing `article<N>.jpg` with an optional `-`, `_` or space separator.
static ARTICLE_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?i)article[-_ ]?([0-9]+)\.jpg$").expect("article image pattern is valid")
});

/// What [`assign_featured_image`] did to an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAssignment {
    /// A `data:` payload was moved to `_imageData` and a filename assigned.
    Inline,
    /// No image was given; a filename was assigned.
    Generated,
    /// The given value already followed the naming scheme.
    Kept,
    /// The given value was moved to `_originalImage` and a filename assigned.
    Renamed,
}

/// Whether `value` ends in an `article<N>.jpg` filename.
pub fn matches_article_pattern(value: &str) -> bool {
    ARTICLE_IMAGE.is_match(value)
}

/// The `N` of an `article<N>.jpg` filename, or 0 when `value` does not match.
///
/// A number too large for `u64` counts as `u64::MAX`.
pub fn article_image_number(value: &str) -> u64 {
    ARTICLE_IMAGE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map_or(0, |m| m.as_str().parse().unwrap_or(u64::MAX))
}

/// One more than the highest article image number among `existing`.
///
/// Values that do not match the scheme count as 0, so an empty or
/// non-matching input yields 1.
pub fn next_article_index<'a, I>(existing: I) -> u64
where
    I: IntoIterator<Item = &'a str>,
{
    existing
        .into_iter()
        .map(article_image_number)
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}

/// The stored path for article image number `index`.
pub fn article_image_path(index: u64) -> String {
    format!("assets/article{index}.jpg")
}

/// Whether a stored image value counts as "no image": missing, `null`,
/// `false`, zero or the empty string.
pub fn is_blank_image(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// The text the page scripts see for a non-blank image value.
///
/// Strings are taken as-is, numbers and booleans in their literal form,
/// arrays as their elements joined with commas and objects as
/// `[object Object]`. Blank values have no text.
pub fn image_text(value: &Value) -> Option<String> {
    if is_blank_image(value) {
        return None;
    }
    Some(script_string(value))
}

fn script_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(script_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => String::from("[object Object]"),
    }
}

/// Normalise the `featuredImage` of a raw article record.
///
/// `next_index` is the number to use if a new filename is needed. Only
/// `featuredImage`, `_imageData` and `_originalImage` are touched; every other
/// field stays as the caller gave it.
pub fn assign_featured_image(record: &mut Map<String, Value>, next_index: u64) -> ImageAssignment {
    let provided = record.get(FEATURED_IMAGE_FIELD).cloned().unwrap_or(Value::Null);
    let generated = Value::String(article_image_path(next_index));

    if let Value::String(data) = &provided
        && data.starts_with(INLINE_DATA_PREFIX)
    {
        record.insert(IMAGE_DATA_FIELD.to_owned(), provided.clone());
        record.insert(FEATURED_IMAGE_FIELD.to_owned(), generated);
        return ImageAssignment::Inline;
    }

    let Some(text) = image_text(&provided) else {
        record.insert(FEATURED_IMAGE_FIELD.to_owned(), generated);
        return ImageAssignment::Generated;
    };
    if matches_article_pattern(&text) {
        return ImageAssignment::Kept;
    }
    record.insert(FEATURED_IMAGE_FIELD.to_owned(), generated);
    record.insert(ORIGINAL_IMAGE_FIELD.to_owned(), Value::String(text));
    ImageAssignment::Renamed
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn pattern_accepts_separators_and_case() {
        assert!(matches_article_pattern("assets/article3.jpg"));
        assert!(matches_article_pattern("article-12.jpg"));
        assert!(matches_article_pattern("uploads/Article_7.JPG"));
        assert!(matches_article_pattern("article 2.jpg"));
    }

    #[test]
    fn pattern_rejects_other_names() {
        assert!(!matches_article_pattern("assets/article-ai-video.jpg"));
        assert!(!matches_article_pattern("assets/article3.png"));
        assert!(!matches_article_pattern("assets/article3.jpg?v=2"));
        assert!(!matches_article_pattern("https://example.com/x.png"));
    }

    #[test]
    fn number_extraction() {
        assert_eq!(article_image_number("assets/article12.jpg"), 12);
        assert_eq!(article_image_number("assets/article-hackathon.jpg"), 0);
        assert_eq!(article_image_number(""), 0);
    }

    #[test]
    fn next_index_is_one_past_max() {
        assert_eq!(next_article_index(std::iter::empty()), 1);
        assert_eq!(
            next_article_index(["assets/article2.jpg", "x.png", "assets/article9.jpg"]),
            10
        );
        assert_eq!(next_article_index(["assets/article-projects.jpg"]), 1);
    }

    #[test]
    fn huge_numbers_do_not_overflow() {
        let huge = format!("article{}.jpg", u64::MAX);
        assert_eq!(next_article_index([huge.as_str()]), u64::MAX);
    }

    #[test]
    fn numbers_beyond_u64_saturate() {
        let beyond = "assets/article123456789012345678901234567890.jpg";
        assert_eq!(article_image_number(beyond), u64::MAX);
        assert_eq!(next_article_index([beyond, "assets/article3.jpg"]), u64::MAX);
    }

    #[test]
    fn blank_values() {
        for blank in [json!(null), json!(false), json!(0), json!(""), json!(0.0)] {
            assert!(is_blank_image(&blank), "{blank}");
            assert_eq!(image_text(&blank), None);
        }
        assert!(!is_blank_image(&json!([])));
        assert!(!is_blank_image(&json!({})));
    }

    #[test]
    fn image_text_follows_script_string_forms() {
        assert_eq!(image_text(&json!(42)).as_deref(), Some("42"));
        assert_eq!(image_text(&json!(true)).as_deref(), Some("true"));
        assert_eq!(
            image_text(&json!(["a", 1, null])).as_deref(),
            Some("a,1,")
        );
        assert_eq!(image_text(&json!({"k": 1})).as_deref(), Some("[object Object]"));
    }

    #[test]
    fn inline_data_moves_to_side_field() {
        let mut article = record(json!({"featuredImage": "data:image/png;base64,AAA="}));
        let outcome = assign_featured_image(&mut article, 4);
        assert_eq!(outcome, ImageAssignment::Inline);
        assert_eq!(
            Value::Object(article),
            json!({
                "featuredImage": "assets/article4.jpg",
                "_imageData": "data:image/png;base64,AAA="
            })
        );
    }

    #[test]
    fn missing_or_empty_image_gets_generated_name() {
        for given in [json!({}), json!({"featuredImage": ""}), json!({"featuredImage": null})] {
            let mut article = record(given);
            assert_eq!(assign_featured_image(&mut article, 1), ImageAssignment::Generated);
            assert_eq!(
                article.get(FEATURED_IMAGE_FIELD),
                Some(&json!("assets/article1.jpg"))
            );
            assert!(!article.contains_key(ORIGINAL_IMAGE_FIELD));
        }
    }

    #[test]
    fn matching_name_is_kept() {
        let mut article = record(json!({"featuredImage": "assets/article3.jpg"}));
        assert_eq!(assign_featured_image(&mut article, 8), ImageAssignment::Kept);
        assert_eq!(Value::Object(article), json!({"featuredImage": "assets/article3.jpg"}));
    }

    #[test]
    fn foreign_url_is_preserved() {
        let mut article = record(json!({"featuredImage": "https://example.com/x.png"}));
        assert_eq!(assign_featured_image(&mut article, 2), ImageAssignment::Renamed);
        assert_eq!(
            article.get(ORIGINAL_IMAGE_FIELD),
            Some(&json!("https://example.com/x.png"))
        );
        assert_eq!(
            article.get(FEATURED_IMAGE_FIELD),
            Some(&json!("assets/article2.jpg"))
        );
    }

    #[test]
    fn non_string_image_is_kept_as_text() {
        let mut article = record(json!({"id": "a", "featuredImage": 42}));
        assert_eq!(assign_featured_image(&mut article, 1), ImageAssignment::Renamed);
        assert_eq!(
            Value::Object(article),
            json!({"id": "a", "featuredImage": "assets/article1.jpg", "_originalImage": "42"})
        );
    }

    #[test]
    fn other_fields_are_not_touched() {
        let mut article = record(json!({"readingTime": "ten", "tags": "ai", "featuredImage": ""}));
        assign_featured_image(&mut article, 5);
        assert_eq!(article.get("readingTime"), Some(&json!("ten")));
        assert_eq!(article.get("tags"), Some(&json!("ai")));
    }
}
