//! Rendering tests against stored content.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use avn_render::{Countdown, Document, Page, RenderOptions, Renderer, render_articles_into};
use avn_store::query::{carousel_events, listing_events, next_event};
use avn_store::{ContentStore, EventFilter, MemoryStore};
use avn_types::{Article, Event, MediaType};
use chrono::{NaiveDate, NaiveTime};

/// Undo the HTML escaping applied to interpolated values.
fn unescape(html: &str) -> String {
    html.replace("&#x2f;", "/")
        .replace("&#x27;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

fn renderer() -> Renderer {
    Renderer::new(RenderOptions::default()).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn empty_store_renders_placeholder() {
    let store = ContentStore::new(MemoryStore::new());
    let mut page = Page::with_containers(["articles-list"]);

    let rendered = render_articles_into(&store, &renderer(), &mut page, "articles-list").unwrap();

    assert!(rendered);
    let html = page.content("articles-list").unwrap();
    assert!(html.contains(r#"<p class="no-articles">No articles published yet.</p>"#));
    assert!(!html.contains("article-card"));
}

#[test]
fn missing_container_changes_nothing() {
    let mut store = ContentStore::new(MemoryStore::new());
    store.seed_defaults().unwrap();
    let mut page = Page::with_containers(["events-grid"]);
    let before = page.clone();

    let rendered = render_articles_into(&store, &renderer(), &mut page, "articles-list").unwrap();

    assert!(!rendered);
    assert_eq!(page, before);
}

#[test]
fn one_card_per_article_in_stored_order() {
    let mut store = ContentStore::new(MemoryStore::new());
    for title in ["First", "Second", "Third"] {
        store
            .append_article(Article {
                id: Some(title.to_lowercase()),
                title: Some(title.to_owned()),
                ..Article::default()
            })
            .unwrap();
    }
    let mut page = Page::with_containers(["articles-list"]);
    render_articles_into(&store, &renderer(), &mut page, "articles-list").unwrap();

    let html = unescape(page.content("articles-list").unwrap());
    assert_eq!(html.matches(r#"class="article-card""#).count(), 3);
    let first = html.find("<h3>First</h3>").unwrap();
    let second = html.find("<h3>Second</h3>").unwrap();
    let third = html.find("<h3>Third</h3>").unwrap();
    assert!(first < second && second < third);
    assert!(html.contains("article-details.html?id=first"));
    assert!(html.contains(r#"src="assets/article1.jpg""#));
    assert!(html.contains("this.src='assets/default-article.jpg'"));
}

#[test]
fn rendering_twice_replaces_rather_than_appends() {
    let mut store = ContentStore::new(MemoryStore::new());
    store.append_article(Article::default()).unwrap();
    let renderer = renderer();
    let mut page = Page::with_containers(["articles-list"]);

    render_articles_into(&store, &renderer, &mut page, "articles-list").unwrap();
    render_articles_into(&store, &renderer, &mut page, "articles-list").unwrap();

    let html = page.content("articles-list").unwrap();
    assert_eq!(html.matches(r#"class="article-card""#).count(), 1);
}

#[test]
fn inline_image_data_is_displayed_and_linked() {
    let mut store = ContentStore::new(MemoryStore::new());
    store
        .append_article(Article {
            featured_image: Some(String::from("data:image/png;base64,AAA=")),
            ..Article::default()
        })
        .unwrap();

    let fragment = renderer().render_articles(&store.articles()).unwrap();
    let html = unescape(fragment.html());
    assert!(html.contains(r#"src="data:image/png;base64,AAA=""#));
    assert!(html.contains(r#"data-media="data:image/png;base64,AAA=""#));
    assert!(!fragment.is_placeholder());
    assert_eq!(fragment.item_count(), 1);
}

#[test]
fn youtube_article_gets_badge_and_embed() {
    let article = Article {
        id: Some(String::from("v1")),
        title: Some(String::from("Demo day")),
        category: Some(String::from("AI")),
        media_type: Some(MediaType::Youtube),
        media_url: Some(String::from("https://www.youtube.com/embed/CzQVdsFA5eA")),
        created_at: Some(String::from("2025-10-01T08:30:00.000Z")),
        ..Article::default()
    };
    let html = unescape(renderer().render_articles(&[article]).unwrap().html());

    assert!(html.contains("video-badge"));
    assert!(html.contains("Vidéo"));
    assert!(html.contains(r#"data-media="https://www.youtube.com/embed/CzQVdsFA5eA""#));
    assert!(html.contains(r#"<span class="article-category">AI</span>"#));
    assert!(html.contains(r#"<span class="article-date">10/1/2025</span>"#));
}

#[test]
fn plain_article_has_no_badge_or_category() {
    let article = Article {
        title: Some(String::from("Notes")),
        ..Article::default()
    };
    let html = renderer().render_articles(&[article]).unwrap().into_html();
    assert!(!html.contains("video-badge"));
    assert!(!html.contains("article-category"));
    assert!(html.contains("Invalid Date"));
}

#[test]
fn markup_in_content_is_escaped() {
    let article = Article {
        title: Some(String::from("<script>alert(1)</script>")),
        ..Article::default()
    };
    let html = renderer().render_articles(&[article]).unwrap().into_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn events_grid_applies_filter() {
    let mut store = ContentStore::new(MemoryStore::new());
    store.seed_defaults().unwrap();
    let today = day(2025, 11, 21);
    let renderer = renderer();

    let all = renderer
        .render_events(&store.events(), &EventFilter::All, today)
        .unwrap();
    assert_eq!(all.item_count(), 3);
    assert_eq!(all.html().matches("event-card-detailed").count(), 3);

    let upcoming = renderer
        .render_events(&store.events(), &EventFilter::Upcoming, today)
        .unwrap();
    assert_eq!(upcoming.item_count(), 2);

    let none = renderer
        .render_events(&store.events(), &EventFilter::Type(String::from("gala")), today)
        .unwrap();
    assert!(none.is_placeholder());
    assert!(none.html().contains("No events found for this filter."));
}

#[test]
fn empty_collection_renders_placeholder_cards() {
    let store = ContentStore::new(MemoryStore::new());
    let today = day(2025, 11, 21);
    let renderer = renderer();

    let listing = renderer
        .render_events(&listing_events(store.events()), &EventFilter::All, today)
        .unwrap();
    let html = unescape(listing.html());
    assert_eq!(listing.item_count(), 2);
    assert!(html.contains("UEMF Innovation Center"));
    assert!(html.contains(r#"src="assets/event1.jpg""#));

    let carousel = renderer
        .render_events(&carousel_events(&store.events(), today, 4), &EventFilter::All, today)
        .unwrap();
    let html = carousel.html();
    assert_eq!(carousel.item_count(), 2);
    assert!(html.contains("November 28, 2025"));
    assert!(html.contains("December 5, 2025"));
}

#[test]
fn event_cards_show_long_date_and_fallback_image() {
    let event = Event {
        id: Some(String::from("e1")),
        title: Some(String::from("Spring Summit")),
        date: Some(String::from("2026-03-15")),
        event_type: Some(String::from("conference")),
        ..Event::default()
    };
    let fragment = renderer()
        .render_events(&[event], &EventFilter::All, day(2026, 1, 1))
        .unwrap();
    let html = unescape(fragment.html());
    assert!(html.contains("March 15, 2026"));
    assert!(html.contains(r#"src="assets/event-default.jpg""#));
    assert!(html.contains("event-details.html?id=e1"));
    assert!(!html.contains("event-location"));
}

#[test]
fn countdown_to_next_seeded_event() {
    let mut store = ContentStore::new(MemoryStore::new());
    store.seed_defaults().unwrap();
    let events = store.events();
    let now = day(2025, 11, 1).and_time(NaiveTime::MIN);

    let (event, start) = next_event(&events, now).unwrap();
    let countdown = Countdown::between(start, now);
    let html = renderer()
        .render_countdown(&countdown, event.title.as_deref())
        .unwrap()
        .into_html();

    assert!(!countdown.started);
    assert!(html.contains(r#"<span id="days">"#));
    assert!(!html.contains("Event Started!"));
}

#[test]
fn countdown_after_start_says_started() {
    let target = day(2025, 1, 1).and_time(NaiveTime::MIN);
    let now = day(2025, 6, 1).and_time(NaiveTime::MIN);
    let fragment = renderer()
        .render_countdown(&Countdown::between(target, now), None)
        .unwrap();
    assert!(fragment.html().contains("Event Started!"));
    assert!(fragment.is_placeholder());
}

#[test]
fn documents_can_be_used_as_trait_objects() {
    let store = ContentStore::new(MemoryStore::new());
    let mut page = Page::with_containers(["articles-list"]);
    let document: &mut dyn Document = &mut page;
    assert!(render_articles_into(&store, &renderer(), document, "articles-list").unwrap());
}
