//! Template environment and fragment rendering via `minijinja`.
//!
//! The three page fragments (article grid, events grid, countdown) ship as
//! built-in templates. A template directory may override any of them by
//! file name; files it does not contain keep the built-in version. Template
//! names end in `.html`, so every interpolated value is HTML-escaped.

use std::path::Path;

use avn_store::query::filter_events;
use avn_store::{ContentStore, EventFilter, KvStore};
use avn_types::{Article, Event};
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use minijinja::{Environment, context};
use serde::Serialize;

use crate::countdown::Countdown;
use crate::error::RenderError;
use crate::page::Document;
use crate::view::{ArticleCard, EventCard};

/// Template file for the article grid.
pub const ARTICLES_TEMPLATE: &str = "articles.html";
/// Template file for the events grid.
pub const EVENTS_TEMPLATE: &str = "events.html";
/// Template file for the countdown block.
pub const COUNTDOWN_TEMPLATE: &str = "countdown.html";

const BUILTIN_TEMPLATES: [(&str, &str); 3] = [
    (ARTICLES_TEMPLATE, include_str!("../templates/articles.html")),
    (EVENTS_TEMPLATE, include_str!("../templates/events.html")),
    (COUNTDOWN_TEMPLATE, include_str!("../templates/countdown.html")),
];

// =============================================================================
// Options
// =============================================================================

/// Fallbacks, link targets and date formats used while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Image shown for an article with no image of its own.
    pub fallback_article_image: String,
    /// Image shown for an event with no image of its own.
    pub fallback_event_image: String,
    /// Page that shows one article, linked as `<page>?id=<id>`.
    pub article_details_page: String,
    /// Page that shows one event, linked as `<page>?id=<id>`.
    pub event_details_page: String,
    /// `chrono` format for article creation dates.
    pub short_date_format: String,
    /// `chrono` format for event dates.
    pub long_date_format: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fallback_article_image: String::from("assets/default-article.jpg"),
            fallback_event_image: String::from("assets/event-default.jpg"),
            article_details_page: String::from("article-details.html"),
            event_details_page: String::from("event-details.html"),
            short_date_format: String::from("%-m/%-d/%Y"),
            long_date_format: String::from("%B %-d, %Y"),
        }
    }
}

/// Reject a `chrono` format string containing an unknown specifier.
///
/// `chrono` panics when such a format is displayed, so formats are checked
/// once up front.
fn validate_date_format(format: &str) -> Result<(), RenderError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(RenderError::DateFormat(format.to_owned()));
    }
    Ok(())
}

// =============================================================================
// Fragment
// =============================================================================

/// Rendered markup for one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    html: String,
    items: usize,
}

impl Fragment {
    /// The markup.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Take the markup.
    pub fn into_html(self) -> String {
        self.html
    }

    /// Number of cards rendered.
    pub const fn item_count(&self) -> usize {
        self.items
    }

    /// Whether the fragment is the empty-collection placeholder.
    pub const fn is_placeholder(&self) -> bool {
        self.items == 0
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Renders stored records into HTML fragments.
pub struct Renderer {
    env: Environment<'static>,
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer using the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DateFormat`] if either date format is invalid,
    /// or [`RenderError::Template`] if a built-in template fails to parse.
    pub fn new(options: RenderOptions) -> Result<Self, RenderError> {
        validate_date_format(&options.short_date_format)?;
        validate_date_format(&options.long_date_format)?;

        let mut env = Environment::new();
        for (name, source) in BUILTIN_TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| RenderError::Template(format!("failed to add {name}: {e}")))?;
        }
        Ok(Self { env, options })
    }

    /// Create a renderer whose templates may be overridden from `dir`.
    ///
    /// Each built-in template is replaced by the file of the same name in
    /// `dir` when one exists.
    ///
    /// # Errors
    ///
    /// As [`Renderer::new`], plus [`RenderError::Template`] if an override
    /// exists but cannot be read or parsed.
    pub fn with_template_dir(options: RenderOptions, dir: &Path) -> Result<Self, RenderError> {
        let mut renderer = Self::new(options)?;
        for (name, _) in BUILTIN_TEMPLATES {
            let Some(source) = load_override(dir, name)? else {
                continue;
            };
            renderer
                .env
                .add_template_owned(name, source)
                .map_err(|e| RenderError::Template(format!("failed to add {name}: {e}")))?;
            tracing::debug!(template = name, dir = %dir.display(), "template overridden");
        }
        Ok(renderer)
    }

    /// Options this renderer was built with.
    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the article grid, one card per article in stored order.
    ///
    /// An empty slice renders the `no-articles` placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if rendering fails.
    pub fn render_articles(&self, articles: &[Article]) -> Result<Fragment, RenderError> {
        let cards: Vec<ArticleCard> = articles
            .iter()
            .map(|a| ArticleCard::from_article(a, &self.options))
            .collect();
        let html = self.render(
            ARTICLES_TEMPLATE,
            context! {
                articles => &cards,
                details_page => &self.options.article_details_page,
                fallback_image => &self.options.fallback_article_image,
            },
        )?;
        tracing::debug!(articles = cards.len(), "rendered article grid");
        Ok(Fragment {
            html,
            items: cards.len(),
        })
    }

    /// Render the events grid for the events passing `filter` on `today`.
    ///
    /// No matching events renders the `no-events` placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if rendering fails.
    pub fn render_events(
        &self,
        events: &[Event],
        filter: &EventFilter,
        today: NaiveDate,
    ) -> Result<Fragment, RenderError> {
        let cards: Vec<EventCard> = filter_events(events, filter, today)
            .into_iter()
            .map(|e| EventCard::from_event(e, &self.options))
            .collect();
        let html = self.render(
            EVENTS_TEMPLATE,
            context! {
                events => &cards,
                details_page => &self.options.event_details_page,
            },
        )?;
        tracing::debug!(events = cards.len(), filter = %filter, "rendered events grid");
        Ok(Fragment {
            html,
            items: cards.len(),
        })
    }

    /// Render the countdown block, labelled with the event `title` if given.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if rendering fails.
    pub fn render_countdown(
        &self,
        countdown: &Countdown,
        title: Option<&str>,
    ) -> Result<Fragment, RenderError> {
        let [days, hours, minutes, seconds] = countdown.padded();
        let html = self.render(
            COUNTDOWN_TEMPLATE,
            context! {
                started => countdown.started,
                title => title,
                days => days,
                hours => hours,
                minutes => minutes,
                seconds => seconds,
            },
        )?;
        Ok(Fragment {
            html,
            items: usize::from(!countdown.started),
        })
    }

    fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, RenderError> {
        self.env
            .get_template(name)
            .map_err(|e| RenderError::Template(format!("missing {name}: {e}")))?
            .render(ctx)
            .map_err(|e| RenderError::Template(format!("{name} render failed: {e}")))
    }
}

/// Read `dir/name` if it exists.
fn load_override(dir: &Path, name: &str) -> Result<Option<String>, RenderError> {
    let path = dir.join(name);
    match std::fs::read_to_string(&path) {
        Ok(source) => Ok(Some(source)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(RenderError::Template(format!(
            "failed to read {}: {e}",
            path.display()
        ))),
    }
}

/// Render every stored article into container `container_id` of `document`.
///
/// Returns `false` without reading the store when the container does not
/// exist. Otherwise the container's content is replaced with the article
/// grid (or its placeholder) and `true` is returned.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if rendering fails; the document is left
/// unchanged.
pub fn render_articles_into<S, D>(
    store: &ContentStore<S>,
    renderer: &Renderer,
    document: &mut D,
    container_id: &str,
) -> Result<bool, RenderError>
where
    S: KvStore,
    D: Document + ?Sized,
{
    if !document.has_container(container_id) {
        tracing::debug!(container = container_id, "article container missing, nothing rendered");
        return Ok(false);
    }
    let fragment = renderer.render_articles(&store.articles())?;
    Ok(document.replace_content(container_id, fragment.html()))
}
