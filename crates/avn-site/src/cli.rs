//! Command line definition and command implementations.

use std::io::Write;
use std::path::{Path, PathBuf};

use avn_render::{Countdown, Page, Renderer, render_articles_into};
use avn_store::query::{carousel_events, listing_events, next_event};
use avn_store::{ContentStore, EventFilter, FileStore, KvStore, MemoryStore};
use avn_types::Theme;
use avn_types::de::id_text;
use chrono::{Local, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{RenderConfig, SiteConfig, StorageBackend, StorageConfig};
use crate::error::SiteError;

/// Containers present on the site's pages, addressable by `--container`.
pub const SITE_CONTAINERS: [&str; 3] = ["articles-list", "events-grid", "countdown"];

#[derive(Parser)]
#[command(name = "avn-site")]
#[command(about = "Seed, edit and render AVN club site content")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: avn-site.yaml when present)
    #[arg(short, long, global = true, env = "AVN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Insert the default events and articles that are not stored yet
    Seed,

    /// Append an event read from a JSON file, storing its fields as given
    AppendEvent {
        /// JSON object describing the event
        file: PathBuf,
    },

    /// Append an article read from a JSON file, naming its image
    AppendArticle {
        /// JSON object describing the article
        file: PathBuf,
    },

    /// Print the article grid as rendered into a page container
    RenderArticles {
        /// Container to render into
        #[arg(long, default_value = "articles-list")]
        container: String,
    },

    /// Print the events grid
    RenderEvents {
        /// all, upcoming, past, historical, or an event type
        #[arg(long, default_value = "all")]
        filter: String,
    },

    /// Print the home page's upcoming events
    Upcoming,

    /// Print the countdown to the next event
    Countdown,

    /// Show or change the saved color theme
    Theme {
        /// Theme to save
        theme: Option<Theme>,
        /// Save the opposite of the current theme
        #[arg(long, conflicts_with = "theme")]
        toggle: bool,
    },
}

/// Run `command` against the configured store, writing results to `out`.
pub fn run(command: Command, config: &SiteConfig, out: &mut dyn Write) -> Result<(), SiteError> {
    let mut store = open_store(&config.storage)?;
    let now = Local::now().naive_local();
    let clock = Clock {
        today: now.date(),
        now,
    };
    execute(command, &mut store, &config.render, clock, out)
}

/// The moment a command runs at.
#[derive(Debug, Clone, Copy)]
struct Clock {
    today: NaiveDate,
    now: NaiveDateTime,
}

fn open_store(storage: &StorageConfig) -> Result<ContentStore<Box<dyn KvStore>>, SiteError> {
    let kv: Box<dyn KvStore> = match storage.backend {
        StorageBackend::File => Box::new(FileStore::open(storage.path.clone())?),
        StorageBackend::Memory => {
            warn!("memory backend in use, changes are discarded when the command exits");
            Box::new(
                storage
                    .quota_bytes
                    .map_or_else(MemoryStore::new, MemoryStore::with_quota),
            )
        }
    };
    debug!(backend = ?storage.backend, path = %storage.path.display(), "store opened");
    Ok(ContentStore::new(kv))
}

fn build_renderer(render: &RenderConfig) -> Result<Renderer, SiteError> {
    let options = render.render_options();
    let renderer = match &render.templates_dir {
        Some(dir) => Renderer::with_template_dir(options, dir)?,
        None => Renderer::new(options)?,
    };
    Ok(renderer)
}

fn execute<S: KvStore>(
    command: Command,
    store: &mut ContentStore<S>,
    render: &RenderConfig,
    clock: Clock,
    out: &mut dyn Write,
) -> Result<(), SiteError> {
    match command {
        Command::Seed => {
            let report = store.seed_defaults()?;
            writeln!(
                out,
                "seeded {} events, {} articles",
                report.events_added.len(),
                report.articles_added.len()
            )?;
        }
        Command::AppendEvent { file } => {
            let mut event = read_record(&file, "event")?;
            let id = fill_missing(&mut event, "event");
            store.append_event_value(Value::Object(event))?;
            writeln!(out, "appended event {id}")?;
        }
        Command::AppendArticle { file } => {
            let mut article = read_record(&file, "article")?;
            let id = fill_missing(&mut article, "article");
            let saved = store.append_article_value(Value::Object(article))?;
            writeln!(
                out,
                "appended article {id} as {}",
                saved
                    .get("featuredImage")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
            )?;
        }
        Command::RenderArticles { container } => {
            let renderer = build_renderer(render)?;
            let mut page = Page::with_containers(SITE_CONTAINERS);
            if render_articles_into(store, &renderer, &mut page, &container)? {
                writeln!(out, "{}", page.content(&container).unwrap_or_default())?;
            } else {
                info!(container = %container, "container not on the page, nothing rendered");
            }
        }
        Command::RenderEvents { filter } => {
            let filter: EventFilter = filter.parse().unwrap_or_default();
            let fragment = build_renderer(render)?.render_events(
                &listing_events(store.events()),
                &filter,
                clock.today,
            )?;
            writeln!(out, "{}", fragment.html())?;
        }
        Command::Upcoming => {
            let upcoming = carousel_events(&store.events(), clock.today, render.upcoming_limit);
            let fragment =
                build_renderer(render)?.render_events(&upcoming, &EventFilter::All, clock.today)?;
            writeln!(out, "{}", fragment.html())?;
        }
        Command::Countdown => {
            let events = store.events();
            let Some((event, start)) = next_event(&events, clock.now) else {
                info!("no upcoming event to count down to");
                return Ok(());
            };
            let countdown = Countdown::between(start, clock.now);
            let fragment =
                build_renderer(render)?.render_countdown(&countdown, event.title.as_deref())?;
            writeln!(out, "{}", fragment.html())?;
        }
        Command::Theme { theme, toggle } => {
            let current = Theme::resolve(store.theme(), false);
            let next = if toggle { Some(current.toggled()) } else { theme };
            match next {
                Some(theme) => {
                    store.set_theme(theme)?;
                    writeln!(out, "{theme}")?;
                }
                None => writeln!(out, "{current}")?,
            }
        }
    }
    Ok(())
}

/// Read a record file holding one JSON object.
fn read_record(path: &Path, kind: &'static str) -> Result<Map<String, Value>, SiteError> {
    let text = std::fs::read_to_string(path).map_err(|source| SiteError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SiteError::Record {
        path: path.to_path_buf(),
        kind,
        source,
    })
}

fn is_blank(value: Option<&Value>) -> bool {
    value.is_none_or(|v| v.is_null() || v.as_str() == Some(""))
}

/// Give a record without an id a `<kind>_<uuid>` id, and stamp a missing
/// `createdAt` with the current time. Returns the record's id.
fn fill_missing(record: &mut Map<String, Value>, kind: &str) -> String {
    if is_blank(record.get("id")) {
        let generated = format!("{kind}_{}", Uuid::now_v7().simple());
        debug!(id = %generated, "assigned record id");
        record.insert(String::from("id"), Value::String(generated));
    }
    if is_blank(record.get("createdAt")) {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        record.insert(String::from("createdAt"), Value::String(now));
    }
    record.get("id").and_then(id_text).unwrap_or_default()
}
