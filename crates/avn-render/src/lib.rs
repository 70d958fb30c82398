//! HTML rendering for the AVN club site.
//!
//! Rendering is split in two steps. [`view`] derives plain view models from
//! stored records (which image to show, which media to link, how to label
//! dates); [`renderer`] feeds those models to `minijinja` templates and
//! returns a [`Fragment`]. [`page`] places fragments into page containers.
//!
//! # Modules
//!
//! - [`view`] -- Display derivation: image/media selection, date labels, cards
//! - [`countdown`] -- Time remaining until the next event
//! - [`renderer`] -- Template environment and fragment rendering
//! - [`page`] -- The [`Document`] container interface and an in-memory [`Page`]
//! - [`error`] -- Render error type

pub mod countdown;
pub mod error;
pub mod page;
pub mod renderer;
pub mod view;

pub use countdown::Countdown;
pub use error::RenderError;
pub use page::{Document, Page};
pub use renderer::{Fragment, RenderOptions, Renderer, render_articles_into};
pub use view::{ArticleCard, EventCard};
