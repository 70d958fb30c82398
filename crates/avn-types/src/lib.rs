//! Shared record types for the AVN club site.
//!
//! The page scripts persist events and articles as JSON arrays in the
//! browser's local storage. The types here mirror that JSON shape exactly
//! (`camelCase` field names, leading-underscore side fields) so records written
//! by either side read back on the other. `ts-rs` exports the same shapes to
//! `TypeScript` for the page scripts.
//!
//! # Modules
//!
//! - [`enums`] -- Closed enumerations (media type, registration, theme)
//! - [`records`] -- [`Event`] and [`Article`] with their nested parts
//! - [`de`] -- Lenient field decoders for hand-edited or legacy data

pub mod de;
pub mod enums;
pub mod records;

pub use enums::{EventStatus, MediaType, RegistrationStatus, Theme, UnknownVariant};
pub use records::{Article, ArticleResource, Author, Event, ScheduleItem};

#[cfg(test)]
mod tests {
    #[test]
    fn export_bindings() {
        // Writes the TypeScript files into `bindings/` relative to the crate.
        use ts_rs::TS;

        let _ = crate::enums::MediaType::export_all();
        let _ = crate::enums::RegistrationStatus::export_all();
        let _ = crate::enums::EventStatus::export_all();
        let _ = crate::enums::Theme::export_all();

        let _ = crate::records::ScheduleItem::export_all();
        let _ = crate::records::ArticleResource::export_all();
        let _ = crate::records::Author::export_all();
        let _ = crate::records::Event::export_all();
        let _ = crate::records::Article::export_all();
    }
}
