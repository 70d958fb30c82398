//! Canned sample content inserted on first load.
//!
//! Each record carries a stable id (`event_seed1`, `article_seed2`, ...) so
//! [`crate::ContentStore::seed_defaults`] can insert only what is missing.
//!
//! The placeholder events further down are never stored. The pages show them
//! when there is nothing real to list.

use avn_types::{
    Article, ArticleResource, Author, Event, EventStatus, MediaType, RegistrationStatus,
    ScheduleItem,
};
use chrono::{Days, NaiveDate};

/// Ids of the canned events, in insertion order.
pub const SEED_EVENT_IDS: [&str; 3] = ["event_seed1", "event_seed2", "event_seed3"];

/// Ids of the canned articles, in insertion order.
pub const SEED_ARTICLE_IDS: [&str; 3] = ["article_seed1", "article_seed2", "article_seed3"];

const CONFERENCE_DETAILS: &str = "Main conference on the impact of technology and digital media.

Program:
- Keynotes by researchers and professionals
- Discussion panels
- Q&A Sessions

This session will highlight responsible approaches and concrete use cases.";

fn s(value: &str) -> Option<String> {
    Some(value.to_owned())
}

fn slot(time: &str, activity: &str) -> ScheduleItem {
    ScheduleItem {
        time: time.to_owned(),
        activity: activity.to_owned(),
    }
}

/// The canned events, stamped with `created_at`.
pub fn default_events(created_at: &str) -> Vec<Event> {
    vec![
        Event {
            id: s("event_seed1"),
            title: s("Conference: Technology and Society"),
            date: s("2025-12-05"),
            time: s("10:00 - 16:00"),
            event_type: s("conference"),
            category: s("technology"),
            location: s("UEMF Grand Hall"),
            capacity: s("300 participants"),
            description: s(
                "A conference bringing together experts and students to discuss the impact of technology on society.",
            ),
            detailed_description: s(CONFERENCE_DETAILS),
            schedule: Some(vec![
                slot("10:00", "Welcome and Opening"),
                slot("10:30", "Keynote: AI for the Common Good"),
                slot("12:00", "Panel: Ethics and Technology"),
                slot("14:00", "Workshops"),
                slot("16:00", "Closing"),
            ]),
            objectives: Some(vec![
                String::from("Understand societal challenges of new technologies"),
                String::from("Meet domain experts"),
                String::from("Discover project opportunities"),
            ]),
            media_type: Some(MediaType::Youtube),
            media_url: s("https://www.youtube.com/embed/CzQVdsFA5eA"),
            created_at: s(created_at),
            registration_status: Some(RegistrationStatus::Open),
            ..Event::default()
        },
        Event {
            id: s("event_seed2"),
            title: s("Practical Workshop: Web Development"),
            date: s("2025-11-20"),
            time: s("09:00 - 13:00"),
            event_type: s("workshop"),
            category: s("development"),
            location: s("UEMF Lab 2"),
            capacity: s("40 participants"),
            description: s("Hands-on workshop to learn the basics of modern web development."),
            media_type: Some(MediaType::Image),
            media_url: s("assets/event-dev-workshop.jpg"),
            created_at: s(created_at),
            registration_status: Some(RegistrationStatus::Open),
            ..Event::default()
        },
        Event {
            id: s("event_seed3"),
            title: s("Networking & Projects Evening"),
            date: s("2025-11-28"),
            time: s("18:00 - 21:00"),
            event_type: s("networking"),
            category: s("community"),
            location: s("UEMF Lounge"),
            capacity: s("150 participants"),
            description: s("Meet project leaders, mentors and sponsors over refreshments."),
            media_type: Some(MediaType::Image),
            media_url: s("assets/event-networking.jpg"),
            created_at: s(created_at),
            registration_status: Some(RegistrationStatus::Open),
            ..Event::default()
        },
    ]
}

/// The canned articles, stamped with `created_at`.
///
/// Their image paths are stored as given; seeding does not go through the
/// article naming rules.
pub fn default_articles(created_at: &str) -> Vec<Article> {
    vec![
        Article {
            id: s("article_seed1"),
            title: s("Video: The Future of AI"),
            category: s("Tech"),
            tags: Some(vec![String::from("AI"), String::from("video")]),
            reading_time: Some(6),
            summary: s("A video presentation on key AI trends."),
            content: s(
                "Watch the video below to discover the latest advances in artificial intelligence and their potential impact.",
            ),
            featured_image: s("assets/article-ai-video.jpg"),
            media_type: Some(MediaType::Youtube),
            media_url: s("https://www.youtube.com/embed/8ngv3ZIvqDo"),
            resources: Some(vec![ArticleResource {
                kind: String::from("video"),
                title: String::from("Full Video"),
                url: String::from("https://youtu.be/8ngv3ZIvqDo"),
            }]),
            author: Some(Author {
                name: String::from("lumed Team"),
                role: String::from("Editorial"),
                avatar: String::from("assets/team1.jpg"),
            }),
            created_at: s(created_at),
            ..Article::default()
        },
        Article {
            id: s("article_seed2"),
            title: s("Hackathon Recap"),
            category: s("Events"),
            tags: Some(vec![String::from("Hackathon"), String::from("AI")]),
            reading_time: Some(5),
            summary: s("Summary and photos from the latest hackathon organized by the club."),
            content: s(
                "The hackathon brought together motivated teams and produced interesting prototypes.",
            ),
            featured_image: s("assets/article-hackathon.jpg"),
            media_type: Some(MediaType::Image),
            media_url: s("assets/article-hackathon.jpg"),
            author: Some(Author {
                name: String::from("Sarah Bennani"),
                role: String::from("Chef de projet"),
                avatar: String::from("assets/team3.jpg"),
            }),
            created_at: s(created_at),
            ..Article::default()
        },
        Article {
            id: s("article_seed3"),
            title: s("New Student Projects"),
            category: s("Projects"),
            tags: Some(vec![String::from("Projects"), String::from("Students")]),
            reading_time: Some(4),
            summary: s("Discover some recent projects led by our students."),
            content: s("Presentation of innovative projects completed this year."),
            featured_image: s("assets/article-projects.jpg"),
            media_type: Some(MediaType::Image),
            media_url: s("assets/article-projects.jpg"),
            author: Some(Author {
                name: String::from("Club lumed"),
                role: String::from("Community"),
                avatar: String::from("assets/team2.jpg"),
            }),
            created_at: s(created_at),
            ..Article::default()
        },
    ]
}

/// Placeholder cards for the home carousel, dated one and two weeks after
/// `today`.
pub fn placeholder_upcoming_events(today: NaiveDate) -> Vec<Event> {
    let in_days = |days: u64| {
        today
            .checked_add_days(Days::new(days))
            .unwrap_or(today)
            .format("%Y-%m-%d")
            .to_string()
    };
    vec![
        Event {
            id: s("1"),
            title: s("Tech Innovation Workshop"),
            date: Some(in_days(7)),
            image: s("assets/event1.jpg"),
            description: s("Hands-on workshop on the latest technology trends and innovations."),
            ..Event::default()
        },
        Event {
            id: s("2"),
            title: s("AI Applications Seminar"),
            date: Some(in_days(14)),
            image: s("assets/event2.jpg"),
            description: s(
                "Exploring the latest advancements in AI applications across various domains.",
            ),
            ..Event::default()
        },
    ]
}

/// Placeholder cards for the events page when no event is stored.
pub fn placeholder_listing_events() -> Vec<Event> {
    vec![
        Event {
            id: s("1"),
            title: s("Tech Innovation Summit 2024"),
            date: s("2024-03-15"),
            event_type: s("conference"),
            status: Some(EventStatus::Upcoming),
            image: s("assets/event1.jpg"),
            description: s(
                "Annual summit featuring keynote speakers, workshops, and project showcases from the intersection of technology and innovation.",
            ),
            location: s("UEMF Innovation Center"),
            ..Event::default()
        },
        Event {
            id: s("2"),
            title: s("AI Applications Workshop"),
            date: s("2024-02-10"),
            event_type: s("workshop"),
            status: Some(EventStatus::Upcoming),
            image: s("assets/event2.jpg"),
            description: s(
                "Hands-on workshop on implementing machine learning algorithms for various applications.",
            ),
            location: s("UEMF AI Lab"),
            ..Event::default()
        },
    ]
}
