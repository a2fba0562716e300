//! Code-shipped baseline events. Never mutated: admin edits and deletions
//! are layered on top through the local store.

use super::event::Event;
use chrono::NaiveDate;

struct SeedRow {
    id: i64,
    title: &'static str,
    date: NaiveDate,
    time: &'static str,
    description: &'static str,
    location: &'static str,
    capacity: i64,
    tags: &'static [&'static str],
    image: &'static str,
    spots_left: i64,
    is_past: bool,
}

const fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

const SEED: &[SeedRow] = &[
    SeedRow {
        id: 1,
        title: "New Year Tech Kickoff",
        date: ymd(2025, 1, 1),
        time: "10:00 AM – 01:00 PM",
        description: "Start the year with lightning talks on what is coming next in web platforms, tooling and AI.",
        location: "Dhaka Innovation Hub",
        capacity: 120,
        tags: &["Tech", "Talks"],
        image: "/events/kickoff.png",
        spots_left: 0,
        is_past: true,
    },
    SeedRow {
        id: 2,
        title: "Spring Music Festival",
        date: ymd(2025, 4, 12),
        time: "04:00 PM – 11:00 PM",
        description: "An open-air evening with local bands, food stalls and a late acoustic set.",
        location: "Rabindra Sarobar",
        capacity: 500,
        tags: &["Music", "Outdoor"],
        image: "/events/music.png",
        spots_left: 0,
        is_past: true,
    },
    SeedRow {
        id: 3,
        title: "Startup Pitch Night",
        date: ymd(2025, 9, 20),
        time: "06:30 PM – 09:30 PM",
        description: "Ten early-stage teams pitch to a panel of investors. Networking afterwards.",
        location: "Gulshan Business Center",
        capacity: 80,
        tags: &["Business", "Networking"],
        image: "/events/pitch.png",
        spots_left: 12,
        is_past: true,
    },
    SeedRow {
        id: 4,
        title: "Photography Walk",
        date: ymd(2026, 11, 8),
        time: "07:00 AM – 10:00 AM",
        description: "A guided morning walk through Old Dhaka focused on street and architecture photography.",
        location: "Old Dhaka",
        capacity: 25,
        tags: &["Photography", "Outdoor"],
        image: "/events/photo.png",
        spots_left: 9,
        is_past: false,
    },
    SeedRow {
        id: 5,
        title: "Rust Systems Workshop",
        date: ymd(2026, 12, 5),
        time: "09:00 AM – 05:00 PM",
        description: "A hands-on day of ownership, traits and async Rust. Bring a laptop with a recent toolchain.",
        location: "BUET Auditorium",
        capacity: 60,
        tags: &["Tech", "Workshop"],
        image: "/events/rust.png",
        spots_left: 42,
        is_past: false,
    },
    SeedRow {
        id: 6,
        title: "Winter Food Carnival",
        date: ymd(2027, 1, 16),
        time: "12:00 PM – 10:00 PM",
        description: "Street food from every division, pitha stalls and a cooking contest for home chefs.",
        location: "Hatirjheel Amphitheatre",
        capacity: 300,
        tags: &["Food", "Family"],
        image: "/events/food.png",
        spots_left: 180,
        is_past: false,
    },
    SeedRow {
        id: 7,
        title: "Design Systems Meetup",
        date: ymd(2027, 2, 3),
        time: "05:00 PM – 08:00 PM",
        description: "Practitioners share how they build, document and version component libraries.",
        location: "Banani Co-Work",
        capacity: 40,
        tags: &["Design", "Meetup"],
        image: "/events/design.png",
        spots_left: 0,
        is_past: false,
    },
    SeedRow {
        id: 8,
        title: "Charity Fun Run",
        date: ymd(2027, 3, 21),
        time: "06:00 AM – 09:00 AM",
        description: "A 5 km run around the lake. Proceeds go to the children's hospital fund.",
        location: "Dhanmondi Lake",
        capacity: 400,
        tags: &["Sports", "Charity"],
        image: "/events/run.png",
        spots_left: 260,
        is_past: false,
    },
];

/// The static baseline list, in shipping order.
pub fn seed_events() -> Vec<Event> {
    SEED.iter()
        .map(|row| Event {
            id: row.id,
            title: row.title.to_string(),
            date: row.date,
            time: row.time.to_string(),
            description: row.description.to_string(),
            location: row.location.to_string(),
            capacity: row.capacity,
            tags: row.tags.iter().map(|t| t.to_string()).collect(),
            image: row.image.to_string(),
            spots_left: row.spots_left,
            is_past: row.is_past,
        })
        .collect()
}
