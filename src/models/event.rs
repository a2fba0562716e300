use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Event record, as stored under the `events` key and shipped as seed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate, // ⇔ "YYYY-MM-DD"
    pub time: String,    // free text, e.g. "09:00 AM – 11:00 AM"
    pub description: String,
    pub location: String,
    pub capacity: i64,
    pub tags: Vec<String>,
    pub image: String,
    pub spots_left: i64,
    pub is_past: bool,
}

impl Event {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_sold_out(&self) -> bool {
        self.spots_left <= 0
    }

    /// Evaluated once when the record is written and stored as `isPast`;
    /// the stored flag is not refreshed afterwards.
    pub fn compute_is_past(date: NaiveDate, now: NaiveDateTime) -> bool {
        date.and_time(chrono::NaiveTime::MIN) < now
    }

    pub fn tags_joined(&self) -> String {
        self.tags.join(", ")
    }
}

/// Admin form input for creating or editing an event.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub location: String,
    pub capacity: i64,
    /// Comma-separated, as typed in the form.
    pub tags: String,
    pub image: Option<String>,
}

impl EventDraft {
    /// Pre-fill a draft from an existing event (edit form).
    pub fn from_event(ev: &Event) -> Self {
        Self {
            title: ev.title.clone(),
            date: ev.date_str(),
            time: ev.time.clone(),
            description: ev.description.clone(),
            location: ev.location.clone(),
            capacity: ev.capacity,
            tags: ev.tags.join(","),
            image: Some(ev.image.clone()),
        }
    }

    /// Required-field and min-value checks; returns the parsed date.
    pub fn validate(&self) -> AppResult<NaiveDate> {
        let required = [
            ("title", &self.title),
            ("date", &self.date),
            ("time", &self.time),
            ("description", &self.description),
            ("location", &self.location),
            ("tags", &self.tags),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::MissingField(name));
            }
        }

        if self.capacity < 1 {
            return Err(AppError::InvalidCapacity(self.capacity));
        }

        parse_date(&self.date).ok_or_else(|| AppError::InvalidDate(self.date.clone()))
    }

    pub fn parsed_tags(&self) -> Vec<String> {
        self.tags.split(',').map(|t| t.trim().to_string()).collect()
    }
}
