use crate::core::merge::merge_events;
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, EventDraft};
use crate::store::{DELETED_IDS_KEY, EVENTS_KEY, KeyValueStore, read_json, write_json};
use chrono::NaiveDateTime;
use std::collections::HashSet;

/// Outcome of a delete, so callers can tell a tombstone from a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// Seed event hidden through the deletion marker set.
    SeedMarked,
    /// Locally created event removed from the local list.
    LocalRemoved,
}

/// Seed list plus the local-scope mutations layered over it.
pub struct EventStore<S: KeyValueStore> {
    store: S,
    seed: Vec<Event>,
    default_image: String,
}

impl<S: KeyValueStore> EventStore<S> {
    pub fn new(store: S, seed: Vec<Event>) -> Self {
        Self {
            store,
            seed,
            default_image: "/placeholder.png".to_string(),
        }
    }

    /// Image reference used when a draft carries none.
    pub fn with_default_image(mut self, image: impl Into<String>) -> Self {
        self.default_image = image.into();
        self
    }

    pub fn seed(&self) -> &[Event] {
        &self.seed
    }

    pub fn is_seed(&self, id: i64) -> bool {
        self.seed.iter().any(|e| e.id == id)
    }

    pub fn local_events(&self) -> AppResult<Vec<Event>> {
        Ok(read_json(&self.store, EVENTS_KEY)?.unwrap_or_default())
    }

    pub fn deleted_ids(&self) -> AppResult<HashSet<i64>> {
        let ids: Vec<i64> = read_json(&self.store, DELETED_IDS_KEY)?.unwrap_or_default();
        Ok(ids.into_iter().collect())
    }

    /// Merged, deduplicated and date-sorted view.
    pub fn all_events(&self) -> AppResult<Vec<Event>> {
        let local = self.local_events()?;
        let deleted = self.deleted_ids()?;
        Ok(merge_events(&self.seed, &local, &deleted))
    }

    pub fn find(&self, id: i64) -> AppResult<Event> {
        self.all_events()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(AppError::EventNotFound(id))
    }

    pub fn create(&mut self, draft: &EventDraft, now: NaiveDateTime) -> AppResult<Event> {
        let date = draft.validate()?;
        let mut local = self.local_events()?;

        let event = Event {
            id: self.next_id(&local, now)?,
            title: draft.title.trim().to_string(),
            date,
            time: draft.time.trim().to_string(),
            description: draft.description.trim().to_string(),
            location: draft.location.trim().to_string(),
            capacity: draft.capacity,
            tags: draft.parsed_tags(),
            image: draft
                .image
                .clone()
                .unwrap_or_else(|| self.default_image.clone()),
            spots_left: draft.capacity,
            is_past: Event::compute_is_past(date, now),
        };

        local.push(event.clone());
        self.save_local(&local)?;
        Ok(event)
    }

    /// Replace the visible event `id` with the draft's fields. Editing a
    /// seed event stores a local copy that shadows it.
    pub fn update(&mut self, id: i64, draft: &EventDraft, now: NaiveDateTime) -> AppResult<Event> {
        let current = self.find(id)?;
        let date = draft.validate()?;

        let updated = Event {
            id: current.id,
            title: draft.title.trim().to_string(),
            date,
            time: draft.time.trim().to_string(),
            description: draft.description.trim().to_string(),
            location: draft.location.trim().to_string(),
            capacity: draft.capacity,
            tags: draft.parsed_tags(),
            image: draft.image.clone().unwrap_or(current.image),
            spots_left: draft.capacity,
            is_past: Event::compute_is_past(date, now),
        };

        let mut local = self.local_events()?;
        match local.iter_mut().find(|e| e.id == id) {
            Some(slot) => *slot = updated.clone(),
            None => local.push(updated.clone()),
        }
        self.save_local(&local)?;

        Ok(updated)
    }

    pub fn delete(&mut self, id: i64) -> AppResult<Deletion> {
        let mut local = self.local_events()?;
        let in_local = local.iter().any(|e| e.id == id);

        if self.is_seed(id) {
            let mut deleted = self.deleted_ids()?;
            if deleted.contains(&id) && !in_local {
                return Err(AppError::EventNotFound(id));
            }
            deleted.insert(id);
            let mut ids: Vec<i64> = deleted.into_iter().collect();
            ids.sort_unstable();
            write_json(&mut self.store, DELETED_IDS_KEY, &ids)?;

            if in_local {
                local.retain(|e| e.id != id);
                self.save_local(&local)?;
            }
            return Ok(Deletion::SeedMarked);
        }

        if !in_local {
            return Err(AppError::EventNotFound(id));
        }

        local.retain(|e| e.id != id);
        self.save_local(&local)?;
        Ok(Deletion::LocalRemoved)
    }

    fn save_local(&mut self, local: &[Event]) -> AppResult<()> {
        write_json(&mut self.store, EVENTS_KEY, local)
    }

    /// Millisecond timestamp, bumped until it collides with no seed, local
    /// or tombstoned id.
    fn next_id(&self, local: &[Event], now: NaiveDateTime) -> AppResult<i64> {
        let deleted = self.deleted_ids()?;
        let taken: HashSet<i64> = self
            .seed
            .iter()
            .chain(local.iter())
            .map(|e| e.id)
            .chain(deleted)
            .collect();

        let mut id = now.and_utc().timestamp_millis();
        while taken.contains(&id) {
            id += 1;
        }
        Ok(id)
    }
}
