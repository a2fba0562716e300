use crate::models::event::Event;
use std::collections::{HashMap, HashSet};

/// Merge the seed list with local mutations.
///
/// - ids in `deleted` are dropped
/// - a local record replaces the seed record with the same id, in place
/// - local-only records are appended
/// - the result is stably sorted by date, so same-day events keep the
///   order above
///
/// Duplicate ids inside `local` collapse to the last occurrence.
pub fn merge_events(seed: &[Event], local: &[Event], deleted: &HashSet<i64>) -> Vec<Event> {
    let mut merged: Vec<Event> = Vec::with_capacity(seed.len() + local.len());
    let mut index: HashMap<i64, usize> = HashMap::new();

    for ev in seed.iter().chain(local.iter()) {
        if deleted.contains(&ev.id) {
            continue;
        }

        match index.get(&ev.id) {
            Some(&pos) => merged[pos] = ev.clone(),
            None => {
                index.insert(ev.id, merged.len());
                merged.push(ev.clone());
            }
        }
    }

    merged.sort_by_key(|ev| ev.date);
    merged
}
