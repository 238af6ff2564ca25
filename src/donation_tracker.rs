use crate::checklist::{Checklist, Row};
use crate::models::{Category, DonationSet};
use crate::storage::Storage;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Keeps the checklist's checkboxes in step with the stored donation sets.
///
/// Storage problems never reach the caller: a set that cannot be read is
/// treated as empty and a failed write is logged, leaving the in-memory copy
/// as the source of truth until the next successful write.
pub struct DonationTracker<'a> {
    storage: &'a dyn Storage,
    sets: HashMap<Category, DonationSet>,
    last_saved: bool,
}

impl<'a> DonationTracker<'a> {
    /// Loads every category's set and applies it to `checklist`.
    pub fn initialize(storage: &'a dyn Storage, checklist: &mut Checklist) -> Self {
        let mut sets = HashMap::new();
        for category in Category::ALL {
            let set = load_set(storage, category).unwrap_or_default();
            for row in checklist.table_mut(category).rows.iter_mut() {
                if set.contains(&row.name) {
                    row.mark_donated();
                } else {
                    row.mark_not_donated();
                    row.reveal();
                }
            }
            debug!(category = %category, donated = set.len(), "loaded donations");
            sets.insert(category, set);
        }
        Self {
            storage,
            sets,
            last_saved: true,
        }
    }

    /// Handles a click on a row's checkbox; `checked` is the new checkbox state.
    pub fn on_checkbox_toggle(&mut self, row: &mut Row, checked: bool) {
        let category = row.category;
        debug!(category = %category, name = %row.name, checked, "checkbox toggled");

        // Re-read so edits made elsewhere since initialize are not clobbered
        let mut set = load_set(self.storage, category)
            .unwrap_or_else(|| self.sets.get(&category).cloned().unwrap_or_default());

        if checked {
            set.insert(&row.name);
            row.mark_donated();
        } else {
            set.remove(&row.name);
            row.mark_not_donated();
            row.reveal();
        }

        self.last_saved = match self.storage.set_item(category.key(), &set.serialize()) {
            Ok(()) => self.storage.is_persistent(),
            Err(e) => {
                warn!(category = %category, error = %e, "failed to save donations");
                false
            }
        };
        self.sets.insert(category, set);
    }

    /// Toggles the row named `name` in `checklist`, or a detached row when the
    /// checklist doesn't show that item (e.g. it is out of season).
    pub fn toggle_by_name(
        &mut self,
        checklist: &mut Checklist,
        category: Category,
        name: &str,
        checked: bool,
    ) {
        match checklist.row_mut(category, name) {
            Some(row) => self.on_checkbox_toggle(row, checked),
            None => {
                let mut row = Row::new(category, name);
                self.on_checkbox_toggle(&mut row, checked);
            }
        }
    }

    pub fn is_donated(&self, category: Category, name: &str) -> bool {
        self.sets
            .get(&category)
            .map(|set| set.contains(name))
            .unwrap_or(false)
    }

    pub fn donated(&self, category: Category) -> Option<&DonationSet> {
        self.sets.get(&category)
    }

    /// Whether the most recent toggle reached durable storage.
    pub fn last_toggle_saved(&self) -> bool {
        self.last_saved
    }
}

/// `None` only when the backend failed; a missing key is an empty set.
fn load_set(storage: &dyn Storage, category: Category) -> Option<DonationSet> {
    match storage.get_item(category.key()) {
        Ok(raw) => Some(DonationSet::deserialize(raw.as_deref().unwrap_or(""))),
        Err(e) => {
            warn!(category = %category, error = %e, "failed to read donations");
            None
        }
    }
}
