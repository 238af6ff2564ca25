use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed donation groups of the museum checklist.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Category {
    Bugs,
    Fishes,
    SeaCreatures,
    Umbrellas,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Bugs,
        Category::Fishes,
        Category::SeaCreatures,
        Category::Umbrellas,
    ];

    /// Storage key holding this category's donation set.
    pub fn key(self) -> &'static str {
        match self {
            Category::Bugs => "bugs",
            Category::Fishes => "fishes",
            Category::SeaCreatures => "sea_creatures",
            Category::Umbrellas => "umbrellas",
        }
    }

    pub fn row_class(self) -> &'static str {
        match self {
            Category::Bugs => "bug_row",
            Category::Fishes => "fish_row",
            Category::SeaCreatures => "sea_creature_row",
            Category::Umbrellas => "umbrella_row",
        }
    }

    pub fn table_id(self) -> String {
        format!("{}_table", self.key())
    }

    pub fn toggle_id(self) -> String {
        format!("show_donated_{}", self.key())
    }

    pub fn from_toggle_id(id: &str) -> Option<Self> {
        let key = id.strip_prefix("show_donated_")?;
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Bugs => "Bugs",
            Category::Fishes => "Fish",
            Category::SeaCreatures => "Sea Creatures",
            Category::Umbrellas => "Umbrellas",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|c| c.key() == normalized)
            .ok_or_else(|| CategoryError::Unknown(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Unknown category: {0} (expected one of bugs, fishes, sea_creatures, umbrellas)")]
    Unknown(String),
}

/// Insertion-ordered set of donated item names for one category.
///
/// Membership and removal go through the index; the ordered list only matters
/// when the set is written back to storage as a comma-joined string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationSet {
    order: Vec<String>,
    index: HashSet<String>,
}

impl DonationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the stored representation. An empty string is the empty set.
    pub fn deserialize(raw: &str) -> Self {
        let mut set = Self::new();
        if raw.is_empty() {
            return set;
        }
        for name in raw.split(',') {
            set.insert(name);
        }
        set
    }

    pub fn serialize(&self) -> String {
        self.order.join(",")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Appends `name` unless it is already a member. Returns whether it was added.
    pub fn insert(&mut self, name: &str) -> bool {
        if !self.index.insert(name.to_string()) {
            return false;
        }
        self.order.push(name.to_string());
        true
    }

    /// Removes every occurrence of `name`. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        if !self.index.remove(name) {
            return false;
        }
        self.order.retain(|n| n != name);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("bugs".parse::<Category>().unwrap(), Category::Bugs);
        assert_eq!("Sea-Creatures".parse::<Category>().unwrap(), Category::SeaCreatures);
        assert_eq!("sea_creatures".parse::<Category>().unwrap(), Category::SeaCreatures);
        assert!("insects".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_addressing() {
        assert_eq!(Category::Fishes.table_id(), "fishes_table");
        assert_eq!(Category::Umbrellas.toggle_id(), "show_donated_umbrellas");
        assert_eq!(Category::SeaCreatures.row_class(), "sea_creature_row");
        assert_eq!(
            Category::from_toggle_id("show_donated_sea_creatures"),
            Some(Category::SeaCreatures)
        );
        assert_eq!(Category::from_toggle_id("show_donated_birds"), None);
    }

    #[test]
    fn test_donation_set_round_trip() {
        for raw in ["", "A", "Common Butterfly,Mole Cricket", "x,y,z"] {
            assert_eq!(DonationSet::deserialize(raw).serialize(), raw);
        }
    }

    #[test]
    fn test_donation_set_insert_is_deduplicated() {
        let mut set = DonationSet::deserialize("A,B");
        assert!(!set.insert("A"));
        assert!(set.insert("C"));
        assert_eq!(set.serialize(), "A,B,C");
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_donation_set_remove() {
        let mut set = DonationSet::deserialize("A,B,A");
        assert_eq!(set.serialize(), "A,B");
        assert!(set.remove("A"));
        assert!(!set.contains("A"));
        assert!(!set.remove("A"));
        assert_eq!(set.serialize(), "B");
        assert!(set.remove("B"));
        assert!(set.is_empty());
        assert_eq!(set.serialize(), "");
    }
}
