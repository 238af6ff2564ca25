//! The critter catalog: every collectible per category, with the months and
//! hours each one can be found.

use crate::models::Category;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub mod entry;
pub mod range;
pub mod timing;

pub use range::RangeError;
pub use timing::Timing;

/// Catalog shipped with the crate, used when `catalog.path` is not configured.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to decode catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("that's some bad input: {0}")]
    BadInput(String),
}

/// Anything with a name, a season and a daily window.
pub trait Critter {
    fn name(&self) -> &str;
    fn price(&self) -> u32;
    fn months(&self) -> &[u32];
    fn hours(&self) -> &[u32];

    fn available_in(&self, month: u32) -> bool {
        self.months().contains(&month)
    }

    fn timing(&self, current_hour: u32) -> Timing {
        Timing::compute(self.hours(), current_hour)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Bug {
    pub name: String,
    pub price: u32,
    #[serde(default)]
    pub months: Vec<u32>,
    #[serde(default)]
    pub hours: Vec<u32>,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Fish {
    pub name: String,
    pub price: u32,
    #[serde(default)]
    pub months: Vec<u32>,
    #[serde(default)]
    pub hours: Vec<u32>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub shadow_size: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SeaCreature {
    pub name: String,
    pub price: u32,
    #[serde(default)]
    pub months: Vec<u32>,
    #[serde(default)]
    pub hours: Vec<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Umbrella {
    pub name: String,
}

macro_rules! impl_critter {
    ($($ty:ty),*) => {
        $(impl Critter for $ty {
            fn name(&self) -> &str {
                &self.name
            }
            fn price(&self) -> u32 {
                self.price
            }
            fn months(&self) -> &[u32] {
                &self.months
            }
            fn hours(&self) -> &[u32] {
                &self.hours
            }
        })*
    };
}

impl_critter!(Bug, Fish, SeaCreature);

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub bugs: Vec<Bug>,
    #[serde(default)]
    pub fishes: Vec<Fish>,
    #[serde(default)]
    pub sea_creatures: Vec<SeaCreature>,
    #[serde(default)]
    pub umbrellas: Vec<Umbrella>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(BUILTIN_CATALOG)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            bugs = catalog.bugs.len(),
            fishes = catalog.fishes.len(),
            sea_creatures = catalog.sea_creatures.len(),
            umbrellas = catalog.umbrellas.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// `path` if given, otherwise the built-in catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Critters catchable in `month` (0 = January). Umbrellas have no season
    /// and are always kept.
    pub fn available_in(&self, month: u32) -> Self {
        Self {
            bugs: filter_month(&self.bugs, month),
            fishes: filter_month(&self.fishes, month),
            sea_creatures: filter_month(&self.sea_creatures, month),
            umbrellas: self.umbrellas.clone(),
        }
    }

    pub fn names(&self, category: Category) -> Vec<&str> {
        match category {
            Category::Bugs => self.bugs.iter().map(|c| c.name.as_str()).collect(),
            Category::Fishes => self.fishes.iter().map(|c| c.name.as_str()).collect(),
            Category::SeaCreatures => self.sea_creatures.iter().map(|c| c.name.as_str()).collect(),
            Category::Umbrellas => self.umbrellas.iter().map(|c| c.name.as_str()).collect(),
        }
    }

    pub fn bug(&self, name: &str) -> Option<&Bug> {
        self.bugs.iter().find(|c| c.name == name)
    }

    pub fn fish(&self, name: &str) -> Option<&Fish> {
        self.fishes.iter().find(|c| c.name == name)
    }

    pub fn sea_creature(&self, name: &str) -> Option<&SeaCreature> {
        self.sea_creatures.iter().find(|c| c.name == name)
    }
}

fn filter_month<T: Critter + Clone>(critters: &[T], month: u32) -> Vec<T> {
    critters
        .iter()
        .filter(|c| c.available_in(month))
        .cloned()
        .collect()
}
