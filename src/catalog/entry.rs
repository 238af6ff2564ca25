//! Interactive, prompt-by-prompt entry of new catalog records.

use super::range::{all_hours, all_months, range_months, range_string};
use super::{Bug, Catalog, CatalogError, Fish, SeaCreature, Umbrella};
use crate::models::Category;
use std::io::{BufRead, Write};

const HOURS_PROMPT: &str =
    "...hours (24 hour ints in range, e.g. 8-17 for 8am to 5pm, or 'all')? ";
const MONTHS_PROMPT: &str =
    "...during months (e.g., 'March-September', 'aug-oct', 'Sept-apr', or 'all' if all)? ";

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>, CatalogError> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn require(&mut self, question: &str, field: &str) -> Result<String, CatalogError> {
        self.ask(question)?
            .ok_or_else(|| CatalogError::BadInput(format!("input ended before {}", field)))
    }

    fn ask_price(&mut self) -> Result<u32, CatalogError> {
        let price = self.require("...price? ", "price")?;
        price
            .parse()
            .map_err(|_| CatalogError::BadInput(format!("price must be a whole number, got '{}'", price)))
    }

    fn ask_hours(&mut self) -> Result<Vec<u32>, CatalogError> {
        let hours = self.require(HOURS_PROMPT, "hours")?.to_lowercase();
        if hours == "all" {
            return Ok(all_hours());
        }
        Ok(range_string(&hours, 24)?)
    }

    fn ask_months(&mut self) -> Result<Vec<u32>, CatalogError> {
        let months = self.require(MONTHS_PROMPT, "months")?.to_lowercase();
        if months == "all" {
            return Ok(all_months());
        }
        Ok(range_months(&months)?)
    }

    fn ask_name(&mut self, noun: &str) -> Result<Option<String>, CatalogError> {
        match self.ask(&format!("{}'s name? ", noun))? {
            Some(name) if name.is_empty() => Err(CatalogError::BadInput("name cannot be empty".to_string())),
            other => Ok(other),
        }
    }

    pub fn read_bug(&mut self) -> Result<Option<Bug>, CatalogError> {
        let Some(name) = self.ask_name("Bug")? else {
            return Ok(None);
        };
        let price = self.ask_price()?;
        let months = self.ask_months()?;
        let hours = self.ask_hours()?;
        let location = self.require("...location? ", "location")?;
        Ok(Some(Bug {
            name,
            price,
            months,
            hours,
            location,
        }))
    }

    pub fn read_fish(&mut self) -> Result<Option<Fish>, CatalogError> {
        let Some(name) = self.ask_name("Fish")? else {
            return Ok(None);
        };
        let price = self.ask_price()?;
        let location = self.require("...location? ", "location")?;
        let hours = self.ask_hours()?;
        let months = self.ask_months()?;
        let shadow_size = self.require("...shadow size? ", "shadow size")?;
        Ok(Some(Fish {
            name,
            price,
            months,
            hours,
            location,
            shadow_size,
        }))
    }

    pub fn read_sea_creature(&mut self) -> Result<Option<SeaCreature>, CatalogError> {
        let Some(name) = self.ask_name("Sea creature")? else {
            return Ok(None);
        };
        let price = self.ask_price()?;
        let months = self.ask_months()?;
        let hours = self.ask_hours()?;
        Ok(Some(SeaCreature {
            name,
            price,
            months,
            hours,
        }))
    }

    pub fn read_umbrella(&mut self) -> Result<Option<Umbrella>, CatalogError> {
        Ok(self.ask_name("Umbrella")?.map(|name| Umbrella { name }))
    }
}

/// Reads records of `category` until end of input, appending each to
/// `catalog`. Returns how many were added.
pub fn add_entries<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    category: Category,
    prompter: &mut Prompter<R, W>,
) -> Result<usize, CatalogError> {
    let mut added = 0;
    loop {
        let more = match category {
            Category::Bugs => prompter.read_bug()?.map(|c| catalog.bugs.push(c)),
            Category::Fishes => prompter.read_fish()?.map(|c| catalog.fishes.push(c)),
            Category::SeaCreatures => prompter
                .read_sea_creature()?
                .map(|c| catalog.sea_creatures.push(c)),
            Category::Umbrellas => prompter.read_umbrella()?.map(|c| catalog.umbrellas.push(c)),
        };
        if more.is_none() {
            break;
        }
        added += 1;
    }
    tracing::info!(category = %category, added, "catalog entries added");
    Ok(added)
}
