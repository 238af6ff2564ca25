use crate::catalog::entry::{add_entries, Prompter};
use crate::catalog::Catalog;
use crate::checklist::Checklist;
use crate::cli::{CatalogCommand, Cli, Command, ConfigCommand};
use crate::config::ConfigManager;
use crate::donation_tracker::DonationTracker;
use crate::models::Category;
use crate::render::render_checklist;
use crate::storage::config::StorageConfig;
use crate::visibility::set_category_donated_visibility;
use anyhow::{bail, Context, Result};
use chrono::{Datelike, Timelike, Utc};
use std::io::{BufRead, Write};

pub fn run<R: BufRead, W: Write>(cli: Cli, input: R, out: &mut W) -> Result<()> {
    let mut manager = ConfigManager::new(cli.config.as_deref()).context("unable to load config")?;

    match cli.command {
        Command::List {
            category,
            all_months,
            show_donated,
            month,
            hour,
        } => {
            let now = Utc::now().with_timezone(&manager.timezone());
            let month0 = month.map(|m| m - 1).unwrap_or_else(|| now.month0());
            let hour = hour.unwrap_or_else(|| now.hour());

            let catalog = Catalog::load_or_builtin(manager.catalog_path().as_deref())?;
            let catalog = if all_months {
                catalog
            } else {
                catalog.available_in(month0)
            };

            let storage = StorageConfig::from_config_manager(&manager).open();
            let mut checklist = Checklist::from_catalog(&catalog);
            DonationTracker::initialize(&*storage, &mut checklist);
            for c in show_donated {
                set_category_donated_visibility(&mut checklist, c, true);
            }

            render_checklist(out, &checklist, &catalog, hour, category)?;
        }
        Command::Donate { category, name } => toggle(&manager, category, &name, true, out)?,
        Command::Undonate { category, name } => toggle(&manager, category, &name, false, out)?,
        Command::Catalog {
            command: CatalogCommand::Add { category },
        } => {
            let Some(path) = manager.catalog_path() else {
                bail!("catalog.path is not configured; set it with `critterpedia config set catalog.path <file>`");
            };
            let mut catalog = if path.exists() {
                Catalog::load(&path)?
            } else {
                Catalog::default()
            };

            let added = {
                let mut prompter = Prompter::new(input, &mut *out);
                add_entries(&mut catalog, category, &mut prompter)?
            };
            catalog
                .save(&path)
                .with_context(|| format!("unable to write {}", path.display()))?;
            writeln!(out)?;
            writeln!(out, "Added {} {} to {}", added, category, path.display())?;
        }
        Command::Config { command } => match command {
            ConfigCommand::Get { key } => match manager.get(&key) {
                Some(value) => writeln!(out, "{}", value)?,
                None => writeln!(out, "{} is not set", key)?,
            },
            ConfigCommand::Set { key, value } => {
                manager.set(&key, &value)?;
                writeln!(out, "{} = {}", key, value)?;
            }
            ConfigCommand::Unset { key } => {
                manager.unset(&key)?;
                writeln!(out, "{} unset", key)?;
            }
            ConfigCommand::List => {
                for (key, value, is_default) in manager.list() {
                    let suffix = if is_default { " (default)" } else { "" };
                    writeln!(out, "{} = {}{}", key, value, suffix)?;
                }
            }
        },
    }

    Ok(())
}

fn toggle<W: Write>(
    manager: &ConfigManager,
    category: Category,
    name: &str,
    checked: bool,
    out: &mut W,
) -> Result<()> {
    let catalog = Catalog::load_or_builtin(manager.catalog_path().as_deref())?;
    let storage = StorageConfig::from_config_manager(manager).open();
    let mut checklist = Checklist::from_catalog(&catalog);
    let mut tracker = DonationTracker::initialize(&*storage, &mut checklist);

    if checklist.table(category).row(name).is_none() {
        tracing::warn!(category = %category, name, "not in the catalog, recording anyway");
    }
    tracker.toggle_by_name(&mut checklist, category, name, checked);

    let note = if tracker.last_toggle_saved() { "" } else { " (not saved)" };
    if checked {
        writeln!(out, "Donated {} ({}){}", name, category, note)?;
    } else {
        writeln!(out, "Removed {} from donated {}{}", name, category, note)?;
    }
    Ok(())
}
