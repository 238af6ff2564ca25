use crate::catalog::{Catalog, Critter};
use crate::checklist::{Checklist, Row};
use crate::models::Category;
use std::io::{self, Write};

/// Writes the visible rows of every table (or just `only`) as plain text.
pub fn render_checklist<W: Write>(
    out: &mut W,
    checklist: &Checklist,
    catalog: &Catalog,
    current_hour: u32,
    only: Option<Category>,
) -> io::Result<()> {
    let mut first = true;
    for table in checklist.tables() {
        if only.is_some_and(|c| c != table.category) {
            continue;
        }
        if !first {
            writeln!(out)?;
        }
        first = false;

        writeln!(out, "== {} ==", table.category.title())?;
        let mut shown = 0;
        for row in table.visible_rows() {
            writeln!(out, "{}", render_row(row, catalog, current_hour))?;
            shown += 1;
        }
        if shown == 0 {
            writeln!(out, "  (nothing to show)")?;
        }
    }
    Ok(())
}

fn render_row(row: &Row, catalog: &Catalog, current_hour: u32) -> String {
    let mark = if row.checked { "[x]" } else { "[ ]" };
    let details = match row.category {
        Category::Bugs => catalog.bug(&row.name).map(|b| {
            format!(
                "{:>6}  {:<28} {}",
                b.price,
                b.location,
                b.timing(current_hour).describe()
            )
        }),
        Category::Fishes => catalog.fish(&row.name).map(|f| {
            format!(
                "{:>6}  {:<28} {:<14} {}",
                f.price,
                f.location,
                f.shadow_size,
                f.timing(current_hour).describe()
            )
        }),
        Category::SeaCreatures => catalog
            .sea_creature(&row.name)
            .map(|s| format!("{:>6}  {}", s.price(), s.timing(current_hour).describe())),
        Category::Umbrellas => None,
    };

    match details {
        Some(details) => format!("{} {:<22} {}", mark, row.name, details),
        None => format!("{} {}", mark, row.name),
    }
}
