//! In-memory model of the museum checklist: one table per category, one row
//! per collectible, each row carrying a "donated" checkbox.

use crate::catalog::Catalog;
use crate::models::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub category: Category,
    pub name: String,
    /// Checkbox state.
    pub checked: bool,
    /// "donated" styling.
    pub donated: bool,
    pub hidden: bool,
}

impl Row {
    /// A freshly rendered row: hidden until the tracker has decided what to show.
    pub fn new(category: Category, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            checked: false,
            donated: false,
            hidden: true,
        }
    }

    pub fn mark_donated(&mut self) {
        self.donated = true;
        self.checked = true;
    }

    pub fn mark_not_donated(&mut self) {
        self.donated = false;
        self.checked = false;
    }

    pub fn reveal(&mut self) {
        self.hidden = false;
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    pub category: Category,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            rows: Vec::new(),
        }
    }

    pub fn id(&self) -> String {
        self.category.table_id()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.rows.push(Row::new(self.category, name));
    }

    pub fn row(&self, name: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.name == name)
    }

    pub fn row_mut(&mut self, name: &str) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.name == name)
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|r| r.is_visible())
    }
}

#[derive(Debug, Clone)]
pub struct Checklist {
    tables: Vec<Table>,
}

impl Checklist {
    /// Empty tables for every category.
    pub fn new() -> Self {
        Self {
            tables: Category::ALL.into_iter().map(Table::new).collect(),
        }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut checklist = Self::new();
        for category in Category::ALL {
            let table = checklist.table_mut(category);
            for name in catalog.names(category) {
                table.push(name);
            }
        }
        checklist
    }

    pub fn table(&self, category: Category) -> &Table {
        // Every category gets a table in `new`
        &self.tables[Self::position(category)]
    }

    pub fn table_mut(&mut self, category: Category) -> &mut Table {
        &mut self.tables[Self::position(category)]
    }

    pub fn table_by_id(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id() == id)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    pub fn row_mut(&mut self, category: Category, name: &str) -> Option<&mut Row> {
        self.table_mut(category).row_mut(name)
    }

    fn position(category: Category) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or_default()
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rows_start_hidden_and_unchecked() {
        let row = Row::new(Category::Bugs, "Mole Cricket");
        assert!(row.hidden);
        assert!(!row.checked);
        assert!(!row.donated);
    }

    #[test]
    fn test_tables_are_addressable() {
        let mut checklist = Checklist::new();
        checklist.table_mut(Category::Fishes).push("Sea Bass");

        let table = checklist.table_by_id("fishes_table").unwrap();
        assert_eq!(table.category, Category::Fishes);
        assert_eq!(table.rows.len(), 1);
        assert!(checklist.table_by_id("birds_table").is_none());
        assert!(checklist.row_mut(Category::Fishes, "Sea Bass").is_some());
        assert!(checklist.row_mut(Category::Bugs, "Sea Bass").is_none());
    }
}
