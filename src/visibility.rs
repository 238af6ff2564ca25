use crate::checklist::Checklist;
use crate::models::Category;

/// Shows or hides the donated rows of one category's table. Rows that are not
/// donated, and every other table, are left alone.
pub fn set_category_donated_visibility(checklist: &mut Checklist, category: Category, visible: bool) {
    for row in checklist
        .table_mut(category)
        .rows
        .iter_mut()
        .filter(|r| r.donated)
    {
        row.hidden = !visible;
    }
}

/// Same as [`set_category_donated_visibility`], addressed by the toggle's id
/// (`show_donated_<category>`). Unknown ids are ignored.
pub fn toggle_by_id(checklist: &mut Checklist, toggle_id: &str, visible: bool) {
    match Category::from_toggle_id(toggle_id) {
        Some(category) => set_category_donated_visibility(checklist, category, visible),
        None => tracing::debug!(toggle_id, "ignoring unknown visibility toggle"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::Row;

    fn sample() -> Checklist {
        let mut checklist = Checklist::new();
        for category in [Category::Bugs, Category::Fishes] {
            let table = checklist.table_mut(category);
            let mut donated = Row::new(category, "donated");
            donated.mark_donated();
            let mut pending = Row::new(category, "pending");
            pending.reveal();
            table.rows.push(donated);
            table.rows.push(pending);
        }
        checklist
    }

    fn hidden(checklist: &Checklist, category: Category, name: &str) -> bool {
        checklist.table(category).row(name).unwrap().hidden
    }

    #[test]
    fn test_show_and_hide_donated() {
        let mut checklist = sample();

        set_category_donated_visibility(&mut checklist, Category::Bugs, true);
        assert!(!hidden(&checklist, Category::Bugs, "donated"));
        assert!(hidden(&checklist, Category::Fishes, "donated"));

        set_category_donated_visibility(&mut checklist, Category::Bugs, false);
        assert!(hidden(&checklist, Category::Bugs, "donated"));
        assert!(!hidden(&checklist, Category::Bugs, "pending"));
        assert!(!hidden(&checklist, Category::Fishes, "pending"));
    }

    #[test]
    fn test_hiding_bugs_leaves_shown_fish_alone() {
        let mut checklist = sample();
        set_category_donated_visibility(&mut checklist, Category::Fishes, true);
        set_category_donated_visibility(&mut checklist, Category::Bugs, true);

        set_category_donated_visibility(&mut checklist, Category::Bugs, false);

        assert!(hidden(&checklist, Category::Bugs, "donated"));
        assert!(!hidden(&checklist, Category::Fishes, "donated"));
        assert!(!hidden(&checklist, Category::Fishes, "pending"));
    }

    #[test]
    fn test_visibility_is_idempotent() {
        let mut checklist = sample();
        set_category_donated_visibility(&mut checklist, Category::Fishes, true);
        let once: Vec<Row> = checklist.table(Category::Fishes).rows.clone();
        set_category_donated_visibility(&mut checklist, Category::Fishes, true);
        assert_eq!(checklist.table(Category::Fishes).rows, once);
    }

    #[test]
    fn test_toggle_by_id() {
        let mut checklist = sample();
        toggle_by_id(&mut checklist, "show_donated_fishes", true);
        assert!(!hidden(&checklist, Category::Fishes, "donated"));
        assert!(hidden(&checklist, Category::Bugs, "donated"));

        toggle_by_id(&mut checklist, "show_donated_birds", true);
        assert!(hidden(&checklist, Category::Bugs, "donated"));
    }
}
