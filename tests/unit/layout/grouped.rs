//! Tests for grouped grid planning and per-group hiding

#[cfg(test)]
mod tests {
    use plantgrid::dataset::taxon::plant_key;
    use plantgrid::layout::grid::CellContent;
    use plantgrid::layout::grouped::{GroupOverflow, plan_grouped, plan_grouped_with};

    const CATEGORIES: [&str; 8] = [
        "Apple___Apple_scab",
        "Apple___Black_rot",
        "Apple___healthy",
        "Corn_(maize)___Common_rust_",
        "Corn_(maize)___healthy",
        "Tomato___Bacterial_spot",
        "Grape___healthy",
        "Apple___Cedar_apple_rust",
    ];

    fn key(category: &&str) -> String {
        plant_key(category)
    }

    // Tests groups are key-ordered, one row each, with per-group hiding
    // Verified by hiding only after the last group
    #[test]
    fn test_groups_one_row_each() -> plantgrid::Result<()> {
        let grouped = plan_grouped(&CATEGORIES, key, 6)?;

        let keys: Vec<&str> = grouped.groups().iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["Apple", "Corn", "Grape", "Tomato"]);
        assert_eq!(grouped.columns(), 4);
        assert_eq!(grouped.rows(), 4);

        let corn = grouped.groups().get(1);
        let corn_cells: Vec<CellContent> = corn
            .map(|g| g.cells.iter().map(|c| c.content).collect())
            .unwrap_or_default();
        assert_eq!(
            corn_cells,
            [
                CellContent::Occupied(3),
                CellContent::Occupied(4),
                CellContent::Hidden,
                CellContent::Hidden
            ]
        );
        assert!(corn.is_some_and(|g| g.first_row == 1 && g.cells.iter().all(|c| c.row == 1)));
        Ok(())
    }

    // Tests samples keep input order inside a group
    // Verified by sorting members of each group
    #[test]
    fn test_group_members_keep_input_order() -> plantgrid::Result<()> {
        let grouped = plan_grouped(&CATEGORIES, key, 6)?;

        let apple: Vec<Option<usize>> = grouped
            .groups()
            .first()
            .map(|g| g.cells.iter().map(|c| c.sample_index()).collect())
            .unwrap_or_default();
        assert_eq!(apple, [Some(0), Some(1), Some(2), Some(7)]);
        Ok(())
    }

    // Tests columns are capped and overflow is truncated per group
    // Verified by wrapping instead of truncating by default
    #[test]
    fn test_truncation_caps_columns() -> plantgrid::Result<()> {
        let grouped = plan_grouped(&CATEGORIES, key, 2)?;

        assert_eq!(grouped.columns(), 2);
        assert_eq!(grouped.rows(), grouped.groups().len());
        let apple = grouped.groups().first();
        assert_eq!(apple.map(|g| g.placed()), Some(2));
        assert_eq!(apple.map(|g| g.dropped.clone()), Some(vec![2, 7]));
        assert_eq!(grouped.dropped_count(), 2);
        Ok(())
    }

    // Tests wrapping continues large groups on extra rows of their block
    // Verified by ignoring the overflow policy
    #[test]
    fn test_wrap_extends_block() -> plantgrid::Result<()> {
        let grouped = plan_grouped_with(&CATEGORIES, key, 3, GroupOverflow::Wrap)?;

        let apple = grouped.groups().first();
        assert_eq!(apple.map(|g| g.rows), Some(2));
        assert_eq!(apple.map(|g| g.placed()), Some(4));
        assert_eq!(grouped.dropped_count(), 0);
        let row_sum: usize = grouped.groups().iter().map(|g| g.rows).sum();
        assert_eq!(grouped.rows(), row_sum);
        assert_eq!(grouped.groups().get(1).map(|g| g.first_row), Some(2));

        let apple_tail: Vec<bool> = apple
            .map(|g| g.cells.iter().skip(3).map(|c| c.is_hidden()).collect())
            .unwrap_or_default();
        assert_eq!(apple_tail, [false, true, true]);
        Ok(())
    }

    // Tests the column count follows the largest group
    // Verified by always using max_columns
    #[test]
    fn test_columns_follow_largest_group() -> plantgrid::Result<()> {
        let items = ["a___1", "a___2", "b___1"];
        let grouped = plan_grouped(&items, key, 6)?;

        assert_eq!(grouped.columns(), 2);
        assert_eq!(grouped.cells().count(), 4);
        Ok(())
    }

    // Tests empty input and zero column bounds
    // Verified by dividing by the column count for empty input
    #[test]
    fn test_empty_and_invalid_inputs() -> plantgrid::Result<()> {
        let empty: [&str; 0] = [];
        let grouped = plan_grouped(&empty, key, 6)?;
        assert_eq!(grouped.rows(), 0);
        assert_eq!(grouped.columns(), 0);
        assert!(grouped.groups().is_empty());

        assert!(plan_grouped(&CATEGORIES, key, 0).is_err());
        Ok(())
    }
}
