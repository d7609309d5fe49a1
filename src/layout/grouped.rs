//! Grid layout with one row block per group
//!
//! Samples are partitioned by a key (typically the plant name), groups are
//! ordered by key, and each group gets its own block of rows. Hiding of
//! surplus cells happens per block, not over the whole grid.

use crate::io::error::{Result, invalid_parameter};
use crate::layout::grid::{CellContent, GridCell};
use std::collections::BTreeMap;

/// Handling of groups larger than the column count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupOverflow {
    /// Keep the first `columns` samples and drop the rest from display
    #[default]
    Truncate,
    /// Continue the group on additional rows of its block
    Wrap,
}

/// Rows occupied by a single group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBlock<K> {
    /// Group key
    pub key: K,
    /// Global index of the block's first row
    pub first_row: usize,
    /// Number of rows in the block
    pub rows: usize,
    /// Block cells in row-major order, `rows * columns` of them
    pub cells: Vec<GridCell>,
    /// Sample indices left out under [`GroupOverflow::Truncate`]
    pub dropped: Vec<usize>,
}

impl<K> GroupBlock<K> {
    /// Number of samples placed in the block
    pub fn placed(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_hidden()).count()
    }
}

/// Grouped grid layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedGridPlan<K> {
    columns: usize,
    groups: Vec<GroupBlock<K>>,
}

impl<K> GroupedGridPlan<K> {
    /// Shared column count, `min(largest group, max_columns)`
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Groups in ascending key order
    pub fn groups(&self) -> &[GroupBlock<K>] {
        &self.groups
    }

    /// Total rows over all blocks
    pub fn rows(&self) -> usize {
        self.groups.iter().map(|group| group.rows).sum()
    }

    /// All cells of all blocks in display order
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.groups.iter().flat_map(|group| group.cells.iter())
    }

    /// Samples removed from display by truncation
    pub fn dropped_count(&self) -> usize {
        self.groups.iter().map(|group| group.dropped.len()).sum()
    }
}

/// Group samples by `key_fn` and give each group one row, truncating overflow
///
/// # Errors
///
/// Returns an error if `max_columns` is zero
pub fn plan_grouped<T, K, F>(
    samples: &[T],
    key_fn: F,
    max_columns: usize,
) -> Result<GroupedGridPlan<K>>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    plan_grouped_with(samples, key_fn, max_columns, GroupOverflow::Truncate)
}

/// Group samples by `key_fn` with an explicit overflow policy
///
/// Within a group, samples keep their input order. Empty input yields a plan
/// with zero columns and no groups.
///
/// # Errors
///
/// Returns an error if `max_columns` is zero
pub fn plan_grouped_with<T, K, F>(
    samples: &[T],
    key_fn: F,
    max_columns: usize,
    overflow: GroupOverflow,
) -> Result<GroupedGridPlan<K>>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    if max_columns == 0 {
        return Err(invalid_parameter(
            "max_columns",
            &max_columns,
            &"grid needs at least one column",
        ));
    }

    let mut partition: BTreeMap<K, Vec<usize>> = BTreeMap::new();
    for (index, sample) in samples.iter().enumerate() {
        partition.entry(key_fn(sample)).or_default().push(index);
    }

    let largest = partition.values().map(Vec::len).max().unwrap_or(0);
    let columns = largest.min(max_columns);

    let mut groups = Vec::with_capacity(partition.len());
    let mut next_row = 0;
    for (key, members) in partition {
        let (shown, dropped) = match overflow {
            GroupOverflow::Truncate if members.len() > columns => {
                let (shown, dropped) = members.split_at(columns);
                (shown.to_vec(), dropped.to_vec())
            }
            _ => (members, Vec::new()),
        };

        let rows = shown.len().div_ceil(columns).max(1);
        let cells = (0..rows * columns)
            .map(|offset| GridCell {
                row: next_row + offset / columns,
                col: offset % columns,
                content: shown
                    .get(offset)
                    .map_or(CellContent::Hidden, |&index| CellContent::Occupied(index)),
            })
            .collect();

        groups.push(GroupBlock {
            key,
            first_row: next_row,
            rows,
            cells,
            dropped,
        });
        next_row += rows;
    }

    Ok(GroupedGridPlan { columns, groups })
}
