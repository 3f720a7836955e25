use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Dimension, Transaction};

/// Order in which groups are emitted by [`top_categories`].
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum GroupOrder {
    /// Groups appear in the order they are first seen in the input.
    #[default]
    Encounter,
    Alphabetical
}

#[derive(Debug, Clone, Copy)]
pub struct RankingOptions {
    /// Maximum number of categories kept per group.
    pub top_n: usize,
    /// Keep the least frequent categories instead of the most frequent.
    pub ascending: bool,
    pub group_order: GroupOrder
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            top_n: 10,
            ascending: false,
            group_order: GroupOrder::Encounter
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize
}

/// The ranked categories of one group, best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedGroup {
    pub group: String,
    pub categories: Vec<CategoryCount>
}

/// One bar of the ranking chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub category: String,
    pub group: String,
    pub count: usize
}

impl RankedGroup {
    pub fn entries(&self) -> impl Iterator<Item = RankingEntry> + '_ {
        self.categories.iter().map(|category| RankingEntry {
            category: category.category.clone(),
            group: self.group.clone(),
            count: category.count
        })
    }
}

/// Counts transactions per `(group, category)` pair and keeps the `top_n` pairs of each group.
///
/// Counts are transaction frequencies, not revenue. Rows with an empty group or category
/// cell are ignored. Among equal counts, the pair seen first in `rows` ranks first.
pub fn top_categories<'a>(
    rows: impl IntoIterator<Item = &'a Transaction>,
    group_field: Dimension,
    category_field: Dimension,
    options: &RankingOptions
) -> Vec<RankedGroup> {
    let mut groups: Vec<(&str, Vec<(&str, usize)>)> = Vec::new();
    let mut group_positions: HashMap<&str, usize> = HashMap::new();
    let mut pair_positions: HashMap<(&str, &str), usize> = HashMap::new();

    for transaction in rows {
        let (Some(group), Some(category)) = (group_field.value(transaction), category_field.value(transaction)) else {
            continue;
        };

        let group_position = *group_positions.entry(group).or_insert_with(|| {
            groups.push((group, Vec::new()));
            groups.len() - 1
        });

        let categories = &mut groups[group_position].1;

        match pair_positions.entry((group, category)) {
            Entry::Occupied(entry) => categories[*entry.get()].1 += 1,
            Entry::Vacant(entry) => {
                entry.insert(categories.len());
                categories.push((category, 1));
            }
        }
    }

    let mut ranked: Vec<RankedGroup> = groups.into_iter()
        .map(|(group, mut categories)| {
            if options.ascending {
                categories.sort_by_key(|(_, count)| *count);
            } else {
                categories.sort_by_key(|(_, count)| Reverse(*count));
            }

            categories.truncate(options.top_n);

            RankedGroup {
                group: group.to_string(),
                categories: categories.into_iter()
                    .map(|(category, count)| CategoryCount { category: category.to_string(), count })
                    .collect()
            }
        })
        .collect();

    if options.group_order == GroupOrder::Alphabetical {
        ranked.sort_by(|left, right| left.group.cmp(&right.group));
    }

    ranked
}

/// The ranking as chart rows, group by group.
pub fn flatten(groups: &[RankedGroup]) -> Vec<RankingEntry> {
    groups.iter().flat_map(|group| group.entries()).collect()
}
