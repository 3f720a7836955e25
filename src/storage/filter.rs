use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::Transaction;

/// The set of locations a user has selected.
///
/// An empty set selects every row. Locations are kept sorted so that two filters
/// selecting the same places compare and hash equal regardless of selection order.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct LocationFilter(BTreeSet<String>);

impl LocationFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_locations<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(locations.into_iter().map(Into::into).collect())
    }

    pub fn is_all(&self) -> bool {
        self.0.is_empty()
    }

    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Rows with no location only match the unrestricted filter.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if self.is_all() {
            return true;
        }

        transaction.location.as_ref().is_some_and(|location| self.0.contains(location))
    }
}

impl From<Option<Vec<String>>> for LocationFilter {
    fn from(selection: Option<Vec<String>>) -> Self {
        selection.map(Self::from_locations).unwrap_or_else(Self::all)
    }
}

/// A read-only subset of a [`crate::storage::Dataset`], in dataset order.
#[derive(Debug, Clone)]
pub struct FilterView<'a> {
    rows: Vec<&'a Transaction>
}

impl<'a> FilterView<'a> {
    pub(crate) fn new(rows: Vec<&'a Transaction>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Transaction> + '_ {
        self.rows.iter().copied()
    }
}
