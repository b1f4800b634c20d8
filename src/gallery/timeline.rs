// SPDX-License-Identifier: MPL-2.0
//! Series grouping for the timeline view.

use super::state::{Action, Filter};
use crate::catalog::Artwork;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Number of preview thumbnails shown per series.
pub const MAX_THUMBNAILS: usize = 3;

/// One timeline entry: a series and the indices of its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesGroup {
    name: String,
    first_date: NaiveDate,
    first_category: String,
    members: Vec<usize>,
}

impl SeriesGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Date of the series' first record in catalog order.
    pub fn first_date(&self) -> NaiveDate {
        self.first_date
    }

    /// Category of the series' first record; used when the group is chosen.
    pub fn first_category(&self) -> &str {
        &self.first_category
    }

    /// Catalog indices of every record in the series, in catalog order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Indices of the records previewed as thumbnails.
    pub fn thumbnails(&self) -> &[usize] {
        &self.members[..self.members.len().min(MAX_THUMBNAILS)]
    }

    /// Action emitted when this group is chosen on the timeline: back to the
    /// grid, filtered to the first record's category.
    pub fn focus_action<S: AsRef<str>>(&self, known_categories: &[S]) -> Action {
        Action::FocusSeries {
            filter: Filter::for_category(&self.first_category, known_categories),
        }
    }
}

/// Groups records by series, ordered by each series' first appearance.
///
/// The order is neither alphabetical nor chronological: a series listed first
/// in the catalog is first on the timeline even if a later record is older.
pub fn group_by_series(artworks: &[Artwork]) -> Vec<SeriesGroup> {
    let mut groups: Vec<SeriesGroup> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (index, artwork) in artworks.iter().enumerate() {
        match positions.get(artwork.series()) {
            Some(&position) => groups[position].members.push(index),
            None => {
                positions.insert(artwork.series(), groups.len());
                groups.push(SeriesGroup {
                    name: artwork.series().to_string(),
                    first_date: artwork.date(),
                    first_category: artwork.category().to_string(),
                    members: vec![index],
                });
            }
        }
    }

    groups
}
