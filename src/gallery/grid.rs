// SPDX-License-Identifier: MPL-2.0
//! Tile projection for the grid view.

use super::state::Filter;
use crate::catalog::Artwork;

/// Tiles that pass `filter`, with their catalog indices, in catalog order.
///
/// Filtering only decides which tiles are drawn; the catalog is untouched, so
/// switching back to `Filter::All` restores every tile.
pub fn visible_tiles<'a>(
    artworks: &'a [Artwork],
    filter: &'a Filter,
) -> impl Iterator<Item = (usize, &'a Artwork)> + 'a {
    artworks
        .iter()
        .enumerate()
        .filter(move |(_, artwork)| filter.matches(artwork.category()))
}
