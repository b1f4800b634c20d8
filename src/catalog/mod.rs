// SPDX-License-Identifier: MPL-2.0
//! Artwork catalog loading.
//!
//! A catalog is a TOML file listing artwork records in display order:
//!
//! ```toml
//! [[artwork]]
//! id = "entropy_garden_01"
//! title = "Entropy Garden"
//! series = "Entropy Garden"
//! category = "physics"
//! description = "Order dissolving into equilibrium."
//! date = "2025-08-04"
//! image = "images/entropy_garden_01.png"
//! code = "code/entropy_garden_01.py"
//! ```
//!
//! Relative `image` and `code` paths are resolved against the directory that
//! contains the catalog file. Records are read-only once loaded.

pub mod date;

pub use date::{format_long_date, parse_date};

use crate::error::{CatalogError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension given to downloaded artwork images.
pub const DOWNLOAD_EXTENSION: &str = "png";

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default, rename = "artwork")]
    artworks: Vec<RawArtwork>,
}

#[derive(Debug, Deserialize)]
struct RawArtwork {
    id: String,
    title: String,
    series: String,
    category: String,
    #[serde(default)]
    description: String,
    /// Either `"2025-08-04"` or a bare TOML date `2025-08-04`.
    date: toml::Value,
    image: PathBuf,
    code: PathBuf,
}

/// A single artwork record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    id: String,
    title: String,
    series: String,
    category: String,
    description: String,
    date: NaiveDate,
    image: PathBuf,
    code: PathBuf,
}

impl Artwork {
    /// Builds a record directly. Asset paths are used as given.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        series: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        image: impl Into<PathBuf>,
        code: impl Into<PathBuf>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            series: series.into(),
            category: category.into(),
            description: description.into(),
            date,
            image: image.into(),
            code: code.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn series(&self) -> &str {
        &self.series
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Date rendered for display (`August 4, 2025`).
    pub fn display_date(&self) -> String {
        format_long_date(self.date)
    }

    /// Path of the raster image asset.
    pub fn image(&self) -> &Path {
        &self.image
    }

    /// Path of the source code text asset.
    pub fn code(&self) -> &Path {
        &self.code
    }

    /// File name offered when the image is downloaded.
    pub fn download_name(&self) -> String {
        format!("{}.{}", self.id, DOWNLOAD_EXTENSION)
    }
}

/// Totals shown in the gallery header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub artwork_count: usize,
    pub series_count: usize,
}

/// Ordered, immutable collection of artwork records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// Wraps already-built records, keeping their order.
    pub fn new(artworks: Vec<Artwork>) -> Self {
        Self { artworks }
    }

    /// Reads and validates a catalog file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_toml_str(&content, root)
    }

    /// Parses catalog content, resolving relative asset paths against `root`.
    pub fn from_toml_str(content: &str, root: &Path) -> Result<Self> {
        let raw: RawCatalog =
            toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut seen_ids = HashSet::new();
        let mut artworks = Vec::with_capacity(raw.artworks.len());

        for record in raw.artworks {
            if !seen_ids.insert(record.id.clone()) {
                return Err(CatalogError::DuplicateId(record.id).into());
            }

            let date_text = match &record.date {
                toml::Value::String(text) => text.clone(),
                toml::Value::Datetime(datetime) => datetime.to_string(),
                other => other.to_string(),
            };
            let Some(date) = parse_date(&date_text) else {
                return Err(CatalogError::InvalidDate {
                    id: record.id,
                    value: date_text,
                }
                .into());
            };

            artworks.push(Artwork {
                id: record.id,
                title: record.title,
                series: record.series,
                category: record.category,
                description: record.description,
                date,
                image: resolve_asset(root, record.image),
                code: resolve_asset(root, record.code),
            });
        }

        Ok(Self { artworks })
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn get(&self, index: usize) -> Option<&Artwork> {
        self.artworks.get(index)
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.artworks
            .iter()
            .filter(|artwork| seen.insert(artwork.category.as_str()))
            .map(|artwork| artwork.category.clone())
            .collect()
    }

    /// Record count and number of distinct series.
    pub fn summary(&self) -> Summary {
        let series: HashSet<&str> = self.artworks.iter().map(|a| a.series.as_str()).collect();
        Summary {
            artwork_count: self.artworks.len(),
            series_count: series.len(),
        }
    }
}

fn resolve_asset(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}
