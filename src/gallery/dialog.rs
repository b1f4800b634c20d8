// SPDX-License-Identifier: MPL-2.0
//! Modal dialog state: artwork detail and source code preview.
//!
//! The code dialog is stacked above the detail dialog. Dismissal always
//! closes both.

use crate::catalog::Artwork;
use std::path::PathBuf;

/// Content of the artwork detail dialog, taken verbatim from one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkDetail {
    pub title: String,
    pub date: String,
    pub description: String,
    pub image: PathBuf,
    pub download_name: String,
}

impl ArtworkDetail {
    pub fn from_artwork(artwork: &Artwork) -> Self {
        Self {
            title: artwork.title().to_string(),
            date: artwork.display_date(),
            description: artwork.description().to_string(),
            image: artwork.image().to_path_buf(),
            download_name: artwork.download_name(),
        }
    }
}

/// Loaded source code for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeView {
    pub index: usize,
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dialogs {
    artwork: Option<usize>,
    code: Option<CodeView>,
}

impl Dialogs {
    /// Shows the detail dialog for the record at `index`.
    pub fn open_artwork(&mut self, index: usize) {
        self.artwork = Some(index);
    }

    /// Shows the code dialog. Only called once the source has been read.
    pub fn open_code(&mut self, index: usize, source: String) {
        self.code = Some(CodeView { index, source });
    }

    pub fn close_all(&mut self) {
        self.artwork = None;
        self.code = None;
    }

    pub fn artwork(&self) -> Option<usize> {
        self.artwork
    }

    pub fn code(&self) -> Option<&CodeView> {
        self.code.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.artwork.is_some() || self.code.is_some()
    }
}
