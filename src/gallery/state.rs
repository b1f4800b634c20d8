// SPDX-License-Identifier: MPL-2.0
//! Navigation and filter state of the gallery.
//!
//! `ViewState` is a small immutable value. Every user interaction is expressed
//! as an [`Action`] and [`ViewState::apply`] returns the next state, which the
//! view layer renders. Nothing else mutates it.

use serde::Deserialize;

/// The two top-level representations of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    #[default]
    Gallery,
    Timeline,
}

impl ActiveView {
    pub const ALL: [ActiveView; 2] = [ActiveView::Gallery, ActiveView::Timeline];

    /// i18n key of the navigation button for this view.
    pub fn label_key(self) -> &'static str {
        match self {
            ActiveView::Gallery => "nav-gallery",
            ActiveView::Timeline => "nav-timeline",
        }
    }
}

/// Category filter applied to grid tiles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Maps a category to its filter, falling back to `All` for categories
    /// that have no filter button.
    pub fn for_category<S: AsRef<str>>(category: &str, known: &[S]) -> Self {
        if known.iter().any(|k| k.as_ref() == category) {
            Filter::Category(category.to_string())
        } else {
            Filter::All
        }
    }

    /// Whether a tile tagged with `category` is shown under this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(selected) => selected == category,
        }
    }
}

/// User intents that change navigation or filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SwitchView(ActiveView),
    ApplyFilter(Filter),
    /// A timeline group was chosen: show the grid filtered to `filter`.
    FocusSeries { filter: Filter },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    view: ActiveView,
    filter: Filter,
}

impl ViewState {
    pub fn new(view: ActiveView) -> Self {
        Self {
            view,
            filter: Filter::All,
        }
    }

    pub fn view(&self) -> ActiveView {
        self.view
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn is_active(&self, view: ActiveView) -> bool {
        self.view == view
    }

    #[must_use]
    pub fn apply(&self, action: Action) -> ViewState {
        match action {
            Action::SwitchView(view) => ViewState {
                view,
                filter: self.filter.clone(),
            },
            Action::ApplyFilter(filter) => ViewState {
                view: self.view,
                filter,
            },
            Action::FocusSeries { filter } => ViewState {
                view: ActiveView::Gallery,
                filter,
            },
        }
    }
}
