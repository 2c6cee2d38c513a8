use std::collections::BTreeSet;

use crate::filter::{category_choices, submitter_choices};
use crate::view_model::{FilterView, FormView, ItemRowView, Notice, ResultsView};
use crate::{
    format_item, numbered_list, AppViewModel, RowFilter, SheetRow, CATEGORY_OPTIONS,
    SUBMITTER_OPTIONS,
};

/// Last known contents of the worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SheetSnapshot {
    #[default]
    NotLoaded,
    Loaded(Vec<SheetRow>),
    Failed(String),
}

/// Everything one browser session knows. The session list is never reconciled with the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    items: Vec<String>,
    favorites: BTreeSet<String>,
    cleared: bool,
    pending_delete: Option<usize>,
    notices: Vec<Notice>,
    copy_text: Option<String>,
    sheet: SheetSnapshot,
    filter: RowFilter,
    selected_submitter: String,
    selected_category: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            favorites: BTreeSet::new(),
            cleared: false,
            pending_delete: None,
            notices: Vec::new(),
            copy_text: None,
            sheet: SheetSnapshot::default(),
            filter: RowFilter::default(),
            selected_submitter: SUBMITTER_OPTIONS[0].to_string(),
            selected_category: CATEGORY_OPTIONS[0].to_string(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn favorites(&self) -> &BTreeSet<String> {
        &self.favorites
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn pending_delete(&self) -> Option<usize> {
        self.pending_delete
    }

    pub fn sheet(&self) -> &SheetSnapshot {
        &self.sheet
    }

    pub fn filter(&self) -> &RowFilter {
        &self.filter
    }

    pub fn view(&self) -> AppViewModel {
        let rows: &[SheetRow] = match &self.sheet {
            SheetSnapshot::Loaded(rows) => rows,
            _ => &[],
        };
        let submitter_choices = submitter_choices();
        let category_choices = category_choices(rows);
        let filter = self
            .filter
            .within_choices(&submitter_choices, &category_choices);
        let results = match &self.sheet {
            SheetSnapshot::NotLoaded => ResultsView::Pending,
            SheetSnapshot::Loaded(rows) => ResultsView::Rows(filter.apply(rows)),
            SheetSnapshot::Failed(reason) => ResultsView::Unavailable(reason.clone()),
        };

        AppViewModel {
            notices: self.notices.clone(),
            cleared: self.cleared,
            form: FormView {
                submitters: SUBMITTER_OPTIONS.iter().map(|s| s.to_string()).collect(),
                categories: CATEGORY_OPTIONS.iter().map(|s| s.to_string()).collect(),
                selected_submitter: self.selected_submitter.clone(),
                selected_category: self.selected_category.clone(),
            },
            items: self
                .items
                .iter()
                .enumerate()
                .map(|(index, text)| ItemRowView {
                    position: index + 1,
                    text: text.clone(),
                    favorite: self.favorites.contains(text),
                    confirming_delete: self.pending_delete == Some(index + 1),
                })
                .collect(),
            copy_text: self.copy_text.clone(),
            filter: FilterView {
                selected_submitter: filter.submitter.label().to_string(),
                selected_category: filter.category.label().to_string(),
                submitter_choices,
                category_choices,
            },
            results,
        }
    }

    pub(crate) fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub(crate) fn add_item(&mut self, url: &str, submitter: &str, category: &str) {
        self.items.push(format_item(url, category, submitter));
        self.selected_submitter = submitter.to_string();
        self.selected_category = category.to_string();
        self.notices.push(Notice::added(url, category, submitter));
    }

    /// Stores the snapshot. Fresh rows also drop filter values the sheet no longer offers.
    pub(crate) fn set_sheet(&mut self, sheet: SheetSnapshot) {
        if let SheetSnapshot::Loaded(rows) = &sheet {
            self.filter = self
                .filter
                .within_choices(&submitter_choices(), &category_choices(rows));
        }
        self.sheet = sheet;
    }

    pub(crate) fn set_filter(&mut self, filter: RowFilter) {
        self.filter = filter;
    }

    /// Flips the favorite mark of the item at 1-based `position`. Out-of-range positions are ignored.
    pub(crate) fn toggle_favorite(&mut self, position: usize) {
        let Some(item) = self.item_at(position).map(ToOwned::to_owned) else {
            return;
        };
        if !self.favorites.remove(&item) {
            self.favorites.insert(item);
        }
    }

    pub(crate) fn request_delete(&mut self, position: usize) {
        if self.item_at(position).is_some() {
            self.pending_delete = Some(position);
        }
    }

    /// Removes the item at `position` if that is the position awaiting confirmation.
    pub(crate) fn confirm_delete(&mut self, position: usize) {
        if self.pending_delete != Some(position) || self.item_at(position).is_none() {
            return;
        }
        self.pending_delete = None;
        self.items.remove(position - 1);
    }

    pub(crate) fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub(crate) fn clear_items(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.pending_delete = None;
        self.cleared = true;
    }

    pub(crate) fn prepare_copy(&mut self) {
        if !self.items.is_empty() {
            self.copy_text = Some(numbered_list(&self.items));
        }
    }

    /// Drops every message meant for a single render.
    pub(crate) fn acknowledge_render(&mut self) {
        self.notices.clear();
        self.cleared = false;
        self.copy_text = None;
    }

    fn item_at(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }
}
