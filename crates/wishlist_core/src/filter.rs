use crate::{SheetRow, SUBMITTER_OPTIONS};

/// Choice label that disables a filter.
pub const SHOW_ALL: &str = "すべて表示";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    /// Maps a selector label to a filter. Empty input and [`SHOW_ALL`] both mean "no filter".
    pub fn from_choice(choice: &str) -> Self {
        if choice.is_empty() || choice == SHOW_ALL {
            Filter::All
        } else {
            Filter::Only(choice.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Filter::All => SHOW_ALL,
            Filter::Only(value) => value,
        }
    }

    /// `All` when the value is not one of the offered `choices`.
    fn within(&self, choices: &[String]) -> Filter {
        match self {
            Filter::Only(value) if choices.iter().any(|choice| choice == value) => self.clone(),
            _ => Filter::All,
        }
    }

    fn matches(&self, value: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(expected) => expected == value,
        }
    }
}

/// Exact-match filter over submitter and category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowFilter {
    pub submitter: Filter,
    pub category: Filter,
}

impl RowFilter {
    pub fn new(submitter: Filter, category: Filter) -> Self {
        Self {
            submitter,
            category,
        }
    }

    /// The filter as the selectors can show it: values missing from their choice list fall back to [`SHOW_ALL`].
    pub fn within_choices(&self, submitters: &[String], categories: &[String]) -> RowFilter {
        RowFilter::new(self.submitter.within(submitters), self.category.within(categories))
    }

    /// Rows matching both filters, in sheet order.
    pub fn apply(&self, rows: &[SheetRow]) -> Vec<SheetRow> {
        rows.iter()
            .filter(|row| self.submitter.matches(&row.submitter) && self.category.matches(&row.category))
            .cloned()
            .collect()
    }
}

/// Submitter selector labels: [`SHOW_ALL`] followed by the fixed submitter names.
pub(crate) fn submitter_choices() -> Vec<String> {
    std::iter::once(SHOW_ALL)
        .chain(SUBMITTER_OPTIONS)
        .map(ToOwned::to_owned)
        .collect()
}

/// Category selector labels: [`SHOW_ALL`] followed by categories present in `rows`, first-seen order.
pub(crate) fn category_choices(rows: &[SheetRow]) -> Vec<String> {
    let mut choices = vec![SHOW_ALL.to_string()];
    for row in rows {
        if !choices.iter().skip(1).any(|seen| seen == &row.category) {
            choices.push(row.category.clone());
        }
    }
    choices
}
