/// Names offered in the submitter selector; the first one is the default.
pub const SUBMITTER_OPTIONS: [&str; 2] = ["ゆうと", "なつみ"];

/// Categories offered in the add form.
pub const CATEGORY_OPTIONS: [&str; 6] = ["家電", "家具", "食器", "食品", "日用品", "その他"];

/// Display text of a session item.
pub fn format_item(url: &str, category: &str, submitter: &str) -> String {
    format!("{url}（{category} / by {submitter}）")
}

/// Renders items as a 1-indexed, newline-joined list.
pub fn numbered_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {}", index + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One worksheet row: the pasted link, who added it and its category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetRow {
    pub item: String,
    pub submitter: String,
    pub category: String,
}

impl SheetRow {
    pub fn new(
        item: impl Into<String>,
        submitter: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            submitter: submitter.into(),
            category: category.into(),
        }
    }

    /// Builds a row from raw sheet cells. Missing cells become empty, extra cells are dropped.
    pub fn from_cells(cells: Vec<String>) -> Self {
        let mut cells = cells.into_iter();
        Self {
            item: cells.next().unwrap_or_default(),
            submitter: cells.next().unwrap_or_default(),
            category: cells.next().unwrap_or_default(),
        }
    }

    /// Cells in sheet column order.
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.item.clone(),
            self.submitter.clone(),
            self.category.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_text_uses_full_width_parentheses() {
        assert_eq!(
            format_item("https://example.com/a", "家電", "ゆうと"),
            "https://example.com/a（家電 / by ゆうと）"
        );
    }

    #[test]
    fn numbered_list_starts_at_one() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(numbered_list(&items), "1. a\n2. b");
        assert_eq!(numbered_list(&[]), "");
    }

    #[test]
    fn short_rows_are_padded() {
        let row = SheetRow::from_cells(vec!["https://x".to_string()]);
        assert_eq!(row, SheetRow::new("https://x", "", ""));

        let row = SheetRow::from_cells(
            ["u", "s", "c", "extra"].iter().map(|s| s.to_string()).collect(),
        );
        assert_eq!(row, SheetRow::new("u", "s", "c"));
    }
}
