use crate::SheetRow;

/// Banner shown once after the list was cleared.
pub const CLEARED_TEXT: &str = "✅ リストをクリアしました！";
/// Hint shown under the copy block.
pub const COPY_HINT_TEXT: &str = "上記のリストをコピーして使用してください！";
/// Placeholder shown instead of an empty list.
pub const EMPTY_LIST_TEXT: &str =
    "📝 まだアイテムがありません。上記の入力欄からアイテムを追加してみましょう！";

pub(crate) const MISSING_INPUT_TEXT: &str = "⚠️ アイテムとカテゴリを選択してください。";
pub(crate) const SAVED_TO_SHEET_TEXT: &str = "📝 Google Sheetsにも保存しました！";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A message shown on exactly one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub(crate) fn added(url: &str, category: &str, submitter: &str) -> Self {
        Self::new(
            NoticeLevel::Success,
            format!("✅ '{url}' を追加（{category} / {submitter}）"),
        )
    }

    pub(crate) fn save_failed(reason: &str) -> Self {
        Self::new(
            NoticeLevel::Error,
            format!("❌ Google Sheetsへの保存に失敗しました: {reason}"),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub notices: Vec<Notice>,
    /// The list was cleared since the previous render.
    pub cleared: bool,
    pub form: FormView,
    pub items: Vec<ItemRowView>,
    /// Numbered list text requested by the copy button.
    pub copy_text: Option<String>,
    pub filter: FilterView,
    pub results: ResultsView,
}

/// Add form selectors and their current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub submitters: Vec<String>,
    pub categories: Vec<String>,
    pub selected_submitter: String,
    pub selected_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRowView {
    /// 1-based display position.
    pub position: usize,
    pub text: String,
    pub favorite: bool,
    pub confirming_delete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterView {
    pub submitter_choices: Vec<String>,
    pub category_choices: Vec<String>,
    pub selected_submitter: String,
    pub selected_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// The sheet has not been read in this session yet.
    Pending,
    /// Filtered rows in sheet order.
    Rows(Vec<SheetRow>),
    /// Reading the sheet failed with the given reason.
    Unavailable(String),
}
