pub const PAGE: &str = "/";
pub const ADD_ITEM: &str = "/items";
pub const TOGGLE_FAVORITE: &str = "/items/:position/favorite";
pub const REQUEST_DELETE: &str = "/items/:position/delete";
pub const CONFIRM_DELETE: &str = "/items/:position/delete/confirm";
pub const CANCEL_DELETE: &str = "/items/:position/delete/cancel";
pub const CLEAR_LIST: &str = "/list/clear";
pub const COPY_LIST: &str = "/list/copy";

pub const FIELD_URL: &str = "url";
pub const FIELD_SUBMITTER: &str = "submitter";
pub const FIELD_CATEGORY: &str = "category";

pub const PAGE_TITLE: &str = "同棲ほしいものリスト";
pub const HEADING: &str = "🏠　同棲ほしいものリスト";
pub const TAGLINE: &str = "これいいと思った物をひたすら貼ってく！";
pub const LIST_HEADING: &str = "📝 買い物リスト管理";
pub const RESULTS_HEADING: &str = "🛒 絞り込み結果";

pub const LABEL_SUBMITTER: &str = "👤 あなたの名前を選択してください";
pub const LABEL_CATEGORY: &str = "📦 カテゴリを選択してください";
pub const LABEL_URL: &str = "アイテムのリンクを貼ってください:";
pub const LABEL_FILTER_SUBMITTER: &str = "👤 表示する追加者を選択";
pub const LABEL_FILTER_CATEGORY: &str = "📦 表示するカテゴリを選択";

pub const BUTTON_ADD: &str = "➕ リストに追加";
pub const BUTTON_FILTER: &str = "🔍 絞り込む";
pub const BUTTON_FAVORITE: &str = "⭐ お気に入り";
pub const BUTTON_UNFAVORITE: &str = "❌ お気に入り解除";
pub const BUTTON_DELETE: &str = "🗑️ 削除";
pub const BUTTON_CONFIRM_DELETE: &str = "はい";
pub const BUTTON_CANCEL_DELETE: &str = "キャンセル";
pub const BUTTON_CLEAR: &str = "🗑️ リストをクリア";
pub const BUTTON_COPY: &str = "📋 リストをコピー";

pub const COLUMN_ITEM: &str = "アイテム";
pub const COLUMN_SUBMITTER: &str = "追加者";
pub const COLUMN_CATEGORY: &str = "カテゴリ";

pub const RESULTS_PENDING: &str = "スプレッドシートを読み込んでいます…";
pub const RESULTS_EMPTY: &str = "該当するアイテムはありません。";
