//! Wishlist core: pure state machine and view-model helpers.
mod effect;
mod filter;
mod item;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{Filter, RowFilter, SHOW_ALL};
pub use item::{format_item, numbered_list, SheetRow, CATEGORY_OPTIONS, SUBMITTER_OPTIONS};
pub use msg::Msg;
pub use state::{AppState, SheetSnapshot};
pub use update::update;
pub use view_model::{
    AppViewModel, FilterView, FormView, ItemRowView, Notice, NoticeLevel, ResultsView,
    CLEARED_TEXT, COPY_HINT_TEXT, EMPTY_LIST_TEXT,
};
