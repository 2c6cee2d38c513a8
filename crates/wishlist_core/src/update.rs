use crate::state::SheetSnapshot;
use crate::view_model::{Notice, NoticeLevel, MISSING_INPUT_TEXT, SAVED_TO_SHEET_TEXT};
use crate::{AppState, Effect, Filter, Msg, RowFilter, SheetRow, SUBMITTER_OPTIONS};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageRequested => vec![Effect::LoadRows],
        Msg::PageRendered => {
            state.acknowledge_render();
            Vec::new()
        }
        Msg::AddSubmitted {
            url,
            submitter,
            category,
        } => {
            // Whitespace only counts as missing; the input itself is stored as typed.
            if url.trim().is_empty() || category.trim().is_empty() {
                state.push_notice(Notice::new(NoticeLevel::Warning, MISSING_INPUT_TEXT));
                return (state, Vec::new());
            }
            let submitter = match submitter.trim() {
                "" => SUBMITTER_OPTIONS[0],
                name => name,
            };

            state.add_item(&url, submitter, &category);
            vec![Effect::AppendRow(SheetRow::new(&url, submitter, &category))]
        }
        Msg::RowAppended => {
            state.push_notice(Notice::new(NoticeLevel::Info, SAVED_TO_SHEET_TEXT));
            Vec::new()
        }
        Msg::RowAppendFailed { reason } => {
            // The session item stays; list and sheet drift apart.
            state.push_notice(Notice::save_failed(&reason));
            Vec::new()
        }
        Msg::RowsLoaded(rows) => {
            state.set_sheet(SheetSnapshot::Loaded(rows));
            Vec::new()
        }
        Msg::RowsLoadFailed(reason) => {
            state.set_sheet(SheetSnapshot::Failed(reason));
            Vec::new()
        }
        Msg::FilterChanged {
            submitter,
            category,
        } => {
            state.set_filter(RowFilter::new(
                Filter::from_choice(&submitter),
                Filter::from_choice(&category),
            ));
            Vec::new()
        }
        Msg::FavoriteToggled { position } => {
            state.toggle_favorite(position);
            Vec::new()
        }
        Msg::DeleteRequested { position } => {
            state.request_delete(position);
            Vec::new()
        }
        Msg::DeleteConfirmed { position } => {
            state.confirm_delete(position);
            Vec::new()
        }
        Msg::DeleteCancelled => {
            state.cancel_delete();
            Vec::new()
        }
        Msg::ClearClicked => {
            state.clear_items();
            Vec::new()
        }
        Msg::CopyClicked => {
            state.prepare_copy();
            Vec::new()
        }
    };

    (state, effects)
}
