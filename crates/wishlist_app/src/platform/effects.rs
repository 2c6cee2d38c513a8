use std::collections::VecDeque;
use std::sync::Arc;

use wishlist_core::{update, AppState, Effect, Msg, SheetRow};
use wishlist_logging::{wishlist_info, wishlist_warn};
use wishlist_sheets::SheetClient;

/// Executes core effects against the spreadsheet and turns outcomes back into messages.
pub struct EffectRunner {
    sheet: Arc<dyn SheetClient>,
}

impl EffectRunner {
    pub fn new(sheet: Arc<dyn SheetClient>) -> Self {
        Self { sheet }
    }

    /// Applies `msg` to `state`, then every message produced by the resulting effects.
    pub async fn dispatch(&self, state: &mut AppState, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let (next, effects) = update(std::mem::take(state), msg);
            *state = next;
            for effect in effects {
                inbox.push_back(self.run(effect).await);
            }
        }
    }

    async fn run(&self, effect: Effect) -> Msg {
        match effect {
            Effect::AppendRow(row) => match self.sheet.append_row(&row.to_cells()).await {
                Ok(()) => {
                    wishlist_info!(
                        "AppendRow submitter={} category={} url_len={}",
                        row.submitter,
                        row.category,
                        row.item.len()
                    );
                    Msg::RowAppended
                }
                Err(err) => {
                    wishlist_warn!("AppendRow failed, session list keeps the item: {}", err);
                    Msg::RowAppendFailed {
                        reason: err.to_string(),
                    }
                }
            },
            Effect::LoadRows => match self.sheet.read_all_rows().await {
                Ok(rows) => Msg::RowsLoaded(rows.into_iter().map(SheetRow::from_cells).collect()),
                Err(err) => {
                    wishlist_warn!("LoadRows failed: {}", err);
                    Msg::RowsLoadFailed(err.to_string())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wishlist_core::{NoticeLevel, ResultsView};
    use wishlist_sheets::{FailureKind, InMemorySheet};

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn add_msg(url: &str) -> Msg {
        Msg::AddSubmitted {
            url: url.to_string(),
            submitter: "ゆうと".to_string(),
            category: "家電".to_string(),
        }
    }

    #[tokio::test]
    async fn add_writes_exactly_one_row() {
        wishlist_logging::initialize_for_tests();
        let sheet = Arc::new(InMemorySheet::new());
        let runner = EffectRunner::new(sheet.clone());
        let mut state = AppState::new();

        runner.dispatch(&mut state, add_msg("https://example.com/tv")).await;

        assert_eq!(state.items().len(), 1);
        assert_eq!(sheet.rows(), vec![cells(&["https://example.com/tv", "ゆうと", "家電"])]);
        let levels: Vec<_> = state.notices().iter().map(|n| n.level).collect();
        assert_eq!(levels, vec![NoticeLevel::Success, NoticeLevel::Info]);
    }

    #[tokio::test]
    async fn empty_url_touches_neither_list_nor_sheet() {
        wishlist_logging::initialize_for_tests();
        let sheet = Arc::new(InMemorySheet::new());
        let runner = EffectRunner::new(sheet.clone());
        let mut state = AppState::new();

        runner.dispatch(&mut state, add_msg("")).await;

        assert!(state.items().is_empty());
        assert!(sheet.rows().is_empty());
    }

    #[tokio::test]
    async fn failed_append_keeps_item_and_reports_error() {
        wishlist_logging::initialize_for_tests();
        let sheet = Arc::new(InMemorySheet::new());
        sheet.set_failure(Some(FailureKind::HttpStatus(403)));
        let runner = EffectRunner::new(sheet.clone());
        let mut state = AppState::new();

        runner.dispatch(&mut state, add_msg("https://example.com/tv")).await;

        assert_eq!(state.items().len(), 1);
        assert!(sheet.rows().is_empty());
        let last = state.notices().last().expect("notice");
        assert_eq!(last.level, NoticeLevel::Error);
        assert!(last.text.contains("http status 403"));
    }

    #[tokio::test]
    async fn page_request_loads_padded_rows() {
        wishlist_logging::initialize_for_tests();
        let sheet = Arc::new(InMemorySheet::with_rows(vec![
            cells(&["https://a", "ゆうと", "家電"]),
            cells(&["https://b"]),
        ]));
        let runner = EffectRunner::new(sheet);
        let mut state = AppState::new();

        runner.dispatch(&mut state, Msg::PageRequested).await;

        assert_eq!(
            state.view().results,
            ResultsView::Rows(vec![
                SheetRow::new("https://a", "ゆうと", "家電"),
                SheetRow::new("https://b", "", ""),
            ])
        );
    }

    #[tokio::test]
    async fn page_request_reports_read_failure() {
        wishlist_logging::initialize_for_tests();
        let sheet = Arc::new(InMemorySheet::new());
        sheet.set_failure(Some(FailureKind::Timeout));
        let runner = EffectRunner::new(sheet);
        let mut state = AppState::new();

        runner.dispatch(&mut state, Msg::PageRequested).await;

        assert!(matches!(state.view().results, ResultsView::Unavailable(reason) if reason.contains("timeout")));
    }
}
