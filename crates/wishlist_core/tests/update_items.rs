use std::sync::Once;

use pretty_assertions::assert_eq;
use wishlist_core::{
    update, AppState, Effect, Msg, NoticeLevel, SheetRow,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(wishlist_logging::initialize_for_tests);
}

fn add(state: AppState, url: &str, submitter: &str, category: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::AddSubmitted {
            url: url.to_string(),
            submitter: submitter.to_string(),
            category: category.to_string(),
        },
    )
}

fn with_items(urls: &[&str]) -> AppState {
    urls.iter().fold(AppState::new(), |state, url| {
        let (state, _) = add(state, url, "ゆうと", "家電");
        state
    })
}

#[test]
fn add_appends_item_and_requests_one_sheet_row() {
    init_logging();
    let (state, effects) = add(AppState::new(), "https://example.com/tv", "なつみ", "家電");

    assert_eq!(state.items(), ["https://example.com/tv（家電 / by なつみ）"]);
    assert_eq!(
        effects,
        vec![Effect::AppendRow(SheetRow::new(
            "https://example.com/tv",
            "なつみ",
            "家電"
        ))]
    );
    assert_eq!(state.notices().len(), 1);
    assert_eq!(state.notices()[0].level, NoticeLevel::Success);
    assert_eq!(
        state.notices()[0].text,
        "✅ 'https://example.com/tv' を追加（家電 / なつみ）"
    );

    let view = state.view();
    assert_eq!(view.form.selected_submitter, "なつみ");
    assert_eq!(view.form.selected_category, "家電");
}

#[test]
fn surrounding_whitespace_is_kept_as_typed() {
    init_logging();
    let (state, effects) = add(AppState::new(), " https://example.com/sofa ", "ゆうと", "家具");

    assert_eq!(state.items(), [" https://example.com/sofa （家具 / by ゆうと）"]);
    assert_eq!(
        effects,
        vec![Effect::AppendRow(SheetRow::new(
            " https://example.com/sofa ",
            "ゆうと",
            "家具"
        ))]
    );
}

#[test]
fn add_with_empty_url_warns_without_mutation() {
    init_logging();
    let before = with_items(&["https://a.example.com"]);

    for url in ["", "   "] {
        let (state, effects) = add(before.clone(), url, "ゆうと", "家具");
        assert_eq!(state.items(), before.items());
        assert!(effects.is_empty());
        let last = state.notices().last().expect("warning notice");
        assert_eq!(last.level, NoticeLevel::Warning);
    }
}

#[test]
fn add_with_empty_category_warns_without_mutation() {
    init_logging();
    let (state, effects) = add(AppState::new(), "https://example.com", "ゆうと", "");

    assert!(state.items().is_empty());
    assert!(effects.is_empty());
    assert_eq!(state.notices()[0].level, NoticeLevel::Warning);
}

#[test]
fn add_without_submitter_uses_first_option() {
    init_logging();
    let (state, effects) = add(AppState::new(), "https://example.com", "", "食品");

    assert_eq!(state.items(), ["https://example.com（食品 / by ゆうと）"]);
    assert_eq!(
        effects,
        vec![Effect::AppendRow(SheetRow::new("https://example.com", "ゆうと", "食品"))]
    );
}

#[test]
fn append_failure_keeps_session_item() {
    init_logging();
    let (state, _) = add(AppState::new(), "https://example.com", "ゆうと", "食器");
    let (state, effects) = update(
        state,
        Msg::RowAppendFailed {
            reason: "http status 403".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.items().len(), 1);
    let last = state.notices().last().expect("error notice");
    assert_eq!(last.level, NoticeLevel::Error);
    assert_eq!(last.text, "❌ Google Sheetsへの保存に失敗しました: http status 403");
}

#[test]
fn append_success_adds_info_notice() {
    init_logging();
    let (state, _) = add(AppState::new(), "https://example.com", "ゆうと", "食器");
    let (state, _) = update(state, Msg::RowAppended);

    let levels: Vec<_> = state.notices().iter().map(|n| n.level).collect();
    assert_eq!(levels, vec![NoticeLevel::Success, NoticeLevel::Info]);
}

#[test]
fn confirmed_delete_removes_item_and_shifts_positions() {
    init_logging();
    let state = with_items(&["https://a", "https://b", "https://c"]);

    let (state, _) = update(state, Msg::DeleteRequested { position: 2 });
    assert_eq!(state.pending_delete(), Some(2));
    assert!(state.view().items[1].confirming_delete);

    let (state, effects) = update(state, Msg::DeleteConfirmed { position: 2 });
    assert!(effects.is_empty());
    assert_eq!(state.pending_delete(), None);

    let rows = state.view().items;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[0].text, "https://a（家電 / by ゆうと）");
    assert_eq!(rows[1].position, 2);
    assert_eq!(rows[1].text, "https://c（家電 / by ゆうと）");
}

#[test]
fn delete_requires_confirmation_of_the_pending_position() {
    init_logging();
    let state = with_items(&["https://a", "https://b"]);

    let (state, _) = update(state, Msg::DeleteConfirmed { position: 1 });
    assert_eq!(state.items().len(), 2);

    let (state, _) = update(state, Msg::DeleteRequested { position: 1 });
    let (state, _) = update(state, Msg::DeleteConfirmed { position: 2 });
    assert_eq!(state.items().len(), 2);

    let (state, _) = update(state, Msg::DeleteCancelled);
    let (state, _) = update(state, Msg::DeleteConfirmed { position: 1 });
    assert_eq!(state.items().len(), 2);
}

#[test]
fn out_of_range_positions_are_ignored() {
    init_logging();
    let state = with_items(&["https://a"]);

    let (next, _) = update(state.clone(), Msg::DeleteRequested { position: 0 });
    assert_eq!(next, state);
    let (next, _) = update(state.clone(), Msg::DeleteRequested { position: 2 });
    assert_eq!(next, state);
    let (next, _) = update(state.clone(), Msg::FavoriteToggled { position: 5 });
    assert_eq!(next, state);
}

#[test]
fn favorite_then_unfavorite_restores_set() {
    init_logging();
    let state = with_items(&["https://a", "https://b"]);
    let before = state.favorites().clone();

    let (state, _) = update(state, Msg::FavoriteToggled { position: 2 });
    assert!(state.favorites().contains("https://b（家電 / by ゆうと）"));
    assert!(state.view().items[1].favorite);
    assert!(!state.view().items[0].favorite);

    let (state, _) = update(state, Msg::FavoriteToggled { position: 2 });
    assert_eq!(state.favorites(), &before);
}

#[test]
fn duplicate_items_share_favorite_mark() {
    init_logging();
    let state = with_items(&["https://a", "https://a"]);
    let (state, _) = update(state, Msg::FavoriteToggled { position: 1 });

    let view = state.view();
    assert!(view.items.iter().all(|row| row.favorite));
}

#[test]
fn favorites_survive_delete_and_clear() {
    init_logging();
    let state = with_items(&["https://a"]);
    let (state, _) = update(state, Msg::FavoriteToggled { position: 1 });
    let (state, _) = update(state, Msg::ClearClicked);

    assert!(state.items().is_empty());
    assert_eq!(state.favorites().len(), 1);
}

#[test]
fn clear_banner_is_shown_on_exactly_one_render() {
    init_logging();
    let state = with_items(&["https://a", "https://b"]);
    let (state, _) = update(state, Msg::PageRendered);

    let (state, _) = update(state, Msg::ClearClicked);
    assert!(state.items().is_empty());

    let view = state.view();
    assert!(view.cleared);
    let (state, _) = update(state, Msg::PageRendered);

    assert!(!state.view().cleared);
    assert!(state.notices().is_empty());
}

#[test]
fn clear_on_empty_list_does_nothing() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ClearClicked);
    assert!(!state.view().cleared);
}

#[test]
fn copy_renders_numbered_list_once() {
    init_logging();
    let state = with_items(&["https://a", "https://b"]);
    let (state, effects) = update(state, Msg::CopyClicked);

    assert!(effects.is_empty());
    assert_eq!(
        state.view().copy_text.as_deref(),
        Some("1. https://a（家電 / by ゆうと）\n2. https://b（家電 / by ゆうと）")
    );

    let (state, _) = update(state, Msg::PageRendered);
    assert_eq!(state.view().copy_text, None);
    assert_eq!(state.items().len(), 2);
}
