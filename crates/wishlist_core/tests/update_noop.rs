use wishlist_core::{update, AppState, Msg};

#[test]
fn actions_on_an_empty_list_change_nothing() {
    let state = AppState::new();

    for msg in [
        Msg::DeleteCancelled,
        Msg::ClearClicked,
        Msg::CopyClicked,
        Msg::FavoriteToggled { position: 1 },
        Msg::DeleteRequested { position: 1 },
        Msg::DeleteConfirmed { position: 1 },
    ] {
        let (next, effects) = update(state.clone(), msg);
        assert_eq!(state, next);
        assert!(effects.is_empty());
    }
}
