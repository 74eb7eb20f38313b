use lecture_core::{
    update, AppState, Effect, Msg, Notification, Severity, COPY_FAILURE_TEXT, COPY_SUCCESS_TEXT,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    client_logging::initialize_for_tests();
}

#[test]
fn later_notification_overwrites_earlier() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Notify(Notification::info("first")));
    let (state, _) = update(state, Msg::Notify(Notification::error("second")));
    let (state, _) = update(state, Msg::Notify(Notification::success("third")));

    assert_eq!(
        state.view().notification,
        Some(Notification {
            text: "third".to_string(),
            severity: Severity::Success,
        })
    );
}

#[test]
fn dismiss_is_idempotent() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Notify(Notification::info("hello")));
    let (mut state, _) = update(state, Msg::NotificationDismissed);
    assert!(state.view().notification.is_none());
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::NotificationDismissed);
    assert!(state.view().notification.is_none());
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn copy_of_empty_text_is_noop() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::CopyRequested(String::new()));

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn copy_emits_clipboard_effect_and_reports_outcome() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::CopyRequested("transcript".to_string()));
    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            text: "transcript".to_string(),
        }]
    );
    assert!(state.view().notification.is_none());

    let (state, _) = update(state, Msg::ClipboardFinished(Ok(())));
    assert_eq!(
        state.view().notification,
        Some(Notification::success(COPY_SUCCESS_TEXT))
    );

    let (state, _) = update(
        state,
        Msg::ClipboardFinished(Err("no display".to_string())),
    );
    assert_eq!(
        state.view().notification,
        Some(Notification::error(COPY_FAILURE_TEXT))
    );
}
