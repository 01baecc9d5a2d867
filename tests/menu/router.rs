use crate::support::FakeCollaborators;
use bee_tray::menu::{EventRouter, HandlerResult, MenuAction};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn start_bee_calls_start_exactly_once() {
    // Arrange
    let collaborators = FakeCollaborators::new(true, false);
    let router = EventRouter::new(Arc::clone(&collaborators));

    // Act
    let result = router.dispatch(MenuAction::StartBee).await.unwrap();

    // Assert
    assert_eq!(result, HandlerResult::Continue);
    assert_eq!(collaborators.calls(), vec!["start"]);
}

#[tokio::test]
async fn simple_actions_reach_their_collaborator() {
    let cases = [
        (MenuAction::StopBee, "stop"),
        (MenuAction::OpenWebUi, "open_dashboard"),
        (MenuAction::OpenInstaller, "open_installer"),
    ];

    for (action, expected_call) in cases {
        let collaborators = FakeCollaborators::new(true, true);
        let router = EventRouter::new(Arc::clone(&collaborators));

        let result = router.dispatch(action).await.unwrap();

        assert_eq!(result, HandlerResult::Continue, "action: {:?}", action);
        assert_eq!(collaborators.calls(), vec![expected_call], "action: {:?}", action);
    }
}

#[tokio::test]
async fn quit_terminates_without_touching_bee() {
    // Arrange
    let collaborators = FakeCollaborators::new(false, true);
    let router = EventRouter::new(Arc::clone(&collaborators));

    // Act
    let result = router.dispatch(MenuAction::Quit).await.unwrap();

    // Assert
    assert_eq!(result, HandlerResult::Quit);
    assert!(collaborators.calls().is_empty());
}

#[tokio::test]
async fn stop_and_quit_waits_for_stop_before_quitting() {
    // Arrange
    let collaborators = FakeCollaborators::new(true, true);
    let router = Arc::new(EventRouter::new(Arc::clone(&collaborators)));
    let task_router = Arc::clone(&router);

    // Act
    let task = tokio::spawn(async move { task_router.dispatch(MenuAction::StopAndQuit).await });
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    let finished_before_release = task.is_finished();
    let calls_before_release = collaborators.calls();
    collaborators.release_stop();
    let result = tokio::time::timeout(Duration::from_secs(1), task)
        .await
        .expect("exit should finish once stop completes")
        .unwrap()
        .unwrap();

    // Assert
    assert!(!finished_before_release);
    assert_eq!(calls_before_release, vec!["stop"]);
    assert_eq!(result, HandlerResult::Quit);
    assert_eq!(collaborators.calls(), vec!["stop", "stop_completed"]);
}

#[tokio::test]
async fn stop_and_quit_quits_when_stop_fails() {
    let collaborators = FakeCollaborators::new(true, true);
    collaborators.fail_stop();
    let router = EventRouter::new(Arc::clone(&collaborators));

    let result = tokio::time::timeout(
        Duration::from_secs(1),
        router.dispatch(MenuAction::StopAndQuit),
    )
    .await
    .expect("a failed stop should not be awaited")
    .unwrap();

    assert_eq!(result, HandlerResult::Quit);
    assert_eq!(collaborators.calls(), vec!["stop"]);
}

#[tokio::test]
async fn collaborator_errors_propagate_from_dispatch() {
    let collaborators = FakeCollaborators::new(true, false);
    collaborators.fail_start();
    let router = EventRouter::new(Arc::clone(&collaborators));

    let result = router.dispatch(MenuAction::StartBee).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn repeated_clicks_are_not_debounced() {
    let collaborators = FakeCollaborators::new(true, false);
    let router = EventRouter::new(Arc::clone(&collaborators));

    router.dispatch(MenuAction::StartBee).await.unwrap();
    router.dispatch(MenuAction::StartBee).await.unwrap();

    assert_eq!(collaborators.calls(), vec!["start", "start"]);
}

#[tokio::test]
async fn route_resolves_menu_ids() {
    // Arrange
    let collaborators = FakeCollaborators::new(true, true);
    let router = EventRouter::new(Arc::clone(&collaborators));

    // Act
    let result = router.route(MenuAction::OpenWebUi.id()).await.unwrap();

    // Assert
    assert_eq!(result, HandlerResult::Continue);
    assert_eq!(collaborators.calls(), vec!["open_dashboard"]);
}

#[tokio::test]
async fn route_returns_continue_for_unknown_ids() {
    // Arrange
    let collaborators = FakeCollaborators::new(true, true);
    let router = EventRouter::new(Arc::clone(&collaborators));

    // Act
    let result = router.route("bee::restart").await.unwrap();

    // Assert
    assert_eq!(result, HandlerResult::Continue);
    assert!(collaborators.calls().is_empty());
}
