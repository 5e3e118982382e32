use geo_direct_select::{
    AppCommand, AppController, AppIntent, AppState, DirectSelectOptions, FeatureCollection,
    ModeChange, PointerEvent, PointerTarget,
};
use glam::DVec2;
use serde_json::json;

fn load(collection: serde_json::Value) -> AppState {
    let collection: FeatureCollection =
        serde_json::from_value(collection).expect("FeatureCollection sollte parsebar sein");
    let mut state = AppState::new();
    state
        .load_collection(collection)
        .expect("Features sollten ladbar sein");
    state
}

fn rectangle_state(modify: Option<&str>) -> AppState {
    let mut properties = serde_json::Map::new();
    if let Some(modify) = modify {
        properties.insert("modify".into(), json!(modify));
    }
    load(json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "id": "rect",
            "properties": properties,
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]]
            }
        }]
    }))
}

fn enter(controller: &mut AppController, state: &mut AppState, coord_path: Option<&str>) {
    let options = DirectSelectOptions {
        feature_id: Some("rect".into()),
        coord_path: coord_path.map(|p| p.parse().expect("gültiger Pfad")),
        start_pos: None,
    };
    controller
        .handle_intent(state, AppIntent::EnterDirectSelectRequested { options })
        .expect("Direct-Select sollte starten");
}

fn vertex(path: &str, x: f64, y: f64) -> PointerEvent {
    PointerEvent::at(
        DVec2::new(x, y),
        PointerTarget::Vertex {
            feature_id: "rect".into(),
            coord_path: path.parse().expect("gültiger Pfad"),
        },
    )
}

fn nowhere(x: f64, y: f64) -> PointerEvent {
    PointerEvent::at(DVec2::new(x, y), PointerTarget::None)
}

#[test]
fn test_enter_direct_select_logs_mode_change_and_selects_feature() {
    let mut controller = AppController::new();
    let mut state = rectangle_state(None);

    enter(&mut controller, &mut state, Some("0.1"));

    assert_eq!(controller.mode().name(), "direct_select");
    assert_eq!(state.ui.selected_feature_ids, vec!["rect".to_string()]);
    assert!(state.ui.actionable.trash);
    assert!(!state.ui.double_click_zoom_enabled);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::ChangeMode(ModeChange::DirectSelect(options)) => {
            assert_eq!(options.feature_id.as_deref(), Some("rect"));
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_vertex_drag_emits_live_updates_and_one_commit() {
    let mut controller = AppController::new();
    let mut state = rectangle_state(None);
    enter(&mut controller, &mut state, None);

    for intent in [
        AppIntent::PointerDown(vertex("0.2", 1.0, 1.0)),
        AppIntent::Drag(nowhere(1.25, 1.0)),
        AppIntent::Drag(nowhere(1.5, 1.5)),
        AppIntent::PointerUp(nowhere(1.5, 1.5)),
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    let events = state.take_events();
    assert_eq!(events.len(), 3);
    assert!(events[0].is_live_update());
    assert!(events[1].is_live_update());
    assert!(events[2].is_update());

    let committed = serde_json::to_value(&events[2].features()[0]).unwrap();
    assert_eq!(
        committed["geometry"]["coordinates"],
        json!([[[0.0, 0.0], [0.0, 1.0], [1.5, 1.5], [1.0, 0.0], [0.0, 0.0]]])
    );
    assert!(state.ui.drag_pan_enabled);
}

#[test]
fn test_touch_sequence_behaves_like_mouse() {
    let mut controller = AppController::new();
    let mut state = rectangle_state(None);
    enter(&mut controller, &mut state, None);

    for intent in [
        AppIntent::TouchStart(vertex("0.0", 0.0, 0.0)),
        AppIntent::Drag(nowhere(-0.5, 0.0)),
        AppIntent::TouchEnd(nowhere(-0.5, 0.0)),
    ] {
        controller.handle_intent(&mut state, intent).unwrap();
    }

    assert_eq!(state.events.iter().filter(|e| e.is_update()).count(), 1);
    assert_eq!(state.features["rect"].geometry.coordinates()[0], DVec2::new(-0.5, 0.0));
}

#[test]
fn test_anchor_scaling_through_controller() {
    let mut controller = AppController::new();
    let mut state = rectangle_state(Some("anchor"));
    enter(&mut controller, &mut state, None);

    controller
        .handle_intent(&mut state, AppIntent::PointerDown(vertex("0.2", 1.0, 1.0)))
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::Drag(nowhere(2.0, 1.0)))
        .unwrap();

    // Während des Drags trägt der Export den Anker
    let live = serde_json::to_value(&state.events[0].features()[0]).unwrap();
    assert_eq!(live["properties"]["_anchor"], json!([0.0, 0.0]));

    controller
        .handle_intent(&mut state, AppIntent::PointerUp(nowhere(2.0, 1.0)))
        .unwrap();

    let collection = serde_json::to_value(state.to_collection()).unwrap();
    let feature = &collection["features"][0];
    assert_eq!(
        feature["geometry"]["coordinates"],
        json!([[[0.0, 0.0], [0.0, 1.0], [2.0, 1.0], [2.0, 0.0], [0.0, 0.0]]])
    );
    assert!(feature["properties"].get("_anchor").is_none());
    assert_eq!(feature["properties"]["modify"], json!("anchor"));
}

#[test]
fn test_click_on_empty_map_returns_to_simple_select() {
    let mut controller = AppController::new();
    let mut state = rectangle_state(None);
    enter(&mut controller, &mut state, Some("0.0"));

    controller
        .handle_intent(&mut state, AppIntent::Click(nowhere(5.0, 5.0)))
        .unwrap();

    assert_eq!(controller.mode().name(), "simple_select");
    assert!(state.ui.double_click_zoom_enabled);
    assert!(state.ui.selected_coordinates.is_empty());
    assert!(state.ui.selected_feature_ids.is_empty());
}

#[test]
fn test_escape_commits_open_drag_and_stops_it() {
    let mut controller = AppController::new();
    let mut state = rectangle_state(None);
    enter(&mut controller, &mut state, None);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDown(PointerEvent::at(
                DVec2::new(0.5, 0.5),
                PointerTarget::Feature {
                    feature_id: "rect".into(),
                },
            )),
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::Drag(nowhere(1.5, 0.5)))
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::KeyPressed {
                key: "Escape".into(),
            },
        )
        .unwrap();

    assert_eq!(state.events.iter().filter(|e| e.is_update()).count(), 1);
    let mode = controller
        .mode()
        .as_direct_select()
        .expect("Direct-Select bleibt aktiv");
    assert!(!mode.drag().can_drag_move);
    assert!(state.ui.drag_pan_enabled);
}

#[test]
fn test_display_features_follow_active_mode() {
    let mut controller = AppController::new();
    let mut state = rectangle_state(None);
    enter(&mut controller, &mut state, Some("0.3"));

    let display = controller.display_features(&mut state);
    // Basis + 4 Midpoints + 4 Vertices
    assert_eq!(display.len(), 9);
    assert_eq!(display[0].property_str("active"), Some("true"));
    assert_eq!(display[1].property_str("meta"), Some("midpoint"));
    assert_eq!(display[8].property_str("meta"), Some("vertex"));

    controller
        .handle_intent(&mut state, AppIntent::ExitToSimpleSelectRequested)
        .unwrap();
    let display = controller.display_features(&mut state);
    assert_eq!(display.len(), 1);
    assert_eq!(display[0].property_str("active"), Some("false"));
}

#[test]
fn test_pointer_events_in_simple_select_are_ignored() {
    let mut controller = AppController::new();
    let mut state = rectangle_state(None);

    controller
        .handle_intent(&mut state, AppIntent::PointerDown(vertex("0.0", 0.0, 0.0)))
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::Drag(nowhere(3.0, 3.0)))
        .unwrap();

    assert!(state.events.is_empty());
    assert_eq!(state.features["rect"].geometry.coordinates()[0], DVec2::ZERO);
    assert_eq!(state.command_log.len(), 2);
}

#[test]
fn test_pointer_move_after_drag_commits_once() {
    let mut controller = AppController::new();
    let mut state = rectangle_state(None);
    enter(&mut controller, &mut state, None);

    for intent in [
        AppIntent::PointerDown(vertex("0.1", 0.0, 1.0)),
        AppIntent::Drag(nowhere(-0.5, 1.5)),
        AppIntent::PointerMove(nowhere(-0.5, 1.5)),
        AppIntent::PointerMove(nowhere(-0.6, 1.6)),
    ] {
        controller.handle_intent(&mut state, intent).unwrap();
    }

    let updates: Vec<_> = state.events.iter().filter(|e| e.is_update()).collect();
    assert_eq!(updates.len(), 1);
    let committed = serde_json::to_value(&updates[0].features()[0]).unwrap();
    assert_eq!(committed["geometry"]["coordinates"][0][1], json!([-0.5, 1.5]));
    assert!(state.ui.drag_pan_enabled);
}

#[test]
fn test_command_log_totals_cover_whole_session() {
    let mut controller = AppController::new();
    let mut state = rectangle_state(None);
    enter(&mut controller, &mut state, None);

    for intent in [
        AppIntent::TouchStart(vertex("0.0", 0.0, 0.0)),
        AppIntent::Drag(nowhere(0.0, -0.5)),
        AppIntent::TouchEnd(nowhere(0.0, -0.5)),
        AppIntent::KeyPressed { key: "x".into() },
    ] {
        controller.handle_intent(&mut state, intent).unwrap();
    }

    assert_eq!(
        state.command_log.summary(),
        "change_mode=1 pointer_down=1 drag=1 pointer_up=1"
    );
}
