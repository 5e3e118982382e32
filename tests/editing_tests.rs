//! Integrationstests für die Editier-Operationen:
//! - Trash mit Vertex-Selektion (Reihenfolge, ungültige Geometrie)
//! - Lösch-Strategien `deleteFeature` / `toDefault`
//! - Midpoint-Einfügen
//! - Setup-Fehler

use geo_direct_select::{
    AppController, AppIntent, AppState, DirectSelectOptions, Feature, Geometry, PointerEvent,
    PointerTarget,
};
use glam::DVec2;

fn polygon(id: &str, ring: &[(f64, f64)]) -> Feature {
    Feature::new(
        id,
        Geometry::Polygon(vec![ring.iter().map(|&(x, y)| DVec2::new(x, y)).collect()]),
    )
}

fn square() -> Feature {
    polygon("sq", &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
}

fn run(controller: &mut AppController, state: &mut AppState, intents: Vec<AppIntent>) {
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }
}

fn enter(id: &str, coord_path: Option<&str>) -> AppIntent {
    AppIntent::EnterDirectSelectRequested {
        options: DirectSelectOptions {
            feature_id: Some(id.into()),
            coord_path: coord_path.map(|p| p.parse().expect("gültiger Pfad")),
            start_pos: None,
        },
    }
}

fn shift_select(id: &str, path: &str, at: DVec2) -> Vec<AppIntent> {
    let event = PointerEvent::at(
        at,
        PointerTarget::Vertex {
            feature_id: id.into(),
            coord_path: path.parse().expect("gültiger Pfad"),
        },
    )
    .with_shift();
    vec![AppIntent::PointerDown(event.clone()), AppIntent::PointerUp(event)]
}

fn key(name: &str) -> AppIntent {
    AppIntent::KeyPressed { key: name.into() }
}

// ─── Trash mit Selektion ─────────────────────────────────────────────────────

#[test]
fn test_trash_two_vertices_of_pentagon_keeps_valid_polygon() {
    let mut controller = AppController::new();
    let mut state = AppState::with_features([polygon(
        "penta",
        &[(0.0, 0.0), (0.0, 2.0), (1.0, 3.0), (2.0, 2.0), (2.0, 0.0)],
    )]);

    let mut intents = vec![enter("penta", Some("0.1"))];
    intents.extend(shift_select("penta", "0.3", DVec2::new(2.0, 2.0)));
    intents.push(key("Backspace"));
    run(&mut controller, &mut state, intents);

    assert_eq!(
        state.features["penta"].geometry.coordinates(),
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 3.0),
            DVec2::new(2.0, 0.0)
        ]
    );
    assert_eq!(controller.mode().name(), "direct_select");
    assert!(!state.ui.actionable.trash);
    assert!(state.ui.selected_coordinates.is_empty());
    assert_eq!(state.events.iter().filter(|e| e.is_update()).count(), 1);
}

#[test]
fn test_trash_leaving_degenerate_ring_deletes_feature_and_exits() {
    let mut controller = AppController::new();
    let mut state = AppState::with_features([square(), polygon("other", &[(5.0, 5.0), (5.0, 6.0), (6.0, 6.0)])]);

    let mut intents = vec![enter("sq", Some("0.0"))];
    intents.extend(shift_select("sq", "0.2", DVec2::new(1.0, 1.0)));
    intents.push(AppIntent::TrashRequested);
    run(&mut controller, &mut state, intents);

    assert!(!state.features.contains_key("sq"));
    assert!(state.features.contains_key("other"));
    assert_eq!(controller.mode().name(), "simple_select");
    assert!(state.ui.selected_feature_ids.is_empty());
    assert!(state.ui.double_click_zoom_enabled);
}

#[test]
fn test_trash_on_line_with_single_remaining_vertex_deletes_feature() {
    let mut controller = AppController::new();
    let mut state = AppState::with_features([Feature::new(
        "line",
        Geometry::LineString(vec![DVec2::ZERO, DVec2::new(1.0, 1.0)]),
    )]);

    run(
        &mut controller,
        &mut state,
        vec![enter("line", Some("1")), key("Delete")],
    );

    assert_eq!(state.feature_count(), 0);
    assert_eq!(controller.mode().name(), "simple_select");
}

// ─── Lösch-Strategien ────────────────────────────────────────────────────────

#[test]
fn test_delete_feature_strategy_removes_whole_feature() {
    let mut controller = AppController::new();
    let mut state =
        AppState::with_features([square().with_property("vertexDelete", "deleteFeature")]);

    run(
        &mut controller,
        &mut state,
        vec![enter("sq", Some("0.2")), AppIntent::TrashRequested],
    );

    assert_eq!(state.feature_count(), 0);
    assert_eq!(controller.mode().name(), "simple_select");
}

#[test]
fn test_to_default_strategy_resets_overrides_and_deletes_vertex() {
    let mut controller = AppController::new();
    let mut state = AppState::with_features([polygon(
        "penta",
        &[(0.0, 0.0), (0.0, 2.0), (1.0, 3.0), (2.0, 2.0), (2.0, 0.0)],
    )
    .with_property("vertexDelete", "toDefault")
    .with_property("midpoints", false)
    .with_property("label", "Wiese")]);

    run(
        &mut controller,
        &mut state,
        vec![enter("penta", Some("0.2")), AppIntent::TrashRequested],
    );

    let feature = &state.features["penta"];
    assert_eq!(feature.geometry.coordinate_count(), 4);
    assert!(feature.properties.get("vertexDelete").is_none());
    assert!(feature.properties.get("midpoints").is_none());
    assert_eq!(feature.properties["label"], "Wiese");
    assert_eq!(controller.mode().name(), "direct_select");
}

#[test]
fn test_trash_without_selection_deletes_feature() {
    let mut controller = AppController::new();
    let mut state = AppState::with_features([square()]);

    run(
        &mut controller,
        &mut state,
        vec![enter("sq", None), AppIntent::TrashRequested],
    );

    assert_eq!(state.feature_count(), 0);
    assert_eq!(controller.mode().name(), "simple_select");
}

// ─── Midpoints ───────────────────────────────────────────────────────────────

#[test]
fn test_midpoint_drag_inserts_vertex_on_closing_edge() {
    let mut controller = AppController::new();
    let mut state = AppState::with_features([square()]);

    let midpoint = PointerEvent::at(
        DVec2::new(0.5, 0.0),
        PointerTarget::Midpoint {
            feature_id: "sq".into(),
            coord_path: "0.4".parse().unwrap(),
            lng_lat: DVec2::new(0.5, 0.0),
        },
    );
    run(
        &mut controller,
        &mut state,
        vec![
            enter("sq", None),
            AppIntent::PointerDown(midpoint),
            AppIntent::Drag(PointerEvent::at(DVec2::new(0.5, -1.0), PointerTarget::None)),
            AppIntent::PointerUp(PointerEvent::at(DVec2::new(0.5, -1.0), PointerTarget::None)),
        ],
    );

    let coords = state.features["sq"].geometry.coordinates();
    assert_eq!(coords.len(), 5);
    assert_eq!(coords[4], DVec2::new(0.5, -1.0));
    // Einfügen + Drag-Ende
    assert_eq!(state.events.iter().filter(|e| e.is_update()).count(), 2);
    assert!(state.ui.actionable.trash);
}

// ─── Setup-Fehler ────────────────────────────────────────────────────────────

#[test]
fn test_point_feature_cannot_enter_direct_select() {
    let mut controller = AppController::new();
    let mut state =
        AppState::with_features([Feature::new("pt", Geometry::Point(DVec2::new(3.0, 4.0)))]);

    let result = controller.handle_intent(&mut state, enter("pt", None));

    let err = result.expect_err("Punkt-Features sind nicht editierbar");
    assert!(format!("{err:#}").contains("pt"));
    assert_eq!(controller.mode().name(), "simple_select");
    assert!(state.ui.double_click_zoom_enabled);
}

#[test]
fn test_invalid_preselected_path_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::with_features([square()]);

    run(&mut controller, &mut state, vec![enter("sq", Some("0.17"))]);

    assert_eq!(controller.mode().name(), "direct_select");
    assert!(state.ui.selected_coordinates.is_empty());
    assert!(!state.ui.actionable.trash);
}
