use speedgolf_course_mapper::map::LayerKind;
use speedgolf_course_mapper::{
    feature_id, AppCommand, AppController, AppIntent, AppState, Course, DrawMode, DrawTool,
    FeatureType, HeadlessDrawTool, HeadlessMap, Hole, LngLat, MapHandle, MarkerId, MarkerRole,
    ScreenPoint,
};

struct Harness {
    controller: AppController,
    state: AppState,
    map: HeadlessMap,
    draw: HeadlessDrawTool,
}

impl Harness {
    fn new(course: Course) -> Self {
        Self {
            controller: AppController::new(),
            state: AppState::with_course(course),
            map: HeadlessMap::new(),
            draw: HeadlessDrawTool::new(),
        }
    }

    fn send(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, &mut self.map, &mut self.draw, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    fn show_tee(&mut self, tee: &str) {
        self.send(AppIntent::TeeChanged {
            tee: tee.to_string(),
        });
    }

    fn define(&mut self, hole: u32, feature_type: FeatureType, coords: Vec<LngLat>) {
        self.send(AppIntent::DefineFeatureRequested { hole, feature_type });
        self.draw.draw(coords);
        self.send(AppIntent::DrawCompleted);
    }

    fn marker(&self, tee: &str, hole: u32, role: MarkerRole) -> Option<MarkerId> {
        self.state
            .registry
            .marker(tee, hole, role)
            .expect("Tee sollte registriert sein")
    }

    fn marker_position(&self, id: MarkerId) -> LngLat {
        self.map
            .marker(id)
            .expect("Marker sollte auf der Karte liegen")
            .position
    }
}

fn three_hole_course() -> Course {
    Course::new("Testkurs")
        .with_tee("Blue", 3)
        .with_tee("White", 3)
}

fn ll(lat: f64, lng: f64) -> LngLat {
    LngLat::new(lat, lng)
}

fn assert_same_spot(a: LngLat, b: LngLat) {
    assert!(
        (a.lat - b.lat).abs() < 1e-12 && (a.lng - b.lng).abs() < 1e-12,
        "{a:?} != {b:?}"
    );
}

#[test]
fn test_golf_path_creates_tee_and_flag_markers_at_endpoints() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");

    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);

    let tee = h.marker("Blue", 1, MarkerRole::Tee).expect("Tee-Marker Loch 1");
    let flag = h.marker("Blue", 1, MarkerRole::Flag).expect("Flaggen-Marker Loch 1");
    assert_same_spot(h.marker_position(tee), ll(0.0, 0.0));
    assert_same_spot(h.marker_position(flag), ll(0.001, 0.0));
    assert_eq!(h.map.marker_count(), 2);

    let id = feature_id("Blue", 1, FeatureType::GolfPath);
    assert!(h.map.is_layer_visible(&id));
    assert!(!h.state.is_defining());
    assert_eq!(h.draw.mode(), &DrawMode::SimpleSelect);

    let hole = h
        .state
        .course
        .course()
        .hole("Blue", 1)
        .expect("Loch 1 sollte existieren");
    assert_eq!(hole.golf_path.as_ref().map(Vec::len), Some(2));
    assert!(
        hole.golf_path_sampled.as_ref().map_or(0, Vec::len) > 2,
        "Abgetasteter Pfad sollte dichter sein als der gezeichnete"
    );
    assert_eq!(h.state.course.dispatched().len(), 1);
}

#[test]
fn test_transition_path_snaps_to_previous_flag() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);

    h.define(
        2,
        FeatureType::TransitionPath,
        vec![ll(0.0012, 0.0003), ll(0.0015, 0.0006)],
    );

    let hole2 = h
        .state
        .course
        .course()
        .hole("Blue", 2)
        .expect("Loch 2 sollte existieren");
    let transition = hole2
        .transition_path
        .as_ref()
        .expect("Übergangspfad sollte committet sein");
    assert_same_spot(transition[0].lng_lat(), ll(0.001, 0.0));
    assert_same_spot(transition[1].lng_lat(), ll(0.0015, 0.0006));

    // Flagge von Loch 1 bleibt derselbe Marker, Tee von Loch 2 kommt hinzu
    let tee2 = h.marker("Blue", 2, MarkerRole::Tee).expect("Tee-Marker Loch 2");
    assert_same_spot(h.marker_position(tee2), ll(0.0015, 0.0006));
    assert_eq!(h.map.marker_count(), 3);
}

#[test]
fn test_dragging_tee_marker_updates_both_adjacent_paths() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);
    h.define(
        2,
        FeatureType::TransitionPath,
        vec![ll(0.001, 0.0), ll(0.0015, 0.0005)],
    );
    h.define(
        2,
        FeatureType::GolfPath,
        vec![ll(0.0015, 0.0005), ll(0.0025, 0.0005)],
    );
    h.state.course.drain_dispatched();

    let tee2 = h.marker("Blue", 2, MarkerRole::Tee).expect("Tee-Marker Loch 2");
    h.send(AppIntent::MarkerDragEnded {
        marker: tee2,
        position: ll(0.0018, 0.0007),
    });

    let updates = h.state.course.drain_dispatched();
    assert_eq!(updates.len(), 2);
    assert!(updates
        .iter()
        .any(|u| u.hole_num == 2 && u.feature_type == FeatureType::TransitionPath));
    assert!(updates
        .iter()
        .any(|u| u.hole_num == 2 && u.feature_type == FeatureType::GolfPath));

    let hole2 = h
        .state
        .course
        .course()
        .hole("Blue", 2)
        .expect("Loch 2 sollte existieren");
    let transition = hole2.transition_path.as_ref().expect("Übergangspfad");
    let golf = hole2.golf_path.as_ref().expect("Golfpfad");
    assert_same_spot(
        transition.last().expect("nicht leer").lng_lat(),
        ll(0.0018, 0.0007),
    );
    assert_same_spot(golf[0].lng_lat(), ll(0.0018, 0.0007));
    assert!(updates.iter().all(|u| u.sampled_path_coords.is_some()));
    let transition_sampled = hole2.transition_path_sampled.as_ref().expect("abgetastet");
    let golf_sampled = hole2.golf_path_sampled.as_ref().expect("abgetastet");
    assert_same_spot(
        transition_sampled.last().expect("nicht leer").lng_lat(),
        ll(0.0018, 0.0007),
    );
    assert_same_spot(golf_sampled[0].lng_lat(), ll(0.0018, 0.0007));
    // Andere Enden bleiben unverändert
    assert_same_spot(transition[0].lng_lat(), ll(0.001, 0.0));
    assert_same_spot(golf[1].lng_lat(), ll(0.0025, 0.0005));
}

#[test]
fn test_drag_of_unknown_marker_changes_nothing() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");

    h.send(AppIntent::MarkerDragEnded {
        marker: MarkerId(999),
        position: ll(1.0, 1.0),
    });

    assert!(h.state.course.dispatched().is_empty());
}

#[test]
fn test_switching_tee_hides_previous_and_builds_new() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);
    h.define(
        1,
        FeatureType::Green,
        vec![ll(0.001, 0.0), ll(0.0011, 0.0), ll(0.0011, 0.0001)],
    );
    let blue_golf = feature_id("Blue", 1, FeatureType::GolfPath);
    let blue_green = feature_id("Blue", 1, FeatureType::Green);
    let blue_tee = h.marker("Blue", 1, MarkerRole::Tee).expect("Tee-Marker");

    h.show_tee("White");

    assert_eq!(h.state.displayed_tee.as_deref(), Some("White"));
    assert!(h.state.registry.contains_tee("White"));
    assert!(h.map.has_layer(&blue_golf));
    assert!(!h.map.is_layer_visible(&blue_golf));
    assert!(!h.map.is_layer_visible(&blue_green));
    assert!(!h.map.marker(blue_tee).expect("Marker bleibt erhalten").visible);

    h.show_tee("Blue");

    assert!(h.map.is_layer_visible(&blue_golf));
    assert!(h.map.is_layer_visible(&blue_green));
    assert!(h.map.marker(blue_tee).expect("Marker bleibt erhalten").visible);
}

#[test]
fn test_displaying_tee_with_existing_data_draws_features_and_markers() {
    let mut course = three_hole_course();
    {
        let mut h = Harness::new(course.clone());
        h.show_tee("Blue");
        h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);
        course = h.state.course.into_course();
    }

    let mut h = Harness::new(course);
    h.show_tee("Blue");

    let id = feature_id("Blue", 1, FeatureType::GolfPath);
    assert!(h.map.is_layer_visible(&id));
    assert!(h.marker("Blue", 1, MarkerRole::Tee).is_some());
    assert!(h.marker("Blue", 1, MarkerRole::Flag).is_some());
    assert!(h.state.course.dispatched().is_empty());
}

#[test]
fn test_delete_golf_path_removes_orphaned_markers() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);
    let id = feature_id("Blue", 1, FeatureType::GolfPath);

    h.send(AppIntent::FeatureRowSelected {
        hole: 1,
        feature_type: FeatureType::GolfPath,
        explicit_id: None,
    });
    assert_eq!(h.state.selected_feature(), Some(id.as_str()));
    h.send(AppIntent::DeleteSelectedRequested);

    assert!(h.state.selected_feature().is_none());
    assert!(!h.map.has_layer(&id));
    assert!(h.marker("Blue", 1, MarkerRole::Tee).is_none());
    assert!(h.marker("Blue", 1, MarkerRole::Flag).is_none());
    assert_eq!(h.map.marker_count(), 0);

    let hole = h
        .state
        .course
        .course()
        .hole("Blue", 1)
        .expect("Loch 1 sollte existieren");
    assert!(hole.golf_path.is_none());
    assert!(hole.golf_path_sampled.is_none());
    let last = h
        .state
        .course
        .dispatched()
        .last()
        .expect("Löschung sollte committet sein");
    assert!(last.is_cleared());
}

#[test]
fn test_delete_golf_path_keeps_flag_shared_with_transition() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);
    h.define(
        2,
        FeatureType::TransitionPath,
        vec![ll(0.001, 0.0), ll(0.0015, 0.0005)],
    );

    h.send(AppIntent::FeatureRowSelected {
        hole: 1,
        feature_type: FeatureType::GolfPath,
        explicit_id: None,
    });
    h.send(AppIntent::DeleteSelectedRequested);

    assert!(h.marker("Blue", 1, MarkerRole::Tee).is_none());
    assert!(h.marker("Blue", 1, MarkerRole::Flag).is_some());
    assert!(h.marker("Blue", 2, MarkerRole::Tee).is_some());
}

#[test]
fn test_click_selects_path_and_click_into_void_clears() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);
    let id = feature_id("Blue", 1, FeatureType::GolfPath);

    h.send(AppIntent::MapClicked {
        point: ScreenPoint::new(0.0, 0.0005),
    });

    assert_eq!(h.state.selected_feature(), Some(id.as_str()));
    let selected_width = h.state.options.line_width_selected;
    match &h.map.layer(&id).expect("Layer sollte existieren").kind {
        LayerKind::Line { width, .. } => assert_eq!(*width, selected_width),
        other => panic!("Unerwartete Layer-Art: {other:?}"),
    }

    h.send(AppIntent::MapClicked {
        point: ScreenPoint::new(1.0, 1.0),
    });

    assert!(h.state.selected_feature().is_none());
    let normal_width = h.state.options.line_width_normal;
    match &h.map.layer(&id).expect("Layer sollte existieren").kind {
        LayerKind::Line { width, .. } => assert_eq!(*width, normal_width),
        other => panic!("Unerwartete Layer-Art: {other:?}"),
    }
}

#[test]
fn test_click_while_drawing_does_not_select() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);
    h.send(AppIntent::DefineFeatureRequested {
        hole: 2,
        feature_type: FeatureType::GolfPath,
    });

    h.send(AppIntent::MapClicked {
        point: ScreenPoint::new(0.0, 0.0005),
    });

    assert!(h.state.selected_feature().is_none());
    assert!(h.state.is_defining());
}

#[test]
fn test_cancel_draw_returns_to_idle_without_commit() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");

    h.send(AppIntent::DefineFeatureRequested {
        hole: 1,
        feature_type: FeatureType::Teebox,
    });
    assert!(matches!(h.draw.mode(), DrawMode::DrawPolygon { .. }));
    h.draw.draw(vec![ll(0.0, 0.0), ll(0.0001, 0.0), ll(0.0001, 0.0001)]);
    h.send(AppIntent::DrawCancelled);

    assert!(!h.state.is_defining());
    assert_eq!(h.draw.mode(), &DrawMode::SimpleSelect);
    assert!(h.draw.get_all().is_empty());
    assert!(h.state.course.dispatched().is_empty());

    let last = h
        .state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::CancelDraw => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_define_without_displayed_tee_fails() {
    let mut controller = AppController::new();
    let mut state = AppState::with_course(three_hole_course());
    let mut map = HeadlessMap::new();
    let mut draw = HeadlessDrawTool::new();

    let result = controller.handle_intent(
        &mut state,
        &mut map,
        &mut draw,
        AppIntent::DefineFeatureRequested {
            hole: 1,
            feature_type: FeatureType::GolfPath,
        },
    );

    assert!(result.is_err());
    assert!(!state.is_defining());
}

#[test]
fn test_start_finish_toggle_hides_layers_and_marker() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    h.define(
        1,
        FeatureType::StartPath,
        vec![ll(-0.001, 0.0), ll(0.0, 0.0)],
    );
    let id = feature_id("Blue", 1, FeatureType::StartPath);
    let start = h.marker("Blue", 1, MarkerRole::Start).expect("Start-Marker");

    h.send(AppIntent::StartFinishVisibilityToggled {
        feature_type: FeatureType::StartPath,
        show: false,
    });

    assert!(!h.state.sf_visibility.start);
    assert!(!h.map.is_layer_visible(&id));
    assert!(!h.map.marker(start).expect("Marker").visible);
    // Tee-Marker von Loch 1 bleibt sichtbar
    let tee = h.marker("Blue", 1, MarkerRole::Tee).expect("Tee-Marker");
    assert!(h.map.marker(tee).expect("Marker").visible);

    h.send(AppIntent::StartFinishVisibilityToggled {
        feature_type: FeatureType::StartPath,
        show: true,
    });

    assert!(h.map.is_layer_visible(&id));
    assert!(h.map.marker(start).expect("Marker").visible);
}

#[test]
fn test_marker_hover_opens_and_closes_popup() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);
    let flag = h.marker("Blue", 1, MarkerRole::Flag).expect("Flaggen-Marker");

    h.send(AppIntent::MarkerHoverChanged {
        marker: flag,
        hovered: true,
    });
    assert!(h.map.marker(flag).expect("Marker").popup_open);
    assert_eq!(h.map.marker(flag).expect("Marker").spec.popup_text, "Hole 1 Flag");

    h.send(AppIntent::MarkerHoverChanged {
        marker: flag,
        hovered: false,
    });
    assert!(!h.map.marker(flag).expect("Marker").popup_open);
}

#[test]
fn test_redefining_path_keeps_existing_markers() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);
    let flag = h.marker("Blue", 1, MarkerRole::Flag).expect("Flaggen-Marker");

    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.002, 0.0)]);

    // Belegter Slot: Marker bleibt, wo er war
    assert_eq!(h.marker("Blue", 1, MarkerRole::Flag), Some(flag));
    assert_same_spot(h.marker_position(flag), ll(0.001, 0.0));
    assert_eq!(h.map.marker_count(), 2);
}

#[test]
fn test_redrawing_last_transition_leaves_tee_marker_on_golf_start() {
    let mut h = Harness::new(Course::new("Testkurs").with_tee("Blue", 2));
    h.show_tee("Blue");
    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);
    h.define(
        2,
        FeatureType::TransitionPath,
        vec![ll(0.001, 0.0), ll(0.0015, 0.0005)],
    );
    h.define(
        2,
        FeatureType::GolfPath,
        vec![ll(0.0015, 0.0005), ll(0.0025, 0.0005)],
    );
    let tee2 = h.marker("Blue", 2, MarkerRole::Tee).expect("Tee-Marker Loch 2");

    h.send(AppIntent::FeatureRowSelected {
        hole: 2,
        feature_type: FeatureType::TransitionPath,
        explicit_id: None,
    });
    h.send(AppIntent::DeleteSelectedRequested);
    // golf(2) hält den Tee-Marker am Leben
    assert_eq!(h.marker("Blue", 2, MarkerRole::Tee), Some(tee2));

    h.define(
        2,
        FeatureType::TransitionPath,
        vec![ll(0.0012, 0.0003), ll(0.0019, 0.0009)],
    );

    assert_eq!(h.marker("Blue", 2, MarkerRole::Tee), Some(tee2));
    assert_same_spot(h.marker_position(tee2), ll(0.0015, 0.0005));
    let golf2 = hole_of(&h, 2).golf_path.expect("Golfpfad Loch 2");
    assert_same_spot(golf2[0].lng_lat(), ll(0.0015, 0.0005));
}

/// Definiert golf(1) bis golf(3) samt Übergängen.
fn define_full_route(h: &mut Harness) {
    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);
    h.define(
        2,
        FeatureType::TransitionPath,
        vec![ll(0.001, 0.0), ll(0.0015, 0.0005)],
    );
    h.define(
        2,
        FeatureType::GolfPath,
        vec![ll(0.0015, 0.0005), ll(0.0025, 0.0005)],
    );
    h.define(
        3,
        FeatureType::TransitionPath,
        vec![ll(0.0025, 0.0005), ll(0.003, 0.001)],
    );
    h.define(
        3,
        FeatureType::GolfPath,
        vec![ll(0.003, 0.001), ll(0.004, 0.001)],
    );
}

fn hole_of(h: &Harness, hole: u32) -> Hole {
    h.state
        .course
        .course()
        .hole("Blue", hole)
        .expect("Loch sollte existieren")
        .clone()
}

#[test]
fn test_finish_path_snaps_to_second_to_last_flag_and_gets_finish_marker() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    define_full_route(&mut h);
    assert_eq!(h.map.marker_count(), 6);

    h.define(
        3,
        FeatureType::FinishPath,
        vec![ll(0.0031, 0.0006), ll(0.0045, 0.002)],
    );

    let finish = hole_of(&h, 3).finish_path.expect("Ziellinie committet");
    assert_same_spot(finish[0].lng_lat(), ll(0.0025, 0.0005));
    assert_same_spot(finish[1].lng_lat(), ll(0.0045, 0.002));

    let marker = h.marker("Blue", 3, MarkerRole::Finish).expect("Ziel-Marker");
    assert_same_spot(h.marker_position(marker), ll(0.0045, 0.002));
    assert_eq!(h.map.marker_count(), 7);

    h.send(AppIntent::FeatureRowSelected {
        hole: 3,
        feature_type: FeatureType::FinishPath,
        explicit_id: None,
    });
    h.send(AppIntent::DeleteSelectedRequested);

    assert!(h.marker("Blue", 3, MarkerRole::Finish).is_none());
    assert!(h.map.marker(marker).is_none());
    assert_eq!(h.map.marker_count(), 6);
    assert!(hole_of(&h, 3).finish_path.is_none());
    assert!(h.marker("Blue", 3, MarkerRole::Flag).is_some());
}

#[test]
fn test_dragging_second_to_last_flag_moves_finish_start() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    define_full_route(&mut h);
    h.define(
        3,
        FeatureType::FinishPath,
        vec![ll(0.0025, 0.0005), ll(0.0045, 0.002)],
    );
    h.state.course.drain_dispatched();

    let flag2 = h.marker("Blue", 2, MarkerRole::Flag).expect("Flagge Loch 2");
    h.send(AppIntent::MarkerDragEnded {
        marker: flag2,
        position: ll(0.0026, 0.0004),
    });

    let updates = h.state.course.drain_dispatched();
    assert_eq!(updates.len(), 3);
    assert!(updates
        .iter()
        .any(|u| u.hole_num == 3 && u.feature_type == FeatureType::FinishPath));

    let hole3 = hole_of(&h, 3);
    let finish = hole3.finish_path.as_ref().expect("Ziellinie");
    assert_same_spot(finish[0].lng_lat(), ll(0.0026, 0.0004));
    assert_same_spot(finish[1].lng_lat(), ll(0.0045, 0.002));
    let transition = hole3.transition_path.as_ref().expect("Übergangspfad");
    assert_same_spot(transition[0].lng_lat(), ll(0.0026, 0.0004));
    let golf2 = hole_of(&h, 2).golf_path.expect("Golfpfad Loch 2");
    assert_same_spot(golf2[1].lng_lat(), ll(0.0026, 0.0004));
}

#[test]
fn test_dragging_start_marker_moves_only_start_path() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);
    h.define(
        1,
        FeatureType::StartPath,
        vec![ll(-0.001, 0.0), ll(0.0001, 0.0001)],
    );
    // Ende der Startlinie snappt auf den Abschlag
    let start_path = hole_of(&h, 1).start_path.expect("Startlinie");
    assert_same_spot(start_path[1].lng_lat(), ll(0.0, 0.0));
    h.state.course.drain_dispatched();

    let start = h.marker("Blue", 1, MarkerRole::Start).expect("Start-Marker");
    h.send(AppIntent::MarkerDragEnded {
        marker: start,
        position: ll(-0.0012, 0.0002),
    });

    let updates = h.state.course.drain_dispatched();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].feature_type, FeatureType::StartPath);

    let hole1 = hole_of(&h, 1);
    let start_path = hole1.start_path.as_ref().expect("Startlinie");
    assert_same_spot(start_path[0].lng_lat(), ll(-0.0012, 0.0002));
    assert_same_spot(start_path[1].lng_lat(), ll(0.0, 0.0));
    let sampled = hole1.start_path_sampled.as_ref().expect("abgetastet");
    assert_same_spot(sampled[0].lng_lat(), ll(-0.0012, 0.0002));
    assert_same_spot(h.marker_position(start), ll(-0.0012, 0.0002));
}

#[test]
fn test_dragging_finish_marker_moves_finish_end() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    define_full_route(&mut h);
    h.define(
        3,
        FeatureType::FinishPath,
        vec![ll(0.0025, 0.0005), ll(0.0045, 0.002)],
    );
    h.state.course.drain_dispatched();

    let finish = h.marker("Blue", 3, MarkerRole::Finish).expect("Ziel-Marker");
    h.send(AppIntent::MarkerDragEnded {
        marker: finish,
        position: ll(0.005, 0.0025),
    });

    let updates = h.state.course.drain_dispatched();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].feature_type, FeatureType::FinishPath);
    let hole3 = hole_of(&h, 3);
    let path = hole3.finish_path.as_ref().expect("Ziellinie");
    assert_same_spot(path[0].lng_lat(), ll(0.0025, 0.0005));
    assert_same_spot(path[1].lng_lat(), ll(0.005, 0.0025));
    let sampled = hole3.finish_path_sampled.as_ref().expect("abgetastet");
    assert_same_spot(sampled.last().expect("nicht leer").lng_lat(), ll(0.005, 0.0025));
}

#[test]
fn test_sampled_path_starts_at_snapped_vertex() {
    let mut h = Harness::new(three_hole_course());
    h.show_tee("Blue");
    h.define(1, FeatureType::GolfPath, vec![ll(0.0, 0.0), ll(0.001, 0.0)]);
    h.define(
        2,
        FeatureType::TransitionPath,
        vec![ll(0.0012, 0.0003), ll(0.0015, 0.0006)],
    );

    let hole2 = hole_of(&h, 2);
    let raw = hole2.transition_path.as_ref().expect("Übergangspfad");
    let sampled = hole2.transition_path_sampled.as_ref().expect("abgetastet");
    assert!(sampled.len() > raw.len());
    assert_same_spot(sampled[0].lng_lat(), ll(0.001, 0.0));
    assert_same_spot(
        sampled.last().expect("nicht leer").lng_lat(),
        raw.last().expect("nicht leer").lng_lat(),
    );
}
