use crate::app::state::InProgressFeature;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{FeatureType, LngLat};
use crate::map::{MarkerId, ScreenPoint};
use crate::shared::MapperOptions;

use super::map_intent_to_commands;

fn defining_state() -> AppState {
    let mut state = AppState::new();
    state.drawing = Some(InProgressFeature {
        hole: 1,
        feature_type: FeatureType::GolfPath,
    });
    state
}

#[test]
fn draw_completed_without_definition_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::DrawCompleted);

    assert!(commands.is_empty());
}

#[test]
fn draw_completed_while_defining_commits() {
    let state = defining_state();

    let commands = map_intent_to_commands(&state, AppIntent::DrawCompleted);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::CommitDrawnFeature));
}

#[test]
fn map_click_while_defining_is_left_to_draw_tool() {
    let state = defining_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            point: ScreenPoint::new(1.0, 2.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn delete_without_selection_maps_to_nothing() {
    let mut state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::DeleteSelectedRequested).is_empty());

    state.selection.selected_feature = Some("01golfPathBlue".to_string());
    let commands = map_intent_to_commands(&state, AppIntent::DeleteSelectedRequested);
    assert!(matches!(commands[0], AppCommand::DeleteSelectedFeature));
}

#[test]
fn marker_drag_is_a_no_op_and_drag_end_moves_endpoints() {
    let state = AppState::new();
    let position = LngLat::new(5.0, 5.0);

    assert!(map_intent_to_commands(
        &state,
        AppIntent::MarkerDragged {
            marker: MarkerId(1),
            position
        }
    )
    .is_empty());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MarkerDragEnded {
            marker: MarkerId(1),
            position,
        },
    );
    assert!(matches!(
        commands[0],
        AppCommand::MoveMarkerEndpoint {
            marker: MarkerId(1),
            ..
        }
    ));
}

#[test]
fn tee_change_cancels_drawing_and_clears_selection_first() {
    let mut state = defining_state();
    state.selection.selected_feature = Some("01greenBlue".to_string());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::TeeChanged {
            tee: "White".to_string(),
        },
    );

    assert_eq!(commands.len(), 3);
    assert!(matches!(commands[0], AppCommand::CancelDraw));
    assert!(matches!(commands[1], AppCommand::ClearSelection));
    assert!(matches!(&commands[2], AppCommand::DisplayTee { tee } if tee == "White"));
}

#[test]
fn changed_sampling_distance_resamples_displayed_tee() {
    let mut state = AppState::new();
    state.displayed_tee = Some("Blue".to_string());
    let mut options = MapperOptions::default();
    options.sampling_distance_feet = 25.0;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::OptionsChanged {
            options: Box::new(options),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::ApplyOptions { .. }));
    assert!(matches!(&commands[1], AppCommand::ResampleTee { tee } if tee == "Blue"));
}
