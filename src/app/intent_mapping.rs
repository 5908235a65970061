//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::DefineFeatureRequested { hole, feature_type } => {
            vec![AppCommand::BeginDefineFeature { hole, feature_type }]
        }
        AppIntent::DrawCompleted => {
            if state.is_defining() {
                vec![AppCommand::CommitDrawnFeature]
            } else {
                log::debug!("draw.create ohne laufende Definition ignoriert");
                vec![]
            }
        }
        AppIntent::DrawCancelled => {
            if state.is_defining() {
                vec![AppCommand::CancelDraw]
            } else {
                vec![]
            }
        }
        // Klicks während des Zeichnens gehören dem Zeichen-Tool
        AppIntent::MapClicked { point } => {
            if state.is_defining() {
                vec![]
            } else {
                vec![AppCommand::SelectFeatureAt { point }]
            }
        }
        AppIntent::FeatureRowSelected {
            hole,
            feature_type,
            explicit_id,
        } => vec![AppCommand::SelectFeature {
            hole,
            feature_type,
            explicit_id,
        }],
        AppIntent::DeleteSelectedRequested => {
            if state.selected_feature().is_some() {
                vec![AppCommand::DeleteSelectedFeature]
            } else {
                vec![]
            }
        }
        AppIntent::MarkerDragged { .. } => vec![],
        AppIntent::MarkerDragEnded { marker, position } => {
            vec![AppCommand::MoveMarkerEndpoint { marker, position }]
        }
        AppIntent::MarkerHoverChanged { marker, hovered } => vec![AppCommand::SetMarkerPopup {
            marker,
            open: hovered,
        }],
        AppIntent::TeeChanged { tee } => {
            let mut commands = Vec::new();
            if state.is_defining() {
                commands.push(AppCommand::CancelDraw);
            }
            if state.selected_feature().is_some() {
                commands.push(AppCommand::ClearSelection);
            }
            commands.push(AppCommand::DisplayTee { tee });
            commands
        }
        AppIntent::StartFinishVisibilityToggled { feature_type, show } => {
            vec![AppCommand::SetStartFinishVisibility { feature_type, show }]
        }
        AppIntent::ResampleTeeRequested { tee } => vec![AppCommand::ResampleTee { tee }],
        AppIntent::OptionsChanged { options } => {
            let resample = state.options.sampling_distance_feet != options.sampling_distance_feet;
            let mut commands = vec![AppCommand::ApplyOptions { options }];
            if let (true, Some(tee)) = (resample, state.displayed_tee.clone()) {
                commands.push(AppCommand::ResampleTee { tee });
            }
            commands
        }
    }
}

#[cfg(test)]
mod tests;
