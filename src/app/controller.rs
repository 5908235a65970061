//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::map::{DrawTool, MapHandle};

/// Orchestriert UI-/Karten-Events und Use-Cases auf den AppState.
///
/// Karte und Zeichen-Tool werden pro Aufruf übergeben; der Controller hält
/// keinen eigenen Zustand.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        map: &mut dyn MapHandle,
        draw: &mut dyn DrawTool,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, map, draw, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        map: &mut dyn MapHandle,
        draw: &mut dyn DrawTool,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichnen ===
            AppCommand::BeginDefineFeature { hole, feature_type } => {
                handlers::drawing::begin_define(state, draw, hole, feature_type)?
            }
            AppCommand::CommitDrawnFeature => handlers::drawing::commit(state, map, draw)?,
            AppCommand::CancelDraw => handlers::drawing::cancel(state, draw),

            // === Selektion ===
            AppCommand::SelectFeatureAt { point } => {
                handlers::selection::select_at(state, map, point)?
            }
            AppCommand::SelectFeature {
                hole,
                feature_type,
                explicit_id,
            } => handlers::selection::select(state, map, hole, feature_type, explicit_id)?,
            AppCommand::ClearSelection => handlers::selection::clear(state, map)?,

            // === Editing ===
            AppCommand::DeleteSelectedFeature => handlers::editing::delete_selected(state, map)?,
            AppCommand::MoveMarkerEndpoint { marker, position } => {
                handlers::editing::move_marker_endpoint(state, map, marker, position)?
            }
            AppCommand::ResampleTee { tee } => handlers::editing::resample_tee(state, map, &tee)?,

            // === Anzeige ===
            AppCommand::DisplayTee { tee } => handlers::view::display_tee(state, map, &tee)?,
            AppCommand::SetStartFinishVisibility { feature_type, show } => {
                handlers::view::set_start_finish_visibility(state, map, feature_type, show)?
            }
            AppCommand::SetMarkerPopup { marker, open } => {
                handlers::view::set_marker_popup(map, marker, open)
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, *options)?,
        }

        Ok(())
    }
}
