//! Keyboard-Shortcuts des Kurs-Editors.
//!
//! Der Host übersetzt seine Tastatur-Events in [`EditorKey`]s; hier werden
//! sie auf `AppIntent`s gemappt.

use crate::app::{AppIntent, AppState};

/// Vom Editor ausgewertete Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    /// Entf
    Delete,
    /// Rücktaste
    Backspace,
    /// Escape
    Escape,
}

/// Verarbeitet gedrückte Tasten und gibt AppIntents zurück.
///
/// Entf/Backspace löschen das selektierte Feature, Escape bricht eine
/// laufende Zeichnung ab. Ohne passenden Zustand bleibt die Taste wirkungslos.
pub fn collect_keyboard_intents(state: &AppState, pressed: &[EditorKey]) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let delete_pressed = pressed
        .iter()
        .any(|k| matches!(k, EditorKey::Delete | EditorKey::Backspace));
    let escape_pressed = pressed.contains(&EditorKey::Escape);

    if delete_pressed && state.selected_feature().is_some() && !state.is_defining() {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    if escape_pressed && state.is_defining() {
        events.push(AppIntent::DrawCancelled);
    }

    events
}
