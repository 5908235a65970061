//! UI-Anbindung: Tastatur-Shortcuts.
//!
//! Die eigentliche Oberfläche (Loch-Tabelle, Tee-Auswahl) gehört dem Host.

pub mod keyboard;

pub use keyboard::{collect_keyboard_intents, EditorKey};
