use crate::core::{FeatureType, LngLat};
use crate::map::{MarkerId, ScreenPoint};
use crate::shared::MapperOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI, Karte und Zeichen-Tool ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Benutzer will ein Feature eines Lochs zeichnen (Tabellenzeile)
    DefineFeatureRequested {
        hole: u32,
        feature_type: FeatureType,
    },
    /// Zeichen-Tool meldet eine fertige Geometrie (`draw.create`)
    DrawCompleted,
    /// Zeichnen abbrechen (Escape)
    DrawCancelled,
    /// Klick auf die Karte
    MapClicked { point: ScreenPoint },
    /// Feature über die Tabelle auswählen
    FeatureRowSelected {
        hole: u32,
        feature_type: FeatureType,
        explicit_id: Option<String>,
    },
    /// Selektiertes Feature löschen (Entf/Backspace)
    DeleteSelectedRequested,
    /// Marker wird gezogen (Live-Feedback, derzeit ohne Wirkung)
    MarkerDragged { marker: MarkerId, position: LngLat },
    /// Marker wurde losgelassen
    MarkerDragEnded { marker: MarkerId, position: LngLat },
    /// Mauszeiger betritt/verlässt einen Marker
    MarkerHoverChanged { marker: MarkerId, hovered: bool },
    /// Anderes Tee gewählt
    TeeChanged { tee: String },
    /// Schalter für Start- bzw. Ziellinie umgelegt
    StartFinishVisibilityToggled {
        feature_type: FeatureType,
        show: bool,
    },
    /// Alle Pfade eines Tees neu abtasten
    ResampleTeeRequested { tee: String },
    /// Optionen übernehmen
    OptionsChanged { options: Box<MapperOptions> },
}
