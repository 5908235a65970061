use crate::core::{FeatureType, LngLat};
use crate::map::{MarkerId, ScreenPoint};
use crate::shared::MapperOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Zeichnen ===
    /// In den Zeichenmodus für ein Feature wechseln
    BeginDefineFeature {
        hole: u32,
        feature_type: FeatureType,
    },
    /// Gezeichnete Geometrie snappen, abtasten und committen
    CommitDrawnFeature,
    /// Zeichnen verwerfen
    CancelDraw,

    // === Selektion ===
    /// Feature unter einem Bildschirmpunkt selektieren
    SelectFeatureAt { point: ScreenPoint },
    /// Feature per Loch/Typ (oder expliziter ID) selektieren
    SelectFeature {
        hole: u32,
        feature_type: FeatureType,
        explicit_id: Option<String>,
    },
    /// Selektion aufheben
    ClearSelection,

    // === Editing ===
    /// Selektiertes Feature samt verwaister Marker löschen
    DeleteSelectedFeature,
    /// Abhängige Pfade an neue Marker-Position anpassen
    MoveMarkerEndpoint { marker: MarkerId, position: LngLat },
    /// Pfade eines Tees neu abtasten
    ResampleTee { tee: String },

    // === Anzeige ===
    /// Tee anzeigen (vorheriges ausblenden)
    DisplayTee { tee: String },
    /// Start- bzw. Ziellinie ein-/ausblenden
    SetStartFinishVisibility {
        feature_type: FeatureType,
        show: bool,
    },
    /// Marker-Popup öffnen/schließen
    SetMarkerPopup { marker: MarkerId, open: bool },

    // === Optionen ===
    /// Optionen übernehmen und speichern
    ApplyOptions { options: Box<MapperOptions> },
}
