//! Typisierte Fehler für Protokollverletzungen der aufrufenden UI.
//!
//! Diese Fehler zeigen eine interne Inkonsistenz an (falscher Feature-Typ,
//! fehlender Registry-Eintrag) und werden nie still übergangen. Erwartete
//! Abwesenheit (kein Nachbar-Pfad, kein Marker) ist dagegen ein normaler
//! `Option`-Zweig und kein Fehler.

use thiserror::Error;

/// Fehler des Mapping-Kerns.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapperError {
    /// Unbekanntes Feature-Tag (z.B. aus einer Tabellenzeile)
    #[error("unbekannter Feature-Typ: {0}")]
    UnknownFeatureType(String),
    /// Polygon-Typ an einer Stelle, die einen Pfad-Typ erfordert
    #[error("{0} ist kein Pfad-Typ")]
    NotAPathType(String),
    /// Pfad-Typ an einer Stelle, die einen Polygon-Typ erfordert
    #[error("{0} ist kein Polygon-Typ")]
    NotAPolygonType(String),
    /// Nur Start- und Ziellinie haben einen Sichtbarkeits-Schalter
    #[error("{0} ist weder Start- noch Ziellinie")]
    NotAStartFinishType(String),
    /// Für den Tee existiert (noch) kein Registry-Eintrag
    #[error("kein Registry-Eintrag für Tee '{0}'")]
    MissingRegistryEntry(String),
    /// Es wird aktuell kein Tee angezeigt
    #[error("kein Tee angezeigt")]
    NoActiveTee,
    /// Tee ist im Kurs nicht vorhanden
    #[error("Tee '{0}' existiert nicht im Kurs")]
    UnknownTee(String),
    /// Lochnummer außerhalb von 1..=N
    #[error("Loch {hole} außerhalb des Bereichs 1..={hole_count}")]
    HoleOutOfRange {
        /// Angefragte Lochnummer
        hole: u32,
        /// Anzahl Löcher des Tees
        hole_count: u32,
    },
    /// Kursdaten verletzen eine Strukturvorgabe
    #[error("ungültiger Kurs: {0}")]
    InvalidCourse(String),
}
