//! Spiegel des externen Kurs-Stores.
//!
//! Jedes `UPDATE_HOLE_FEATURE` wird sofort auf den Kurs angewendet (Reducer)
//! und zusätzlich für den Host gesammelt, der es an seinen eigenen Store
//! weiterreicht.

use crate::core::{Course, HoleFeatureUpdate, MapperError};

/// Autoritative Kursdaten plus Liste der ausgelieferten Updates.
#[derive(Debug, Default)]
pub struct CourseStore {
    course: Course,
    dispatched: Vec<HoleFeatureUpdate>,
}

impl CourseStore {
    /// Erstellt einen Store über einem Kurs.
    pub fn new(course: Course) -> Self {
        Self {
            course,
            dispatched: Vec::new(),
        }
    }

    /// Aktueller Kurs.
    pub fn course(&self) -> &Course {
        &self.course
    }

    /// Gibt den Kurs frei.
    pub fn into_course(self) -> Course {
        self.course
    }

    /// Wendet ein Update an und merkt es für den Host vor.
    pub fn commit(&mut self, update: HoleFeatureUpdate) -> Result<(), MapperError> {
        self.course.apply_update(&update)?;
        log::info!(
            "UPDATE_HOLE_FEATURE: Tee '{}', Loch {}, {} ({})",
            update.tee,
            update.hole_num,
            update.feature_type,
            if update.is_cleared() {
                "gelöscht".to_string()
            } else {
                format!(
                    "{} Punkte",
                    update.feature_coords.as_ref().map_or(0, |c| c.len())
                )
            }
        );
        self.dispatched.push(update);
        Ok(())
    }

    /// Alle seit dem letzten Abholen ausgelieferten Updates.
    pub fn dispatched(&self) -> &[HoleFeatureUpdate] {
        &self.dispatched
    }

    /// Holt die ausgelieferten Updates ab.
    pub fn drain_dispatched(&mut self) -> Vec<HoleFeatureUpdate> {
        std::mem::take(&mut self.dispatched)
    }
}
