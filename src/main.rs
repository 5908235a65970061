//! Speedgolf Course Mapper (Kommandozeile).
//!
//! Lädt einen Kurs, baut alle Tees auf einer Headless-Karte auf, tastet
//! alle Pfade mit dem konfigurierten Abstand neu ab und schreibt den Kurs
//! zurück.

use anyhow::Context;
use speedgolf_course_mapper::{
    AppController, AppIntent, AppState, Course, HeadlessDrawTool, HeadlessMap, MapperOptions,
};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Speedgolf Course Mapper v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let mut args = std::env::args_os().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .context("Aufruf: speedgolf-course-mapper <kurs.json> [ausgabe.json]")?;
    let output = args.next().map(PathBuf::from).unwrap_or_else(|| input.clone());

    let options = MapperOptions::load_from_file(&MapperOptions::config_path());
    let course = Course::load_from_file(&input)?;
    let tee_names: Vec<String> = course.tees.keys().cloned().collect();

    let mut state = AppState::with_course(course);
    state.options = options;
    let mut controller = AppController::new();
    // Ohne Terrain-Anbindung greift die Ersatzhöhe aus den Optionen
    let mut map = HeadlessMap::with_terrain(|_| None);
    let mut draw = HeadlessDrawTool::new();

    for tee in &tee_names {
        controller.handle_intent(
            &mut state,
            &mut map,
            &mut draw,
            AppIntent::TeeChanged { tee: tee.clone() },
        )?;
        controller.handle_intent(
            &mut state,
            &mut map,
            &mut draw,
            AppIntent::ResampleTeeRequested { tee: tee.clone() },
        )?;

        let entry = state.registry.tee(tee)?;
        log::info!(
            "Tee '{}': {} Pfade, {} Polygone, {} Marker",
            tee,
            entry.path_ids.len(),
            entry.poly_ids.len(),
            entry.all_markers().len()
        );
    }

    let updates = state.course.drain_dispatched().len();
    state.course.course().save_to_file(&output)?;
    log::info!(
        "{} Updates angewendet, {} Commands ausgeführt",
        updates,
        state.command_log.len()
    );
    Ok(())
}
