//! Use-Cases für Tee-, Flaggen-, Start- und Ziel-Marker.

use crate::app::snap::{marker_endpoints, path_markers};
use crate::app::AppState;
use crate::core::{FeatureType, LngLat, MarkerRole};
use crate::map::{MapHandle, MarkerId, MarkerSpec};

/// Legt die Marker an den Enden eines Pfads an.
///
/// Marker entstehen nur für leere Slots. Ein bereits vorhandener Marker
/// bleibt unverändert, da er auch an einem Nachbarpfad hängen kann.
pub fn ensure_path_markers(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    tee: &str,
    hole: u32,
    feature_type: FeatureType,
    coords: &[LngLat],
) -> anyhow::Result<()> {
    let hole_count = state.registry.tee(tee)?.hole_count();
    for slot in path_markers(hole_count, hole, feature_type)? {
        let Some(position) = slot.end.of(coords) else {
            continue;
        };
        ensure_marker(state, map, tee, slot.hole, slot.role, position)?;
    }
    Ok(())
}

fn ensure_marker(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    tee: &str,
    hole: u32,
    role: MarkerRole,
    position: LngLat,
) -> anyhow::Result<MarkerId> {
    if let Some(existing) = state.registry.marker(tee, hole, role)? {
        if map.has_marker(existing) {
            return Ok(existing);
        }
        log::warn!("Marker {:?} fehlt auf der Karte, wird neu angelegt", existing);
    }

    let marker = map.add_marker(MarkerSpec {
        role,
        position,
        popup_text: role.popup_text(hole),
        draggable: true,
    });
    let visible = state.displayed_tee.as_deref() == Some(tee)
        && match role {
            MarkerRole::Start => state.sf_visibility.start,
            MarkerRole::Finish => state.sf_visibility.finish,
            MarkerRole::Tee | MarkerRole::Flag => true,
        };
    map.set_marker_visibility(marker, visible);
    state.registry.set_marker(tee, hole, role, Some(marker))?;
    log::debug!("{} angelegt ({:?})", role.popup_text(hole), marker);
    Ok(marker)
}

/// Entfernt die Marker eines gelöschten Pfads, die kein Nachbar mehr braucht.
///
/// Muss nach dem Leeren des Slots im Kurs aufgerufen werden.
pub fn remove_orphaned_markers(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    tee: &str,
    hole: u32,
    feature_type: FeatureType,
) -> anyhow::Result<()> {
    let tee_data = state.course.course().tee(tee)?;
    let hole_count = tee_data.hole_count();

    let orphaned: Vec<_> = path_markers(hole_count, hole, feature_type)?
        .into_iter()
        .filter(|slot| {
            !marker_endpoints(hole_count, slot.hole, slot.role)
                .iter()
                .any(|ep| tee_data.is_defined(ep.hole, ep.feature_type))
        })
        .collect();

    for slot in orphaned {
        if let Some(marker) = state.registry.take_marker(tee, slot.hole, slot.role)? {
            map.remove_marker(marker);
            log::info!(
                "Verwaisten Marker '{}' entfernt (Tee '{}')",
                slot.role.popup_text(slot.hole),
                tee
            );
        }
    }
    Ok(())
}

/// Öffnet bzw. schließt das Hover-Popup eines Markers.
pub fn set_marker_popup(map: &mut dyn MapHandle, marker: MarkerId, open: bool) {
    if map.has_marker(marker) {
        map.set_marker_popup_open(marker, open);
    } else {
        log::debug!("Popup für unbekannten Marker {:?} ignoriert", marker);
    }
}
