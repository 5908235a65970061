//! Handler für den Optionen-Dialog.

use crate::app::AppState;
use crate::shared::MapperOptions;

/// Übernimmt (bereinigte) Optionen und persistiert sie neben der Binary.
pub fn apply_options(state: &mut AppState, options: MapperOptions) -> anyhow::Result<()> {
    state.options = options.sanitized();
    let path = MapperOptions::config_path();
    state.options.save_to_file(&path)
}
