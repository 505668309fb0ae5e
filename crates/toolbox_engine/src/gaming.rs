//! Background-activity and Game Mode settings.

use toolbox_logging::{toolbox_info, toolbox_warn};

use crate::sequencer::TaskError;
use crate::settings::SettingsStore;

const BACKGROUND_PATHS: &[&str] = &[
    r"Software\Microsoft\Windows\CurrentVersion\BackgroundAccessApplications",
    r"Software\Microsoft\Windows\CurrentVersion\Search",
    r"Software\Microsoft\Windows\CurrentVersion\Search\BackgroundAccess",
];

const GAME_BAR_PATH: &str = r"Software\Microsoft\GameBar";

/// Disables background activity for UWP app categories. Reversible; a
/// path that cannot be written is skipped.
pub fn disable_uwp_background(store: &dyn SettingsStore) -> Result<(), TaskError> {
    toolbox_info!("disabling UWP background activity...");
    for path in BACKGROUND_PATHS {
        match store.set_dword(path, "Disabled", 1) {
            Ok(()) => toolbox_info!("set Disabled=1: {path}"),
            Err(err) => toolbox_warn!("could not write {path} (skipped): {err}"),
        }
    }
    toolbox_info!("UWP background activity disabled (reversible).");
    Ok(())
}

/// Turns on the Game Mode flag pair.
pub fn enable_game_mode(store: &dyn SettingsStore) -> Result<(), TaskError> {
    toolbox_info!("enabling Game Mode...");
    store.set_dword(GAME_BAR_PATH, "GameModeEnabled", 1)?;
    store.set_dword(GAME_BAR_PATH, "AutoGameModeEnabled", 1)?;
    toolbox_info!("Game Mode is on.");
    Ok(())
}
