//! Cache and junk-file cleanup tasks.
//!
//! Deletions are deliberately forgiving: files held open by another
//! process simply stay behind, and a missing directory is a skip, not
//! an error.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use toolbox_logging::{toolbox_info, toolbox_warn};
use walkdir::WalkDir;

use crate::sequencer::TaskError;

/// Deletes every file under `dir`, recursively, keeping the directory
/// tree in place. Per-file failures are ignored.
pub fn remove_files_recursive(dir: &Path) {
    for entry in WalkDir::new(dir).into_iter().filter_map(Result::ok) {
        if entry.file_type().is_file() {
            let _ = fs::remove_file(entry.path());
        }
    }
}

/// Deletes the entries directly under `dir`, non-recursively.
pub fn remove_files_shallow(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.filter_map(Result::ok) {
        if entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            let _ = fs::remove_file(entry.path());
        }
    }
}

/// Removes a whole directory tree, tolerating absence and locked files.
pub fn remove_dir_tree(dir: &Path) {
    if dir.is_dir() {
        if let Err(err) = fs::remove_dir_all(dir) {
            toolbox_warn!("could not fully remove {:?}: {err}", dir);
        }
    } else {
        toolbox_info!("path does not exist (skipped): {:?}", dir);
    }
}

pub fn clean_temp() -> Result<(), TaskError> {
    let Some(temp) = env::var_os("TEMP") else {
        toolbox_info!("TEMP is not set; nothing to clean.");
        return Ok(());
    };
    let dir = PathBuf::from(temp);
    toolbox_info!("cleaning temp directory: {:?}", dir);
    remove_files_recursive(&dir);
    Ok(())
}

pub fn clean_prefetch() -> Result<(), TaskError> {
    let dir = Path::new(r"C:\Windows\Prefetch");
    toolbox_info!("cleaning prefetch: {:?}", dir);
    if dir.is_dir() {
        remove_files_shallow(dir);
    } else {
        toolbox_info!("prefetch directory does not exist.");
    }
    Ok(())
}

pub fn clean_dx_shader_cache() -> Result<(), TaskError> {
    let Some(local) = env::var_os("LOCALAPPDATA") else {
        toolbox_info!("LOCALAPPDATA is not set.");
        return Ok(());
    };
    let dir = PathBuf::from(local).join("D3DSCache");
    toolbox_info!("cleaning DirectX shader cache: {:?}", dir);
    remove_dir_tree(&dir);
    Ok(())
}

pub fn clean_nvidia_shader_cache() -> Result<(), TaskError> {
    let dir = Path::new(r"C:\ProgramData\NVIDIA Corporation\NV_Cache");
    toolbox_info!("cleaning NVIDIA shader cache: {:?}", dir);
    remove_dir_tree(dir);
    Ok(())
}

pub fn clean_update_cache() -> Result<(), TaskError> {
    let dir = Path::new(r"C:\Windows\SoftwareDistribution\Download");
    toolbox_info!("cleaning Windows update cache: {:?}", dir);
    if dir.is_dir() {
        remove_files_recursive(dir);
    } else {
        toolbox_info!("update cache directory does not exist.");
    }
    Ok(())
}

pub fn clean_recent() -> Result<(), TaskError> {
    let Some(profile) = env::var_os("USERPROFILE") else {
        toolbox_info!("USERPROFILE is not set.");
        return Ok(());
    };
    let dir = PathBuf::from(profile).join(r"AppData\Roaming\Microsoft\Windows\Recent");
    toolbox_info!("cleaning recently-used list: {:?}", dir);
    if dir.is_dir() {
        remove_files_shallow(&dir);
    }
    Ok(())
}

/// Removes the Steam and WeGame shader/browser caches. Per-target
/// outcome is logged; a missing target is a skip.
pub fn clean_game_caches() -> Result<(), TaskError> {
    toolbox_info!("cleaning game shader and cache directories...");

    let local = env::var_os("LOCALAPPDATA").map(PathBuf::from);
    let prog86 = env::var_os("ProgramFiles(x86)").map(PathBuf::from);

    let mut targets = Vec::new();
    if let Some(local) = &local {
        targets.push(local.join("Steam").join("htmlcache"));
        targets.push(local.join("Steam").join("shadercache"));
        targets.push(local.join("Tencent").join("WeGameAppsCache"));
        targets.push(local.join("Tencent").join("WeGame").join("ui_cache"));
        targets.push(local.join("Tencent").join("WeGame").join("cache"));
    }
    if let Some(prog86) = &prog86 {
        targets.push(prog86.join("Steam").join("steamapps").join("shadercache"));
    }

    for target in targets {
        if target.is_dir() {
            match fs::remove_dir_all(&target) {
                Ok(()) => toolbox_info!("removed: {:?}", target),
                Err(err) => toolbox_warn!("failed to remove {:?}: {err}", target),
            }
        } else {
            toolbox_info!("path does not exist (skipped): {:?}", target);
        }
    }
    toolbox_info!("game cache cleanup finished.");
    Ok(())
}
