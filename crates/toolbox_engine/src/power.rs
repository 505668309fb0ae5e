//! Power-plan switching and session-level maintenance commands.

use toolbox_logging::{toolbox_info, toolbox_warn};

use crate::exec::CommandRunner;
use crate::sequencer::TaskError;

/// Stock Windows power schemes, addressed by their built-in GUIDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerPlan {
    HighPerformance,
    Balanced,
    PowerSaver,
}

impl PowerPlan {
    pub fn guid(self) -> &'static str {
        match self {
            PowerPlan::HighPerformance => "8c5e7fda-e8bf-4a96-9a85-a6e23a8c635c",
            PowerPlan::Balanced => "381b4222-f694-41f0-9685-ff5bb260df2e",
            PowerPlan::PowerSaver => "a1841308-3541-4fab-bc81-f71556f20b4a",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PowerPlan::HighPerformance => "high performance",
            PowerPlan::Balanced => "balanced",
            PowerPlan::PowerSaver => "power saver",
        }
    }
}

/// Switches the active power plan.
///
/// Needs an elevated shell; OEM images sometimes remove the stock
/// schemes, in which case powercfg fails.
pub fn set_power_plan(runner: &dyn CommandRunner, plan: PowerPlan) -> Result<(), TaskError> {
    toolbox_info!("switching to the {} power plan...", plan.label());
    match runner.run("powercfg", &["/setactive", plan.guid()]) {
        Ok(_) => {
            toolbox_info!("power plan switched to {}.", plan.label());
            Ok(())
        }
        Err(err) => {
            toolbox_warn!("could not switch the power plan: {err}");
            toolbox_warn!(
                "likely causes: system policy forbids the change, the scheme was removed by the OEM, or the shell is not elevated."
            );
            Err(err.into())
        }
    }
}

/// Flushes pending idle-time tasks (ProcessIdleTasks). The call is
/// advisory; failures are swallowed.
pub fn refresh_idle_tasks(runner: &dyn CommandRunner) -> Result<(), TaskError> {
    toolbox_info!("refreshing idle tasks (ProcessIdleTasks)");
    if runner
        .run("rundll32.exe", &["advapi32.dll,ProcessIdleTasks"])
        .is_err()
    {
        toolbox_info!("idle task refresh reported an error (ignored).");
    }
    Ok(())
}

/// Force-restarts the desktop compositor. The shell respawns dwm.exe
/// immediately; expect a moment of black screen.
pub fn restart_compositor(runner: &dyn CommandRunner) -> Result<(), TaskError> {
    toolbox_info!("restarting the desktop compositor (dwm.exe)");
    runner.run("taskkill", &["/IM", "dwm.exe", "/F"])?;
    Ok(())
}

/// Clean full restart: closes applications, flushes state, reboots
/// immediately.
pub fn deep_reboot(runner: &dyn CommandRunner) -> Result<(), TaskError> {
    toolbox_info!("running: shutdown /g /f /t 0");
    runner.run("shutdown", &["/g", "/f", "/t", "0"])?;
    Ok(())
}
