//! Toolbox engine: OS command execution and the maintenance and
//! diagnostic operations built on top of it.
mod cleanup;
mod diagnostics;
mod eventlog;
mod exec;
mod gaming;
mod kernel;
mod net;
mod power;
mod readlog;
mod sequencer;
mod settings;
mod setupapi;
mod wer;

pub use cleanup::{
    clean_dx_shader_cache, clean_game_caches, clean_nvidia_shader_cache, clean_prefetch,
    clean_recent, clean_temp, clean_update_cache, remove_dir_tree, remove_files_recursive,
    remove_files_shallow,
};
pub use diagnostics::{run_full_diagnostics, DiagnosticsPaths};
pub use eventlog::scan_event_log;
pub use exec::{CommandOutput, CommandRunner, ExecError, SystemCommandRunner};
pub use gaming::{disable_uwp_background, enable_game_mode};
pub use kernel::scan_kernel_reports;
pub use net::{flush_dns, set_dns, tcpip_reset, winsock_reset};
pub use power::{
    deep_reboot, refresh_idle_tasks, restart_compositor, set_power_plan, PowerPlan,
};
pub use readlog::{decode_log, tail_lines, DecodedLog};
pub use sequencer::{run_selected, ConfirmationPrompt, RunOutcome, Task, TaskAction, TaskError};
pub use settings::{MemorySettingsStore, RegistryStore, SettingsError, SettingsStore};
pub use setupapi::scan_setupapi;
pub use wer::scan_wer_reports;
