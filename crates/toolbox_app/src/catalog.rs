//! Static registration of every maintenance task.
//!
//! The catalog is built once per invocation; defs are immutable after
//! that and selection lives with the caller.

use std::sync::Arc;

use toolbox_core::{TaskDef, Tier};
use toolbox_engine::{
    clean_dx_shader_cache, clean_game_caches, clean_nvidia_shader_cache, clean_prefetch,
    clean_recent, clean_temp, clean_update_cache, deep_reboot, disable_uwp_background,
    enable_game_mode, flush_dns, refresh_idle_tasks, restart_compositor, set_dns, set_power_plan,
    tcpip_reset, winsock_reset, CommandRunner, PowerPlan, RegistryStore, Task,
};
use toolbox_logging::toolbox_info;

/// Builds the full task catalog.
///
/// `dns_server` configures the `set_dns` task; when `None` that task
/// logs a skip instead of calling netsh.
pub fn build(runner: Arc<dyn CommandRunner>, dns_server: Option<String>) -> Vec<Task> {
    let store = Arc::new(RegistryStore::new(runner.clone()));
    let mut tasks = Vec::new();

    // System cleanup.
    tasks.push(Task::new(
        TaskDef::new("clean_temp", "Clean temporary files (TEMP)", Tier::Safe)
            .with_description("Deletes the files in the user temp directory."),
        clean_temp,
    ));
    tasks.push(Task::new(
        TaskDef::new("clean_prefetch", "Clean Prefetch", Tier::Safe)
            .with_description("Empties the Windows Prefetch directory."),
        clean_prefetch,
    ));
    tasks.push(Task::new(
        TaskDef::new("clean_dx_shader", "Clean DirectX shader cache", Tier::Safe)
            .with_description("Removes the D3DSCache directory; it is rebuilt on demand."),
        clean_dx_shader_cache,
    ));
    tasks.push(Task::new(
        TaskDef::new("clean_nv_shader", "Clean NVIDIA shader cache", Tier::Safe)
            .with_description("Removes the NVIDIA NV_Cache directory."),
        clean_nvidia_shader_cache,
    ));
    tasks.push(Task::new(
        TaskDef::new("clean_recent", "Clean recently-used list", Tier::Safe)
            .with_description("Clears the Explorer Recent items."),
        clean_recent,
    ));
    tasks.push(Task::new(
        TaskDef::new("clean_win_update_cache", "Clean Windows update cache", Tier::Safe)
            .with_description("Deletes downloaded update packages that Windows will re-fetch."),
        clean_update_cache,
    ));
    {
        let runner = runner.clone();
        tasks.push(Task::new(
            TaskDef::new("refresh_gpu_idle", "Refresh GPU idle tasks", Tier::Disruptive)
                .with_description("Forces pending idle-time maintenance to run now."),
            move || refresh_idle_tasks(runner.as_ref()),
        ));
    }
    {
        let runner = runner.clone();
        tasks.push(Task::new(
            TaskDef::new("refresh_dwm", "Restart DWM (screen goes black)", Tier::Disruptive)
                .with_description("Force-restarts the desktop compositor to clear glitches.")
                .with_warning(
                    "Restarting DWM blanks the screen for a moment and briefly upsets \
                     Wallpaper Engine.",
                ),
            move || restart_compositor(runner.as_ref()),
        ));
    }
    {
        let runner = runner.clone();
        tasks.push(Task::new(
            TaskDef::new("deep_reboot", "Deep clean restart (immediate reboot)", Tier::Reboot)
                .with_description(
                    "Runs shutdown /g /f /t 0: closes applications, restarts, and reopens \
                     registered applications after the reboot.",
                ),
            move || deep_reboot(runner.as_ref()),
        ));
    }

    // Network.
    {
        let runner = runner.clone();
        tasks.push(Task::new(
            TaskDef::new("flush_dns", "Flush the DNS cache", Tier::Safe).with_description(
                "Clears cached DNS records; helps with stale entries and unreachable sites.",
            ),
            move || flush_dns(runner.as_ref()),
        ));
    }
    {
        let runner = runner.clone();
        tasks.push(Task::new(
            TaskDef::new("winsock_reset", "Reset Winsock", Tier::Safe)
                .with_description("Resets the Winsock catalog to a clean state."),
            move || winsock_reset(runner.as_ref()),
        ));
    }
    {
        let runner = runner.clone();
        tasks.push(Task::new(
            TaskDef::new("tcpip_reset", "Light TCP/IP reset", Tier::Safe)
                .with_description("Resets the TCP/IP stack parameters."),
            move || tcpip_reset(runner.as_ref()),
        ));
    }
    {
        let runner = runner.clone();
        tasks.push(Task::new(
            TaskDef::new("set_dns", "Apply DNS settings", Tier::Disruptive)
                .with_description(
                    "Points the Wi-Fi adapter at a public DNS server (AliDNS, Tencent, \
                     Google, Cloudflare, ...) through netsh.",
                )
                .with_warning(
                    "Changes the adapter DNS through netsh; the network drops briefly.",
                )
                .dns(),
            move || match &dns_server {
                Some(server) => set_dns(runner.as_ref(), server),
                None => {
                    toolbox_info!("DNS not configured; skipping.");
                    Ok(())
                }
            },
        ));
    }

    // Gaming and power.
    {
        let store = store.clone();
        tasks.push(Task::new(
            TaskDef::new("disable_uwp_bg", "Disable some UWP background apps", Tier::Safe)
                .with_description("Turns off background activity for UWP app categories (reversible)."),
            move || disable_uwp_background(store.as_ref()),
        ));
    }
    {
        let runner = runner.clone();
        tasks.push(Task::new(
            TaskDef::new("high_perf_power", "Switch to the high performance power plan", Tier::Safe)
                .with_description("Activates the stock high performance scheme via powercfg."),
            move || set_power_plan(runner.as_ref(), PowerPlan::HighPerformance),
        ));
    }
    {
        let runner = runner.clone();
        tasks.push(Task::new(
            TaskDef::new("set_balanced_plan", "Switch to the balanced power plan", Tier::Safe)
                .with_description("Activates the stock balanced scheme via powercfg."),
            move || set_power_plan(runner.as_ref(), PowerPlan::Balanced),
        ));
    }
    {
        let runner = runner.clone();
        tasks.push(Task::new(
            TaskDef::new("set_power_saver_plan", "Switch to the power saver plan", Tier::Safe)
                .with_description("Activates the stock power saver scheme via powercfg."),
            move || set_power_plan(runner.as_ref(), PowerPlan::PowerSaver),
        ));
    }
    {
        let store = store.clone();
        tasks.push(Task::new(
            TaskDef::new("enable_gamemode", "Enable Game Mode", Tier::Safe)
                .with_description("Turns on the Windows Game Mode flag pair."),
            move || enable_game_mode(store.as_ref()),
        ));
    }
    tasks.push(Task::new(
        TaskDef::new("clean_game_cache", "Clean game shader caches", Tier::Safe)
            .with_description("Removes Steam and WeGame shader and browser caches."),
        clean_game_caches,
    ));

    tasks
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use toolbox_core::Tier;
    use toolbox_engine::SystemCommandRunner;

    use super::build;

    #[test]
    fn task_keys_are_unique() {
        let tasks = build(Arc::new(SystemCommandRunner), None);
        let keys: HashSet<&str> = tasks.iter().map(|t| t.def.key.as_str()).collect();
        assert_eq!(keys.len(), tasks.len());
    }

    #[test]
    fn catalog_covers_all_three_tiers() {
        let tasks = build(Arc::new(SystemCommandRunner), None);

        assert_eq!(tasks.len(), 19);
        let of_tier = |tier: Tier| tasks.iter().filter(|t| t.def.tier == tier).count();
        assert_eq!(of_tier(Tier::Safe), 15);
        assert_eq!(of_tier(Tier::Disruptive), 3);
        assert_eq!(of_tier(Tier::Reboot), 1);
    }

    #[test]
    fn only_the_dns_task_carries_the_dns_flag() {
        let tasks = build(Arc::new(SystemCommandRunner), None);
        let dns_tasks: Vec<&str> = tasks
            .iter()
            .filter(|t| t.def.dns_related)
            .map(|t| t.def.key.as_str())
            .collect();
        assert_eq!(dns_tasks, vec!["set_dns"]);
    }
}
