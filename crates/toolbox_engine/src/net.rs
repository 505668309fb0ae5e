//! Network stack maintenance tasks.

use toolbox_logging::toolbox_info;

use crate::exec::{CommandRunner, ExecError};
use crate::sequencer::TaskError;

/// Runs a repair command, treating exit code 1 as "nothing to repair".
fn run_tolerant(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[&str],
) -> Result<(), TaskError> {
    toolbox_info!("running command: {program} {}", args.join(" "));
    match runner.run(program, args) {
        Ok(_) => Ok(()),
        Err(ExecError::NonZero { code: Some(1), .. }) => {
            toolbox_info!("command returned 1: nothing needed repair (not a real error).");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

pub fn flush_dns(runner: &dyn CommandRunner) -> Result<(), TaskError> {
    toolbox_info!("flushing the DNS cache (ipconfig /flushdns)");
    run_tolerant(runner, "ipconfig", &["/flushdns"])
}

pub fn winsock_reset(runner: &dyn CommandRunner) -> Result<(), TaskError> {
    toolbox_info!("resetting Winsock (netsh winsock reset)");
    run_tolerant(runner, "netsh", &["winsock", "reset"])
}

pub fn tcpip_reset(runner: &dyn CommandRunner) -> Result<(), TaskError> {
    toolbox_info!("light TCP/IP reset (netsh int ip reset)");
    run_tolerant(runner, "netsh", &["int", "ip", "reset"])
}

/// Points the `Wi-Fi` adapter at a static DNS server. The adapter name
/// matches the stock Windows naming; other adapters are untouched.
pub fn set_dns(runner: &dyn CommandRunner, server: &str) -> Result<(), TaskError> {
    toolbox_info!("setting DNS server: {server}");
    run_tolerant(
        runner,
        "netsh",
        &["interface", "ip", "set", "dns", "name=Wi-Fi", "static", server],
    )
}
