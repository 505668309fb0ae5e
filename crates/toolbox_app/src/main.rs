mod catalog;
mod logging;
mod prompt;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use toolbox_engine::{
    run_full_diagnostics, run_selected, CommandRunner, DiagnosticsPaths, RunOutcome,
    SystemCommandRunner, Task,
};

use crate::logging::LogDestination;
use crate::prompt::{AssumeYes, TerminalPrompt};

#[derive(Parser, Debug)]
#[command(
    name = "toolbox",
    about = "Windows maintenance toolbox and HID/USB diagnostics"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every registered task with its key and tier.
    List,
    /// Run the named tasks, tier by tier, after confirmation.
    Run {
        /// Task keys to run (see `list`).
        keys: Vec<String>,
        /// DNS server for the `set_dns` task.
        #[arg(long)]
        dns: Option<String>,
        /// Answer every confirmation with yes (for scripted use).
        #[arg(long)]
        yes: bool,
    },
    /// Scan the system logs for HID/USB problems and print a report.
    Diagnose {
        /// Write the report to this file instead of stdout.
        #[arg(long, conflicts_with = "save")]
        output: Option<PathBuf>,
        /// Write the report to a timestamped file in the current directory.
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    logging::initialize(LogDestination::Both);
    let cli = Cli::parse();

    match cli.command {
        Command::List => list_tasks(),
        Command::Run { keys, dns, yes } => run_tasks(&keys, dns, yes),
        Command::Diagnose { output, save } => diagnose(output, save),
    }
}

fn list_tasks() -> Result<()> {
    let runner: Arc<dyn CommandRunner> = Arc::new(SystemCommandRunner);
    for task in catalog::build(runner, None) {
        println!(
            "{:<24} {:<22} {}",
            task.def.key,
            task.def.tier.to_string(),
            task.def.label
        );
        if !task.def.description.is_empty() {
            println!("{:<24} {}", "", task.def.description);
        }
    }
    Ok(())
}

fn run_tasks(keys: &[String], dns: Option<String>, yes: bool) -> Result<()> {
    let runner: Arc<dyn CommandRunner> = Arc::new(SystemCommandRunner);
    let tasks = catalog::build(runner, dns);

    for key in keys {
        if !tasks.iter().any(|task| task.def.key == *key) {
            bail!("unknown task key: {key} (run `toolbox list` for the catalog)");
        }
    }

    let selection: Vec<(Task, bool)> = tasks
        .into_iter()
        .map(|task| {
            let selected = keys.contains(&task.def.key);
            (task, selected)
        })
        .collect();

    let outcome = if yes {
        run_selected(selection, &AssumeYes)
    } else {
        run_selected(selection, &TerminalPrompt)
    };

    match outcome {
        RunOutcome::NothingSelected => {
            println!("Nothing selected; pick task keys from `toolbox list`.")
        }
        RunOutcome::Cancelled(_) => println!("Run cancelled; no task was executed."),
        RunOutcome::Completed { executed, failed } => {
            println!("{executed} task(s) executed, {failed} failed. See toolbox.log for details.")
        }
    }
    Ok(())
}

fn diagnose(output: Option<PathBuf>, save: bool) -> Result<()> {
    let runner = SystemCommandRunner;
    let report = run_full_diagnostics(&DiagnosticsPaths::default(), &runner);

    let target = output.or_else(|| {
        save.then(|| {
            let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            PathBuf::from(format!("hid_usb_report_{stamp}.txt"))
        })
    });

    match target {
        Some(path) => {
            std::fs::write(&path, &report)?;
            println!("Report written to {}", path.display());
        }
        None => println!("{report}"),
    }
    Ok(())
}
