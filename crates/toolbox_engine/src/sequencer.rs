//! Drives a run plan: confirmation gates first, then the tier groups in
//! order, one task at a time.

use std::collections::HashMap;

use thiserror::Error;
use toolbox_core::{ConfirmationGate, GateKind, RunPlan, TaskDef};
use toolbox_logging::{toolbox_error, toolbox_info, toolbox_warn};

use crate::exec::ExecError;
use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Exec(#[from] ExecError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

/// The operation a task performs when it runs. Zero arguments; whatever
/// it needs is captured at registration time.
pub type TaskAction = Box<dyn Fn() -> Result<(), TaskError>>;

/// A registered task: static definition plus the operation to invoke.
pub struct Task {
    pub def: TaskDef,
    action: TaskAction,
}

impl Task {
    pub fn new(def: TaskDef, action: impl Fn() -> Result<(), TaskError> + 'static) -> Self {
        Self {
            def,
            action: Box::new(action),
        }
    }
}

/// Asks the operator to approve a gate. The decision is an explicit
/// bool so the sequencer stays free of any presentation layer.
pub trait ConfirmationPrompt {
    fn confirm(&self, gate: &ConfirmationGate) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    NothingSelected,
    /// The operator declined a gate; nothing was executed.
    Cancelled(GateKind),
    Completed {
        executed: usize,
        failed: usize,
    },
}

/// Runs the selected tasks tier by tier.
///
/// Task keys must be unique. A declined confirmation aborts the whole
/// run before any side effect; a failing task is logged and the run
/// continues with the next one.
pub fn run_selected(tasks: Vec<(Task, bool)>, prompt: &dyn ConfirmationPrompt) -> RunOutcome {
    let selection: Vec<(TaskDef, bool)> = tasks
        .iter()
        .map(|(task, selected)| (task.def.clone(), *selected))
        .collect();
    let plan = RunPlan::build(selection);

    if plan.is_empty() {
        toolbox_info!("No tasks selected; nothing to do.");
        return RunOutcome::NothingSelected;
    }

    for gate in plan.gates() {
        if !prompt.confirm(gate) {
            let what = match gate.kind {
                GateKind::Disruptive => "disruptive-task",
                GateKind::Reboot => "reboot",
            };
            toolbox_info!("Operator cancelled the run at the {what} confirmation.");
            return RunOutcome::Cancelled(gate.kind);
        }
    }

    let mut actions: HashMap<String, Task> = tasks
        .into_iter()
        .filter(|(_, selected)| *selected)
        .map(|(task, _)| (task.def.key.clone(), task))
        .collect();

    toolbox_info!("========== starting selected tasks ==========");
    let mut executed = 0;
    let mut failed = 0;
    for (tier, group) in plan.groups() {
        if group.is_empty() {
            continue;
        }
        toolbox_info!("[{tier}] {} task(s).", group.len());
        for def in group {
            let Some(task) = actions.remove(def.key.as_str()) else {
                continue;
            };
            executed += 1;
            if !run_single(&task) {
                failed += 1;
            }
        }
    }
    toolbox_info!(
        "========== all tasks finished (if a reboot task was selected the system restarts now) =========="
    );
    RunOutcome::Completed { executed, failed }
}

fn run_single(task: &Task) -> bool {
    toolbox_info!("-> starting: {}", task.def.label);
    if let Some(warning) = &task.def.warning {
        toolbox_warn!("   note: {warning}");
    }
    match (task.action)() {
        Ok(()) => {
            toolbox_info!("done: {}", task.def.label);
            true
        }
        Err(err) => {
            toolbox_error!("failed: {} | error: {err}", task.def.label);
            false
        }
    }
}
