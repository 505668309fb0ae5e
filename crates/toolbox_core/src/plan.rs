use crate::{TaskDef, Tier};

/// Which confirmation a gate asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    Disruptive,
    Reboot,
}

/// A question the operator must answer with yes before anything runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationGate {
    pub kind: GateKind,
    pub message: String,
}

/// Selected tasks partitioned into tier groups, plus the confirmations
/// required before the run may start.
///
/// Partitioning preserves the relative order of the input within each
/// group; group order is always Safe, Disruptive, Reboot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunPlan {
    safe: Vec<TaskDef>,
    disruptive: Vec<TaskDef>,
    reboot: Vec<TaskDef>,
    gates: Vec<ConfirmationGate>,
}

impl RunPlan {
    /// Builds a plan from an ordered selection. Unselected defs are
    /// excluded from both execution and confirmation logic.
    pub fn build<I>(selection: I) -> RunPlan
    where
        I: IntoIterator<Item = (TaskDef, bool)>,
    {
        let mut plan = RunPlan::default();
        for (def, selected) in selection {
            if !selected {
                continue;
            }
            match def.tier {
                Tier::Safe => plan.safe.push(def),
                Tier::Disruptive => plan.disruptive.push(def),
                Tier::Reboot => plan.reboot.push(def),
            }
        }

        if !plan.disruptive.is_empty() {
            let dns = plan.disruptive.iter().any(|def| def.dns_related);
            plan.gates.push(ConfirmationGate {
                kind: GateKind::Disruptive,
                message: disruptive_message(dns),
            });
        }
        if !plan.reboot.is_empty() {
            plan.gates.push(ConfirmationGate {
                kind: GateKind::Reboot,
                message: reboot_message(),
            });
        }
        plan
    }

    /// True when nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.task_count() == 0
    }

    pub fn task_count(&self) -> usize {
        self.safe.len() + self.disruptive.len() + self.reboot.len()
    }

    /// Tier groups in execution order.
    pub fn groups(&self) -> [(Tier, &[TaskDef]); 3] {
        [
            (Tier::Safe, self.safe.as_slice()),
            (Tier::Disruptive, self.disruptive.as_slice()),
            (Tier::Reboot, self.reboot.as_slice()),
        ]
    }

    /// Confirmations to ask, in order. Empty when only safe tasks were
    /// selected.
    pub fn gates(&self) -> &[ConfirmationGate] {
        &self.gates
    }
}

fn disruptive_message(dns: bool) -> String {
    let mut lines = vec!["Some of the selected tasks need care while they run:".to_string()];
    if dns {
        lines.push(
            "- some operations change DNS through netsh and will briefly drop the network;"
                .to_string(),
        );
    }
    lines.push("- the display may flicker or briefly go black;".to_string());
    lines.push("- avoid using the computer while they execute.".to_string());
    lines.push(String::new());
    lines.push("Run them now?".to_string());
    lines.join("\n")
}

fn reboot_message() -> String {
    [
        "A selected task triggers an immediate reboot.",
        "The reboot happens after every other task has finished.",
        "",
        "Please confirm:",
        "1. all important files are saved;",
        "2. the reboot is the last step of this run.",
        "",
        "Continue?",
    ]
    .join("\n")
}
