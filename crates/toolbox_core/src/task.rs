use std::fmt;

/// Safety tier of a maintenance task.
///
/// Execution always proceeds tier by tier in ascending order, so a
/// reboot-triggering task can never run before the harmless ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Safe to run at any time.
    Safe,
    /// Briefly disruptive while it runs (network drop, display flicker).
    Disruptive,
    /// Triggers an immediate reboot.
    Reboot,
}

impl Tier {
    /// Numeric level, 1..=3.
    pub fn level(self) -> u8 {
        match self {
            Tier::Safe => 1,
            Tier::Disruptive => 2,
            Tier::Reboot => 3,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Safe => write!(f, "tier 1 (safe)"),
            Tier::Disruptive => write!(f, "tier 2 (disruptive)"),
            Tier::Reboot => write!(f, "tier 3 (reboot)"),
        }
    }
}

/// Static description of a maintenance task.
///
/// Defs are registered once at startup and never mutated; the selected
/// flag lives with the caller, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDef {
    /// Unique key within a catalog.
    pub key: String,
    /// Human-readable name.
    pub label: String,
    pub tier: Tier,
    /// Longer description shown in listings.
    pub description: String,
    /// Extra warning logged right before the task runs.
    pub warning: Option<String>,
    /// DNS-changing tasks add an extra line to the disruptive gate.
    pub dns_related: bool,
}

impl TaskDef {
    pub fn new(key: impl Into<String>, label: impl Into<String>, tier: Tier) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            tier,
            description: String::new(),
            warning: None,
            dns_related: false,
        }
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn with_warning(mut self, text: impl Into<String>) -> Self {
        self.warning = Some(text.into());
        self
    }

    /// Marks the task as DNS-related.
    pub fn dns(mut self) -> Self {
        self.dns_related = true;
        self
    }
}
