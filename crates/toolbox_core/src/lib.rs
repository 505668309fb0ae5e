//! Toolbox core: pure task planning and diagnostic report helpers.
mod device_id;
mod plan;
mod report;
mod task;

pub use device_id::{resolve_vid_pid, DeviceId};
pub use plan::{ConfirmationGate, GateKind, RunPlan};
pub use report::{render_report, Section};
pub use task::{TaskDef, Tier};
