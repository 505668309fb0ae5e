use std::sync::Once;

use toolbox_core::{GateKind, RunPlan, TaskDef, Tier};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(toolbox_logging::initialize_for_tests);
}

fn def(key: &str, tier: Tier) -> TaskDef {
    TaskDef::new(key, key.to_uppercase(), tier)
}

fn keys(defs: &[TaskDef]) -> Vec<&str> {
    defs.iter().map(|d| d.key.as_str()).collect()
}

#[test]
fn tier_groups_respect_level_order_regardless_of_input_order() {
    init_logging();
    let plan = RunPlan::build(vec![
        (def("reboot_now", Tier::Reboot), true),
        (def("refresh_dwm", Tier::Disruptive), true),
        (def("clean_temp", Tier::Safe), true),
    ]);

    let [(t1, safe), (t2, disruptive), (t3, reboot)] = plan.groups();
    assert_eq!(t1, Tier::Safe);
    assert_eq!(t2, Tier::Disruptive);
    assert_eq!(t3, Tier::Reboot);
    assert_eq!(keys(safe), vec!["clean_temp"]);
    assert_eq!(keys(disruptive), vec!["refresh_dwm"]);
    assert_eq!(keys(reboot), vec!["reboot_now"]);
}

#[test]
fn relative_order_within_group_follows_input() {
    init_logging();
    let plan = RunPlan::build(vec![
        (def("a", Tier::Safe), true),
        (def("x", Tier::Disruptive), true),
        (def("b", Tier::Safe), true),
        (def("y", Tier::Disruptive), true),
        (def("c", Tier::Safe), true),
    ]);

    let [(_, safe), (_, disruptive), _] = plan.groups();
    assert_eq!(keys(safe), vec!["a", "b", "c"]);
    assert_eq!(keys(disruptive), vec!["x", "y"]);
}

#[test]
fn unselected_tasks_are_excluded_from_groups_and_gates() {
    init_logging();
    let plan = RunPlan::build(vec![
        (def("clean_temp", Tier::Safe), true),
        (def("refresh_dwm", Tier::Disruptive), false),
        (def("reboot_now", Tier::Reboot), false),
    ]);

    assert_eq!(plan.task_count(), 1);
    assert!(plan.gates().is_empty());
}

#[test]
fn empty_selection_builds_empty_plan() {
    init_logging();
    let plan = RunPlan::build(vec![(def("clean_temp", Tier::Safe), false)]);

    assert!(plan.is_empty());
    assert!(plan.gates().is_empty());
}

#[test]
fn safe_only_selection_needs_no_confirmation() {
    init_logging();
    let plan = RunPlan::build(vec![
        (def("clean_temp", Tier::Safe), true),
        (def("flush_dns", Tier::Safe), true),
    ]);

    assert!(plan.gates().is_empty());
}

#[test]
fn disruptive_selection_raises_a_single_gate() {
    init_logging();
    let plan = RunPlan::build(vec![(def("refresh_dwm", Tier::Disruptive), true)]);

    assert_eq!(plan.gates().len(), 1);
    let gate = &plan.gates()[0];
    assert_eq!(gate.kind, GateKind::Disruptive);
    assert!(gate.message.contains("Run them now?"));
    assert!(!gate.message.contains("netsh"));
}

#[test]
fn dns_task_adds_extra_warning_to_disruptive_gate() {
    init_logging();
    let plan = RunPlan::build(vec![(
        def("set_dns", Tier::Disruptive).dns(),
        true,
    )]);

    assert!(plan.gates()[0].message.contains("netsh"));
    assert!(plan.gates()[0].message.contains("drop the network"));
}

#[test]
fn reboot_gate_comes_after_disruptive_gate() {
    init_logging();
    let plan = RunPlan::build(vec![
        (def("reboot_now", Tier::Reboot), true),
        (def("refresh_dwm", Tier::Disruptive), true),
    ]);

    let kinds: Vec<GateKind> = plan.gates().iter().map(|g| g.kind).collect();
    assert_eq!(kinds, vec![GateKind::Disruptive, GateKind::Reboot]);
    assert!(plan.gates()[1].message.contains("immediate reboot"));
}

#[test]
fn reboot_only_selection_raises_only_the_reboot_gate() {
    init_logging();
    let plan = RunPlan::build(vec![(def("reboot_now", Tier::Reboot), true)]);

    let kinds: Vec<GateKind> = plan.gates().iter().map(|g| g.kind).collect();
    assert_eq!(kinds, vec![GateKind::Reboot]);
}
