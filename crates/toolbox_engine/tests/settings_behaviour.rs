use std::sync::{Arc, Mutex, Once};

use toolbox_engine::{
    disable_uwp_background, enable_game_mode, CommandOutput, CommandRunner, ExecError,
    MemorySettingsStore, RegistryStore, SettingsStore,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(toolbox_logging::initialize_for_tests);
}

/// Records every invocation instead of touching the real registry.
#[derive(Default)]
struct RecordingRunner {
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl RecordingRunner {
    fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ExecError> {
        self.calls.lock().unwrap().push((
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        ));
        Ok(CommandOutput {
            code: Some(0),
            stdout: String::new(),
        })
    }
}

#[test]
fn registry_store_builds_the_reg_add_argument_vector() {
    init_logging();
    let runner = Arc::new(RecordingRunner::default());
    let store = RegistryStore::new(runner.clone());

    store
        .set_dword(r"Software\Microsoft\GameBar", "GameModeEnabled", 1)
        .unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    let (program, args) = &calls[0];
    assert_eq!(program, "reg");
    assert_eq!(
        args,
        &[
            "add",
            r"HKCU\Software\Microsoft\GameBar",
            "/v",
            "GameModeEnabled",
            "/t",
            "REG_DWORD",
            "/d",
            "1",
            "/f",
        ]
    );
}

#[test]
fn enable_game_mode_sets_both_flags() {
    init_logging();
    let store = MemorySettingsStore::new();

    enable_game_mode(&store).unwrap();

    assert_eq!(store.get(r"Software\Microsoft\GameBar", "GameModeEnabled"), Some(1));
    assert_eq!(
        store.get(r"Software\Microsoft\GameBar", "AutoGameModeEnabled"),
        Some(1)
    );
}

#[test]
fn disable_uwp_background_writes_all_three_paths() {
    init_logging();
    let store = MemorySettingsStore::new();

    disable_uwp_background(&store).unwrap();

    for path in [
        r"Software\Microsoft\Windows\CurrentVersion\BackgroundAccessApplications",
        r"Software\Microsoft\Windows\CurrentVersion\Search",
        r"Software\Microsoft\Windows\CurrentVersion\Search\BackgroundAccess",
    ] {
        assert_eq!(store.get(path, "Disabled"), Some(1));
    }
}
