//! Terminal confirmation prompts.

use std::io::{self, BufRead, Write};

use toolbox_core::ConfirmationGate;
use toolbox_engine::ConfirmationPrompt;

/// Asks on the terminal; only `y`/`yes` (case-insensitive) confirms.
pub struct TerminalPrompt;

impl ConfirmationPrompt for TerminalPrompt {
    fn confirm(&self, gate: &ConfirmationGate) -> bool {
        println!("\n{}", gate.message);
        print!("[y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Accepts every gate; used by `--yes` scripted runs. The warning text
/// is still printed so the operator sees what was waved through.
pub struct AssumeYes;

impl ConfirmationPrompt for AssumeYes {
    fn confirm(&self, gate: &ConfirmationGate) -> bool {
        println!("\n{}\n(auto-confirmed by --yes)", gate.message);
        true
    }
}
