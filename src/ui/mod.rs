//! User interface module - interaction (prompts) and formatting.
//!
//! - `formatter` - Output formatting
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_manual_push_instruction, display_output,
    display_proposed_tag, display_section, display_status, display_success,
};

/// Interprets a yes/no answer where anything but "y"/"yes" means no.
pub fn is_affirmative(answer: &str) -> bool {
    let response = answer.trim().to_lowercase();
    response == "y" || response == "yes"
}

/// Prompts on stdout and reads one answer from `input`.
pub fn confirm_from<R: BufRead>(prompt: &str, input: &mut R) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Default is "no" if user presses Enter.
pub fn confirm_action(prompt: &str) -> Result<bool> {
    confirm_from(prompt, &mut io::stdin().lock())
}
