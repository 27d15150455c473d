//! Formatting functions for UI output.
//!
//! Display logic only; user interaction lives in the parent module.

use console::style;

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Print a bold section title, e.g. `=== Repository Status ===`.
pub fn display_section(title: &str) {
    println!("{}", style(format!("=== {} ===", title)).bold());
}

/// Text to show for a command's stdout, with a placeholder when it is empty.
pub fn or_placeholder<'a>(output: &'a str, placeholder: &'a str) -> &'a str {
    if output.trim().is_empty() {
        placeholder
    } else {
        output
    }
}

/// Print command output, or the placeholder when there is none.
pub fn display_output(output: &str, placeholder: &str) {
    println!("{}", or_placeholder(output, placeholder));
}

/// Display the proposed tag change (or initial tag).
///
/// # Arguments
/// * `old_tag` - Previous tag (None if this is the initial tag)
/// * `new_tag` - The new tag being proposed
pub fn display_proposed_tag(old_tag: Option<&str>, new_tag: &str) {
    match old_tag {
        Some(old) => {
            println!("\n{}", style("Proposed Tag Change:").bold());
            println!("  From: {}", style(old).red());
            println!("  To:   {}", style(new_tag).green());
        }
        None => {
            println!("\n{}", style("Initial Tag:").bold());
            println!("  New tag: {}", style(new_tag).green());
        }
    }
}

/// Display manual push instruction for a tag created locally.
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    println!(
        "\n{} To push this tag later, run:\n  {}",
        style("→").yellow(),
        style(format!("git push {} {}", remote, tag)).cyan()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder("", "(no output)"), "(no output)");
        assert_eq!(or_placeholder("  \n", "No stashes found"), "No stashes found");
        assert_eq!(or_placeholder("M src/lib.rs", "(no output)"), "M src/lib.rs");
    }

    #[test]
    fn test_display_functions_do_not_panic() {
        display_error("test error");
        display_success("test success");
        display_status("test status");
        display_section("Test");
        display_boundary_warning(&BoundaryWarning::NoVersionTags {
            next_tag: "v0.1.0".to_string(),
        });
    }
}
