//! Implementation of the `scryforge templates` command.

use crate::error::Result;
use crate::template::Template;

/// Execute the `scryforge templates` command.
///
/// Lists every template identifier with its intent and placeholders.
pub fn cmd_templates() -> Result<()> {
    println!("Available templates:");
    println!();

    for template in Template::all() {
        println!("  {}", template.id);
        println!("    Generates {}.", template.intent);
        println!("    Placeholders:");
        for placeholder in template.placeholders {
            println!(
                "      {:<20} (default: {})",
                placeholder.name, placeholder.default
            );
        }
        println!();
    }

    println!("Fill placeholders with `scryforge generate <template> -p key=value`.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_command_succeeds() {
        assert!(cmd_templates().is_ok());
    }
}
