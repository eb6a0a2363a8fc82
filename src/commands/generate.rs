//! Implementation of the `scryforge generate` command.
//!
//! One-shot generation: the session (and therefore the history) lives only
//! for the duration of this command.

use super::render;
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{ForgeError, Result};
use crate::session::{Complexity, GenerationRequest, Session};
use crate::template::TemplateId;
use std::collections::HashMap;

/// Execute the `scryforge generate` command.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let config = Config::discover()?;

    let template: TemplateId = args.template.parse()?;
    let params = parse_params(&args.params)?;
    let complexity = Complexity::parse(&args.complexity).ok_or_else(|| {
        ForgeError::UserError(format!(
            "invalid complexity '{}'. Use simple, intermediate, or advanced.",
            args.complexity
        ))
    })?;

    let mut session = Session::new(config);
    let request = GenerationRequest {
        template,
        params,
        complexity,
        offline: args.offline,
    };

    let record = session.generate(request)?;
    render::print_record(record);

    Ok(())
}

/// Parse repeated `KEY=VALUE` arguments into a parameter map.
///
/// Later values win when a key repeats; values may contain `=`.
pub(super) fn parse_params(raw: &[String]) -> Result<HashMap<String, String>> {
    let mut params = HashMap::new();

    for pair in raw {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            ForgeError::UserError(format!(
                "invalid parameter '{}': expected KEY=VALUE",
                pair
            ))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(ForgeError::UserError(format!(
                "invalid parameter '{}': empty key",
                pair
            )));
        }

        params.insert(key.to_string(), value.to_string());
    }

    Ok(params)
}
