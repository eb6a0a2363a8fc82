//! The fixed template set and the filler that turns a template plus caller
//! parameters into blueprint source text.
//!
//! Templates are static data defined at process start: a skeleton with
//! `{{name}}` markers, a defaults table, and a one-line intent used to phrase
//! the external generation prompt. Filling never leaves a raw marker in the
//! output: a placeholder the caller did not supply falls back to the
//! template's default.

mod fill;
mod skeletons;

pub use fill::{RenderError, render};

use crate::error::{ForgeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Identifier for one of the supported blueprint kinds.
///
/// This is the full fixed enumeration; anything else fails to parse with
/// [`ForgeError::UnknownTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    HelloWorld,
    TokenFaucet,
    Nft,
    Dex,
}

impl TemplateId {
    /// All template identifiers, in display order.
    pub const ALL: [TemplateId; 4] = [
        TemplateId::HelloWorld,
        TemplateId::TokenFaucet,
        TemplateId::Nft,
        TemplateId::Dex,
    ];

    /// The canonical identifier string (what users type).
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::HelloWorld => "hello_world",
            TemplateId::TokenFaucet => "token_faucet",
            TemplateId::Nft => "nft",
            TemplateId::Dex => "dex",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hello_world" => Ok(TemplateId::HelloWorld),
            "token_faucet" => Ok(TemplateId::TokenFaucet),
            "nft" => Ok(TemplateId::Nft),
            "dex" => Ok(TemplateId::Dex),
            other => Err(ForgeError::UnknownTemplate(other.to_string())),
        }
    }
}

/// A placeholder name with its template-specific default value.
#[derive(Debug, Clone, Copy)]
pub struct Placeholder {
    pub name: &'static str,
    pub default: &'static str,
}

/// A fixed blueprint template: skeleton, defaults, and prompt intent.
#[derive(Debug)]
pub struct Template {
    /// The identifier this template answers to.
    pub id: TemplateId,
    /// One-line natural-language intent, interpolated into the external
    /// generation prompt.
    pub intent: &'static str,
    /// Placeholder whose value names the blueprint (also feeds the mock
    /// build transcript).
    pub name_placeholder: &'static str,
    /// Skeleton source with `{{name}}` markers.
    pub skeleton: &'static str,
    /// Defaults table; covers every marker that appears in the skeleton.
    pub placeholders: &'static [Placeholder],
}

impl Template {
    /// Look up the template for an identifier.
    pub fn get(id: TemplateId) -> &'static Template {
        // The table is keyed in enumeration order; keep it that way.
        &skeletons::TEMPLATES[id as usize]
    }

    /// All templates, in display order.
    pub fn all() -> &'static [Template] {
        &skeletons::TEMPLATES
    }

    /// The default value for a placeholder, if the template declares it.
    pub fn default_for(&self, name: &str) -> Option<&'static str> {
        self.placeholders
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.default)
    }

    /// Fill the skeleton with caller parameters.
    ///
    /// Every marker is substituted: caller parameters win, the defaults table
    /// backs up anything the caller omitted. Parameters that match no marker
    /// are ignored. The output is complete text with no markers left; no
    /// claim is made that it is valid Scrypto.
    pub fn fill(&self, params: &HashMap<String, String>) -> Result<String> {
        render(self.skeleton, |name| {
            params
                .get(name)
                .cloned()
                .or_else(|| self.default_for(name).map(str::to_string))
        })
        .map_err(|e| {
            ForgeError::UserError(format!(
                "template '{}' failed to render: {}",
                self.id, e
            ))
        })
    }

    /// The blueprint name for this request: the naming parameter if the
    /// caller set it, otherwise its default.
    pub fn blueprint_name(&self, params: &HashMap<String, String>) -> String {
        params
            .get(self.name_placeholder)
            .cloned()
            .unwrap_or_else(|| {
                self.default_for(self.name_placeholder)
                    .unwrap_or(self.name_placeholder)
                    .to_string()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn every_template_fills_with_empty_params() {
        for template in Template::all() {
            let code = template.fill(&HashMap::new()).unwrap();
            assert!(!code.is_empty(), "{} produced empty output", template.id);
            assert!(
                !code.contains("{{"),
                "{} left an unresolved marker:\n{}",
                template.id,
                code
            );
        }
    }

    #[test]
    fn every_skeleton_marker_has_a_default() {
        // Walk each skeleton's markers through the defaults table alone.
        for template in Template::all() {
            let result = render(template.skeleton, |name| {
                template.default_for(name).map(str::to_string)
            });
            assert!(
                result.is_ok(),
                "{} has a marker without a default: {:?}",
                template.id,
                result
            );
        }
    }

    #[test]
    fn table_order_matches_enumeration() {
        for (index, template) in Template::all().iter().enumerate() {
            assert_eq!(template.id as usize, index);
            assert!(std::ptr::eq(Template::get(template.id), template));
        }
    }

    #[test]
    fn unknown_identifier_fails_to_parse() {
        let err = "voting".parse::<TemplateId>().unwrap_err();
        match err {
            ForgeError::UnknownTemplate(name) => assert_eq!(name, "voting"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn identifier_round_trips() {
        for id in TemplateId::ALL {
            assert_eq!(id.as_str().parse::<TemplateId>().unwrap(), id);
        }
    }

    #[test]
    fn identifier_serde_uses_snake_case() {
        let json = serde_json::to_string(&TemplateId::TokenFaucet).unwrap();
        assert_eq!(json, "\"token_faucet\"");
        let id: TemplateId = serde_json::from_str("\"hello_world\"").unwrap();
        assert_eq!(id, TemplateId::HelloWorld);
    }

    #[test]
    fn caller_parameters_override_defaults() {
        let template = Template::get(TemplateId::TokenFaucet);
        let code = template
            .fill(&params(&[("faucet_name", "MyFaucet")]))
            .unwrap();
        assert!(code.contains("MyFaucet"));
        assert!(!code.contains("{{"));
        // Unset placeholders fall back to defaults.
        assert!(code.contains("FAUCET"));
        assert!(code.contains("dec!(10)"));
    }

    #[test]
    fn extraneous_parameters_are_ignored() {
        let template = Template::get(TemplateId::HelloWorld);
        let code = template
            .fill(&params(&[("not_a_placeholder", "zzz")]))
            .unwrap();
        assert!(!code.contains("zzz"));
        assert!(code.contains("HelloWorld"));
    }

    #[test]
    fn hello_world_defaults_appear_in_output() {
        let template = Template::get(TemplateId::HelloWorld);
        let code = template.fill(&HashMap::new()).unwrap();
        assert!(code.contains("struct HelloWorld"));
        assert!(code.contains("Hello from Scrypto!"));
    }

    #[test]
    fn blueprint_name_prefers_caller_value() {
        let template = Template::get(TemplateId::Dex);
        assert_eq!(template.blueprint_name(&HashMap::new()), "SimpleDex");
        assert_eq!(
            template.blueprint_name(&params(&[("dex_name", "OrderFlow")])),
            "OrderFlow"
        );
    }
}
