//! Session state and the generation orchestrator.
//!
//! A [`Session`] owns everything one interactive run needs: the config, the
//! optional external generation client, and the append-only history. History
//! starts empty when the session is constructed and is dropped with it;
//! nothing is persisted.
//!
//! One generation runs to completion before the next is accepted; the only
//! suspension point is the timeout-bounded external call inside
//! [`Session::generate`].

use crate::config::Config;
use crate::error::Result;
use crate::llm::{self, LlmClient};
use crate::mock;
use crate::score::{Checklist, ScoreReport};
use crate::template::{Template, TemplateId};
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Complexity label attached to a request (display metadata only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    #[default]
    Simple,
    Intermediate,
    Advanced,
}

impl Complexity {
    /// Parse a complexity label (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Some(Complexity::Simple),
            "intermediate" => Some(Complexity::Intermediate),
            "advanced" => Some(Complexity::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Simple => write!(f, "Simple"),
            Complexity::Intermediate => write!(f, "Intermediate"),
            Complexity::Advanced => write!(f, "Advanced"),
        }
    }
}

/// One generation request: a template choice plus parameter values.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub template: TemplateId,
    pub params: HashMap<String, String>,
    pub complexity: Complexity,
    /// Skip the external call even when the config enables it.
    pub offline: bool,
}

impl GenerationRequest {
    pub fn new(template: TemplateId) -> Self {
        Self {
            template,
            params: HashMap::new(),
            complexity: Complexity::default(),
            offline: false,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }
}

/// Where the recorded code came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationSource {
    /// The template filler.
    Template,
    /// The external model's reply.
    Assistant,
}

impl fmt::Display for GenerationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationSource::Template => write!(f, "template"),
            GenerationSource::Assistant => write!(f, "assistant"),
        }
    }
}

/// The result of one generation, as appended to history.
///
/// Records are immutable once appended; the score was computed from this
/// record's own code text and never changes.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRecord {
    /// When the generation completed.
    pub ts: DateTime<Utc>,
    /// Which template was requested.
    pub template: TemplateId,
    /// The blueprint name after parameter resolution.
    pub blueprint_name: String,
    /// Where the code came from.
    pub source: GenerationSource,
    /// The generated code text.
    pub code: String,
    /// Line count of the generated code.
    pub code_lines: usize,
    /// Checklist score for the generated code.
    pub score: ScoreReport,
    /// Complexity label from the request.
    pub complexity: Complexity,
    /// The fixed mock status string.
    pub status: String,
}

/// Append-only, in-memory log of the session's generations.
///
/// Created empty with the session and discarded with it. Records keep their
/// append order; nothing here reorders or rewrites them.
#[derive(Debug, Default)]
pub struct SessionHistory {
    records: Vec<GenerationRecord>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return a reference to it.
    fn append(&mut self, record: GenerationRecord) -> &GenerationRecord {
        self.records.push(record);
        // Just pushed; the vec is non-empty.
        self.records.last().expect("history append")
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in append order.
    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    /// The most recently appended record.
    pub fn latest(&self) -> Option<&GenerationRecord> {
        self.records.last()
    }
}

/// The session orchestrator.
///
/// Drives one interaction at a time: fill, optionally substitute the external
/// model's code, score, stamp the mock status, append to history.
pub struct Session {
    config: Config,
    checklist: Checklist,
    llm: Option<LlmClient>,
    history: SessionHistory,
}

impl Session {
    /// Start a session with empty history.
    pub fn new(config: Config) -> Self {
        let llm = config.live.then(|| LlmClient::from_config(&config));

        Self {
            config,
            checklist: Checklist::standard(),
            llm,
            history: SessionHistory::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Run one generation to completion and append its record.
    ///
    /// The external call, when configured and not opted out of, replaces the
    /// templated code on success; on any [`llm::Unavailable`] reason the
    /// templated code stands. Exactly one record is appended per call.
    pub fn generate(&mut self, request: GenerationRequest) -> Result<&GenerationRecord> {
        let template = Template::get(request.template);
        let templated = template.fill(&request.params)?;

        let (code, source) = match self.try_external(template, request.offline) {
            Some(code) => (code, GenerationSource::Assistant),
            None => (templated, GenerationSource::Template),
        };

        let score = self.checklist.score(&code);
        let blueprint_name = template.blueprint_name(&request.params);
        let code_lines = code.lines().count();

        let record = GenerationRecord {
            ts: Utc::now(),
            template: request.template,
            blueprint_name,
            source,
            code,
            code_lines,
            score,
            complexity: request.complexity,
            status: mock::STATUS.to_string(),
        };

        Ok(self.history.append(record))
    }

    /// The explicit fallback branch: `Some(code)` only when the external call
    /// is enabled, attempted, and returned usable code.
    fn try_external(&self, template: &Template, offline: bool) -> Option<String> {
        if offline {
            return None;
        }

        let client = self.llm.as_ref()?;
        let prompt = llm::build_prompt(template);

        match client.generate(&prompt) {
            Ok(code) => Some(code),
            Err(reason) => {
                debug!("external generation unavailable ({}); falling back", reason);
                None
            }
        }
    }
}
