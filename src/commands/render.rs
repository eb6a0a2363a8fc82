//! Shared output rendering for generation results and history.

use crate::mock;
use crate::score::ScoreReport;
use crate::session::{GenerationRecord, SessionHistory};

/// Print one generation record in full: code, metrics, score breakdown, and
/// the mock build transcript.
pub fn print_record(record: &GenerationRecord) {
    println!(
        "Generated blueprint '{}' ({})",
        record.blueprint_name, record.template
    );
    println!("========================================");
    println!();
    println!("{}", record.code.trim_end());
    println!();

    println!("Code quality: {}", record.score);
    print_breakdown(&record.score);
    println!();

    println!("  Source:      {}", record.source);
    println!("  Lines:       {}", record.code_lines);
    println!("  Complexity:  {}", record.complexity);
    println!("  Status:      {}", record.status);
    println!();

    println!("Build output");
    println!("------------");
    println!("{}", mock::build_transcript(&record.blueprint_name));
}

/// Print the per-row checklist outcomes in checklist order.
pub fn print_breakdown(score: &ScoreReport) {
    for row in &score.breakdown {
        let mark = if row.satisfied { "x" } else { " " };
        println!("  [{}] {}", mark, row.label);
    }
}

/// Print the session history, most recent first, capped at `limit` rows.
pub fn print_history(history: &SessionHistory, limit: usize) {
    if history.is_empty() {
        println!("No generations yet this session.");
        return;
    }

    println!("Generation history ({} total):", history.len());
    for (index, record) in history
        .records()
        .iter()
        .enumerate()
        .rev()
        .take(limit)
    {
        println!(
            "  {:>3}. {}  {:<13} {:<16} {}  {}  ({})",
            index + 1,
            record.ts.format("%H:%M:%S"),
            record.template.to_string(),
            record.blueprint_name,
            record.score,
            record.status,
            record.source
        );
    }

    if history.len() > limit {
        println!("  ... {} earlier record(s) not shown", history.len() - limit);
    }
}
