//! Implementation of the `scryforge session` command.
//!
//! The interactive surface of the demo: a line-oriented loop that selects
//! templates, fills parameters, triggers generations, and shows the
//! accumulated in-memory history. The history lives exactly as long as the
//! loop; quitting discards it.

use super::{generate::parse_params, render};
use crate::cli::SessionArgs;
use crate::config::Config;
use crate::error::Result;
use crate::session::{GenerationRequest, Session};
use crate::template::{Template, TemplateId};
use std::io::{self, BufRead, Write};

/// What the loop should do after handling one input line.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum LoopAction {
    Continue,
    Quit,
}

/// Execute the `scryforge session` command.
pub fn cmd_session(args: SessionArgs) -> Result<()> {
    let config = Config::discover()?;
    let mut session = Session::new(config);

    println!("scryforge interactive session");
    println!("Type `generate <template> [key=value ...]`, or just a template name.");
    println!("Other commands: templates, history, help, quit.");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("scryforge> ");
        // A failed flush means stdout is gone; the read below will end too.
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            // EOF or a broken stdin both end the session.
            _ => break,
        };

        if handle_line(&mut session, line.trim(), args.offline) == LoopAction::Quit {
            break;
        }
    }

    println!(
        "Session ended; {} generation(s) discarded with it.",
        session.history().len()
    );

    Ok(())
}

/// Handle one input line against the running session.
///
/// User mistakes are printed, never propagated: the loop survives anything
/// except an explicit quit.
pub(super) fn handle_line(session: &mut Session, line: &str, offline: bool) -> LoopAction {
    let mut words = line.split_whitespace();
    let command = match words.next() {
        Some(word) => word,
        None => return LoopAction::Continue,
    };
    let rest: Vec<String> = words.map(str::to_string).collect();

    match command {
        "quit" | "exit" | "q" => return LoopAction::Quit,
        "help" => print_help(),
        "templates" => {
            for template in Template::all() {
                println!("  {:<13} {}", template.id.to_string(), template.intent);
            }
        }
        "history" => {
            render::print_history(session.history(), session.config().history_display_limit)
        }
        "generate" => match rest.split_first() {
            Some((template, params)) => run_generation(session, template, params, offline),
            None => println!("Usage: generate <template> [key=value ...]"),
        },
        // Shorthand: a bare template identifier generates with defaults.
        other => run_generation(session, other, &rest, offline),
    }

    LoopAction::Continue
}

fn run_generation(session: &mut Session, template: &str, raw_params: &[String], offline: bool) {
    let template: TemplateId = match template.parse() {
        Ok(id) => id,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };

    let params = match parse_params(raw_params) {
        Ok(params) => params,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };

    let mut request = GenerationRequest::new(template);
    request.params = params;
    if offline {
        request = request.offline();
    }

    let history_limit = session.config().history_display_limit;

    match session.generate(request) {
        Ok(record) => {
            render::print_record(record);
            render::print_history(session.history(), history_limit);
            println!();
        }
        Err(err) => println!("{}", err),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  generate <template> [key=value ...]   fill a template and show the result");
    println!("  <template> [key=value ...]            shorthand for generate");
    println!("  templates                             list available templates");
    println!("  history                               show this session's generations");
    println!("  quit                                  end the session (history is discarded)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_session() -> Session {
        Session::new(Config {
            live: false,
            ..Config::default()
        })
    }

    #[test]
    fn quit_ends_the_loop() {
        let mut session = offline_session();
        assert_eq!(handle_line(&mut session, "quit", true), LoopAction::Quit);
        assert_eq!(handle_line(&mut session, "exit", true), LoopAction::Quit);
        assert_eq!(handle_line(&mut session, "q", true), LoopAction::Quit);
    }

    #[test]
    fn empty_line_is_a_no_op() {
        let mut session = offline_session();
        assert_eq!(handle_line(&mut session, "", true), LoopAction::Continue);
        assert!(session.history().is_empty());
    }

    #[test]
    fn generate_appends_to_history() {
        let mut session = offline_session();
        let action = handle_line(
            &mut session,
            "generate token_faucet faucet_name=MyFaucet",
            true,
        );
        assert_eq!(action, LoopAction::Continue);
        assert_eq!(session.history().len(), 1);
        assert!(session.history().latest().unwrap().code.contains("MyFaucet"));
    }

    #[test]
    fn bare_template_name_is_generate_shorthand() {
        let mut session = offline_session();
        handle_line(&mut session, "hello_world", true);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn unknown_template_does_not_end_the_loop_or_append() {
        let mut session = offline_session();
        let action = handle_line(&mut session, "voting", true);
        assert_eq!(action, LoopAction::Continue);
        assert!(session.history().is_empty());
    }

    #[test]
    fn malformed_params_do_not_append() {
        let mut session = offline_session();
        handle_line(&mut session, "generate dex dex_name", true);
        assert!(session.history().is_empty());
    }

    #[test]
    fn consecutive_generations_accumulate() {
        let mut session = offline_session();
        handle_line(&mut session, "hello_world", true);
        handle_line(&mut session, "dex", true);
        assert_eq!(session.history().len(), 2);
        let records = session.history().records();
        assert_eq!(records[0].template, TemplateId::HelloWorld);
        assert_eq!(records[1].template, TemplateId::Dex);
    }

    #[test]
    fn history_and_templates_commands_do_not_append() {
        let mut session = offline_session();
        handle_line(&mut session, "history", true);
        handle_line(&mut session, "templates", true);
        handle_line(&mut session, "help", true);
        assert!(session.history().is_empty());
    }
}
