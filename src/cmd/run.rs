use std::io::{self, BufRead, Write};

use scorecard::api::ScorecardSession;
use scorecard::nav::NavigationState;
use scorecard::store::CriterionField;

use crate::reports;

pub fn run(session: &mut ScorecardSession) {
    println!("\n📋 Balanced Scorecard — type 'help' for commands.");
    reports::print_view(session);
    prompt();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if !dispatch(session, line.trim()) {
            break;
        }
        reports::print_view(session);
        prompt();
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

/// Returns false when the session should end.
fn dispatch(session: &mut ScorecardSession, input: &str) -> bool {
    let (cmd, rest) = match input.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (input, ""),
    };

    match cmd {
        "" => {}
        "quit" | "exit" => return false,
        "help" => print_help(),

        "open" => match rest.parse::<usize>() {
            Ok(i) => {
                if let Err(e) = session.open_detail(i) {
                    println!("⚠️  {e}");
                }
            }
            Err(_) => println!("⚠️  usage: open <0-3>"),
        },
        "summary" => session.open_summary(),
        "back" => session.back(),

        "edit" => {
            let on = session.toggle_edit_mode();
            println!("Edit mode {}", if on { "on" } else { "off" });
        }

        "topic" => {
            if require_edit(session) {
                session.set_main_topic(rest);
            }
        }
        "title" => {
            if require_edit(session) {
                match rest.split_once(char::is_whitespace) {
                    Some((idx, text)) => match idx.parse::<usize>() {
                        Ok(i) => {
                            if let Err(e) = session.set_perspective_title(i, text.trim()) {
                                println!("⚠️  {e}");
                            }
                        }
                        Err(_) => println!("⚠️  usage: title <0-3> <text>"),
                    },
                    None => println!("⚠️  usage: title <0-3> <text>"),
                }
            }
        }

        "add" => {
            if require_edit(session) {
                match session.nav_state() {
                    NavigationState::Detail(i) => {
                        if let Err(e) = session.add_criterion(i) {
                            println!("⚠️  {e}");
                        }
                    }
                    _ => println!("⚠️  open a perspective first"),
                }
            }
        }
        "name" => {
            if require_edit(session) {
                criterion_update(session, rest, CriterionField::Name, "name <n> <text>");
            }
        }
        // Ratings stay adjustable even outside edit mode, like the original
        // rating selector.
        "rate" => criterion_update(session, rest, CriterionField::Rating, "rate <n> <value>"),

        other => println!("⚠️  unknown command '{other}'; try 'help'"),
    }
    true
}

fn criterion_update(
    session: &mut ScorecardSession,
    rest: &str,
    field: CriterionField,
    usage: &str,
) {
    let NavigationState::Detail(p_index) = session.nav_state() else {
        println!("⚠️  open a perspective first");
        return;
    };
    match rest.split_once(char::is_whitespace) {
        Some((idx, value)) => match idx.parse::<usize>() {
            Ok(c_index) => {
                if let Err(e) = session.set_criterion_field(p_index, c_index, field, value.trim())
                {
                    println!("⚠️  {e}");
                }
            }
            Err(_) => println!("⚠️  usage: {usage}"),
        },
        None => println!("⚠️  usage: {usage}"),
    }
}

fn require_edit(session: &ScorecardSession) -> bool {
    if session.edit_mode() {
        true
    } else {
        println!("⚠️  edit mode is off; type 'edit' to enable editing");
        false
    }
}

fn print_help() {
    println!("Navigation:");
    println!("  open <0-3>        drill into a perspective");
    println!("  summary           show the evaluation");
    println!("  back              return to the overview");
    println!("Editing:");
    println!("  topic <text>      rename the main topic");
    println!("  title <0-3> <text>  rename a perspective");
    println!("  add               add a criterion (detail view)");
    println!("  name <n> <text>   rename a criterion (detail view)");
    println!("  rate <n> <value>  rate a criterion (detail view)");
    println!("  edit              toggle edit mode");
    println!("Session:");
    println!("  help | quit");
}
