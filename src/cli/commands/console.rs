//! Console command implementation.
//!
//! A stand-in for the debugger console: reads `<name> <object>` lines,
//! dispatches them through the catalog, and prints the expression each
//! command would submit to a real evaluator. Useful for checking what
//! a command does without a live LLDB session.

use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;

use crate::catalog::Catalog;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::eval::EchoEvaluator;

/// Run the interactive console loop until `quit` or EOF.
///
/// # Errors
///
/// Returns an error if reading stdin fails. Dispatch errors (unknown
/// command) are printed and the loop continues, matching how a
/// debugger console reports a bad command without exiting.
pub fn execute() -> Result<()> {
    let mut dispatcher = Dispatcher::new(Catalog::new(), EchoEvaluator);
    let interactive = io::stdin().is_terminal();

    if interactive {
        println!(
            "{}",
            "xlcmd console - type `help` for commands, `quit` to exit".dimmed()
        );
    }

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        if interactive {
            print!("{} ", "(xl)".cyan().bold());
            io::stdout().flush()?;
        }

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "quit" | "exit" => break,
            "help" => print_help(dispatcher.catalog()),
            typed => {
                if let Err(e) = dispatcher.dispatch(typed) {
                    if let Some(hint) = e.hint() {
                        eprintln!("Error: {e}\n  Hint: {hint}");
                    } else {
                        eprintln!("Error: {e}");
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_help(catalog: &Catalog) {
    for command in catalog.commands() {
        let arg = &command.args()[0];
        println!(
            "  {:14} <{}>  {}",
            command.name().cyan(),
            arg.arg,
            command.description()
        );
    }
    println!("  {:14}        Show this help", "help".cyan());
    println!("  {:14}        Exit the console", "quit".cyan());
}
