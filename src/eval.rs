//! The boundary to the host's expression evaluator.
//!
//! In a live debugger session the expression is executed against the
//! debuggee and the formatting routine's output printed by the host.
//! This crate only hands the expression text across the boundary.

use crate::error::Result;

/// Executes an expression string against the live debuggee.
///
/// Errors from an implementation propagate untouched; the command layer
/// never catches or translates them.
pub trait Evaluator {
    /// Submit one expression for evaluation.
    ///
    /// # Errors
    ///
    /// Implementation-defined; surfaced verbatim to the caller.
    fn evaluate(&mut self, expression: &str) -> Result<()>;
}

/// Stand-in evaluator that prints the expression it would submit.
///
/// Used by `xlcmd console` to show exactly what would reach a real
/// evaluator, one line per invocation.
#[derive(Debug, Default)]
pub struct EchoEvaluator;

impl Evaluator for EchoEvaluator {
    fn evaluate(&mut self, expression: &str) -> Result<()> {
        println!("{expression}");
        Ok(())
    }
}
