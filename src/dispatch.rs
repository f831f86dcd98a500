//! Command-line dispatch: the host stand-in.
//!
//! In LLDB the host owns tokenization and routing; here the dispatcher
//! plays that role for the `console` subcommand and the tests. It
//! splits a typed line on whitespace, resolves the first token against
//! the catalog, and forwards the remaining tokens as raw positional
//! arguments. It performs no arity or type checking — a malformed
//! invocation produces a malformed expression for the evaluator to
//! reject.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::eval::Evaluator;

/// Routes typed command lines to catalog commands.
pub struct Dispatcher<E> {
    catalog: Catalog,
    evaluator: E,
}

impl<E: Evaluator> Dispatcher<E> {
    pub fn new(catalog: Catalog, evaluator: E) -> Self {
        Self { catalog, evaluator }
    }

    /// The catalog this dispatcher routes into.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Dispatch one console line. Empty lines are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] when the first token matches
    /// no catalog entry, or whatever the evaluator returns.
    pub fn dispatch(&mut self, line: &str) -> Result<()> {
        let mut tokens = line.split_ascii_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(());
        };

        let command = self
            .catalog
            .find(name)
            .ok_or_else(|| Error::UnknownCommand {
                name: name.to_string(),
            })?;

        let arguments: Vec<String> = tokens.map(ToString::to_string).collect();
        debug!(command = name, argc = arguments.len(), "dispatching");
        command.run(&arguments, &BTreeMap::new(), &mut self.evaluator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording {
        submitted: Vec<String>,
    }

    impl Evaluator for Recording {
        fn evaluate(&mut self, expression: &str) -> Result<()> {
            self.submitted.push(expression.to_string());
            Ok(())
        }
    }

    fn dispatcher() -> Dispatcher<Recording> {
        Dispatcher::new(Catalog::new(), Recording::default())
    }

    #[test]
    fn test_dispatch_resolves_by_name() {
        let mut d = dispatcher();
        d.dispatch("tree myTreePtr").unwrap();
        assert_eq!(d.evaluator.submitted, vec!["debugp(myTreePtr)"]);
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let mut d = dispatcher();
        let err = d.dispatch("frobnicate x").unwrap_err();
        assert!(matches!(err, Error::UnknownCommand { ref name } if name == "frobnicate"));
    }

    #[test]
    fn test_dispatch_empty_line_is_noop() {
        let mut d = dispatcher();
        d.dispatch("   ").unwrap();
        assert!(d.evaluator.submitted.is_empty());
    }

    #[test]
    fn test_dispatch_enforces_no_arity() {
        // A bare command name reaches the evaluator as a degenerate
        // expression; this layer does not reject it.
        let mut d = dispatcher();
        d.dispatch("types").unwrap();
        assert_eq!(d.evaluator.submitted, vec!["debugt()"]);
    }

    #[test]
    fn test_dispatch_passes_tokens_verbatim() {
        let mut d = dispatcher();
        d.dispatch("value 0xdeadbeef extra").unwrap();
        assert_eq!(d.evaluator.submitted, vec!["debugv(0xdeadbeef)"]);
    }
}
