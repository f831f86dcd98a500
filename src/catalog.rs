//! The inspection command catalog.
//!
//! Each command names a formatting routine compiled into the debuggee
//! (`debugp`, `debugv`, ...) and forwards a single object reference to it
//! through the host's expression evaluator. The commands differ only in
//! name, description, argument label, and target entry point, so one
//! generic [`InspectCommand`] covers all of them.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::eval::Evaluator;

// ── Argument metadata ─────────────────────────────────────────

/// Descriptor of one command parameter.
///
/// `type_label` is display-only documentation for the host's help
/// system; nothing validates arguments against it.
#[derive(Debug, Clone, Serialize)]
pub struct ArgSpec {
    /// Parameter name shown in usage text.
    pub arg: &'static str,
    /// Declared debuggee-side type, e.g. `Tree *`. Informational only.
    pub type_label: &'static str,
    /// One-line help for the parameter.
    pub help: &'static str,
}

// ── Generic command ───────────────────────────────────────────

/// One console command: metadata plus the expression it forwards.
///
/// Immutable once constructed. `run` is stateless; invoking it twice
/// with the same arguments submits the same expression twice.
#[derive(Debug, Clone, Serialize)]
pub struct InspectCommand {
    name: &'static str,
    description: &'static str,
    /// Debuggee-side formatting routine this command invokes.
    entry: &'static str,
    args: Vec<ArgSpec>,
}

impl InspectCommand {
    fn new(
        name: &'static str,
        description: &'static str,
        entry: &'static str,
        arg: ArgSpec,
    ) -> Self {
        Self {
            name,
            description,
            entry,
            args: vec![arg],
        }
    }

    /// The verb typed in the debugger console. Unique within a catalog.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line help shown by the host's help system.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Name of the debuggee-side formatting routine.
    #[must_use]
    pub fn entry(&self) -> &'static str {
        self.entry
    }

    /// Declared parameters, in order. Documentation metadata only;
    /// neither this layer nor `run` enforces arity.
    #[must_use]
    pub fn args(&self) -> &[ArgSpec] {
        &self.args
    }

    /// Build the expression submitted to the evaluator.
    ///
    /// The first argument is substituted verbatim — unparsed and
    /// unescaped. With no arguments the substitution degenerates to
    /// `<entry>()`; the malformed expression is the evaluator's problem
    /// to report, not ours.
    #[must_use]
    pub fn expression(&self, arguments: &[String]) -> String {
        let object = arguments.first().map_or("", String::as_str);
        format!("{}({object})", self.entry)
    }

    /// Build the expression and submit it to the evaluator.
    ///
    /// `options` is accepted for forward compatibility and unused by
    /// every defined command. This layer performs no validation and
    /// never intercepts evaluator errors.
    ///
    /// # Errors
    ///
    /// Returns whatever the evaluator returns, untranslated.
    pub fn run(
        &self,
        arguments: &[String],
        options: &BTreeMap<String, String>,
        evaluator: &mut dyn Evaluator,
    ) -> Result<()> {
        let _ = options;
        let expression = self.expression(arguments);
        debug!(command = self.name, %expression, "submitting expression");
        evaluator.evaluate(&expression)
    }
}

// ── Catalog ───────────────────────────────────────────────────

/// The fixed, load-time-constructed list of inspection commands.
///
/// Built fresh by [`Catalog::new`] and read-only thereafter; the host
/// queries it once to populate its own command table.
#[derive(Debug, Clone)]
pub struct Catalog {
    commands: Vec<InspectCommand>,
}

impl Catalog {
    /// Construct the seven-command catalog. Pure and infallible.
    #[must_use]
    pub fn new() -> Self {
        let commands = vec![
            InspectCommand::new(
                "tree",
                "Print an XL parse tree",
                "debugp",
                ArgSpec {
                    arg: "object",
                    type_label: "Tree *",
                    help: "Tree to print.",
                },
            ),
            InspectCommand::new(
                "value",
                "Print an LLVM value",
                "debugv",
                ArgSpec {
                    arg: "object",
                    type_label: "Value *",
                    help: "Value to print.",
                },
            ),
            InspectCommand::new(
                "types",
                "Print a types table",
                "debugt",
                ArgSpec {
                    arg: "object",
                    type_label: "Types *",
                    help: "Types table to print.",
                },
            ),
            InspectCommand::new(
                "unifications",
                "Print the unifications in a types table",
                "debugu",
                ArgSpec {
                    arg: "object",
                    type_label: "Types *",
                    help: "Types table to print.",
                },
            ),
            InspectCommand::new(
                "scope",
                "Print the current scope",
                "debugl",
                ArgSpec {
                    arg: "object",
                    type_label: "Value *",
                    help: "Scope to print.",
                },
            ),
            InspectCommand::new(
                "globalscope",
                "Print the current scope and all enclosing scopes",
                "debugg",
                ArgSpec {
                    arg: "object",
                    type_label: "Value *",
                    help: "Scope to print.",
                },
            ),
            InspectCommand::new(
                "context",
                "Print the current context",
                "debugc",
                ArgSpec {
                    arg: "object",
                    type_label: "Value *",
                    help: "Context to print.",
                },
            ),
        ];

        // Duplicate names are a build-time defect in this table, not a
        // runtime condition.
        debug_assert!(
            {
                let mut names: Vec<_> = commands.iter().map(|c| c.name).collect();
                names.sort_unstable();
                names.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate command name in catalog"
        );

        Self { commands }
    }

    /// All commands, in registration order.
    #[must_use]
    pub fn commands(&self) -> &[InspectCommand] {
        &self.commands
    }

    /// Resolve a command by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&InspectCommand> {
        self.commands.iter().find(|c| c.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
