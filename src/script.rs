//! LLDB Python script generation.
//!
//! LLDB loads console commands as Python, so the catalog is exported as
//! a self-contained script: `command script import xlcmds.py` registers
//! every inspection command, and each handler forwards `p <entry>(...)`
//! to the debugger's expression evaluator via `HandleCommand`. The `p`
//! verb is an LLDB-ism and appears only here, not in the library's
//! evaluator boundary.

use std::fmt::Write;

use crate::catalog::Catalog;

/// Render the LLDB Python command script for `catalog`.
///
/// Output is deterministic and follows catalog order.
#[must_use]
pub fn render(catalog: &Catalog) -> String {
    let mut out = String::new();

    out.push_str("#!/usr/bin/python\n");
    out.push_str("# XL compiler inspection commands for LLDB.\n");
    out.push_str("# Generated by xlcmd; do not edit by hand.\n\n");
    out.push_str("import lldb\n\n\n");

    out.push_str("def __lldb_init_module(debugger, internal_dict):\n");
    for command in catalog.commands() {
        let _ = writeln!(
            out,
            "    debugger.HandleCommand(\n        \
             'command script add -f {module}.{name}_command -h \"{help}\" {name}')",
            module = MODULE_NAME,
            name = command.name(),
            help = command.description(),
        );
    }
    out.push('\n');

    for command in catalog.commands() {
        let arg = &command.args()[0];
        let _ = writeln!(
            out,
            "\ndef {name}_command(debugger, command, result, internal_dict):\n    \
             \"\"\"{description} ({arg}: {type_label})\"\"\"\n    \
             debugger.HandleCommand('p {entry}(%s)' % command)\n",
            name = command.name(),
            description = command.description(),
            arg = arg.arg,
            type_label = arg.type_label,
            entry = command.entry(),
        );
    }

    out
}

/// Python module name LLDB sees after `command script import xlcmds.py`.
const MODULE_NAME: &str = "xlcmds";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_registers_every_command() {
        let catalog = Catalog::new();
        let script = render(&catalog);
        for command in catalog.commands() {
            assert!(
                script.contains(&format!(
                    "command script add -f xlcmds.{0}_command",
                    command.name()
                )),
                "missing registration for {}",
                command.name()
            );
        }
    }

    #[test]
    fn test_render_forwards_to_entry_points() {
        let script = render(&Catalog::new());
        assert!(script.contains("'p debugp(%s)' % command"));
        assert!(script.contains("'p debugg(%s)' % command"));
        assert!(script.contains("'p debugu(%s)' % command"));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(&Catalog::new()), render(&Catalog::new()));
    }

    #[test]
    fn test_render_defines_init_module() {
        let script = render(&Catalog::new());
        assert!(script.starts_with("#!/usr/bin/python\n"));
        assert!(script.contains("def __lldb_init_module(debugger, internal_dict):"));
    }
}
