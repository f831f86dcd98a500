//! List command implementation.

use colored::Colorize;

use crate::catalog::Catalog;
use crate::error::Result;

/// Print the catalog, human table or JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    let catalog = Catalog::new();

    if json {
        let payload = serde_json::to_string_pretty(catalog.commands())?;
        println!("{payload}");
        return Ok(());
    }

    let width = catalog
        .commands()
        .iter()
        .map(|c| c.name().len())
        .max()
        .unwrap_or(0);

    println!(
        "{:width$}  {:24}  {}",
        "COMMAND".bold(),
        "ARGUMENT".bold(),
        "DESCRIPTION".bold()
    );
    for command in catalog.commands() {
        let arg = &command.args()[0];
        println!(
            "{:width$}  {:24}  {}",
            command.name().cyan(),
            format!("{}: {}", arg.arg, arg.type_label),
            command.description()
        );
    }

    Ok(())
}
