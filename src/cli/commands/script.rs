//! Script command implementation.

use std::path::PathBuf;

use tracing::info;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::script;

/// Emit the generated LLDB Python script to stdout or a file.
///
/// # Errors
///
/// Returns an error if writing the output file fails.
pub fn execute(output: Option<&PathBuf>) -> Result<()> {
    let rendered = script::render(&Catalog::new());

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            info!(path = %path.display(), "wrote LLDB command script");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
