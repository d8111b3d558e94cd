//! Terminal output for the command line tool.

use std::io::Write;

/// Writes user-facing messages, honouring the verbose and quiet switches.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Prints to stdout in verbose mode only.
    pub fn verbose(&self, message: &str) -> std::io::Result<()> {
        if self.verbose {
            writeln!(std::io::stdout().lock(), "{message}")?;
        }
        Ok(())
    }

    /// Prints to stdout unless quiet.
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        if !self.quiet {
            writeln!(std::io::stdout().lock(), "{message}")?;
        }
        Ok(())
    }
}
