pub mod check;
pub mod inspect;

use anyhow::{Context, Result};
use std::{fs, io, path::PathBuf};

/// Where the login payload is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl PayloadSource {
    /// Read the raw payload text.
    ///
    /// # Errors
    /// Returns an error if the file or stdin cannot be read.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Inline(payload) => Ok(payload.clone()),
            Self::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read payload file: {}", path.display())),
            Self::Stdin => io::read_to_string(io::stdin()).context("Failed to read payload from stdin"),
        }
    }
}

#[derive(Debug)]
pub enum Action {
    Inspect(inspect::Args),
    Check(check::Args),
}

impl Action {
    /// Run the action, writing its JSON result to stdout.
    ///
    /// # Errors
    /// Returns an error if the payload cannot be read or installed.
    pub fn execute(self) -> Result<()> {
        let output = match self {
            Self::Inspect(args) => inspect::execute(&args)?,
            Self::Check(args) => check::execute(&args)?,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}
