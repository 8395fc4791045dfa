//! Maps validated CLI matches to an [`Action`].

use crate::cli::actions::{check, inspect, Action, PayloadSource};
use crate::cli::commands::{
    self, ARG_PAYLOAD, ARG_PAYLOAD_FILE, ARG_ROLE, ARG_USER_ID, CMD_CHECK, CMD_INSPECT,
};
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

fn payload_source(matches: &clap::ArgMatches) -> PayloadSource {
    if let Some(payload) = matches.get_one::<String>(ARG_PAYLOAD) {
        PayloadSource::Inline(payload.clone())
    } else if let Some(path) = matches.get_one::<PathBuf>(ARG_PAYLOAD_FILE) {
        PayloadSource::File(path.clone())
    } else {
        PayloadSource::Stdin
    }
}

/// # Errors
/// Returns an error if the subcommand is unknown or the session configuration is invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let (name, sub_m) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("missing subcommand"))?;

    // Session args are global, so the subcommand matches carry them too.
    let config = commands::session::parse(sub_m)?;

    match name {
        CMD_INSPECT => Ok(Action::Inspect(inspect::Args {
            config,
            payload: payload_source(sub_m),
        })),
        CMD_CHECK => Ok(Action::Check(check::Args {
            config,
            payload: payload_source(sub_m),
            role: sub_m
                .get_one::<String>(ARG_ROLE)
                .cloned()
                .context("missing required argument: --role")?,
            user_id: check::parse_user_id(sub_m.get_one::<String>(ARG_USER_ID).map(String::as_str)),
        })),
        other => Err(anyhow!("unknown subcommand: {other}")),
    }
}
