//! Session configuration arguments shared by every subcommand.

use crate::session::{
    field::{DEFAULT_ADMIN_FIELD, DEFAULT_TRACKED_FIELDS},
    AdminEncoding, FieldName, SessionConfig,
};
use anyhow::{Context, Result};
use clap::{builder::PossibleValuesParser, Arg, ArgAction, ArgMatches, Command};

pub const ARG_TRACKED_FIELDS: &str = "tracked-fields";
pub const ARG_ADMIN_FIELD: &str = "admin-field";
pub const ARG_NO_ADMIN_FIELD: &str = "no-admin-field";
pub const ARG_ADMIN_ENCODING: &str = "admin-encoding";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_TRACKED_FIELDS)
                .long(ARG_TRACKED_FIELDS)
                .help("Comma separated attribute names copied into the session")
                .env("GATEKEEP_TRACKED_FIELDS")
                .global(true)
                .value_delimiter(',')
                .default_values(DEFAULT_TRACKED_FIELDS),
        )
        .arg(
            Arg::new(ARG_ADMIN_FIELD)
                .long(ARG_ADMIN_FIELD)
                .help("Attribute holding the admin flag")
                .env("GATEKEEP_ADMIN_FIELD")
                .global(true)
                .default_value(DEFAULT_ADMIN_FIELD)
                .conflicts_with(ARG_NO_ADMIN_FIELD),
        )
        .arg(
            Arg::new(ARG_NO_ADMIN_FIELD)
                .long(ARG_NO_ADMIN_FIELD)
                .help("Disable the admin field; every caller is then treated as an admin")
                .env("GATEKEEP_NO_ADMIN_FIELD")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_ADMIN_ENCODING)
                .long(ARG_ADMIN_ENCODING)
                .help("How the admin flag is encoded")
                .env("GATEKEEP_ADMIN_ENCODING")
                .global(true)
                .default_value("numeric")
                .value_parser(PossibleValuesParser::new(["boolean", "numeric"])),
        )
}

/// Build a [`SessionConfig`] from validated matches.
///
/// # Errors
/// Returns an error if a field name is invalid.
pub fn parse(matches: &ArgMatches) -> Result<SessionConfig> {
    let tracked_fields = match matches.get_many::<String>(ARG_TRACKED_FIELDS) {
        Some(values) => {
            let names: Vec<&String> = values.filter(|name| !name.trim().is_empty()).collect();
            FieldName::parse_list(names).context("invalid --tracked-fields")?
        }
        None => Vec::new(),
    };

    let admin_field = if matches.get_flag(ARG_NO_ADMIN_FIELD) {
        None
    } else {
        matches
            .get_one::<String>(ARG_ADMIN_FIELD)
            .map(|name| FieldName::new(name))
            .transpose()
            .context("invalid --admin-field")?
    };

    let admin_encoding = matches
        .get_one::<String>(ARG_ADMIN_ENCODING)
        .map(|encoding| encoding.parse::<AdminEncoding>())
        .transpose()?
        .unwrap_or_default();

    Ok(SessionConfig {
        tracked_fields,
        admin_field,
        admin_encoding,
    })
}
