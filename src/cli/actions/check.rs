use super::{inspect::login, PayloadSource};
use crate::session::SessionConfig;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug)]
pub struct Args {
    pub config: SessionConfig,
    pub payload: PayloadSource,
    pub role: String,
    pub user_id: Value,
}

#[derive(Debug, Serialize)]
struct Outcome<'a> {
    role: &'a str,
    user_id: &'a Value,
    authenticated: bool,
    permitted: bool,
}

/// Install the payload and evaluate `args.role` against `args.user_id`.
/// Unknown roles are reported as not permitted rather than as an error.
///
/// # Errors
/// Returns an error if the payload cannot be read or installed.
pub fn execute(args: &Args) -> Result<Value> {
    let session = login(&args.config, &args.payload)?;
    let outcome = Outcome {
        role: &args.role,
        user_id: &args.user_id,
        authenticated: session.is_authenticated(),
        permitted: session.is_permitted_str(&args.role, &args.user_id),
    };
    Ok(serde_json::to_value(outcome)?)
}

/// Interpret a CLI user id: JSON when it parses (`7`, `"7"`, `null`), a plain
/// string otherwise.
#[must_use]
pub fn parse_user_id(raw: Option<&str>) -> Value {
    match raw {
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())),
        None => Value::Null,
    }
}
