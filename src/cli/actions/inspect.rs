use super::PayloadSource;
use crate::session::{SessionConfig, UserSession};
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub config: SessionConfig,
    pub payload: PayloadSource,
}

/// Build a session from `args.config`, install the payload and return the
/// resulting snapshot.
///
/// # Errors
/// Returns an error if the payload cannot be read, is not valid JSON, or is not an object.
pub fn execute(args: &Args) -> Result<Value> {
    let session = login(&args.config, &args.payload)?;
    Ok(serde_json::to_value(session.snapshot())?)
}

pub(super) fn login(config: &SessionConfig, payload: &PayloadSource) -> Result<UserSession> {
    let raw = payload.read()?;
    let mut session = UserSession::new(config.clone());
    session
        .install_attributes_json(&raw)
        .context("Invalid login payload")?;
    debug!(fields = session.current_user().len(), "payload installed");
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FieldName;
    use serde_json::json;

    fn args(payload: &str, config: SessionConfig) -> Args {
        Args {
            config,
            payload: PayloadSource::Inline(payload.to_string()),
        }
    }

    #[test]
    fn inspect_prints_tracked_fields_only() {
        let config = SessionConfig {
            tracked_fields: FieldName::parse_list(["id", "email"]).unwrap(),
            ..SessionConfig::default()
        };
        let output = execute(&args(
            r#"{"id": 7, "email": "a@b.com", "admin": 1, "password": "x"}"#,
            config,
        ))
        .unwrap();

        assert_eq!(
            output,
            json!({
                "authenticated": true,
                "is_admin": true,
                "user": {"id": 7, "email": "a@b.com", "admin": 1}
            })
        );
    }

    #[test]
    fn inspect_rejects_non_object_payload() {
        let err = execute(&args("[1, 2, 3]", SessionConfig::default())).unwrap_err();
        assert!(err.to_string().contains("Invalid login payload"));
        assert!(format!("{err:#}").contains("expected a JSON object, found array"));
    }

    #[test]
    fn inspect_rejects_malformed_json() {
        assert!(execute(&args("{", SessionConfig::default())).is_err());
    }
}
