//! Session state: the authenticated flag and the tracked user attributes.
//!
//! Flow Overview: the API layer hands over the attribute payload it received
//! after a successful login; the store copies the tracked fields (plus the
//! admin field, when configured) and marks the session authenticated. Logout
//! clears both. Nothing here verifies credentials; the store only records the
//! outcome of authentication performed elsewhere.

use super::{error::Error, field::FieldName, value};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Installed user attributes keyed by field name.
pub type Attributes = BTreeMap<FieldName, Value>;

/// Live session state.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Session {
    authenticated: bool,
    attributes: Attributes,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Stored value for `name`; `None` when the field was never installed.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

/// Owns the session and the list of fields copied on install.
#[derive(Clone, Debug)]
pub struct SessionStore {
    session: Session,
    tracked_fields: Vec<FieldName>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(FieldName::defaults())
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(tracked_fields: Vec<FieldName>) -> Self {
        Self {
            session: Session::default(),
            tracked_fields,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn tracked_fields(&self) -> &[FieldName] {
        &self.tracked_fields
    }

    /// Replace the tracked field list. An empty list is allowed; the next
    /// install then copies nothing but the admin field.
    pub fn configure_tracked_fields(&mut self, fields: Vec<FieldName>) {
        debug!(
            fields = ?fields.iter().map(FieldName::as_str).collect::<Vec<_>>(),
            "tracked fields configured"
        );
        self.tracked_fields = fields;
    }

    /// Install a login payload and mark the session authenticated.
    ///
    /// Every tracked field, plus `admin_field` when set, is copied from the
    /// payload; keys missing from the payload are stored as `null`. The whole
    /// attribute map is rebuilt on each call, so fields tracked by an earlier
    /// configuration do not survive a re-login.
    ///
    /// # Errors
    /// Returns `Error::InvalidPayload` when `payload` is not a JSON object. The
    /// session is left unchanged in that case.
    pub fn install_attributes(
        &mut self,
        payload: &Value,
        admin_field: Option<&FieldName>,
    ) -> Result<(), Error> {
        let Value::Object(map) = payload else {
            return Err(Error::InvalidPayload {
                found: value::kind(payload),
            });
        };
        self.install_map(map, admin_field);
        Ok(())
    }

    /// Same as [`SessionStore::install_attributes`] for an already-validated object.
    fn install_map(&mut self, payload: &Map<String, Value>, admin_field: Option<&FieldName>) {
        let admin = admin_field.filter(|admin| !self.tracked_fields.contains(admin));

        let attributes: Attributes = self
            .tracked_fields
            .iter()
            .chain(admin)
            .map(|field| {
                let value = payload.get(field.as_str()).cloned().unwrap_or(Value::Null);
                (field.clone(), value)
            })
            .collect();

        let missing: Vec<&str> = attributes
            .iter()
            .filter(|(field, _)| !payload.contains_key(field.as_str()))
            .map(|(field, _)| field.as_str())
            .collect();
        if !missing.is_empty() {
            debug!(?missing, "payload is missing tracked fields");
        }

        let relogin = self.session.authenticated;
        self.session = Session {
            authenticated: true,
            attributes,
        };

        // Values are never logged; tracked fields include credentials such as `api_token`.
        info!(
            fields = self.session.attributes.len(),
            relogin, "session attributes installed"
        );
    }

    /// Clear the session. Calling this while already logged out is a no-op.
    pub fn logout(&mut self) {
        if self.session.authenticated {
            info!("session cleared");
        }
        self.session = Session::default();
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    /// Read-only view of the installed attributes.
    #[must_use]
    pub fn current_user(&self) -> &Attributes {
        &self.session.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(names: &[&str]) -> Vec<FieldName> {
        FieldName::parse_list(names).unwrap()
    }

    fn admin() -> FieldName {
        FieldName::new("admin").unwrap()
    }

    #[test]
    fn new_store_is_unauthenticated_and_empty() {
        let store = SessionStore::default();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_empty());
        assert_eq!(store.tracked_fields().len(), 5);
    }

    #[test]
    fn install_copies_tracked_fields_and_admin() {
        let mut store = SessionStore::new(fields(&["id", "email"]));
        store
            .install_attributes(
                &json!({"id": 7, "email": "a@b.com", "admin": 1, "password": "nope"}),
                Some(&admin()),
            )
            .unwrap();

        assert!(store.is_authenticated());
        let user = store.current_user();
        assert_eq!(user.len(), 3);
        assert_eq!(user.get("id"), Some(&json!(7)));
        assert_eq!(user.get("email"), Some(&json!("a@b.com")));
        assert_eq!(user.get("admin"), Some(&json!(1)));
        assert!(user.get("password").is_none());
    }

    #[test]
    fn install_stores_null_for_missing_keys() {
        let mut store = SessionStore::new(fields(&["id", "email"]));
        store.install_attributes(&json!({"id": 3}), None).unwrap();

        assert_eq!(store.session().attribute("email"), Some(&Value::Null));
        assert_eq!(store.current_user().len(), 2);
    }

    #[test]
    fn install_without_admin_field_skips_admin() {
        let mut store = SessionStore::new(fields(&["id"]));
        store
            .install_attributes(&json!({"id": 3, "admin": 1}), None)
            .unwrap();
        assert!(store.session().attribute("admin").is_none());
    }

    #[test]
    fn install_with_empty_tracked_fields_is_still_authenticated() {
        let mut store = SessionStore::new(Vec::new());
        store.install_attributes(&json!({"id": 3}), None).unwrap();
        assert!(store.is_authenticated());
        assert!(store.current_user().is_empty());
    }

    #[test]
    fn install_rejects_non_object_payloads() {
        let mut store = SessionStore::default();
        for payload in [json!(null), json!([1, 2]), json!("user"), json!(42), json!(true)] {
            let err = store.install_attributes(&payload, None).unwrap_err();
            assert!(matches!(err, Error::InvalidPayload { .. }));
        }
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_empty());
    }

    #[test]
    fn rejected_payload_keeps_existing_session() {
        let mut store = SessionStore::new(fields(&["id"]));
        store.install_attributes(&json!({"id": 1}), None).unwrap();
        assert!(store.install_attributes(&json!([]), None).is_err());
        assert!(store.is_authenticated());
        assert_eq!(store.session().attribute("id"), Some(&json!(1)));
    }

    #[test]
    fn relogin_drops_fields_no_longer_tracked() {
        let mut store = SessionStore::new(fields(&["id", "email"]));
        store
            .install_attributes(&json!({"id": 1, "email": "a@b.com"}), None)
            .unwrap();

        store.configure_tracked_fields(fields(&["id", "first_name"]));
        // Config changes do not touch the installed session.
        assert_eq!(store.session().attribute("email"), Some(&json!("a@b.com")));

        store
            .install_attributes(&json!({"id": 2, "first_name": "Ada"}), None)
            .unwrap();
        assert!(store.session().attribute("email").is_none());
        assert_eq!(store.session().attribute("id"), Some(&json!(2)));
        assert_eq!(store.session().attribute("first_name"), Some(&json!("Ada")));
    }

    #[test]
    fn logout_clears_and_is_idempotent() {
        let mut store = SessionStore::default();
        store.install_attributes(&json!({"id": 1}), None).unwrap();

        store.logout();
        let once = store.session().clone();
        store.logout();

        assert_eq!(store.session(), &once);
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_empty());
    }

    #[test]
    fn session_serializes_with_field_names() {
        let mut store = SessionStore::new(fields(&["id"]));
        store.install_attributes(&json!({"id": "u-1"}), None).unwrap();
        let encoded = serde_json::to_value(store.session()).unwrap();
        assert_eq!(
            encoded,
            json!({"authenticated": true, "attributes": {"id": "u-1"}})
        );
    }
}
