//! Admin flag interpretation.
//!
//! With no admin field configured every caller is treated as an admin. That
//! permissive default is intentional and must not be "fixed" here; hosts that
//! want admin checks configure a field.

use super::{
    config::AdminEncoding,
    field::FieldName,
    store::Session,
    value::{loose_eq, truthy},
};
use serde_json::Value;
use tracing::debug;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminInterpreter {
    field: Option<FieldName>,
    encoding: AdminEncoding,
}

impl Default for AdminInterpreter {
    fn default() -> Self {
        Self::new(Some(FieldName::default_admin()), AdminEncoding::default())
    }
}

impl AdminInterpreter {
    #[must_use]
    pub fn new(field: Option<FieldName>, encoding: AdminEncoding) -> Self {
        Self { field, encoding }
    }

    #[must_use]
    pub fn field(&self) -> Option<&FieldName> {
        self.field.as_ref()
    }

    #[must_use]
    pub fn encoding(&self) -> AdminEncoding {
        self.encoding
    }

    /// Set or clear the admin field. `None` disables admin semantics.
    pub fn set_field(&mut self, field: Option<FieldName>) {
        debug!(field = ?field.as_ref().map(FieldName::as_str), "admin field configured");
        self.field = field;
    }

    pub fn set_encoding(&mut self, encoding: AdminEncoding) {
        debug!(%encoding, "admin encoding configured");
        self.encoding = encoding;
    }

    /// Decide whether the session belongs to an admin.
    ///
    /// Does not look at the authenticated flag; callers combine the two.
    #[must_use]
    pub fn is_admin(&self, session: &Session) -> bool {
        let Some(field) = &self.field else {
            return true;
        };
        session
            .attribute(field.as_str())
            .is_some_and(|raw| self.decode(raw))
    }

    /// Interpret a raw admin value under the configured encoding.
    #[must_use]
    pub fn decode(&self, raw: &Value) -> bool {
        match self.encoding {
            AdminEncoding::Boolean => truthy(raw),
            AdminEncoding::NumericFlag => loose_eq(raw, &Value::from(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::SessionStore;
    use serde_json::json;

    fn session_with(payload: &Value) -> Session {
        let mut store = SessionStore::new(FieldName::parse_list(["id"]).unwrap());
        let admin = FieldName::new("admin").unwrap();
        store.install_attributes(payload, Some(&admin)).unwrap();
        store.session().clone()
    }

    #[test]
    fn no_admin_field_means_everyone_is_admin() {
        let interpreter = AdminInterpreter::new(None, AdminEncoding::NumericFlag);
        assert!(interpreter.is_admin(&Session::default()));
        assert!(interpreter.is_admin(&session_with(&json!({"id": 1, "admin": 0}))));

        let interpreter = AdminInterpreter::new(None, AdminEncoding::Boolean);
        assert!(interpreter.is_admin(&Session::default()));
    }

    #[test]
    fn numeric_flag_accepts_only_one() {
        let interpreter = AdminInterpreter::default();
        assert!(interpreter.is_admin(&session_with(&json!({"admin": 1}))));
        assert!(interpreter.is_admin(&session_with(&json!({"admin": "1"}))));
        assert!(interpreter.is_admin(&session_with(&json!({"admin": 1.0}))));
        assert!(!interpreter.is_admin(&session_with(&json!({"admin": 0}))));
        assert!(!interpreter.is_admin(&session_with(&json!({"admin": 2}))));
        assert!(!interpreter.is_admin(&session_with(&json!({"admin": "yes"}))));
        assert!(!interpreter.is_admin(&session_with(&json!({}))));
        assert!(!interpreter.is_admin(&Session::default()));
    }

    #[test]
    fn boolean_encoding_reads_configured_field() {
        let interpreter = AdminInterpreter::new(
            Some(FieldName::new("admin").unwrap()),
            AdminEncoding::Boolean,
        );
        assert!(interpreter.is_admin(&session_with(&json!({"admin": true}))));
        assert!(!interpreter.is_admin(&session_with(&json!({"admin": false}))));
        assert!(!interpreter.is_admin(&session_with(&json!({"id": 1}))));
        assert!(!interpreter.is_admin(&Session::default()));
    }

    #[test]
    fn boolean_encoding_coerces_non_boolean_values() {
        let interpreter = AdminInterpreter::new(
            Some(FieldName::new("admin").unwrap()),
            AdminEncoding::Boolean,
        );
        assert!(interpreter.decode(&json!(1)));
        assert!(interpreter.decode(&json!("true")));
        assert!(!interpreter.decode(&json!(0)));
        assert!(!interpreter.decode(&json!("")));
        assert!(!interpreter.decode(&Value::Null));
    }

    #[test]
    fn admin_reads_a_field_other_than_admin() {
        let mut interpreter = AdminInterpreter::default();
        interpreter.set_field(Some(FieldName::new("is_staff").unwrap()));
        interpreter.set_encoding(AdminEncoding::Boolean);

        let mut store = SessionStore::new(Vec::new());
        store
            .install_attributes(&json!({"admin": true, "is_staff": false}), interpreter.field())
            .unwrap();
        assert!(!interpreter.is_admin(store.session()));

        store
            .install_attributes(&json!({"admin": false, "is_staff": true}), interpreter.field())
            .unwrap();
        assert!(interpreter.is_admin(store.session()));
    }

    #[test]
    fn clearing_the_field_restores_permissive_default() {
        let mut interpreter = AdminInterpreter::default();
        let session = session_with(&json!({"admin": 0}));
        assert!(!interpreter.is_admin(&session));

        interpreter.set_field(None);
        assert!(interpreter.is_admin(&session));
        assert_eq!(interpreter.field(), None);
    }
}
