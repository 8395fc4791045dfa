//! Client-held session and role-based visibility checks.
//!
//! Flow Overview: the host configures which attributes to track and how the
//! admin flag is encoded, hands the login payload to
//! [`UserSession::install_attributes`], and then asks
//! [`UserSession::is_permitted`] whenever a view decides whether to show
//! something. [`UserSession::logout`] resets everything.
//!
//! A `UserSession` is a plain value owned by the host. Wrap it in
//! [`SharedSession`] when it must be reachable from more than one thread.

pub mod admin;
pub mod config;
pub mod error;
pub mod field;
pub mod permission;
pub mod shared;
pub mod store;
pub mod value;

pub use admin::AdminInterpreter;
pub use config::{AdminEncoding, SessionConfig};
pub use error::Error;
pub use field::FieldName;
pub use permission::Role;
pub use shared::SharedSession;
pub use store::{Attributes, Session, SessionStore};

use serde::Serialize;
use serde_json::Value;

/// Serializable view of the session for views and debugging output.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub is_admin: bool,
    pub user: Attributes,
}

/// Session state plus the configuration that shapes it.
#[derive(Clone, Debug, Default)]
pub struct UserSession {
    store: SessionStore,
    admin: AdminInterpreter,
}

impl UserSession {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            store: SessionStore::new(config.tracked_fields),
            admin: AdminInterpreter::new(config.admin_field, config.admin_encoding),
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> SessionConfig {
        SessionConfig {
            tracked_fields: self.store.tracked_fields().to_vec(),
            admin_field: self.admin.field().cloned(),
            admin_encoding: self.admin.encoding(),
        }
    }

    /// Replace the whole configuration; the installed session is kept as is.
    pub fn apply_config(&mut self, config: SessionConfig) {
        self.store.configure_tracked_fields(config.tracked_fields);
        self.admin.set_field(config.admin_field);
        self.admin.set_encoding(config.admin_encoding);
    }

    pub fn configure_tracked_fields(&mut self, fields: Vec<FieldName>) {
        self.store.configure_tracked_fields(fields);
    }

    pub fn set_admin_field(&mut self, field: Option<FieldName>) {
        self.admin.set_field(field);
    }

    pub fn set_admin_encoding(&mut self, encoding: AdminEncoding) {
        self.admin.set_encoding(encoding);
    }

    /// Install the attribute payload returned by the API layer after login.
    ///
    /// # Errors
    /// Returns `Error::InvalidPayload` when `payload` is not a JSON object.
    pub fn install_attributes(&mut self, payload: &Value) -> Result<(), Error> {
        self.store.install_attributes(payload, self.admin.field())
    }

    /// Parse a raw JSON payload and install it.
    ///
    /// # Errors
    /// Returns `Error::Json` for malformed JSON and `Error::InvalidPayload` when
    /// the document is not an object.
    pub fn install_attributes_json(&mut self, payload: &str) -> Result<(), Error> {
        let payload: Value = serde_json::from_str(payload)?;
        self.install_attributes(&payload)
    }

    pub fn logout(&mut self) {
        self.store.logout();
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    #[must_use]
    pub fn is_permitted(&self, role: Role, user_id: &Value) -> bool {
        permission::is_permitted(self.store.session(), &self.admin, role, user_id)
    }

    /// Role given by name; unknown names are denied.
    #[must_use]
    pub fn is_permitted_str(&self, role: &str, user_id: &Value) -> bool {
        permission::is_permitted_str(self.store.session(), &self.admin, role, user_id)
    }

    #[must_use]
    pub fn is_owner(&self, user_id: &Value) -> bool {
        permission::is_owner(self.store.session(), user_id)
    }

    /// Admin verdict for the current session. True for everyone, authenticated
    /// or not, when no admin field is configured.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.admin.is_admin(self.store.session())
    }

    #[must_use]
    pub fn current_user(&self) -> &Attributes {
        self.store.current_user()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        self.store.session()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            authenticated: self.is_authenticated(),
            is_admin: self.is_admin(),
            user: self.current_user().clone(),
        }
    }
}
