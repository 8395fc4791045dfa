//! Thread-safe handle around a [`UserSession`].
//!
//! Installs, logouts and configuration changes take the write lock; every
//! query takes the read lock, so a check never observes a half-installed
//! session.

use super::{
    config::{AdminEncoding, SessionConfig},
    error::Error,
    field::FieldName,
    permission::Role,
    SessionSnapshot, UserSession,
};
use serde_json::Value;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone, Debug, Default)]
pub struct SharedSession {
    inner: Arc<RwLock<UserSession>>,
}

impl SharedSession {
    #[must_use]
    pub fn new(session: UserSession) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, UserSession>, Error> {
        self.inner.read().map_err(|_| Error::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, UserSession>, Error> {
        self.inner.write().map_err(|_| Error::LockPoisoned)
    }

    /// # Errors
    /// Returns `Error::LockPoisoned` if a writer panicked while holding the lock.
    pub fn apply_config(&self, config: SessionConfig) -> Result<(), Error> {
        self.write()?.apply_config(config);
        Ok(())
    }

    /// # Errors
    /// Returns `Error::LockPoisoned` if a writer panicked while holding the lock.
    pub fn configure_tracked_fields(&self, fields: Vec<FieldName>) -> Result<(), Error> {
        self.write()?.configure_tracked_fields(fields);
        Ok(())
    }

    /// # Errors
    /// Returns `Error::LockPoisoned` if a writer panicked while holding the lock.
    pub fn set_admin_field(&self, field: Option<FieldName>) -> Result<(), Error> {
        self.write()?.set_admin_field(field);
        Ok(())
    }

    /// # Errors
    /// Returns `Error::LockPoisoned` if a writer panicked while holding the lock.
    pub fn set_admin_encoding(&self, encoding: AdminEncoding) -> Result<(), Error> {
        self.write()?.set_admin_encoding(encoding);
        Ok(())
    }

    /// # Errors
    /// Returns `Error::InvalidPayload` for non-object payloads, or
    /// `Error::LockPoisoned`.
    pub fn install_attributes(&self, payload: &Value) -> Result<(), Error> {
        self.write()?.install_attributes(payload)
    }

    /// # Errors
    /// Returns `Error::LockPoisoned` if a writer panicked while holding the lock.
    pub fn logout(&self) -> Result<(), Error> {
        self.write()?.logout();
        Ok(())
    }

    /// # Errors
    /// Returns `Error::LockPoisoned` if a writer panicked while holding the lock.
    pub fn is_authenticated(&self) -> Result<bool, Error> {
        Ok(self.read()?.is_authenticated())
    }

    /// # Errors
    /// Returns `Error::LockPoisoned` if a writer panicked while holding the lock.
    pub fn is_permitted(&self, role: Role, user_id: &Value) -> Result<bool, Error> {
        Ok(self.read()?.is_permitted(role, user_id))
    }

    /// # Errors
    /// Returns `Error::LockPoisoned` if a writer panicked while holding the lock.
    pub fn is_owner(&self, user_id: &Value) -> Result<bool, Error> {
        Ok(self.read()?.is_owner(user_id))
    }

    /// # Errors
    /// Returns `Error::LockPoisoned` if a writer panicked while holding the lock.
    pub fn is_admin(&self) -> Result<bool, Error> {
        Ok(self.read()?.is_admin())
    }

    /// Owned copy of the installed attributes; the lock is released on return.
    ///
    /// # Errors
    /// Returns `Error::LockPoisoned` if a writer panicked while holding the lock.
    pub fn current_user(&self) -> Result<super::Attributes, Error> {
        Ok(self.read()?.current_user().clone())
    }

    /// # Errors
    /// Returns `Error::LockPoisoned` if a writer panicked while holding the lock.
    pub fn snapshot(&self) -> Result<SessionSnapshot, Error> {
        Ok(self.read()?.snapshot())
    }
}
