//! # Gatekeep (client-held session & visibility checks)
//!
//! `gatekeep` records the outcome of a login performed elsewhere and answers
//! "can the current caller see this?" for presentation logic.
//!
//! ## Session
//!
//! After the API layer authenticates a user it hands the attribute payload to
//! [`session::UserSession::install_attributes`]. Only the configured tracked
//! fields (default `first_name`, `last_name`, `email`, `id`, `api_token`) and the
//! admin field (default `admin`) are copied. Logout clears everything. There is
//! no expiry and nothing is persisted.
//!
//! ## Roles
//!
//! - `public`: always visible, even when logged out.
//! - `owner`: authenticated and the resource owner id matches the session `id`.
//! - `owner_or_admin`: authenticated and either the owner or an admin.
//! - `admin`: authenticated and an admin.
//!
//! With no admin field configured every caller counts as an admin.
//!
//! These checks only drive visibility. Real authorization must be enforced by
//! the API on every request.

pub mod cli;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
