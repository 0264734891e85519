/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::fmt::Display;

pub mod core;
pub mod manage;

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Debug)]
pub enum DirectoryError {
    NotFound(String),
    Conflict(String),
    Malformed(String),
    Unavailable(&'static str),
    Store(store::Error),
}

impl std::error::Error for DirectoryError {}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryError::NotFound(item) => write!(f, "no such {item}"),
            DirectoryError::Conflict(item) => write!(f, "{item} already exists"),
            DirectoryError::Malformed(address) => write!(f, "malformed address {address:?}"),
            DirectoryError::Unavailable(capability) => {
                write!(f, "{capability} is not available")
            }
            DirectoryError::Store(err) => write!(f, "store failure: {err}"),
        }
    }
}

impl From<store::Error> for DirectoryError {
    fn from(error: store::Error) -> Self {
        tracing::warn!(
            context = "directory",
            event = "error",
            reason = %error,
            "Store error"
        );

        DirectoryError::Store(error)
    }
}

/// Hashes a plaintext credential into its persisted form. Implementations
/// may be absent at runtime, in which case user creation is refused.
pub trait CredentialHasher {
    fn hash(&self, plaintext: &str) -> Result<String>;
}

/// Asks the operator to confirm a cascading removal before it commits.
pub trait ConfirmationGate {
    fn confirm(&self, prompt: &str, cascade: &CascadePreview) -> bool;
}

/// The dependent records a cascading removal would take with it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CascadePreview {
    pub users: Vec<String>,
    pub aliases: Vec<String>,
}

impl CascadePreview {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.aliases.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasScope {
    All,
    Enabled,
    Disabled,
}

/// One source address with every destination it forwards to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub source: String,
    pub destinations: Vec<String>,
}

impl Display for AliasEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destinations.join(", "))
    }
}
