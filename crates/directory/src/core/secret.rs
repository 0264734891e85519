/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use pwhash::sha512_crypt;

use crate::{CredentialHasher, DirectoryError};

/// SHA-512 crypt, the scheme the MTA's authentication path verifies.
#[derive(Debug, Default)]
pub struct Sha512CryptHasher;

impl CredentialHasher for Sha512CryptHasher {
    fn hash(&self, plaintext: &str) -> crate::Result<String> {
        sha512_crypt::hash(plaintext).map_err(|err| {
            tracing::warn!(
                context = "directory",
                event = "error",
                reason = %err,
                "Failed to hash credential"
            );

            DirectoryError::Unavailable("password hashing")
        })
    }
}
