/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod domain;
pub mod user;

use std::cell::RefCell;

use directory::{
    core::secret::Sha512CryptHasher,
    manage::{ManageDomains, ManageUsers},
    CascadePreview, ConfirmationGate,
};
use store::SqliteStore;

pub fn test_store() -> SqliteStore {
    SqliteStore::open_memory().unwrap()
}

pub fn create_test_domain(store: &SqliteStore, name: &str) {
    store.create_domain(name).unwrap();
}

pub fn create_test_user(store: &SqliteStore, email: &str) -> String {
    store.create_user(email, Some(&Sha512CryptHasher)).unwrap()
}

/// A confirmation gate with a fixed answer that records what it was asked.
pub struct ScriptedGate {
    answer: bool,
    seen: RefCell<Vec<(String, CascadePreview)>>,
}

impl ScriptedGate {
    pub fn confirming() -> Self {
        Self {
            answer: true,
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: false,
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn was_consulted(&self) -> bool {
        !self.seen.borrow().is_empty()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.seen
            .borrow()
            .iter()
            .map(|(prompt, _)| prompt.clone())
            .collect()
    }

    pub fn last_cascade(&self) -> CascadePreview {
        self.seen
            .borrow()
            .last()
            .map(|(_, cascade)| cascade.clone())
            .unwrap()
    }
}

impl ConfirmationGate for ScriptedGate {
    fn confirm(&self, prompt: &str, cascade: &CascadePreview) -> bool {
        self.seen
            .borrow_mut()
            .push((prompt.to_string(), cascade.clone()));
        self.answer
    }
}
