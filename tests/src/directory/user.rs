/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use directory::{
    core::secret::Sha512CryptHasher,
    manage::{ManageAliases, ManageUsers},
    AliasScope, DirectoryError,
};
use store::Row;

use super::{create_test_domain, create_test_user, test_store, ScriptedGate};

#[test]
fn user_requires_existing_domain() {
    let store = test_store();

    assert!(matches!(
        store
            .create_user("a@example.com", Some(&Sha512CryptHasher))
            .unwrap_err(),
        DirectoryError::NotFound(_)
    ));

    create_test_domain(&store, "example.com");
    let password = store
        .create_user("a@example.com", Some(&Sha512CryptHasher))
        .unwrap();

    assert!(!password.is_empty());
    assert_eq!(store.list_users().unwrap(), ["a@example.com"]);

    // Only the hash is persisted, never the plaintext.
    let row = store
        .query::<Option<Row>>(
            "SELECT password FROM virtual_users WHERE email = ?",
            &["a@example.com".into()],
        )
        .unwrap()
        .unwrap();
    let hash = row.values.first().unwrap().to_str().into_owned();
    assert_ne!(hash, password);
    assert!(hash.starts_with("$6$"));
}

#[test]
fn malformed_addresses_are_rejected() {
    let store = test_store();
    create_test_domain(&store, "example.com");

    for email in ["john", "@example.com", "john@", "john@doe@example.com"] {
        assert!(
            matches!(
                store
                    .create_user(email, Some(&Sha512CryptHasher))
                    .unwrap_err(),
                DirectoryError::Malformed(_)
            ),
            "{email:?}"
        );
    }
    assert!(store.list_users().unwrap().is_empty());
}

#[test]
fn duplicate_user_is_a_conflict() {
    let store = test_store();
    create_test_domain(&store, "example.com");
    create_test_user(&store, "a@example.com");

    assert!(matches!(
        store
            .create_user("a@example.com", Some(&Sha512CryptHasher))
            .unwrap_err(),
        DirectoryError::Conflict(_)
    ));
}

#[test]
fn missing_hasher_fails_fast() {
    let store = test_store();
    create_test_domain(&store, "example.com");

    assert!(matches!(
        store.create_user("a@example.com", None).unwrap_err(),
        DirectoryError::Unavailable(_)
    ));
    assert!(store.list_users().unwrap().is_empty());
}

#[test]
fn delete_requires_existing_user() {
    let store = test_store();
    let gate = ScriptedGate::confirming();

    assert!(matches!(
        store.delete_user("a@example.com", &gate).unwrap_err(),
        DirectoryError::NotFound(_)
    ));
}

#[test]
fn delete_without_aliases_needs_no_confirmation() {
    let store = test_store();
    create_test_domain(&store, "example.com");
    create_test_user(&store, "a@example.com");

    let gate = ScriptedGate::declining();
    assert!(store.delete_user("a@example.com", &gate).unwrap());

    assert!(!gate.was_consulted());
    assert!(store.list_users().unwrap().is_empty());
}

#[test]
fn delete_cascades_to_targeting_aliases() {
    let store = test_store();
    create_test_domain(&store, "example.com");
    create_test_user(&store, "john@example.com");
    create_test_user(&store, "jane@example.com");
    store
        .create_alias("info@example.com", "john@example.com", None)
        .unwrap();
    store
        .create_alias("sales@example.com", "john@example.com", None)
        .unwrap();
    store
        .create_alias("info@example.com", "jane@example.com", None)
        .unwrap();

    // Declining keeps the user and every alias.
    let gate = ScriptedGate::declining();
    assert!(!store.delete_user("john@example.com", &gate).unwrap());
    assert_eq!(
        gate.prompts(),
        ["remove user \"john@example.com\" and its aliases"]
    );
    assert_eq!(store.list_aliases(AliasScope::All).unwrap().len(), 2);

    // Confirming removes the user and both aliases that forward to it.
    let gate = ScriptedGate::confirming();
    assert!(store.delete_user("john@example.com", &gate).unwrap());
    assert_eq!(
        gate.last_cascade().aliases,
        [
            "info@example.com -> john@example.com",
            "sales@example.com -> john@example.com"
        ]
    );

    assert_eq!(store.list_users().unwrap(), ["jane@example.com"]);
    let remaining = store.list_aliases(AliasScope::All).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(
        remaining[0].to_string(),
        "info@example.com -> jane@example.com"
    );
}
