/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use directory::{
    manage::{ManageAliases, ManageDomains, ManageUsers},
    AliasScope, DirectoryError,
};

use super::{create_test_domain, create_test_user, test_store, ScriptedGate};

#[test]
fn domain_is_listed_exactly_once() {
    let store = test_store();

    store.create_domain("example.org").unwrap();
    assert_eq!(store.list_domains().unwrap(), ["example.org"]);

    assert!(matches!(
        store.create_domain("example.org").unwrap_err(),
        DirectoryError::Conflict(_)
    ));
    assert_eq!(store.list_domains().unwrap(), ["example.org"]);
}

#[test]
fn empty_domain_name_is_rejected() {
    let store = test_store();

    assert!(matches!(
        store.create_domain("").unwrap_err(),
        DirectoryError::Malformed(_)
    ));
}

#[test]
fn delete_requires_existing_domain() {
    let store = test_store();
    let gate = ScriptedGate::confirming();

    assert!(matches!(
        store.delete_domain("example.org", &gate).unwrap_err(),
        DirectoryError::NotFound(_)
    ));
    assert!(!gate.was_consulted());
}

#[test]
fn declined_cascade_leaves_directory_intact() {
    let store = test_store();
    create_test_domain(&store, "example.org");
    create_test_user(&store, "john@example.org");
    store
        .create_alias("info@example.org", "john@example.org", None)
        .unwrap();

    let gate = ScriptedGate::declining();
    assert!(!store.delete_domain("example.org", &gate).unwrap());

    assert_eq!(
        gate.prompts(),
        ["remove domain \"example.org\" including all aliases and users"]
    );
    assert_eq!(store.list_domains().unwrap(), ["example.org"]);
    assert_eq!(store.list_users().unwrap(), ["john@example.org"]);
    assert_eq!(store.list_aliases(AliasScope::All).unwrap().len(), 1);
}

#[test]
fn confirmed_cascade_removes_users_and_aliases() {
    let store = test_store();
    create_test_domain(&store, "example.org");
    create_test_user(&store, "john@example.org");
    create_test_user(&store, "jane@example.org");
    store
        .create_alias("info@example.org", "john@example.org", None)
        .unwrap();
    store
        .create_alias("info@example.org", "jane@example.org", None)
        .unwrap();

    let gate = ScriptedGate::confirming();
    assert!(store.delete_domain("example.org", &gate).unwrap());

    let cascade = gate.last_cascade();
    assert_eq!(cascade.users, ["john@example.org", "jane@example.org"]);
    assert_eq!(
        cascade.aliases,
        [
            "info@example.org -> john@example.org",
            "info@example.org -> jane@example.org"
        ]
    );

    assert!(store.list_domains().unwrap().is_empty());
    assert!(store.list_users().unwrap().is_empty());
    assert!(store.list_aliases(AliasScope::All).unwrap().is_empty());
}

#[test]
fn unrelated_domains_survive_the_cascade() {
    let store = test_store();
    create_test_domain(&store, "example.org");
    create_test_domain(&store, "example.com");
    create_test_user(&store, "john@example.org");
    create_test_user(&store, "jane@example.com");
    store
        .create_alias("info@example.com", "jane@example.com", None)
        .unwrap();

    let gate = ScriptedGate::confirming();
    assert!(store.delete_domain("example.org", &gate).unwrap());

    assert_eq!(store.list_domains().unwrap(), ["example.com"]);
    assert_eq!(store.list_users().unwrap(), ["jane@example.com"]);
    assert_eq!(store.list_aliases(AliasScope::All).unwrap().len(), 1);
}
