/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use store::{Row, Rows, SqliteStore, Value};

use crate::DirectoryError;

pub mod alias;
pub mod domain;
pub mod user;

pub use alias::ManageAliases;
pub use domain::ManageDomains;
pub use user::ManageUsers;

/// Returns the domain part of a `local@domain` address.
pub(crate) fn domain_part(address: &str) -> crate::Result<&str> {
    match address.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(domain)
        }
        _ => Err(DirectoryError::Malformed(address.to_string())),
    }
}

pub(crate) fn domain_id(store: &SqliteStore, name: &str) -> crate::Result<Option<i64>> {
    Ok(store
        .query::<Option<Row>>(
            "SELECT id FROM virtual_domains WHERE name = ?",
            &[name.into()],
        )?
        .and_then(|row| match row.values.first() {
            Some(Value::Integer(id)) => Some(*id),
            _ => None,
        }))
}

/// Formats `(source, destination)` rows for a cascade preview.
pub(crate) fn alias_previews(rows: Rows) -> Vec<String> {
    rows.rows
        .into_iter()
        .filter_map(|row| {
            let mut values = row.values.into_iter();
            match (values.next(), values.next()) {
                (Some(source), Some(destination)) => {
                    Some(format!("{} -> {}", source.to_str(), destination.to_str()))
                }
                _ => None,
            }
        })
        .collect()
}
