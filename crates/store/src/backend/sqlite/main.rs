/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::path::Path;

use r2d2::Pool;

use super::{pool::SqliteConnectionManager, SqliteStore};

impl SqliteStore {
    /// Opens an existing database file. The foreign-key pragma stays active
    /// for the lifetime of every pooled connection.
    pub fn open(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(crate::Error::NotFound(path.display().to_string()));
        }
        Ok(Self {
            conn_pool: Pool::builder().max_size(1).build(
                SqliteConnectionManager::file(path).with_init(|c| {
                    c.execute_batch(concat!(
                        "PRAGMA foreign_keys = ON; ",
                        "PRAGMA busy_timeout = 30000;"
                    ))
                }),
            )?,
        })
    }

    /// Opens a fresh in-memory database with the schema already created.
    pub fn open_memory() -> crate::Result<Self> {
        let db = Self {
            conn_pool: Pool::builder().max_size(1).build(
                SqliteConnectionManager::memory()
                    .with_init(|c| c.execute_batch("PRAGMA foreign_keys = ON;")),
            )?,
        };
        db.create_tables()?;
        Ok(db)
    }

    pub fn create_tables(&self) -> crate::Result<()> {
        let conn = self.conn_pool.get()?;

        for query in [
            concat!(
                "CREATE TABLE IF NOT EXISTS virtual_domains (",
                "id INTEGER PRIMARY KEY, ",
                "name TEXT NOT NULL UNIQUE)"
            ),
            concat!(
                "CREATE TABLE IF NOT EXISTS virtual_users (",
                "id INTEGER PRIMARY KEY, ",
                "domain_id INTEGER NOT NULL REFERENCES virtual_domains(id), ",
                "email TEXT NOT NULL UNIQUE, ",
                "password TEXT)"
            ),
            concat!(
                "CREATE TABLE IF NOT EXISTS virtual_aliases (",
                "id INTEGER PRIMARY KEY, ",
                "domain_id INTEGER NOT NULL REFERENCES virtual_domains(id), ",
                "source TEXT NOT NULL, ",
                "destination TEXT NOT NULL, ",
                "description TEXT NOT NULL DEFAULT '', ",
                "enabled BOOLEAN NOT NULL DEFAULT TRUE, ",
                "created DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP, ",
                "UNIQUE (source, destination))"
            ),
        ] {
            conn.execute(query, [])?;
        }

        Ok(())
    }
}
