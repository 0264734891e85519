/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use rusqlite::TransactionBehavior;

use crate::Value;

use super::SqliteStore;

pub struct Transaction<'c> {
    trx: rusqlite::Transaction<'c>,
}

impl SqliteStore {
    /// Runs `f` against a single transaction: committed when `f` returns
    /// `Ok`, rolled back otherwise. The pooled connection is held only for
    /// the duration of the call.
    pub fn transaction<T>(
        &self,
        f: impl FnOnce(&Transaction<'_>) -> crate::Result<T>,
    ) -> crate::Result<T> {
        let mut conn = self.conn_pool.get()?;
        let trx = Transaction {
            trx: conn.transaction_with_behavior(TransactionBehavior::Immediate)?,
        };
        match f(&trx) {
            Ok(result) => {
                trx.trx.commit()?;
                Ok(result)
            }
            Err(err) => {
                trx.trx.rollback().ok();
                Err(err)
            }
        }
    }
}

impl Transaction<'_> {
    pub fn exec(&self, query: &str, params_: &[Value<'_>]) -> crate::Result<usize> {
        let params = params_
            .iter()
            .map(|v| v as &(dyn rusqlite::types::ToSql))
            .collect::<Vec<_>>();

        self.trx
            .prepare_cached(query)?
            .execute(params.as_slice())
            .map_err(Into::into)
    }
}
