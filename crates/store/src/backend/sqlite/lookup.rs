/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use rusqlite::{types::FromSql, Row, Rows, ToSql};

use crate::{IntoRows, QueryResult, QueryType, Value};

use super::SqliteStore;

impl SqliteStore {
    pub fn query<T: QueryResult>(&self, query: &str, params_: &[Value<'_>]) -> crate::Result<T> {
        let conn = self.conn_pool.get()?;
        let mut s = conn.prepare_cached(query)?;
        let params = params_
            .iter()
            .map(|v| v as &(dyn rusqlite::types::ToSql))
            .collect::<Vec<_>>();

        match T::query_type() {
            QueryType::Execute => s
                .execute(params.as_slice())
                .map(T::from_exec)
                .map_err(Into::into),
            QueryType::Exists => s
                .exists(params.as_slice())
                .map(T::from_exists)
                .map_err(Into::into),
            QueryType::QueryOne => s
                .query(params.as_slice())
                .and_then(|mut rows| Ok(T::from_query_one(rows.next()?)))
                .map_err(Into::into),
            QueryType::QueryAll => Ok(T::from_query_all(s.query(params.as_slice())?)),
        }
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        match self {
            Value::Integer(value) => value.to_sql(),
            Value::Bool(value) => value.to_sql(),
            Value::Float(value) => value.to_sql(),
            Value::Text(value) => value.to_sql(),
            Value::Blob(value) => value.to_sql(),
            Value::Null => Ok(rusqlite::types::ToSqlOutput::Owned(
                rusqlite::types::Value::Null,
            )),
        }
    }
}

impl FromSql for Value<'static> {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        Ok(match value {
            rusqlite::types::ValueRef::Null => Value::Null,
            rusqlite::types::ValueRef::Integer(v) => Value::Integer(v),
            rusqlite::types::ValueRef::Real(v) => Value::Float(v),
            rusqlite::types::ValueRef::Text(v) => {
                Value::Text(String::from_utf8_lossy(v).into_owned().into())
            }
            rusqlite::types::ValueRef::Blob(v) => Value::Blob(v.to_vec().into()),
        })
    }
}

impl IntoRows for Rows<'_> {
    fn into_rows(mut self) -> crate::Rows {
        let column_count = self.as_ref().map(|s| s.column_count()).unwrap_or_default();
        let mut rows = crate::Rows { rows: Vec::new() };

        while let Ok(Some(row)) = self.next() {
            rows.rows.push(crate::Row {
                values: (0..column_count)
                    .map(|idx| row.get::<_, Value>(idx).unwrap_or(Value::Null))
                    .collect(),
            });
        }

        rows
    }

    fn into_row(self) -> Option<crate::Row> {
        unreachable!()
    }
}

impl IntoRows for Option<&Row<'_>> {
    fn into_row(self) -> Option<crate::Row> {
        self.map(|row| crate::Row {
            values: (0..row.as_ref().column_count())
                .map(|idx| row.get::<_, Value>(idx).unwrap_or(Value::Null))
                .collect(),
        })
    }

    fn into_rows(self) -> crate::Rows {
        unreachable!()
    }
}
