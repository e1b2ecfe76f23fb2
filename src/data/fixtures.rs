//! Test-only writers for throwaway SQLite stores.

use {
    crate::domain::{DatasetId, SeriesKind},
    rusqlite::{Connection, params},
    std::path::Path,
};

pub(crate) struct Row {
    pub datetime: String,
    pub value: Option<f64>,
}

impl Row {
    pub fn text(datetime: &str, value: f64) -> Self {
        Self {
            datetime: datetime.to_string(),
            value: Some(value),
        }
    }

    pub fn null_value(datetime: &str) -> Self {
        Self {
            datetime: datetime.to_string(),
            value: None,
        }
    }
}

/// Create (or extend) a store with one table per dataset, named per `kind`'s convention.
pub(crate) fn write_store(path: &Path, kind: SeriesKind, tables: &[(&str, Vec<Row>)]) {
    let conn = Connection::open(path).expect("open fixture store");
    for (name, rows) in tables {
        let table = kind.table_name(&DatasetId::new(*name));
        conn.execute_batch(&format!(
            "CREATE TABLE \"{}\" (Datetime TEXT, \"{}\" REAL);",
            table,
            kind.value_column()
        ))
        .expect("create fixture table");

        let sql = format!(
            "INSERT INTO \"{}\" (Datetime, \"{}\") VALUES (?1, ?2)",
            table,
            kind.value_column()
        );
        for row in rows {
            conn.execute(&sql, params![row.datetime, row.value])
                .expect("insert fixture row");
        }
    }
}
