use {
    crate::{
        config::STORE_SCHEMA,
        domain::{DatasetId, LoadedSeries, SeriesKind, StoreRole},
        errors::PipelineError,
        models::{RawValue, coerce_row},
    },
    rusqlite::{Connection, OpenFlags, OptionalExtension, types::ValueRef},
    std::path::PathBuf,
};

/// Read-only access to one tabular store.
pub trait SeriesStore {
    /// Every user table name in the store.
    fn list_tables(&self) -> Result<Vec<String>, PipelineError>;

    /// All rows of the dataset's table for `kind`, timestamp descending.
    /// Unparseable rows are counted and skipped.
    fn load_series(
        &self,
        dataset: &DatasetId,
        kind: SeriesKind,
    ) -> Result<LoadedSeries, PipelineError>;
}

/// SQLite file store. Holds only the location; a connection lives for exactly one call.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    role: StoreRole,
    location: PathBuf,
}

impl SqliteStore {
    pub fn new(role: StoreRole, location: impl Into<PathBuf>) -> Self {
        Self {
            role,
            location: location.into(),
        }
    }

    /// Open, run `f`, close. The connection is dropped on every exit path, including errors.
    fn with_connection<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, PipelineError>,
    ) -> Result<T, PipelineError> {
        let conn = Connection::open_with_flags(
            &self.location,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| PipelineError::StoreUnavailable {
            store: self.role,
            location: self.location.clone(),
            source,
        })?;
        f(&conn)
    }

    fn query_err(&self) -> impl Fn(rusqlite::Error) -> PipelineError + '_ {
        move |source| {
            // Read-only open succeeds lazily; a non-database file only fails on first query.
            let not_a_database = matches!(
                &source,
                rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::NotADatabase
            );
            if not_a_database {
                PipelineError::StoreUnavailable {
                    store: self.role,
                    location: self.location.clone(),
                    source,
                }
            } else {
                PipelineError::Query {
                    store: self.role,
                    source,
                }
            }
        }
    }
}

/// Parameterised existence check against sqlite_master.
pub fn has_table(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |_| Ok(()),
    )
    .optional()
    .map(|found| found.is_some())
}

/// Quote an identifier for SQLite. Only ever applied to names already confirmed by `has_table`.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn raw_value(value: ValueRef<'_>) -> RawValue<'_> {
    match value {
        ValueRef::Null | ValueRef::Blob(_) => RawValue::Null,
        ValueRef::Integer(v) => RawValue::Integer(v),
        ValueRef::Real(v) => RawValue::Real(v),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .map(RawValue::Text)
            .unwrap_or(RawValue::Null),
    }
}

impl SeriesStore for SqliteStore {
    fn list_tables(&self) -> Result<Vec<String>, PipelineError> {
        self.with_connection(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT name FROM sqlite_master \
                     WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
                     ORDER BY name",
                )
                .map_err(self.query_err())?;
            let tables = stmt
                .query_map([], |row| row.get::<_, String>(0))
                .map_err(self.query_err())?
                .collect::<Result<Vec<_>, _>>()
                .map_err(self.query_err())?;
            Ok(tables)
        })
    }

    fn load_series(
        &self,
        dataset: &DatasetId,
        kind: SeriesKind,
    ) -> Result<LoadedSeries, PipelineError> {
        let table = kind.table_name(dataset);

        self.with_connection(|conn| {
            if !has_table(conn, &table).map_err(self.query_err())? {
                return Err(PipelineError::DatasetNotFound {
                    dataset: dataset.clone(),
                    store: self.role,
                });
            }

            let datetime_col = quote_ident(STORE_SCHEMA.datetime_column);
            let sql = format!(
                "SELECT {dt}, {value} FROM {table} ORDER BY {dt} DESC",
                dt = datetime_col,
                value = quote_ident(kind.value_column()),
                table = quote_ident(&table),
            );
            let mut stmt = conn.prepare(&sql).map_err(self.query_err())?;
            let mut rows = stmt.query([]).map_err(self.query_err())?;

            let mut loaded = LoadedSeries::default();
            while let Some(row) = rows.next().map_err(self.query_err())? {
                let datetime = row.get_ref(0).map_err(self.query_err())?;
                let value = row.get_ref(1).map_err(self.query_err())?;
                match coerce_row(raw_value(datetime), raw_value(value)) {
                    Some(obs) => loaded.observations.push(obs),
                    None => loaded.unparseable_rows += 1,
                }
            }

            if loaded.unparseable_rows > 0 {
                log::debug!(
                    "{}: dropped {} unparseable rows from {} store",
                    table,
                    loaded.unparseable_rows,
                    self.role
                );
            }
            Ok(loaded)
        })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::data::fixtures::{write_store, Row},
        chrono::NaiveDate,
    };

    #[test]
    fn lists_user_tables_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actual.db");
        write_store(&path, SeriesKind::Actual, &[("ABC", vec![]), ("XYZ", vec![])]);
        // AUTOINCREMENT creates sqlite_sequence, which must not show up as a dataset
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE meta (id INTEGER PRIMARY KEY AUTOINCREMENT); INSERT INTO meta DEFAULT VALUES;")
            .unwrap();

        let store = SqliteStore::new(StoreRole::Actual, &path);
        assert_eq!(store.list_tables().unwrap(), vec!["ABC", "XYZ", "meta"]);
    }

    #[test]
    fn loads_descending_and_counts_bad_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actual.db");
        write_store(
            &path,
            SeriesKind::Actual,
            &[(
                "ABC",
                vec![
                    Row::text("2024-01-02 09:15:00+05:30", 101.0),
                    Row::text("2024-01-03 09:15:00+05:30", 102.0),
                    Row::text("garbage", 1.0),
                    Row::null_value("2024-01-04 09:15:00"),
                ],
            )],
        );

        let store = SqliteStore::new(StoreRole::Actual, &path);
        let loaded = store
            .load_series(&DatasetId::new("ABC"), SeriesKind::Actual)
            .unwrap();

        assert_eq!(loaded.unparseable_rows, 2);
        assert_eq!(loaded.total_rows(), 4);
        let days: Vec<NaiveDate> = loaded.observations.iter().map(|o| o.date()).collect();
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
            ]
        );
        assert_eq!(loaded.observations[0].value, 102.0);
    }

    #[test]
    fn prediction_tables_use_suffix_and_value_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pred.db");
        write_store(
            &path,
            SeriesKind::Predicted,
            &[("ABC", vec![Row::text("2024-01-02 10:00:00", 98.0)])],
        );

        let store = SqliteStore::new(StoreRole::Predictions, &path);
        assert_eq!(store.list_tables().unwrap(), vec!["ABC_predictions"]);
        let loaded = store
            .load_series(&DatasetId::new("ABC"), SeriesKind::Predicted)
            .unwrap();
        assert_eq!(loaded.observations.len(), 1);
        assert_eq!(loaded.observations[0].value, 98.0);
    }

    #[test]
    fn missing_table_is_dataset_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actual.db");
        write_store(&path, SeriesKind::Actual, &[("ABC", vec![])]);

        let store = SqliteStore::new(StoreRole::Actual, &path);
        let err = store
            .load_series(&DatasetId::new("XYZ"), SeriesKind::Actual)
            .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::DatasetNotFound { store: StoreRole::Actual, .. }
        ));
    }

    #[test]
    fn hostile_identifier_is_only_ever_looked_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actual.db");
        write_store(&path, SeriesKind::Actual, &[("ABC", vec![])]);

        let store = SqliteStore::new(StoreRole::Actual, &path);
        let err = store
            .load_series(&DatasetId::new("ABC; DROP TABLE ABC"), SeriesKind::Actual)
            .unwrap_err();
        assert!(matches!(err, PipelineError::DatasetNotFound { .. }));
        assert_eq!(store.list_tables().unwrap(), vec!["ABC"]);
    }

    #[test]
    fn missing_file_is_store_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(StoreRole::Predictions, dir.path().join("absent.db"));
        let err = store.list_tables().unwrap_err();
        assert!(matches!(
            err,
            PipelineError::StoreUnavailable { store: StoreRole::Predictions, .. }
        ));
        assert!(err.is_fatal());
    }

    #[test]
    fn non_database_file_is_store_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.db");
        std::fs::write(&path, "this is not sqlite, just some text padding it out to a page").unwrap();

        let err = SqliteStore::new(StoreRole::Actual, &path).list_tables().unwrap_err();
        assert!(matches!(err, PipelineError::StoreUnavailable { .. }));
    }

    #[test]
    fn missing_value_column_is_a_query_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actual.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE ABC (Datetime TEXT, Open REAL);")
            .unwrap();

        let err = SqliteStore::new(StoreRole::Actual, &path)
            .load_series(&DatasetId::new("ABC"), SeriesKind::Actual)
            .unwrap_err();
        assert!(matches!(err, PipelineError::Query { store: StoreRole::Actual, .. }));
    }
}
