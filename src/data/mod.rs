mod catalog;
mod storage;

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
pub(crate) mod memory;

pub use catalog::{Catalog, list_common_datasets};
pub use storage::{SeriesStore, SqliteStore, has_table};
