//! Deletion-resilient pagination core for SteadyPage.
//! This crate is the single source of truth for paging invariants.

pub mod logging;
pub mod model;
pub mod paginate;
pub mod source;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{Record, RecordIndex};
pub use paginate::{
    index_range, HyperPage, IndexPage, PageError, PageResult, Paginator, DEFAULT_PAGE_SIZE,
};
pub use source::{
    DelimitedFileSource, InMemorySource, RowSource, SourceError, SourceResult, SqliteTableSource,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
