//! Page value objects returned by the paginator.
//!
//! # Responsibility
//! - Define the response envelopes for index-cursor and hypermedia reads.
//! - Keep wire naming compatible with the transport shape callers serialize.
//!
//! # Invariants
//! - Envelopes are per-request artifacts; nothing here is persisted.
//! - `page_size` always reports the actual number of returned records.

use crate::model::record::{Record, RecordIndex};
use serde::Serialize;

/// Deletion-resilient page addressed by stable start index.
///
/// `next_index` is the resume point: the smallest index greater than every
/// index considered by this read, whether returned or skipped as deleted.
/// `next_index >= original_len` means there are no more pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexPage {
    /// Start index this page was requested at.
    #[serde(rename = "index")]
    pub start_index: RecordIndex,
    /// Live records collected from `start_index` upward.
    #[serde(rename = "data")]
    pub records: Vec<Record>,
    /// Actual size of this page; shorter than requested near the tail.
    pub page_size: usize,
    /// Index to resume from on the next read.
    pub next_index: RecordIndex,
}

/// Hypermedia page addressed by 1-indexed page number.
///
/// Positional reads slice the immutable dataset snapshot, so logical
/// deletions do not shift page boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HyperPage {
    /// Actual size of this page.
    pub page_size: usize,
    /// Requested 1-indexed page number.
    pub page: usize,
    /// Records on this page in dataset order.
    pub data: Vec<Record>,
    /// Following page number, absent on (or past) the last page.
    pub next_page: Option<usize>,
    /// Preceding page number, absent on the first page.
    pub prev_page: Option<usize>,
    /// Total page count for the requested page size.
    pub total_pages: usize,
}
