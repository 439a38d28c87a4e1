//! Paginator over a lazily-loaded, index-stable dataset snapshot.
//!
//! # Responsibility
//! - Load and cache the dataset once per paginator instance.
//! - Build the stable index map and serve page reads against it.
//! - Apply logical deletions without disturbing surviving indices.
//!
//! # Invariants
//! - The dataset snapshot is immutable after load; original length never
//!   shrinks, even as records are deleted.
//! - The index map assigns `0..len-1` in load order and never reassigns a
//!   key.
//! - `get_index_page` increments its cursor past deleted indices, so a
//!   resumed read neither repeats nor skips a surviving record.

use crate::model::record::{Record, RecordIndex};
use crate::paginate::page::{HyperPage, IndexPage};
use crate::paginate::{index_range, PageError, PageResult};
use crate::source::RowSource;
use log::{debug, error, info};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::Instant;

/// Deletion-resilient paginator bound to one backing source.
///
/// Both the dataset snapshot and the index map are built lazily on first
/// access and cached for the paginator's lifetime; concurrent first callers
/// are serialized by the one-time cells.
pub struct Paginator<S: RowSource> {
    source: S,
    dataset: OnceCell<Vec<Record>>,
    live: OnceCell<RwLock<HashMap<RecordIndex, Record>>>,
}

impl<S: RowSource> Paginator<S> {
    /// Creates a paginator over the provided source without loading it yet.
    pub fn new(source: S) -> Self {
        Self {
            source,
            dataset: OnceCell::new(),
            live: OnceCell::new(),
        }
    }

    /// Returns the cached dataset snapshot, loading it on first access.
    ///
    /// The header row is stripped; remaining rows become records in source
    /// order. Subsequent calls never touch the source again.
    ///
    /// # Errors
    /// - `PageError::Source` when the backing store cannot be read.
    pub fn dataset(&self) -> PageResult<&[Record]> {
        let records = self.dataset.get_or_try_init(|| self.load_dataset())?;
        Ok(records.as_slice())
    }

    /// Returns the original dataset length fixed at load time.
    pub fn original_len(&self) -> PageResult<usize> {
        Ok(self.dataset()?.len())
    }

    /// Returns the number of records still present in the index map.
    pub fn live_len(&self) -> PageResult<usize> {
        let live = self.live()?.read().unwrap_or_else(PoisonError::into_inner);
        Ok(live.len())
    }

    /// Serves a deletion-resilient page starting at a stable index.
    ///
    /// # Contract
    /// - `start_index` of `None` defaults to 0.
    /// - Collects up to `page_size` live records, scanning past deleted
    ///   indices, and reports the cursor position as `next_index`.
    /// - A short page near the tail is not an error; `next_index` equal to
    ///   the original length means no more pages.
    ///
    /// # Errors
    /// - `InvalidPageSize` when `page_size` is zero, checked before any
    ///   dataset access.
    /// - `IndexOutOfRange` when `start_index` is not below the original
    ///   dataset length.
    pub fn get_index_page(
        &self,
        start_index: Option<RecordIndex>,
        page_size: usize,
    ) -> PageResult<IndexPage> {
        if page_size == 0 {
            return Err(PageError::InvalidPageSize { page_size });
        }

        let start_index = start_index.unwrap_or(0);
        let upper_bound = self.original_len()?;
        if start_index >= upper_bound {
            return Err(PageError::IndexOutOfRange {
                index: start_index,
                dataset_len: upper_bound,
            });
        }

        let live = self.live()?.read().unwrap_or_else(PoisonError::into_inner);
        let mut records = Vec::new();
        let mut cursor = start_index;
        while records.len() < page_size && cursor < upper_bound {
            if let Some(record) = live.get(&cursor) {
                records.push(record.clone());
            }
            cursor += 1;
        }

        debug!(
            "event=page_read module=paginate kind=index start_index={start_index} requested={page_size} returned={} next_index={cursor}",
            records.len()
        );

        Ok(IndexPage {
            start_index,
            page_size: records.len(),
            records,
            next_index: cursor,
        })
    }

    /// Serves a positional page of the dataset snapshot.
    ///
    /// # Contract
    /// - `page` is 1-indexed; a page past the end returns an empty list.
    /// - Reads the snapshot, so logical deletions do not shift boundaries.
    ///
    /// # Errors
    /// - `InvalidPageNumber` when `page` is zero.
    /// - `InvalidPageSize` when `page_size` is zero.
    pub fn get_page(&self, page: usize, page_size: usize) -> PageResult<Vec<Record>> {
        if page == 0 {
            return Err(PageError::InvalidPageNumber { page });
        }
        if page_size == 0 {
            return Err(PageError::InvalidPageSize { page_size });
        }

        let dataset = self.dataset()?;
        let (start, end) = index_range(page, page_size);
        if start >= dataset.len() {
            return Ok(Vec::new());
        }

        let end = end.min(dataset.len());
        Ok(dataset[start..end].to_vec())
    }

    /// Serves a positional page with hypermedia navigation metadata.
    ///
    /// Validation and slicing follow [`Paginator::get_page`]; `total_pages`
    /// is computed over the full snapshot length.
    pub fn get_hyper(&self, page: usize, page_size: usize) -> PageResult<HyperPage> {
        let data = self.get_page(page, page_size)?;
        let total_items = self.original_len()?;
        let total_pages = total_items.div_ceil(page_size);

        let prev_page = if page > 1 { Some(page - 1) } else { None };
        let next_page = if page < total_pages {
            Some(page + 1)
        } else {
            None
        };

        debug!(
            "event=page_read module=paginate kind=hyper page={page} requested={page_size} returned={} total_pages={total_pages}",
            data.len()
        );

        Ok(HyperPage {
            page_size: data.len(),
            page,
            data,
            next_page,
            prev_page,
            total_pages,
        })
    }

    /// Logically deletes the record at `index` from the index map.
    ///
    /// Returns `true` when a live record was removed and `false` when the
    /// index was already deleted; repeating a delete is harmless. The index
    /// itself is retired, never reassigned.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `index` is not below the original dataset
    ///   length.
    pub fn delete(&self, index: RecordIndex) -> PageResult<bool> {
        let upper_bound = self.original_len()?;
        if index >= upper_bound {
            return Err(PageError::IndexOutOfRange {
                index,
                dataset_len: upper_bound,
            });
        }

        let mut live = self.live()?.write().unwrap_or_else(PoisonError::into_inner);
        let removed = live.remove(&index).is_some();
        debug!("event=record_delete module=paginate index={index} removed={removed}");
        Ok(removed)
    }

    fn load_dataset(&self) -> PageResult<Vec<Record>> {
        let started_at = Instant::now();
        let location = self.source.location();
        info!("event=dataset_load module=paginate status=start source={location}");

        match self.source.read_all() {
            Ok(mut rows) => {
                if !rows.is_empty() {
                    rows.remove(0);
                }
                let records: Vec<Record> = rows.into_iter().map(Record::new).collect();
                info!(
                    "event=dataset_load module=paginate status=ok source={location} rows={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(records)
            }
            Err(err) => {
                error!(
                    "event=dataset_load module=paginate status=error source={location} duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err.into())
            }
        }
    }

    // Deletion only ever shrinks the map, so a poisoned guard still holds a
    // structurally valid map; reads and writes recover it instead of failing.
    fn live(&self) -> PageResult<&RwLock<HashMap<RecordIndex, Record>>> {
        self.live.get_or_try_init(|| {
            let dataset = self.dataset()?;
            let entries: HashMap<RecordIndex, Record> = dataset
                .iter()
                .enumerate()
                .map(|(index, record)| (index, record.clone()))
                .collect();
            info!(
                "event=index_build module=paginate status=ok entries={}",
                entries.len()
            );
            Ok(RwLock::new(entries))
        })
    }
}
