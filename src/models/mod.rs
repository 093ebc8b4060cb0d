//! Data models for nftlib.
//!
//! This module contains the catalog record, the filter configuration and the
//! optional about document.

mod about;
mod filter;
mod record;

pub use about::AboutInfo;
pub use filter::{FilterConfig, Selection, SortOrder};
pub use record::{DRAFT_STATUS, Record, RecordDate};
