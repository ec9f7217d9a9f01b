//! Buddy arena module
//!
//! This module provides the complete buddy system:
//! - Per-page metadata with index-based free-list links
//! - Address-sorted free lists, one per order
//! - The allocator core with splitting and coalescing
//! - Free-area reporting

pub mod arena;
pub mod free_list;
pub mod page;
pub mod report;

pub use arena::BuddyArena;
pub use free_list::{FreeList, FreeListIter};
pub use page::{buddy_offset, Page, PageState, PageTable};
pub use report::FreeAreaReport;
