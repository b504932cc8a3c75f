// ============================================================================
// TaskSort Library
// ============================================================================

//! Local persistence and session core for a task-tracking application.
//!
//! Two stores share one pattern: an in-memory collection kept in lockstep
//! with its serialized form in a string-keyed device store. The
//! [`TaskStore`] owns the ordered task list; the [`AccountStore`] owns the
//! registered identities plus the single session pointer and the
//! page-load route guard. The presentation layer is external - it calls
//! the store operations and renders their results.
//!
//! # Examples
//!
//! ```
//! use tasksort::{AccountStore, MemoryStorage, Page, TaskFilter, TaskStore};
//!
//! # fn main() -> tasksort::Result<()> {
//! let device = MemoryStorage::new();
//!
//! let mut tasks = TaskStore::open(device.clone())?;
//! tasks.create("Buy milk", "Two liters", "High")?;
//! assert_eq!(tasks.filter(TaskFilter::All).len(), 1);
//!
//! let mut accounts = AccountStore::open(device)?;
//! accounts.register("ada@example.com", "hunter2", "Ada")?;
//! let name = accounts.login("ada@example.com", "hunter2")?;
//! assert_eq!(name, "Ada");
//! assert_eq!(accounts.route_guard(Page::Landing), Some(Page::Tasks));
//! # Ok(())
//! # }
//! ```
//!
//! # Sharing hazard
//!
//! Storage backends are cloneable handles onto shared state. Two store
//! instances (or two processes) pointed at the same [`FileStorage`] root
//! overwrite each other last-writer-wins, with no detection - the same
//! hazard as two browser tabs sharing one localStorage.

pub mod core;
pub mod feedback;
pub mod storage;
pub mod store;

// Re-export main types for convenience
pub use crate::core::{Account, Page, Priority, Result, StoreError, Task, TaskFilter};
pub use crate::feedback::{Feedback, FeedbackKind};
pub use crate::storage::{FileStorage, LocalStorage, MemoryStorage};
pub use crate::store::{AccountStore, TaskStore};
