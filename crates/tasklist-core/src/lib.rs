//! State and rules of a paginated, filterable to-do list.
//!
//! [`board::TaskBoard`] is the entry point: it owns the
//! [`store::TaskStore`], the active [`filter::TaskFilter`] and the
//! [`pager::Pager`], and turns each [`board::Intent`] into a mutation, a
//! persist to the durable [`slot::Slot`] and a page reconciliation.

pub mod board;
pub mod config;
pub mod filter;
pub mod pager;
pub mod slot;
pub mod store;
pub mod task;
pub mod view;

pub use board::{Intent, TaskBoard};
pub use config::ListConfig;
pub use filter::TaskFilter;
pub use pager::{PageLink, page_links};
pub use slot::{MemorySlot, Slot};
pub use store::TaskStore;
pub use task::{Task, TaskId};
pub use view::TaskView;
