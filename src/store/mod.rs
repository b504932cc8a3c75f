pub mod accounts;
pub mod tasks;

pub use accounts::{AccountStore, SESSION_KEY, USERS_KEY};
pub use tasks::{TASKS_KEY, TaskStore};
