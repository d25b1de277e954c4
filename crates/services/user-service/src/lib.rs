//! User Service Library
//!
//! In-memory user registry. Every operation takes the caller's verified
//! token subject; everything except single-record reads is admin only.

pub mod repository;
pub mod service;

pub use repository::{MemoryStore, UserRepository};
pub use service::{UserManager, UserService};
