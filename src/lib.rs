//! Task Board Library
//!
//! A small server-rendered task list. Tasks live in a single JSON document
//! that is read on every request and rewritten whenever a task is added.
//!
//! - [`domain`]: the `Task` record and submission validation
//! - [`infrastructure`]: whole-collection persistence behind `TaskStore`
//! - [`api`]: routes, handlers, HTML views and request logging
//! - [`config`] / [`server`]: startup plumbing

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod server;
