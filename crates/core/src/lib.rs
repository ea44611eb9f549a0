//! Core library for portfolio-api
//!
//! This crate implements the **Functional Core** of the portfolio API,
//! following the Functional Core - Imperative Shell pattern already used by
//! the HTTP binary.
//!
//! # Architecture Overview
//!
//! - **`portfolio_core`** (this crate): data model, seed data and every
//!   collection operation, with zero I/O
//! - **`portfolio-api`**: CLI, logging and the axum server (the Imperative Shell)
//!
//! Nothing in here reads the clock or touches the network. Operations that
//! stamp a record take the timestamp as an argument, so every function is
//! deterministic and can be tested with plain fixture data.
//!
//! # Module Organization
//!
//! - [`todo`]: todo records, creation and patch payloads, seed todos
//! - [`blog`]: blog post records, creation payloads, seed posts
//! - [`weather`]: the fixed weather table and city lookup
//! - [`store`]: the in-memory owner of the todo and blog collections
//! - [`fields`]: request body parsing and required-field checks
//! - [`timestamp`]: ISO-8601 stamping and newest-first ordering
//! - [`error`]: the client-facing failure kinds
//!
//! # Example Usage
//!
//! ```rust
//! use portfolio_core::fields::parse_body;
//! use portfolio_core::store::Store;
//! use portfolio_core::todo::NewTodo;
//!
//! let mut store = Store::seeded();
//! let fields = parse_body(br#"{"text": "Learn axum"}"#);
//! let new_todo = NewTodo::from_fields(&fields).unwrap();
//!
//! let todo = store.create_todo(new_todo, "2024-07-10T12:00:00.000000Z".to_string());
//! assert_eq!(todo.id, 4);
//! assert_eq!(store.list_todos()[0].id, 4);
//! ```

pub mod blog;
pub mod error;
pub mod fields;
pub mod store;
pub mod timestamp;
pub mod todo;
pub mod weather;

pub use error::{ApiError, ErrorKind};
pub use store::Store;
