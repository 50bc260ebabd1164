//! # todofile
//!
//! A minimal todo HTTP service. One collection, one JSON file, six routes.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! The store is a single JSON array on disk. Every mutating request reads
//! the whole array, changes it in memory, and writes the whole array back.
//! Last writer wins — there is no locking, no transaction boundary, and no
//! optimistic concurrency token. This is a development tool for a single
//! client, not production infrastructure.
//!
//! What todofile does:
//!
//! - Radix-tree routing — O(path-length) lookup via [`matchit`]
//! - Async I/O — tokio + hyper, HTTP/1.1 and HTTP/2
//! - Graceful shutdown — SIGTERM / Ctrl-C, drains in-flight requests
//! - Durable records — `{id, title, createdAt}` persisted as pretty-printed
//!   JSON behind a narrow load-all / save-all interface
//!
//! ## Routes
//!
//! | Method | Path                 | Behavior                     |
//! |--------|----------------------|------------------------------|
//! | GET    | `/`                  | `Hello, World!`              |
//! | GET    | `/todos`             | raw store contents           |
//! | POST   | `/todos/create-todo` | append a record, respond 201 |
//! | GET    | `/todo?id=…`         | one record by id             |
//! | PATCH  | `/todos/update?id=…` | overwrite a record's title   |
//! | DELETE | `/todos/delete?id=…` | remove a record              |
//!
//! Anything else is `404 Route not found`.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use todofile::{Server, Store, api};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Store::new("db/todo.json");
//!
//!     Server::bind("0.0.0.0:5000")
//!         .serve(api::router(store))
//!         .await
//!         .unwrap();
//! }
//! ```

pub mod api;
mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;
mod store;
mod todo;

pub use error::Error;
pub use handler::Handler;
pub use http::{Method, StatusCode};
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use store::Store;
pub use todo::{TitlePayload, Todo};
