//! todofile binary.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:5000/
//!   curl http://localhost:5000/todos
//!   curl -X POST http://localhost:5000/todos/create-todo \
//!        -H 'content-type: application/json' \
//!        -d '{"title":"Buy milk"}'
//!   curl "http://localhost:5000/todo?id=<uuid>"
//!   curl -X PATCH "http://localhost:5000/todos/update?id=<uuid>" \
//!        -H 'content-type: application/json' \
//!        -d '{"title":"Buy oat milk"}'
//!   curl -X DELETE "http://localhost:5000/todos/delete?id=<uuid>"

use std::path::PathBuf;

use todofile::{Server, Store, api};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_owned());
    let store = Store::new(db_path());

    // The store file itself is deployment-owned, but make sure its directory
    // exists so the first create doesn't fail on a fresh checkout.
    if let Some(dir) = store.path().parent() {
        std::fs::create_dir_all(dir).expect("failed to create store directory");
    }

    Server::bind(&format!("0.0.0.0:{port}"))
        .serve(api::router(store))
        .await
        .expect("server error");
}

/// `TODO_DB` overrides; otherwise `db/todo.json` next to the executable.
fn db_path() -> PathBuf {
    if let Ok(path) = std::env::var("TODO_DB") {
        return PathBuf::from(path);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_default()
        .join("db")
        .join("todo.json")
}
