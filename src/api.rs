//! The todo routes and their handlers.
//!
//! Every handler follows the same shape: parse request → read store (if
//! needed) → compute → write store (if needed) → respond. Failures convert
//! to responses through [`Error`], so each request produces a complete HTTP
//! reply no matter what the client or the filesystem does.

use std::future::Future;

use http::{Method, StatusCode};
use serde::Serialize;
use uuid::Uuid;

use crate::error::Error;
use crate::handler::Handler;
use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::router::Router;
use crate::store::Store;
use crate::todo::{TitlePayload, Todo};

/// Builds the application router over `store`.
pub fn router(store: Store) -> Router {
    Router::new()
        .on(Method::GET, "/", greet)
        .on(Method::GET, "/todos", route(store.clone(), list_todos))
        .on(Method::POST, "/todos/create-todo", route(store.clone(), create_todo))
        .on(Method::GET, "/todo", route(store.clone(), get_todo))
        .on(Method::PATCH, "/todos/update", route(store.clone(), update_todo))
        .on(Method::DELETE, "/todos/delete", route(store, delete_todo))
}

/// Adapts a `(Store, Request)` handler to the router's `(Request)` shape by
/// capturing the store in a closure.
fn route<F, Fut, R>(store: Store, f: F) -> impl Handler
where
    F: Fn(Store, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    move |req: Request| f(store.clone(), req)
}

// ── Reply envelopes ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct TodoEnvelope<'a> {
    message: &'static str,
    todo: &'a Todo,
}

#[derive(Serialize)]
struct MessageReply {
    message: &'static str,
}

// ── Handlers ──────────────────────────────────────────────────────────────────

// GET /
async fn greet(_req: Request) -> Response {
    Response::text("Hello, World!")
}

// GET /todos — the store's bytes, forwarded without parsing.
async fn list_todos(store: Store, _req: Request) -> Result<Response, Error> {
    Ok(Response::json(store.raw().await?))
}

// POST /todos/create-todo
async fn create_todo(store: Store, req: Request) -> Result<Response, Error> {
    let payload = parse_title(req.body())?;
    let todo = Todo::new(payload.title);

    let mut todos = store.load().await;
    todos.push(todo.clone());
    store.save(&todos).await?;

    let reply = TodoEnvelope { message: "Todo Created", todo: &todo };
    Ok(Response::builder()
        .status(StatusCode::CREATED)
        .json(serde_json::to_vec_pretty(&reply)?))
}

// GET /todo?id=…
async fn get_todo(store: Store, req: Request) -> Result<Response, Error> {
    let id = required_id(&req)?;

    let todos = store.load().await;
    let todo = todos.iter().find(|t| t.id == id).ok_or(Error::NotFound)?;

    Ok(Response::json(serde_json::to_vec(todo)?))
}

// PATCH /todos/update?id=…
//
// The target is located before the body is parsed, so an unknown id is a
// 404 even when the body is garbage.
async fn update_todo(store: Store, req: Request) -> Result<Response, Error> {
    let id = required_id(&req)?;

    let mut todos = store.load().await;
    let index = todos.iter().position(|t| t.id == id).ok_or(Error::NotFound)?;

    let payload = parse_title(req.body())?;
    todos[index].title = payload.title;
    store.save(&todos).await?;

    let reply = TodoEnvelope { message: "Todo updated", todo: &todos[index] };
    Ok(Response::json(serde_json::to_vec_pretty(&reply)?))
}

// DELETE /todos/delete?id=…
async fn delete_todo(store: Store, req: Request) -> Result<Response, Error> {
    let id = required_id(&req)?;

    let mut todos = store.load().await;
    if !todos.iter().any(|t| t.id == id) {
        return Err(Error::NotFound);
    }
    todos.retain(|t| t.id != id);
    store.save(&todos).await?;

    let reply = MessageReply { message: "Todo deleted successfully" };
    Ok(Response::json(serde_json::to_vec_pretty(&reply)?))
}

// ── Request helpers ───────────────────────────────────────────────────────────

/// The `id` query parameter, parsed.
///
/// Absent → 400. Present but not a UUID → 404, since such an id can never
/// match a stored record.
fn required_id(req: &Request) -> Result<Uuid, Error> {
    let raw = req.query("id").ok_or(Error::MissingId)?;
    Uuid::parse_str(raw).map_err(|_| Error::NotFound)
}

/// Two-stage body parse. A body that is not JSON at all surfaces as the raw
/// parse failure (500); well-formed JSON without a string `title` is the
/// client's mistake (400).
fn parse_title(body: &[u8]) -> Result<TitlePayload, Error> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    serde_json::from_value(value).map_err(|_| Error::InvalidTitle)
}
