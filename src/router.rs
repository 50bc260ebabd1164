//! Radix-tree request router.
//!
//! One tree per HTTP method, literal path matching. You register a path, you
//! get a handler; anything unregistered falls through to the plain-text 404.

use std::collections::HashMap;
use std::sync::Arc;

use http::{Method, StatusCode};
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::request::Request;
use crate::response::Response;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// ```rust,no_run
    /// # use todofile::{Method, Request, Response, Router};
    /// # async fn greet(_: Request) -> Response { Response::text("") }
    /// Router::new().on(Method::GET, "/", greet);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route pattern or is registered twice
    /// for the same method. Routes are wired at startup, so a bad route
    /// fails the process before it ever accepts traffic.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Routes one request to its handler and awaits the response.
    ///
    /// An unmatched method + path pair — unknown path, known path with the
    /// wrong method, trailing slash, case mismatch — produces the fallback
    /// `404 Route not found`.
    pub async fn dispatch(&self, req: Request) -> Response {
        let handler = self.lookup(req.method(), req.path());
        match handler {
            Some(handler) => handler.call(req).await,
            None => Response::builder()
                .status(StatusCode::NOT_FOUND)
                .text("Route not found"),
        }
    }

    fn lookup(&self, method: &Method, path: &str) -> Option<BoxedHandler> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        Some(Arc::clone(matched.value))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
