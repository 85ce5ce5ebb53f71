//! HTTP surface of the directory.
//!
//! | Route | Methods |
//! |---|---|
//! | `/users` | `GET` list, `POST` create |
//! | `/users/{id}` | `GET`, `PUT`, `DELETE` |
//! | `/`, `/swagger` | API viewer (HTML) |
//! | `/swagger.json` | OpenAPI document |
//! | `/test` | manual test page |
//!
//! Any other method on a `/users` route is `405 Method not allowed`, any other path is
//! `404 Not found`, and `OPTIONS` anywhere is an empty `200` preflight.

pub mod docs;
pub mod response;
pub mod routes;

use crate::clients::UserClient;
use crate::lifecycle::SHUTDOWN_GRACE;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::future::{Future, IntoFuture};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

pub fn router(users: UserClient) -> Router {
    Router::new()
        .route("/", get(docs::swagger_ui))
        .route("/swagger", get(docs::swagger_ui))
        .route("/swagger.json", get(docs::swagger_json))
        .route("/test", get(docs::test_page))
        .route(
            "/users",
            get(routes::list_users)
                .post(routes::create_user)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/users/{id}",
            get(routes::get_user)
                .put(routes::update_user)
                .delete(routes::delete_user)
                .fallback(routes::method_not_allowed),
        )
        .fallback(routes::not_found)
        .layer(middleware::from_fn(response::cors))
        .with_state(users)
}

/// Serves requests on `listener` until `shutdown` resolves, then lets in-flight
/// requests finish for at most [`SHUTDOWN_GRACE`].
pub async fn serve<F>(listener: TcpListener, users: UserClient, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    serve_with_grace(listener, users, shutdown, SHUTDOWN_GRACE).await
}

/// [`serve`] with an explicit drain limit.
///
/// Connections still open when `grace` runs out are abandoned and the call returns `Ok`.
pub async fn serve_with_grace<F>(
    listener: TcpListener,
    users: UserClient,
    shutdown: F,
    grace: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Listening");
        info!("API documentation at http://{addr}/swagger");
    }

    let (signalled_tx, mut signalled_rx) = watch::channel(false);
    let graceful = async move {
        shutdown.await;
        let _ = signalled_tx.send(true);
    };
    let drain_deadline = async move {
        // Sender gone without a signal means the server already stopped on its own.
        let signalled = signalled_rx.wait_for(|fired| *fired).await.is_ok();
        if !signalled {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(grace).await;
    };

    let server = axum::serve(listener, router(users))
        .with_graceful_shutdown(graceful)
        .into_future();

    tokio::select! {
        result = server => result,
        _ = drain_deadline => {
            warn!(?grace, "Open connections did not finish in time, abandoning them");
            Ok(())
        }
    }
}
