pub mod error;
pub mod routes;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::store::ActivityDirectory;

/// Full application router. Takes the directory as injected state so tests
/// can drive the router against their own seed.
pub fn router(directory: ActivityDirectory) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activity::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(routes::activity::unregister_handler),
        )
        // Static frontend
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        // Layers
        .layer(CatchPanicLayer::new())
        // State
        .with_state(directory)
}
