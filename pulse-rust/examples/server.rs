use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use dotenvy::dotenv;
use pulse_sidebar::{
    AiRequestKind, AiResult, ArticleRef, SidebarController, SidebarPhase, SidebarState,
};
use serde::Serialize;
use std::{env, error::Error, sync::Arc};
use tower_http::cors::CorsLayer;
use tracing::info;

mod common;

#[derive(Clone)]
struct AppState {
    controller: Arc<SidebarController>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SidebarView {
    phase: SidebarPhase,
    active_kind: Option<AiRequestKind>,
    is_loading: bool,
    result: Option<AiResult>,
    caption: Option<&'static str>,
    disclaimer: Option<&'static str>,
}

impl From<SidebarState> for SidebarView {
    fn from(state: SidebarState) -> Self {
        Self {
            phase: state.phase(),
            active_kind: state.active_kind(),
            is_loading: state.is_loading(),
            result: state.result().cloned(),
            caption: state.caption(),
            disclaimer: state.disclaimer(),
        }
    }
}

async fn article_handler(State(state): State<AppState>) -> Json<ArticleRef> {
    Json(state.controller.article().clone())
}

async fn sidebar_handler(State(state): State<AppState>) -> Json<SidebarView> {
    Json(state.controller.state().into())
}

async fn dispatch_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<SidebarView>, (StatusCode, String)> {
    let kind = kind
        .parse::<AiRequestKind>()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    info!(operation = kind.operation_name(), "sidebar tool selected");
    Ok(Json(state.controller.dispatch(kind).await.into()))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();
    common::init_tracing();

    let gateway = Arc::new(common::google_gateway()?);
    let controller = Arc::new(SidebarController::new(gateway, common::load_article()?));

    let app_url = env::var("APP_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());

    let app = Router::new()
        .route("/article", get(article_handler))
        .route("/sidebar", get(sidebar_handler))
        .route("/sidebar/{kind}", post(dispatch_handler))
        .layer(
            CorsLayer::new()
                .allow_origin([app_url.parse::<HeaderValue>()?])
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(AppState { controller });

    let port = env::var("PORT").unwrap_or_else(|_| "4000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    println!("Server listening on http://localhost:{port}");

    axum::serve(listener, app).await?;

    Ok(())
}
