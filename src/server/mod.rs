use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::body::Body as HttpBody;
use axum::extract::{Path as UrlPath, State};
use axum::http::{header, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use chrono::NaiveDate;
use log::{error, info};

use crate::api::views::{
    ActivityView, BookmarkView, DashboardView, DeleteWordView, EnglishListView, LearningView,
    RegisterWordView, UpdateBookmarkFlagView, UpdateIsCorrectFlagView,
};
use crate::api::{ApiError, Body, Response};
use crate::db::SqliteStore;


/// Everything a request handler needs: the store behind one lock, the page
/// shells read once at startup, and the date stamped on audit records for
/// the lifetime of the process.
pub struct AppState {
    store: Mutex<SqliteStore>,
    template: String,
    not_found_page: String,
    static_root: PathBuf,
    today: NaiveDate,
}

impl AppState {
    pub fn new(store: SqliteStore, assets_dir: &Path, today: NaiveDate) -> Result<Self, ApiError> {
        Ok(Self {
            store: Mutex::new(store),
            template: fs::read_to_string(assets_dir.join("index.html"))?,
            not_found_page: fs::read_to_string(assets_dir.join("404.html"))?,
            static_root: assets_dir.join("static"),
            today,
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/learning", get(learning))
        .route("/english_list", get(english_list))
        .route("/bookmark", get(bookmark))
        .route("/activity", get(activity))
        .route("/update/is_correct", post(update_is_correct))
        .route("/update/bookmark", post(update_bookmark))
        .route("/register/word", post(register_word))
        .route("/delete/word", post(delete_word))
        .route("/static/*path", get(static_asset))
        .fallback(not_found)
        .with_state(state)
}

pub async fn serve(state: Arc<AppState>, bind_addr: &str) -> Result<(), ApiError> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Serving HTTP on {bind_addr} ...");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn dashboard(State(state): State<Arc<AppState>>) -> axum::response::Response {
    let store = state.store.lock().unwrap();
    let result = DashboardView::new(&*store, &*store, &state.template, state.today).view();
    into_http(result)
}

async fn learning(State(state): State<Arc<AppState>>) -> axum::response::Response {
    let store = state.store.lock().unwrap();
    into_http(LearningView::new(&*store).view())
}

async fn english_list(State(state): State<Arc<AppState>>) -> axum::response::Response {
    let store = state.store.lock().unwrap();
    into_http(EnglishListView::new(&*store).view())
}

async fn bookmark(State(state): State<Arc<AppState>>) -> axum::response::Response {
    let store = state.store.lock().unwrap();
    into_http(BookmarkView::new(&*store).view())
}

async fn activity(State(state): State<Arc<AppState>>) -> axum::response::Response {
    let store = state.store.lock().unwrap();
    into_http(ActivityView::new(&*store).view())
}

async fn update_is_correct(
    State(state): State<Arc<AppState>>,
    req_data: String,
) -> axum::response::Response {
    let store = state.store.lock().unwrap();
    into_http(UpdateIsCorrectFlagView::new(&req_data, &*store, &*store, state.today).view())
}

async fn update_bookmark(
    State(state): State<Arc<AppState>>,
    req_data: String,
) -> axum::response::Response {
    let store = state.store.lock().unwrap();
    into_http(UpdateBookmarkFlagView::new(&req_data, &*store, &*store, state.today).view())
}

async fn register_word(
    State(state): State<Arc<AppState>>,
    req_data: String,
) -> axum::response::Response {
    let store = state.store.lock().unwrap();
    into_http(RegisterWordView::new(&req_data, &*store, &*store, state.today).view())
}

async fn delete_word(
    State(state): State<Arc<AppState>>,
    req_data: String,
) -> axum::response::Response {
    let store = state.store.lock().unwrap();
    into_http(DeleteWordView::new(&req_data, &*store, &*store, state.today).view())
}

async fn static_asset(
    State(state): State<Arc<AppState>>,
    UrlPath(path): UrlPath<String>,
) -> axum::response::Response {
    into_http(serve_static(&state, &path))
}

async fn not_found(State(state): State<Arc<AppState>>) -> axum::response::Response {
    transmit(Response::not_found(state.not_found_page.clone()))
}

fn serve_static(state: &AppState, path: &str) -> Result<Response, ApiError> {
    // Requests may not climb out of the static root.
    if path.split('/').any(|segment| segment == "..") {
        return Err(io::Error::new(io::ErrorKind::NotFound, "path escapes static root").into());
    }
    let full_path = state.static_root.join(path);
    let suffix = full_path.extension().and_then(|e| e.to_str()).unwrap_or("").to_string();
    Response::static_file(&full_path, &suffix)
}

/// Boundary error mapping: the single recoverable validation kind becomes the
/// fixed Bad-Request response; everything else is logged and becomes the fixed
/// Internal-Server-Error response.
fn into_http(result: Result<Response, ApiError>) -> axum::response::Response {
    let response = match result {
        Ok(response) => response,
        Err(ApiError::Validation) => Response::bad_request(),
        Err(err) => {
            error!("request failed: {err}");
            Response::internal_server_error()
        }
    };
    transmit(response)
}

fn transmit(response: Response) -> axum::response::Response {
    let status = status_code(response.status());
    let content_type = response.content_type();
    let body = match response.into_body() {
        Body::Text(text) => HttpBody::from(text),
        Body::Bytes(bytes) => HttpBody::from(bytes),
    };
    axum::http::Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(body)
        .expect("static header set")
}

fn status_code(status_line: &str) -> StatusCode {
    match status_line {
        "200 OK" => StatusCode::OK,
        "400 Bad Request" => StatusCode::BAD_REQUEST,
        "404 Not Found" => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
