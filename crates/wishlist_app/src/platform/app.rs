use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use wishlist_core::Msg;
use wishlist_logging::{wishlist_debug, wishlist_info};
use wishlist_sheets::{
    GoogleSheetsClient, InMemorySheet, ServiceAccountAuth, SheetClient, StaticToken, TokenProvider,
};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging;
use super::session::{session_cookie, session_id_from_headers, ResolvedSession, SessionStore};
use super::ui::{constants::*, render::render_page};

pub async fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    logging::initialize(config.log.destination, config.log_level()?, &config.log.file)?;

    let sheet = build_sheet_client(&config)?;
    let context = AppContext::new(sheet, config.session_ttl());

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    wishlist_info!("Wishlist listening on http://{}", addr);

    axum::serve(listener, router(context)).await?;
    Ok(())
}

fn build_sheet_client(config: &AppConfig) -> anyhow::Result<Arc<dyn SheetClient>> {
    if config.sheet.offline {
        wishlist_info!("Offline mode: rows are kept in memory only");
        return Ok(Arc::new(InMemorySheet::new()));
    }

    let request_timeout = Duration::from_secs(config.sheet.request_timeout_secs);
    let auth: Arc<dyn TokenProvider> = match (&config.sheet.access_token, &config.gspread) {
        (Some(token), _) => Arc::new(StaticToken::new(token.clone())),
        (None, Some(key)) => {
            let auth = ServiceAccountAuth::new(key.clone(), request_timeout)?;
            wishlist_info!("Authenticating as {}", auth.client_email());
            Arc::new(auth)
        }
        (None, None) => anyhow::bail!("no spreadsheet credential configured"),
    };

    let settings = config.sheet.settings();
    wishlist_info!(
        "Using spreadsheet {} worksheet {}",
        settings.spreadsheet_id,
        settings.worksheet
    );
    Ok(Arc::new(GoogleSheetsClient::new(settings, auth)?))
}

#[derive(Clone)]
pub(crate) struct AppContext {
    sessions: Arc<SessionStore>,
    runner: Arc<EffectRunner>,
}

impl AppContext {
    pub(crate) fn new(sheet: Arc<dyn SheetClient>, session_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(session_ttl)),
            runner: Arc::new(EffectRunner::new(sheet)),
        }
    }
}

pub(crate) fn router(context: AppContext) -> Router {
    Router::new()
        .route(PAGE, get(show_page))
        .route(ADD_ITEM, post(add_item))
        .route(TOGGLE_FAVORITE, post(toggle_favorite))
        .route(REQUEST_DELETE, post(request_delete))
        .route(CONFIRM_DELETE, post(confirm_delete))
        .route(CANCEL_DELETE, post(cancel_delete))
        .route(CLEAR_LIST, post(clear_list))
        .route(COPY_LIST, post(copy_list))
        .with_state(context)
}

#[derive(Debug, Default, Deserialize)]
struct FilterQuery {
    submitter: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AddForm {
    url: String,
    submitter: String,
    category: String,
}

async fn show_page(
    State(context): State<AppContext>,
    headers: HeaderMap,
    Query(query): Query<FilterQuery>,
) -> Response {
    let session = context.sessions.resolve(session_id_from_headers(&headers));
    let page = {
        let mut state = session.state.lock().await;
        if query.submitter.is_some() || query.category.is_some() {
            let msg = Msg::FilterChanged {
                submitter: query.submitter.unwrap_or_default(),
                category: query.category.unwrap_or_default(),
            };
            context.runner.dispatch(&mut state, msg).await;
        }
        context.runner.dispatch(&mut state, Msg::PageRequested).await;
        let page = render_page(&state.view());
        context.runner.dispatch(&mut state, Msg::PageRendered).await;
        page
    };
    with_session_cookie(&session, Html(page))
}

async fn add_item(
    State(context): State<AppContext>,
    headers: HeaderMap,
    Form(form): Form<AddForm>,
) -> Response {
    let msg = Msg::AddSubmitted {
        url: form.url,
        submitter: form.submitter,
        category: form.category,
    };
    apply(&context, &headers, msg).await
}

async fn toggle_favorite(
    State(context): State<AppContext>,
    headers: HeaderMap,
    Path(position): Path<usize>,
) -> Response {
    apply(&context, &headers, Msg::FavoriteToggled { position }).await
}

async fn request_delete(
    State(context): State<AppContext>,
    headers: HeaderMap,
    Path(position): Path<usize>,
) -> Response {
    apply(&context, &headers, Msg::DeleteRequested { position }).await
}

async fn confirm_delete(
    State(context): State<AppContext>,
    headers: HeaderMap,
    Path(position): Path<usize>,
) -> Response {
    apply(&context, &headers, Msg::DeleteConfirmed { position }).await
}

async fn cancel_delete(State(context): State<AppContext>, headers: HeaderMap) -> Response {
    apply(&context, &headers, Msg::DeleteCancelled).await
}

async fn clear_list(State(context): State<AppContext>, headers: HeaderMap) -> Response {
    apply(&context, &headers, Msg::ClearClicked).await
}

async fn copy_list(State(context): State<AppContext>, headers: HeaderMap) -> Response {
    apply(&context, &headers, Msg::CopyClicked).await
}

/// Applies one user action to the caller's session and redirects back to the page.
async fn apply(context: &AppContext, headers: &HeaderMap, msg: Msg) -> Response {
    let session = context.sessions.resolve(session_id_from_headers(headers));
    wishlist_debug!("session {} <- {:?}", session.id, msg);
    {
        let mut state = session.state.lock().await;
        context.runner.dispatch(&mut state, msg).await;
    }
    with_session_cookie(&session, Redirect::to(PAGE))
}

fn with_session_cookie(session: &ResolvedSession, response: impl IntoResponse) -> Response {
    if session.is_new {
        ([(SET_COOKIE, session_cookie(session.id))], response).into_response()
    } else {
        response.into_response()
    }
}
