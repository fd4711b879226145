use std::{future::Future, net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};
use clap::Parser;
use render::{select_duet, DuetForm, DuetPage, HomePage, ScaleForm, ScalePage};
use serde::Serialize;
use shared::error::{ApiError, ErrorCode};
use tokio::{net::TcpListener, sync::oneshot};
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info, warn};

mod app_state;
mod config;
mod templates;

use app_state::AppState;
use config::{load_settings, Cli};
use templates::{Page, Templates};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings(Cli::parse());
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    info!(?settings, "application initializing");

    let templates = Templates::compile()?;
    let state = AppState {
        templates,
        static_dir: settings.static_dir.clone(),
        request_timeout: settings.request_timeout,
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.bind_addr))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "server listening");

    serve_until_shutdown(listener, app, settings.shutdown_timeout, shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);
    let request_timeout = state.request_timeout;
    Router::new()
        .route("/", get(home))
        .route("/scale", get(scale).post(scale_show))
        .route("/duets", get(duets).post(duet_show))
        .route("/healthz", get(healthz))
        .fallback_service(static_files)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves until `signal` resolves, then gives in-flight requests
/// `shutdown_timeout` to finish before aborting.
async fn serve_until_shutdown(
    listener: TcpListener,
    app: Router,
    shutdown_timeout: Duration,
    signal: impl Future<Output = &'static str>,
) -> anyhow::Result<()> {
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::select! {
        joined = &mut server => {
            joined.context("server task failed")?.context("server error")?;
            return Ok(());
        }
        signal = signal => {
            info!(signal, "start shutdown");
        }
    }

    let _ = stop_tx.send(());
    match tokio::time::timeout(shutdown_timeout, &mut server).await {
        Ok(joined) => {
            joined
                .context("server task failed")?
                .context("could not stop server gracefully")?;
            Ok(())
        }
        Err(_) => {
            warn!(?shutdown_timeout, "graceful shutdown did not complete in time");
            server.abort();
            anyhow::bail!("graceful shutdown did not complete in {shutdown_timeout:?}")
        }
    }
}

async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            error!(%error, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}

async fn healthz() -> &'static str {
    "ok"
}

async fn home(State(state): State<Arc<AppState>>) -> Response {
    render_page(&state, Page::Home, &HomePage::default())
}

async fn scale(State(state): State<Arc<AppState>>) -> Response {
    render_page(&state, Page::Scale, &ScalePage::default())
}

async fn scale_show(
    State(state): State<Arc<AppState>>,
    form: Result<Form<ScaleForm>, FormRejection>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let Form(form) = form.map_err(|rejection| {
        warn!(error = %rejection, "undecodable scale form");
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(ErrorCode::Validation, rejection.body_text())),
        )
    })?;
    let page = ScalePage::from_form(&form).map_err(|e| {
        warn!(field = e.field(), error = %e, "rejected scale form");
        (StatusCode::BAD_REQUEST, Json(ApiError::from(e)))
    })?;
    Ok(render_page(&state, Page::Scale, &page))
}

async fn duets(State(state): State<Arc<AppState>>) -> Response {
    render_page(&state, Page::Duets, &DuetPage::default())
}

/// An undecodable duet form is treated like an unknown key and shows G major.
async fn duet_show(
    State(state): State<Arc<AppState>>,
    form: Result<Form<DuetForm>, FormRejection>,
) -> Response {
    let duet = match form {
        Ok(Form(form)) => form.duet,
        Err(rejection) => {
            warn!(error = %rejection, "undecodable duet form");
            None
        }
    };
    render_page(&state, Page::Duets, &select_duet(duet.as_deref()))
}

/// A template failure is logged and answered with an empty 500.
fn render_page<T: Serialize>(state: &AppState, page: Page, vars: &T) -> Response {
    match state.templates.render(page, vars) {
        Ok(body) => Html(body).into_response(),
        Err(error) => {
            error!(%error, page = page.name(), "failed to render page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
