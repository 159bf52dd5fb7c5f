//! Live preview server.
//!
//! Every request outside `/include/` loads the template from disk again and
//! renders it against the data parsed at startup, so edits show up on the
//! next reload without restarting. Nothing is cached between requests.
//! Failures become `500` responses carrying the error text; the server keeps
//! running.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use stamp_map::DataMapping;
use stamp_render::{RenderError, TemplateLoader, TemplateSpec};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::AppError;

/// Path prefix for static assets served from the asset root.
pub const INCLUDE_PREFIX: &str = "/include";

#[derive(Clone)]
struct PreviewState {
    loader: Arc<dyn TemplateLoader>,
    template: Arc<TemplateSpec>,
    data: Arc<DataMapping>,
}

pub struct PreviewServer {
    config: ServerConfig,
    state: PreviewState,
}

impl PreviewServer {
    pub fn new(
        config: ServerConfig,
        loader: Arc<dyn TemplateLoader>,
        template: TemplateSpec,
        data: DataMapping,
    ) -> Self {
        Self {
            config,
            state: PreviewState {
                loader,
                template: Arc::new(template),
                data: Arc::new(data),
            },
        }
    }

    /// Builds the axum router: static assets under [`INCLUDE_PREFIX`],
    /// everything else renders.
    pub fn router(&self) -> Router {
        Router::new()
            .nest_service(INCLUDE_PREFIX, ServeDir::new(&self.config.asset_root))
            .fallback(render_page)
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http())
    }

    /// Binds and serves until Ctrl-C.
    pub async fn serve(self) -> Result<(), AppError> {
        let addr = self.config.addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| AppError::Bind { addr, source })?;

        info!(
            %addr,
            template = %self.state.template.main.display(),
            assets = %self.config.asset_root.display(),
            "preview server listening"
        );
        eprintln!(
            "Serving {} at http://{} (Ctrl-C to stop)",
            self.state.template.main.display(),
            addr
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(AppError::Serve)
    }

    /// Runs [`serve`](Self::serve) on a fresh multi-threaded runtime,
    /// blocking the calling thread.
    pub fn run(self) -> Result<(), AppError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(AppError::Serve)?;
        runtime.block_on(self.serve())
    }
}

async fn render_page(State(state): State<PreviewState>, method: Method) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let rendered = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, RenderError> {
        let template = state.loader.load(&state.template)?;
        template.render_bytes(&state.data)
    })
    .await;

    match rendered {
        Ok(Ok(body)) => {
            debug!(bytes = body.len(), "rendered preview");
            (
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response()
        }
        Ok(Err(err)) => {
            warn!(error = %err, "preview render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
        Err(join_err) => {
            warn!(error = %join_err, "preview render task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, join_err.to_string()).into_response()
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down preview server"),
        Err(err) => {
            // without a signal handler the server runs until killed
            warn!(error = %err, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
