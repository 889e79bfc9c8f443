//! Authenticated HTTP listener for admin commands.
//!
//! One route: `POST /command` with a JSON command body and a bearer token.
//! Token comparison is constant-time. When no token is configured, a random
//! one is generated at startup and logged once so the operator can use it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::post;
use axum::{Json, Router};
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use crate::gateway::{Command, CommandHandler, CommandReply};

/// Configuration for the command listener.
pub struct CommandServerConfig {
    /// Address to bind.
    pub addr: SocketAddr,
    /// Bearer token; generated when absent.
    pub token: Option<SecretString>,
}

#[derive(Clone)]
struct AppState {
    handler: Arc<CommandHandler>,
    token: Arc<SecretString>,
}

/// The running command server.
pub struct CommandServer {
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl CommandServer {
    /// Bind the listener and spawn the server task.
    pub async fn start(
        config: CommandServerConfig,
        handler: Arc<CommandHandler>,
    ) -> anyhow::Result<Self> {
        let token = match config.token {
            Some(token) => token,
            None => {
                let token = generate_token();
                tracing::info!(token = %token, "no GATEWAY_TOKEN configured, generated one for this run");
                SecretString::from(token)
            }
        };

        let state = AppState {
            handler,
            token: Arc::new(token),
        };

        let app = Router::new()
            .route("/command", post(handle_command))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                require_bearer,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let listener = tokio::net::TcpListener::bind(config.addr).await?;
        tracing::info!("command gateway listening on {}", config.addr);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                    tracing::info!("command gateway shutting down");
                })
                .await
            {
                tracing::error!("command gateway error: {}", e);
            }
        });

        Ok(Self {
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Signal graceful shutdown and wait for the server task to finish.
    pub async fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

async fn handle_command(
    State(state): State<AppState>,
    Json(command): Json<Command>,
) -> Json<CommandReply> {
    Json(state.handler.handle(command).await)
}

/// Middleware validating the bearer token (constant-time comparison).
async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let presented = request
        .headers()
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let expected = state.token.expose_secret();
    let valid: bool = expected.as_bytes().ct_eq(presented.as_bytes()).into();
    if !valid {
        return Err(StatusCode::FORBIDDEN);
    }

    Ok(next.run(request).await)
}

/// Cryptographically random token (32 bytes, hex-encoded).
fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
