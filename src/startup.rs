//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    CommentService, CommentServiceImpl, ReplyService, ReplyServiceImpl, ThreadService,
    ThreadServiceImpl,
};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    PgCommentRepository, PgReplyRepository, PgThreadRepository,
};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};
use crate::shared::id::IdGenerator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub threads: Arc<dyn ThreadService>,
    pub comments: Arc<dyn CommentService>,
    pub replies: Arc<dyn ReplyService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State backed by the PostgreSQL repositories
    pub fn new(db: PgPool, settings: Settings) -> Self {
        let id_generator = Arc::new(IdGenerator::new(settings.ids.machine_id));
        let thread_repo = Arc::new(PgThreadRepository::new(db.clone()));
        let comment_repo = Arc::new(PgCommentRepository::new(db.clone()));
        let reply_repo = Arc::new(PgReplyRepository::new(db.clone()));

        let threads = ThreadServiceImpl::new(
            thread_repo.clone(),
            comment_repo.clone(),
            reply_repo.clone(),
            id_generator.clone(),
        );
        let comments =
            CommentServiceImpl::new(thread_repo.clone(), comment_repo.clone(), id_generator.clone());
        let replies = ReplyServiceImpl::new(thread_repo, comment_repo, reply_repo, id_generator);

        Self {
            db,
            threads: Arc::new(threads),
            comments: Arc::new(comments),
            replies: Arc::new(replies),
            settings: Arc::new(settings),
        }
    }
}

/// Router with tracing and CORS layers applied
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);
    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
            tracing::info!("Database migrations applied");
        }

        let addr = settings.server_addr();
        let router = build_router(AppState::new(db, settings));
        handlers::health::init_server_start();

        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
