//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    AccountService, AccountServiceImpl, BookingService, BookingServiceImpl, ListingService,
    ListingServiceImpl, SessionService,
};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    PgBookingRepository, PgListingRepository, PgUserRepository,
};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::logging;
use crate::shared::snowflake::SnowflakeGenerator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub accounts: Arc<dyn AccountService>,
    pub listings: Arc<dyn ListingService>,
    pub bookings: Arc<dyn BookingService>,
    pub sessions: Arc<SessionService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire the PostgreSQL repositories into the services.
    pub fn from_pool(db: PgPool, settings: Settings) -> Self {
        let users = Arc::new(PgUserRepository::new(db.clone()));
        let listings = Arc::new(PgListingRepository::new(db.clone()));
        let bookings = Arc::new(PgBookingRepository::new(db.clone()));
        let ids = Arc::new(SnowflakeGenerator::new(settings.snowflake.worker_id));

        Self {
            accounts: Arc::new(AccountServiceImpl::new(users.clone(), ids.clone())),
            listings: Arc::new(ListingServiceImpl::new(
                users.clone(),
                listings.clone(),
                ids.clone(),
            )),
            bookings: Arc::new(BookingServiceImpl::new(users, listings, bookings, ids)),
            sessions: Arc::new(SessionService::new(settings.session.clone())),
            settings: Arc::new(settings),
            db,
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        // Create database pool
        let db = database::create_pool(&settings.database)
            .await
            .context("Failed to connect to the database")?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");
        }

        let addr = settings.server_addr();
        let state = AppState::from_pool(db, settings);

        // Build router with middleware
        let router = routes::create_router(state).layer(logging::create_trace_layer());

        // Bind to address
        let listener = TcpListener::bind(addr.as_str())
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
