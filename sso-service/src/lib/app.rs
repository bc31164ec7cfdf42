use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::signal;
use tonic::transport::Server;

use crate::config::Config;
use crate::domain::auth::service::AuthService;
use crate::domain::session::registry::SessionRegistry;
use crate::domain::session::sweeper::ExpirySweeper;
use crate::domain::session::sweeper::SweeperExit;
use crate::domain::session::sweeper::SweeperHandle;
use crate::domain::user::service::UserService;
use crate::inbound::grpc::AuthGrpcService;
use crate::inbound::grpc::ProfileGrpcService;
use crate::outbound::repositories::PostgresAppRepository;
use crate::outbound::repositories::PostgresSessionRepository;
use crate::outbound::repositories::PostgresUserRepository;
use crate::proto::auth_server::AuthServer;
use crate::proto::user_profile_server::UserProfileServer;

pub type PostgresAuthService =
    AuthService<PostgresUserRepository, PostgresAppRepository, PostgresSessionRepository>;

pub type PostgresUserService = UserService<PostgresUserRepository>;

/// The wired process: storage, services, the gRPC endpoint and the sweeper.
pub struct Application {
    address: SocketAddr,
    config: Config,
    pool: PgPool,
    auth_service: Arc<PostgresAuthService>,
    user_service: Arc<PostgresUserService>,
    sweeper: SweeperHandle,
}

impl Application {
    /// Connect, migrate, wire services and start the expiry sweeper.
    pub async fn build(config: Config) -> Result<Self, anyhow::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect(&config.database.url)
            .await?;
        tracing::info!(
            max_connections = config.database.max_connections,
            database = "postgresql",
            "Database connection pool created"
        );

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!(database = "postgresql", "Database migrations completed");

        let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
        let app_repository = Arc::new(PostgresAppRepository::new(pool.clone()));
        let session_repository = Arc::new(PostgresSessionRepository::new(pool.clone()));

        let registry = SessionRegistry::new(session_repository.clone(), config.session.validity());

        let auth_service = Arc::new(AuthService::new(
            user_repository.clone(),
            app_repository,
            registry,
            config.token.ttl(),
        ));
        let user_service = Arc::new(UserService::new(user_repository));

        let sweeper = ExpirySweeper::new(session_repository, config.sweeper.interval()).spawn();
        tracing::warn!(
            interval_secs = config.sweeper.interval_seconds,
            "Expiry sweeper is not restarted if a pass fails"
        );

        let address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;

        Ok(Self {
            address,
            config,
            pool,
            auth_service,
            user_service,
            sweeper,
        })
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Serve until Ctrl-C or SIGTERM, then stop the sweeper and wait for it.
    pub async fn run_until_stopped(self) -> Result<(), anyhow::Error> {
        let mut builder = Server::builder();
        if let Some(timeout) = self.config.server.request_timeout() {
            builder = builder.timeout(timeout);
        }

        tracing::info!(
            address = %self.address,
            port = self.config.server.grpc_port,
            protocol = "grpc",
            "gRpc server listening"
        );

        let served = builder
            .add_service(AuthServer::new(AuthGrpcService::new(self.auth_service)))
            .add_service(UserProfileServer::new(ProfileGrpcService::new(
                self.user_service,
            )))
            .serve_with_shutdown(self.address, shutdown_signal())
            .await;

        match self.sweeper.stop().await {
            Ok(SweeperExit::Cancelled) => tracing::info!("Expiry sweeper joined"),
            Ok(SweeperExit::Failed(e)) => {
                tracing::error!(error = %e, "Expiry sweeper had halted before shutdown")
            }
            Err(e) => tracing::error!(error = %e, "Expiry sweeper task panicked"),
        }

        self.pool.close().await;

        served?;
        tracing::info!("Server exited successfully");

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
