pub mod app;
pub mod session;
pub mod user;

pub use app::PostgresAppRepository;
pub use session::PostgresSessionRepository;
pub use user::PostgresUserRepository;
