pub mod auth_server;
pub mod handlers;
pub mod profile_server;

pub use auth_server::AuthGrpcService;
pub use profile_server::ProfileGrpcService;
