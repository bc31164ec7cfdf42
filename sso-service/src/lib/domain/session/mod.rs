pub mod issuer;
pub mod models;
pub mod ports;
pub mod registry;
pub mod sweeper;
