pub mod auth;
pub mod errors;
pub mod session;
pub mod tenant;
pub mod user;

#[cfg(test)]
pub(crate) mod mocks;
