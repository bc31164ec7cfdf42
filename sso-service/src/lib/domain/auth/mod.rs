pub mod errors;
pub mod ports;
pub mod service;
pub mod verifier;
