//! bankview-gateway-http
//!
//! Reqwest adapter implementing the core's [`BankGateway`] port against
//! the remote banking API.
//!
//! [`BankGateway`]: bankview_core::BankGateway

pub mod client;
pub mod config;

pub use client::HttpGateway;
pub use config::ApiConfig;
