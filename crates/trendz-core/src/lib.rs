//! Core abstractions shared by the Trendz storefront components.
//!
//! This crate provides:
//! - `RoutePattern` / `RouteMatch` - Path matching and typed route parameters
//! - `RequestId` - Correlation id for logs
//! - `ComponentConfig` - API host, cookie and route configuration

mod config;
mod context;
mod route;

pub use config::*;
pub use context::*;
pub use route::*;
