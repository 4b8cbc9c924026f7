//! HTTP layer for bookrack: configuration, shared state, middleware, route
//! handlers, and the askama page templates.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;
