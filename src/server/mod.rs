pub mod handlers;
pub mod models;
pub mod routes;
#[allow(clippy::module_inception)]
pub mod server;
