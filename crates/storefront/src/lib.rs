pub mod di;
pub mod forms;
pub mod handler;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;
