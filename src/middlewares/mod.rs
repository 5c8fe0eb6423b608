pub mod auth_middlewares;
