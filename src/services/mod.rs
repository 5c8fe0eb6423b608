//! Request-independent building blocks used by the HTTP layer.

pub mod api_key;
