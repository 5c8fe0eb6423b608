//! Test modules and shared helpers


pub mod helpers {
    use axum::{body::Body, http::Request, Router};

    use crate::state::AppState;

    pub fn get_api_key() -> String {
        crate::config::get_environments().api_key.clone()
    }

    pub fn setup_app() -> Router {
        crate::app::app(AppState::new(get_api_key()))
    }

    pub fn get_request(uri: &str, authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri).method("GET");
        if let Some(value) = authorization {
            builder = builder.header("Authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }
}
