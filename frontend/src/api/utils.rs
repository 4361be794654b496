use gloo_net::http::{Request, RequestBuilder};

/// Creates a GET request carrying `token` as a bearer credential
pub fn authenticated_get(url: &str, token: Option<&str>) -> RequestBuilder {
    let req = Request::get(url).header("Accept", "application/json");
    match token {
        Some(token) => req.header("Authorization", &format!("Bearer {}", token)),
        // No token found, continue without authentication
        None => req,
    }
}
