pub mod achievements;
pub mod utils;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    join_url(&Config::api_base_url(), path)
}

fn join_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        // Use absolute URL
        format!("{}{}", base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::join_url;

    #[test]
    fn relative_without_base() {
        assert_eq!(join_url("", "/user/badges"), "/user/badges");
    }

    #[test]
    fn absolute_with_base() {
        assert_eq!(
            join_url("https://train.example.com", "/api/achievements"),
            "https://train.example.com/api/achievements"
        );
    }
}
