use serde::{Deserialize, Serialize};

/// The authenticated user as stored by the auth layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl CurrentUser {
    pub fn new(id: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_with_space() {
        let user = CurrentUser::new("u1", "Ada", "Lovelace");
        assert_eq!(user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn deserializes_camel_case() {
        let user: CurrentUser =
            serde_json::from_str(r#"{"id":"u1","firstName":"Ada","lastName":"Lovelace"}"#)
                .expect("deserialize");
        assert_eq!(user.last_name, "Lovelace");
    }
}
