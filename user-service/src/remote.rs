// Remote loader
// One-shot read of the demo users collection at startup. There is exactly
// one attempt per run: no retry, no write-back.

use crate::error::{ServiceError, ServiceResult};
use crate::models::User;

use reqwest::Client;
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

pub struct UserApi {
    http: Client,
    base_url: String,
}

impl UserApi {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn users_endpoint(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// Fetch the full users collection. Response fields beyond id, name,
    /// email and phone are ignored.
    pub async fn fetch_users(&self) -> ServiceResult<Vec<User>> {
        let response = self
            .http
            .get(self.users_endpoint())
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let users = decode_users(&body)?;
        info!(count = users.len(), "fetched users collection");
        Ok(users)
    }
}

impl Default for UserApi {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_users(body: &[u8]) -> ServiceResult<Vec<User>> {
    serde_json::from_slice(body).map_err(|e| ServiceError::InvalidPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_users_ignores_extra_fields() {
        // Shape of the demo endpoint: nested address/company objects and a
        // website field around the four we care about.
        let body = r#"[
            {
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz",
                "address": {"street": "Kulas Light", "city": "Gwenborough"},
                "phone": "1-770-736-8031 x56442",
                "website": "hildegard.org",
                "company": {"name": "Romaguera-Crona"}
            },
            {
                "id": 2,
                "name": "Ervin Howell",
                "username": "Antonette",
                "email": "Shanna@melissa.tv",
                "phone": "010-692-6593 x09125",
                "website": "anastasia.net"
            }
        ]"#;

        let users = decode_users(body.as_bytes()).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "Leanne Graham");
        assert_eq!(users[0].email, "Sincere@april.biz");
        assert_eq!(users[0].phone, "1-770-736-8031 x56442");
        assert_eq!(users[1].id, 2);
    }

    #[test]
    fn test_decode_users_rejects_malformed_payload() {
        let err = decode_users(b"{\"not\": \"an array\"}").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidPayload(_)));
    }

    #[test]
    fn test_decode_users_rejects_missing_fields() {
        let err = decode_users(br#"[{"id": 1, "name": "No Email"}]"#).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidPayload(_)));
    }

    #[test]
    fn test_users_endpoint_joins_base_url() {
        let api = UserApi::with_base_url("http://localhost:8080");
        assert_eq!(api.users_endpoint(), "http://localhost:8080/users");
    }
}
