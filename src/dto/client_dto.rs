//! DTOs de Client

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::client::{Client, NewClient};
use crate::utils::errors::{bad_request_error, missing_fields_error, AppResult};
use crate::utils::sanitize::{sanitize_email, sanitize_string};

const LOGIN_MAX: usize = 20;
const NUMBER_MAX: usize = 20;
const STATUS_MAX: usize = 20;

// Request para crear un cliente
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateClientRequest {
    pub login: Option<String>,
    #[validate(length(max = 50))]
    pub email: Option<String>,
    pub number: Option<String>,
    pub status: Option<String>,
}

// Request para actualizar un cliente
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateClientRequest {
    pub login: Option<String>,
    #[validate(length(max = 50))]
    pub email: Option<String>,
    pub number: Option<String>,
    pub status: Option<String>,
}

// Response de cliente
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientResponse {
    pub client_id: i32,
    pub login: String,
    pub email: String,
    pub number: String,
    pub status: String,
}

/// Email enviado → normalizado, o 400 si no tiene forma de email
fn normalized_email(email: Option<&str>) -> AppResult<Option<String>> {
    match email {
        None => Ok(None),
        Some(raw) => sanitize_email(raw)
            .map(Some)
            .ok_or_else(|| bad_request_error("Invalid email format")),
    }
}

impl CreateClientRequest {
    pub fn into_new_client(self) -> AppResult<NewClient> {
        let email = normalized_email(self.email.as_deref())?;
        let login = self.login.as_deref().and_then(|v| sanitize_string(v, LOGIN_MAX));
        let number = self.number.as_deref().and_then(|v| sanitize_string(v, NUMBER_MAX));
        let status = self.status.as_deref().and_then(|v| sanitize_string(v, STATUS_MAX));

        match (login, email, number, status) {
            (Some(login), Some(email), Some(number), Some(status)) => Ok(NewClient {
                login,
                email,
                number,
                status,
            }),
            (login, email, number, status) => {
                let missing: Vec<&str> = [
                    ("login", login.is_none()),
                    ("email", email.is_none()),
                    ("number", number.is_none()),
                    ("status", status.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
                Err(missing_fields_error(&missing))
            }
        }
    }
}

impl UpdateClientRequest {
    /// Email normalizado si se envió; el controlador comprueba si ya existe
    pub fn email(&self) -> AppResult<Option<String>> {
        normalized_email(self.email.as_deref())
    }

    pub fn apply_to(self, client: &mut Client, email: Option<String>) {
        if let Some(email) = email {
            client.email = email;
        }
        if let Some(login) = self.login.as_deref().and_then(|v| sanitize_string(v, LOGIN_MAX)) {
            client.login = login;
        }
        if let Some(number) = self.number.as_deref().and_then(|v| sanitize_string(v, NUMBER_MAX)) {
            client.number = number;
        }
        if let Some(status) = self.status.as_deref().and_then(|v| sanitize_string(v, STATUS_MAX)) {
            client.status = status;
        }
    }
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            client_id: client.client_id,
            login: client.login,
            email: client.email,
            number: client.number,
            status: client.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    #[test]
    fn test_create_normalizes_email() {
        let request = CreateClientRequest {
            login: Some("ivan".to_string()),
            email: Some("  Ivan@Example.COM ".to_string()),
            number: Some("+380501234567".to_string()),
            status: Some("new".to_string()),
        };

        let client = request.into_new_client().unwrap();

        assert_eq!(client.email, "ivan@example.com");
    }

    #[test]
    fn test_create_rejects_bad_email_before_missing_fields() {
        let request = CreateClientRequest {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };

        match request.into_new_client() {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Invalid email format"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_create_lists_missing_fields() {
        let request = CreateClientRequest {
            login: Some("ivan".to_string()),
            email: Some("ivan@example.com".to_string()),
            ..Default::default()
        };

        match request.into_new_client() {
            Err(AppError::BadRequest(msg)) => {
                assert_eq!(msg, "Missing required fields: number, status")
            }
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_update_keeps_unsent_fields() {
        let mut client = Client {
            client_id: 1,
            login: "ivan".to_string(),
            email: "ivan@example.com".to_string(),
            number: "123".to_string(),
            status: "new".to_string(),
        };
        let request = UpdateClientRequest {
            status: Some("<b>vip</b>".to_string()),
            ..Default::default()
        };

        request.apply_to(&mut client, None);

        assert_eq!(client.status, "vip");
        assert_eq!(client.login, "ivan");
    }
}
