//! DTOs de Service

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::service::{NewService, Service};
use crate::utils::errors::{bad_request_error, missing_fields_error, AppResult};
use crate::utils::sanitize::sanitize_string;

const NAME_MAX: usize = 100;
const DESCR_MAX: usize = 500;
const CURRENCY_MAX: usize = 3;
const PHOTO_FILENAME_MAX: usize = 255;

// Request para crear un servicio
#[derive(Debug, Default, Deserialize)]
pub struct CreateServiceRequest {
    pub name: Option<String>,
    pub descr: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub photo_filename: Option<String>,
}

// Request para actualizar un servicio
#[derive(Debug, Default, Deserialize)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub descr: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub photo_filename: Option<String>,
}

// Response de servicio
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceResponse {
    pub service_id: i32,
    pub name: String,
    pub descr: String,
    pub price: f64,
    pub currency: String,
    pub url: Option<String>,
}

/// Precio con dos decimales, como la columna NUMERIC(10,2)
fn to_price(value: f64) -> AppResult<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|price| price.round_dp(2))
        .ok_or_else(|| bad_request_error("Invalid price value"))
}

impl CreateServiceRequest {
    /// Valida los campos obligatorios (ausentes, vacíos o precio 0) y limpia los textos
    pub fn into_new_service(self) -> AppResult<NewService> {
        let name = self.name.as_deref().and_then(|v| sanitize_string(v, NAME_MAX));
        let descr = self.descr.as_deref().and_then(|v| sanitize_string(v, DESCR_MAX));
        let price = self.price.filter(|p| *p != 0.0);
        let currency = self
            .currency
            .as_deref()
            .and_then(|v| sanitize_string(v, CURRENCY_MAX));
        let photo_filename = self
            .photo_filename
            .as_deref()
            .and_then(|v| sanitize_string(v, PHOTO_FILENAME_MAX));

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push("name");
        }
        if descr.is_none() {
            missing.push("descr");
        }
        if price.is_none() {
            missing.push("price");
        }
        if currency.is_none() {
            missing.push("currency");
        }
        if photo_filename.is_none() {
            missing.push("photo_filename");
        }

        match (name, descr, price, currency, photo_filename) {
            (Some(name), Some(descr), Some(price), Some(currency), Some(photo_filename)) => {
                Ok(NewService {
                    name,
                    descr,
                    price: to_price(price)?,
                    currency,
                    photo_filename,
                })
            }
            _ => Err(missing_fields_error(&missing)),
        }
    }
}

impl UpdateServiceRequest {
    /// Aplica sobre `service` solo los campos enviados
    pub fn apply_to(self, service: &mut Service) -> AppResult<()> {
        if let Some(name) = self.name.as_deref().and_then(|v| sanitize_string(v, NAME_MAX)) {
            service.name = name;
        }
        if let Some(descr) = self.descr.as_deref().and_then(|v| sanitize_string(v, DESCR_MAX)) {
            service.descr = descr;
        }
        if let Some(price) = self.price {
            service.price = to_price(price)?;
        }
        if let Some(currency) = self
            .currency
            .as_deref()
            .and_then(|v| sanitize_string(v, CURRENCY_MAX))
        {
            service.currency = currency;
        }
        if let Some(photo_filename) = self
            .photo_filename
            .as_deref()
            .and_then(|v| sanitize_string(v, PHOTO_FILENAME_MAX))
        {
            service.photo_filename = photo_filename;
        }
        Ok(())
    }
}

impl ServiceResponse {
    pub fn from_service(service: Service, base_url: &str) -> Self {
        let url = if service.photo_filename.is_empty() {
            None
        } else {
            Some(format!("{}/photos/services/{}", base_url, service.photo_filename))
        };

        Self {
            service_id: service.service_id,
            name: service.name,
            descr: service.descr,
            price: service.price.to_f64().unwrap_or_default(),
            currency: service.currency,
            url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use std::str::FromStr;

    fn oil_change() -> Service {
        Service {
            service_id: 1,
            name: "Oil change".to_string(),
            descr: "Full synthetic".to_string(),
            price: Decimal::from_str("49.90").unwrap(),
            currency: "USD".to_string(),
            photo_filename: "oil.jpg".to_string(),
        }
    }

    #[test]
    fn test_missing_fields_listed_in_order() {
        let request = CreateServiceRequest {
            name: Some("Oil change".to_string()),
            descr: Some("  ".to_string()),
            price: Some(0.0),
            ..Default::default()
        };

        match request.into_new_service() {
            Err(AppError::BadRequest(msg)) => assert_eq!(
                msg,
                "Missing required fields: descr, price, currency, photo_filename"
            ),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_create_sanitizes_and_rounds() {
        let request = CreateServiceRequest {
            name: Some("<i>Oil</i> change".to_string()),
            descr: Some("Full synthetic".to_string()),
            price: Some(49.899),
            currency: Some("USD".to_string()),
            photo_filename: Some("oil.jpg".to_string()),
        };

        let service = request.into_new_service().unwrap();

        assert_eq!(service.name, "Oil change");
        assert_eq!(service.price, Decimal::from_str("49.90").unwrap());
    }

    #[test]
    fn test_update_applies_only_sent_fields() {
        let mut service = oil_change();
        let request = UpdateServiceRequest {
            price: Some(55.0),
            name: Some("".to_string()),
            ..Default::default()
        };

        request.apply_to(&mut service).unwrap();

        assert_eq!(service.name, "Oil change");
        assert_eq!(service.price, Decimal::from_str("55").unwrap());
    }

    #[test]
    fn test_response_url() {
        let response = ServiceResponse::from_service(oil_change(), "https://rdmotors.com.ua");
        assert_eq!(
            response.url.as_deref(),
            Some("https://rdmotors.com.ua/photos/services/oil.jpg")
        );
        assert_eq!(response.price, 49.9);

        let mut no_photo = oil_change();
        no_photo.photo_filename.clear();
        assert_eq!(ServiceResponse::from_service(no_photo, "x").url, None);
    }
}
