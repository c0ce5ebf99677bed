//! DTOs de AutoUsa

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::autousa::AutoUsaView;
use crate::models::location::label_of;
use crate::services::location_history_service::AutoUsaUpdate;
use crate::utils::deserialize::{lenient_date, lenient_int, present_lenient_int};
use crate::utils::sanitize::sanitize_string;
use crate::utils::validation::DATE_FORMAT;

// Longitudes de columna en la tabla autousa
const CONTAINER_NUMBER_MAX: usize = 30;
const MARK_MAX: usize = 30;
const MODEL_MAX: usize = 40;

/// Body de POST /autousa y de PUT/PATCH por id o VIN.
/// Las claves desconocidas se ignoran.
#[derive(Debug, Default, Deserialize)]
pub struct AutoUsaRequest {
    pub vin: Option<String>,
    pub container_number: Option<String>,
    pub mark: Option<String>,
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub loc_now_id: Option<i32>,
    #[serde(default, deserialize_with = "present_lenient_int")]
    pub loc_next_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub arrival_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub departure_date: Option<NaiveDate>,
}

impl AutoUsaRequest {
    /// Convierte el body en una actualización con los textos ya limpiados
    pub fn into_update(self) -> AutoUsaUpdate {
        AutoUsaUpdate {
            vin: self.vin.map(|vin| vin.trim().to_string()),
            container_number: self
                .container_number
                .and_then(|v| sanitize_string(&v, CONTAINER_NUMBER_MAX)),
            mark: self.mark.and_then(|v| sanitize_string(&v, MARK_MAX)),
            model: self.model.and_then(|v| sanitize_string(&v, MODEL_MAX)),
            loc_now_id: self.loc_now_id,
            loc_next_id: self.loc_next_id,
            arrival_date: self.arrival_date,
            departure_date: self.departure_date,
        }
    }
}

/// Representación pública de un AutoUsa
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoUsaResponse {
    pub id: i32,
    pub vin: String,
    pub container_number: String,
    pub mark: Option<String>,
    pub model: Option<String>,
    pub loc_now: String,
    pub loc_next: String,
    pub arrival_date: String,
    pub departure_date: String,
}

fn iso_or_empty(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

impl From<AutoUsaView> for AutoUsaResponse {
    fn from(view: AutoUsaView) -> Self {
        let loc_now = label_of(view.loc_now().as_ref());
        let loc_next = label_of(view.loc_next().as_ref());
        let auto = view.auto;

        Self {
            id: auto.id,
            vin: auto.vin,
            container_number: auto.container_number.unwrap_or_default(),
            mark: auto.mark,
            model: auto.model,
            loc_now,
            loc_next,
            arrival_date: iso_or_empty(auto.arrival_date),
            departure_date: iso_or_empty(auto.departure_date),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PhotosResponse {
    pub vin: String,
    pub photos: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::autousa::AutoUsa;
    use serde_json::json;

    #[test]
    fn test_request_lenient_fields() {
        let request: AutoUsaRequest = serde_json::from_value(json!({
            "loc_now_id": "7",
            "loc_next_id": null,
            "arrival_date": "16/01/2024",
            "departure_date": "2024-01-20",
            "mark": "<b>Honda</b>",
            "model": "   ",
            "unknown": "ignored"
        }))
        .unwrap();

        let update = request.into_update();

        assert_eq!(update.loc_now_id, Some(7));
        assert_eq!(update.loc_next_id, Some(None));
        assert_eq!(update.arrival_date, None);
        assert_eq!(update.departure_date, NaiveDate::from_ymd_opt(2024, 1, 20));
        assert_eq!(update.mark.as_deref(), Some("Honda"));
        assert_eq!(update.model, None);
    }

    #[test]
    fn test_request_truncates_to_columns() {
        let request = AutoUsaRequest {
            container_number: Some("C".repeat(50)),
            model: Some("M".repeat(50)),
            ..Default::default()
        };

        let update = request.into_update();

        assert_eq!(update.container_number.map(|v| v.len()), Some(30));
        assert_eq!(update.model.map(|v| v.len()), Some(40));
        assert_eq!(update.loc_next_id, None);
    }

    #[test]
    fn test_response_from_view() {
        let view = AutoUsaView {
            auto: AutoUsa {
                id: 3,
                vin: "1HGBH41JXMN109186".to_string(),
                container_number: None,
                mark: Some("Honda".to_string()),
                model: None,
                loc_now_id: Some(1),
                loc_next_id: Some(9),
                arrival_date: NaiveDate::from_ymd_opt(2024, 1, 10),
                departure_date: None,
            },
            loc_now_location_id: Some(1),
            loc_now_country: Some("USA".to_string()),
            loc_now_description: Some("Savannah".to_string()),
            // loc_next_id apunta a una localización que no existe
            loc_next_location_id: None,
            loc_next_country: None,
            loc_next_description: None,
        };

        let response = AutoUsaResponse::from(view);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "id": 3,
                "vin": "1HGBH41JXMN109186",
                "container_number": "",
                "mark": "Honda",
                "model": null,
                "loc_now": "USA - Savannah",
                "loc_next": "",
                "arrival_date": "2024-01-10",
                "departure_date": ""
            })
        );
    }
}
