//! Platform-independent core of the AgriPredict front-end.
//! Transport types mirror the prediction service's request/response payloads;
//! the modules hold the view state the browser layer renders.

pub mod catalog;
pub mod chart;
pub mod error;
pub mod forms;
pub mod overlay;
pub mod parameter;
pub mod router;
pub mod tween;

pub use catalog::{CropCatalog, REGIONS, VARIETY_PLACEHOLDER, VarietySelect};
pub use chart::{ChartHandle, ChartSlot, PriceBar, PriceKind, price_bars};
pub use error::{ApiFailure, ClientError, Operation};
pub use forms::{ActualDataForm, ContactForm, PredictionForm};
pub use overlay::{OverlayLease, OverlayState};
pub use parameter::{BoundedParameter, ParameterId, ParameterSet, ParameterSpec};
pub use router::{Navigation, NavigationSource, PageId, ScrollBehavior, ViewRouter};
pub use tween::{PriceCounter, Tween};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Prediction service path for price predictions.
pub const PREDICT_ENDPOINT: &str = "/predict";

/// Prediction service path for observed prices.
pub const SUBMIT_ACTUAL_DATA_ENDPOINT: &str = "/submit_actual_data";

/// Transactional email REST endpoint used by the contact form.
pub const EMAIL_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

// ===================== Prediction =====================

/// Request body for `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PredictionRequest {
    pub region: String,
    pub crop: String,
    pub variety: String,
    pub rainfall: f64,
    pub temperature: f64,
    pub arrival: f64,
    pub humidity: f64,
    pub pesticide: f64,
}

/// Success body of `POST /predict`, prices in Rs/qtl.
///
/// The service is trusted to return `min <= modal <= max`; nothing here checks it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PredictionResult {
    pub min_price: f64,
    pub max_price: f64,
    pub modal_price: f64,
}

// ===================== Actual data =====================

/// Request body for `POST /submit_actual_data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ActualDataRecord {
    #[serde(flatten)]
    pub conditions: PredictionRequest,
    pub min_price: f64,
    pub max_price: f64,
    pub modal_price: f64,
}

/// Success body of `POST /submit_actual_data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct SubmissionAck {
    pub message: String,
}

// ===================== Contact =====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

/// Body sent to [`EMAIL_SEND_URL`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmailSendRequest {
    pub service_id: String,
    pub template_id: String,
    /// Public key of the email account.
    pub user_id: String,
    pub template_params: ContactMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> PredictionRequest {
        PredictionRequest {
            region: "Maharashtra".into(),
            crop: "Onion".into(),
            variety: "Nashik Red".into(),
            rainfall: 50.0,
            temperature: 25.0,
            arrival: 1000.0,
            humidity: 60.0,
            pesticide: 3.0,
        }
    }

    #[test]
    fn prediction_request_wire_format() {
        let body = serde_json::to_value(request()).unwrap();
        assert_eq!(
            body,
            json!({
                "region": "Maharashtra",
                "crop": "Onion",
                "variety": "Nashik Red",
                "rainfall": 50.0,
                "temperature": 25.0,
                "arrival": 1000.0,
                "humidity": 60.0,
                "pesticide": 3.0
            })
        );
    }

    #[test]
    fn actual_record_is_flat() {
        let record = ActualDataRecord {
            conditions: request(),
            min_price: 1200.0,
            max_price: 1800.0,
            modal_price: 1500.0,
        };
        let body = serde_json::to_value(&record).unwrap();
        assert_eq!(body["crop"], "Onion");
        assert_eq!(body["modal_price"], 1500.0);
        assert!(body.get("conditions").is_none());
    }

    #[test]
    fn prediction_result_accepts_integers() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"min_price":1000,"max_price":2000,"modal_price":1500}"#).unwrap();
        assert_eq!(result.modal_price, 1500.0);
    }

    #[test]
    fn email_request_nests_template_params() {
        let body = serde_json::to_value(EmailSendRequest {
            service_id: "service_x".into(),
            template_id: "template_y".into(),
            user_id: "pk".into(),
            template_params: ContactMessage {
                from_name: "A".into(),
                from_email: "a@example.com".into(),
                message: "hi".into(),
            },
        })
        .unwrap();
        assert_eq!(body["template_params"]["from_email"], "a@example.com");
        assert_eq!(body["user_id"], "pk");
    }
}
