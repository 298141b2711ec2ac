//! Form state for the prediction and actual-data pages.

use crate::catalog::{CropCatalog, VarietySelect};
use crate::error::{ClientError, parse_number};
use crate::parameter::{ParameterId, ParameterSet};
use crate::{ActualDataRecord, ContactMessage, PredictionRequest};

/// Arrival quantity (quintals) restored on reset.
pub const DEFAULT_ARRIVAL: &str = "1000";

/// Everything the user enters to describe market conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionForm {
    pub region: String,
    pub crop: String,
    pub variety: VarietySelect,
    pub parameters: ParameterSet,
    pub arrival: String,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionForm {
    pub fn new() -> Self {
        Self {
            region: String::new(),
            crop: String::new(),
            variety: VarietySelect::cleared(),
            parameters: ParameterSet::new(),
            arrival: DEFAULT_ARRIVAL.to_string(),
        }
    }

    /// Sets the crop and repopulates the dependent variety list.
    pub fn select_crop(&mut self, crop: &str) {
        self.crop = crop.to_string();
        self.variety = VarietySelect::for_crop(&CropCatalog, crop);
    }

    pub fn select_variety(&mut self, variety: &str) {
        self.variety.select(variety);
    }

    /// Coerces the measurement fields and builds the request body.
    pub fn to_request(&self) -> Result<PredictionRequest, ClientError> {
        Ok(PredictionRequest {
            region: self.region.clone(),
            crop: self.crop.clone(),
            variety: self.variety.selected.clone(),
            rainfall: self.parameters.value(ParameterId::Rainfall),
            temperature: self.parameters.value(ParameterId::Temperature),
            arrival: parse_number("Arrival", &self.arrival)?,
            humidity: self.parameters.value(ParameterId::Humidity),
            pesticide: self.parameters.value(ParameterId::Pesticide),
        })
    }

    /// Back to the initial state: no crop, disabled variety list, default
    /// parameters and arrival.
    pub fn reset(&mut self) {
        self.region.clear();
        self.crop.clear();
        self.variety = VarietySelect::cleared();
        self.parameters.reset_all();
        self.arrival = DEFAULT_ARRIVAL.to_string();
    }
}

/// Conditions plus the prices that were actually observed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActualDataForm {
    pub conditions: PredictionForm,
    pub min_price: String,
    pub max_price: String,
    pub modal_price: String,
}

impl ActualDataForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_record(&self) -> Result<ActualDataRecord, ClientError> {
        Ok(ActualDataRecord {
            conditions: self.conditions.to_request()?,
            min_price: parse_number("Min price", &self.min_price)?,
            max_price: parse_number("Max price", &self.max_price)?,
            modal_price: parse_number("Modal price", &self.modal_price)?,
        })
    }

    pub fn reset(&mut self) {
        self.conditions.reset();
        self.min_price.clear();
        self.max_price.clear();
        self.modal_price.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl ContactForm {
    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            from_name: self.from_name.trim().to_string(),
            from_email: self.from_email.trim().to_string(),
            message: self.message.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
