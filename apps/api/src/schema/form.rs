//! Raw form input → `BusinessRecord`.
//!
//! The form submits every field as text and each day's open/close time
//! independently, so a day may arrive with only one boundary set. Such days are
//! dropped here; the generator only ever sees fully specified hours.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::business::{
    Address, BusinessRecord, DayHours, ServiceType, UnknownWeekday, Weekday,
};

/// The form's state field holds at most two characters ("IL", "CA").
const MAX_STATE_LEN: usize = 2;

/// Request body submitted by the collection form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BusinessForm {
    pub name: String,
    pub service_type: String,
    pub phone: String,
    pub url: String,
    pub email: Option<String>,
    pub address: Address,
    /// Keyed by day name, case-insensitive.
    pub hours: BTreeMap<String, HoursInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HoursInput {
    pub open: Option<String>,
    pub close: Option<String>,
}

impl BusinessForm {
    /// Converts the submitted form into a record ready for generation.
    ///
    /// Rejects unknown day names. The state is uppercased and cut to its first
    /// two characters, as the form field would have done. An unrecognized service
    /// type is not an error; it resolves to `general`.
    pub fn into_record(self) -> Result<BusinessRecord, AppError> {
        let state: String = self
            .address
            .state
            .trim()
            .chars()
            .take(MAX_STATE_LEN)
            .collect::<String>()
            .to_uppercase();

        let mut hours = BTreeMap::new();
        for (key, input) in self.hours {
            let day: Weekday = key
                .parse()
                .map_err(|e: UnknownWeekday| AppError::Validation(e.to_string()))?;

            match (non_blank(input.open), non_blank(input.close)) {
                (Some(open), Some(close)) => {
                    hours.insert(day, DayHours { open, close });
                }
                _ => debug!("Dropping {} hours: open and close are both required", day.name()),
            }
        }

        Ok(BusinessRecord {
            name: self.name,
            service_type: ServiceType::from_key(&self.service_type),
            phone: self.phone,
            url: self.url,
            email: non_blank(self.email),
            address: Address {
                state,
                ..self.address
            },
            hours,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
