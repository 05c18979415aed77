use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Business category offered by the form. Each key maps to a schema.org type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceType {
    Plumber,
    Roofer,
    Electrician,
    Hvac,
    #[default]
    General,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::Plumber,
        ServiceType::Roofer,
        ServiceType::Electrician,
        ServiceType::Hvac,
        ServiceType::General,
    ];

    /// Resolves a form key. Unknown keys fall back to `General`.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "plumber" => ServiceType::Plumber,
            "roofer" => ServiceType::Roofer,
            "electrician" => ServiceType::Electrician,
            "hvac" => ServiceType::Hvac,
            _ => ServiceType::General,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ServiceType::Plumber => "plumber",
            ServiceType::Roofer => "roofer",
            ServiceType::Electrician => "electrician",
            ServiceType::Hvac => "hvac",
            ServiceType::General => "general",
        }
    }

    /// schema.org type emitted as `@type`.
    pub fn schema_type(self) -> &'static str {
        match self {
            ServiceType::Plumber => "Plumber",
            ServiceType::Roofer => "RoofingContractor",
            ServiceType::Electrician => "Electrician",
            ServiceType::Hvac => "HVACBusiness",
            ServiceType::General => "GeneralContractor",
        }
    }

    /// Human-readable category label: "Plumber", "Roofing Contractor",
    /// "Electrician", "HVAC Contractor", "General Contractor". `schema_type` carries
    /// the matching schema.org type for each.
    pub fn display_name(self) -> &'static str {
        match self {
            ServiceType::Plumber => "Plumber",
            ServiceType::Roofer => "Roofing Contractor",
            ServiceType::Electrician => "Electrician",
            ServiceType::Hvac => "HVAC Contractor",
            ServiceType::General => "General Contractor",
        }
    }
}

/// Day of the week in calendar order, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Capitalized name used for `dayOfWeek`.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day of week '{0}'")]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| day.key() == lowered)
            .ok_or_else(|| UnknownWeekday(s.to_string()))
    }
}

/// Opening and closing time for one day, both `HH:MM` (24-hour).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHours {
    pub open: String,
    pub close: String,
}

/// Also the `address` object of the submitted form.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Validated business profile. Every day in `hours` carries both boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BusinessRecord {
    pub name: String,
    pub service_type: ServiceType,
    pub phone: String,
    pub url: String,
    pub email: Option<String>,
    pub address: Address,
    pub hours: BTreeMap<Weekday, DayHours>,
}
