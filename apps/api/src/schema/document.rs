//! schema.org JSON-LD object graph for a local business.
//!
//! Field declaration order is the serialization order, so the emitted JSON reads
//! in the same order a person would write it by hand.

use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Businesses served by the form are US-based.
pub const ADDRESS_COUNTRY: &str = "US";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LocalBusinessDocument {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub telephone: String,
    pub url: String,
    /// Only set when the business supplied an email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: PostalAddress,
    #[serde(rename = "openingHoursSpecification")]
    pub opening_hours: Vec<OpeningHoursSpecification>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "streetAddress")]
    pub street_address: String,
    #[serde(rename = "addressLocality")]
    pub address_locality: String,
    #[serde(rename = "addressRegion")]
    pub address_region: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    #[serde(rename = "addressCountry")]
    pub address_country: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OpeningHoursSpecification {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: &'static str,
    pub opens: String,
    pub closes: String,
}
