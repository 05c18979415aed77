//! Markup generation — turns a `BusinessRecord` into a paste-ready JSON-LD block.
//!
//! Flow: build_document → to_json → wrap_script.
//!
//! Generation never fails for a well-formed record. Values are not checked for
//! semantic validity: a malformed phone or URL is emitted exactly as given.

use tracing::debug;

use crate::models::business::{Address, BusinessRecord};
use crate::schema::document::{
    LocalBusinessDocument, OpeningHoursSpecification, PostalAddress, ADDRESS_COUNTRY,
    SCHEMA_CONTEXT,
};

const SCRIPT_OPEN: &str = r#"<script type="application/ld+json">"#;
const SCRIPT_CLOSE: &str = "</script>";

/// Builds the JSON-LD object graph for a business record.
///
/// Keys whose source value is absent are never set: `email` stays `None` when
/// blank, and days without hours produce no opening-hours entry.
pub fn build_document(record: &BusinessRecord) -> LocalBusinessDocument {
    let mut document = LocalBusinessDocument {
        context: SCHEMA_CONTEXT,
        schema_type: record.service_type.schema_type(),
        name: record.name.clone(),
        telephone: record.phone.clone(),
        url: record.url.clone(),
        email: None,
        address: build_address(&record.address),
        opening_hours: Vec::with_capacity(record.hours.len()),
    };

    if let Some(email) = record.email.as_deref() {
        if !email.trim().is_empty() {
            document.email = Some(email.to_string());
        }
    }

    // BTreeMap iteration follows Weekday's Monday-first ordering.
    for (day, hours) in &record.hours {
        document.opening_hours.push(OpeningHoursSpecification {
            schema_type: "OpeningHoursSpecification",
            day_of_week: day.name(),
            opens: hours.open.clone(),
            closes: hours.close.clone(),
        });
    }

    document
}

fn build_address(address: &Address) -> PostalAddress {
    PostalAddress {
        schema_type: "PostalAddress",
        street_address: address.street.clone(),
        address_locality: address.city.clone(),
        address_region: address.state.trim().to_uppercase(),
        postal_code: address.zip.clone(),
        address_country: ADDRESS_COUNTRY,
    }
}

/// Serializes the document as pretty-printed JSON safe to embed in a `<script>` element.
///
/// Every `<` is written as `\u003c`, so no value can open a comment or close the
/// surrounding element. `<` only occurs inside JSON strings, where both spellings
/// decode to the same text.
pub fn to_json(document: &LocalBusinessDocument) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(document)?;
    Ok(json.replace('<', r"\u003c"))
}

/// Wraps serialized JSON-LD in the script container recognized by page parsers.
pub fn wrap_script(json: &str) -> String {
    format!("{SCRIPT_OPEN}\n{json}\n{SCRIPT_CLOSE}")
}

/// Output of one generation: the object graph and its script block.
#[derive(Debug, Clone)]
pub struct GeneratedMarkup {
    pub document: LocalBusinessDocument,
    /// Paste-ready `<script type="application/ld+json">` block.
    pub html: String,
}

/// Generates the complete `<script type="application/ld+json">` block for a record.
pub fn generate(record: &BusinessRecord) -> Result<GeneratedMarkup, serde_json::Error> {
    let document = build_document(record);
    debug!(
        "Building {} schema with {} opening-hours entries",
        document.schema_type,
        document.opening_hours.len()
    );
    let html = wrap_script(&to_json(&document)?);
    Ok(GeneratedMarkup { document, html })
}
