//! Receipt rendering for tuneform.
//!
//! Produces the fixed-width plain-text receipt for a form record, in two
//! variants. Rendering is deterministic given the record, the variant, and
//! the shop identity; prices pass through as opaque text.

use crate::config::ShopConfig;
use crate::order::{FormRecord, Variant};

/// Width of the separator rules.
const RULE_WIDTH: usize = 51;

/// Placeholder rendered for a signature line and for a missing technician.
const SIGNATURE_BLANK: &str = "______________________";

/// The fixed terms-and-conditions block printed on every receipt.
const TERMS: [&str; 5] = [
    "1. Payment must be settled in full upon service completion.",
    "2. Blakkbox Tuning not liable for pre-existing defects.",
    "3. Warranty applies only to tuning performed.",
    "4. Client acknowledges risks of performance mods.",
    "5. This form serves as proof of agreement.",
];

/// Render one receipt variant for a record.
///
/// The client copy's form number carries the date suffix
/// (`form_base/client_suffix`); the shop copy uses `form_base` alone.
#[must_use]
pub fn render(record: &FormRecord, variant: Variant, shop: &ShopConfig) -> String {
    let separator = "=".repeat(RULE_WIDTH);
    let dash = "-".repeat(RULE_WIDTH);

    let title = match variant {
        Variant::Client => "CLIENT DATA FORM - CLIENT COPY",
        Variant::Shop => "CLIENT DATA FORM - SHOP COPY",
    };
    let form_number = match variant {
        Variant::Client => format!("{}/{}", record.form_base, record.client_suffix),
        Variant::Shop => record.form_base.clone(),
    };
    let technician = if record.technician.is_empty() {
        SIGNATURE_BLANK
    } else {
        record.technician.as_str()
    };

    let mut lines: Vec<String> = Vec::with_capacity(32);
    lines.push(separator.clone());
    lines.push(shop.brand.clone());
    lines.push(shop.address.clone());
    lines.push(shop.phone.clone());
    lines.push(separator.clone());
    lines.push(title.to_string());
    lines.push(separator.clone());
    lines.push(format!("Form Number : {form_number}"));
    lines.push(format!("Date : {}", record.date_iso));
    lines.push(format!("Time : {}", record.time));
    lines.push(dash.clone());
    lines.push(format!("Name : {}", record.name));
    lines.push(format!("Address : {}", record.address));
    lines.push(format!("Contact : {}", record.contact));
    lines.push(format!("Plate # : {}", record.plate));
    lines.push(format!("Car : {}", record.car));
    lines.push(format!("Make : {}", record.make));
    lines.push(format!("Model : {}", record.model));
    lines.push(format!("Transmission: {}", record.transmission));
    lines.push(format!("SW ID : {}", record.sw_id));
    lines.push(format!("HW ID : {}", record.hw_id));
    lines.push(format!("Service : {}", record.service));
    lines.push(format!("Total Price : {}", record.total_price));
    lines.push(dash);
    lines.push(format!("Client Signature: {SIGNATURE_BLANK}"));
    lines.push(format!("Technician : {technician}"));
    lines.push(String::new());
    lines.push("Terms".to_string());
    lines.push(String::new());
    lines.extend(TERMS.iter().map(|t| (*t).to_string()));
    lines.push(separator);

    lines.join("\n")
}
