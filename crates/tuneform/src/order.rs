//! Core order types for tuneform.
//!
//! This module defines the service-order record, the operator-supplied field
//! set, and the two receipt variants produced from a record.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Which of the two receipt renderings to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// The copy handed to the client. Its form number carries the date suffix.
    Client,
    /// The copy retained by the shop.
    Shop,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Client => write!(f, "client"),
            Self::Shop => write!(f, "shop"),
        }
    }
}

/// The operator-supplied fields, in prompt and receipt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Client name.
    Name,
    /// Client address.
    Address,
    /// Client contact number.
    Contact,
    /// Vehicle plate number.
    Plate,
    /// Vehicle nickname or body type.
    Car,
    /// Vehicle make.
    Make,
    /// Vehicle model year.
    Model,
    /// Transmission type.
    Transmission,
    /// ECU software identifier.
    SwId,
    /// ECU hardware identifier.
    HwId,
    /// Service performed.
    Service,
    /// Total price, stored and rendered as opaque text.
    TotalPrice,
    /// Technician name. The only field where an accepted empty value stays empty.
    Technician,
}

impl Field {
    /// All fields in the order they are prompted for and rendered.
    pub const ALL: [Self; 13] = [
        Self::Name,
        Self::Address,
        Self::Contact,
        Self::Plate,
        Self::Car,
        Self::Make,
        Self::Model,
        Self::Transmission,
        Self::SwId,
        Self::HwId,
        Self::Service,
        Self::TotalPrice,
        Self::Technician,
    ];

    /// The label shown when prompting the operator for this field.
    #[must_use]
    pub fn prompt_label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
            Self::Contact => "Contact",
            Self::Plate => "Plate #",
            Self::Car => "Car",
            Self::Make => "Make",
            Self::Model => "Model",
            Self::Transmission => "Transmission",
            Self::SwId => "SW ID",
            Self::HwId => "HW ID",
            Self::Service => "Service",
            Self::TotalPrice => "Total Price (₱)",
            Self::Technician => "Technician (optional)",
        }
    }

    /// The column/config key for this field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Contact => "contact",
            Self::Plate => "plate",
            Self::Car => "car",
            Self::Make => "make",
            Self::Model => "model",
            Self::Transmission => "transmission",
            Self::SwId => "sw_id",
            Self::HwId => "hw_id",
            Self::Service => "service",
            Self::TotalPrice => "total_price",
            Self::Technician => "technician",
        }
    }
}

/// Creation timestamps in the three formats receipts use.
///
/// Captured once when a form is started and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    /// Weekday and date, e.g. `Fri 10-03-2025`.
    pub date_iso: String,
    /// Time of day, e.g. `14:03:51`.
    pub time: String,
    /// Short date appended to the client copy's form number, e.g. `10-03-25`.
    pub client_suffix: String,
}

impl Stamp {
    /// Capture the current local time.
    #[must_use]
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            date_iso: now.format("%a %d-%m-%Y").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            client_suffix: now.format("%d-%m-%y").to_string(),
        }
    }
}

/// One completed service-order entry.
///
/// Records are immutable once created; there is no update or delete path.
/// The `id` is assigned by the storage layer on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    /// Unique identifier, assigned by the storage layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Shop-assigned sequence label, `NNN-A`.
    pub form_base: String,
    /// Date suffix appended only to the client copy's form number.
    pub client_suffix: String,
    /// Creation date, `%a %d-%m-%Y`.
    pub date_iso: String,
    /// Creation time, `%H:%M:%S`.
    pub time: String,
    /// Client name.
    pub name: String,
    /// Client address.
    pub address: String,
    /// Client contact number.
    pub contact: String,
    /// Vehicle plate number.
    pub plate: String,
    /// Vehicle nickname or body type.
    pub car: String,
    /// Vehicle make.
    pub make: String,
    /// Vehicle model year.
    pub model: String,
    /// Transmission type.
    pub transmission: String,
    /// ECU software identifier.
    pub sw_id: String,
    /// ECU hardware identifier.
    pub hw_id: String,
    /// Service performed.
    pub service: String,
    /// Total price, opaque text.
    pub total_price: String,
    /// Technician name, may be empty.
    pub technician: String,
}

impl FormRecord {
    /// Start a new record with its sequence label and timestamps set and all
    /// operator fields still empty.
    #[must_use]
    pub fn started(form_base: String, stamp: Stamp) -> Self {
        Self {
            id: None,
            form_base,
            client_suffix: stamp.client_suffix,
            date_iso: stamp.date_iso,
            time: stamp.time,
            ..Self::default()
        }
    }

    /// Get an operator-supplied field value.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::Contact => &self.contact,
            Field::Plate => &self.plate,
            Field::Car => &self.car,
            Field::Make => &self.make,
            Field::Model => &self.model,
            Field::Transmission => &self.transmission,
            Field::SwId => &self.sw_id,
            Field::HwId => &self.hw_id,
            Field::Service => &self.service,
            Field::TotalPrice => &self.total_price,
            Field::Technician => &self.technician,
        }
    }

    /// Set an operator-supplied field value.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Address => self.address = value,
            Field::Contact => self.contact = value,
            Field::Plate => self.plate = value,
            Field::Car => self.car = value,
            Field::Make => self.make = value,
            Field::Model => self.model = value,
            Field::Transmission => self.transmission = value,
            Field::SwId => self.sw_id = value,
            Field::HwId => self.hw_id = value,
            Field::Service => self.service = value,
            Field::TotalPrice => self.total_price = value,
            Field::Technician => self.technician = value,
        }
    }
}
