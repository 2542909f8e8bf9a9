//! Configuration management for tuneform.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults. The
//! prompt fallback values live here rather than in the collection logic so a
//! shop can re-brand the tool without touching code.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::order::Field;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "tuneform";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "forms.db";

/// Default receipt export directory name.
const RECEIPT_DIR_NAME: &str = "receipts";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `TUNEFORM_`)
/// 2. TOML config file at `~/.config/tuneform/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shop identity printed on every receipt.
    pub shop: ShopConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Receipt export configuration.
    pub export: ExportConfig,
    /// Fallback values offered at each prompt when no prior record supplies one.
    pub prompts: PromptDefaults,
}

/// Shop identity rendered in the receipt header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Brand name.
    pub brand: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    /// Defaults to `~/.local/share/tuneform/forms.db`
    pub database_path: Option<PathBuf>,
}

/// Receipt export configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory receipt files are written into.
    /// Defaults to `~/.local/share/tuneform/receipts`
    pub receipt_dir: Option<PathBuf>,
}

/// Fallback default shown at each prompt when the previous record has no
/// usable value for the field.
///
/// `technician` defaults to empty: it is the one field where an accepted
/// empty answer is preserved rather than replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptDefaults {
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
    /// Total price.
    pub total_price: String,
    /// Technician name.
    pub technician: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            brand: "BLAKKBOX TUNING".to_string(),
            address: "Poblacion, Tuba, Benguet".to_string(),
            phone: "+639386350507".to_string(),
        }
    }
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            name: "NAPOLEON TYRONE CAEL".to_string(),
            address: "KM3 L.T.B.".to_string(),
            contact: "09070457154".to_string(),
            plate: "UID277".to_string(),
            car: "HILUX".to_string(),
            make: "TOYOTA".to_string(),
            model: "2012".to_string(),
            transmission: "M/T".to_string(),
            sw_id: "89663-0KN51".to_string(),
            hw_id: "89661".to_string(),
            service: "STANDARD TUNNING".to_string(),
            total_price: "₱10.000".to_string(),
            technician: String::new(),
        }
    }
}

impl PromptDefaults {
    /// The fallback value for a field.
    #[must_use]
    pub fn fallback(&self, field: Field) -> &str {
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
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `TUNEFORM_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("TUNEFORM_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        // Receipts would lose their header identity without a brand
        if self.shop.brand.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "shop.brand must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }

    /// Get the receipt export directory, resolving defaults if not set.
    #[must_use]
    pub fn receipt_dir(&self) -> PathBuf {
        self.export
            .receipt_dir
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(RECEIPT_DIR_NAME))
    }
}
