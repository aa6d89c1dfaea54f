//! Regulatory parameter loader from TOML
//!
//! ```toml
//! target_intensity = 89.3368
//! mj_per_ton = 41000.0
//! compliance_ceiling = 89.3368
//! ```
//!
//! Missing keys fall back to the built-in constants.

use std::fs;
use std::path::Path;

use fueleu_domain::RegulatoryParams;
use fueleu_types::{ConfigError, Error, Result};

pub fn load_regulatory_params(path: &Path) -> Result<RegulatoryParams> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read regulation file {}: {}",
            path.display(),
            e
        )))
    })?;
    parse_regulatory_params(&content)
}

pub fn parse_regulatory_params(toml_content: &str) -> Result<RegulatoryParams> {
    let params: RegulatoryParams = toml::from_str(toml_content)?;
    Ok(params)
}
