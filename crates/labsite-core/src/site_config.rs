//! Site identity configuration
//!
//! Lab name, lead contact, and university address used by the footer and
//! contact blocks. Loaded from TOML once at startup with [`init`] or
//! [`load_and_init`], then read anywhere with [`get`].
//!
//! ```toml
//! lab_name = "IoTrust Lab"
//!
//! [lead]
//! name = "Dr. Jane Doe"
//! title = "Associate Professor"
//! email = "jdoe@example.edu"
//!
//! [university]
//! name = "Example University"
//! department = "Computer Science"
//!
//! [university.address]
//! street = "1 Campus Drive"
//! city = "Springfield"
//! state = "IL"
//! zip = "62701"
//! ```

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use labsite_domain::{Address, University};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Lab lead contact shown in the footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadContact {
    pub name: String,
    pub title: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub lab_name: String,
    pub lead: LeadContact,
    pub university: University,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lab_name: "Research Lab".to_string(),
            lead: LeadContact {
                name: "Lab Director".to_string(),
                title: "Principal Investigator".to_string(),
                email: "lab@example.edu".to_string(),
            },
            university: University {
                name: "Example University".to_string(),
                department: "Department of Computer Science".to_string(),
                address: Address {
                    street: "1 University Avenue".to_string(),
                    city: "Springfield".to_string(),
                    state: "IL".to_string(),
                    zip: "62701".to_string(),
                },
            },
        }
    }
}

impl SiteConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lab_name.trim().is_empty() {
            return Err(ConfigError::Invalid("lab_name must not be empty".to_string()));
        }
        if !self.lead.email.contains('@') {
            return Err(ConfigError::Invalid(format!(
                "lead.email '{}' is not an email address",
                self.lead.email
            )));
        }
        Ok(())
    }

    /// Footer text, top to bottom
    pub fn footer_lines(&self, year: i32) -> Vec<String> {
        let university = &self.university;
        vec![
            self.lab_name.clone(),
            university.department.clone(),
            university.name.clone(),
            university.address.street.clone(),
            university.address.locality_line(),
            format!("{}, {}", self.lead.name, self.lead.title),
            self.lead.email.clone(),
            format!("© {} {}. All rights reserved.", year, self.lab_name),
        ]
    }
}

/// Install the process-wide config. Only the first call succeeds.
pub fn init(config: SiteConfig) -> Result<&'static SiteConfig, ConfigError> {
    config.validate()?;
    SITE_CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    let config = get()?;
    info!(lab = %config.lab_name, "Site config initialized");
    Ok(config)
}

pub fn load_and_init(path: &Path) -> Result<&'static SiteConfig, ConfigError> {
    init(SiteConfig::from_file(path)?)
}

pub fn get() -> Result<&'static SiteConfig, ConfigError> {
    SITE_CONFIG.get().ok_or(ConfigError::NotInitialized)
}
