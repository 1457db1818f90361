use crate::adapters::auth::ServiceAccount;
use crate::core::{AppendAnchor, RosterOptions, ValueInputOption};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::Deserialize;
use std::env;
use std::path::Path;

fn default_sheet_name() -> String {
    "Sheet1".to_string()
}

fn default_header_rows() -> u32 {
    1
}

fn default_timeout_secs() -> u64 {
    10
}

/// Store settings, loadable from a TOML file or from the environment.
/// Sheet conventions (header rows, append anchor, input mode) live here
/// instead of being hardcoded.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub spreadsheet_id: String,

    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// Leading rows excluded from roster data. Shared by list and delete.
    #[serde(default = "default_header_rows")]
    pub header_rows: u32,

    #[serde(default)]
    pub append_anchor: AppendAnchor,

    #[serde(default)]
    pub input_option: ValueInputOption,

    /// Override for the Sheets API host, mainly for tests.
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Service account key file; the GOOGLE_CREDENTIALS_JSON inline blob
    /// takes precedence when both are present.
    #[serde(default)]
    pub credentials_file: Option<String>,
}

impl Settings {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let settings: Settings = toml::from_str(&raw)
            .map_err(|e| RosterError::config(format!("invalid settings file: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_env() -> Result<Self> {
        let spreadsheet_id = env::var("SPREADSHEET_ID")
            .map_err(|_| RosterError::config("SPREADSHEET_ID is not set"))?;

        let header_rows = match env::var("HEADER_ROWS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| RosterError::config(format!("invalid HEADER_ROWS: {raw}")))?,
            Err(_) => default_header_rows(),
        };

        let settings = Settings {
            spreadsheet_id,
            sheet_name: env::var("SHEET_NAME").unwrap_or_else(|_| default_sheet_name()),
            header_rows,
            append_anchor: AppendAnchor::default(),
            input_option: ValueInputOption::default(),
            base_url: env::var("SHEETS_BASE_URL").ok(),
            request_timeout_secs: default_timeout_secs(),
            credentials_file: env::var("GOOGLE_APPLICATION_CREDENTIALS").ok(),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Loads and parses the service account key. Called once at startup so a
    /// malformed credential fails the process fast instead of producing a
    /// client that errors on every request.
    pub fn load_service_account(&self) -> Result<ServiceAccount> {
        if let Ok(blob) = env::var("GOOGLE_CREDENTIALS_JSON") {
            return ServiceAccount::from_json(&blob);
        }
        if let Some(path) = &self.credentials_file {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                RosterError::config(format!("cannot read credentials file {path}: {e}"))
            })?;
            return ServiceAccount::from_json(&raw);
        }
        Err(RosterError::config(
            "no credentials: set GOOGLE_CREDENTIALS_JSON or GOOGLE_APPLICATION_CREDENTIALS",
        ))
    }

    pub fn roster_options(&self) -> RosterOptions {
        RosterOptions {
            sheet_name: self.sheet_name.clone(),
            header_rows: self.header_rows,
            append_anchor: self.append_anchor,
            input_option: self.input_option,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("spreadsheet_id", &self.spreadsheet_id)?;
        validate_non_empty_string("sheet_name", &self.sheet_name)?;
        if let Some(base_url) = &self.base_url {
            validate_url("base_url", base_url)?;
        }
        if self.request_timeout_secs == 0 {
            return Err(RosterError::config(
                "request_timeout_secs must be at least 1",
            ));
        }
        Ok(())
    }
}
