//! JSON input loading

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use zoning_types::{BuildingRecord, ParcelContext, ZoningDistrict};

use crate::error::CliError;

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_json<T: DeserializeOwned>(text: &str, path: &Path) -> Result<T, CliError> {
    serde_json::from_str(text).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Building input may be a single object or a table of rows.
///
/// The shape is picked from the top-level JSON value first, so a bad field
/// is reported as such instead of as a failed shape match.
pub fn parse_buildings(text: &str, path: &Path) -> Result<Vec<BuildingRecord>, CliError> {
    let value: Value = parse_json(text, path)?;
    let rows = if value.is_array() {
        serde_json::from_value::<Vec<BuildingRecord>>(value)
    } else {
        serde_json::from_value::<BuildingRecord>(value).map(|building| vec![building])
    };

    rows.map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_buildings(path: &Path) -> Result<Vec<BuildingRecord>, CliError> {
    parse_buildings(&read(path)?, path)
}

pub fn load_districts(path: &Path) -> Result<Vec<ZoningDistrict>, CliError> {
    parse_json(&read(path)?, path)
}

pub fn load_parcel(path: &Path) -> Result<ParcelContext, CliError> {
    parse_json(&read(path)?, path)
}
