// Copyright 2026 Hypermesh Foundation. All rights reserved.
// pCAM Relocation Simulator - Parameter Import/Export

//! Headerless two-column `key,value` table, one parameter per row:
//!
//! ```text
//! blackMassVolume,25000
//! shareNMC,75
//! ...
//! ```
//!
//! Import is all-or-nothing: a table is parsed into a fresh
//! [`ScenarioParams`] and only returned once every key is present exactly
//! once, numeric, and inside its domain.

use std::io;
use std::path::Path;

use crate::types::{DomainViolation, ParamKey, ScenarioParams};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected 2 columns (key,value), found {found}")]
    ColumnCount { line: u64, found: usize },

    #[error("line {line}: unknown parameter {key:?}")]
    UnknownKey { line: u64, key: String },

    #[error("line {line}: {key} appears more than once")]
    DuplicateKey { line: u64, key: ParamKey },

    #[error("line {line}: {key} value {value:?} is not a number")]
    InvalidNumber { line: u64, key: ParamKey, value: String },

    #[error("missing parameter {0}")]
    MissingKey(ParamKey),

    #[error(transparent)]
    OutOfDomain(#[from] DomainViolation),
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

fn csv_reader<R: io::Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

pub fn from_reader<R: io::Read>(reader: R) -> Result<ScenarioParams, ImportError> {
    let mut slots: [Option<f64>; 7] = [None; 7];

    for record in csv_reader(reader).records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() != 2 {
            return Err(ImportError::ColumnCount { line, found: record.len() });
        }

        let key: ParamKey = record[0]
            .parse()
            .map_err(|_| ImportError::UnknownKey { line, key: record[0].to_string() })?;
        let value: f64 = record[1].parse().map_err(|_| ImportError::InvalidNumber {
            line,
            key,
            value: record[1].to_string(),
        })?;

        let slot = &mut slots[slot_index(key)];
        if slot.is_some() {
            return Err(ImportError::DuplicateKey { line, key });
        }
        *slot = Some(value);
    }

    let value_of = |key: ParamKey| slots[slot_index(key)].ok_or(ImportError::MissingKey(key));
    let params = ScenarioParams {
        black_mass_volume: value_of(ParamKey::BlackMassVolume)?,
        share_nmc: value_of(ParamKey::ShareNmc)?,
        yield_recovery: value_of(ParamKey::YieldRecovery)?,
        metal_prices: value_of(ParamKey::MetalPrices)?,
        energy_cost_eu: value_of(ParamKey::EnergyCostEu)?,
        logistics_cost: value_of(ParamKey::LogisticsCost)?,
        pcam_premium: value_of(ParamKey::PcamPremium)?,
    };
    params.validate()?;
    Ok(params)
}

pub fn parse_csv(text: &str) -> Result<ScenarioParams, ImportError> {
    from_reader(text.as_bytes())
}

pub fn read_csv_file(path: &Path) -> Result<ScenarioParams, ImportError> {
    let file = std::fs::File::open(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    from_reader(file)
}

fn slot_index(key: ParamKey) -> usize {
    ParamKey::ALL.iter().position(|k| *k == key).unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

pub fn write_csv<W: io::Write>(params: &ScenarioParams, writer: W) -> Result<W, csv::Error> {
    let mut out = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    for key in ParamKey::ALL {
        let value = params.get(key).to_string();
        out.write_record([key.name(), value.as_str()])?;
    }
    out.into_inner().map_err(|e| csv::Error::from(e.into_error()))
}

pub fn to_csv(params: &ScenarioParams) -> Result<String, csv::Error> {
    let bytes = write_csv(params, Vec::new())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn write_csv_file(params: &ScenarioParams, path: &Path) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_csv(params, file)?;
    Ok(())
}
