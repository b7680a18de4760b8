//! Load batches of submissions from CSV
//!
//! Expected header: `id,capital,monthly,years,rate`

use super::data::{ScenarioInput, Submission};
use super::error::LoadError;
use csv::Reader;
use log::info;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Raw CSV row; blank `monthly` and `rate` cells count as 0, like blank form fields
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    capital: f64,
    #[serde(default, deserialize_with = "blank_as_zero")]
    monthly: f64,
    years: u32,
    #[serde(default, deserialize_with = "blank_as_zero")]
    rate: f64,
}

fn blank_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value: Option<f64> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or(0.0))
}

impl CsvRow {
    fn to_submission(self) -> Result<Submission, LoadError> {
        let input = ScenarioInput::new(self.capital, self.monthly, self.years, self.rate);
        input.validate().map_err(|source| LoadError::InvalidRow {
            id: self.id.clone(),
            source,
        })?;
        Ok(Submission { id: self.id, input })
    }
}

/// Load all submissions from a CSV file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<Submission>, LoadError> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)?;
    let submissions = collect_rows(reader)?;
    info!("loaded {} submissions from {}", submissions.len(), path.display());
    Ok(submissions)
}

/// Load submissions from any reader (e.g., string buffer, stdin)
pub fn load_inputs_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Submission>, LoadError> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Submission>, LoadError> {
    let mut submissions = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        submissions.push(row.to_submission()?);
    }
    Ok(submissions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputError;

    #[test]
    fn test_load_from_reader() {
        let data = "id,capital,monthly,years,rate\n\
                    alice,10000,200,20,6\n\
                    bob,5000,0,5,3.5\n";
        let submissions = load_inputs_from_reader(data.as_bytes()).unwrap();

        assert_eq!(submissions.len(), 2);
        assert_eq!(submissions[0].id, "alice");
        assert_eq!(submissions[0].input, ScenarioInput::new(10_000.0, 200.0, 20, 6.0));
        assert_eq!(submissions[1].input.annual_rate_percent, 3.5);
    }

    #[test]
    fn test_blank_cells_default_to_zero() {
        let data = "id,capital,monthly,years,rate\nx,1000,,10,\n";
        let submissions = load_inputs_from_reader(data.as_bytes()).unwrap();
        assert_eq!(submissions[0].input, ScenarioInput::new(1000.0, 0.0, 10, 0.0));
    }

    #[test]
    fn test_missing_columns_default_to_zero() {
        let data = "id,capital,years\ny,500,3\n";
        let submissions = load_inputs_from_reader(data.as_bytes()).unwrap();
        assert_eq!(submissions[0].input, ScenarioInput::new(500.0, 0.0, 3, 0.0));
    }

    #[test]
    fn test_rejects_oversized_duration_row() {
        let data = "id,capital,monthly,years,rate\nhuge,1000,0,4000000000,5\n";
        assert!(matches!(
            load_inputs_from_reader(data.as_bytes()),
            Err(LoadError::InvalidRow { source: InputError::DurationTooLong { .. }, .. })
        ));
    }

    #[test]
    fn test_rejects_guarded_row() {
        let data = "id,capital,monthly,years,rate\nempty,0,100,10,5\n";
        match load_inputs_from_reader(data.as_bytes()) {
            Err(LoadError::InvalidRow { id, source }) => {
                assert_eq!(id, "empty");
                assert_eq!(source, InputError::MissingCapital);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_malformed_row() {
        let data = "id,capital,monthly,years,rate\nx,lots,100,10,5\n";
        assert!(matches!(
            load_inputs_from_reader(data.as_bytes()),
            Err(LoadError::Csv(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(load_inputs("does/not/exist.csv").is_err());
    }
}
