//! CSV Data Loader Module
//! Loads the daily/hourly rental CSVs with Polars and extracts typed records.

use crate::data::model::{DayRecord, HourRecord, RecordError};
use chrono::NaiveDate;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Columns required from the daily dataset. Companion columns are ignored.
const DAY_COLUMNS: [&str; 5] = ["dteday", "season", "weathersit", "workingday", "cnt"];
/// Columns required from the hourly dataset.
const HOUR_COLUMNS: [&str; 6] = ["dteday", "hr", "season", "weathersit", "workingday", "cnt"];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing column '{0}'")]
    MissingColumn(String),
    #[error("Unparsable date '{value}' in row {row}")]
    BadDate { value: String, row: usize },
    #[error("Missing value in column '{column}', row {row}")]
    MissingValue { column: String, row: usize },
    #[error("Invalid record in row {row}: {source}")]
    BadRecord { row: usize, source: RecordError },
    #[error("Dataset '{0}' contains no rows")]
    EmptyDataset(String),
}

/// Both datasets extracted into typed records.
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    pub days: Vec<DayRecord>,
    pub hours: Vec<HourRecord>,
}

/// Handles CSV file loading with Polars and typed row extraction.
pub struct DataLoader {
    day_path: PathBuf,
    hour_path: PathBuf,
}

impl DataLoader {
    pub fn new(day_path: PathBuf, hour_path: PathBuf) -> Self {
        Self {
            day_path,
            hour_path,
        }
    }

    /// Load both datasets from disk.
    pub fn load(&self) -> Result<LoadedData, LoaderError> {
        let day_df = Self::read_csv(&self.day_path)?;
        let hour_df = Self::read_csv(&self.hour_path)?;

        let days = Self::day_records(&day_df)?;
        if days.is_empty() {
            return Err(LoaderError::EmptyDataset(
                self.day_path.display().to_string(),
            ));
        }

        let hours = Self::hour_records(&hour_df)?;
        if hours.is_empty() {
            return Err(LoaderError::EmptyDataset(
                self.hour_path.display().to_string(),
            ));
        }

        info!(
            daily_rows = days.len(),
            hourly_rows = hours.len(),
            "datasets loaded"
        );

        Ok(LoadedData { days, hours })
    }

    /// Load a CSV file using Polars.
    fn read_csv(path: &Path) -> Result<DataFrame, LoaderError> {
        // Use lazy evaluation for memory efficiency, then collect
        let df = LazyCsvReader::new(path.to_string_lossy().as_ref())
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;
        Ok(df)
    }

    /// Extract typed daily records from a DataFrame.
    pub fn day_records(df: &DataFrame) -> Result<Vec<DayRecord>, LoaderError> {
        for name in DAY_COLUMNS {
            if df.column(name).is_err() {
                return Err(LoaderError::MissingColumn(name.to_string()));
            }
        }

        let dates = Self::date_column(df, "dteday")?;
        let seasons = Self::int_column(df, "season")?;
        let weathers = Self::int_column(df, "weathersit")?;
        let workingdays = Self::int_column(df, "workingday")?;
        let counts = Self::int_column(df, "cnt")?;

        let mut records = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let record = DayRecord::new(
                dates[row],
                Self::cell(&seasons, "season", row)?,
                Self::cell(&weathers, "weathersit", row)?,
                Self::cell(&workingdays, "workingday", row)? != 0,
                Self::cell(&counts, "cnt", row)?,
            )
            .map_err(|source| LoaderError::BadRecord { row, source })?;
            records.push(record);
        }

        Ok(records)
    }

    /// Extract typed hourly records from a DataFrame.
    pub fn hour_records(df: &DataFrame) -> Result<Vec<HourRecord>, LoaderError> {
        for name in HOUR_COLUMNS {
            if df.column(name).is_err() {
                return Err(LoaderError::MissingColumn(name.to_string()));
            }
        }

        let dates = Self::date_column(df, "dteday")?;
        let hours = Self::int_column(df, "hr")?;
        let seasons = Self::int_column(df, "season")?;
        let weathers = Self::int_column(df, "weathersit")?;
        let workingdays = Self::int_column(df, "workingday")?;
        let counts = Self::int_column(df, "cnt")?;

        let mut records = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let record = HourRecord::new(
                dates[row],
                Self::cell(&hours, "hr", row)?,
                Self::cell(&seasons, "season", row)?,
                Self::cell(&weathers, "weathersit", row)?,
                Self::cell(&workingdays, "workingday", row)? != 0,
                Self::cell(&counts, "cnt", row)?,
            )
            .map_err(|source| LoaderError::BadRecord { row, source })?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parse a column of `YYYY-MM-DD` values into dates.
    ///
    /// Casting through String also covers files where Polars inferred the
    /// column as a native date type.
    fn date_column(df: &DataFrame, name: &str) -> Result<Vec<NaiveDate>, LoaderError> {
        let column = df
            .column(name)
            .map_err(|_| LoaderError::MissingColumn(name.to_string()))?;
        let strings = column.cast(&DataType::String)?;
        let ca = strings.str()?;

        let mut dates = Vec::with_capacity(ca.len());
        for row in 0..ca.len() {
            let raw = ca.get(row).ok_or_else(|| LoaderError::MissingValue {
                column: name.to_string(),
                row,
            })?;
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                LoaderError::BadDate {
                    value: raw.to_string(),
                    row,
                }
            })?;
            dates.push(date);
        }
        Ok(dates)
    }

    /// Cast an integer-coded column to i64 values.
    fn int_column(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>, LoaderError> {
        let column = df
            .column(name)
            .map_err(|_| LoaderError::MissingColumn(name.to_string()))?;
        let casted = column.cast(&DataType::Int64)?;
        let ca = casted.i64()?;
        Ok(ca.into_iter().collect())
    }

    fn cell(values: &[Option<i64>], column: &str, row: usize) -> Result<i64, LoaderError> {
        values[row].ok_or_else(|| LoaderError::MissingValue {
            column: column.to_string(),
            row,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Season, Weather};

    fn day_frame() -> DataFrame {
        df!(
            "dteday" => &["2011-01-01", "2011-01-02"],
            "season" => &[1i64, 2],
            "weathersit" => &[2i64, 1],
            "workingday" => &[0i64, 1],
            "cnt" => &[985i64, 801],
            "casual" => &[331i64, 131],
        )
        .unwrap()
    }

    #[test]
    fn test_day_record_extraction() {
        let records = DataLoader::day_records(&day_frame()).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(first.season, Season::Spring);
        assert_eq!(first.weather, Weather::Cloudy);
        assert!(!first.working_day);
        assert_eq!(first.cnt, 985);

        assert!(records[1].working_day);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let df = df!(
            "dteday" => &["2011-01-01"],
            "season" => &[1i64],
        )
        .unwrap();

        let err = DataLoader::day_records(&df).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(name) if name == "weathersit"));
    }

    #[test]
    fn test_bad_date_is_reported() {
        let df = df!(
            "dteday" => &["2011-01-01", "01/02/2011"],
            "season" => &[1i64, 1],
            "weathersit" => &[1i64, 1],
            "workingday" => &[1i64, 1],
            "cnt" => &[10i64, 20],
        )
        .unwrap();

        let err = DataLoader::day_records(&df).unwrap_err();
        assert!(matches!(err, LoaderError::BadDate { row: 1, .. }));
    }

    #[test]
    fn test_hour_record_extraction() {
        let df = df!(
            "dteday" => &["2011-01-01"],
            "hr" => &[7i64],
            "season" => &[1i64],
            "weathersit" => &[1i64],
            "workingday" => &[1i64],
            "cnt" => &[36i64],
        )
        .unwrap();

        let records = DataLoader::hour_records(&df).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hour, 7);
        assert_eq!(records[0].cnt, 36);
    }

    #[test]
    fn test_bad_code_is_reported_with_row() {
        let df = df!(
            "dteday" => &["2011-01-01"],
            "hr" => &[3i64],
            "season" => &[7i64],
            "weathersit" => &[1i64],
            "workingday" => &[1i64],
            "cnt" => &[5i64],
        )
        .unwrap();

        let err = DataLoader::hour_records(&df).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::BadRecord {
                row: 0,
                source: RecordError::UnknownSeason(7)
            }
        ));
    }
}
