//! Data module - CSV loading, typed records, date filtering

mod filter;
mod loader;
mod model;

pub use filter::{date_bounds, filter_days, filter_hours, resolve_range, DateRange};
pub use loader::{DataLoader, LoadedData, LoaderError};
pub use model::{DayRecord, Daypart, HourRecord, RecordError, Season, Weather};
