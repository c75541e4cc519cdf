//! Dataset Record Types
//! Typed daily/hourly rental records and categorical label mapping.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Unknown season code: {0}")]
    UnknownSeason(i64),
    #[error("Unknown weather code: {0}")]
    UnknownWeather(i64),
    #[error("Hour out of range (0-23): {0}")]
    HourOutOfRange(i64),
    #[error("Negative rental count: {0}")]
    NegativeCount(i64),
}

/// Season derived from the dataset's 1-4 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// All seasons in dataset code order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn from_code(code: i64) -> Result<Self, RecordError> {
        match code {
            1 => Ok(Season::Spring),
            2 => Ok(Season::Summer),
            3 => Ok(Season::Fall),
            4 => Ok(Season::Winter),
            other => Err(RecordError::UnknownSeason(other)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

/// Weather condition derived from the dataset's 1-4 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weather {
    Clear,
    Cloudy,
    LightRain,
    Thunderstorm,
}

impl Weather {
    /// All weather conditions in dataset code order.
    pub const ALL: [Weather; 4] = [
        Weather::Clear,
        Weather::Cloudy,
        Weather::LightRain,
        Weather::Thunderstorm,
    ];

    pub fn from_code(code: i64) -> Result<Self, RecordError> {
        match code {
            1 => Ok(Weather::Clear),
            2 => Ok(Weather::Cloudy),
            3 => Ok(Weather::LightRain),
            4 => Ok(Weather::Thunderstorm),
            other => Err(RecordError::UnknownWeather(other)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Weather::Clear => "Clear",
            Weather::Cloudy => "Cloudy",
            Weather::LightRain => "Light Rain",
            Weather::Thunderstorm => "Thunderstorm",
        }
    }
}

/// Time-of-day bucket derived from hour-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Daypart {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Daypart {
    /// Display order for the daypart chart.
    pub const ALL: [Daypart; 4] = [
        Daypart::Morning,
        Daypart::Afternoon,
        Daypart::Evening,
        Daypart::Night,
    ];

    /// Bucket an hour (0-23) into its daypart.
    ///
    /// Boundaries: Morning [5,12), Afternoon [12,17), Evening [17,21),
    /// Night covers the rest of the day.
    pub fn from_hour(hour: u8) -> Self {
        match hour {
            5..=11 => Daypart::Morning,
            12..=16 => Daypart::Afternoon,
            17..=20 => Daypart::Evening,
            _ => Daypart::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Daypart::Morning => "Morning",
            Daypart::Afternoon => "Afternoon",
            Daypart::Evening => "Evening",
            Daypart::Night => "Night",
        }
    }
}

/// One row of the daily rentals dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub season: Season,
    pub weather: Weather,
    pub working_day: bool,
    pub cnt: u32,
}

impl DayRecord {
    pub fn new(
        date: NaiveDate,
        season_code: i64,
        weather_code: i64,
        working_day: bool,
        cnt: i64,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            date,
            season: Season::from_code(season_code)?,
            weather: Weather::from_code(weather_code)?,
            working_day,
            cnt: u32::try_from(cnt).map_err(|_| RecordError::NegativeCount(cnt))?,
        })
    }
}

/// One row of the hourly rentals dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRecord {
    pub date: NaiveDate,
    pub hour: u8,
    pub season: Season,
    pub weather: Weather,
    pub working_day: bool,
    pub cnt: u32,
}

impl HourRecord {
    pub fn new(
        date: NaiveDate,
        hour: i64,
        season_code: i64,
        weather_code: i64,
        working_day: bool,
        cnt: i64,
    ) -> Result<Self, RecordError> {
        if !(0..=23).contains(&hour) {
            return Err(RecordError::HourOutOfRange(hour));
        }
        Ok(Self {
            date,
            hour: hour as u8,
            season: Season::from_code(season_code)?,
            weather: Weather::from_code(weather_code)?,
            working_day,
            cnt: u32::try_from(cnt).map_err(|_| RecordError::NegativeCount(cnt))?,
        })
    }

    /// Daypart bucket for this row.
    pub fn daypart(&self) -> Daypart {
        Daypart::from_hour(self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_code_mapping() {
        assert_eq!(Season::from_code(1).unwrap(), Season::Spring);
        assert_eq!(Season::from_code(4).unwrap(), Season::Winter);
        assert!(Season::from_code(0).is_err());
        assert!(Season::from_code(5).is_err());
    }

    #[test]
    fn test_weather_code_mapping() {
        assert_eq!(Weather::from_code(1).unwrap(), Weather::Clear);
        assert_eq!(Weather::from_code(3).unwrap(), Weather::LightRain);
        assert_eq!(Weather::from_code(3).unwrap().label(), "Light Rain");
        assert!(Weather::from_code(9).is_err());
    }

    #[test]
    fn test_daypart_is_total_over_all_hours() {
        for hour in 0u8..24 {
            let daypart = Daypart::from_hour(hour);
            let expected = match hour {
                5..=11 => Daypart::Morning,
                12..=16 => Daypart::Afternoon,
                17..=20 => Daypart::Evening,
                _ => Daypart::Night,
            };
            assert_eq!(daypart, expected, "hour {}", hour);
        }
    }

    #[test]
    fn test_daypart_boundaries() {
        assert_eq!(Daypart::from_hour(4), Daypart::Night);
        assert_eq!(Daypart::from_hour(5), Daypart::Morning);
        assert_eq!(Daypart::from_hour(11), Daypart::Morning);
        assert_eq!(Daypart::from_hour(12), Daypart::Afternoon);
        assert_eq!(Daypart::from_hour(16), Daypart::Afternoon);
        assert_eq!(Daypart::from_hour(17), Daypart::Evening);
        assert_eq!(Daypart::from_hour(20), Daypart::Evening);
        assert_eq!(Daypart::from_hour(21), Daypart::Night);
        assert_eq!(Daypart::from_hour(0), Daypart::Night);
    }

    #[test]
    fn test_hour_record_validation() {
        let date = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();

        let valid = HourRecord::new(date, 8, 1, 1, true, 42).unwrap();
        assert_eq!(valid.daypart(), Daypart::Morning);

        assert_eq!(
            HourRecord::new(date, 24, 1, 1, true, 42),
            Err(RecordError::HourOutOfRange(24))
        );
        assert_eq!(
            HourRecord::new(date, 8, 1, 1, true, -1),
            Err(RecordError::NegativeCount(-1))
        );
    }
}
