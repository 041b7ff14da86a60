/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date of an observing night (UT).
pub type ObsDate = chrono::NaiveDate;

/// Wire format of an observation date.
pub const OBS_DATE_FORMAT: &str = "%Y-%m-%d";
