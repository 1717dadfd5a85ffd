use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::UnknownVariant;
use super::time::{format_time_range, split_time_range, DEFAULT_END_TIME, DEFAULT_START_TIME};
use crate::db::{to_document, Document, StoreError};
use crate::validation::{ValidationError, Validator};

/// Canonical weekday used to partition the weekly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Every weekday, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Canonical English labels, in the same order as [`Weekday::ALL`].
    pub const NAMES: &'static [&'static str] = &[
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    pub fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Translation key of the full day name, e.g. `schedule.day.monday`.
    pub fn translation_key(self) -> &'static str {
        match self {
            Weekday::Monday => "schedule.day.monday",
            Weekday::Tuesday => "schedule.day.tuesday",
            Weekday::Wednesday => "schedule.day.wednesday",
            Weekday::Thursday => "schedule.day.thursday",
            Weekday::Friday => "schedule.day.friday",
            Weekday::Saturday => "schedule.day.saturday",
            Weekday::Sunday => "schedule.day.sunday",
        }
    }

    /// Translation key of the short day name used by the day picker.
    pub fn abbreviation_key(self) -> &'static str {
        match self {
            Weekday::Monday => "schedule.day.monday_abbr",
            Weekday::Tuesday => "schedule.day.tuesday_abbr",
            Weekday::Wednesday => "schedule.day.wednesday_abbr",
            Weekday::Thursday => "schedule.day.thursday_abbr",
            Weekday::Friday => "schedule.day.friday_abbr",
            Weekday::Saturday => "schedule.day.saturday_abbr",
            Weekday::Sunday => "schedule.day.sunday_abbr",
        }
    }
}

impl FromStr for Weekday {
    type Err = UnknownVariant;

    /// Case-sensitive: only the canonical labels parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .position(|name| *name == s)
            .map(|idx| Self::ALL[idx])
            .ok_or_else(|| UnknownVariant::new("weekday", s))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of class an appointment represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentType {
    Lecture,
    Seminar,
    Lab,
}

impl AppointmentType {
    pub const NAMES: &'static [&'static str] = &["Lecture", "Seminar", "Lab"];

    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentType::Lecture => "Lecture",
            AppointmentType::Seminar => "Seminar",
            AppointmentType::Lab => "Lab",
        }
    }

    pub fn translation_key(self) -> &'static str {
        match self {
            AppointmentType::Lecture => "schedule.type.lecture",
            AppointmentType::Seminar => "schedule.type.seminar",
            AppointmentType::Lab => "schedule.type.lab",
        }
    }
}

impl FromStr for AppointmentType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Lecture" => Ok(AppointmentType::Lecture),
            "Seminar" => Ok(AppointmentType::Seminar),
            "Lab" => Ok(AppointmentType::Lab),
            _ => Err(UnknownVariant::new("appointment type", s)),
        }
    }
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled class occurrence, as returned by the read path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub day: Weekday,
    /// Always `start_time + " - " + end_time`
    pub time_range: String,
    pub course: String,
    pub professor: String,
    pub room: String,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    pub start_time: String,
    pub end_time: String,
}

impl Appointment {
    /// Builds the record for a validated form stored under `id`.
    pub fn from_fields(id: impl Into<String>, fields: AppointmentFields) -> Self {
        Self {
            id: id.into(),
            day: fields.day,
            time_range: fields.time_range(),
            course: fields.course,
            professor: fields.professor,
            room: fields.room,
            kind: fields.kind,
            start_time: fields.start_time,
            end_time: fields.end_time,
        }
    }
}

/// Raw appointment input as submitted by the add/edit dialog.
///
/// Every field is a plain string so that bad input reaches validation
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentForm {
    pub course: String,
    pub professor: String,
    pub room: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for AppointmentForm {
    /// Values a blank "add appointment" dialog starts with.
    fn default() -> Self {
        Self {
            course: String::new(),
            professor: String::new(),
            room: String::new(),
            day: Weekday::Monday.as_str().to_string(),
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            kind: AppointmentType::Lecture.as_str().to_string(),
        }
    }
}

impl AppointmentForm {
    /// Prefills an edit form from an existing record.
    ///
    /// Start and end come from the record's time range; a range without the
    /// separator keeps the record's own start/end fields.
    pub fn from_appointment(appointment: &Appointment) -> Self {
        let (start, end) = split_time_range(&appointment.time_range)
            .unwrap_or((appointment.start_time.as_str(), appointment.end_time.as_str()));

        Self {
            course: appointment.course.clone(),
            professor: appointment.professor.clone(),
            room: appointment.room.clone(),
            day: appointment.day.as_str().to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            kind: appointment.kind.as_str().to_string(),
        }
    }

    /// Checks every field and reports all failures together.
    pub fn validate(&self) -> Result<AppointmentFields, ValidationError> {
        let mut v = Validator::new();
        v.min_len("course", &self.course, 2, "zod.course.min")
            .min_len("professor", &self.professor, 2, "zod.professor.min")
            .min_len("room", &self.room, 1, "zod.room.min")
            .time_of_day("startTime", &self.start_time, "zod.time.invalid")
            .time_of_day("endTime", &self.end_time, "zod.time.invalid");

        let day = v.one_of::<Weekday>("day", &self.day, Weekday::NAMES, "zod.day.invalid");
        let kind = v.one_of::<AppointmentType>(
            "type",
            &self.kind,
            AppointmentType::NAMES,
            "zod.type.invalid",
        );

        let (Some(day), Some(kind)) = (day, kind) else {
            return Err(v.into_error());
        };
        v.finish()?;

        Ok(AppointmentFields {
            day,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            course: self.course.clone(),
            professor: self.professor.clone(),
            room: self.room.clone(),
            kind,
        })
    }
}

/// Appointment fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentFields {
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub course: String,
    pub professor: String,
    pub room: String,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
}

impl AppointmentFields {
    pub fn time_range(&self) -> String {
        format_time_range(&self.start_time, &self.end_time)
    }

    /// Stored form of the fields, including the derived `timeRange`.
    pub fn to_document(&self) -> Result<Document, StoreError> {
        let mut doc = to_document(self)?;
        doc.insert("timeRange".to_string(), self.time_range().into());
        Ok(doc)
    }
}
