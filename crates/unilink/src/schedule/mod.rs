//! Weekly class schedule: appointment CRUD per user and the per-day views.
//!
//! Appointments live in the `users/<user>/appointments` collection. The read
//! path is permissive: stored records with an unknown day or type, or with
//! missing times, are coerced to defaults (and logged) rather than rejected.

mod error;
mod time;
mod types;

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde_json::Value;
use tracing::{info, warn};

use crate::db::{Document, DocumentStore};
use crate::types::UserId;

pub use error::{ScheduleError, UnknownVariant};
pub use time::{
    format_time_range, split_time_range, DEFAULT_END_TIME, DEFAULT_START_TIME,
    TIME_RANGE_SEPARATOR,
};
pub use types::{Appointment, AppointmentFields, AppointmentForm, AppointmentType, Weekday};

/// Appointment CRUD on top of a [`DocumentStore`].
///
/// Holds no cache; callers re-list to observe changes.
#[derive(Clone)]
pub struct ScheduleStore {
    store: Arc<dyn DocumentStore>,
}

impl ScheduleStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Returns every appointment of the user in storage order, normalized.
    pub fn list(&self, user: &UserId) -> Result<Vec<Appointment>, ScheduleError> {
        let docs = self.store.read_all(&user.appointments_collection())?;

        Ok(docs
            .into_iter()
            .map(|(id, doc)| normalize_appointment(id, &doc))
            .collect())
    }

    /// Validates the form and stores it as a new appointment.
    ///
    /// # Returns
    /// The generated appointment id.
    pub fn add(&self, user: &UserId, form: &AppointmentForm) -> Result<String, ScheduleError> {
        let fields = form.validate()?;
        let id = self
            .store
            .create(&user.appointments_collection(), fields.to_document()?)?;

        info!(
            user = %user,
            appointment_id = %id,
            day = %fields.day,
            "Added appointment"
        );
        Ok(id)
    }

    /// Validates the form and replaces every field of an existing appointment.
    ///
    /// Fails with [`ScheduleError::NotFound`] if `id` does not exist; nothing is
    /// written in that case.
    pub fn update(
        &self,
        user: &UserId,
        id: &str,
        form: &AppointmentForm,
    ) -> Result<Appointment, ScheduleError> {
        let fields = form.validate()?;
        self.store
            .update(&user.appointments_collection(), id, fields.to_document()?)?;

        info!(user = %user, appointment_id = %id, "Updated appointment");
        Ok(Appointment::from_fields(id, fields))
    }

    /// Deletes an appointment. Removing an unknown id succeeds.
    pub fn remove(&self, user: &UserId, id: &str) -> Result<(), ScheduleError> {
        self.store.delete(&user.appointments_collection(), id)?;

        info!(user = %user, appointment_id = %id, "Removed appointment");
        Ok(())
    }
}

/// Appointments on `day`, ordered by time range.
///
/// The sort is stable and compares the `"HH:MM - HH:MM"` strings, which is
/// chronological only because every stored time is zero padded.
pub fn view_for_day(appointments: &[Appointment], day: Weekday) -> Vec<Appointment> {
    let mut view: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.day == day)
        .cloned()
        .collect();
    view.sort_by(|a, b| a.time_range.cmp(&b.time_range));
    view
}

/// Appointments on the weekday `date` falls on.
pub fn view_for_date(appointments: &[Appointment], date: NaiveDate) -> Vec<Appointment> {
    view_for_day(appointments, date.weekday().into())
}

fn text_field<'d>(doc: &'d Document, field: &str) -> Option<&'d str> {
    doc.get(field).and_then(Value::as_str)
}

fn required_text(id: &str, doc: &Document, field: &'static str) -> String {
    match text_field(doc, field) {
        Some(value) => value.to_string(),
        None => {
            warn!(appointment_id = %id, field = field, "Stored appointment is missing a text field");
            String::new()
        }
    }
}

fn time_field(
    id: &str,
    doc: &Document,
    field: &'static str,
    from_range: Option<&str>,
    default: &str,
) -> String {
    if let Some(value) = text_field(doc, field).filter(|v| !v.is_empty()) {
        return value.to_string();
    }

    match from_range.filter(|v| !v.is_empty()) {
        Some(value) => {
            warn!(appointment_id = %id, field = field, "Stored appointment is missing a time; taking it from timeRange");
            value.to_string()
        }
        None => {
            warn!(
                appointment_id = %id,
                field = field,
                default = default,
                "Stored appointment is missing a time; using default"
            );
            default.to_string()
        }
    }
}

/// Builds an [`Appointment`] from a stored document, coercing bad values.
fn normalize_appointment(id: String, doc: &Document) -> Appointment {
    let day = text_field(doc, "day")
        .and_then(|raw| raw.parse::<Weekday>().ok())
        .unwrap_or_else(|| {
            warn!(appointment_id = %id, value = ?doc.get("day"), "Invalid day on stored appointment; using Monday");
            Weekday::Monday
        });

    let kind = text_field(doc, "type")
        .and_then(|raw| raw.parse::<AppointmentType>().ok())
        .unwrap_or_else(|| {
            warn!(appointment_id = %id, value = ?doc.get("type"), "Invalid type on stored appointment; using Lecture");
            AppointmentType::Lecture
        });

    let stored_range = text_field(doc, "timeRange").and_then(split_time_range);
    let start_time = time_field(
        &id,
        doc,
        "startTime",
        stored_range.map(|(start, _)| start),
        DEFAULT_START_TIME,
    );
    let end_time = time_field(
        &id,
        doc,
        "endTime",
        stored_range.map(|(_, end)| end),
        DEFAULT_END_TIME,
    );

    Appointment {
        day,
        time_range: format_time_range(&start_time, &end_time),
        course: required_text(&id, doc, "course"),
        professor: required_text(&id, doc, "professor"),
        room: required_text(&id, doc, "room"),
        kind,
        start_time,
        end_time,
        id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{to_document, MemoryDocumentStore, SqliteDocumentStore};
    use serde_json::json;

    fn user() -> UserId {
        UserId::parse("student-1").unwrap()
    }

    fn memory_schedule() -> (Arc<MemoryDocumentStore>, ScheduleStore) {
        let store = Arc::new(MemoryDocumentStore::new());
        (store.clone(), ScheduleStore::new(store))
    }

    fn form(course: &str, day: &str, start: &str, end: &str) -> AppointmentForm {
        AppointmentForm {
            course: course.to_string(),
            professor: "A. Lovelace".to_string(),
            room: "210".to_string(),
            day: day.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            kind: "Lecture".to_string(),
        }
    }

    fn appointment(id: &str, day: Weekday, start: &str, end: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            day,
            time_range: format_time_range(start, end),
            course: "Course".to_string(),
            professor: "Prof".to_string(),
            room: "1".to_string(),
            kind: AppointmentType::Lecture,
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    #[test]
    fn test_wednesday_scenario() {
        let (_, schedule) = memory_schedule();
        let user = user();

        let id = schedule
            .add(&user, &form("Data Structures", "Wednesday", "09:00", "10:30"))
            .unwrap();

        let all = schedule.list(&user).unwrap();
        let stored = all.iter().find(|a| a.id == id).unwrap();
        assert_eq!(stored.time_range, "09:00 - 10:30");
        assert_eq!(stored.course, "Data Structures");

        let wednesday = view_for_day(&all, Weekday::Wednesday);
        assert!(wednesday.iter().any(|a| a.id == id));
        let monday = view_for_day(&all, Weekday::Monday);
        assert!(monday.iter().all(|a| a.id != id));
    }

    #[test]
    fn test_add_then_list_has_consistent_time_range() {
        let (_, schedule) = memory_schedule();
        let user = user();
        for (start, end) in [("00:00", "23:59"), ("14:00", "15:30"), ("08:05", "08:50")] {
            schedule.add(&user, &form("Calculus I", "Friday", start, end)).unwrap();
        }

        for a in schedule.list(&user).unwrap() {
            assert_eq!(a.time_range, format!("{} - {}", a.start_time, a.end_time));
        }
    }

    #[test]
    fn test_add_rejects_malformed_time_without_writing() {
        let (store, schedule) = memory_schedule();
        let user = user();

        for bad in ["9:00", "25:61"] {
            let result = schedule.add(&user, &form("Calculus I", "Friday", bad, "10:30"));
            assert!(matches!(result, Err(ScheduleError::Validation(_))));
        }
        assert!(store.is_empty(&user.appointments_collection()).unwrap());
    }

    #[test]
    fn test_update_rejects_malformed_time_without_changing() {
        let (_, schedule) = memory_schedule();
        let user = user();
        let id = schedule
            .add(&user, &form("Calculus I", "Friday", "09:00", "10:30"))
            .unwrap();

        let result = schedule.update(&user, &id, &form("Calculus II", "Friday", "09:00", "25:61"));
        assert!(matches!(result, Err(ScheduleError::Validation(_))));

        let all = schedule.list(&user).unwrap();
        assert_eq!(all[0].course, "Calculus I");
        assert_eq!(all[0].end_time, "10:30");
    }

    #[test]
    fn test_update_replaces_fields_and_recomputes_range() {
        let (_, schedule) = memory_schedule();
        let user = user();
        let id = schedule
            .add(&user, &form("Calculus I", "Friday", "09:00", "10:30"))
            .unwrap();

        let mut edited = form("Calculus II", "Tuesday", "16:00", "17:30");
        edited.kind = "Seminar".to_string();
        let updated = schedule.update(&user, &id, &edited).unwrap();
        assert_eq!(updated.time_range, "16:00 - 17:30");

        let all = schedule.list(&user).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].course, "Calculus II");
        assert_eq!(all[0].day, Weekday::Tuesday);
        assert_eq!(all[0].kind, AppointmentType::Seminar);
        assert_eq!(all[0].time_range, "16:00 - 17:30");
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let (_, schedule) = memory_schedule();
        let user = user();
        schedule
            .add(&user, &form("Calculus I", "Friday", "09:00", "10:30"))
            .unwrap();
        let before = schedule.list(&user).unwrap();

        let result = schedule.update(&user, "missing", &form("Physics", "Monday", "09:00", "10:30"));
        assert!(matches!(result, Err(ScheduleError::NotFound { id }) if id == "missing"));
        assert_eq!(schedule.list(&user).unwrap(), before);
    }

    #[test]
    fn test_remove_then_list_excludes_id() {
        let (_, schedule) = memory_schedule();
        let user = user();
        let keep = schedule
            .add(&user, &form("Calculus I", "Friday", "09:00", "10:30"))
            .unwrap();
        let gone = schedule
            .add(&user, &form("Physics", "Friday", "11:00", "12:30"))
            .unwrap();

        schedule.remove(&user, &gone).unwrap();
        schedule.remove(&user, &gone).unwrap();

        let ids: Vec<_> = schedule.list(&user).unwrap().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![keep]);
    }

    #[test]
    fn test_users_do_not_share_appointments() {
        let (_, schedule) = memory_schedule();
        schedule
            .add(&user(), &form("Calculus I", "Friday", "09:00", "10:30"))
            .unwrap();

        let other = UserId::parse("student-2").unwrap();
        assert!(schedule.list(&other).unwrap().is_empty());
    }

    #[test]
    fn test_sqlite_backed_schedule() {
        let schedule = ScheduleStore::new(Arc::new(SqliteDocumentStore::in_memory().unwrap()));
        let user = user();
        let id = schedule
            .add(&user, &form("Data Structures", "Wednesday", "09:00", "10:30"))
            .unwrap();

        let all = schedule.list(&user).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].day, Weekday::Wednesday);
    }

    #[test]
    fn test_read_path_coerces_bad_day_and_type() {
        let (store, schedule) = memory_schedule();
        let user = user();
        store
            .create(
                &user.appointments_collection(),
                to_document(&json!({
                    "day": "",
                    "type": "Workshop",
                    "course": "Legacy",
                    "professor": "Someone",
                    "room": "1",
                    "startTime": "09:00",
                    "endTime": "10:30",
                    "timeRange": "09:00 - 10:30",
                }))
                .unwrap(),
            )
            .unwrap();

        let all = schedule.list(&user).unwrap();
        assert_eq!(all[0].day, Weekday::Monday);
        assert_eq!(all[0].kind, AppointmentType::Lecture);
    }

    #[test]
    fn test_read_path_recovers_times() {
        let (store, schedule) = memory_schedule();
        let user = user();
        let collection = user.appointments_collection();
        let from_range = store
            .create(
                &collection,
                to_document(&json!({ "day": "Friday", "timeRange": "14:00 - 15:30" })).unwrap(),
            )
            .unwrap();
        let from_defaults = store
            .create(&collection, to_document(&json!({ "day": "Friday" })).unwrap())
            .unwrap();
        let stale_range = store
            .create(
                &collection,
                to_document(&json!({
                    "day": "Friday",
                    "startTime": "11:00",
                    "endTime": "12:30",
                    "timeRange": "08:00 - 09:00",
                }))
                .unwrap(),
            )
            .unwrap();

        let all = schedule.list(&user).unwrap();
        let find = |id: &str| all.iter().find(|a| a.id == id).unwrap();

        assert_eq!(find(&from_range).start_time, "14:00");
        assert_eq!(find(&from_range).end_time, "15:30");
        assert_eq!(find(&from_defaults).time_range, "09:00 - 10:30");
        assert_eq!(find(&from_defaults).course, "");
        assert_eq!(find(&stale_range).time_range, "11:00 - 12:30");
    }

    #[test]
    fn test_read_path_skips_empty_times() {
        let (store, schedule) = memory_schedule();
        let user = user();
        let collection = user.appointments_collection();
        let from_range = store
            .create(
                &collection,
                to_document(&json!({
                    "day": "Friday",
                    "startTime": "",
                    "endTime": "",
                    "timeRange": "14:00 - 15:30",
                }))
                .unwrap(),
            )
            .unwrap();
        let from_defaults = store
            .create(
                &collection,
                to_document(&json!({ "day": "Friday", "startTime": "", "timeRange": " - " }))
                    .unwrap(),
            )
            .unwrap();

        let all = schedule.list(&user).unwrap();
        let find = |id: &str| all.iter().find(|a| a.id == id).unwrap();

        assert_eq!(find(&from_range).start_time, "14:00");
        assert_eq!(find(&from_range).end_time, "15:30");
        assert_eq!(find(&from_range).time_range, "14:00 - 15:30");
        assert_eq!(find(&from_defaults).time_range, "09:00 - 10:30");
    }

    #[test]
    fn test_view_for_day_filters_and_sorts_stably() {
        let all = vec![
            appointment("a", Weekday::Monday, "14:00", "15:30"),
            appointment("b", Weekday::Tuesday, "08:00", "09:00"),
            appointment("c", Weekday::Monday, "09:00", "10:30"),
            appointment("d", Weekday::Monday, "11:00", "12:30"),
            appointment("e", Weekday::Monday, "09:00", "10:30"),
        ];

        let ids: Vec<_> = view_for_day(&all, Weekday::Monday)
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["c", "e", "d", "a"]);
        assert!(view_for_day(&all, Weekday::Sunday).is_empty());
    }

    #[test]
    fn test_view_for_day_is_a_sorted_subsequence() {
        let all = vec![
            appointment("a", Weekday::Friday, "16:00", "17:30"),
            appointment("b", Weekday::Friday, "10:00", "11:00"),
            appointment("c", Weekday::Thursday, "10:00", "11:00"),
        ];

        for day in Weekday::ALL {
            let view = view_for_day(&all, day);
            assert!(view.iter().all(|a| a.day == day));
            assert_eq!(view.len(), all.iter().filter(|a| a.day == day).count());
            assert!(view.windows(2).all(|w| w[0].time_range <= w[1].time_range));
        }
    }

    #[test]
    fn test_view_for_date_uses_weekday() {
        let all = vec![
            appointment("mon", Weekday::Monday, "09:00", "10:30"),
            appointment("wed", Weekday::Wednesday, "09:00", "10:30"),
        ];

        // 2024-09-04 was a Wednesday.
        let date = NaiveDate::from_ymd_opt(2024, 9, 4).unwrap();
        let ids: Vec<_> = view_for_date(&all, date).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["wed"]);
    }
}
