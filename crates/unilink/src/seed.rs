//! Initial data written the first time a user opens the app.

use tracing::info;

use crate::db::{to_document, DocumentStore, StoreError, WriteBatch};
use crate::directory::{ClubDetails, UserProfile, CLUBS_COLLECTION, DEFAULT_CLUB_AVATAR_URL};
use crate::schedule::{AppointmentFields, AppointmentType, Weekday};
use crate::types::{UserId, USERS_COLLECTION};

/// (day, start, end, course, professor, room, type)
type SeedAppointment = (
    Weekday,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    AppointmentType,
);

const INITIAL_APPOINTMENTS: &[SeedAppointment] = &[
    (
        Weekday::Monday,
        "09:00",
        "10:30",
        "Introduction to Programming",
        "Dr. Alisher Usmanov",
        "Room 101",
        AppointmentType::Lecture,
    ),
    (
        Weekday::Monday,
        "11:00",
        "12:30",
        "Data Structures",
        "Prof. Kamila Rakhimova",
        "Room 203",
        AppointmentType::Lecture,
    ),
    (
        Weekday::Monday,
        "14:00",
        "15:30",
        "Introduction to Programming",
        "Timur Karimov",
        "Lab 3",
        AppointmentType::Lab,
    ),
    (
        Weekday::Tuesday,
        "16:00",
        "17:30",
        "Introduction to AI",
        "Dr. Alan Turing",
        "Lab 7",
        AppointmentType::Seminar,
    ),
    (
        Weekday::Wednesday,
        "09:00",
        "10:30",
        "Data Structures",
        "Prof. Ada Lovelace",
        "Room 210",
        AppointmentType::Lecture,
    ),
    (
        Weekday::Wednesday,
        "11:00",
        "12:30",
        "Calculus I",
        "Prof. Rustam Ibragimov",
        "Room 401",
        AppointmentType::Lecture,
    ),
    (
        Weekday::Friday,
        "14:00",
        "15:30",
        "English for Academic Purposes",
        "Sarah Johnson",
        "Room 102",
        AppointmentType::Seminar,
    ),
];

const INITIAL_CLUBS: &[(&str, &str)] = &[
    (
        "Debate Club",
        "Sharpen your arguments and public speaking skills.",
    ),
    (
        "AI & Robotics Society",
        "Explore the cutting edge of technology and build cool projects.",
    ),
    ("Photography Club", "Capture moments and learn new techniques."),
];

/// Profile every new user starts with.
pub fn initial_profile() -> UserProfile {
    UserProfile {
        name: "Sunnatilla Kholdarboeva".to_string(),
        description: "Welcome to UniLink, your student platform".to_string(),
        email: "sunnatilla@example.com".to_string(),
        university: "Westminster University in Tashkent".to_string(),
        faculty: "Computer Science".to_string(),
        course: 3,
        group: "CS-301".to_string(),
    }
}

/// Appointments every new user starts with.
pub fn initial_appointments() -> Vec<AppointmentFields> {
    INITIAL_APPOINTMENTS
        .iter()
        .map(
            |&(day, start, end, course, professor, room, kind)| AppointmentFields {
                day,
                start_time: start.to_string(),
                end_time: end.to_string(),
                course: course.to_string(),
                professor: professor.to_string(),
                room: room.to_string(),
                kind,
            },
        )
        .collect()
}

pub fn initial_clubs() -> Vec<ClubDetails> {
    INITIAL_CLUBS
        .iter()
        .map(|&(name, description)| ClubDetails {
            name: name.to_string(),
            description: description.to_string(),
            avatar_url: DEFAULT_CLUB_AVATAR_URL.to_string(),
        })
        .collect()
}

/// Writes the initial profile and schedule for `user`, plus the initial clubs
/// if no club exists yet, in a single batch.
///
/// # Returns
/// The profile that was written.
pub fn seed_user(store: &dyn DocumentStore, user: &UserId) -> Result<UserProfile, StoreError> {
    let profile = initial_profile();
    let mut batch = WriteBatch::new();
    batch.set(USERS_COLLECTION, user.as_str(), to_document(&profile)?);

    let appointments = user.appointments_collection();
    for fields in initial_appointments() {
        batch.create(&appointments, fields.to_document()?);
    }

    let seed_clubs = store.is_empty(CLUBS_COLLECTION)?;
    if seed_clubs {
        for club in initial_clubs() {
            batch.create(CLUBS_COLLECTION, to_document(&club)?);
        }
    }

    let writes = batch.len();
    store.commit(batch)?;

    info!(user = %user, writes, seed_clubs, "Seeded first-visit data");
    Ok(profile)
}
