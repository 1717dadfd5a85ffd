use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, Validator};

/// Avatar given to clubs created without one.
pub const DEFAULT_CLUB_AVATAR_URL: &str = "https://placehold.co/150x150.png";

/// Lowest and highest course (year of study) a profile may hold.
pub const MIN_COURSE: i64 = 1;
pub const MAX_COURSE: i64 = 7;

/// A student's personal and academic details, stored at `users/<user>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub description: String,
    pub email: String,
    pub university: String,
    pub faculty: String,
    pub course: u8,
    pub group: String,
}

/// A profile together with the id of its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(flatten)]
    pub details: UserProfile,
}

/// Course value as submitted by the profile form: either a number or the
/// text of a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseInput {
    Number(i64),
    Text(String),
}

impl CourseInput {
    fn as_number(&self) -> Option<i64> {
        match self {
            CourseInput::Number(n) => Some(*n),
            CourseInput::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl Default for CourseInput {
    fn default() -> Self {
        CourseInput::Text(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub name: String,
    pub description: String,
    pub email: String,
    pub university: String,
    pub faculty: String,
    pub course: CourseInput,
    pub group: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<UserProfile, ValidationError> {
        let mut v = Validator::new();
        v.min_len("name", &self.name, 2, "zod.profile.name.min")
            .min_len("description", &self.description, 10, "zod.profile.description.min")
            .email("email", &self.email, "zod.profile.email.invalid")
            .min_len("university", &self.university, 3, "zod.profile.university.min")
            .min_len("faculty", &self.faculty, 3, "zod.profile.faculty.min")
            .min_len("group", &self.group, 2, "zod.profile.group.min");

        // Anything that is not a number reports the "min" message.
        let course = self.course.as_number();
        let course_key = match course {
            Some(n) if n > MAX_COURSE => "zod.profile.course.max",
            _ => "zod.profile.course.min",
        };
        v.range(
            "course",
            course.unwrap_or(MIN_COURSE - 1),
            MIN_COURSE,
            MAX_COURSE,
            course_key,
        );
        v.finish()?;

        Ok(UserProfile {
            name: self.name.clone(),
            description: self.description.clone(),
            email: self.email.clone(),
            university: self.university.clone(),
            faculty: self.faculty.clone(),
            // Range checked above
            course: course.unwrap_or(MIN_COURSE) as u8,
            group: self.group.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubDetails {
    pub name: String,
    pub description: String,
    pub avatar_url: String,
}

/// A student club from the shared `clubs` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: String,
    #[serde(flatten)]
    pub details: ClubDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClubForm {
    pub name: String,
    pub description: String,
    /// Falls back to [`DEFAULT_CLUB_AVATAR_URL`] when absent or blank
    pub avatar_url: Option<String>,
}

impl ClubForm {
    pub fn validate(&self) -> Result<ClubDetails, ValidationError> {
        let avatar_url = match self.avatar_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => DEFAULT_CLUB_AVATAR_URL.to_string(),
        };

        let mut v = Validator::new();
        v.min_len("name", &self.name, 2, "zod.club.name.min")
            .min_len("description", &self.description, 10, "zod.club.description.min")
            .absolute_url("avatarUrl", &avatar_url, "zod.club.avatar_url.invalid");
        v.finish()?;

        Ok(ClubDetails {
            name: self.name.clone(),
            description: self.description.clone(),
            avatar_url,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetails {
    pub name: String,
    pub email: String,
    pub university: String,
    pub avatar_url: String,
}

/// A client from the shared `clients` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    #[serde(flatten)]
    pub details: ClientDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientForm {
    pub name: String,
    pub email: String,
    pub university: String,
}

/// Generated avatar for a client, keyed by email.
pub fn client_avatar_url(email: &str) -> String {
    format!("https://i.pravatar.cc/150?u={email}")
}

impl ClientForm {
    pub fn validate(&self) -> Result<ClientDetails, ValidationError> {
        let mut v = Validator::new();
        v.min_len("name", &self.name, 2, "zod.client.name.min")
            .email("email", &self.email, "zod.client.email.invalid")
            .min_len("university", &self.university, 3, "zod.client.university.min");
        v.finish()?;

        Ok(ClientDetails {
            name: self.name.clone(),
            email: self.email.clone(),
            university: self.university.clone(),
            avatar_url: client_avatar_url(&self.email),
        })
    }
}
