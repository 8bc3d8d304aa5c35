use crate::availability::models::AvailabilityInput;
use crate::error::{config_error, AppResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Volunteer record as returned by the hackathon API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_selected: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_in_person: bool,
    #[serde(rename = "volunteer_type", default)]
    pub volunteer_type: Option<String>,
    /// Legacy comma-separated availability text
    #[serde(default)]
    pub availability: Option<AvailabilityInput>,
    /// Newer "<day label>-<period name>" availability entries
    #[serde(default)]
    pub available_days: Option<AvailabilityInput>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pronouns: Option<String>,
}

impl Volunteer {
    /// The availability field to parse, preferring non-empty `availableDays`
    pub fn availability_input(&self) -> Option<&AvailabilityInput> {
        match &self.available_days {
            Some(days) if !days.is_blank() => Some(days),
            _ => self.availability.as_ref(),
        }
    }

    pub fn is_mentor(&self) -> bool {
        self.volunteer_type.as_deref() == Some(VolunteerKind::Mentor.as_str())
    }
}

/// Envelope of `GET /api/messages/hackathon/{event_id}/{type}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolunteerListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Volunteer>,
}

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The `{type}` segment of the volunteer list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolunteerKind {
    Mentor,
    Judge,
    Volunteer,
    Hacker,
}

impl VolunteerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VolunteerKind::Mentor => "mentor",
            VolunteerKind::Judge => "judge",
            VolunteerKind::Volunteer => "volunteer",
            VolunteerKind::Hacker => "hacker",
        }
    }
}

impl fmt::Display for VolunteerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VolunteerKind {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "mentor" => Ok(VolunteerKind::Mentor),
            "judge" => Ok(VolunteerKind::Judge),
            "volunteer" => Ok(VolunteerKind::Volunteer),
            "hacker" => Ok(VolunteerKind::Hacker),
            other => Err(config_error(&format!("Unknown volunteer type: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volunteer_deserialize() {
        let json = r#"{
            "name": "Ada",
            "isSelected": true,
            "isInPerson": false,
            "volunteer_type": "mentor",
            "availability": "Friday Oct 10: 🌅 Early Morning (7am - 9am PST)",
            "photoUrl": "https://example.com/ada.png",
            "expertise": "Rust"
        }"#;
        let volunteer: Volunteer = serde_json::from_str(json).unwrap();
        assert_eq!(volunteer.name, "Ada");
        assert!(volunteer.is_selected);
        assert!(volunteer.is_mentor());
        assert!(matches!(volunteer.availability, Some(AvailabilityInput::Text(_))));
        assert_eq!(volunteer.available_days, None);
    }

    #[test]
    fn test_null_and_missing_fields() {
        let volunteer: Volunteer = serde_json::from_str(r#"{"availability": null}"#).unwrap();
        assert!(!volunteer.is_selected);
        assert_eq!(volunteer.availability_input(), None);
    }

    #[test]
    fn test_null_record_fields_fall_back_to_defaults() {
        let json = r#"{
            "data": [
                {"name": "Ada", "isSelected": true, "isInPerson": true, "volunteer_type": "mentor"},
                {"name": null, "isSelected": null, "isInPerson": null, "volunteer_type": null}
            ]
        }"#;
        let list: VolunteerListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.data.len(), 2);
        assert_eq!(list.data[0].name, "Ada");
        assert!(list.data[0].is_selected);
        assert_eq!(list.data[1].name, "");
        assert!(!list.data[1].is_selected);
        assert!(!list.data[1].is_in_person);
        assert!(!list.data[1].is_mentor());

        let list: VolunteerListResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(list.data.is_empty());
    }

    #[test]
    fn test_available_days_preferred_when_present() {
        let volunteer = Volunteer {
            availability: Some("Friday Oct 10: 🌅 Early Morning (7am - 9am PST)".into()),
            available_days: Some(vec!["Saturday Oct 11-Night".to_string()].into()),
            ..Default::default()
        };
        assert!(matches!(volunteer.availability_input(), Some(AvailabilityInput::Days(_))));

        let volunteer = Volunteer {
            availability: Some("Friday Oct 10: 🌅 Early Morning (7am - 9am PST)".into()),
            available_days: Some(AvailabilityInput::Days(vec![])),
            ..Default::default()
        };
        assert!(matches!(volunteer.availability_input(), Some(AvailabilityInput::Text(_))));
    }

    #[test]
    fn test_volunteer_kind_parse() {
        assert_eq!("mentor".parse::<VolunteerKind>().unwrap(), VolunteerKind::Mentor);
        assert_eq!(" Judge ".parse::<VolunteerKind>().unwrap(), VolunteerKind::Judge);
        assert!("sponsor".parse::<VolunteerKind>().is_err());
        assert_eq!(VolunteerKind::Hacker.to_string(), "hacker");
    }
}
