pub mod client;
pub mod models;

pub use client::VolunteerClient;
pub use models::{Volunteer, VolunteerKind, VolunteerListResponse};
