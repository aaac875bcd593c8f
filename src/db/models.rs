use serde::{Deserialize, Serialize};

/// One roster entry of a street-soccer team. Persisted inside the
/// `players` JSONB column, so the wire casing is the stored casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntry {
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A normalized Soccer Fiesta submission, ready for insertion.
/// Id and creation timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewFiestaRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub secondary_phone: Option<String>,
    pub country: String,
    pub state: String,
    pub age: i32,
    pub marital_status: String,
    pub bio: Option<String>,
}

/// A normalized Street Soccer submission, ready for insertion.
#[derive(Debug, Clone)]
pub struct NewStreetRegistration {
    pub team_name: String,
    pub community: String,
    pub captain_name: String,
    pub email: String,
    pub phone: String,
    pub players: Vec<PlayerEntry>,
    pub additional_info: Option<String>,
    /// Hosted URLs of the uploaded attachments, in attachment order.
    pub images: Vec<String>,
}
