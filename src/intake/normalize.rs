//! Boundary normalization of raw submissions.

use crate::db::models::PlayerEntry;
use crate::error::IntakeError;

/// The wire format carries five numbered player slots.
pub const PLAYER_SLOTS: usize = 5;

/// A required text field must carry something other than whitespace.
pub fn required(field: &str, value: &str) -> Result<String, IntakeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IntakeError::Validation(format!(
            "missing required field `{field}`"
        )));
    }
    Ok(trimmed.to_owned())
}

/// Blank optional values are stored as absent, never as placeholder text.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Collapse the numbered `player1`..`player5` slots into an ordered roster.
/// Empty slots are dropped, not stored as blanks.
pub fn collect_players(slots: [Option<String>; PLAYER_SLOTS]) -> Vec<PlayerEntry> {
    slots
        .into_iter()
        .flatten()
        .filter_map(|name| {
            let name = name.trim().to_owned();
            (!name.is_empty()).then_some(PlayerEntry {
                full_name: name,
                image_url: None,
            })
        })
        .collect()
}

/// Attach hosted image URLs to the roster in slot order: attachment `i` is
/// player `i`'s photo. Surplus URLs stay record-level only.
pub fn assign_player_images(players: &mut [PlayerEntry], urls: &[String]) {
    for (player, url) in players.iter_mut().zip(urls) {
        player.image_url = Some(url.clone());
    }
}
