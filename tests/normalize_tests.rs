use fiesta_server::db::models::PlayerEntry;
use fiesta_server::intake::normalize;

fn slot(name: &str) -> Option<String> {
    Some(name.to_string())
}

#[test]
fn filled_slots_become_roster_entries_in_order() {
    let players = normalize::collect_players([
        slot("Ada Obi"),
        slot("Ben Eze"),
        slot("Chi Ume"),
        None,
        None,
    ]);

    assert_eq!(players.len(), 3);
    assert_eq!(players[0].full_name, "Ada Obi");
    assert_eq!(players[1].full_name, "Ben Eze");
    assert_eq!(players[2].full_name, "Chi Ume");
}

#[test]
fn blank_and_whitespace_slots_are_dropped() {
    let players =
        normalize::collect_players([slot(""), slot("   "), slot("Dayo Ade"), None, slot("Efe Iko")]);

    assert_eq!(
        players.iter().map(|p| p.full_name.as_str()).collect::<Vec<_>>(),
        ["Dayo Ade", "Efe Iko"]
    );
}

#[test]
fn empty_submission_yields_an_empty_roster() {
    assert!(normalize::collect_players([None, None, None, None, None]).is_empty());
}

#[test]
fn a_full_bench_keeps_all_five_slots() {
    let players = normalize::collect_players([
        slot("P One"),
        slot("P Two"),
        slot("P Three"),
        slot("P Four"),
        slot("P Five"),
    ]);
    assert_eq!(players.len(), normalize::PLAYER_SLOTS);
}

#[test]
fn required_rejects_blank_values() {
    assert!(normalize::required("teamName", "").is_err());
    assert!(normalize::required("teamName", "   ").is_err());
    assert_eq!(normalize::required("teamName", " Lions ").unwrap(), "Lions");
}

#[test]
fn blank_optionals_are_stored_as_absent() {
    assert_eq!(normalize::optional(Some(String::new())), None);
    assert_eq!(normalize::optional(Some("   ".into())), None);
    assert_eq!(normalize::optional(None), None);
    assert_eq!(normalize::optional(Some(" ok ".into())), Some("ok".into()));
}

#[test]
fn image_urls_attach_to_players_in_slot_order() {
    let mut players = vec![
        PlayerEntry {
            full_name: "Ada Obi".into(),
            image_url: None,
        },
        PlayerEntry {
            full_name: "Ben Eze".into(),
            image_url: None,
        },
        PlayerEntry {
            full_name: "Chi Ume".into(),
            image_url: None,
        },
    ];
    let urls = vec![
        "https://media.example/1.jpg".to_string(),
        "https://media.example/2.jpg".to_string(),
    ];

    normalize::assign_player_images(&mut players, &urls);

    assert_eq!(
        players[0].image_url.as_deref(),
        Some("https://media.example/1.jpg")
    );
    assert_eq!(
        players[1].image_url.as_deref(),
        Some("https://media.example/2.jpg")
    );
    // fewer attachments than players: trailing players keep no URL
    assert_eq!(players[2].image_url, None);
}

#[test]
fn roster_persists_without_placeholder_fields() {
    // Absent image URLs are absent in the stored JSON, not "N/A" or null.
    let json = serde_json::to_value(vec![PlayerEntry {
        full_name: "Ada Obi".into(),
        image_url: None,
    }])
    .unwrap();

    assert_eq!(json, serde_json::json!([{ "fullName": "Ada Obi" }]));
}
