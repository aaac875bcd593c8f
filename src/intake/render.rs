//! HTML bodies for the administrator notification mail.

use crate::db::models::{NewFiestaRegistration, NewStreetRegistration};

/// Placeholder shown for optional fields the submitter left empty. Only the
/// rendered mail carries it; records store absent values as absent.
const NOT_PROVIDED: &str = "N/A";

fn field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("<p><strong>{label}:</strong> {value}</p>"));
}

fn optional_field(out: &mut String, label: &str, value: Option<&str>) {
    field(out, label, value.unwrap_or(NOT_PROVIDED));
}

fn footer(out: &mut String) {
    out.push_str(
        "<hr><p><em>This registration was automatically forwarded by the event site backend.</em></p>",
    );
}

/// Field-by-field summary of a Soccer Fiesta registration.
pub fn fiesta_email(reg: &NewFiestaRegistration) -> String {
    let mut out = String::from("<h3>New Soccer Fiesta Registration</h3>");
    field(
        &mut out,
        "Name",
        &format!("{} {}", reg.first_name, reg.last_name),
    );
    field(&mut out, "Email", &reg.email);
    field(&mut out, "Phone", &reg.phone_number);
    optional_field(&mut out, "Secondary Phone", reg.secondary_phone.as_deref());
    field(&mut out, "Country", &reg.country);
    field(&mut out, "State", &reg.state);
    field(&mut out, "Age", &reg.age.to_string());
    field(&mut out, "Marital Status", &reg.marital_status);
    optional_field(&mut out, "Bio", reg.bio.as_deref());
    footer(&mut out);
    out
}

/// Team summary, numbered roster and inline images of a Street Soccer
/// registration.
pub fn street_email(reg: &NewStreetRegistration) -> String {
    let mut out = String::from("<h3>New Street Soccer Registration</h3>");
    field(&mut out, "Team Name", &reg.team_name);
    field(&mut out, "Community", &reg.community);
    field(&mut out, "Captain Name", &reg.captain_name);
    field(&mut out, "Email", &reg.email);
    field(&mut out, "Phone", &reg.phone);

    out.push_str("<h4>Players:</h4>");
    for (i, player) in reg.players.iter().enumerate() {
        field(&mut out, &format!("Player {}", i + 1), &player.full_name);
    }

    optional_field(&mut out, "Additional Info", reg.additional_info.as_deref());

    if !reg.images.is_empty() {
        out.push_str("<h4>Uploaded Images:</h4>");
        for url in &reg.images {
            out.push_str(&format!(
                r#"<img src="{url}" alt="team upload" width="240" />"#
            ));
        }
    }

    footer(&mut out);
    out
}
