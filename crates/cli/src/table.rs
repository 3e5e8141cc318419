//! Fixed-width terminal rendering of search results.

use playersearch_core::player::{FieldValue, PlayerRecord};

const RULE_WIDTH: usize = 92;
const NAME_WIDTH: usize = 35;
const ID_WIDTH: usize = 12;
const STATE_WIDTH: usize = 6;
const RATING_WIDTH: usize = 10;

/// Names longer than this are cut and suffixed with `...`.
const NAME_LIMIT: usize = 34;
const NAME_KEEP: usize = 31;

const NO_PLAYERS_MESSAGE: &str = "No players found matching your search.";

/// Render `players` as a table with a header, one row per player, and a
/// match count footer.
pub fn render(players: &[PlayerRecord]) -> String {
    if players.is_empty() {
        return format!("{NO_PLAYERS_MESSAGE}\n");
    }

    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = Vec::with_capacity(players.len() + 5);

    lines.push(rule.clone());
    lines.push(row(["Name", "Member ID", "State", "Regular", "Quick", "Blitz"]));
    lines.push(rule.clone());

    for player in players {
        let ratings = player.ratings.as_ref();
        let name = display_name(player.display_name());
        let id = cell(player.member_id.as_ref(), "");
        let state = cell(player.state.as_ref(), "N/A");
        let regular = cell(ratings.and_then(|r| r.regular.as_ref()), "");
        let quick = cell(ratings.and_then(|r| r.quick.as_ref()), "");
        let blitz = cell(ratings.and_then(|r| r.blitz.as_ref()), "");
        lines.push(row([
            name.as_str(),
            id.as_str(),
            state.as_str(),
            regular.as_str(),
            quick.as_str(),
            blitz.as_str(),
        ]));
    }

    lines.push(rule);
    lines.push(format!("Found {} player(s)", players.len()));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn row([name, id, state, regular, quick, blitz]: [&str; 6]) -> String {
    format!(
        "{name:<NAME_WIDTH$} {id:<ID_WIDTH$} {state:<STATE_WIDTH$} \
         {regular:<RATING_WIDTH$} {quick:<RATING_WIDTH$} {blitz:<RATING_WIDTH$}"
    )
}

fn display_name(name: &str) -> String {
    let flat = flatten(name);
    if flat.chars().count() > NAME_LIMIT {
        let kept: String = flat.chars().take(NAME_KEEP).collect();
        format!("{kept}...")
    } else {
        flat
    }
}

fn cell(value: Option<&FieldValue>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty_text() => flatten(&v.to_string()),
        _ => fallback.to_string(),
    }
}

fn flatten(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
