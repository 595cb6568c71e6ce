#![allow(dead_code)]

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub const MOVE_REQUEST: &str =
    r#"<room roomId="abc123"><data class="sc.framework.plugins.protocol.MoveRequest"/></room>"#;

pub fn init_test_logger() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn joined(room_id: &str) -> String {
    format!(r#"<joined roomId="{room_id}"/>"#)
}

pub fn welcome(color: &str) -> String {
    format!(r#"<room roomId="abc123"><data class="welcomeMessage" color="{color}"></data></room>"#)
}

/// A player as `(index, carrots)`.
pub type Pos = (usize, u32);

/// A memento on a 65 field board with carrot fields at `carrots`, hedgehogs elsewhere.
pub fn memento(red: Pos, blue: Pos, carrots: &[usize]) -> String {
    let fields: String = (0..65)
        .map(|index| {
            let kind = if carrots.contains(&index) {
                "CARROT"
            } else {
                "HEDGEHOG"
            };
            format!(r#"<fields index="{index}" type="{kind}"/>"#)
        })
        .collect();
    format!(
        concat!(
            r#"<room roomId="abc123"><data class="memento"><state class="state" turn="1">"#,
            r#"<red displayName="red player" color="RED" index="{}" carrots="{}" salads="5">"#,
            r#"<cards><type>EAT_SALAD</type><type>HURRY_AHEAD</type></cards></red>"#,
            r#"<blue displayName="blue player" color="BLUE" index="{}" carrots="{}" salads="5">"#,
            r#"<cards><type>FALL_BACK</type></cards></blue>"#,
            r#"<board>{}</board></state></data></room>"#
        ),
        red.0, red.1, blue.0, blue.1, fields
    )
}

pub fn advance(distance: usize) -> String {
    format!(
        r#"<room roomId="abc123"><data class="move"><advance order="0" distance="{distance}" /></data></room>"#
    )
}

pub const FALL_BACK: &str =
    r#"<room roomId="abc123"><data class="move"><fallBack order="0" /></data></room>"#;
