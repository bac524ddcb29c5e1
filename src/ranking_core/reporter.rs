//! Report rendering - one output line per ranked slot

use super::leaderboard::{Leaderboard, RankSlot};
use std::io::{self, Write};

/// Render one slot as `{name} - {id}, Score: {score}`
///
/// An empty slot keeps its unset shape: empty name, id 0, score 0.
pub fn render_slot(slot: &RankSlot) -> String {
    let name = slot.user.as_ref().map(|u| u.name.as_str()).unwrap_or("");
    let id = slot.user.as_ref().map(|u| u.id).unwrap_or(0);
    format!("{} - {}, Score: {}", name, id, slot.score)
}

/// Write the full report, one line per slot
pub fn write_report<W: Write>(writer: &mut W, leaderboard: &Leaderboard) -> io::Result<()> {
    for slot in leaderboard.slots() {
        writeln!(writer, "{}", render_slot(slot))?;
    }
    Ok(())
}

/// Print the report to stdout
pub fn print_report(leaderboard: &Leaderboard) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, leaderboard)
}
