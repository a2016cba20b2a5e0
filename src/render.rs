//! Text for every screen the race shows: countdown, frames and the final report.

use std::fmt::Write;

use crate::duck::Duck;
use crate::race::{Finish, Race, FINISH_LINE, TRACK_WIDTH};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];
const NO_MEDAL: &str = "  ";
const FLAG: &str = "🏁";
const TRAIL: char = '~';
const NAME_WIDTH: usize = 10;
const REPORT_RULE_WIDTH: usize = 60;
const FAREWELL: &str = "\nThanks for watching the Duck Race! 🦆🏁\n";

/// 1st, 2nd, 3rd, 4th, ... 11th, 12th, 13th, ... 21st, ...
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn rule(width: usize) -> String {
    "=".repeat(width)
}

pub fn intro(names: &[String]) -> String {
    format!(
        "🏁 DUCK RACE STARTING! 🏁\nRacers: {}\n\nGet ready...\n",
        names.join(", ")
    )
}

/// Lines printed after each countdown pause, in order.
pub const COUNTDOWN: [&str; 4] = ["3...\n", "2...\n", "1...\n", "GO! 🏁\n"];

/// One lane of the track, closed with `|` and no newline.
pub fn track_line(duck: &Duck) -> String {
    let mut line = format!("{:<width$} |", duck.name, width = NAME_WIDTH);
    for col in 0..TRACK_WIDTH {
        if col == duck.position {
            line.push_str(duck.sprite());
        } else if col == FINISH_LINE {
            line.push_str(FLAG);
        } else if col < duck.position {
            line.push(TRAIL);
        } else {
            line.push(' ');
        }
    }
    line.push('|');
    line
}

/// Ranked list, one `<ordinal> <medal> <name>` line per duck.
pub fn leaderboard(standings: &[&Duck]) -> String {
    let mut out = String::new();
    for (rank, duck) in standings.iter().enumerate() {
        let medal = MEDALS.get(rank).copied().unwrap_or(NO_MEDAL);
        let _ = writeln!(out, "{} {} {}", ordinal(rank + 1), medal, duck.name);
    }
    out
}

pub fn frame(race: &Race) -> String {
    let sep = rule(TRACK_WIDTH as usize + 20);
    let mut out = String::new();
    let _ = writeln!(out, "🦆 DUCK RACE IN PROGRESS 🦆");
    let _ = writeln!(out, "{sep}");
    for duck in race.ducks() {
        let _ = writeln!(out, "{}", track_line(duck));
    }
    let _ = writeln!(out, "{sep}");
    let _ = writeln!(out, "\nCurrent Positions:");
    out.push_str(&leaderboard(&race.standings()));
    out
}

pub fn report(race: &Race, finish: Finish) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🏁 RACE FINISHED! 🏁");
    let _ = writeln!(out, "{}", rule(REPORT_RULE_WIDTH));

    let name = &race.ducks()[finish.index()].name;
    match finish {
        Finish::Crossed(_) => {
            let _ = writeln!(out, "🎉 WINNER: {name} 🎉");
            out.push_str("      👑\n");
            out.push_str("      🦆\n");
            out.push_str("   \\  o  /\n");
            out.push_str("    \\   /\n");
            out.push_str("   🏆 🏆 🏆\n");
        }
        Finish::Distance(_) => {
            let _ = writeln!(out, "Time's up! Final positions:");
            out.push_str(&leaderboard(&race.standings()));
            let _ = writeln!(out, "\n🎉 WINNER BY DISTANCE: {name} 🎉");
        }
    }

    out.push_str(FAREWELL);
    out
}
