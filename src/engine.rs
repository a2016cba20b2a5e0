use std::thread;
use std::time::Instant;

use crate::config::AppConfig;
use crate::race::{Finish, Race};
use crate::render;
use crate::screen::Screen;
use crate::stride::Stride;

/// Countdown, race loop and final report. Returns `None` only for an empty field.
pub fn run(cfg: &AppConfig, stride: &mut impl Stride, screen: &mut impl Screen) -> Option<Finish> {
    let pacing = cfg.pacing;
    let mut race = Race::new(cfg.names.iter().cloned());

    screen.clear();
    screen.show(&render::intro(&cfg.names));
    for line in render::COUNTDOWN {
        thread::sleep(pacing.countdown_step);
        screen.show(line);
    }
    thread::sleep(pacing.go_pause);

    log::info!("race started with {} ducks", race.ducks().len());
    let start = Instant::now();

    loop {
        let elapsed = start.elapsed();

        race.tick(stride);
        screen.clear();
        screen.show(&render::frame(&race));

        log::debug!(
            "tick={} elapsed={:?} leader={}",
            race.ticks(),
            elapsed,
            race.standings().first().map(|d| d.to_string()).unwrap_or_default()
        );

        if race.is_won() || elapsed >= pacing.budget {
            break;
        }

        thread::sleep(pacing.frame);
    }

    let finish = race.finish()?;
    match finish {
        Finish::Crossed(i) => log::info!(
            "{} crossed the line after {} ticks ({:?})",
            race.ducks()[i],
            race.ticks(),
            start.elapsed()
        ),
        Finish::Distance(i) => log::info!(
            "time's up after {} ticks, {} wins on distance at {}",
            race.ticks(),
            race.ducks()[i],
            race.ducks()[i].position
        ),
    }

    screen.clear();
    screen.show(&render::report(&race, finish));
    Some(finish)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Pacing;
    use crate::race::FINISH_LINE;
    use crate::screen::Capture;
    use crate::stride::testing::{Fixed, Scripted};
    use std::time::Duration;

    fn config(names: &[&str], budget: Duration) -> AppConfig {
        AppConfig {
            names: names.iter().map(|s| s.to_string()).collect(),
            pacing: Pacing::instant(budget),
        }
    }

    #[test]
    fn full_speed_race_goes_to_first_in_list() {
        let cfg = config(&["alice", "bob"], Duration::from_secs(60));
        let mut screen = Capture::default();

        let finish = run(&cfg, &mut Fixed(3), &mut screen);

        assert_eq!(finish, Some(Finish::Crossed(0)));
        // intro + one frame per tick + report
        assert_eq!(screen.frames.len(), 1 + 15 + 1);
        assert!(screen.last().contains("🎉 WINNER: alice 🎉"));
        assert!(screen.last().ends_with("Thanks for watching the Duck Race! 🦆🏁\n"));
    }

    #[test]
    fn countdown_precedes_the_race() {
        let cfg = config(&["alice"], Duration::from_secs(60));
        let mut screen = Capture::default();

        run(&cfg, &mut Fixed(3), &mut screen);

        assert_eq!(
            screen.frames[0],
            "🏁 DUCK RACE STARTING! 🏁\nRacers: alice\n\nGet ready...\n3...\n2...\n1...\nGO! 🏁\n"
        );
        assert!(screen.frames[1].starts_with("🦆 DUCK RACE IN PROGRESS 🦆\n"));
    }

    #[test]
    fn final_frame_shows_everyone_at_the_line() {
        let cfg = config(&["alice", "bob"], Duration::from_secs(60));
        let mut screen = Capture::default();

        run(&cfg, &mut Fixed(3), &mut screen);

        let last_frame = &screen.frames[screen.frames.len() - 2];
        let trail = "~".repeat(FINISH_LINE as usize);
        assert!(last_frame.contains(&format!("alice      |{trail}🦆")));
        assert!(last_frame.contains(&format!("bob        |{trail}🦆")));
    }

    #[test]
    fn timeout_declares_winner_by_distance() {
        let mut cfg = config(&["alice", "bob", "carol"], Duration::from_millis(30));
        cfg.pacing.frame = Duration::from_millis(1);
        let mut screen = Capture::default();
        // bob and carol tie on the first tick, then nobody moves again
        let mut stride = Scripted::new([1, 4, 4]);

        let finish = run(&cfg, &mut stride, &mut screen);

        assert_eq!(finish, Some(Finish::Distance(1)));
        let report = screen.last();
        assert!(report.contains("Time's up! Final positions:\n1st 🥇 bob\n2nd 🥈 carol\n3rd 🥉 alice\n"));
        assert!(report.contains("🎉 WINNER BY DISTANCE: bob 🎉"));
    }

    #[test]
    fn zero_budget_still_runs_one_tick() {
        let cfg = config(&["alice"], Duration::ZERO);
        let mut screen = Capture::default();

        let finish = run(&cfg, &mut Fixed(0), &mut screen);

        assert_eq!(finish, Some(Finish::Distance(0)));
        assert_eq!(screen.frames.len(), 3);
    }
}
