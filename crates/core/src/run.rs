//! Run module - the level-to-level driver
//!
//! A [`Run`] owns the current level and round and sequences them: play a
//! round until it stops being [`Status::Playing`], hold a [`Banner`] on
//! screen for its duration, then either deal the next level or finish.
//! Like the round, it is driven entirely by `now_ms` and never sleeps.

use crate::progression::level_up;
use crate::rng::DeckRng;
use crate::round::RoundState;
use crate::snapshot::RunSnapshot;
use crate::types::{Banner, Level, Point, Status, Viewport};

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Cleared the final level.
    Completed,
    /// Ran out of moves or time on `level`.
    Failed { level: Level, status: Status },
}

/// What follows a banner once it expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterBanner {
    NextLevel,
    Finish(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Playing,
    /// Round over; the board is frozen at `ended_at_ms` until `until_ms`.
    Banner {
        banner: Banner,
        ended_at_ms: u64,
        until_ms: u64,
        then: AfterBanner,
    },
    Finished(Outcome),
}

#[derive(Debug, Clone)]
pub struct Run {
    rng: DeckRng,
    level: Level,
    round: RoundState,
    phase: RunPhase,
    viewport: Viewport,
}

impl Run {
    /// Start at level 1 with the clock at `now_ms`.
    pub fn new(seed: u64, viewport: Viewport, now_ms: u64) -> Self {
        Self::starting_at(Level::FIRST, seed, viewport, now_ms)
    }

    /// Start at an arbitrary level (tests, benches).
    pub fn starting_at(level: Level, seed: u64, viewport: Viewport, now_ms: u64) -> Self {
        let mut rng = DeckRng::new(seed);
        log::info!("run started with seed {seed}");
        let mut round = RoundState::new(level, &mut rng, now_ms);
        round.set_viewport(viewport);
        Self {
            rng,
            level,
            round,
            phase: RunPhase::Playing,
            viewport,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, RunPhase::Finished(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            RunPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.round.set_viewport(viewport);
    }

    /// Forward a click to the round. Ignored outside of play, including a
    /// round that has already ended but not been ticked yet.
    pub fn handle_click(&mut self, point: Point, now_ms: u64) -> bool {
        if !self.accepts_input(now_ms) {
            return false;
        }
        self.round.handle_click(point, now_ms)
    }

    /// Forward a grid selection to the round. Same gating as `handle_click`.
    pub fn select_at(&mut self, row: u8, col: u8, now_ms: u64) -> bool {
        if !self.accepts_input(now_ms) {
            return false;
        }
        self.round.select_at(row, col, now_ms)
    }

    /// Settle the phase at `now_ms` before letting input through.
    fn accepts_input(&mut self, now_ms: u64) -> bool {
        self.tick(now_ms) == RunPhase::Playing
    }

    /// Advance deadlines and phase transitions.
    pub fn tick(&mut self, now_ms: u64) -> RunPhase {
        match self.phase {
            RunPhase::Playing => {
                self.round.tick(now_ms);
                let status = self.round.evaluate(now_ms);
                if !status.is_playing() {
                    self.end_round(status, now_ms);
                }
            }
            RunPhase::Banner { until_ms, then, .. } if now_ms >= until_ms => match then {
                AfterBanner::NextLevel => self.next_level(now_ms),
                AfterBanner::Finish(outcome) => {
                    log::info!("run finished: {outcome:?}");
                    self.phase = RunPhase::Finished(outcome);
                }
            },
            RunPhase::Banner { .. } | RunPhase::Finished(_) => {}
        }
        self.phase
    }

    fn end_round(&mut self, status: Status, now_ms: u64) {
        let (banner, then) = match status {
            Status::Win if self.level.is_final() => {
                (Banner::AllLevelsComplete, AfterBanner::Finish(Outcome::Completed))
            }
            Status::Win => (Banner::Cleared, AfterBanner::NextLevel),
            Status::Lose => (
                Banner::OutOfMoves,
                AfterBanner::Finish(Outcome::Failed {
                    level: self.level,
                    status,
                }),
            ),
            Status::Timeout => (
                Banner::OutOfTime,
                AfterBanner::Finish(Outcome::Failed {
                    level: self.level,
                    status,
                }),
            ),
            Status::Playing => return,
        };

        log::info!(
            "level {} ended with {status:?} after {}ms",
            self.level,
            self.round.elapsed_ms(now_ms)
        );

        self.phase = RunPhase::Banner {
            banner,
            ended_at_ms: now_ms,
            until_ms: now_ms + banner.duration_ms(),
            then,
        };
    }

    fn next_level(&mut self, now_ms: u64) {
        self.level = level_up(self.level);
        // Replacing the round drops any pending flip-back with it.
        self.round = RoundState::new(self.level, &mut self.rng, now_ms);
        self.round.set_viewport(self.viewport);
        self.phase = RunPhase::Playing;
    }

    pub fn snapshot_into(&self, now_ms: u64, out: &mut RunSnapshot) {
        let (frozen_at, banner) = match self.phase {
            RunPhase::Playing => (now_ms, None),
            RunPhase::Banner {
                banner,
                ended_at_ms,
                ..
            } => (ended_at_ms, Some(banner)),
            RunPhase::Finished(_) => (now_ms, None),
        };
        self.round.snapshot_into(frozen_at, &mut out.round);
        out.banner = banner;
        out.finished = self.is_finished();
    }

    pub fn snapshot(&self, now_ms: u64) -> RunSnapshot {
        let mut s = RunSnapshot::default();
        self.snapshot_into(now_ms, &mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lv(n: u8) -> Level {
        Level::new(n).unwrap()
    }

    /// Clear the current round by clicking every pair, spacing clicks past
    /// the debounce window. Returns the time after the last click.
    fn clear_round(run: &mut Run, mut now_ms: u64) -> u64 {
        let cards = run.round().cards().to_vec();
        let mut done = vec![false; cards.len()];
        for i in 0..cards.len() {
            if done[i] {
                continue;
            }
            let j = (i + 1..cards.len())
                .find(|&j| !done[j] && cards[j].value == cards[i].value)
                .unwrap();
            now_ms += 600;
            assert!(run.select_at(cards[i].row, cards[i].col, now_ms));
            now_ms += 600;
            assert!(run.select_at(cards[j].row, cards[j].col, now_ms));
            done[i] = true;
            done[j] = true;
        }
        now_ms
    }

    #[test]
    fn test_win_shows_cleared_then_levels_up() {
        let mut run = Run::new(7, Viewport::default(), 0);
        let t = clear_round(&mut run, 0);

        match run.tick(t) {
            RunPhase::Banner { banner, then, .. } => {
                assert_eq!(banner, Banner::Cleared);
                assert_eq!(then, AfterBanner::NextLevel);
            }
            other => panic!("expected banner, got {other:?}"),
        }
        assert_eq!(run.level(), lv(1));

        // Still showing just before the deadline.
        assert!(matches!(run.tick(t + 1999), RunPhase::Banner { .. }));
        assert_eq!(run.tick(t + 2000), RunPhase::Playing);
        assert_eq!(run.level(), lv(2));
        assert_eq!(run.round().cards().len(), 16);
        assert_eq!(run.round().started_at_ms(), t + 2000);
    }

    #[test]
    fn test_clicks_ignored_during_banner() {
        let mut run = Run::new(7, Viewport::default(), 0);
        let t = clear_round(&mut run, 0);
        run.tick(t);
        assert!(!run.select_at(0, 0, t + 1000));
    }

    #[test]
    fn test_final_level_win_completes_run() {
        let mut run = Run::starting_at(lv(15), 3, Viewport::default(), 0);
        let t = clear_round(&mut run, 0);
        match run.tick(t) {
            RunPhase::Banner { banner, .. } => assert_eq!(banner, Banner::AllLevelsComplete),
            other => panic!("expected banner, got {other:?}"),
        }
        run.tick(t + 5000);
        assert_eq!(run.outcome(), Some(Outcome::Completed));
        assert_eq!(run.level(), lv(15));
    }

    #[test]
    fn test_timeout_fails_without_retry() {
        let mut run = Run::starting_at(lv(5), 3, Viewport::default(), 0);
        match run.tick(300_001) {
            RunPhase::Banner { banner, then, .. } => {
                assert_eq!(banner, Banner::OutOfTime);
                assert!(matches!(then, AfterBanner::Finish(_)));
            }
            other => panic!("expected banner, got {other:?}"),
        }
        run.tick(303_001);
        assert_eq!(
            run.outcome(),
            Some(Outcome::Failed {
                level: lv(5),
                status: Status::Timeout
            })
        );
        assert!(run.is_finished());
    }

    #[test]
    fn test_snapshot_freezes_clock_during_banner() {
        let mut run = Run::starting_at(lv(9), 3, Viewport::default(), 0);
        run.tick(120_001);
        let snap = run.snapshot(121_500);
        assert_eq!(snap.banner, Some(Banner::OutOfTime));
        assert_eq!(snap.round.seconds_remaining, Some(0));
        assert_eq!(snap.round.status, Status::Timeout);
        assert!(!snap.finished);
    }

    #[test]
    fn test_click_after_timeout_is_rejected_without_tick() {
        let mut run = Run::starting_at(lv(5), 3, Viewport::default(), 0);
        assert!(!run.select_at(0, 0, 300_001));
        assert!(!run.round().cards()[0].face_up);
        assert!(matches!(
            run.phase(),
            RunPhase::Banner {
                banner: Banner::OutOfTime,
                ..
            }
        ));
    }

    #[test]
    fn test_lost_round_cannot_be_played_on_to_a_win() {
        let mut run = Run::starting_at(lv(9), 3, Viewport::default(), 0);
        // Two pairs left on the board and a single move to spend.
        for (i, c) in run.round.cards_mut().iter_mut().enumerate() {
            c.value = (i / 2) as u8 + 1;
            c.matched = i >= 4;
            c.face_up = i >= 4;
        }
        run.round.set_moves_remaining(Some(1));

        assert!(run.select_at(0, 0, 1_000));
        assert!(run.select_at(0, 1, 1_600));
        assert_eq!(run.round().moves_remaining(), Some(0));

        // No tick in between: the next clicks must not reach the board.
        assert!(!run.select_at(0, 2, 2_200));
        assert!(!run.select_at(0, 3, 2_800));
        assert!(!run.round().cards()[2].face_up);

        match run.tick(3_000) {
            RunPhase::Banner { banner, then, .. } => {
                assert_eq!(banner, Banner::OutOfMoves);
                assert!(matches!(then, AfterBanner::Finish(_)));
            }
            other => panic!("expected out-of-moves banner, got {other:?}"),
        }
        run.tick(10_000);
        assert_eq!(
            run.outcome(),
            Some(Outcome::Failed {
                level: lv(9),
                status: Status::Lose
            })
        );
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = Run::new(99, Viewport::default(), 0);
        let b = Run::new(99, Viewport::default(), 0);
        assert_eq!(a.round().cards(), b.round().cards());
    }
}
