//! Race state and the per-tick update.
//!
//! Ducks are kept in input order. Every tick each duck draws one stride,
//! and the first duck (in that order) to reach the finish line wins.

use crate::duck::Duck;
use crate::stride::Stride;

pub const TRACK_WIDTH: u32 = 60;
pub const FINISH_LINE: u32 = TRACK_WIDTH - 15;

/// How a race ended. The index is the duck's slot in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// Reached the finish line first.
    Crossed(usize),
    /// Furthest along when time ran out.
    Distance(usize),
}

impl Finish {
    pub fn index(self) -> usize {
        match self {
            Finish::Crossed(i) | Finish::Distance(i) => i,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Race {
    ducks: Vec<Duck>,
    winner: Option<usize>,
    ticks: u64,
}

impl Race {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ducks: names.into_iter().map(Duck::new).collect(),
            winner: None,
            ticks: 0,
        }
    }

    pub fn ducks(&self) -> &[Duck] {
        &self.ducks
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn winner(&self) -> Option<&Duck> {
        self.winner.map(|i| &self.ducks[i])
    }

    pub fn is_won(&self) -> bool {
        self.winner().is_some()
    }

    /// Advance every duck by one stride, in list order.
    pub fn tick(&mut self, stride: &mut impl Stride) {
        for (i, duck) in self.ducks.iter_mut().enumerate() {
            let step = stride.next_stride();
            duck.position = duck.position.saturating_add(step).min(FINISH_LINE);
            duck.animation_frame += 1;

            if duck.position >= FINISH_LINE && self.winner.is_none() {
                self.winner = Some(i);
            }
        }
        self.ticks += 1;
    }

    /// Ducks ordered by descending position. Ties keep input order.
    pub fn standings(&self) -> Vec<&Duck> {
        let mut sorted: Vec<&Duck> = self.ducks.iter().collect();
        sorted.sort_by(|a, b| b.position.cmp(&a.position));
        sorted
    }

    /// Outcome if the race were called now.
    pub fn finish(&self) -> Option<Finish> {
        if let Some(i) = self.winner {
            return Some(Finish::Crossed(i));
        }
        self.leader().map(Finish::Distance)
    }

    /// Index of the furthest duck, earliest in input order on ties.
    fn leader(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, duck) in self.ducks.iter().enumerate() {
            match best {
                Some(b) if self.ducks[b].position >= duck.position => {}
                _ => best = Some(i),
            }
        }
        best
    }
}
