use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt;

/// A parsed time-window rule in disjunctive normal form.
///
/// The source grammar is a two-level split: `or` joins branches, `and`
/// joins conjuncts within a branch. There are no parentheses and no
/// operator precedence beyond that split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeRule {
    /// The literal `all`: matches every timestamp.
    All,
    /// True when any branch holds. An empty branch list never matches,
    /// which is how strings with no recognized conjunct parse.
    AnyOf(Vec<Branch>),
}

/// One `or`-branch: true when all of its conjuncts hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub conjuncts: Vec<Conjunct>,
}

/// One `weekday:time` condition.
///
/// The time side is an upper bound only ("before or at"); the grammar has
/// no way to express a lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conjunct {
    pub days: WeekdaySpan,
    pub cutoff: ClockTime,
}

/// Inclusive ISO weekday span, Monday=1 through Sunday=7. A single day is
/// a span with `start == end`. A reversed span is legal in the source
/// data and simply never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdaySpan {
    pub start: u8,
    pub end: u8,
}

impl WeekdaySpan {
    pub fn single(day: u8) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn contains(&self, iso_weekday: u8) -> bool {
        self.start <= iso_weekday && iso_weekday <= self.end
    }
}

/// A 24h wall-clock minute, ordered so that `ClockTime` comparison is the
/// same as comparing zero-padded `HHMM` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}

impl TimeRule {
    /// Evaluates the rule against a point in time. Pure; no I/O.
    pub fn matches_at(&self, at: NaiveDateTime) -> bool {
        match self {
            TimeRule::All => true,
            TimeRule::AnyOf(branches) => {
                let weekday = at.weekday().number_from_monday() as u8;
                let clock = ClockTime::new(at.hour() as u8, at.minute() as u8);
                branches.iter().any(|branch| branch.holds(weekday, clock))
            }
        }
    }

    /// True for rules that cannot match any timestamp, i.e. the string
    /// contained no recognized conjunct and was not `all`.
    pub fn never_matches(&self) -> bool {
        matches!(self, TimeRule::AnyOf(branches) if branches.is_empty())
    }
}

impl Branch {
    fn holds(&self, weekday: u8, clock: ClockTime) -> bool {
        self.conjuncts
            .iter()
            .all(|conjunct| conjunct.holds(weekday, clock))
    }
}

impl Conjunct {
    fn holds(&self, weekday: u8, clock: ClockTime) -> bool {
        self.days.contains(weekday) && clock <= self.cutoff
    }
}

impl fmt::Display for Conjunct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days.start == self.days.end {
            write!(f, "{}:{}", self.days.start, self.cutoff)
        } else {
            write!(f, "{}-{}:{}", self.days.start, self.days.end, self.cutoff)
        }
    }
}

impl fmt::Display for TimeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRule::All => write!(f, "all"),
            TimeRule::AnyOf(branches) => {
                let rendered: Vec<String> = branches
                    .iter()
                    .map(|branch| {
                        branch
                            .conjuncts
                            .iter()
                            .map(Conjunct::to_string)
                            .collect::<Vec<_>>()
                            .join("and")
                    })
                    .collect();
                write!(f, "{}", rendered.join("or"))
            }
        }
    }
}
