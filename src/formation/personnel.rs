//! Personnel grouping shorthand.
//!
//! A personnel group like `"11"` names the number of running backs (first
//! digit) and tight ends (second digit); the remaining skill players out of
//! five are wide receivers.

use std::fmt;
use std::str::FromStr;

const SKILL_PLAYERS: u8 = 5;

/// A parsed personnel grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Personnel {
    pub running_backs: u8,
    pub tight_ends: u8,
    pub wide_receivers: u8,
}

impl Personnel {
    /// Parse two-digit shorthand such as `"11"` or `"21"`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut digits = s.trim().chars();
        let backs = digits.next()?.to_digit(10)? as u8;
        let ends = digits.next()?.to_digit(10)? as u8;
        if digits.next().is_some() || backs + ends > SKILL_PLAYERS {
            return None;
        }

        Some(Self {
            running_backs: backs,
            tight_ends: ends,
            wide_receivers: SKILL_PLAYERS - backs - ends,
        })
    }

    /// Long form, e.g. "1 RB, 1 TE, 3 WR".
    pub fn describe(&self) -> String {
        format!(
            "{} RB, {} TE, {} WR",
            self.running_backs, self.tight_ends, self.wide_receivers
        )
    }
}

impl fmt::Display for Personnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.running_backs, self.tight_ends)
    }
}

impl FromStr for Personnel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid personnel grouping: {}", s))
    }
}
