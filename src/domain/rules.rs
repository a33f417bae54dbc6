use crate::error::{LifeError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of entries in each rule table (neighbor counts 0..=8).
pub const TABLE_LEN: usize = 9;

/// Outer-totalistic birth/survival rule.
/// Two lookup tables indexed by live neighbor count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    born: [bool; TABLE_LEN],
    survives: [bool; TABLE_LEN],
}

impl Rule {
    pub const fn new(born: [bool; TABLE_LEN], survives: [bool; TABLE_LEN]) -> Self {
        Self { born, survives }
    }

    /// Build a rule from tables of unchecked length.
    ///
    /// Fails with [`LifeError::InvalidRuleTable`] unless both have exactly nine entries.
    pub fn try_new(born: &[bool], survives: &[bool]) -> Result<Self> {
        Ok(Self::new(to_table("born", born)?, to_table("survives", survives)?))
    }

    /// Build a rule from neighbor-count lists, e.g. `from_counts(&[3], &[2, 3])`.
    /// Counts above 8 are ignored.
    pub fn from_counts(born: &[u8], survives: &[u8]) -> Self {
        let mut rule = Self::new([false; TABLE_LEN], [false; TABLE_LEN]);
        for &n in born.iter().filter(|&&n| (n as usize) < TABLE_LEN) {
            rule.born[n as usize] = true;
        }
        for &n in survives.iter().filter(|&&n| (n as usize) < TABLE_LEN) {
            rule.survives[n as usize] = true;
        }
        rule
    }

    /// Conway's Game of Life (B3/S23)
    pub fn conway() -> Self {
        Self::from_counts(&[3], &[2, 3])
    }

    /// HighLife (B36/S23), home of the replicator
    pub fn highlife() -> Self {
        Self::from_counts(&[3, 6], &[2, 3])
    }

    /// Seeds (B2/S): every live cell dies each generation
    pub fn seeds() -> Self {
        Self::from_counts(&[2], &[])
    }

    /// Day & Night (B3678/S34678), symmetric under inversion
    pub fn day_and_night() -> Self {
        Self::from_counts(&[3, 6, 7, 8], &[3, 4, 6, 7, 8])
    }

    /// Named presets
    pub fn all_presets() -> Vec<(&'static str, Rule)> {
        vec![
            ("Conway", Self::conway()),
            ("HighLife", Self::highlife()),
            ("Seeds", Self::seeds()),
            ("Day&Night", Self::day_and_night()),
        ]
    }

    pub const fn born(&self) -> &[bool; TABLE_LEN] {
        &self.born
    }

    pub const fn survives(&self) -> &[bool; TABLE_LEN] {
        &self.survives
    }

    /// State of a cell in the next generation.
    ///
    /// `neighbors` must be in `0..=8`, which [`Grid::count_live_neighbors`](super::Grid::count_live_neighbors) guarantees.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        let table = if alive { &self.survives } else { &self.born };
        table[neighbors as usize]
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

fn to_table(table: &'static str, values: &[bool]) -> Result<[bool; TABLE_LEN]> {
    values.try_into().map_err(|_| {
        log::warn!("rule table `{}` has {} entries", table, values.len());
        LifeError::InvalidRuleTable {
            table,
            len: values.len(),
        }
    })
}

fn write_counts(f: &mut fmt::Formatter<'_>, table: &[bool; TABLE_LEN]) -> fmt::Result {
    for (count, _) in table.iter().enumerate().filter(|(_, set)| **set) {
        write!(f, "{}", count)?;
    }
    Ok(())
}

/// Canonical `B<counts>/S<counts>` rulestring.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        write_counts(f, &self.born)?;
        f.write_str("/S")?;
        write_counts(f, &self.survives)
    }
}

/// Parses `B3/S23` style rulestrings. Letters are case-insensitive and the
/// two halves may appear in either order.
impl FromStr for Rule {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || LifeError::InvalidRuleString(s.to_string());

        let (first, second) = s.trim().split_once('/').ok_or_else(invalid)?;
        let mut born = None;
        let mut survives = None;

        for part in [first, second] {
            let mut chars = part.chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut born,
                Some('S') => &mut survives,
                _ => return Err(invalid()),
            };
            if slot.is_some() {
                return Err(invalid());
            }
            let mut table = [false; TABLE_LEN];
            for c in chars {
                let count = c
                    .to_digit(10)
                    .filter(|&d| (d as usize) < TABLE_LEN)
                    .ok_or_else(invalid)?;
                table[count as usize] = true;
            }
            *slot = Some(table);
        }

        match (born, survives) {
            (Some(born), Some(survives)) => Ok(Self::new(born, survives)),
            _ => Err(invalid()),
        }
    }
}
