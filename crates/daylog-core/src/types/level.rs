//! Log levels and level sets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// A log level
///
/// Levels are independent categories, not severities. There is no ordering
/// between them; filtering is always set membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
    Verbose,
}

impl Level {
    /// All levels, in declaration order
    pub const ALL: [Level; 4] = [Level::Info, Level::Warn, Level::Error, Level::Verbose];

    /// Lowercase name as it appears in rendered lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Verbose => "verbose",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Level::Info => 1,
            Level::Warn => 1 << 1,
            Level::Error => 1 << 2,
            Level::Verbose => 1 << 3,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "verbose" => Ok(Level::Verbose),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}

/// A set of levels
///
/// Serializes as a list of level names, in `Level::ALL` order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Level>", into = "Vec<Level>")]
pub struct LevelSet {
    bits: u8,
}

impl LevelSet {
    /// The empty set
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Every level
    pub fn all() -> Self {
        Level::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, level: Level) {
        self.bits |= level.bit();
    }

    pub fn remove(&mut self, level: Level) {
        self.bits &= !level.bit();
    }

    pub fn contains(&self, level: Level) -> bool {
        self.bits & level.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate the members in `Level::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = Level> + '_ {
        Level::ALL.into_iter().filter(move |level| self.contains(*level))
    }
}

impl fmt::Debug for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Level> for LevelSet {
    fn from_iter<I: IntoIterator<Item = Level>>(iter: I) -> Self {
        let mut set = LevelSet::empty();
        for level in iter {
            set.insert(level);
        }
        set
    }
}

impl<const N: usize> From<[Level; N]> for LevelSet {
    fn from(levels: [Level; N]) -> Self {
        levels.into_iter().collect()
    }
}

impl From<Vec<Level>> for LevelSet {
    fn from(levels: Vec<Level>) -> Self {
        levels.into_iter().collect()
    }
}

impl From<LevelSet> for Vec<Level> {
    fn from(set: LevelSet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names() {
        assert_eq!(Level::Info.to_string(), "info");
        assert_eq!(Level::Warn.to_string(), "warn");
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(Level::Verbose.to_string(), "verbose");
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!(" Verbose ".parse::<Level>().unwrap(), Level::Verbose);

        let err = "debug".parse::<Level>().unwrap_err();
        assert!(matches!(err, LogError::UnknownLevel(name) if name == "debug"));
    }

    #[test]
    fn test_level_set_membership() {
        let set = LevelSet::from([Level::Info, Level::Error]);
        assert!(set.contains(Level::Info));
        assert!(set.contains(Level::Error));
        assert!(!set.contains(Level::Warn));
        assert!(!set.contains(Level::Verbose));
        assert_eq!(set.len(), 2);

        let mut set = set;
        set.remove(Level::Info);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Level::Error]);
    }

    #[test]
    fn test_empty_and_all() {
        assert!(LevelSet::empty().is_empty());
        assert_eq!(LevelSet::default(), LevelSet::empty());
        assert_eq!(LevelSet::all().len(), 4);
        assert_eq!(LevelSet::all().iter().collect::<Vec<_>>(), Level::ALL.to_vec());
    }

    #[test]
    fn test_duplicates_collapse() {
        let set: LevelSet = vec![Level::Warn, Level::Warn, Level::Info].into();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_level_set_serde() {
        let set = LevelSet::from([Level::Verbose, Level::Info]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["info","verbose"]"#);

        let back: LevelSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);

        let empty: LevelSet = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
    }
}
