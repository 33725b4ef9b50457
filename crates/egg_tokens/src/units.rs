//! The compiled-in table of unit suffixes that may follow a number literal

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;
use strum::{AsRefStr, EnumString};

/// The dimension a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum UnitCategory {
    Size,
    Time,
}

impl Display for UnitCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// Every known unit suffix, keyed in lower case
pub static UNITS: LazyLock<HashMap<&'static str, UnitCategory>> = LazyLock::new(|| {
    use UnitCategory::*;
    HashMap::from([
        ("b", Size),
        ("kb", Size),
        ("mb", Size),
        ("gb", Size),
        ("tb", Size),
        ("pb", Size),
        ("kib", Size),
        ("mib", Size),
        ("gib", Size),
        ("tib", Size),
        ("pib", Size),
        ("ns", Time),
        ("us", Time),
        ("ms", Time),
        ("sec", Time),
        ("min", Time),
        ("hr", Time),
        ("day", Time),
        ("wk", Time),
    ])
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit: {0}")]
pub struct UnknownUnit(pub String);

/// Looks up a unit suffix, ignoring case
pub fn unit_category(unit: &str) -> Result<UnitCategory, UnknownUnit> {
    UNITS
        .get(unit.to_lowercase().as_str())
        .copied()
        .ok_or_else(|| UnknownUnit(unit.to_string()))
}
