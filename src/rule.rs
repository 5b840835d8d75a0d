use crate::board::Cell;
use std::fmt;

/// The highest neighbour count a Moore-8 neighbourhood can produce
pub const MAX_NEIGHBORS: u8 = 8;

/// Well known life-like rules, by name
///
/// Looked up with [`named_rule`]; the strings are regular rule strings and go
/// through [`Rule::parse`] like user supplied ones.
pub const NAMED_RULES: &[(&str, &str)] = &[
    ("conway", "B3/S23"),
    ("life", "B3/S23"),
    ("replicator", "B1357/S1357"),
    ("seeds", "B2/S"),
    ("b25s4", "B25/S4"),
    ("life-without-death", "B3/S012345678"),
    ("34-life", "B34/S34"),
    ("diamoeba", "B35678/S5678"),
    ("2x2", "B36/S125"),
    ("highlife", "B36/S23"),
    ("day-and-night", "B3678/S34678"),
    ("morley", "B368/S245"),
    ("anneal", "B4678/S35678"),
    ("maze", "B3/S12345"),
    ("mazectric", "B3/S1234"),
];

/// Looks up a rule string in [`NAMED_RULES`], ignoring case
pub fn named_rule(name: &str) -> Option<&'static str> {
    NAMED_RULES
        .iter()
        .find(|(rule_name, _)| rule_name.eq_ignore_ascii_case(name))
        .map(|&(_, rule)| rule)
}

/// Resolves either a rule name or a literal rule string into a [`Rule`]
pub fn resolve_rule(name_or_rule: &str) -> Rule {
    Rule::parse(named_rule(name_or_rule).unwrap_or(name_or_rule))
}

/// Splits a `B<digits>/S<digits>` rule string into its birth and survival digits
///
/// The first character is assumed to be the `B` and the character following
/// the `/` the `S`; neither is checked. Without a `/` both segments are empty.
/// Nothing is validated here, stray characters are left for
/// [`NeighborMask::encode`] to skip.
///
/// # Example
/// ```rust
/// use lifelike::rule::parse_rule;
///
/// assert_eq!(parse_rule("B36/S23"), ("36", "23"));
/// assert_eq!(parse_rule("B3S23"), ("", ""));
/// ```
pub fn parse_rule(rule: &str) -> (&str, &str) {
    let Some(slash) = rule.find('/') else {
        return ("", "");
    };

    // `get` instead of indexing: a segment boundary inside a multi-byte
    // character just means the segment is absent
    let birth = match slash {
        0 | 1 => "",
        _ => rule.get(1..slash).unwrap_or_default(),
    };
    let survival = rule.get(slash + 2..).unwrap_or_default();
    (birth, survival)
}

/// A set of neighbour counts stored as a 9-bit mask
///
/// Bit `n` is set when a count of `n` live neighbours triggers the condition.
/// Bits above [`MAX_NEIGHBORS`] are never set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeighborMask(u16);

impl NeighborMask {
    pub const EMPTY: Self = Self(0);

    /// Encodes the digits `0..=8` found in `digits`, ignoring every other character
    pub fn encode(digits: &str) -> Self {
        Self::from_counts(
            digits
                .chars()
                .filter_map(|c| c.to_digit(10))
                .filter_map(|d| u8::try_from(d).ok()),
        )
    }

    /// Builds a mask from counts, dropping anything above [`MAX_NEIGHBORS`]
    pub fn from_counts<I: IntoIterator<Item = u8>>(counts: I) -> Self {
        let bits = counts
            .into_iter()
            .filter(|&n| n <= MAX_NEIGHBORS)
            .fold(0u16, |mask, n| mask | (1u16 << n));
        Self(bits)
    }

    #[inline]
    pub fn contains(self, neighbors: u8) -> bool {
        neighbors <= MAX_NEIGHBORS && (self.0 >> neighbors) & 1 == 1
    }

    #[inline]
    pub fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The neighbour counts in the mask, in ascending order
    pub fn counts(self) -> impl Iterator<Item = u8> {
        (0..=MAX_NEIGHBORS).filter(move |&n| self.contains(n))
    }
}

impl fmt::Display for NeighborMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.counts() {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

/// A life-like rule as a pair of birth and survival masks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    pub birth: NeighborMask,
    pub survival: NeighborMask,
}

impl Rule {
    /// B3/S23
    pub const CONWAY: Self = Self {
        birth: NeighborMask(0b000_001_000),
        survival: NeighborMask(0b000_001_100),
    };

    pub fn new(birth: NeighborMask, survival: NeighborMask) -> Self {
        Self { birth, survival }
    }

    /// Parses a rule string, degrading malformed input instead of failing
    ///
    /// A missing segment leaves its mask empty: no `/` at all gives a rule
    /// under which every cell dies and stays dead.
    pub fn parse(rule: &str) -> Self {
        if !rule.contains('/') {
            log::warn!("rule {:?} has no '/' separator, nothing will ever live", rule);
        }
        let (birth, survival) = parse_rule(rule);
        Self::new(NeighborMask::encode(birth), NeighborMask::encode(survival))
    }

    /// The state of a cell in the next generation
    #[inline]
    pub fn next_state(&self, cell: Cell, neighbors: u8) -> Cell {
        let mask = match cell {
            Cell::Dead => self.birth,
            Cell::Alive => self.survival,
        };
        Cell::from(mask.contains(neighbors))
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::CONWAY
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survival)
    }
}
