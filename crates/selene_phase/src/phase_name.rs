//! The eight named lunar phases.
//!
//! Tags are stable English identifiers. Display strings belong to the
//! localization layer, which looks them up by tag.

/// One of the eight conventional lunar phases, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum PhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All phases in cycle order (index 0 = New Moon).
pub const ALL_PHASES: [PhaseName; 8] = [
    PhaseName::NewMoon,
    PhaseName::WaxingCrescent,
    PhaseName::FirstQuarter,
    PhaseName::WaxingGibbous,
    PhaseName::FullMoon,
    PhaseName::WaningGibbous,
    PhaseName::LastQuarter,
    PhaseName::WaningCrescent,
];

const PHASE_TAGS: [&str; 8] = [
    "New Moon",
    "Waxing Crescent",
    "First Quarter",
    "Waxing Gibbous",
    "Full Moon",
    "Waning Gibbous",
    "Last Quarter",
    "Waning Crescent",
];

const PHASE_SYMBOLS: [&str; 8] = ["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"];

impl PhaseName {
    /// Canonical English tag, e.g. `"Full Moon"`.
    pub fn tag(self) -> &'static str {
        PHASE_TAGS[self.index() as usize]
    }

    /// Moon emoji for the phase.
    pub fn symbol(self) -> &'static str {
        PHASE_SYMBOLS[self.index() as usize]
    }

    /// 0-based index (NewMoon=0 .. WaningCrescent=7).
    pub const fn index(self) -> u8 {
        match self {
            Self::NewMoon => 0,
            Self::WaxingCrescent => 1,
            Self::FirstQuarter => 2,
            Self::WaxingGibbous => 3,
            Self::FullMoon => 4,
            Self::WaningGibbous => 5,
            Self::LastQuarter => 6,
            Self::WaningCrescent => 7,
        }
    }

    /// Phase at the given index, wrapping modulo 8.
    pub fn from_index(index: u8) -> Self {
        ALL_PHASES[(index % 8) as usize]
    }

    /// Look up a phase by its canonical tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        PHASE_TAGS
            .iter()
            .position(|t| *t == tag)
            .map(|i| ALL_PHASES[i])
    }

    /// Cycle position at the centre of this phase's bucket.
    pub fn center_position(self) -> f64 {
        self.index() as f64 / 8.0
    }

    /// Whether the lit fraction grows through this phase.
    pub fn is_waxing(self) -> bool {
        matches!(
            self,
            Self::WaxingCrescent | Self::FirstQuarter | Self::WaxingGibbous
        )
    }
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, p) in ALL_PHASES.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
        }
    }

    #[test]
    fn tags_roundtrip() {
        for p in ALL_PHASES {
            assert_eq!(PhaseName::from_tag(p.tag()), Some(p));
        }
        assert_eq!(PhaseName::from_tag("Blue Moon"), None);
    }

    #[test]
    fn stable_tags() {
        assert_eq!(PhaseName::NewMoon.tag(), "New Moon");
        assert_eq!(PhaseName::FullMoon.tag(), "Full Moon");
        assert_eq!(PhaseName::WaningCrescent.to_string(), "Waning Crescent");
    }

    #[test]
    fn symbols() {
        assert_eq!(PhaseName::NewMoon.symbol(), "🌑");
        assert_eq!(PhaseName::FullMoon.symbol(), "🌕");
        assert_eq!(PhaseName::LastQuarter.symbol(), "🌗");
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(PhaseName::from_index(8), PhaseName::NewMoon);
        assert_eq!(PhaseName::from_index(12), PhaseName::FullMoon);
    }

    #[test]
    fn waxing_set() {
        assert!(PhaseName::FirstQuarter.is_waxing());
        assert!(!PhaseName::NewMoon.is_waxing());
        assert!(!PhaseName::FullMoon.is_waxing());
        assert!(!PhaseName::LastQuarter.is_waxing());
    }
}
