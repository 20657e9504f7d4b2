use std::fmt;

/// Risk tier derived from the total assessment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Low => "\u{1F7E2}",
            Self::Moderate => "\u{1F7E0}",
            Self::High => "\u{1F534}",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Concern",
            Self::Moderate => "Moderate Concern",
            Self::High => "High Concern",
        }
    }
}

/// Glyph plus label, e.g. `🟠 Moderate Concern`.
impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.label())
    }
}
