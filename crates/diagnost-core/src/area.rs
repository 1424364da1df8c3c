//! Per-area scores and weak/strong classification.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Areas scoring strictly below this percentage are weak.
pub const WEAK_THRESHOLD: u32 = 70;

/// Areas scoring at or above this percentage are strong.
pub const STRONG_THRESHOLD: u32 = 80;

/// Aggregate result for one subject area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaScore {
    /// Area key as tagged on the questions.
    pub area: String,
    /// Display name, or the key itself when no name is known.
    pub area_name: String,
    /// Questions answered correctly in this area.
    pub correct: usize,
    /// Questions in this area. Always at least 1.
    pub total: usize,
    /// `round(100 * correct / total)`.
    pub percentage: u32,
}

impl AreaScore {
    pub fn is_weak(&self) -> bool {
        self.percentage < WEAK_THRESHOLD
    }

    pub fn is_strong(&self) -> bool {
        self.percentage >= STRONG_THRESHOLD
    }

    pub fn band(&self) -> PerformanceBand {
        PerformanceBand::from_percentage(self.percentage)
    }
}

/// Lookup from area key to human-readable label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaNames(HashMap<String, String>);

impl AreaNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name for `area`, falling back to the key itself.
    pub fn display_name<'a>(&'a self, area: &'a str) -> &'a str {
        self.0.get(area).map(String::as_str).unwrap_or(area)
    }

    pub fn contains(&self, area: &str) -> bool {
        self.0.contains_key(area)
    }

    pub fn insert(&mut self, area: impl Into<String>, name: impl Into<String>) {
        self.0.insert(area.into(), name.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for AreaNames {
    fn from(names: HashMap<String, String>) -> Self {
        Self(names)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AreaNames {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Weak and strong subsets of a list of area scores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaClassification {
    pub weak: Vec<AreaScore>,
    pub strong: Vec<AreaScore>,
}

/// Split area scores into weak (< 70%) and strong (>= 80%) subsets.
///
/// Areas in the 70-79% band land in neither list. Input order is kept.
pub fn classify(area_scores: &[AreaScore]) -> AreaClassification {
    AreaClassification {
        weak: area_scores.iter().filter(|a| a.is_weak()).cloned().collect(),
        strong: area_scores
            .iter()
            .filter(|a| a.is_strong())
            .cloned()
            .collect(),
    }
}

/// Lower bound of the overall `Adequate` band. Overall scores get a wider
/// middle band than areas.
pub const OVERALL_ADEQUATE_THRESHOLD: u32 = 65;

/// Coarse display band for a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    /// 80% and above.
    Strong,
    /// 70-79% for an area, 65-79% overall.
    Adequate,
    /// 50% up to the adequate cutoff.
    Developing,
    /// Below 50%.
    NeedsWork,
}

impl PerformanceBand {
    /// Band for a per-area percentage.
    pub fn from_percentage(percentage: u32) -> Self {
        Self::with_adequate_cutoff(percentage, WEAK_THRESHOLD)
    }

    /// Band for an overall quiz percentage.
    pub fn overall(percentage: u32) -> Self {
        Self::with_adequate_cutoff(percentage, OVERALL_ADEQUATE_THRESHOLD)
    }

    fn with_adequate_cutoff(percentage: u32, adequate: u32) -> Self {
        if percentage >= STRONG_THRESHOLD {
            PerformanceBand::Strong
        } else if percentage >= adequate {
            PerformanceBand::Adequate
        } else if percentage >= 50 {
            PerformanceBand::Developing
        } else {
            PerformanceBand::NeedsWork
        }
    }
}

impl fmt::Display for PerformanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceBand::Strong => write!(f, "strong"),
            PerformanceBand::Adequate => write!(f, "adequate"),
            PerformanceBand::Developing => write!(f, "developing"),
            PerformanceBand::NeedsWork => write!(f, "needs work"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(key: &str, correct: usize, total: usize, percentage: u32) -> AreaScore {
        AreaScore {
            area: key.into(),
            area_name: key.into(),
            correct,
            total,
            percentage,
        }
    }

    #[test]
    fn classify_boundaries() {
        let scores = vec![
            area("a", 0, 1, 69),
            area("b", 0, 1, 70),
            area("c", 0, 1, 79),
            area("d", 0, 1, 80),
            area("e", 0, 1, 0),
        ];
        let c = classify(&scores);
        let weak: Vec<&str> = c.weak.iter().map(|a| a.area.as_str()).collect();
        let strong: Vec<&str> = c.strong.iter().map(|a| a.area.as_str()).collect();
        assert_eq!(weak, vec!["a", "e"]);
        assert_eq!(strong, vec!["d"]);
    }

    #[test]
    fn classify_leaves_input_untouched() {
        let scores = vec![area("x", 1, 2, 50), area("y", 2, 2, 100)];
        let before = scores.clone();
        let _ = classify(&scores);
        assert_eq!(scores, before);
    }

    #[test]
    fn display_name_falls_back_to_key() {
        let names: AreaNames = [("FAR-I", "Conceptual Framework")].into_iter().collect();
        assert_eq!(names.display_name("FAR-I"), "Conceptual Framework");
        assert_eq!(names.display_name("FAR-II"), "FAR-II");
    }

    #[test]
    fn bands() {
        assert_eq!(PerformanceBand::from_percentage(100), PerformanceBand::Strong);
        assert_eq!(PerformanceBand::from_percentage(80), PerformanceBand::Strong);
        assert_eq!(PerformanceBand::from_percentage(79), PerformanceBand::Adequate);
        assert_eq!(PerformanceBand::from_percentage(50), PerformanceBand::Developing);
        assert_eq!(PerformanceBand::from_percentage(49), PerformanceBand::NeedsWork);
        assert_eq!(PerformanceBand::NeedsWork.to_string(), "needs work");
    }

    #[test]
    fn overall_band_has_wider_adequate_range() {
        assert_eq!(PerformanceBand::overall(80), PerformanceBand::Strong);
        assert_eq!(PerformanceBand::overall(67), PerformanceBand::Adequate);
        assert_eq!(PerformanceBand::overall(65), PerformanceBand::Adequate);
        assert_eq!(PerformanceBand::overall(64), PerformanceBand::Developing);
        assert_eq!(PerformanceBand::overall(49), PerformanceBand::NeedsWork);
        assert_eq!(PerformanceBand::from_percentage(65), PerformanceBand::Developing);
    }
}
