use serde::{Deserialize, Serialize};

use super::SynergyError;

/// Letter grade for a synergy score. Declaration order runs best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

/// Lower bound of each band, highest first. The last floor must be zero.
const GRADE_BANDS: [(Grade, i32); 6] = [
    (Grade::A, 90),
    (Grade::B, 75),
    (Grade::C, 60),
    (Grade::D, 45),
    (Grade::E, 30),
    (Grade::F, 0),
];

impl Grade {
    pub const fn ordered() -> [Self; 6] {
        [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F]
    }

    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }

    /// Band containing `score`. Scores outside 0..=100 are an invariant breach, not clamped.
    pub fn from_score(score: i32) -> Result<Self, SynergyError> {
        if !(0..=100).contains(&score) {
            return Err(SynergyError::ScoreOutOfRange(score));
        }

        GRADE_BANDS
            .iter()
            .find(|(_, floor)| score >= *floor)
            .map(|(grade, _)| *grade)
            .ok_or(SynergyError::BandGap(score))
    }

    /// Inclusive score range covered by this grade.
    pub fn bounds(self) -> (i32, i32) {
        let mut upper = 100;
        for (grade, floor) in GRADE_BANDS {
            if grade == self {
                return (floor, upper);
            }
            upper = floor - 1;
        }
        (0, upper)
    }

    /// True when this grade is `other` or better.
    pub fn is_at_least(self, other: Grade) -> bool {
        self <= other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_tile_the_score_range() {
        let mut expected_upper = 100;
        for grade in Grade::ordered() {
            let (lower, upper) = grade.bounds();
            assert_eq!(upper, expected_upper, "{grade:?} upper bound");
            assert!(lower <= upper);
            expected_upper = lower - 1;
        }
        assert_eq!(expected_upper, -1);
    }

    #[test]
    fn band_edges() {
        let cases = [
            (100, Grade::A),
            (90, Grade::A),
            (89, Grade::B),
            (75, Grade::B),
            (74, Grade::C),
            (60, Grade::C),
            (59, Grade::D),
            (45, Grade::D),
            (44, Grade::E),
            (30, Grade::E),
            (29, Grade::F),
            (0, Grade::F),
        ];
        for (score, grade) in cases {
            assert_eq!(Grade::from_score(score), Ok(grade), "score {score}");
        }
    }

    #[test]
    fn out_of_range_scores_are_rejected() {
        assert_eq!(Grade::from_score(101), Err(SynergyError::ScoreOutOfRange(101)));
        assert_eq!(Grade::from_score(-1), Err(SynergyError::ScoreOutOfRange(-1)));
    }

    #[test]
    fn ordering_runs_best_to_worst() {
        assert!(Grade::A.is_at_least(Grade::B));
        assert!(Grade::B.is_at_least(Grade::B));
        assert!(!Grade::C.is_at_least(Grade::B));
        assert_eq!(serde_json::to_string(&Grade::D).expect("serializes"), "\"D\"");
    }
}
