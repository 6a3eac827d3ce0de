//! Fixed scoring tables.

use super::rules::{Bonus, CoreValueRule, SliderRule, Threshold};
use super::types::{Education, Slider};

use super::types::Category::{Communication, ProblemSolving, Teamwork, Technical};

pub const BASE_SCORE: f64 = 40.0;
pub const SCORE_FLOOR: i32 = 20;
pub const SCORE_CEILING: i32 = 100;

pub const EDUCATION_FALLBACK_BONUS: f64 = 10.0;
/// Share of the education bonus that also goes to problem solving.
pub const EDUCATION_PROBLEM_SOLVING_FACTOR: f64 = 0.8;

pub const REQUIRED_CORE_VALUES: usize = 5;

pub fn education_bonus(education: &Education) -> f64 {
    match education {
        Education::HighSchool => 5.0,
        Education::BTech | Education::Bachelor => 15.0,
        Education::Master => 18.0,
        Education::PhD => 20.0,
        Education::Other(_) => EDUCATION_FALLBACK_BONUS,
    }
}

/// Every value a student may pick.
pub static CORE_VALUE_VOCABULARY: [&str; 20] = [
    "Leadership",
    "Collaboration",
    "Innovation",
    "Integrity",
    "Data-Driven",
    "Customer Focus",
    "Communication",
    "Adaptability",
    "Accountability",
    "Creativity",
    "Continuous Learning",
    "Teamwork",
    "Problem Solving",
    "Attention to Detail",
    "Work-Life Balance",
    "Diversity & Inclusion",
    "Sustainability",
    "Excellence",
    "Empathy",
    "Autonomy",
];

/// Values that carry points. Anything not listed contributes nothing.
pub static CORE_VALUE_RULES: [CoreValueRule; 10] = [
    CoreValueRule {
        value: "Leadership",
        bonuses: &[(Communication, 8.0), (ProblemSolving, 4.0), (Teamwork, 6.0)],
    },
    CoreValueRule {
        value: "Collaboration",
        bonuses: &[(Communication, 6.0), (Teamwork, 10.0)],
    },
    CoreValueRule {
        value: "Innovation",
        bonuses: &[(Technical, 6.0), (ProblemSolving, 8.0)],
    },
    CoreValueRule {
        value: "Data-Driven",
        bonuses: &[(Technical, 10.0), (ProblemSolving, 6.0)],
    },
    CoreValueRule {
        value: "Customer Focus",
        bonuses: &[(Communication, 8.0), (Teamwork, 4.0)],
    },
    CoreValueRule {
        value: "Communication",
        bonuses: &[(Communication, 10.0), (Teamwork, 4.0)],
    },
    CoreValueRule {
        value: "Adaptability",
        bonuses: &[(ProblemSolving, 6.0), (Teamwork, 4.0)],
    },
    CoreValueRule {
        value: "Creativity",
        bonuses: &[(Communication, 2.0), (ProblemSolving, 8.0)],
    },
    CoreValueRule {
        value: "Continuous Learning",
        bonuses: &[(Technical, 8.0), (ProblemSolving, 4.0)],
    },
    CoreValueRule {
        value: "Attention to Detail",
        bonuses: &[(Technical, 6.0), (ProblemSolving, 4.0)],
    },
];

pub fn core_value_rule(value: &str) -> Option<&'static CoreValueRule> {
    CORE_VALUE_RULES.iter().find(|rule| rule.value == value)
}

pub fn is_known_core_value(value: &str) -> bool {
    CORE_VALUE_VOCABULARY.contains(&value)
}

pub static SLIDER_RULES: [SliderRule; 5] = [
    SliderRule {
        slider: Slider::Independence,
        threshold: Threshold::AtLeast(70),
        bonuses: &[(Technical, 10.0), (ProblemSolving, 8.0)],
    },
    SliderRule {
        slider: Slider::Routine,
        threshold: Threshold::AtMost(30),
        bonuses: &[(ProblemSolving, 12.0), (Technical, 8.0)],
    },
    SliderRule {
        slider: Slider::Pace,
        threshold: Threshold::AtLeast(60),
        bonuses: &[(Technical, 8.0), (ProblemSolving, 10.0)],
    },
    SliderRule {
        slider: Slider::Focus,
        threshold: Threshold::AtLeast(60),
        bonuses: &[(Technical, 12.0), (ProblemSolving, 8.0)],
    },
    SliderRule {
        slider: Slider::Approach,
        threshold: Threshold::AtLeast(60),
        bonuses: &[(Communication, 10.0), (Teamwork, 12.0)],
    },
];

/// Minimum answer for a bubble to count.
pub const BUBBLE_THRESHOLD: i32 = 3;

/// Bonuses for q1..q4, by position.
pub const LEADING_BUBBLE_BONUSES: [&[Bonus]; 4] = [
    &[(ProblemSolving, 8.0), (Technical, 5.0)],
    &[(Teamwork, 8.0), (Communication, 5.0)],
    &[(Communication, 8.0), (Teamwork, 4.0)],
    &[(Technical, 8.0), (ProblemSolving, 4.0)],
];

/// Bonus for each of q5..q10.
pub const TRAILING_BUBBLE_BONUS: &[Bonus] = &[
    (Technical, 2.0),
    (Communication, 2.0),
    (ProblemSolving, 2.0),
    (Teamwork, 2.0),
];

pub fn bubble_bonuses(position: usize) -> &'static [Bonus] {
    LEADING_BUBBLE_BONUSES
        .get(position)
        .copied()
        .unwrap_or(TRAILING_BUBBLE_BONUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_bonus_table() {
        assert_eq!(education_bonus(&Education::HighSchool), 5.0);
        assert_eq!(education_bonus(&Education::BTech), 15.0);
        assert_eq!(education_bonus(&Education::Bachelor), 15.0);
        assert_eq!(education_bonus(&Education::Master), 18.0);
        assert_eq!(education_bonus(&Education::PhD), 20.0);
        assert_eq!(education_bonus(&Education::parse("Diploma")), 10.0);
    }

    #[test]
    fn test_scored_values_are_in_vocabulary() {
        for rule in &CORE_VALUE_RULES {
            assert!(
                is_known_core_value(rule.value),
                "{} missing from vocabulary",
                rule.value
            );
        }
    }

    #[test]
    fn test_vocabulary_has_no_duplicates() {
        let mut sorted = CORE_VALUE_VOCABULARY.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), CORE_VALUE_VOCABULARY.len());
    }

    #[test]
    fn test_core_value_lookup_is_exact() {
        assert!(core_value_rule("Leadership").is_some());
        assert!(core_value_rule("leadership").is_none());
        assert!(core_value_rule("Integrity").is_none());
    }

    #[test]
    fn test_bubble_bonuses_by_position() {
        assert_eq!(bubble_bonuses(0)[0], (ProblemSolving, 8.0));
        assert_eq!(bubble_bonuses(3)[0], (Technical, 8.0));
        assert_eq!(bubble_bonuses(4).len(), 4);
        assert_eq!(bubble_bonuses(9), TRAILING_BUBBLE_BONUS);
    }
}
