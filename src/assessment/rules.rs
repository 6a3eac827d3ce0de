use super::types::{Category, Slider};
use std::fmt;

/// Points added to one category.
pub type Bonus = (Category, f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    AtLeast(i32),
    AtMost(i32),
}

impl Threshold {
    /// Both bounds are inclusive: `AtMost(30)` fires at exactly 30.
    pub fn matches(&self, value: i32) -> bool {
        match self {
            Threshold::AtLeast(n) => value >= *n,
            Threshold::AtMost(n) => value <= *n,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::AtLeast(n) => write!(f, ">= {}", n),
            Threshold::AtMost(n) => write!(f, "<= {}", n),
        }
    }
}

/// A slider check and the bonuses it grants when it fires.
#[derive(Debug, Clone, Copy)]
pub struct SliderRule {
    pub slider: Slider,
    pub threshold: Threshold,
    pub bonuses: &'static [Bonus],
}

impl SliderRule {
    pub fn describe(&self) -> String {
        format!("{} {}", self.slider.name(), self.threshold)
    }
}

/// Core value and its per-category deltas.
#[derive(Debug, Clone, Copy)]
pub struct CoreValueRule {
    pub value: &'static str,
    pub bonuses: &'static [Bonus],
}

/// Running per-category totals. Kept as `f64` because the education
/// contribution to problem solving is fractional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    pub technical: f64,
    pub communication: f64,
    pub problem_solving: f64,
    pub teamwork: f64,
}

impl Tally {
    pub fn splat(value: f64) -> Self {
        Self {
            technical: value,
            communication: value,
            problem_solving: value,
            teamwork: value,
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Technical => self.technical,
            Category::Communication => self.communication,
            Category::ProblemSolving => self.problem_solving,
            Category::Teamwork => self.teamwork,
        }
    }

    pub fn add(&mut self, category: Category, points: f64) {
        match category {
            Category::Technical => self.technical += points,
            Category::Communication => self.communication += points,
            Category::ProblemSolving => self.problem_solving += points,
            Category::Teamwork => self.teamwork += points,
        }
    }

    pub fn add_all(&mut self, bonuses: &[Bonus]) {
        for &(category, points) in bonuses {
            self.add(category, points);
        }
    }

    pub fn from_bonuses(bonuses: &[Bonus]) -> Self {
        let mut tally = Self::default();
        tally.add_all(bonuses);
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_least_inclusive() {
        let t = Threshold::AtLeast(70);
        assert!(!t.matches(69));
        assert!(t.matches(70));
        assert!(t.matches(100));
    }

    #[test]
    fn test_at_most_inclusive() {
        let t = Threshold::AtMost(30);
        assert!(t.matches(0));
        assert!(t.matches(30));
        assert!(!t.matches(31));
    }

    #[test]
    fn test_threshold_display() {
        assert_eq!(Threshold::AtLeast(60).to_string(), ">= 60");
        assert_eq!(Threshold::AtMost(30).to_string(), "<= 30");
    }

    #[test]
    fn test_tally_accumulates() {
        let mut tally = Tally::splat(40.0);
        tally.add_all(&[(Category::Technical, 10.0), (Category::ProblemSolving, 8.0)]);
        tally.add(Category::Technical, 2.0);
        assert_eq!(tally.technical, 52.0);
        assert_eq!(tally.problem_solving, 48.0);
        assert_eq!(tally.communication, 40.0);
        assert_eq!(tally.get(Category::Teamwork), 40.0);
    }

    #[test]
    fn test_slider_rule_describe() {
        let rule = SliderRule {
            slider: Slider::Routine,
            threshold: Threshold::AtMost(30),
            bonuses: &[],
        };
        assert_eq!(rule.describe(), "routine <= 30");
    }
}
