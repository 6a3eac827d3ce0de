use super::rules::{Bonus, Tally};
use super::tables::{
    bubble_bonuses, core_value_rule, education_bonus, BASE_SCORE, BUBBLE_THRESHOLD,
    EDUCATION_PROBLEM_SOLVING_FACTOR, SCORE_CEILING, SCORE_FLOOR, SLIDER_RULES,
};
use super::types::{
    Assessment, BubbleAnswers, Category, CategoryScores, Education, SliderValues,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub label: String,       // e.g. "Education", "Core value", "Slider", "Bubble"
    pub description: String, // e.g. "PhD", "Leadership", "independence >= 70 (82)"
    pub deltas: Tally,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub scores: CategoryScores,
    /// Totals before rounding and clamping.
    pub raw: Tally,
    pub breakdown: Vec<Contribution>,
}

/// Score a full submission, keeping a record of every rule that fired.
pub fn calculate_score(assessment: &Assessment) -> ScoreResult {
    score_parts(
        &assessment.education,
        &assessment.core_values,
        &assessment.sliders,
        &assessment.bubbles,
    )
}

/// Score the four assessment sections directly.
///
/// Never fails: unknown education levels take the fallback bonus, unknown
/// core values add nothing, and sliders or bubbles outside their range fail
/// their checks.
pub fn compute_scores<S: AsRef<str>>(
    education: &Education,
    core_values: &[S],
    sliders: &SliderValues,
    bubbles: &BubbleAnswers,
) -> CategoryScores {
    score_parts(education, core_values, sliders, bubbles).scores
}

fn score_parts<S: AsRef<str>>(
    education: &Education,
    core_values: &[S],
    sliders: &SliderValues,
    bubbles: &BubbleAnswers,
) -> ScoreResult {
    let mut total = Tally::splat(BASE_SCORE);
    let mut breakdown = Vec::new();

    let mut record = |label: &str, description: String, deltas: Tally| {
        total.technical += deltas.technical;
        total.communication += deltas.communication;
        total.problem_solving += deltas.problem_solving;
        total.teamwork += deltas.teamwork;
        tracing::trace!(label, %description, ?deltas, "rule fired");
        breakdown.push(Contribution {
            label: label.to_string(),
            description,
            deltas,
        });
    };

    // Education
    if !education.is_recognized() {
        tracing::debug!(education = %education, "unrecognized education level, using fallback bonus");
    }
    let bonus = education_bonus(education);
    let education_deltas: [Bonus; 2] = [
        (Category::Technical, bonus),
        (Category::ProblemSolving, bonus * EDUCATION_PROBLEM_SOLVING_FACTOR),
    ];
    let description = if education.as_str().is_empty() {
        "(unset)".to_string()
    } else {
        education.to_string()
    };
    record("Education", description, Tally::from_bonuses(&education_deltas));

    // Core values
    for value in core_values {
        let value = value.as_ref();
        match core_value_rule(value) {
            Some(rule) => {
                record("Core value", value.to_string(), Tally::from_bonuses(rule.bonuses))
            }
            None => tracing::debug!(value, "core value carries no points"),
        }
    }

    // Sliders
    for rule in &SLIDER_RULES {
        let value = sliders.get(rule.slider);
        if !SliderValues::in_range(value) {
            tracing::debug!(slider = rule.slider.name(), value, "slider out of range, skipping");
            continue;
        }
        if rule.threshold.matches(value) {
            record(
                "Slider",
                format!("{} ({})", rule.describe(), value),
                Tally::from_bonuses(rule.bonuses),
            );
        }
    }

    // Bubbles, strictly by question position
    for (position, answer) in bubbles.in_order().into_iter().enumerate() {
        let Some(answer) = answer else {
            continue;
        };
        if !BubbleAnswers::in_range(answer) {
            tracing::debug!(question = position + 1, answer, "bubble answer out of range, skipping");
            continue;
        }
        if answer >= BUBBLE_THRESHOLD {
            record(
                "Bubble",
                format!("q{} = {}", position + 1, answer),
                Tally::from_bonuses(bubble_bonuses(position)),
            );
        }
    }

    let scores = CategoryScores {
        technical: clamp_score(total.technical),
        communication: clamp_score(total.communication),
        problem_solving: clamp_score(total.problem_solving),
        teamwork: clamp_score(total.teamwork),
    };
    tracing::debug!(?scores, "assessment scored");

    ScoreResult {
        scores,
        raw: total,
        breakdown,
    }
}

/// Round half away from zero, then clamp to [20, 100].
pub fn clamp_score(total: f64) -> i32 {
    total
        .round()
        .clamp(f64::from(SCORE_FLOOR), f64::from(SCORE_CEILING)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sliders(independence: i32, routine: i32, pace: i32, focus: i32, approach: i32) -> SliderValues {
        SliderValues {
            independence,
            routine,
            pace,
            focus,
            approach,
        }
    }

    fn scores(technical: i32, communication: i32, problem_solving: i32, teamwork: i32) -> CategoryScores {
        CategoryScores {
            technical,
            communication,
            problem_solving,
            teamwork,
        }
    }

    const NO_VALUES: &[&str] = &[];

    fn in_range(s: &CategoryScores) -> bool {
        Category::ALL
            .iter()
            .all(|c| (SCORE_FLOOR..=SCORE_CEILING).contains(&s.get(*c)))
    }

    #[test]
    fn test_neutral_submission() {
        let result = compute_scores(
            &Education::Bachelor,
            NO_VALUES,
            &SliderValues::default(),
            &BubbleAnswers::default(),
        );
        assert_eq!(result, scores(55, 40, 52, 40));
    }

    #[test]
    fn test_neutral_with_low_bubbles() {
        let result = compute_scores(
            &Education::Bachelor,
            NO_VALUES,
            &SliderValues::default(),
            &BubbleAnswers::uniform(2),
        );
        assert_eq!(result, scores(55, 40, 52, 40));
    }

    #[test]
    fn test_unknown_education_uses_fallback() {
        let result = compute_scores(
            &Education::parse("Bootcamp"),
            NO_VALUES,
            &SliderValues::default(),
            &BubbleAnswers::default(),
        );
        // 40 + 10, 40 + 8
        assert_eq!(result, scores(50, 40, 48, 40));
    }

    #[test]
    fn test_saturation_hits_ceiling() {
        let values = ["Leadership", "Collaboration", "Data-Driven", "Customer Focus", "Communication"];
        let result = compute_scores(
            &Education::PhD,
            &values,
            &sliders(100, 0, 100, 100, 100),
            &BubbleAnswers::uniform(5),
        );
        assert_eq!(result, scores(100, 100, 100, 100));
    }

    #[test]
    fn test_floor_case_stays_in_range() {
        let result = compute_scores(
            &Education::HighSchool,
            NO_VALUES,
            &SliderValues::default(),
            &BubbleAnswers::uniform(1),
        );
        assert_eq!(result, scores(45, 40, 44, 40));
        assert!(in_range(&result));
    }

    #[test]
    fn test_clamp_floor_and_ceiling_bind() {
        assert_eq!(clamp_score(-15.0), 20);
        assert_eq!(clamp_score(12.0), 20);
        assert_eq!(clamp_score(20.0), 20);
        assert_eq!(clamp_score(100.0), 100);
        assert_eq!(clamp_score(140.0), 100);
    }

    #[test]
    fn test_clamp_rounds_half_away_from_zero() {
        assert_eq!(clamp_score(54.4), 54);
        assert_eq!(clamp_score(54.5), 55);
    }

    #[test]
    fn test_master_education_rounds_problem_solving() {
        let result = compute_scores(
            &Education::Master,
            NO_VALUES,
            &SliderValues::default(),
            &BubbleAnswers::default(),
        );
        // 18 * 0.8 = 14.4
        assert_eq!(result, scores(58, 40, 54, 40));
    }

    #[test]
    fn test_three_core_values_partial_contribution() {
        let values = ["Leadership", "Integrity", "Innovation"];
        let result = compute_scores(
            &Education::Bachelor,
            &values,
            &SliderValues::default(),
            &BubbleAnswers::default(),
        );
        // Leadership: comm +8, ps +4, team +6; Integrity: nothing; Innovation: tech +6, ps +8
        assert_eq!(result, scores(61, 48, 64, 46));
        assert!(in_range(&result));
    }

    #[test]
    fn test_unknown_core_value_contributes_nothing() {
        let base = compute_scores(
            &Education::Bachelor,
            NO_VALUES,
            &SliderValues::default(),
            &BubbleAnswers::default(),
        );
        let with_unknown = compute_scores(
            &Education::Bachelor,
            &["Punctuality", "Empathy", "leadership"],
            &SliderValues::default(),
            &BubbleAnswers::default(),
        );
        assert_eq!(base, with_unknown);
    }

    #[test]
    fn test_mixed_submission() {
        let mut bubbles = BubbleAnswers::default();
        bubbles.q1 = Some(3);
        bubbles.q2 = Some(2);
        bubbles.q4 = Some(5);
        bubbles.q5 = Some(3);

        let result = compute_scores(
            &Education::Master,
            &["Innovation", "Integrity", "Empathy"],
            &sliders(70, 50, 50, 50, 50),
            &bubbles,
        );
        assert_eq!(result, scores(89, 42, 84, 42));
    }

    #[test]
    fn test_slider_boundaries_are_inclusive() {
        let at_edge = compute_scores(
            &Education::Bachelor,
            NO_VALUES,
            &sliders(70, 30, 60, 60, 60),
            &BubbleAnswers::default(),
        );
        // tech 55 + 10 + 8 + 8 + 12, ps 52 + 8 + 12 + 10 + 8
        assert_eq!(at_edge, scores(93, 50, 90, 52));

        let just_inside = compute_scores(
            &Education::Bachelor,
            NO_VALUES,
            &sliders(69, 31, 59, 59, 59),
            &BubbleAnswers::default(),
        );
        assert_eq!(just_inside, scores(55, 40, 52, 40));
    }

    #[test]
    fn test_out_of_range_slider_fails_its_check() {
        let result = compute_scores(
            &Education::Bachelor,
            NO_VALUES,
            &sliders(250, -10, 50, 50, 101),
            &BubbleAnswers::default(),
        );
        assert_eq!(result, scores(55, 40, 52, 40));
    }

    #[test]
    fn test_out_of_range_bubble_fails_its_check() {
        let mut bubbles = BubbleAnswers::default();
        bubbles.q1 = Some(9);
        bubbles.q5 = Some(-3);
        let result = compute_scores(
            &Education::Bachelor,
            NO_VALUES,
            &SliderValues::default(),
            &bubbles,
        );
        assert_eq!(result, scores(55, 40, 52, 40));
    }

    #[test]
    fn test_bubble_positions_map_to_distinct_bonuses() {
        let expected = [
            scores(60, 40, 60, 40),
            scores(55, 45, 52, 48),
            scores(55, 48, 52, 44),
            scores(63, 40, 56, 40),
            scores(57, 42, 54, 42),
        ];
        for (position, want) in expected.iter().enumerate() {
            let mut answers = [None; 10];
            answers[position] = Some(3);
            let result = compute_scores(
                &Education::Bachelor,
                NO_VALUES,
                &SliderValues::default(),
                &BubbleAnswers::from_array(answers),
            );
            assert_eq!(&result, want, "q{}", position + 1);
        }
    }

    #[test]
    fn test_trailing_bubbles_add_uniformly() {
        let mut answers = [None; 10];
        for slot in answers.iter_mut().skip(4) {
            *slot = Some(4);
        }
        let result = compute_scores(
            &Education::Bachelor,
            NO_VALUES,
            &SliderValues::default(),
            &BubbleAnswers::from_array(answers),
        );
        assert_eq!(result, scores(67, 52, 64, 52));
    }

    #[test]
    fn test_idempotent() {
        let assessment = Assessment {
            education: Education::PhD,
            core_values: vec!["Creativity".to_string(), "Adaptability".to_string()],
            sliders: sliders(80, 20, 65, 40, 70),
            bubbles: BubbleAnswers::uniform(4),
        };
        let first = calculate_score(&assessment);
        let second = calculate_score(&assessment);
        assert_eq!(first, second);
    }

    #[test]
    fn test_independence_is_locally_monotonic() {
        let below = compute_scores(
            &Education::Bachelor,
            NO_VALUES,
            &sliders(69, 50, 50, 50, 50),
            &BubbleAnswers::default(),
        );
        for independence in 70..=100 {
            let above = compute_scores(
                &Education::Bachelor,
                NO_VALUES,
                &sliders(independence, 50, 50, 50, 50),
                &BubbleAnswers::default(),
            );
            assert!(above.technical >= below.technical);
            assert!(above.problem_solving >= below.problem_solving);
        }
    }

    #[test]
    fn test_range_invariant_across_inputs() {
        let educations = [
            Education::HighSchool,
            Education::Bachelor,
            Education::PhD,
            Education::parse("unknown"),
        ];
        let value_sets: [&[&str]; 3] = [
            &[],
            &["Leadership", "Collaboration", "Communication"],
            &["Data-Driven", "Innovation", "Continuous Learning", "Attention to Detail", "Creativity"],
        ];
        for education in &educations {
            for values in &value_sets {
                for level in [0, 30, 50, 70, 100] {
                    for answer in 1..=5 {
                        let result = compute_scores(
                            education,
                            *values,
                            &sliders(level, level, level, level, level),
                            &BubbleAnswers::uniform(answer),
                        );
                        assert!(in_range(&result), "{:?}", result);
                    }
                }
            }
        }
    }

    #[test]
    fn test_breakdown_records_fired_rules() {
        let mut bubbles = BubbleAnswers::default();
        bubbles.q2 = Some(4);
        let assessment = Assessment {
            education: Education::PhD,
            core_values: vec!["Leadership".to_string(), "Integrity".to_string()],
            sliders: sliders(82, 50, 50, 50, 50),
            bubbles,
        };
        let result = calculate_score(&assessment);
        let labels: Vec<&str> = result.breakdown.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Education", "Core value", "Slider", "Bubble"]);
        assert_eq!(result.breakdown[2].description, "independence >= 70 (82)");
        assert_eq!(result.breakdown[3].description, "q2 = 4");
        assert_eq!(result.raw.problem_solving, 40.0 + 16.0 + 4.0 + 8.0);
    }

    #[test]
    fn test_duplicate_core_values_each_count() {
        let result = compute_scores(
            &Education::Bachelor,
            &["Collaboration", "Collaboration"],
            &SliderValues::default(),
            &BubbleAnswers::default(),
        );
        assert_eq!(result, scores(55, 52, 52, 60));
    }
}
