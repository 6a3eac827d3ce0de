use super::tables::{is_known_core_value, REQUIRED_CORE_VALUES};
use super::types::{Assessment, BubbleAnswers, Slider, SliderValues};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("education: unrecognized level '{0}'")]
    UnknownEducation(String),

    #[error("coreValues: expected {expected} selections, got {actual}")]
    CoreValueCount { expected: usize, actual: usize },

    #[error("coreValues[{index}]: '{value}' is not a known core value")]
    UnknownCoreValue { index: usize, value: String },

    #[error("coreValues[{index}]: '{value}' selected more than once")]
    DuplicateCoreValue { index: usize, value: String },

    #[error("sliders.{slider}: {value} is outside 0-100")]
    SliderOutOfRange { slider: &'static str, value: i32 },

    #[error("bubbles.q{question}: no answer")]
    MissingBubble { question: usize },

    #[error("bubbles.q{question}: {value} is outside 1-5")]
    BubbleOutOfRange { question: usize, value: i32 },
}

/// Check that a submission is structurally complete.
/// Returns all findings at once (not just the first).
///
/// Scoring never requires this; it exists for callers that want to refuse
/// incomplete submissions instead of scoring them leniently.
pub fn validate_assessment(assessment: &Assessment) -> Result<(), Vec<SubmissionError>> {
    let mut errors = Vec::new();

    if !assessment.education.is_recognized() {
        errors.push(SubmissionError::UnknownEducation(
            assessment.education.to_string(),
        ));
    }

    if assessment.core_values.len() != REQUIRED_CORE_VALUES {
        errors.push(SubmissionError::CoreValueCount {
            expected: REQUIRED_CORE_VALUES,
            actual: assessment.core_values.len(),
        });
    }

    let mut seen = HashSet::new();
    for (index, value) in assessment.core_values.iter().enumerate() {
        if !is_known_core_value(value) {
            errors.push(SubmissionError::UnknownCoreValue {
                index,
                value: value.clone(),
            });
        }
        if !seen.insert(value.as_str()) {
            errors.push(SubmissionError::DuplicateCoreValue {
                index,
                value: value.clone(),
            });
        }
    }

    for slider in Slider::ALL {
        let value = assessment.sliders.get(slider);
        if !SliderValues::in_range(value) {
            errors.push(SubmissionError::SliderOutOfRange {
                slider: slider.name(),
                value,
            });
        }
    }

    for (position, answer) in assessment.bubbles.in_order().into_iter().enumerate() {
        let question = position + 1;
        match answer {
            None => errors.push(SubmissionError::MissingBubble { question }),
            Some(value) if !BubbleAnswers::in_range(value) => {
                errors.push(SubmissionError::BubbleOutOfRange { question, value })
            }
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
