pub mod engine;
pub mod loader;
pub mod rules;
pub mod tables;
pub mod types;
pub mod validation;

pub use engine::{calculate_score, clamp_score, compute_scores, Contribution, ScoreResult};
pub use loader::{load_assessment, parse_assessment};
pub use rules::{Tally, Threshold};
pub use types::{
    Assessment, BubbleAnswers, Category, CategoryScores, Education, Slider, SliderValues,
};
pub use validation::{validate_assessment, SubmissionError};
