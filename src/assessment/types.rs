use serde::{Deserialize, Serialize};
use std::fmt;

/// Skill category a rule can add points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Technical,
    Communication,
    ProblemSolving,
    Teamwork,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Technical,
        Category::Communication,
        Category::ProblemSolving,
        Category::Teamwork,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Communication => "communication",
            Category::ProblemSolving => "problemSolving",
            Category::Teamwork => "teamwork",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Highest education level reported by the student.
///
/// Unrecognized strings are kept as `Other` so they can be reported back,
/// but score with the fallback bonus. A null level reads as unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Education {
    HighSchool,
    BTech,
    Bachelor,
    Master,
    PhD,
    Other(String),
}

impl Education {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "High School" => Education::HighSchool,
            "BTech" => Education::BTech,
            "Bachelor" => Education::Bachelor,
            "Master" => Education::Master,
            "PhD" => Education::PhD,
            other => Education::Other(other.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Education::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Education::HighSchool => "High School",
            Education::BTech => "BTech",
            Education::Bachelor => "Bachelor",
            Education::Master => "Master",
            Education::PhD => "PhD",
            Education::Other(s) => s,
        }
    }
}

impl Default for Education {
    fn default() -> Self {
        Education::Other(String::new())
    }
}

impl From<String> for Education {
    fn from(s: String) -> Self {
        Education::parse(&s)
    }
}

impl From<Option<String>> for Education {
    fn from(s: Option<String>) -> Self {
        s.map(Education::from).unwrap_or_default()
    }
}

impl From<&str> for Education {
    fn from(s: &str) -> Self {
        Education::parse(s)
    }
}

impl From<Education> for String {
    fn from(e: Education) -> Self {
        e.as_str().to_string()
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work-style slider axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    Independence,
    Routine,
    Pace,
    Focus,
    Approach,
}

impl Slider {
    pub const ALL: [Slider; 5] = [
        Slider::Independence,
        Slider::Routine,
        Slider::Pace,
        Slider::Focus,
        Slider::Approach,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Slider::Independence => "independence",
            Slider::Routine => "routine",
            Slider::Pace => "pace",
            Slider::Focus => "focus",
            Slider::Approach => "approach",
        }
    }
}

pub const SLIDER_MIN: i32 = 0;
pub const SLIDER_MAX: i32 = 100;
pub const SLIDER_MIDPOINT: i32 = 50;

fn slider_midpoint() -> i32 {
    SLIDER_MIDPOINT
}

/// Five preference sliders, each expected in [0, 100].
///
/// Stored as `i32` so out-of-range input survives deserialization and can be
/// reported instead of rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SliderValues {
    #[serde(default = "slider_midpoint")]
    pub independence: i32,
    #[serde(default = "slider_midpoint")]
    pub routine: i32,
    #[serde(default = "slider_midpoint")]
    pub pace: i32,
    #[serde(default = "slider_midpoint")]
    pub focus: i32,
    #[serde(default = "slider_midpoint")]
    pub approach: i32,
}

impl Default for SliderValues {
    fn default() -> Self {
        Self {
            independence: SLIDER_MIDPOINT,
            routine: SLIDER_MIDPOINT,
            pace: SLIDER_MIDPOINT,
            focus: SLIDER_MIDPOINT,
            approach: SLIDER_MIDPOINT,
        }
    }
}

impl SliderValues {
    pub fn get(&self, slider: Slider) -> i32 {
        match slider {
            Slider::Independence => self.independence,
            Slider::Routine => self.routine,
            Slider::Pace => self.pace,
            Slider::Focus => self.focus,
            Slider::Approach => self.approach,
        }
    }

    pub fn in_range(value: i32) -> bool {
        (SLIDER_MIN..=SLIDER_MAX).contains(&value)
    }
}

pub const BUBBLE_MIN: i32 = 1;
pub const BUBBLE_MAX: i32 = 5;
pub const BUBBLE_COUNT: usize = 10;

/// Ten Likert answers, `q1`..`q10`, each 1–5 or unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BubbleAnswers {
    #[serde(default)]
    pub q1: Option<i32>,
    #[serde(default)]
    pub q2: Option<i32>,
    #[serde(default)]
    pub q3: Option<i32>,
    #[serde(default)]
    pub q4: Option<i32>,
    #[serde(default)]
    pub q5: Option<i32>,
    #[serde(default)]
    pub q6: Option<i32>,
    #[serde(default)]
    pub q7: Option<i32>,
    #[serde(default)]
    pub q8: Option<i32>,
    #[serde(default)]
    pub q9: Option<i32>,
    #[serde(default)]
    pub q10: Option<i32>,
}

impl BubbleAnswers {
    /// Build from positional answers, q1 first.
    pub fn from_array(answers: [Option<i32>; BUBBLE_COUNT]) -> Self {
        let [q1, q2, q3, q4, q5, q6, q7, q8, q9, q10] = answers;
        Self {
            q1,
            q2,
            q3,
            q4,
            q5,
            q6,
            q7,
            q8,
            q9,
            q10,
        }
    }

    /// All answers set to the same value.
    pub fn uniform(answer: i32) -> Self {
        Self::from_array([Some(answer); BUBBLE_COUNT])
    }

    /// Answers in question order. Scoring depends on position, so this is the
    /// only way the engine reads them.
    pub fn in_order(&self) -> [Option<i32>; BUBBLE_COUNT] {
        [
            self.q1, self.q2, self.q3, self.q4, self.q5, self.q6, self.q7, self.q8, self.q9,
            self.q10,
        ]
    }

    pub fn in_range(value: i32) -> bool {
        (BUBBLE_MIN..=BUBBLE_MAX).contains(&value)
    }
}

/// One assessment submission.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Assessment {
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub core_values: Vec<String>,
    #[serde(default)]
    pub sliders: SliderValues,
    #[serde(default)]
    pub bubbles: BubbleAnswers,
}

/// The four category scores handed to downstream matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub technical: i32,
    pub communication: i32,
    pub problem_solving: i32,
    pub teamwork: i32,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> i32 {
        match category {
            Category::Technical => self.technical,
            Category::Communication => self.communication,
            Category::ProblemSolving => self.problem_solving,
            Category::Teamwork => self.teamwork,
        }
    }
}
