//! Score → label ladder shared by every place that labels a score

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLabel {
    Excellent,
    Good,
    Satisfactory,
    NeedsImprovement,
    Critical,
    NotEvaluated,
}

impl ScoreLabel {
    /// Map a percentage score onto the label ladder
    ///
    /// Absent, zero and NaN scores are "not evaluated"; everything else
    /// follows the `>=` thresholds 90/80/70/60.
    pub fn from_score(score: Option<f64>) -> Self {
        let score = match score {
            Some(s) if !s.is_nan() && s != 0.0 => s,
            _ => return ScoreLabel::NotEvaluated,
        };

        if score >= 90.0 {
            ScoreLabel::Excellent
        } else if score >= 80.0 {
            ScoreLabel::Good
        } else if score >= 70.0 {
            ScoreLabel::Satisfactory
        } else if score >= 60.0 {
            ScoreLabel::NeedsImprovement
        } else {
            ScoreLabel::Critical
        }
    }

    /// Label for the overall score badge
    pub fn badge_for(overall: Option<f64>) -> Self {
        Self::from_score(overall)
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            ScoreLabel::Excellent => "score.excellent",
            ScoreLabel::Good => "score.good",
            ScoreLabel::Satisfactory => "score.satisfactory",
            ScoreLabel::NeedsImprovement => "score.needs_improvement",
            ScoreLabel::Critical => "score.critical",
            ScoreLabel::NotEvaluated => "score.not_evaluated",
        }
    }

    /// Position on the ladder, higher is better; `NotEvaluated` ranks lowest
    fn rank(&self) -> u8 {
        match self {
            ScoreLabel::NotEvaluated => 0,
            ScoreLabel::Critical => 1,
            ScoreLabel::NeedsImprovement => 2,
            ScoreLabel::Satisfactory => 3,
            ScoreLabel::Good => 4,
            ScoreLabel::Excellent => 5,
        }
    }
}

impl PartialOrd for ScoreLabel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoreLabel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}
