use std::collections::HashMap;

/// The twelve astrological houses, in the order they appear around the
/// chart starting from twelve o'clock.
pub const HOUSES: [&str; 12] = [
    "Self",
    "Wealth",
    "Communication",
    "Home and Family",
    "Creativity",
    "Health",
    "Partnerships",
    "Transformation",
    "Philosophy",
    "Career",
    "Friendships",
    "Spirituality",
];

/// Upper bound of the radial axis.
pub const MAX_SCORE: f32 = 10.0;

/// House scores behind the radar chart. Houses without an entry score zero;
/// every score is clamped to the radial axis.
#[derive(Debug, Clone, Default)]
pub struct BirthChartData {
    scores: HashMap<&'static str, f32>,
}

impl BirthChartData {
    /// The scores drawn on every reading.
    // TODO: derive house scores from the insights section once the flow
    // returns per-house ratings; the chart currently ignores the reply.
    pub fn placeholder() -> Self {
        let mut scores = HashMap::new();
        scores.insert("Self", 8.0);
        scores.insert("Wealth", 7.0);
        scores.insert("Communication", 6.0);
        scores.insert("Career", 10.0);
        Self { scores }
    }

    pub fn score(&self, house: &str) -> f32 {
        self.scores
            .get(house)
            .copied()
            .unwrap_or(0.0)
            .clamp(0.0, MAX_SCORE)
    }
}
