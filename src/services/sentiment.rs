use std::fmt::Display;

use crate::dom::Node;

pub const POSITIVE_THRESHOLD: f64 = 70.0;
pub const NEUTRAL_THRESHOLD: f64 = 40.0;

/// Coarse reading of a 0-100 sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Labels a score. Zero is a real score; only a missing one has no label.
    pub fn from_score(score: Option<f64>) -> Option<Self> {
        let score = score?;
        Some(if score >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score >= NEUTRAL_THRESHOLD {
            SentimentLabel::Neutral
        } else {
            SentimentLabel::Negative
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "green",
            SentimentLabel::Neutral => "orange",
            SentimentLabel::Negative => "red",
        }
    }

    /// Bold coloured span shown next to the percentage
    pub fn to_node(self) -> Node {
        Node::new("span")
            .class("sentiment-label")
            .attr(
                "style",
                format!("color:{};font-weight:bold;", self.color()),
            )
            .text(self.as_str())
    }
}

impl Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Percentage text for a score, or "N/A" when there is none
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{}%", score),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(SentimentLabel::from_score(Some(70.0)), Some(SentimentLabel::Positive));
        assert_eq!(SentimentLabel::from_score(Some(100.0)), Some(SentimentLabel::Positive));
        assert_eq!(SentimentLabel::from_score(Some(69.0)), Some(SentimentLabel::Neutral));
        assert_eq!(SentimentLabel::from_score(Some(69.9)), Some(SentimentLabel::Neutral));
        assert_eq!(SentimentLabel::from_score(Some(40.0)), Some(SentimentLabel::Neutral));
        assert_eq!(SentimentLabel::from_score(Some(39.0)), Some(SentimentLabel::Negative));
    }

    #[test]
    fn test_zero_is_negative_not_absent() {
        assert_eq!(SentimentLabel::from_score(Some(0.0)), Some(SentimentLabel::Negative));
        assert_eq!(SentimentLabel::from_score(None), None);
    }

    #[test]
    fn test_label_node_styling() {
        let node = SentimentLabel::Neutral.to_node();
        assert_eq!(node.text_content(), "Neutral");
        assert_eq!(node.attribute("style"), Some("color:orange;font-weight:bold;"));
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(85.0)), "85%");
        assert_eq!(format_score(Some(72.5)), "72.5%");
        assert_eq!(format_score(Some(0.0)), "0%");
        assert_eq!(format_score(None), "N/A");
    }
}
