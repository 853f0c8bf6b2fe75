use crate::models::Score;

pub fn render(score: &Score) -> String {
    format!(
        "Quiz is over! Correct answers: {} Total questions: {} ({:.0}%)",
        score.correct(),
        score.total(),
        score.percentage()
    )
}

pub fn render_json(score: &Score) -> serde_json::Result<String> {
    serde_json::to_string(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(outcomes: &[bool]) -> Score {
        let mut score = Score::new();
        for &outcome in outcomes {
            score.record(outcome);
        }
        score
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render(&score(&[true, false, true])),
            "Quiz is over! Correct answers: 2 Total questions: 3 (67%)"
        );
        assert_eq!(
            render(&Score::new()),
            "Quiz is over! Correct answers: 0 Total questions: 0 (0%)"
        );
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&score(&[true, false, true])).unwrap();
        assert_eq!(json, r#"{"correct":2,"total":3}"#);
    }
}
