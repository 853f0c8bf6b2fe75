/// One question/answer pair loaded from a CSV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub expected_answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, expected_answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expected_answer: expected_answer.into(),
        }
    }

    /// Exact comparison: case, whitespace and formatting all count.
    pub fn is_answer_correct(&self, response: &str) -> bool {
        response == self.expected_answer
    }
}
