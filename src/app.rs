use tracing::debug;

use crate::models::{AppState, Question, Score};

/// State of one quiz session over an ordered question set.
pub struct App {
    pub state: AppState,
    questions: Vec<Question>,
    score: Score,
}

impl App {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            state: AppState::Idle,
            questions,
            score: Score::new(),
        }
    }

    /// The question waiting for an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            AppState::Asking(index) => self.questions.get(index),
            AppState::Idle | AppState::Done => None,
        }
    }

    pub fn current_question_number(&self) -> Option<usize> {
        match self.state {
            AppState::Asking(index) => Some(index + 1),
            AppState::Idle | AppState::Done => None,
        }
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.state == AppState::Done
    }

    pub fn start_quiz(&mut self) {
        self.state = self.state_for(0);
    }

    /// Score the response to the current question and move to the next one.
    ///
    /// Returns whether the response matched. Outside of the asking state
    /// nothing is recorded.
    pub fn submit_answer(&mut self, response: &str) -> bool {
        let AppState::Asking(index) = self.state else {
            return false;
        };

        let Some(question) = self.questions.get(index) else {
            self.state = AppState::Done;
            return false;
        };

        let correct = question.is_answer_correct(response);
        self.score.record(correct);
        debug!(question = index + 1, correct, "answer recorded");

        self.state = self.state_for(index + 1);
        correct
    }

    pub fn restart(&mut self) {
        self.state = AppState::Idle;
        self.score = Score::new();
    }

    fn state_for(&self, index: usize) -> AppState {
        if index < self.questions.len() {
            AppState::Asking(index)
        } else {
            AppState::Done
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arithmetic() -> App {
        App::with_questions(vec![
            Question::new("5+5", "10"),
            Question::new("1+1", "2"),
            Question::new("8+3", "11"),
        ])
    }

    #[test]
    fn test_walks_every_question_in_order() {
        let mut app = arithmetic();
        assert_eq!(app.state, AppState::Idle);
        assert!(app.current_question().is_none());

        app.start_quiz();
        assert_eq!(app.current_question_number(), Some(1));
        assert_eq!(app.current_question().unwrap().prompt, "5+5");
        assert!(app.submit_answer("10"));

        assert_eq!(app.current_question().unwrap().prompt, "1+1");
        assert!(!app.submit_answer("3"));

        assert_eq!(app.current_question_number(), Some(3));
        assert!(app.submit_answer("11"));

        assert!(app.is_finished());
        assert_eq!(app.score().correct(), 2);
        assert_eq!(app.score().total(), 3);
    }

    #[test]
    fn test_empty_set_finishes_immediately() {
        let mut app = App::with_questions(Vec::new());
        app.start_quiz();
        assert!(app.is_finished());
        assert_eq!(app.score(), Score::new());
    }

    #[test]
    fn test_submit_outside_of_quiz_is_ignored() {
        let mut app = arithmetic();
        assert!(!app.submit_answer("10"));
        assert_eq!(app.score().total(), 0);

        app.start_quiz();
        for answer in ["10", "2", "11"] {
            app.submit_answer(answer);
        }
        assert!(!app.submit_answer("10"));
        assert_eq!(app.score().total(), 3);
    }

    #[test]
    fn test_submit_past_the_last_question_is_ignored() {
        let mut app = App::with_questions(vec![Question::new("1+1", "2")]);
        app.state = AppState::Asking(3);
        assert!(app.current_question().is_none());
        assert!(!app.submit_answer("2"));
        assert_eq!(app.score().total(), 0);
        assert!(app.is_finished());
    }

    #[test]
    fn test_wrong_and_empty_answers_do_not_stop_the_quiz() {
        let mut app = arithmetic();
        app.start_quiz();
        app.submit_answer("");
        app.submit_answer("wrong");
        assert_eq!(app.state, AppState::Asking(2));
        app.submit_answer("");
        assert!(app.is_finished());
        assert_eq!(app.score().correct(), 0);
        assert_eq!(app.score().total(), 3);
    }

    #[test]
    fn test_restart() {
        let mut app = arithmetic();
        app.start_quiz();
        app.submit_answer("10");
        app.restart();
        assert_eq!(app.state, AppState::Idle);
        assert_eq!(app.score(), Score::new());
        assert_eq!(app.total_questions(), 3);
        assert_eq!(app.questions()[0].prompt, "5+5");
    }
}
