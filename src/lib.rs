//! # csv-quiz
//!
//! A line-oriented quiz runner: questions come from a `question,answer` CSV
//! file, answers come from any buffered reader.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::io;
//!
//! use csv_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions from a CSV file
//!     let mut quiz = Quiz::from_csv("problems.csv")?;
//!
//!     // Ask every question on stdout, read answers from stdin
//!     let score = quiz.run(io::stdin().lock(), io::stdout())?;
//!     println!("{} / {}", score.correct(), score.total());
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
pub mod terminal;
mod ui;

use std::io::{self, BufRead, Write};
use std::path::Path;

use thiserror::Error;
use tracing::info;

pub use app::App;
pub use data::{load_questions_from_csv, parse_questions, LoadError, DEFAULT_QUESTIONS_PATH};
pub use models::{AppState, Question, Score};
pub use ui::{render_summary, write_summary, SummaryFormat};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("failed to load questions")]
    Load(#[from] LoadError),

    /// IO error while asking questions or reading answers.
    #[error("IO error during the quiz")]
    Io(#[from] io::Error),
}

/// A quiz session that can be run over any input and output stream.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// Load a quiz from a CSV file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file, one `question,answer` record per line.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use csv_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_csv("problems.csv").expect("Failed to load quiz");
    /// ```
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_csv(path)?;
        Ok(Self::new(questions))
    }

    /// Ask every question in order and return the final score.
    ///
    /// Each prompt goes to `output`, each answer is one line of `input`.
    /// Wrong, empty and missing answers are counted, never retried. Running
    /// the same quiz again starts over with a fresh score.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<Score, QuizError> {
        self.app.restart();
        info!(total = self.app.total_questions(), "starting quiz");

        run_session(&mut self.app, &mut input, &mut output)?;

        let score = self.app.score();
        info!(correct = score.correct(), total = score.total(), "quiz finished");
        Ok(score)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_session<R: BufRead, W: Write>(
    app: &mut App,
    input: &mut R,
    output: &mut W,
) -> Result<(), QuizError> {
    app.start_quiz();

    while let Some(question) = app.current_question() {
        terminal::write_prompt(output, &question.prompt)?;
        let response = terminal::read_response(input)?;
        app.submit_answer(&response);
    }

    Ok(())
}
