mod loader;

pub use loader::{load_questions_from_csv, parse_questions, LoadError, DEFAULT_QUESTIONS_PATH};
