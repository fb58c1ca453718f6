pub mod handlers;

pub use handlers::{AppState, EntryView, ExercisesResponse, SentenceView, router};
