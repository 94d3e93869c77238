pub mod config;
pub mod data;
pub mod era;
pub mod generate;
pub mod history;
pub mod slider;
pub mod storage;

// Re-exports for convenience
pub use config::{AppConfig, ConfigError};
pub use data::{LANDMARKS, LESSONS, Landmark, Lesson, QUIZZES, Quiz, landmark_by_id};
pub use era::{EraInfo, PRESENT_YEAR, future_era, past_era};
pub use generate::{GenerateError, GeneratedImage, ImageClient, TransformKind, landmark_prompt};
pub use history::{HISTORY_CAP, HistoryStore};
pub use slider::{DragGesture, YearScale};
pub use storage::{JsonStore, StorageError};
