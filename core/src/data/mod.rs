//! Static reference content: the landmark catalog and the Time Academy
//! lesson/quiz tables.

mod educational;
mod landmarks;

pub use educational::{LESSONS, Lesson, QUIZZES, Quiz};
pub use landmarks::{CATEGORIES, LANDMARKS, Landmark};

/// Look up a landmark by its id.
pub fn landmark_by_id(id: &str) -> Option<&'static Landmark> {
    LANDMARKS.iter().find(|l| l.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landmark_lookup_by_id() {
        assert_eq!(landmark_by_id("1").unwrap().name, "Kaaba");
        assert_eq!(landmark_by_id("8").unwrap().name, "Burj Khalifa");
        assert!(landmark_by_id("999").is_none());
    }

    #[test]
    fn every_landmark_has_facts_and_predictions() {
        for landmark in LANDMARKS {
            assert!(!landmark.historical_facts.is_empty(), "{}", landmark.name);
            assert!(!landmark.future_predictions.is_empty(), "{}", landmark.name);
        }
    }

    #[test]
    fn landmark_ids_are_unique() {
        for (i, a) in LANDMARKS.iter().enumerate() {
            for b in LANDMARKS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn locked_quizzes_name_their_unlock_cost() {
        for quiz in QUIZZES {
            assert_eq!(quiz.locked, quiz.required_points.is_some(), "{}", quiz.title);
        }
    }
}
