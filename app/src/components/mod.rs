//! UI Components
//!
//! Screens and reusable widgets. One file per screen, plus the shared
//! slider and toast primitives.

pub mod explore;
pub mod landmark_detail;
pub mod learn;
pub mod onboarding;
pub mod photo_lab;
pub mod time_slider;
pub mod time_travel;
pub mod toast;
pub mod trips;

pub use explore::ExploreScreen;
pub use learn::LearnScreen;
pub use onboarding::Onboarding;
pub use photo_lab::PhotoLabScreen;
pub use time_slider::TimeSlider;
pub use time_travel::TravelScreen;
pub use toast::{ToastFrame, use_toast, use_toast_provider};
pub use trips::TripsScreen;
