pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{Gesture, LandmarkSet, classify};
pub use frameworks::config::{ServerSettings, http_port};
pub use frameworks::server::{run, run_with_config, run_with_settings};
pub use use_cases::MatchController;
