pub mod aggregate;
pub mod color;
pub mod day;
pub mod errors;
pub mod forecast;
pub mod hardest;
pub mod heatmap;
pub mod models;
pub mod provider;
pub mod settings;
pub mod smoothing;
pub mod stats;
pub mod time_of_day;

pub use aggregate::*;
pub use color::*;
pub use day::*;
pub use errors::*;
pub use forecast::*;
pub use hardest::*;
pub use heatmap::*;
pub use models::*;
pub use provider::*;
pub use settings::*;
pub use smoothing::*;
pub use stats::*;
pub use time_of_day::*;
