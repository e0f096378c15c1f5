pub mod camera;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod hud;
pub mod landmarks;
pub mod picking;
pub mod target;
pub mod world;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use gesture::*;
pub use hud::*;
pub use landmarks::{HandLandmarks, Landmark};
pub use picking::*;
pub use target::*;
pub use world::*;
