pub mod config;
pub mod constants;
pub mod distortion;
pub mod error;
pub mod frame;
pub mod input;
pub mod item;
pub mod marquee;
pub mod math;
pub mod preview;
pub mod scroll;
pub mod wheel;

pub use config::*;
pub use constants::*;
pub use distortion::*;
pub use error::*;
pub use frame::*;
pub use input::*;
pub use item::*;
pub use marquee::*;
pub use preview::*;
pub use scroll::*;
pub use wheel::*;
