#![no_std]

pub mod animation;
pub mod color;
pub mod config;
pub mod driver;
pub mod encoder;
pub mod error;
pub mod gamma;
pub mod gpio;
pub mod shared;
pub mod strip;

pub use animation::FadeSteps;
pub use color::{BLUE, GREEN, OFF, RED, Rgb, WHITE, parse_color};
pub use config::DriverConfig;
pub use driver::Driver;
pub use encoder::FrameEncoder;
pub use error::{Error, LampError};
pub use gpio::{GpioLines, Level, PinError, PinPair};
pub use shared::SharedDriver;
pub use strip::{LAMP_COUNT, Strip};

pub use embassy_time::Duration;
