//! MCP9808 Rust Driver
//!
//! Driver for the Microchip MCP9808 digital temperature sensor over I2C.
//! Built on `embedded-hal` 1.0 traits with no-std, optional async (`async` feature)
//! and optional `defmt` logging (`defmt` feature).
//!
//! ```ignore
//! let mut sensor = Mcp9808::new(i2c);
//! sensor.init()?;
//! let celsius = sensor.read_temperature_c()?;
//! sensor.set_shutdown_mode(ShutdownMode::Shutdown)?;
//! ```

#![no_std]

#[macro_use]
mod fmt;

pub mod data_types;
pub mod driver;
pub mod error;
pub mod registers;

pub use data_types::{Resolution, ShutdownMode};
pub use driver::Mcp9808;
pub use error::Error;
pub use registers::{DEFAULT_I2C_ADDRESS, Register};
