//! Data types for MCP9808 driver.

use crate::registers::RESOLUTION_MASK;

/// Power mode selected through CONFIG bit 8.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShutdownMode {
    /// Continuous conversion (bit 8 cleared).
    Wake,
    /// Low-power shutdown, conversions stop (bit 8 set).
    Shutdown,
}

impl ShutdownMode {
    pub fn is_shutdown(self) -> bool {
        matches!(self, ShutdownMode::Shutdown)
    }
}

/// Conversion resolution (RESOLUTION register bits 1..0).
///
/// Finer steps take longer per conversion: 30 ms at 0.5 °C up to 250 ms at 0.0625 °C.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resolution {
    /// 0.5 °C
    Half,
    /// 0.25 °C
    Quarter,
    /// 0.125 °C
    Eighth,
    /// 0.0625 °C (power-on default)
    Sixteenth,
}

impl Resolution {
    /// Register encoding.
    pub fn bits(self) -> u8 {
        match self {
            Resolution::Half => 0b00,
            Resolution::Quarter => 0b01,
            Resolution::Eighth => 0b10,
            Resolution::Sixteenth => 0b11,
        }
    }

    /// Decode from a register value; bits above 1..0 are ignored.
    pub fn from_bits(bits: u8) -> Self {
        match bits & RESOLUTION_MASK {
            0b00 => Resolution::Half,
            0b01 => Resolution::Quarter,
            0b10 => Resolution::Eighth,
            _ => Resolution::Sixteenth,
        }
    }

    /// Step size in °C.
    pub fn step_celsius(self) -> f32 {
        match self {
            Resolution::Half => 0.5,
            Resolution::Quarter => 0.25,
            Resolution::Eighth => 0.125,
            Resolution::Sixteenth => 0.0625,
        }
    }
}
