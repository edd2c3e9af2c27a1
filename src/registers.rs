//! Register map and constants for MCP9808.
//! Values are copied from the datasheet; decode helpers are pure so they can be tested without a bus.

/// Default 7-bit I2C address (A2..A0 tied low).
pub const DEFAULT_I2C_ADDRESS: u8 = 0x18;

/// Expected MANUF_ID register contents (Microchip).
pub const MANUFACTURER_ID: u16 = 0x0054;
/// Expected DEVICE_ID register contents (device id 0x04, revision 0x00).
pub const DEVICE_ID: u16 = 0x0400;

/// Register pointer values.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Register {
    /// Sensor configuration (16-bit, see [`ConfigBits`]).
    Config = 0x01,
    /// Alert upper boundary (16-bit).
    UpperTemp = 0x02,
    /// Alert lower boundary (16-bit).
    LowerTemp = 0x03,
    /// Critical temperature (16-bit).
    CritTemp = 0x04,
    /// Ambient temperature (16-bit, see [`decode_celsius`]).
    AmbientTemp = 0x05,
    /// Manufacturer id (16-bit, reads 0x0054).
    ManufacturerId = 0x06,
    /// Device id / revision (16-bit, reads 0x0400).
    DeviceId = 0x07,
    /// Conversion resolution (8-bit, bits 1..0).
    Resolution = 0x08,
}

impl Register {
    /// Register pointer byte sent on the bus.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Ambient temperature LSB is 1/16 °C.
pub const TEMP_LSB_DIV: f32 = 16.0;
/// Offset applied when the sign bit is set (13-bit two's complement).
pub const TEMP_SIGN_OFFSET: f32 = 256.0;
/// Low 12 bits of AMBIENT_TEMP hold the magnitude.
pub const TEMP_MAGNITUDE_MASK: u16 = 0x0FFF;

/// RESOLUTION register only implements bits 1..0.
pub const RESOLUTION_MASK: u8 = 0b11;

bitflags::bitflags! {
    /// CONFIG register bits (0x01). Bits 15-11 unimplemented.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct ConfigBits: u16 {
        /// Bits 10-9: TUPPER/TLOWER limit hysteresis.
        const HYST1       = 1 << 10;
        const HYST0       = 1 << 9;
        /// Bit 8: Shutdown mode (1 = low-power shutdown).
        const SHUTDOWN    = 1 << 8;
        /// Bit 7: TCRIT lock.
        const CRIT_LOCKED = 1 << 7;
        /// Bit 6: TUPPER/TLOWER window lock.
        const WIN_LOCKED  = 1 << 6;
        /// Bit 5: Interrupt clear.
        const INT_CLEAR   = 1 << 5;
        /// Bit 4: Alert output status.
        const ALERT_STAT  = 1 << 4;
        /// Bit 3: Alert output control.
        const ALERT_CTRL  = 1 << 3;
        /// Bit 2: Alert output select.
        const ALERT_SEL   = 1 << 2;
        /// Bit 1: Alert output polarity.
        const ALERT_POL   = 1 << 1;
        /// Bit 0: Alert output mode (comparator/interrupt).
        const ALERT_MODE  = 1 << 0;
    }

    /// AMBIENT_TEMP register flag bits (0x05). Bits 11-0 are the magnitude.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct AmbientBits: u16 {
        /// TA >= TCRIT.
        const CRIT  = 1 << 15;
        /// TA > TUPPER.
        const UPPER = 1 << 14;
        /// TA < TLOWER.
        const LOWER = 1 << 13;
        /// Sign (1 = TA < 0 °C).
        const SIGN  = 1 << 12;
    }
}

/// Decode a raw AMBIENT_TEMP value to °C.
///
/// Flag bits 15-13 are ignored. Bits 11-0 are scaled by 1/16 and 256 is subtracted when bit 12 is set,
/// giving a range of -256.0 to +255.9375 in 0.0625 °C steps.
pub fn decode_celsius(raw: u16) -> f32 {
    let mut temp = (raw & TEMP_MAGNITUDE_MASK) as f32 / TEMP_LSB_DIV;
    if AmbientBits::from_bits_retain(raw).contains(AmbientBits::SIGN) {
        temp -= TEMP_SIGN_OFFSET;
    }
    temp
}

/// Convert °C to °F.
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 1.8 + 32.0
}

/// Decode a raw AMBIENT_TEMP value to °F.
pub fn decode_fahrenheit(raw: u16) -> f32 {
    celsius_to_fahrenheit(decode_celsius(raw))
}

/// Apply a shutdown/wake request to a CONFIG value, leaving every other bit untouched.
///
/// Wake clears bit 8 with an AND mask, so it is a no-op on an already awake device.
pub fn apply_shutdown(config: ConfigBits, shutdown: bool) -> ConfigBits {
    let mut config = config;
    config.set(ConfigBits::SHUTDOWN, shutdown);
    config
}
