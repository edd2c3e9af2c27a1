//! Error definitions for MCP9808 driver.

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub enum Error<I2cError> {
    /// Underlying I2C transaction failed.
    I2c(I2cError),
    /// MANUF_ID register did not read back as 0x0054 (value read attached).
    InvalidManufacturerId(u16),
    /// DEVICE_ID register did not read back as 0x0400 (value read attached).
    InvalidDeviceId(u16),
}

impl<I2cError: core::fmt::Debug> core::fmt::Display for Error<I2cError> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::InvalidManufacturerId(id) => write!(f, "unexpected manufacturer id {:#06x}", id),
            Error::InvalidDeviceId(id) => write!(f, "unexpected device id {:#06x}", id),
        }
    }
}
