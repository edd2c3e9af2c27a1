//! MCP9808 driver.
//! Blocking I2C API; the async version mirrors it behind the `async` feature with `_async` suffixes.

use crate::data_types::{Resolution, ShutdownMode};
use crate::error::Error;
use crate::registers::{
    apply_shutdown, decode_celsius, decode_fahrenheit, ConfigBits, Register, DEFAULT_I2C_ADDRESS, DEVICE_ID,
    MANUFACTURER_ID, RESOLUTION_MASK,
};

/// MCP9808 temperature sensor on an I2C bus.
pub struct Mcp9808<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Mcp9808<I2C> {
    /// Create a new driver instance with the default I2C address (0x18).
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: DEFAULT_I2C_ADDRESS,
        }
    }

    /// Create a new driver instance with a custom I2C address (0x18..=0x1F via A2..A0).
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Destroy the driver and return the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

/// Identity check shared by blocking and async paths.
fn check_identity<E>(manufacturer: u16, device: Option<u16>) -> Result<(), Error<E>> {
    if manufacturer != MANUFACTURER_ID {
        warn!("unexpected manufacturer id {=u16:#x}", manufacturer);
        return Err(Error::InvalidManufacturerId(manufacturer));
    }
    match device {
        Some(id) if id != DEVICE_ID => {
            warn!("unexpected device id {=u16:#x}", id);
            Err(Error::InvalidDeviceId(id))
        }
        _ => Ok(()),
    }
}

fn identity_as_bool<E>(result: Result<(), Error<E>>) -> Result<bool, Error<E>> {
    match result {
        Ok(()) => Ok(true),
        Err(Error::InvalidManufacturerId(_)) | Err(Error::InvalidDeviceId(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

impl<I2C> Mcp9808<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Verify the device identity (MANUF_ID = 0x0054, DEVICE_ID = 0x0400).
    ///
    /// DEVICE_ID is only read when the manufacturer id matches. There is no retry.
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        let manufacturer = self.read_manufacturer_id()?;
        check_identity(manufacturer, None)?;
        let device = self.read_device_id()?;
        check_identity(manufacturer, Some(device))?;
        debug!("mcp9808 found at {=u8:#x}", self.address);
        Ok(())
    }

    /// Same reads as [`init`](Self::init), but an identity mismatch yields `Ok(false)` instead of an error.
    pub fn is_connected(&mut self) -> Result<bool, Error<I2C::Error>> {
        identity_as_bool(self.init())
    }

    /// Read a 16-bit big-endian register.
    pub fn read16(&mut self, reg: Register) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[reg.addr()], &mut buf)
            .map_err(Error::I2c)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Write a 16-bit register, high byte first.
    pub fn write16(&mut self, reg: Register, value: u16) -> Result<(), Error<I2C::Error>> {
        let [hi, lo] = value.to_be_bytes();
        self.i2c
            .write(self.address, &[reg.addr(), hi, lo])
            .map_err(Error::I2c)
    }

    /// Read an 8-bit register (RESOLUTION).
    pub fn read8(&mut self, reg: Register) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg.addr()], &mut buf)
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    /// Write an 8-bit register (RESOLUTION).
    pub fn write8(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[reg.addr(), value])
            .map_err(Error::I2c)
    }

    pub fn read_manufacturer_id(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read16(Register::ManufacturerId)
    }

    /// Device id in the high byte, silicon revision in the low byte.
    pub fn read_device_id(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read16(Register::DeviceId)
    }

    /// Raw AMBIENT_TEMP contents, flag bits included.
    pub fn read_ambient_raw(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read16(Register::AmbientTemp)
    }

    /// Ambient temperature in °C.
    pub fn read_temperature_c(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = self.read_ambient_raw()?;
        Ok(decode_celsius(raw))
    }

    /// Ambient temperature in °F. Performs its own register read.
    pub fn read_temperature_f(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = self.read_ambient_raw()?;
        Ok(decode_fahrenheit(raw))
    }

    /// Read CONFIG. Unimplemented bits are kept as read.
    pub fn read_config(&mut self) -> Result<ConfigBits, Error<I2C::Error>> {
        let val = self.read16(Register::Config)?;
        Ok(ConfigBits::from_bits_retain(val))
    }

    pub fn write_config(&mut self, config: ConfigBits) -> Result<(), Error<I2C::Error>> {
        debug!("config <- {=u16:#x}", config.bits());
        self.write16(Register::Config, config.bits())
    }

    /// Enter or leave low-power shutdown (CONFIG bit 8, read-modify-write).
    ///
    /// Both directions are idempotent: wake clears the bit with an AND mask rather than toggling it,
    /// so waking an already awake device leaves it awake.
    pub fn set_shutdown_mode(&mut self, mode: ShutdownMode) -> Result<(), Error<I2C::Error>> {
        let config = self.read_config()?;
        self.write_config(apply_shutdown(config, mode.is_shutdown()))
    }

    /// Whether the device is currently in shutdown.
    pub fn is_shutdown(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.read_config()?.contains(ConfigBits::SHUTDOWN))
    }

    pub fn resolution(&mut self) -> Result<Resolution, Error<I2C::Error>> {
        let val = self.read8(Register::Resolution)?;
        Ok(Resolution::from_bits(val))
    }

    pub fn set_resolution(&mut self, resolution: Resolution) -> Result<(), Error<I2C::Error>> {
        self.write8(Register::Resolution, resolution.bits() & RESOLUTION_MASK)
    }
}

#[cfg(feature = "async")]
impl<I2C> Mcp9808<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Async version of [`init`](Self::init).
    pub async fn init_async(&mut self) -> Result<(), Error<I2C::Error>> {
        let manufacturer = self.read_manufacturer_id_async().await?;
        check_identity(manufacturer, None)?;
        let device = self.read_device_id_async().await?;
        check_identity(manufacturer, Some(device))?;
        debug!("mcp9808 found at {=u8:#x}", self.address);
        Ok(())
    }

    pub async fn is_connected_async(&mut self) -> Result<bool, Error<I2C::Error>> {
        identity_as_bool(self.init_async().await)
    }

    pub async fn read16_async(&mut self, reg: Register) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[reg.addr()], &mut buf)
            .await
            .map_err(Error::I2c)?;
        Ok(u16::from_be_bytes(buf))
    }

    pub async fn write16_async(&mut self, reg: Register, value: u16) -> Result<(), Error<I2C::Error>> {
        let [hi, lo] = value.to_be_bytes();
        self.i2c
            .write(self.address, &[reg.addr(), hi, lo])
            .await
            .map_err(Error::I2c)
    }

    pub async fn read8_async(&mut self, reg: Register) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg.addr()], &mut buf)
            .await
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    pub async fn write8_async(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[reg.addr(), value])
            .await
            .map_err(Error::I2c)
    }

    pub async fn read_manufacturer_id_async(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read16_async(Register::ManufacturerId).await
    }

    pub async fn read_device_id_async(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read16_async(Register::DeviceId).await
    }

    pub async fn read_ambient_raw_async(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read16_async(Register::AmbientTemp).await
    }

    pub async fn read_temperature_c_async(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = self.read_ambient_raw_async().await?;
        Ok(decode_celsius(raw))
    }

    pub async fn read_temperature_f_async(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = self.read_ambient_raw_async().await?;
        Ok(decode_fahrenheit(raw))
    }

    pub async fn read_config_async(&mut self) -> Result<ConfigBits, Error<I2C::Error>> {
        let val = self.read16_async(Register::Config).await?;
        Ok(ConfigBits::from_bits_retain(val))
    }

    pub async fn write_config_async(&mut self, config: ConfigBits) -> Result<(), Error<I2C::Error>> {
        debug!("config <- {=u16:#x}", config.bits());
        self.write16_async(Register::Config, config.bits()).await
    }

    pub async fn set_shutdown_mode_async(&mut self, mode: ShutdownMode) -> Result<(), Error<I2C::Error>> {
        let config = self.read_config_async().await?;
        self.write_config_async(apply_shutdown(config, mode.is_shutdown()))
            .await
    }

    pub async fn is_shutdown_async(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self
            .read_config_async()
            .await?
            .contains(ConfigBits::SHUTDOWN))
    }

    pub async fn resolution_async(&mut self) -> Result<Resolution, Error<I2C::Error>> {
        let val = self.read8_async(Register::Resolution).await?;
        Ok(Resolution::from_bits(val))
    }

    pub async fn set_resolution_async(&mut self, resolution: Resolution) -> Result<(), Error<I2C::Error>> {
        self.write8_async(Register::Resolution, resolution.bits() & RESOLUTION_MASK)
            .await
    }
}
