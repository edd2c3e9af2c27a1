use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use mcp9808_rs::data_types::{Resolution, ShutdownMode};
use mcp9808_rs::driver::Mcp9808;
use mcp9808_rs::error::Error;
use mcp9808_rs::registers::Register;

const ADDR: u8 = 0x18;

fn read(reg: u8, value: u16) -> I2cTrans {
    I2cTrans::write_read(ADDR, vec![reg], value.to_be_bytes().to_vec())
}

fn write(reg: u8, value: u16) -> I2cTrans {
    let [hi, lo] = value.to_be_bytes();
    I2cTrans::write(ADDR, vec![reg, hi, lo])
}

#[test]
fn init_accepts_expected_identity() {
    let expectations = [read(0x06, 0x0054), read(0x07, 0x0400)];
    let mut driver = Mcp9808::new(I2cMock::new(&expectations));
    driver.init().unwrap();
    driver.release().done();
}

#[test]
fn init_stops_after_wrong_manufacturer() {
    // DEVICE_ID must not be read
    let expectations = [read(0x06, 0x1234)];
    let mut driver = Mcp9808::new(I2cMock::new(&expectations));
    assert!(matches!(driver.init(), Err(Error::InvalidManufacturerId(0x1234))));
    driver.release().done();
}

#[test]
fn init_rejects_wrong_device() {
    let expectations = [read(0x06, 0x0054), read(0x07, 0x0401)];
    let mut driver = Mcp9808::new(I2cMock::new(&expectations));
    assert!(matches!(driver.init(), Err(Error::InvalidDeviceId(0x0401))));
    driver.release().done();
}

#[test]
fn init_surfaces_bus_error() {
    let expectations = [read(0x06, 0x0054).with_error(ErrorKind::Other)];
    let mut driver = Mcp9808::new(I2cMock::new(&expectations));
    assert!(matches!(driver.init(), Err(Error::I2c(ErrorKind::Other))));
    driver.release().done();
}

#[test]
fn is_connected_reports_bool() {
    let expectations = [
        read(0x06, 0x0054),
        read(0x07, 0x0400),
        read(0x06, 0x0054),
        read(0x07, 0xFFFF),
    ];
    let mut driver = Mcp9808::new(I2cMock::new(&expectations));
    assert!(driver.is_connected().unwrap());
    assert!(!driver.is_connected().unwrap());
    driver.release().done();
}

#[test]
fn custom_address_is_used() {
    let expectations = [I2cTrans::write_read(0x1C, vec![0x05], vec![0x01, 0x10])];
    let mut driver = Mcp9808::with_address(I2cMock::new(&expectations), 0x1C);
    assert_eq!(driver.address(), 0x1C);
    assert_eq!(driver.read_temperature_c().unwrap(), 17.0);
    driver.release().done();
}

#[test]
fn reads_temperature_in_both_units() {
    let expectations = [read(0x05, 0x0110), read(0x05, 0x0110), read(0x05, 0x1110)];
    let mut driver = Mcp9808::new(I2cMock::new(&expectations));
    assert_eq!(driver.read_temperature_c().unwrap(), 17.0);
    let f = driver.read_temperature_f().unwrap();
    assert!((f - 62.6).abs() < 1e-4);
    assert_eq!(driver.read_temperature_c().unwrap(), -239.0);
    driver.release().done();
}

#[test]
fn temperature_read_error_is_not_a_value() {
    let expectations = [read(0x05, 0x0000).with_error(ErrorKind::Other)];
    let mut driver = Mcp9808::new(I2cMock::new(&expectations));
    assert!(matches!(driver.read_temperature_c(), Err(Error::I2c(_))));
    driver.release().done();
}

#[test]
fn shutdown_twice_keeps_bit_set() {
    let expectations = [
        read(0x01, 0x0000),
        write(0x01, 0x0100),
        read(0x01, 0x0100),
        write(0x01, 0x0100),
    ];
    let mut driver = Mcp9808::new(I2cMock::new(&expectations));
    driver.set_shutdown_mode(ShutdownMode::Shutdown).unwrap();
    driver.set_shutdown_mode(ShutdownMode::Shutdown).unwrap();
    driver.release().done();
}

#[test]
fn wake_on_awake_device_keeps_bit_clear() {
    let expectations = [
        read(0x01, 0x0006),
        write(0x01, 0x0006),
        read(0x01, 0x0106),
        write(0x01, 0x0006),
    ];
    let mut driver = Mcp9808::new(I2cMock::new(&expectations));
    driver.set_shutdown_mode(ShutdownMode::Wake).unwrap();
    driver.set_shutdown_mode(ShutdownMode::Wake).unwrap();
    driver.release().done();
}

#[test]
fn is_shutdown_reads_config() {
    let expectations = [read(0x01, 0x0100), read(0x01, 0x0000)];
    let mut driver = Mcp9808::new(I2cMock::new(&expectations));
    assert!(driver.is_shutdown().unwrap());
    assert!(!driver.is_shutdown().unwrap());
    driver.release().done();
}

#[test]
fn write16_then_read16_round_trip() {
    let expectations = [write(0x02, 0x01E0), read(0x02, 0x01E0)];
    let mut driver = Mcp9808::new(I2cMock::new(&expectations));
    driver.write16(Register::UpperTemp, 0x01E0).unwrap();
    assert_eq!(driver.read16(Register::UpperTemp).unwrap(), 0x01E0);
    driver.release().done();
}

#[test]
fn resolution_uses_single_byte_register() {
    let expectations = [
        I2cTrans::write_read(ADDR, vec![0x08], vec![0x03]),
        I2cTrans::write(ADDR, vec![0x08, 0x01]),
    ];
    let mut driver = Mcp9808::new(I2cMock::new(&expectations));
    assert_eq!(driver.resolution().unwrap(), Resolution::Sixteenth);
    driver.set_resolution(Resolution::Quarter).unwrap();
    driver.release().done();
}
