//! Minimal LIS3DH driver - just enough to peek milli-g samples.

use crate::config::LIS3DH_ADDR;
use crate::error::{Error, SensorError};
use crate::meter::motion::AccelSample;
use embedded_hal_async::i2c::I2c;

/// WHO_AM_I register and its expected value.
const REG_WHO_AM_I: u8 = 0x0F;
const CHIP_ID: u8 = 0x33;

/// Control register 1: output data rate + axis enables.
/// 0x27 = 10 Hz ODR, normal mode, X/Y/Z enabled.
const REG_CTRL1: u8 = 0x20;
const CTRL1_ODR_10HZ_XYZ: u8 = 0x27;

/// Control register 4: block data update + full-scale selection.
/// 0x88 = BDU on, ±2 g, high-resolution mode.
const REG_CTRL4: u8 = 0x23;
const CTRL4_BDU_2G_HR: u8 = 0x88;

/// First output register; MSB set enables register auto-increment.
const REG_OUT_X_L: u8 = 0x28;
const AUTO_INCREMENT: u8 = 0x80;

/// LIS3DH on an I²C bus.
pub struct Lis3dh<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Lis3dh<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Probe the chip and switch it into continuous 10 Hz measurement.
    pub async fn init(&mut self) -> Result<(), Error> {
        let id = self.read_reg(REG_WHO_AM_I).await?;
        if id != CHIP_ID {
            return Err(SensorError::WrongChipId(id).into());
        }

        self.write_reg(REG_CTRL4, CTRL4_BDU_2G_HR).await?;
        self.write_reg(REG_CTRL1, CTRL1_ODR_10HZ_XYZ).await?;
        Ok(())
    }

    /// Read the latest sample without waiting for a new conversion.
    pub async fn peek(&mut self) -> Result<AccelSample, Error> {
        let mut raw = [0u8; 6];
        self.i2c
            .write_read(LIS3DH_ADDR, &[REG_OUT_X_L | AUTO_INCREMENT], &mut raw)
            .await
            .map_err(|_| SensorError::Bus)?;

        Ok(AccelSample {
            x: Self::to_mg(raw[0], raw[1]),
            y: Self::to_mg(raw[2], raw[3]),
            z: Self::to_mg(raw[4], raw[5]),
        })
    }

    /// Left-justified 12-bit reading; 1 mg/digit at ±2 g high-res.
    fn to_mg(lo: u8, hi: u8) -> i16 {
        i16::from_le_bytes([lo, hi]) >> 4
    }

    async fn read_reg(&mut self, reg: u8) -> Result<u8, SensorError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(LIS3DH_ADDR, &[reg], &mut buf)
            .await
            .map_err(|_| SensorError::Bus)?;
        Ok(buf[0])
    }

    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), SensorError> {
        self.i2c
            .write(LIS3DH_ADDR, &[reg, value])
            .await
            .map_err(|_| SensorError::Bus)
    }
}
