//! I2C support for RP2040
//!
//! The chip has two I2C controllers. This module provides the controller
//! identifiers, conversion of facade speeds into embassy-rp configuration,
//! and error mapping.

use basalt_hal::i2c::I2cSpeed;
use embassy_rp::i2c::{AbortReason, Error as I2cError};

/// I2C controller identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cId {
    I2c0,
    I2c1,
}

/// Build an embassy-rp I2C config for the given bus speed
pub fn config(speed: I2cSpeed) -> embassy_rp::i2c::Config {
    let mut config = embassy_rp::i2c::Config::default();
    config.frequency = speed.hertz();
    config
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// NACK received
    Nack,
    /// Arbitration lost
    ArbitrationLost,
    /// Driver rejected the buffer length
    InvalidBufferLength,
    /// Address out of 7-bit range or reserved
    InvalidAddress,
    /// Other error
    Other,
}

impl From<I2cError> for I2cBusError {
    fn from(e: I2cError) -> Self {
        match e {
            I2cError::Abort(AbortReason::NoAcknowledge) => I2cBusError::Nack,
            I2cError::Abort(AbortReason::ArbitrationLoss) => I2cBusError::ArbitrationLost,
            I2cError::InvalidReadBufferLength | I2cError::InvalidWriteBufferLength => {
                I2cBusError::InvalidBufferLength
            }
            I2cError::AddressOutOfRange(_) | I2cError::AddressReserved(_) => {
                I2cBusError::InvalidAddress
            }
            _ => I2cBusError::Other,
        }
    }
}
