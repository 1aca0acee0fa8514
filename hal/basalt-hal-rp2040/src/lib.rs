//! RP2040-specific HAL support for the Basalt facades
//!
//! This crate maps the `basalt-hal` seams onto embassy-rp:
//!
//! - GPIO output pins implementing [`basalt_hal::gpio::OutputPin`]
//! - I2C and UART peripheral identifiers, with allocation tracking for the
//!   two UART peripherals
//! - Conversion of `basalt-hal` configuration types into embassy-rp
//!   configuration structs
//! - Error converters from embassy-rp error types
//!
//! The I2C and UART peripheral drivers themselves are used via embassy-rp
//! directly (their generics are chip- and mode-specific); this crate
//! provides the configuration and error vocabulary around them.

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod uart;

pub use gpio::Output;
pub use i2c::{I2cBusError, I2cId};
pub use uart::{UartAllocator, UartId, UartPortError};
