//! Typed peripheral facades for embedded boards
//!
//! Each facade owns one peripheral handle and forwards every operation to
//! the driver behind a [`basalt_hal`] trait, contributing parameter
//! marshaling, defaults, and enum-to-raw-value mapping - nothing else. No
//! facade adds buffering, retries, validation, or locking on top of what
//! the driver provides.
//!
//! - [`I2c`] - master-mode two-wire bus
//! - [`Uart`] - serial port
//! - [`RgbLed`] - three push-pull output pins driving an RGB LED
//!
//! # Lifecycle
//!
//! A facade acquires its handle at construction (pushing its starting
//! configuration to the driver) and releases it when dropped; the chip HAL
//! deinitializes the peripheral in the handle's own `Drop`, so release
//! happens exactly once. `into_inner`/`into_pins` hand the live handle back
//! instead.
//!
//! # Configuration mirror
//!
//! Facades cache the configuration they last pushed (bus speed, baud rate).
//! Setters push to the driver first and update the cache only on success,
//! so the cache always matches what the device last accepted.
//!
//! # Concurrency
//!
//! Single-threaded and blocking throughout. A facade neither locks nor
//! queues; sharing one instance between contexts is on the caller and the
//! driver's own thread-safety.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod i2c;
pub mod rgb_led;
pub mod uart;

pub use i2c::I2c;
pub use rgb_led::{Channel, RgbLed};
pub use uart::Uart;
