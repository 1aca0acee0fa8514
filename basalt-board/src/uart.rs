//! UART facade
//!
//! Wraps one serial port handle with typed configuration and byte, slice,
//! and string transmit/receive helpers.

use core::fmt;

use basalt_hal::uart::{UartConfig, UartPort};

/// Serial port facade
///
/// Owns the port handle exclusively. Reads block until satisfied (the
/// blocking lives in the driver, not here); writes block until the driver
/// has accepted the data. Driver errors propagate unchanged.
pub struct Uart<P: UartPort> {
    port: P,
    config: UartConfig,
}

impl<P: UartPort> Uart<P> {
    /// Create a facade with the default configuration (115200 8N1)
    pub fn new(port: P) -> Result<Self, P::Error> {
        Self::with_config(port, UartConfig::default())
    }

    /// Create a facade with the given configuration
    ///
    /// Pushes the full configuration to the driver before returning.
    pub fn with_config(mut port: P, config: UartConfig) -> Result<Self, P::Error> {
        port.configure(&config)?;
        Ok(Self { port, config })
    }

    /// The configuration last accepted by the driver
    pub fn config(&self) -> &UartConfig {
        &self.config
    }

    /// The baud rate last accepted by the driver
    pub fn baudrate(&self) -> u32 {
        self.config.baudrate
    }

    /// Reconfigure the baud rate, leaving the frame format unchanged
    ///
    /// On error the cached rate is left unchanged; cache and device stay
    /// in agreement on the previous rate.
    pub fn set_baudrate(&mut self, baudrate: u32) -> Result<(), P::Error> {
        self.port.set_baudrate(baudrate)?;
        self.config.baudrate = baudrate;
        Ok(())
    }

    /// Discard all received bytes buffered by the driver
    pub fn clear_buffer(&mut self) -> Result<(), P::Error> {
        self.port.clear_rx()
    }

    /// Count of received bytes currently buffered by the driver
    pub fn bytes_available(&mut self) -> usize {
        self.port.rx_pending()
    }

    /// Write a single byte
    pub fn write_byte(&mut self, byte: u8) -> Result<(), P::Error> {
        self.port.write_all(&[byte])
    }

    /// Write the whole slice
    pub fn write(&mut self, data: &[u8]) -> Result<(), P::Error> {
        self.port.write_all(data)
    }

    /// Write the UTF-8 bytes of a string
    pub fn write_str(&mut self, text: &str) -> Result<(), P::Error> {
        self.port.write_all(text.as_bytes())
    }

    /// Block until the transmitter has drained
    pub fn flush(&mut self) -> Result<(), P::Error> {
        self.port.flush()
    }

    /// Read until `buf` is full, blocking as needed
    pub fn read(&mut self, buf: &mut [u8]) -> Result<(), P::Error> {
        self.port.read_exact(buf)
    }

    /// Read a single byte, blocking
    pub fn read_byte(&mut self) -> Result<u8, P::Error> {
        self.port.read_byte()
    }

    /// Consume the facade and hand back the live port handle
    pub fn into_inner(self) -> P {
        self.port
    }
}

/// Formatted output straight to the port, for `write!` and friends
impl<P: UartPort> fmt::Write for Uart<P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Uart::write_str(self, s).map_err(|_| fmt::Error)
    }
}
