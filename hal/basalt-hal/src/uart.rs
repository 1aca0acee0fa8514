//! UART serial port abstractions
//!
//! Provides the port trait the UART facade is written against, plus the
//! frame-format and buffer-size vocabulary used to configure a port.

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits per frame
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
    /// Driver-side receive buffer capacity
    pub rx_buffer: BufferSize,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115_200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
            rx_buffer: BufferSize::Medium,
        }
    }
}

/// Number of data bits per frame
///
/// Only 8-bit frames are exposed; the closed enum leaves room for more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    #[default]
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    #[default]
    None,
    Odd,
    Even,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    #[default]
    One,
    Two,
}

/// Driver-side receive buffer capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferSize {
    /// 64 bytes
    Small,
    /// 256 bytes
    #[default]
    Medium,
    /// 1024 bytes
    Large,
}

impl BufferSize {
    /// Buffer capacity in bytes
    pub const fn capacity(self) -> usize {
        match self {
            BufferSize::Small => 64,
            BufferSize::Medium => 256,
            BufferSize::Large => 1024,
        }
    }
}

/// UART serial port
///
/// Blocking transmit and receive against one port, plus the configuration
/// and receive-buffer queries the facade exposes. The driver owns all
/// buffering; `read_exact` blocks until the driver has produced enough
/// bytes.
pub trait UartPort {
    /// Error type for port operations
    type Error;

    /// Push a full configuration to the driver
    fn configure(&mut self, config: &UartConfig) -> Result<(), Self::Error>;

    /// Reconfigure the baud rate, leaving the frame format unchanged
    fn set_baudrate(&mut self, baudrate: u32) -> Result<(), Self::Error>;

    /// Write the whole slice, blocking until it has been accepted
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Block until the transmitter has drained
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Read until `buf` is full, blocking as needed
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Read a single byte, blocking
    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    /// Count of received bytes currently buffered by the driver
    ///
    /// Non-blocking query; the count can grow between the call and a
    /// subsequent read.
    fn rx_pending(&mut self) -> usize;

    /// Discard all received bytes currently buffered by the driver
    fn clear_rx(&mut self) -> Result<(), Self::Error>;
}
