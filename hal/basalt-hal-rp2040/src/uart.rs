//! UART support for RP2040
//!
//! RP2040 has two UART peripherals (UART0 and UART1). This module tracks
//! their allocation and converts facade configuration into embassy-rp
//! configuration.

use basalt_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use embassy_rp::uart::Error as UartError;

/// UART peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartId {
    Uart0,
    Uart1,
}

/// UART allocation state
///
/// Each peripheral can back exactly one port at a time.
pub struct UartAllocator {
    taken: [bool; 2],
}

impl Default for UartAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl UartAllocator {
    /// Create a new UART allocator
    pub const fn new() -> Self {
        Self { taken: [false; 2] }
    }

    /// Claim a UART peripheral
    ///
    /// Returns `Err(())` if the peripheral is already in use.
    pub fn take(&mut self, id: UartId) -> Result<(), ()> {
        let slot = &mut self.taken[id as usize];
        if *slot {
            return Err(());
        }
        *slot = true;
        Ok(())
    }

    /// Release a UART peripheral
    pub fn release(&mut self, id: UartId) {
        self.taken[id as usize] = false;
    }

    /// Check if a peripheral is in use
    pub fn is_taken(&self, id: UartId) -> bool {
        self.taken[id as usize]
    }
}

/// Build an embassy-rp UART config from a facade config
///
/// `rx_buffer` is not part of the register config: it sizes the buffer
/// handed to the buffered driver at construction
/// (`UartConfig::rx_buffer.capacity()` bytes).
pub fn config(config: &UartConfig) -> embassy_rp::uart::Config {
    let mut out = embassy_rp::uart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Eight => embassy_rp::uart::DataBits::DataBits8,
    };
    out.parity = match config.parity {
        Parity::None => embassy_rp::uart::Parity::ParityNone,
        Parity::Odd => embassy_rp::uart::Parity::ParityOdd,
        Parity::Even => embassy_rp::uart::Parity::ParityEven,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => embassy_rp::uart::StopBits::STOP1,
        StopBits::Two => embassy_rp::uart::StopBits::STOP2,
    };
    out
}

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartPortError {
    /// Break condition on the line
    Break,
    /// Receive buffer overrun
    Overrun,
    /// Parity error
    Parity,
    /// Framing error
    Framing,
    /// Other error
    Other,
}

impl From<UartError> for UartPortError {
    fn from(e: UartError) -> Self {
        match e {
            UartError::Break => UartPortError::Break,
            UartError::Overrun => UartPortError::Overrun,
            UartError::Parity => UartPortError::Parity,
            UartError::Framing => UartPortError::Framing,
            _ => UartPortError::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator() {
        let mut alloc = UartAllocator::new();

        assert!(alloc.take(UartId::Uart0).is_ok());
        assert!(alloc.is_taken(UartId::Uart0));

        // Can't take the same peripheral twice
        assert!(alloc.take(UartId::Uart0).is_err());

        // The other one is still free
        assert!(alloc.take(UartId::Uart1).is_ok());

        // Release and re-take
        alloc.release(UartId::Uart0);
        assert!(!alloc.is_taken(UartId::Uart0));
        assert!(alloc.take(UartId::Uart0).is_ok());
    }
}
