//! Push-pull output pins over embassy-rp GPIO

use embassy_rp::gpio::{AnyPin, Level};
use embassy_rp::Peri;

/// Push-pull output pin
///
/// Wraps an embassy-rp output. Configuring the pin happens in the
/// constructor; dropping the wrapper returns the pin to its reset state
/// via embassy-rp's own teardown.
pub struct Output<'d> {
    pin: embassy_rp::gpio::Output<'d>,
}

impl<'d> Output<'d> {
    /// Configure a pin as push-pull output, starting low
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            pin: embassy_rp::gpio::Output::new(pin, Level::Low),
        }
    }

    /// Configure a pin as push-pull output at the given starting level
    pub fn with_level(pin: Peri<'d, AnyPin>, high: bool) -> Self {
        let level = if high { Level::High } else { Level::Low };
        Self {
            pin: embassy_rp::gpio::Output::new(pin, level),
        }
    }
}

impl basalt_hal::gpio::OutputPin for Output<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

// embedded-hal 1.0 digital traits, for drivers written against those
impl embedded_hal::digital::ErrorType for Output<'_> {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for Output<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high();
        Ok(())
    }
}

impl embedded_hal::digital::StatefulOutputPin for Output<'_> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pin.is_set_high())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pin.is_set_low())
    }
}
