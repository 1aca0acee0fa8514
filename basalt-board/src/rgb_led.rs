//! RGB LED facade
//!
//! Drives three push-pull output pins, one per color channel.

use basalt_hal::gpio::OutputPin;

/// One color channel of the LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// RGB LED over three output pins
///
/// Channels are driven high for on, low for off. `set` writes the three
/// pins one after another; the channels do not change atomically.
pub struct RgbLed<P: OutputPin> {
    red: P,
    green: P,
    blue: P,
}

impl<P: OutputPin> RgbLed<P> {
    /// Take ownership of the three channel pins, all channels off
    pub fn new(red: P, green: P, blue: P) -> Self {
        let mut led = Self { red, green, blue };
        led.set(false, false, false);
        led
    }

    /// Turn one channel on
    pub fn on(&mut self, channel: Channel) {
        self.pin(channel).set_high();
    }

    /// Turn one channel off
    pub fn off(&mut self, channel: Channel) {
        self.pin(channel).set_low();
    }

    /// Write all three channel states
    pub fn set(&mut self, red: bool, green: bool, blue: bool) {
        self.red.set_state(red);
        self.green.set_state(green);
        self.blue.set_state(blue);
    }

    /// Whether a channel is currently on, from the pin's latched state
    pub fn is_on(&self, channel: Channel) -> bool {
        match channel {
            Channel::Red => self.red.is_set_high(),
            Channel::Green => self.green.is_set_high(),
            Channel::Blue => self.blue.is_set_high(),
        }
    }

    /// Consume the facade and hand back the three pins
    pub fn into_pins(self) -> (P, P, P) {
        (self.red, self.green, self.blue)
    }

    fn pin(&mut self, channel: Channel) -> &mut P {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }
}
