//! I2C facade
//!
//! Wraps one master-mode bus handle with typed speed configuration and
//! byte/slice transfer helpers.

use basalt_hal::i2c::{I2cBus, I2cSpeed};

/// Master-mode I2C bus facade
///
/// Owns the bus handle exclusively. Transfers are blocking and forwarded
/// 1:1 to the driver; driver errors propagate unchanged. Slice lengths and
/// addresses are not validated here - the driver decides what it accepts.
pub struct I2c<B: I2cBus> {
    bus: B,
    speed: I2cSpeed,
}

impl<B: I2cBus> I2c<B> {
    /// Create a facade at standard speed (100 kHz)
    pub fn new(bus: B) -> Result<Self, B::Error> {
        Self::with_speed(bus, I2cSpeed::Standard)
    }

    /// Create a facade at the given speed
    ///
    /// Pushes the speed to the driver before returning, so the bus is
    /// ready for transfers.
    pub fn with_speed(mut bus: B, speed: I2cSpeed) -> Result<Self, B::Error> {
        bus.set_frequency(speed.hertz())?;
        Ok(Self { bus, speed })
    }

    /// The speed last accepted by the driver
    pub fn speed(&self) -> I2cSpeed {
        self.speed
    }

    /// Reconfigure the bus speed
    ///
    /// On error the cached speed is left unchanged; cache and device stay
    /// in agreement on the previous speed.
    pub fn set_speed(&mut self, speed: I2cSpeed) -> Result<(), B::Error> {
        self.bus.set_frequency(speed.hertz())?;
        self.speed = speed;
        Ok(())
    }

    /// Read one byte from the device at `address`
    pub fn read_byte(&mut self, address: u8) -> Result<u8, B::Error> {
        let mut buf = [0u8; 1];
        self.bus.read(address, &mut buf)?;
        Ok(buf[0])
    }

    /// Read from the device at `address` until `buf` is full
    pub fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), B::Error> {
        self.bus.read(address, buf)
    }

    /// Write one byte to the device at `address`
    pub fn write_byte(&mut self, address: u8, byte: u8) -> Result<(), B::Error> {
        self.bus.write(address, &[byte])
    }

    /// Write `data` to the device at `address`
    pub fn write(&mut self, address: u8, data: &[u8]) -> Result<(), B::Error> {
        self.bus.write(address, data)
    }

    /// Write `data` then read into `buf` in one transaction (repeated start)
    ///
    /// The usual register-access pattern: write the register address, read
    /// its value without releasing the bus in between.
    pub fn write_read(
        &mut self,
        address: u8,
        data: &[u8],
        buf: &mut [u8],
    ) -> Result<(), B::Error> {
        self.bus.write_read(address, data, buf)
    }

    /// Consume the facade and hand back the live bus handle
    pub fn into_inner(self) -> B {
        self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One bus transaction as observed by the mock driver
    #[derive(Debug, PartialEq, Eq)]
    enum Transaction {
        SetFrequency(u32),
        Write { address: u8, data: Vec<u8> },
        Read { address: u8, len: usize },
        WriteRead { address: u8, data: Vec<u8>, len: usize },
    }

    /// Mock bus recording every driver call
    struct MockBus {
        transactions: Vec<Transaction>,
        /// Bytes served to reads, front first
        rx: Vec<u8>,
        fail_set_frequency: bool,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                transactions: Vec::new(),
                rx: Vec::new(),
                fail_set_frequency: false,
            }
        }

        fn with_rx(rx: &[u8]) -> Self {
            let mut bus = Self::new();
            bus.rx = rx.to_vec();
            bus
        }

        fn fill(&mut self, buf: &mut [u8]) {
            for slot in buf.iter_mut() {
                *slot = self.rx.remove(0);
            }
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    struct MockError;

    impl I2cBus for MockBus {
        type Error = MockError;

        fn set_frequency(&mut self, hz: u32) -> Result<(), MockError> {
            if self.fail_set_frequency {
                return Err(MockError);
            }
            self.transactions.push(Transaction::SetFrequency(hz));
            Ok(())
        }

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), MockError> {
            self.transactions.push(Transaction::Write {
                address,
                data: data.to_vec(),
            });
            Ok(())
        }

        fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), MockError> {
            self.transactions.push(Transaction::Read {
                address,
                len: buf.len(),
            });
            self.fill(buf);
            Ok(())
        }

        fn write_read(
            &mut self,
            address: u8,
            data: &[u8],
            buf: &mut [u8],
        ) -> Result<(), MockError> {
            self.transactions.push(Transaction::WriteRead {
                address,
                data: data.to_vec(),
                len: buf.len(),
            });
            self.fill(buf);
            Ok(())
        }
    }

    #[test]
    fn test_construction_pushes_standard_speed() {
        let i2c = I2c::new(MockBus::new()).unwrap();
        assert_eq!(i2c.speed(), I2cSpeed::Standard);
        assert_eq!(
            i2c.into_inner().transactions,
            [Transaction::SetFrequency(100_000)]
        );
    }

    #[test]
    fn test_set_speed_roundtrip() {
        let mut i2c = I2c::new(MockBus::new()).unwrap();
        for speed in [I2cSpeed::Standard, I2cSpeed::Fast, I2cSpeed::FastPlus] {
            i2c.set_speed(speed).unwrap();
            assert_eq!(i2c.speed(), speed);
        }
        let bus = i2c.into_inner();
        assert_eq!(
            bus.transactions,
            [
                Transaction::SetFrequency(100_000),
                Transaction::SetFrequency(100_000),
                Transaction::SetFrequency(400_000),
                Transaction::SetFrequency(1_000_000),
            ]
        );
    }

    #[test]
    fn test_failed_set_speed_keeps_cache() {
        let mut i2c = I2c::with_speed(MockBus::new(), I2cSpeed::Fast).unwrap();
        i2c.bus.fail_set_frequency = true;
        assert_eq!(i2c.set_speed(I2cSpeed::FastPlus), Err(MockError));
        // Cache still matches the last speed the driver accepted
        assert_eq!(i2c.speed(), I2cSpeed::Fast);
    }

    #[test]
    fn test_read_byte() {
        let mut i2c = I2c::new(MockBus::with_rx(&[0xAB])).unwrap();
        assert_eq!(i2c.read_byte(0x50), Ok(0xAB));
        assert!(i2c
            .into_inner()
            .transactions
            .contains(&Transaction::Read { address: 0x50, len: 1 }));
    }

    #[test]
    fn test_read_fills_whole_buffer() {
        let mut i2c = I2c::new(MockBus::with_rx(&[1, 2, 3, 4])).unwrap();
        let mut buf = [0u8; 4];
        i2c.read(0x50, &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_length_read_passes_through() {
        let mut i2c = I2c::new(MockBus::new()).unwrap();
        let mut buf = [0u8; 0];
        i2c.read(0x50, &mut buf).unwrap();
        // Forwarded to the driver unvalidated
        assert!(i2c
            .into_inner()
            .transactions
            .contains(&Transaction::Read { address: 0x50, len: 0 }));
    }

    #[test]
    fn test_write_byte_and_slice() {
        let mut i2c = I2c::new(MockBus::new()).unwrap();
        i2c.write_byte(0x21, 0x7F).unwrap();
        i2c.write(0x21, &[0x01, 0x02]).unwrap();
        let bus = i2c.into_inner();
        assert!(bus.transactions.contains(&Transaction::Write {
            address: 0x21,
            data: vec![0x7F],
        }));
        assert!(bus.transactions.contains(&Transaction::Write {
            address: 0x21,
            data: vec![0x01, 0x02],
        }));
    }

    #[test]
    fn test_write_read_register_pattern() {
        // PWR_MGMT-style register read from a typical IMU at 0x68
        let mut i2c = I2c::new(MockBus::with_rx(&[0x40])).unwrap();
        let mut value = [0u8; 1];
        i2c.write_read(0x68, &[0x6B], &mut value).unwrap();
        assert_eq!(value, [0x40]);
        assert!(i2c.into_inner().transactions.contains(&Transaction::WriteRead {
            address: 0x68,
            data: vec![0x6B],
            len: 1,
        }));
    }
}
