mod tests {
    use std::{cell::RefCell, rc::Rc};

    use blinkt_driver::{
        Driver, DriverConfig, GpioLines, Level, PinError, PinPair, WHITE,
        config::{CLOCK_LINE, DATA_LINE},
    };
    use embedded_hal::{
        delay::DelayNs,
        digital::{self, ErrorKind, ErrorType, OutputPin},
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct PinFault;

    impl digital::Error for PinFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Output pin recording every level it is driven to
    #[derive(Debug, Clone, Default)]
    struct MockPin {
        levels: Rc<RefCell<Vec<bool>>>,
        broken: bool,
    }

    impl ErrorType for MockPin {
        type Error = PinFault;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), PinFault> {
            self.drive(false)
        }

        fn set_high(&mut self) -> Result<(), PinFault> {
            self.drive(true)
        }
    }

    impl MockPin {
        fn drive(&mut self, level: bool) -> Result<(), PinFault> {
            if self.broken {
                return Err(PinFault);
            }
            self.levels.borrow_mut().push(level);
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn pair() -> (PinPair<MockPin, MockPin>, MockPin, MockPin) {
        let data = MockPin::default();
        let clock = MockPin::default();
        let pair = PinPair::new(data.clone(), DATA_LINE, clock.clone(), CLOCK_LINE);
        (pair, data, clock)
    }

    #[test]
    fn test_writes_are_routed_by_line() {
        let (mut pins, data, clock) = pair();
        pins.write(DATA_LINE, Level::High).unwrap();
        pins.write(CLOCK_LINE, Level::High).unwrap();
        pins.write(CLOCK_LINE, Level::Low).unwrap();

        assert_eq!(*data.levels.borrow(), [true]);
        assert_eq!(*clock.levels.borrow(), [true, false]);
    }

    #[test]
    fn test_unknown_line() {
        let (mut pins, _, _) = pair();
        assert_eq!(pins.write(5, Level::High), Err(PinError::UnknownLine(5)));
    }

    #[test]
    fn test_release_is_idempotent() {
        let (mut pins, data, clock) = pair();
        pins.release().unwrap();
        pins.release().unwrap();

        assert!(pins.is_released());
        assert_eq!(*data.levels.borrow(), [false]);
        assert_eq!(*clock.levels.borrow(), [false]);
        assert_eq!(pins.write(DATA_LINE, Level::High), Err(PinError::Released));
    }

    #[test]
    fn test_pin_errors_are_wrapped() {
        let data = MockPin {
            broken: true,
            ..MockPin::default()
        };
        let mut pins = PinPair::new(data, DATA_LINE, MockPin::default(), CLOCK_LINE);
        assert_eq!(pins.write(DATA_LINE, Level::Low), Err(PinError::Pin(PinFault)));
    }

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
    }

    #[test]
    fn test_driver_over_pins() {
        let (pins, data, clock) = pair();
        let driver = Driver::with_delay(pins, NoDelay, &DriverConfig::default(), WHITE, 1.0).unwrap();
        assert!(!driver.gpio().is_released());
        let rising = clock.levels.borrow().iter().filter(|level| **level).count();
        assert_eq!(rising, 45 * (32 + 256 + 32));

        driver.close(WHITE, 1.0).unwrap();
        // release leaves both lines low
        assert_eq!(data.levels.borrow().last(), Some(&false));
        assert_eq!(clock.levels.borrow().last(), Some(&false));
    }
}
