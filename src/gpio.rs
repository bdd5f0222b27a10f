//! Output line capability used by the frame encoder
//!
//! The driver never touches hardware directly. It is handed a value
//! implementing [`GpioLines`] and writes every bit of a frame through it.
//! [`PinPair`] adapts two `embedded-hal` output pins to that capability.

use embedded_hal::digital::OutputPin;

/// Logic level of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(value: bool) -> Self {
        if value { Self::High } else { Self::Low }
    }
}

/// Two numbered output lines (data and clock)
///
/// Implement this trait to support different hardware platforms.
pub trait GpioLines {
    type Error;

    /// Drive `line` to `level`
    fn write(&mut self, line: u8, level: Level) -> Result<(), Self::Error>;

    /// Free both lines. Calling it again must be a no-op.
    fn release(&mut self) -> Result<(), Self::Error>;
}

impl<T: GpioLines + ?Sized> GpioLines for &mut T {
    type Error = T::Error;

    fn write(&mut self, line: u8, level: Level) -> Result<(), Self::Error> {
        (**self).write(line, level)
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        (**self).release()
    }
}

/// Error returned by [`PinPair`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError<E> {
    /// The line number is neither the data nor the clock line
    UnknownLine(u8),
    /// The pair has already been released
    Released,
    /// The underlying pin failed
    Pin(E),
}

/// Data and clock pins addressed by line number
#[derive(Debug)]
pub struct PinPair<DAT, CLK> {
    data: DAT,
    clock: CLK,
    data_line: u8,
    clock_line: u8,
    released: bool,
}

impl<E, DAT, CLK> PinPair<DAT, CLK>
where
    DAT: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
{
    pub const fn new(data: DAT, data_line: u8, clock: CLK, clock_line: u8) -> Self {
        Self {
            data,
            clock,
            data_line,
            clock_line,
            released: false,
        }
    }

    /// Check whether the pair has been released
    pub const fn is_released(&self) -> bool {
        self.released
    }

    /// Give the pins back
    pub fn into_pins(self) -> (DAT, CLK) {
        (self.data, self.clock)
    }
}

impl<E, DAT, CLK> GpioLines for PinPair<DAT, CLK>
where
    DAT: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
{
    type Error = PinError<E>;

    fn write(&mut self, line: u8, level: Level) -> Result<(), Self::Error> {
        if self.released {
            return Err(PinError::Released);
        }
        if line == self.data_line {
            drive(&mut self.data, level)
        } else if line == self.clock_line {
            drive(&mut self.clock, level)
        } else {
            Err(PinError::UnknownLine(line))
        }
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        self.data.set_low().map_err(PinError::Pin)?;
        self.clock.set_low().map_err(PinError::Pin)
    }
}

fn drive<E, P: OutputPin<Error = E>>(pin: &mut P, level: Level) -> Result<(), PinError<E>> {
    match level {
        Level::Low => pin.set_low(),
        Level::High => pin.set_high(),
    }
    .map_err(PinError::Pin)
}
