//! Driver handle that can be shared between contexts.
//!
//! Every call runs inside a critical section, so frames written by
//! different callers never interleave. A call holds the critical section
//! for its full duration, including the pauses of [`SharedDriver::flash`].

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::{driver::Driver, error::Error, gpio::GpioLines};

/// A [`Driver`] serialized by a critical section
pub struct SharedDriver<G: GpioLines, D: DelayNs> {
    inner: Mutex<RefCell<Driver<G, D>>>,
}

impl<G: GpioLines, D: DelayNs> SharedDriver<G, D> {
    pub const fn new(driver: Driver<G, D>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(driver)),
        }
    }

    /// Run `f` with exclusive access to the driver
    pub fn lock<R>(&self, f: impl FnOnce(&mut Driver<G, D>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow(cs).borrow_mut()))
    }

    pub fn set(&self, index: usize, color: &str, brightness: f64) -> Result<(), Error<G::Error>> {
        self.lock(|driver| driver.set(index, color, brightness))
    }

    pub fn set_all(&self, color: &str, brightness: f64) -> Result<(), Error<G::Error>> {
        self.lock(|driver| driver.set_all(color, brightness))
    }

    pub fn show(&self) -> Result<(), Error<G::Error>> {
        self.lock(Driver::show)
    }

    pub fn flash(
        &self,
        index: usize,
        color: &str,
        brightness: f64,
        times: u32,
        interval: Duration,
    ) -> Result<(), Error<G::Error>> {
        self.lock(|driver| driver.flash(index, color, brightness, times, interval))
    }

    /// Take the driver back, e.g. to close it
    pub fn into_inner(self) -> Driver<G, D> {
        self.inner.into_inner().into_inner()
    }
}
