//! Scripted lighting sequences
//!
//! Startup sweeps a fade-in inward from both ends of the strip, shutdown
//! fades the pairs out again from the ends, and flash blinks one lamp.
//! Every step mutates the strip, flushes a frame and optionally pauses.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    color::OFF,
    config::DriverConfig,
    encoder::FrameEncoder,
    error::Error,
    gpio::GpioLines,
    strip::{LAMP_COUNT, Strip},
};

/// Number of mirrored lamp pairs (`i`, `7 - i`)
const PAIRS: usize = LAMP_COUNT / 2;

/// Direction of a brightness ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ramp {
    Up,
    Down,
}

/// Intermediate brightness values of a fade
///
/// `up` yields `brightness * k / steps` for `k` in `0..steps`, `down`
/// yields it for `k` from `steps` down to `1`. A brightness that is not
/// positive yields nothing.
#[derive(Debug, Clone)]
pub struct FadeSteps {
    brightness: f64,
    steps: u8,
    next: u8,
    ramp: Ramp,
}

impl FadeSteps {
    /// Ramp from zero towards `brightness`, excluding `brightness` itself
    pub fn up(brightness: f64, steps: u8) -> Self {
        Self::new(brightness, steps, Ramp::Up)
    }

    /// Ramp from `brightness` towards zero, excluding zero itself
    pub fn down(brightness: f64, steps: u8) -> Self {
        Self::new(brightness, steps, Ramp::Down)
    }

    fn new(brightness: f64, steps: u8, ramp: Ramp) -> Self {
        let steps = steps.max(1);
        // Also rejects NaN
        let steps = if brightness > 0.0 { steps } else { 0 };
        Self {
            brightness,
            steps,
            next: 0,
            ramp,
        }
    }
}

impl Iterator for FadeSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.steps {
            return None;
        }
        let k = match self.ramp {
            Ramp::Up => self.next,
            Ramp::Down => self.steps - self.next,
        };
        self.next += 1;
        Some(self.brightness * f64::from(k) / f64::from(self.steps))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.steps - self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FadeSteps {}

/// Runs scripted sequences over a strip and its encoder
pub(crate) struct Animator<'a, G: GpioLines, D: DelayNs> {
    pub(crate) strip: &'a mut Strip,
    pub(crate) encoder: &'a mut FrameEncoder<G>,
    pub(crate) delay: &'a mut D,
    pub(crate) config: &'a DriverConfig,
}

impl<G: GpioLines, D: DelayNs> Animator<'_, G, D> {
    /// Fade each pair in from the ends of the strip towards the middle,
    /// then turn everything off.
    pub(crate) fn startup(&mut self, color: &str, brightness: f64) -> Result<(), Error<G::Error>> {
        #[cfg(feature = "esp32-log")]
        println!("[Animator.startup] fading in to {} at {}", color, brightness);

        for i in (0..PAIRS).rev() {
            for step in FadeSteps::up(brightness, self.config.fade_steps) {
                self.set_pair(i, color, step)?;
                self.fade_frame()?;
            }
            self.set_pair(i, color, brightness)?;
            self.fade_frame()?;
        }
        self.strip.set_all(OFF, 0.0)?;
        self.flush()
    }

    /// Blink lamp `index` on and off `times` times
    pub(crate) fn flash(
        &mut self,
        index: usize,
        color: &str,
        brightness: f64,
        times: u32,
        interval: Duration,
    ) -> Result<(), Error<G::Error>> {
        #[cfg(feature = "esp32-log")]
        println!(
            "[Animator.flash] lamp {} {} times every {}ms",
            index,
            times,
            interval.as_millis()
        );

        for _ in 0..times {
            self.strip.set(index, color, brightness)?;
            self.flush()?;
            self.pause(interval);
            self.strip.set(index, OFF, 0.0)?;
            self.flush()?;
            self.pause(interval);
        }
        Ok(())
    }

    /// Light the whole strip, then fade each pair out from the ends of
    /// the strip towards the middle.
    ///
    /// The output lines are not released here.
    pub(crate) fn shutdown(&mut self, color: &str, brightness: f64) -> Result<(), Error<G::Error>> {
        #[cfg(feature = "esp32-log")]
        println!("[Animator.shutdown] fading out from {} at {}", color, brightness);

        self.strip.set_all(color, brightness)?;
        self.fade_frame()?;
        for i in 0..PAIRS {
            for step in FadeSteps::down(brightness, self.config.fade_steps) {
                self.set_pair(i, color, step)?;
                self.fade_frame()?;
            }
            self.set_pair(i, OFF, 0.0)?;
            self.fade_frame()?;
        }
        Ok(())
    }

    fn set_pair(&mut self, i: usize, color: &str, brightness: f64) -> Result<(), Error<G::Error>> {
        self.strip.set(i, color, brightness)?;
        self.strip.set(LAMP_COUNT - 1 - i, color, brightness)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error<G::Error>> {
        self.encoder
            .write_frame(self.strip.lamps())
            .map_err(Error::Gpio)
    }

    fn fade_frame(&mut self) -> Result<(), Error<G::Error>> {
        self.flush()?;
        self.pause(self.config.fade_frame_pause);
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        pause(&mut *self.delay, duration);
    }
}

/// Block for `duration`. A zero duration does not touch the delay.
fn pause<D: DelayNs>(delay: &mut D, duration: Duration) {
    let mut micros = duration.as_micros();
    while micros > 0 {
        let chunk = u32::try_from(micros).unwrap_or(u32::MAX);
        delay.delay_us(chunk);
        micros -= u64::from(chunk);
    }
}
