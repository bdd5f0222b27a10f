use embassy_time::{Delay, Duration};
use embedded_hal::delay::DelayNs;
use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    animation::Animator,
    color::Rgb,
    config::DriverConfig,
    encoder::FrameEncoder,
    error::Error,
    gpio::GpioLines,
    strip::{LAMP_COUNT, Strip},
};

/// Driver for the 8-lamp strip
///
/// A driver only exists in the active state: construction runs the startup
/// sequence before returning, and [`Driver::close`] consumes it.
pub struct Driver<G: GpioLines, D: DelayNs = Delay> {
    strip: Strip,
    encoder: FrameEncoder<G>,
    delay: D,
    config: DriverConfig,
}

impl<G: GpioLines> Driver<G, Delay> {
    /// Create a driver using the default configuration and the
    /// `embassy-time` blocking delay, running the startup fade.
    pub fn new(gpio: G, color: &str, brightness: f64) -> Result<Self, Error<G::Error>> {
        Self::with_delay(gpio, Delay, &DriverConfig::DEFAULT, color, brightness)
    }
}

impl<G: GpioLines, D: DelayNs> Driver<G, D> {
    /// Create a driver with a custom delay and configuration, running the
    /// startup fade.
    pub fn with_delay(
        gpio: G,
        delay: D,
        config: &DriverConfig,
        color: &str,
        brightness: f64,
    ) -> Result<Self, Error<G::Error>> {
        let mut driver = Self {
            strip: Strip::new(),
            encoder: FrameEncoder::new(gpio, config),
            delay,
            config: config.clone(),
        };
        driver.animator().startup(color, brightness)?;

        #[cfg(feature = "esp32-log")]
        println!("[Driver.new] startup complete");

        Ok(driver)
    }

    /// Set one lamp. Takes effect on the next [`Driver::show`].
    pub fn set(&mut self, index: usize, color: &str, brightness: f64) -> Result<(), Error<G::Error>> {
        self.strip.set(index, color, brightness)?;
        Ok(())
    }

    /// Set every lamp. Takes effect on the next [`Driver::show`].
    pub fn set_all(&mut self, color: &str, brightness: f64) -> Result<(), Error<G::Error>> {
        self.strip.set_all(color, brightness)?;
        Ok(())
    }

    /// Write the current lamp state as one frame
    pub fn show(&mut self) -> Result<(), Error<G::Error>> {
        self.encoder
            .write_frame(self.strip.lamps())
            .map_err(Error::Gpio)
    }

    /// Blink one lamp, blocking for the whole sequence
    pub fn flash(
        &mut self,
        index: usize,
        color: &str,
        brightness: f64,
        times: u32,
        interval: Duration,
    ) -> Result<(), Error<G::Error>> {
        self.animator()
            .flash(index, color, brightness, times, interval)
    }

    /// Run the shutdown fade and release the output lines
    ///
    /// Release is attempted exactly once, even when the fade fails. The
    /// fade error takes precedence over a release error.
    pub fn close(mut self, color: &str, brightness: f64) -> Result<(), Error<G::Error>> {
        let faded = self.animator().shutdown(color, brightness);

        #[cfg(feature = "esp32-log")]
        println!("[Driver.close] releasing output lines");

        let released = self.encoder.release().map_err(Error::Gpio);
        faded.and(released)
    }

    /// Corrected intensities of one lamp
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.strip.get(index)
    }

    /// Corrected intensities of all lamps
    pub fn lamps(&self) -> &[Rgb; LAMP_COUNT] {
        self.strip.lamps()
    }

    /// Get a reference to the output lines
    pub fn gpio(&self) -> &G {
        self.encoder.gpio()
    }

    /// Get the driver configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    fn animator(&mut self) -> Animator<'_, G, D> {
        Animator {
            strip: &mut self.strip,
            encoder: &mut self.encoder,
            delay: &mut self.delay,
            config: &self.config,
        }
    }
}

/// Write linear colors to the strip and show them
///
/// Each channel is gamma corrected. At most [`LAMP_COUNT`] colors are
/// used; lamps past the end of the iterator keep their state.
impl<G: GpioLines, D: DelayNs> SmartLedsWrite for Driver<G, D> {
    type Error = Error<G::Error>;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        for (index, color) in iterator.into_iter().take(LAMP_COUNT).enumerate() {
            self.strip.set_linear(index, color.into());
        }
        self.show()
    }
}
