//! Per-lamp color state
//!
//! Holds the gamma-corrected intensities for every lamp in wiring order.
//! Values are only ever written through [`gamma::correct`], so every
//! stored channel is a table output.

use crate::{
    color::{Rgb, parse_color, scale_channel},
    error::LampError,
    gamma,
};

/// Number of lamps on the strip
pub const LAMP_COUNT: usize = 8;

const DARK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Color state of the whole strip, indexed in wiring order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    lamps: [Rgb; LAMP_COUNT],
}

impl Strip {
    /// Create a strip with every lamp off
    pub const fn new() -> Self {
        Self {
            lamps: [DARK; LAMP_COUNT],
        }
    }

    /// Set one lamp to `color` scaled by `brightness`
    ///
    /// The index is checked before the color, and nothing is stored when
    /// either is rejected.
    pub fn set(&mut self, index: usize, color: &str, brightness: f64) -> Result<(), LampError> {
        if index >= LAMP_COUNT {
            return Err(LampError::IndexOutOfRange(index));
        }
        let raw = parse_color(color)?;
        self.lamps[index] = corrected(raw, brightness);
        Ok(())
    }

    /// Set every lamp to `color` scaled by `brightness`
    ///
    /// Lamps are updated one by one in index order. A failure leaves the
    /// lamps already visited with their new values.
    pub fn set_all(&mut self, color: &str, brightness: f64) -> Result<(), LampError> {
        for index in 0..LAMP_COUNT {
            self.set(index, color, brightness)?;
        }
        Ok(())
    }

    /// Store a linear color, correcting each channel
    pub(crate) fn set_linear(&mut self, index: usize, color: Rgb) {
        if let Some(lamp) = self.lamps.get_mut(index) {
            *lamp = corrected(color, 1.0);
        }
    }

    /// Turn every lamp off
    pub fn clear(&mut self) {
        self.lamps = [DARK; LAMP_COUNT];
    }

    /// Corrected intensities of one lamp
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.lamps.get(index).copied()
    }

    /// Corrected intensities of all lamps
    pub const fn lamps(&self) -> &[Rgb; LAMP_COUNT] {
        &self.lamps
    }
}

impl Default for Strip {
    fn default() -> Self {
        Self::new()
    }
}

fn corrected(raw: Rgb, brightness: f64) -> Rgb {
    Rgb {
        r: gamma::correct(scale_channel(raw.r, brightness)),
        g: gamma::correct(scale_channel(raw.g, brightness)),
        b: gamma::correct(scale_channel(raw.b, brightness)),
    }
}
