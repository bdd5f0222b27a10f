//! Clock/data frame encoder
//!
//! A frame is laid out as:
//! - start frame: data low, `start_frame_pulses` clock pulses
//! - one packet per lamp in wiring order: `0xFF`, blue, green, red, each
//!   byte sent most significant bit first, one bit per clock pulse
//! - end frame: data high, `end_frame_pulses` clock pulses to latch
//!
//! No delays are inserted between line writes.

use crate::{
    color::Rgb,
    config::DriverConfig,
    gpio::{GpioLines, Level},
};

/// Marker byte opening every lamp packet
pub const PACKET_MARKER: u8 = 0xFF;

/// Serializes lamp state into bit-level line writes
#[derive(Debug)]
pub struct FrameEncoder<G: GpioLines> {
    gpio: G,
    data_line: u8,
    clock_line: u8,
    start_pulses: u8,
    end_pulses: u8,
}

impl<G: GpioLines> FrameEncoder<G> {
    pub fn new(gpio: G, config: &DriverConfig) -> Self {
        Self {
            gpio,
            data_line: config.data_line,
            clock_line: config.clock_line,
            start_pulses: config.start_frame_pulses,
            end_pulses: config.end_frame_pulses,
        }
    }

    /// Write one complete frame for `lamps`
    pub fn write_frame(&mut self, lamps: &[Rgb]) -> Result<(), G::Error> {
        self.cycle_clock(Level::Low, self.start_pulses)?;
        for lamp in lamps {
            self.write_byte(PACKET_MARKER)?;
            self.write_byte(lamp.b)?;
            self.write_byte(lamp.g)?;
            self.write_byte(lamp.r)?;
        }
        self.cycle_clock(Level::High, self.end_pulses)
    }

    /// Free the output lines
    pub fn release(&mut self) -> Result<(), G::Error> {
        self.gpio.release()
    }

    /// Get a reference to the output lines
    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    /// Get a mutable reference to the output lines
    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }

    fn cycle_clock(&mut self, data: Level, pulses: u8) -> Result<(), G::Error> {
        self.gpio.write(self.data_line, data)?;
        for _ in 0..pulses {
            self.pulse()?;
        }
        Ok(())
    }

    fn write_byte(&mut self, value: u8) -> Result<(), G::Error> {
        for bit in (0..8).rev() {
            let level = Level::from(value & (1 << bit) != 0);
            self.gpio.write(self.data_line, level)?;
            self.pulse()?;
        }
        Ok(())
    }

    fn pulse(&mut self) -> Result<(), G::Error> {
        self.gpio.write(self.clock_line, Level::High)?;
        self.gpio.write(self.clock_line, Level::Low)
    }
}
