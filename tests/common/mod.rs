#![allow(dead_code)]

use std::{cell::RefCell, convert::Infallible, rc::Rc};

use blinkt_driver::{
    GpioLines, Level, Rgb,
    config::{CLOCK_LINE, DATA_LINE},
};
use embedded_hal::delay::DelayNs;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Records every line write and release
#[derive(Debug, Default)]
pub struct Recorder {
    pub writes: Vec<(u8, Level)>,
    pub releases: usize,
    /// Number of writes seen when the first release happened
    pub released_at: Option<usize>,
}

impl Recorder {
    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl GpioLines for Recorder {
    type Error = Infallible;

    fn write(&mut self, line: u8, level: Level) -> Result<(), Infallible> {
        self.writes.push((line, level));
        Ok(())
    }

    fn release(&mut self) -> Result<(), Infallible> {
        self.releases += 1;
        self.released_at.get_or_insert(self.writes.len());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault;

/// Accepts `budget` writes, then fails every write
#[derive(Debug)]
pub struct FailingGpio {
    pub budget: usize,
    pub releases: usize,
}

impl FailingGpio {
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            releases: 0,
        }
    }
}

impl GpioLines for FailingGpio {
    type Error = Fault;

    fn write(&mut self, _line: u8, _level: Level) -> Result<(), Fault> {
        if self.budget == 0 {
            return Err(Fault);
        }
        self.budget -= 1;
        Ok(())
    }

    fn release(&mut self) -> Result<(), Fault> {
        self.releases += 1;
        Ok(())
    }
}

/// Records requested pauses in nanoseconds
#[derive(Debug, Clone, Default)]
pub struct RecordingDelay {
    pub pauses: Rc<RefCell<Vec<u64>>>,
}

impl RecordingDelay {
    pub fn pauses(&self) -> Vec<u64> {
        self.pauses.borrow().clone()
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.pauses.borrow_mut().push(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.pauses.borrow_mut().push(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.pauses.borrow_mut().push(u64::from(ms) * 1_000_000);
    }
}

/// One frame reconstructed from line writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    pub markers: [u8; 8],
    pub lamps: [Rgb; 8],
}

/// Bits clocked in, sampled on every rising clock edge
pub fn clocked_bits(writes: &[(u8, Level)]) -> Vec<bool> {
    let mut data = Level::Low;
    let mut bits = Vec::new();
    for &(line, level) in writes {
        match line {
            DATA_LINE => data = level,
            CLOCK_LINE if level == Level::High => bits.push(data == Level::High),
            CLOCK_LINE => {}
            other => panic!("write to unexpected line {}", other),
        }
    }
    bits
}

/// Split recorded writes into default-shaped frames, checking framing
pub fn decode_frames(writes: &[(u8, Level)]) -> Vec<DecodedFrame> {
    const FRAME_BITS: usize = 32 + 8 * 32 + 32;

    let bits = clocked_bits(writes);
    assert_eq!(bits.len() % FRAME_BITS, 0, "partial frame recorded");

    bits.chunks(FRAME_BITS)
        .map(|frame| {
            assert!(frame[..32].iter().all(|bit| !bit), "start frame not low");
            assert!(frame[FRAME_BITS - 32..].iter().all(|bit| *bit), "end frame not high");

            let payload = &frame[32..FRAME_BITS - 32];
            let mut markers = [0; 8];
            let mut lamps = [BLACK; 8];
            for (index, packet) in payload.chunks(32).enumerate() {
                markers[index] = byte(&packet[0..8]);
                lamps[index] = Rgb {
                    b: byte(&packet[8..16]),
                    g: byte(&packet[16..24]),
                    r: byte(&packet[24..32]),
                };
            }
            DecodedFrame { markers, lamps }
        })
        .collect()
}

fn byte(bits: &[bool]) -> u8 {
    bits.iter().fold(0, |acc, bit| (acc << 1) | u8::from(*bit))
}
