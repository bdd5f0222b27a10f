use embassy_time::Duration;

/// Line number of the data line on the reference board
pub const DATA_LINE: u8 = 23;
/// Line number of the clock line on the reference board
pub const CLOCK_LINE: u8 = 24;

/// Clock pulses in the start and end frames
pub const FRAME_PULSES: u8 = 32;

/// Intermediate brightness steps per lamp pair in startup and shutdown
pub const DEFAULT_FADE_STEPS: u8 = 10;

/// Configuration for the driver
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Line carrying the data bits
    pub data_line: u8,
    /// Line carrying the clock pulses
    pub clock_line: u8,
    /// Clock pulses with data held low before the lamp packets
    pub start_frame_pulses: u8,
    /// Clock pulses with data held high after the lamp packets
    pub end_frame_pulses: u8,
    /// Steps per lamp pair in the startup and shutdown fades (0 acts as 1)
    pub fade_steps: u8,
    /// Pause after every startup and shutdown frame
    pub fade_frame_pause: Duration,
}

impl DriverConfig {
    pub const DEFAULT: Self = Self {
        data_line: DATA_LINE,
        clock_line: CLOCK_LINE,
        start_frame_pulses: FRAME_PULSES,
        end_frame_pulses: FRAME_PULSES,
        fade_steps: DEFAULT_FADE_STEPS,
        fade_frame_pause: Duration::from_ticks(0),
    };
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
