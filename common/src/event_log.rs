//! Game event log.
//!
//! A ring buffer of short human-readable lines, filled from each tick's
//! [`TickReport`](crate::game::TickReport). The simulator shows it under the
//! LCD; the firmware logs events through defmt instead.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! let report = game.tick(input, &mut frame, &mut leds);
//! for event in &report.events {
//!     log.push_event(event);
//! }
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use heapless::{Deque, String};

use crate::game::GameEvent;

// =============================================================================
// Event Log Configuration
// =============================================================================

/// Maximum number of lines kept in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 6;

/// Maximum characters per line.
pub const LOG_LINE_LENGTH: usize = 32;

type Line = String<LOG_LINE_LENGTH>;

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Keeps the last [`LOG_BUFFER_SIZE`] lines. Old lines drop off the front.
pub struct EventLog {
    buffer: Deque<Line, LOG_BUFFER_SIZE>,
}

impl EventLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a line, truncating it to [`LOG_LINE_LENGTH`] characters.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line = Line::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.push_line(line);
    }

    /// Push a formatted line for a game event.
    pub fn push_event(
        &mut self,
        event: &GameEvent,
    ) {
        let mut line = Line::new();
        match *event {
            GameEvent::Started => push_str(&mut line, "Run started"),
            GameEvent::Jumped => push_str(&mut line, "Jump"),
            GameEvent::Spawned(kind) => {
                push_str(&mut line, "Spawned ");
                push_str(&mut line, kind.label());
            }
            GameEvent::SpawnSkipped => push_str(&mut line, "Spawn skipped, table full"),
            GameEvent::SpeedUp(speed) => {
                push_str(&mut line, "Speed up, cadence ");
                push_u32(&mut line, u32::from(speed));
            }
            GameEvent::Hit { lives_left } => {
                push_str(&mut line, "Hit! lives left: ");
                push_u32(&mut line, u32::from(lives_left));
            }
            GameEvent::GameOver { score } => {
                push_str(&mut line, "Game over, score ");
                push_u32(&mut line, u32::from(score));
            }
            GameEvent::Restarted => push_str(&mut line, "Back to start screen"),
        }
        self.push_line(line);
    }

    fn push_line(
        &mut self,
        line: Line,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    #[inline]
    pub const fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Append as much of `s` as fits.
fn push_str<const N: usize>(
    line: &mut String<N>,
    s: &str,
) {
    for c in s.chars() {
        if line.push(c).is_err() {
            return;
        }
    }
}

/// Push a u32 value to a heapless string (no format! macro).
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut val: u32,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    // Build digits in reverse
    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacles::ObstacleKind;

    #[test]
    fn test_event_log_push() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push("Test message");
        assert_eq!(log.len(), 1);

        log.push_event(&GameEvent::Started);
        assert_eq!(log.iter().last(), Some("Run started"));
    }

    #[test]
    fn test_event_log_ring_buffer() {
        let mut log = EventLog::new();

        for i in 0..LOG_BUFFER_SIZE {
            let mut msg: String<16> = String::new();
            push_u32(&mut msg, i as u32);
            log.push(&msg);
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        log.push("New");
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("1"));
        assert_eq!(log.iter().last(), Some("New"));
    }

    #[test]
    fn test_event_log_truncation() {
        let mut log = EventLog::new();
        log.push("This is a very long message that exceeds the maximum line length limit");

        let stored = log.iter().next().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH);
    }

    #[test]
    fn test_event_lines() {
        let mut log = EventLog::new();
        log.push_event(&GameEvent::Spawned(ObstacleKind::BirdHigh));
        log.push_event(&GameEvent::Hit { lives_left: 2 });
        log.push_event(&GameEvent::GameOver { score: 120 });
        log.push_event(&GameEvent::SpeedUp(4));

        let lines: Vec<&str> = log.iter().collect();
        assert_eq!(lines, ["Spawned high bird", "Hit! lives left: 2", "Game over, score 120", "Speed up, cadence 4"]);
    }

    #[test]
    fn test_push_u32() {
        let mut s: String<16> = String::new();
        push_u32(&mut s, 0);
        assert_eq!(s.as_str(), "0");

        let mut s: String<16> = String::new();
        push_u32(&mut s, 9999);
        assert_eq!(s.as_str(), "9999");
    }
}
