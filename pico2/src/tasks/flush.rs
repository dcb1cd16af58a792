//! Display flush task.
//!
//! Receives the index of a finished framebuffer from the game loop and
//! streams it to the LCD window via DMA while the game keeps ticking.

use core::sync::atomic::{AtomicU32, Ordering};

use defmt::{debug, info};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Instant;

use crate::st7789::{self, St7789Flusher};

// =============================================================================
// Double Buffering Synchronization
// =============================================================================

/// Signal to notify flush task which buffer to flush (buffer index).
pub static FLUSH_SIGNAL: Signal<CriticalSectionRawMutex, usize> = Signal::new();

/// Signal to notify the game loop that flush is complete.
pub static FLUSH_DONE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Frames flushed since boot.
pub static FLUSH_COUNT: AtomicU32 = AtomicU32::new(0);

/// Display flush task - runs in parallel with the game loop.
#[embassy_executor::task]
pub async fn display_flush_task(flusher: &'static mut St7789Flusher<'static>) {
    info!("Display flush task started");

    loop {
        let buffer_idx = FLUSH_SIGNAL.wait().await;
        let flush_start = Instant::now();

        // SAFETY: the game loop renders to the OTHER buffer until FLUSH_DONE
        let buffer = unsafe { st7789::buffer(buffer_idx) };
        flusher.flush_buffer(buffer).await;

        let count = FLUSH_COUNT.fetch_add(1, Ordering::Relaxed) + 1;
        if count % 1000 == 0 {
            debug!("Flush #{}: {} us", count, flush_start.elapsed().as_micros());
        }

        FLUSH_DONE.signal(());
    }
}
