//! Async ST7789 display driver with double buffering for embassy-rp.
//!
//! Only the emulated LCD window (256x128, the 128x64 LCD at 2x) is
//! framebuffered. The rest of the panel is painted once with the bezel color
//! during `init()` and never touched again.
//!
//! # Architecture
//!
//! The driver is split into two components:
//! - [`St7789Renderer`]: Implements `DrawTarget`, writes to a framebuffer reference
//! - [`St7789Flusher`]: Owns SPI peripheral, handles async DMA transfers
//!
//! Double buffering allows rasterizing the next frame into one buffer while
//! the other is flushed, so the game tick never waits on the SPI bus.
//!
//! # Performance Optimizations
//!
//! - **Window-sized buffers:** 64 KiB per buffer instead of 150 KiB for the full panel
//! - **Paired pixel writes:** `clear()` stores 2 pixels per chunk
//! - **Async DMA:** `flush_buffer()` transfers via DMA without blocking the CPU
//! - **Max SPI speed:** Configured for 62.5 MHz SPI clock (ST7789 maximum)
//! - **Pre-configured window:** Address window is set to the LCD window during `init()`

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Config as SpiConfig, Spi};
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::layout::BYTES_PER_PIXEL;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_BUFFER_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH, WINDOW_X, WINDOW_Y};

const WIDTH: usize = WINDOW_WIDTH as usize;
const HEIGHT: usize = WINDOW_HEIGHT as usize;

/// Static framebuffer A (65,536 bytes).
pub static mut FRAMEBUFFER_A: [u8; WINDOW_BUFFER_SIZE] = [0u8; WINDOW_BUFFER_SIZE];
/// Static framebuffer B (65,536 bytes).
pub static mut FRAMEBUFFER_B: [u8; WINDOW_BUFFER_SIZE] = [0u8; WINDOW_BUFFER_SIZE];

// ST7789 Commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVON: u8 = 0x21;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

const COLMOD_RGB565: u8 = 0x55;
/// Landscape: row/column exchange plus mirrored X.
const MADCTL_LANDSCAPE: u8 = 0x20 | 0x40;

/// Power-up sequence: command, parameters, settle time in ms.
/// The PIM715 panel needs inversion on to show true colors.
const INIT_SEQUENCE: [(u8, &[u8], u64); 6] = [
    (SWRESET, &[], 150),
    (SLPOUT, &[], 10),
    (COLMOD, &[COLMOD_RGB565], 0),
    (MADCTL, &[MADCTL_LANDSCAPE], 0),
    (INVON, &[], 10),
    (NORON, &[], 10),
];

/// SPI configuration for the ST7789 (62.5 MHz, the controller's maximum).
pub fn spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 62_500_000;
    config
}

/// Double buffer manager for parallel render/flush operations.
///
/// After rendering completes, call `swap()` to switch buffers and get the
/// index of the completed buffer for flushing.
pub struct DoubleBuffer {
    /// Index of the buffer currently being rendered to (0 or 1).
    render_idx: usize,
}

impl DoubleBuffer {
    /// Create a new double buffer manager.
    ///
    /// # Safety
    /// Must only be called once. The static framebuffers are owned by this instance.
    pub unsafe fn new() -> Self { Self { render_idx: 0 } }

    /// Get a mutable reference to the current render buffer.
    ///
    /// # Safety
    /// Caller must ensure exclusive access to the render buffer.
    #[inline]
    pub unsafe fn render_buffer(&mut self) -> &'static mut [u8] { unsafe { buffer_mut(self.render_idx) } }

    /// Swap buffers after rendering completes.
    ///
    /// Returns the index of the buffer that was just rendered to (for flushing).
    #[inline]
    pub fn swap(&mut self) -> usize {
        let completed_idx = self.render_idx;
        self.render_idx = 1 - self.render_idx;
        completed_idx
    }
}

/// Framebuffer `idx` for reading.
///
/// # Safety
/// Caller must ensure the buffer is not being written to.
#[inline]
pub unsafe fn buffer(idx: usize) -> &'static [u8] {
    if idx == 0 {
        unsafe { &*core::ptr::addr_of!(FRAMEBUFFER_A) }
    } else {
        unsafe { &*core::ptr::addr_of!(FRAMEBUFFER_B) }
    }
}

#[inline]
unsafe fn buffer_mut(idx: usize) -> &'static mut [u8] {
    if idx == 0 {
        unsafe { &mut *core::ptr::addr_of_mut!(FRAMEBUFFER_A) }
    } else {
        unsafe { &mut *core::ptr::addr_of_mut!(FRAMEBUFFER_B) }
    }
}

/// Big-endian RGB565 bytes, the order the ST7789 expects.
#[inline]
fn pixel_bytes(color: Rgb565) -> [u8; BYTES_PER_PIXEL] { RawU16::from(color).into_inner().to_be_bytes() }

/// ST7789 display flusher - owns SPI and handles async DMA transfers.
///
/// Owned by the flush task once the intro animation is over.
pub struct St7789Flusher<'d> {
    spi: Spi<'d, SPI0, Async>,
    dc: Output<'d>,
    cs: Output<'d>,
}

impl<'d> St7789Flusher<'d> {
    /// Create a new flusher from SPI and control pins.
    pub fn new(
        spi: Spi<'d, SPI0, Async>,
        dc: Output<'d>,
        cs: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs }
    }

    /// Initialize the display hardware and paint the bezel.
    pub async fn init(
        &mut self,
        bezel: Rgb565,
    ) {
        for (cmd, params, settle_ms) in INIT_SEQUENCE {
            self.command(cmd, params).await;
            if settle_ms > 0 {
                Timer::after_millis(settle_ms).await;
            }
        }

        self.fill_panel(bezel).await;
        self.command(DISPON, &[]).await;
        Timer::after_millis(10).await;

        // Every flush after this goes to the LCD window
        self.set_window(WINDOW_X as u16, WINDOW_Y as u16, WINDOW_WIDTH as u16, WINDOW_HEIGHT as u16)
            .await;
    }

    /// Send a command byte (DC low) followed by its parameters (DC high).
    async fn command(
        &mut self,
        cmd: u8,
        params: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[cmd]).await.ok();
        if !params.is_empty() {
            self.dc.set_high();
            self.spi.write(params).await.ok();
        }
        self.cs.set_high();
    }

    /// Set the address window to `w` x `h` pixels at (`x`, `y`).
    async fn set_window(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        let [x0h, x0l] = x.to_be_bytes();
        let [x1h, x1l] = (x + w - 1).to_be_bytes();
        let [y0h, y0l] = y.to_be_bytes();
        let [y1h, y1l] = (y + h - 1).to_be_bytes();
        self.command(CASET, &[x0h, x0l, x1h, x1l]).await;
        self.command(RASET, &[y0h, y0l, y1h, y1l]).await;
    }

    /// Open a RAMWR transfer: CS low, command sent, DC high for pixel data.
    fn begin_write(&mut self) {
        self.cs.set_low();
        self.dc.set_low();
        // Blocking write for the single command byte (faster than DMA setup)
        self.spi.blocking_write(&[RAMWR]).ok();
        self.dc.set_high();
    }

    /// Paint the whole panel one color, a line at a time.
    async fn fill_panel(
        &mut self,
        color: Rgb565,
    ) {
        self.set_window(0, 0, SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16).await;

        let pixel = pixel_bytes(color);
        let mut line = [0u8; SCREEN_WIDTH as usize * BYTES_PER_PIXEL];
        for chunk in line.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&pixel);
        }

        self.begin_write();
        for _ in 0..SCREEN_HEIGHT {
            self.spi.write(&line).await.ok();
        }
        self.cs.set_high();
    }

    /// Flush a buffer to the LCD window via async DMA transfer.
    pub async fn flush_buffer(
        &mut self,
        buffer: &[u8],
    ) {
        self.begin_write();
        self.spi.write(buffer).await.ok();
        self.cs.set_high();
    }
}

/// ST7789 renderer - implements DrawTarget over a window framebuffer.
///
/// Does not own any hardware. Create a new renderer each frame after
/// swapping buffers.
pub struct St7789Renderer<'a> {
    framebuffer: &'a mut [u8],
}

impl<'a> St7789Renderer<'a> {
    /// Create a new renderer targeting the given framebuffer.
    pub fn new(framebuffer: &'a mut [u8]) -> Self { Self { framebuffer } }

    /// Fill the framebuffer with a color, two pixels per 32-bit store.
    pub fn clear_buffer(
        &mut self,
        color: Rgb565,
    ) {
        let [hi, lo] = pixel_bytes(color);
        let pair = [hi, lo, hi, lo];
        for chunk in self.framebuffer.chunks_exact_mut(pair.len()) {
            chunk.copy_from_slice(&pair);
        }
    }

    #[inline]
    fn put(
        &mut self,
        x: usize,
        y: usize,
        color: Rgb565,
    ) {
        let idx = (y * WIDTH + x) * BYTES_PER_PIXEL;
        self.framebuffer[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&pixel_bytes(color));
    }
}

impl OriginDimensions for St7789Renderer<'_> {
    fn size(&self) -> Size { Size::new(WIDTH as u32, HEIGHT as u32) }
}

impl DrawTarget for St7789Renderer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && (point.x as usize) < WIDTH && point.y >= 0 && (point.y as usize) < HEIGHT {
                self.put(point.x as usize, point.y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(
        &mut self,
        area: &Rectangle,
        colors: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        // Fast path: the area lies fully inside, colors map 1:1 to pixels
        if drawable_area == *area {
            let mut colors = colors.into_iter();
            for y in area.rows() {
                for x in area.columns() {
                    if let Some(color) = colors.next() {
                        self.put(x as usize, y as usize, color);
                    }
                }
            }
            return Ok(());
        }

        self.draw_iter(
            area.points()
                .zip(colors)
                .filter(|(point, _)| drawable_area.contains(*point))
                .map(|(point, color)| Pixel(point, color)),
        )
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.clear_buffer(color);
        Ok(())
    }
}
