use sdl2::pixels::PixelFormatEnum;

use chip8_core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use chip8_core::Screen;

const SCALE: usize = 16;

/// # Display
/// Presents the 64x32 monochrome CHIP-8 screen in an SDL2 window.
///
/// The engine encodes each scanline as a 64-bit mask, bit (63 - x) for the
/// pixel at column x. Render only gets called when the engine reports a
/// pending frame.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
}

impl Display {
    /// Opens a window bound to an SDL2 context.
    pub fn new(sdl: &sdl2::Sdl, title: &str) -> Result<Self, String> {
        let video = sdl.video()?;
        let window = video
            .window(
                title,
                (SCREEN_WIDTH * SCALE) as u32,
                (SCREEN_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display { canvas })
    }

    /// Unpacks the screen's row bitmasks into an SDL2 RGB24 texture: one
    /// byte per pixel per channel, row-major, 255 for lit and 0 for unlit.
    fn screen_to_texture(screen: &Screen) -> Vec<u8> {
        screen
            .iter()
            .flat_map(|row| (0..SCREEN_WIDTH).map(move |x| (row >> (SCREEN_WIDTH - 1 - x) & 1) as u8))
            .flat_map(|pixel| std::iter::repeat(pixel * 255).take(3))
            .collect()
    }

    /// Uploads the screen as a streaming texture and presents it, letting
    /// SDL2 scale it up to the window size.
    pub fn render(&mut self, screen: &Screen) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                SCREEN_WIDTH as u32,
                SCREEN_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&Display::screen_to_texture(screen));
            })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
