use std::error::Error;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::constants::FRAME_RATE;
use chip8_core::Chip8;
use chip8_display::Display;

use crate::audio::Beeper;
use crate::keymap::key_mask;

pub fn run(rom: &Path) -> Result<(), Box<dyn Error>> {
    let bytes = fs::read(rom)?;
    let mut chip8 = Chip8::new(&bytes)?;
    log::info!("loaded {} byte ROM from {}", bytes.len(), rom.display());

    let title = rom
        .file_name()
        .map(|name| format!("CHIP-8 | {}", name.to_string_lossy()))
        .unwrap_or_else(|| "CHIP-8".to_string());

    // Get SDL2 context
    let sdl = sdl2::init()?;
    let mut display = Display::new(&sdl, &title)?;
    let beeper = Beeper::new(&sdl)?;
    let mut events = sdl.event_pump()?;

    let frame_time = Duration::from_secs(1) / FRAME_RATE;
    'frames: loop {
        let frame_start = Instant::now();

        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'frames,
                _ => continue,
            }
        }

        // One frame of emulation against this instant's key snapshot
        chip8.frame(key_mask(&events.keyboard_state()));
        if chip8.halted() {
            log::info!("session halted");
            break;
        }

        // Present the frame if anything drew, and follow the sound timer
        if let Some(screen) = chip8.take_frame() {
            display.render(&screen)?;
        }
        beeper.set_active(chip8.sound_active());

        // Pace to the 60 Hz frame rate
        if let Some(rest) = frame_time.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    Ok(())
}
