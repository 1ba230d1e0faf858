use thiserror::Error;

use crate::constants::{
    FONT, FONT_OFFSET, MAX_ROM_SIZE, MEMORY_SIZE, ROM_OFFSET, SCREEN_HEIGHT, STACK_DEPTH,
};

/// One row per scanline; bit (63 - x) of row y is the pixel at (x, y).
pub type Screen = [u64; SCREEN_HEIGHT];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("ROM is {size} bytes, at most {} fit in memory", MAX_ROM_SIZE)]
    RomTooLarge { size: usize },
}

/// The complete mutable state of one virtual CHIP-8.
///
/// Plain data with no behavior of its own: the instruction handlers in
/// [crate::operations] and the engine loop in [crate::chip8] mutate it in
/// place through exclusive references.
///
/// ## Registers
/// - `v` holds V0..VF; VF doubles as the carry/borrow/collision flag and is
///   overwritten by the arithmetic, shift, and draw instructions
/// - `i` is the memory index register, conceptually 12-bit; every memory
///   access derived from it is masked with 0xFFF
/// - `pc` starts at [ROM_OFFSET] and must stay below [MEMORY_SIZE] for the
///   machine to remain runnable
///
/// ## Stack
/// `sp` indexes the next free slot; the index wraps modulo [STACK_DEPTH]
/// on overflow or underflow, which the original machine left unguarded.
///
/// ## Input
/// `keys` holds this frame's key-down bitmask (bit i = key i) and
/// `prev_keys` the previous frame's, so the key-wait instruction can detect
/// release edges between frames.
#[derive(Clone)]
pub struct Machine {
    pub memory: [u8; MEMORY_SIZE],
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub stack: [u16; STACK_DEPTH],
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub prev_keys: u16,
    pub keys: u16,
    pub screen: Screen,
    pub should_draw: bool,
}

impl Machine {
    /// Builds a zeroed machine with the font seeded at [FONT_OFFSET] and the
    /// ROM copied in at [ROM_OFFSET], ready to execute.
    pub fn with_rom(rom: &[u8]) -> Result<Self, LoadError> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(LoadError::RomTooLarge { size: rom.len() });
        }

        let mut memory = [0; MEMORY_SIZE];
        memory[FONT_OFFSET..FONT_OFFSET + FONT.len()].copy_from_slice(&FONT);
        memory[ROM_OFFSET..ROM_OFFSET + rom.len()].copy_from_slice(rom);

        Ok(Machine {
            memory,
            v: [0; 16],
            i: 0,
            pc: ROM_OFFSET as u16,
            stack: [0; STACK_DEPTH],
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            prev_keys: 0,
            keys: 0,
            screen: [0; SCREEN_HEIGHT],
            should_draw: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_rom_seeds_font_and_rom() {
        let machine = Machine::with_rom(&[0xAA, 0xBB]).unwrap();
        assert_eq!(machine.memory[FONT_OFFSET..FONT_OFFSET + 80], FONT);
        assert_eq!(machine.memory[ROM_OFFSET..ROM_OFFSET + 2], [0xAA, 0xBB]);
        assert_eq!(machine.pc, ROM_OFFSET as u16);
    }

    #[test]
    fn test_with_rom_starts_zeroed() {
        let machine = Machine::with_rom(&[]).unwrap();
        assert_eq!(machine.v, [0; 16]);
        assert_eq!(machine.i, 0);
        assert_eq!(machine.sp, 0);
        assert_eq!(machine.delay_timer, 0);
        assert_eq!(machine.sound_timer, 0);
        assert_eq!(machine.keys, 0);
        assert_eq!(machine.screen, [0; SCREEN_HEIGHT]);
        assert!(!machine.should_draw);
    }

    #[test]
    fn test_with_rom_accepts_max_size() {
        assert!(Machine::with_rom(&[0; MAX_ROM_SIZE]).is_ok());
    }

    #[test]
    fn test_with_rom_rejects_oversized_rom() {
        let result = Machine::with_rom(&[0; MAX_ROM_SIZE + 1]);
        assert_eq!(
            result.err(),
            Some(LoadError::RomTooLarge {
                size: MAX_ROM_SIZE + 1
            })
        );
    }
}
