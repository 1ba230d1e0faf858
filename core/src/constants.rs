/// Total addressable memory; a program counter at or past this is a dead
/// session.
pub const MEMORY_SIZE: usize = 4096;

/// Where ROMs are loaded and where execution starts.
pub const ROM_OFFSET: usize = 0x200;

/// Everything above the reserved interpreter area is available to the ROM.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - ROM_OFFSET;

/// Where the built-in font lives, inside the reserved interpreter area.
pub const FONT_OFFSET: usize = 0x50;

/// Bytes per font glyph.
pub const FONT_STRIDE: usize = 5;

/// Call stack depth. The stack pointer wraps at this depth rather than
/// faulting, matching the unguarded behavior of the original machine.
pub const STACK_DEPTH: usize = 16;

pub const SCREEN_WIDTH: usize = 64;
pub const SCREEN_HEIGHT: usize = 32;

/// Instructions per second.
pub const CLOCK_SPEED: u32 = 540;

/// Timer/display frames per second.
pub const FRAME_RATE: u32 = 60;

/// How many instructions execute between consecutive timer ticks.
pub const INSTRUCTIONS_PER_FRAME: u32 = CLOCK_SPEED / FRAME_RATE;

/// The hex digit sprites 0-F, five bytes per glyph, each row using the high
/// nibble only.
pub const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
