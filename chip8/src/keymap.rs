use sdl2::keyboard::{KeyboardState, Scancode};

/// The hexadecimal keypad mapped to the left four QWERTY columns, indexed by
/// CHIP-8 key number.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
const KEYMAP: [Scancode; 16] = [
    Scancode::X,
    Scancode::Num1,
    Scancode::Num2,
    Scancode::Num3,
    Scancode::Q,
    Scancode::W,
    Scancode::E,
    Scancode::A,
    Scancode::S,
    Scancode::D,
    Scancode::Z,
    Scancode::C,
    Scancode::Num4,
    Scancode::R,
    Scancode::F,
    Scancode::V,
];

/// Snapshots the keyboard into the engine's 16-bit key-down mask, bit i for
/// CHIP-8 key i.
pub fn key_mask(keyboard: &KeyboardState) -> u16 {
    KEYMAP
        .iter()
        .enumerate()
        .filter(|(_, scancode)| keyboard.is_scancode_pressed(**scancode))
        .fold(0, |mask, (key, _)| mask | 1 << key)
}
