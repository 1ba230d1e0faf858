/// # Opcodes
///
/// CHIP-8 opcodes are 16 bits each. The nibbles not used to select the
/// operation carry its operands:
/// - `[_X__]` the register Vx, or the top of a V0..Vx register range
/// - `[__Y_]` the register Vy
/// - `[___N]` a 4-bit immediate (sprite height)
/// - `[__NN]` an 8-bit immediate
/// - `[_NNN]` a 12-bit address
pub trait Opcode {
    /// The Opcode's second nibble.
    /// `[_X__]`
    fn x(&self) -> u8;

    /// The Opcode's third nibble.
    /// `[__Y_]`
    fn y(&self) -> u8;

    /// The Opcode's fourth nibble.
    /// `[___N]`
    fn n(&self) -> u8;

    /// The Opcode's least significant byte.
    /// `[__NN]`
    fn nn(&self) -> u8;

    /// The Opcode without its most significant nibble.
    /// `[_NNN]`
    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn x(&self) -> u8 {
        (self >> 8 & 0x0F) as u8
    }

    fn y(&self) -> u8 {
        (self >> 4 & 0x0F) as u8
    }

    fn n(&self) -> u8 {
        (self & 0x0F) as u8
    }

    fn nn(&self) -> u8 {
        (self & 0xFF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_x() {
        let op: u16 = 0xABCD;
        assert_eq!(op.x(), 0xB);
    }

    #[test]
    fn test_y() {
        let op: u16 = 0xABCD;
        assert_eq!(op.y(), 0xC);
    }

    #[test]
    fn test_n() {
        let op: u16 = 0xABCD;
        assert_eq!(op.n(), 0xD);
    }

    #[test]
    fn test_nn() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nn(), 0xCD);
    }

    #[test]
    fn test_nnn() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nnn(), 0x0BCD);
    }
}
