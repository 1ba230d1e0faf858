//! The 34 instruction handlers.
//!
//! Each handler runs after the program counter has already been advanced
//! past its opcode, so "skip next instruction" adds 2 and the key-wait stall
//! subtracts 2 to re-execute itself.
//!
//! VF is written last wherever it doubles as an operand, so an instruction
//! naming V15 leaves the flag, not the intermediate result, behind.

use crate::constants::{
    FONT_OFFSET, FONT_STRIDE, SCREEN_HEIGHT, SCREEN_WIDTH, STACK_DEPTH,
};
use crate::opcode::Opcode;
use crate::state::Machine;

/// Masks an I-derived address into the 12-bit memory range.
fn mem_index(base: u16, offset: usize) -> usize {
    (base as usize + offset) & 0xFFF
}

/// 00E0: clear the screen
pub fn cls(m: &mut Machine, _op: u16) {
    m.screen = [0; SCREEN_HEIGHT];
    m.should_draw = true;
}

/// 00EE: PC = stack.pop()
pub fn ret(m: &mut Machine, _op: u16) {
    m.sp = m.sp.wrapping_sub(1);
    m.pc = m.stack[m.sp as usize % STACK_DEPTH];
}

/// 1NNN: PC = NNN
pub fn jp(m: &mut Machine, op: u16) {
    m.pc = op.nnn();
}

/// 2NNN: stack.push(PC); PC = NNN
pub fn call(m: &mut Machine, op: u16) {
    m.stack[m.sp as usize % STACK_DEPTH] = m.pc;
    m.sp = m.sp.wrapping_add(1);
    m.pc = op.nnn();
}

/// 3XNN: skip if Vx == NN
pub fn se_nn(m: &mut Machine, op: u16) {
    if m.v[op.x() as usize] == op.nn() {
        m.pc += 2;
    }
}

/// 4XNN: skip if Vx != NN
pub fn sne_nn(m: &mut Machine, op: u16) {
    if m.v[op.x() as usize] != op.nn() {
        m.pc += 2;
    }
}

/// 5XY0: skip if Vx == Vy
pub fn se_vy(m: &mut Machine, op: u16) {
    if m.v[op.x() as usize] == m.v[op.y() as usize] {
        m.pc += 2;
    }
}

/// 6XNN: Vx = NN
pub fn ld_nn(m: &mut Machine, op: u16) {
    m.v[op.x() as usize] = op.nn();
}

/// 7XNN: Vx += NN, wrapping, no flag
pub fn add_nn(m: &mut Machine, op: u16) {
    let x = op.x() as usize;
    m.v[x] = m.v[x].wrapping_add(op.nn());
}

/// 8XY0: Vx = Vy
pub fn ld_vy(m: &mut Machine, op: u16) {
    m.v[op.x() as usize] = m.v[op.y() as usize];
}

/// 8XY1: Vx |= Vy; VF = 0
pub fn or_vy(m: &mut Machine, op: u16) {
    m.v[op.x() as usize] |= m.v[op.y() as usize];
    m.v[0xF] = 0;
}

/// 8XY2: Vx &= Vy; VF = 0
pub fn and_vy(m: &mut Machine, op: u16) {
    m.v[op.x() as usize] &= m.v[op.y() as usize];
    m.v[0xF] = 0;
}

/// 8XY3: Vx ^= Vy; VF = 0
pub fn xor_vy(m: &mut Machine, op: u16) {
    m.v[op.x() as usize] ^= m.v[op.y() as usize];
    m.v[0xF] = 0;
}

/// 8XY4: Vx += Vy; VF = carry
pub fn add_vy(m: &mut Machine, op: u16) {
    let (res, carry) = m.v[op.x() as usize].overflowing_add(m.v[op.y() as usize]);
    m.v[op.x() as usize] = res;
    m.v[0xF] = carry as u8;
}

/// 8XY5: Vx -= Vy; VF = !borrow
pub fn sub_vy(m: &mut Machine, op: u16) {
    let (res, borrow) = m.v[op.x() as usize].overflowing_sub(m.v[op.y() as usize]);
    m.v[op.x() as usize] = res;
    m.v[0xF] = !borrow as u8;
}

/// 8XY6: Vx = Vy >> 1; VF = low bit of Vy
pub fn shr(m: &mut Machine, op: u16) {
    let vy = m.v[op.y() as usize];
    m.v[op.x() as usize] = vy >> 1;
    m.v[0xF] = vy & 0x1;
}

/// 8XY7: Vx = Vy - Vx; VF = !borrow
pub fn subn(m: &mut Machine, op: u16) {
    let (res, borrow) = m.v[op.y() as usize].overflowing_sub(m.v[op.x() as usize]);
    m.v[op.x() as usize] = res;
    m.v[0xF] = !borrow as u8;
}

/// 8XYE: Vx = Vy << 1; VF = high bit of Vy
pub fn shl(m: &mut Machine, op: u16) {
    let vy = m.v[op.y() as usize];
    m.v[op.x() as usize] = vy << 1;
    m.v[0xF] = vy >> 7;
}

/// 9XY0: skip if Vx != Vy
pub fn sne_vy(m: &mut Machine, op: u16) {
    if m.v[op.x() as usize] != m.v[op.y() as usize] {
        m.pc += 2;
    }
}

/// ANNN: I = NNN
pub fn ld_i(m: &mut Machine, op: u16) {
    m.i = op.nnn();
}

/// BNNN: PC = V0 + NNN
pub fn jp_v0(m: &mut Machine, op: u16) {
    m.pc = u16::from(m.v[0x0]) + op.nnn();
}

/// CXNN: Vx = random byte & NN
pub fn rnd(m: &mut Machine, op: u16) {
    m.v[op.x() as usize] = rand::random::<u8>() & op.nn();
}

/// DXYN: XOR an N-row sprite from memory[I..] at (Vx, Vy); VF = collision
///
/// The origin wraps onto the screen but the sprite itself is clipped, not
/// wrapped, at the right and bottom edges.
pub fn draw(m: &mut Machine, op: u16) {
    let origin_x = m.v[op.x() as usize] as usize % SCREEN_WIDTH;
    let origin_y = m.v[op.y() as usize] as usize % SCREEN_HEIGHT;

    let mut erased = false;
    for row in 0..op.n() as usize {
        let y = origin_y + row;
        if y >= SCREEN_HEIGHT {
            break;
        }
        let sprite = m.memory[mem_index(m.i, row)];
        for bit in 0..8 {
            let x = origin_x + bit;
            if x >= SCREEN_WIDTH {
                break;
            }
            if sprite >> (7 - bit) & 0x1 == 0 {
                continue;
            }
            let mask = 1u64 << (SCREEN_WIDTH - 1 - x);
            erased |= m.screen[y] & mask != 0;
            m.screen[y] ^= mask;
        }
    }

    m.v[0xF] = erased as u8;
    m.should_draw = true;
}

/// EX9E: skip if key Vx is down
pub fn skp(m: &mut Machine, op: u16) {
    if m.keys >> (m.v[op.x() as usize] & 0xF) & 0x1 == 0x1 {
        m.pc += 2;
    }
}

/// EXA1: skip if key Vx is up
pub fn sknp(m: &mut Machine, op: u16) {
    if m.keys >> (m.v[op.x() as usize] & 0xF) & 0x1 == 0x0 {
        m.pc += 2;
    }
}

/// FX07: Vx = DT
pub fn ld_dt(m: &mut Machine, op: u16) {
    m.v[op.x() as usize] = m.delay_timer;
}

/// FX0A: stall until a key release edge, then Vx = released key
///
/// A release is a bit that was set in the previous frame's mask and is clear
/// in the current one. With no release yet, the program counter rewinds onto
/// this instruction so it re-executes next frame.
pub fn wait_key(m: &mut Machine, op: u16) {
    let released = m.prev_keys & !m.keys;
    if released == 0 {
        m.pc -= 2;
        return;
    }
    m.v[op.x() as usize] = released.trailing_zeros() as u8;
}

/// FX15: DT = Vx
pub fn set_dt(m: &mut Machine, op: u16) {
    m.delay_timer = m.v[op.x() as usize];
}

/// FX18: ST = Vx
pub fn set_st(m: &mut Machine, op: u16) {
    m.sound_timer = m.v[op.x() as usize];
}

/// FX1E: I += Vx, no flag
pub fn add_i(m: &mut Machine, op: u16) {
    m.i = m.i.wrapping_add(u16::from(m.v[op.x() as usize]));
}

/// FX29: I = address of the font glyph for the low nibble of Vx
pub fn font(m: &mut Machine, op: u16) {
    let glyph = m.v[op.x() as usize] & 0xF;
    m.i = (FONT_OFFSET + FONT_STRIDE * glyph as usize) as u16;
}

/// FX33: memory[I..I+3] = the decimal digits of Vx
pub fn bcd(m: &mut Machine, op: u16) {
    let vx = m.v[op.x() as usize];
    m.memory[mem_index(m.i, 0)] = vx / 100;
    m.memory[mem_index(m.i, 1)] = vx / 10 % 10;
    m.memory[mem_index(m.i, 2)] = vx % 10;
}

/// FX55: memory[I..=I+X] = V0..=Vx; I += X + 1
pub fn store(m: &mut Machine, op: u16) {
    let count = op.x() as usize + 1;
    for r in 0..count {
        m.memory[mem_index(m.i, r)] = m.v[r];
    }
    m.i = m.i.wrapping_add(count as u16);
}

/// FX65: V0..=Vx = memory[I..=I+X]; I += X + 1
pub fn load(m: &mut Machine, op: u16) {
    let count = op.x() as usize + 1;
    for r in 0..count {
        m.v[r] = m.memory[mem_index(m.i, r)];
    }
    m.i = m.i.wrapping_add(count as u16);
}
