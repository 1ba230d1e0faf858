use crate::constants::{INSTRUCTIONS_PER_FRAME, MEMORY_SIZE};
use crate::instruction::decode;
use crate::state::{LoadError, Machine, Screen};

/// What a call to [Chip8::step] or [Chip8::frame] left behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The instruction pointer moved on.
    Advanced,
    /// The instruction pointer stayed put: a key-wait stall or an idle
    /// jump-to-self loop. The driver should keep supplying input snapshots.
    Waiting,
    /// The session is dead: the pc ran off the end of memory, either by
    /// itself or as the crash response to an unrecognized opcode.
    Halted,
}

/// # Chip-8
/// The interpreter engine: a deterministic state transformer over one
/// [Machine], given an opcode stream in memory and a key mask each frame.
///
/// Owns no OS resources and performs no I/O. An external driver calls
/// [Chip8::frame] once per 60 Hz frame, presents via [Chip8::take_frame],
/// feeds the beep from [Chip8::sound_active], and stops the session when
/// [Chip8::halted] reports the machine dead.
pub struct Chip8 {
    state: Machine,
}

impl Chip8 {
    pub fn new(rom: &[u8]) -> Result<Self, LoadError> {
        Ok(Chip8 {
            state: Machine::with_rom(rom)?,
        })
    }

    /// Executes a single instruction.
    ///
    /// Fetch reads the big-endian byte pair at the pc (the sentinel 0xFFFF
    /// when the pc would run past memory), the pc advances by 2, then the
    /// decoded handler mutates the machine. An unrecognized opcode forces
    /// the pc out of range so the session halts rather than continuing on
    /// corrupt state.
    pub fn step(&mut self) -> Step {
        let at = self.state.pc;
        if at as usize >= MEMORY_SIZE {
            return Step::Halted;
        }

        let op = self.fetch();
        self.state.pc = self.state.pc.wrapping_add(2);

        log::trace!("{:04X} pc={:04X} i={:04X}", op, at, self.state.i);

        match decode(op) {
            Some(run) => run(&mut self.state, op),
            None => {
                log::warn!("unknown opcode {:04X} at {:04X}", op, at);
                self.state.pc = MEMORY_SIZE as u16;
                return Step::Halted;
            }
        }

        if self.state.pc == at {
            Step::Waiting
        } else {
            Step::Advanced
        }
    }

    /// Runs one emulated frame: [INSTRUCTIONS_PER_FRAME] instructions, one
    /// timer tick, and the key snapshot for the next frame's edge detection.
    ///
    /// `keys` is the current key-down bitmask from the input collaborator,
    /// bit i for key i.
    pub fn frame(&mut self, keys: u16) -> Step {
        let mut status = Step::Advanced;
        for _ in 0..INSTRUCTIONS_PER_FRAME {
            status = self.step();
            if status == Step::Halted {
                break;
            }
        }
        self.tick_timers();
        self.latch_keys(keys);
        status
    }

    /// Returns the screen and clears the draw-pending flag if any
    /// instruction mutated the framebuffer since the last take.
    pub fn take_frame(&mut self) -> Option<Screen> {
        if self.state.should_draw {
            self.state.should_draw = false;
            Some(self.state.screen)
        } else {
            None
        }
    }

    /// Whether the audio collaborator should be sounding the beep.
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Whether the session is dead and the driver should stop calling in.
    pub fn halted(&self) -> bool {
        self.state.pc as usize >= MEMORY_SIZE
    }

    /// Reads the two bytes at the pc as one big-endian opcode. Returns the
    /// unmatchable 0xFFFF instead of reading past the end of memory.
    fn fetch(&self) -> u16 {
        let pc = self.state.pc as usize;
        if pc + 1 >= MEMORY_SIZE {
            return 0xFFFF;
        }
        u16::from(self.state.memory[pc]) << 8 | u16::from(self.state.memory[pc + 1])
    }

    fn tick_timers(&mut self) {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
        }
    }

    fn latch_keys(&mut self, keys: u16) {
        self.state.prev_keys = self.state.keys;
        self.state.keys = keys;
    }
}
