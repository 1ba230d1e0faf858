pub use chip8::{Chip8, Step};
pub use state::{LoadError, Machine, Screen};

mod chip8;
pub mod constants;
mod instruction;
mod opcode;
mod operations;
mod state;
