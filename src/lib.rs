// SPC-700: the 8-bit processor in the SNES audio unit.
// The host owns the memory (RAM, DSP and I/O ports) and drives the processor one cycle at a time.

#[macro_use]
mod common;
mod constants;

pub mod mem;
mod spc;
mod state;

pub use mem::{
    RAM,
    SPCMem
};
pub use spc::{
    decode,
    AddrMode,
    Cond,
    Fault,
    FaultPolicy,
    Op,
    Opcode,
    PSFlags,
    Reg,
    SPC
};
pub use state::SPCState;
