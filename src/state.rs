// Snapshot of the SPC-700 registers, for inspection or for loading saved state.
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SPCState {
    pub a:      u8,     // Accumulator
    pub x:      u8,     // X-Index
    pub y:      u8,     // Y-Index
    pub sp:     u8,     // Stack Pointer
    pub pc:     u16,    // Program Counter
    pub psw:    u8,     // Program Status Word
}

impl fmt::Display for SPCState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a: ${:02X} x: ${:02X} y: ${:02X} sp: ${:02X} pc: ${:04X} nvpbhizc: {:08b}",
            self.a, self.x, self.y, self.sp, self.pc, self.psw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let state = SPCState {
            a:      0x12,
            x:      0x34,
            y:      0x56,
            sp:     0xEF,
            pc:     0x0430,
            psw:    0x82,
        };

        assert_eq!(state.to_string(), "a: $12 x: $34 y: $56 sp: $EF pc: $0430 nvpbhizc: 10000010");
    }
}
