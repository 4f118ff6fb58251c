// Instructions: single bit operations
use super::{
    SPC,
    types::*
};
use crate::mem::SPCMem;

// Bit selected by the top 3 bits of SET1, CLR1, BBS and BBC opcodes.
#[inline]
fn opcode_bit(opcode: u8) -> u8 {
    bit!(opcode >> 5)
}

impl<M: SPCMem> SPC<M> {
    // d.b = 1
    pub(super) fn set1(&mut self, ops: Operands, opcode: u8) {
        let data = self.read_data(ops.first) | opcode_bit(opcode);
        self.write_data(ops.first, data);
    }

    // d.b = 0
    pub(super) fn clr1(&mut self, ops: Operands, opcode: u8) {
        let data = self.read_data(ops.first) & !opcode_bit(opcode);
        self.write_data(ops.first, data);
    }

    // Branch if d.b is set.
    pub(super) fn bbs(&mut self, ops: Operands, opcode: u8) {
        let data = self.read_data(ops.first);
        self.branch((data & opcode_bit(opcode)) != 0, ops.second);
    }

    // Branch if d.b is clear.
    pub(super) fn bbc(&mut self, ops: Operands, opcode: u8) {
        let data = self.read_data(ops.first);
        self.branch((data & opcode_bit(opcode)) == 0, ops.second);
    }

    // Test A against m, then m = m | A
    pub(super) fn tset1(&mut self, ops: Operands) {
        let data = self.read_data(ops.first);
        self.set_nz(self.a.wrapping_sub(data));
        self.write_data(ops.first, data | self.a);
    }

    // Test A against m, then m = m & !A
    pub(super) fn tclr1(&mut self, ops: Operands) {
        let data = self.read_data(ops.first);
        self.set_nz(self.a.wrapping_sub(data));
        self.write_data(ops.first, data & !self.a);
    }

    // C = C | m.b / C = C | !m.b
    pub(super) fn or1(&mut self, ops: Operands, not: bool) {
        let bit = self.read_bit(ops) != not;
        if bit {
            self.ps.insert(PSFlags::C);
        }
    }

    // C = C & m.b / C = C & !m.b
    pub(super) fn and1(&mut self, ops: Operands, not: bool) {
        let bit = self.read_bit(ops) != not;
        if !bit {
            self.ps.remove(PSFlags::C);
        }
    }

    // C = C ^ m.b
    pub(super) fn eor1(&mut self, ops: Operands) {
        if self.read_bit(ops) {
            self.ps.toggle(PSFlags::C);
        }
    }

    // m.b = !m.b
    pub(super) fn not1(&mut self, ops: Operands) {
        let data = self.read_data(ops.first) ^ bit!(ops.second);
        self.write_data(ops.first, data);
    }

    // C = m.b
    pub(super) fn mov1(&mut self, ops: Operands) {
        let bit = self.read_bit(ops);
        self.ps.set(PSFlags::C, bit);
    }

    // m.b = C
    pub(super) fn mov1_store(&mut self, ops: Operands) {
        let data = self.read_data(ops.first);
        let result = if self.ps.contains(PSFlags::C) {
            data | bit!(ops.second)
        } else {
            data & !bit!(ops.second)
        };
        self.write_data(ops.first, result);
    }

    fn read_bit(&mut self, ops: Operands) -> bool {
        let data = self.read_data(ops.first);
        test_bit!(data, ops.second, u8)
    }
}
