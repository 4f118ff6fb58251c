// Instructions: data movement
use super::{
    SPC,
    types::*
};
use crate::mem::SPCMem;

const MOV_X_INC_A: u8   = 0xAF; // MOV (X)+, A
const MOV_DIR_IMM: u8   = 0x8F; // MOV d, #i

impl<M: SPCMem> SPC<M> {
    // r = m
    pub(super) fn load(&mut self, reg: Reg, ops: Operands) {
        let data = self.read_data(ops.first);
        self.set_reg(reg, data);
        self.set_nz(data);
    }

    // m = r
    // The target is read before it is written, apart from MOV (X)+, A.
    pub(super) fn store(&mut self, reg: Reg, ops: Operands, opcode: u8) {
        if opcode != MOV_X_INC_A {
            self.read_data(ops.first);
        }
        self.write_data(ops.first, self.reg(reg));
    }

    // Register to register. Moving into SP leaves the flags alone.
    pub(super) fn transfer(&mut self, from: Reg, to: Reg) {
        let data = self.reg(from);
        self.set_reg(to, data);
        if to != Reg::SP {
            self.set_nz(data);
        }
    }

    // d = s
    // MOV d, #i reads the destination first. MOV d, d does not.
    pub(super) fn mov_mem(&mut self, ops: Operands, opcode: u8) {
        if opcode == MOV_DIR_IMM {
            self.read_data(ops.second);
        }
        let data = self.read_data(ops.first);
        self.write_data(ops.second, data);
    }
}
