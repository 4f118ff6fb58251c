// Instructions: branches, jumps and subroutines
use super::{
    SPC,
    types::*
};
use crate::{
    constants::*,
    mem::SPCMem
};

impl<M: SPCMem> SPC<M> {
    pub(super) fn branch_if(&mut self, cond: Cond, ops: Operands) {
        use Cond::*;

        let taken = match cond {
            Pl => !self.ps.contains(PSFlags::N),
            Mi => self.ps.contains(PSFlags::N),
            Vc => !self.ps.contains(PSFlags::V),
            Vs => self.ps.contains(PSFlags::V),
            Cc => !self.ps.contains(PSFlags::C),
            Cs => self.ps.contains(PSFlags::C),
            Ne => !self.ps.contains(PSFlags::Z),
            Eq => self.ps.contains(PSFlags::Z),
        };
        self.branch(taken, ops.first);
    }

    // Branch if A != d.
    pub(super) fn cbne(&mut self, ops: Operands) {
        let data = self.read_data(ops.first);
        self.branch(self.a != data, ops.second);
    }

    // d = d - 1, branch if not zero.
    pub(super) fn dbnz(&mut self, ops: Operands) {
        let data = self.read_data(ops.first).wrapping_sub(1);
        self.write_data(ops.first, data);
        self.branch(data != 0, ops.second);
    }

    // Y = Y - 1, branch if not zero.
    pub(super) fn dbnz_y(&mut self, ops: Operands) {
        self.y = self.y.wrapping_sub(1);
        self.branch(self.y != 0, ops.first);
    }

    // Always taken. The base cycle count already covers the jump.
    pub(super) fn bra(&mut self, ops: Operands) {
        self.pc = self.pc.wrapping_add(ops.first);
    }

    pub(super) fn jmp(&mut self, ops: Operands) {
        self.pc = ops.first;
    }

    pub(super) fn call(&mut self, ops: Operands) {
        self.push_pc();
        self.pc = ops.first;
    }

    // Call into the top page.
    pub(super) fn pcall(&mut self, ops: Operands) {
        self.push_pc();
        self.pc = U_PAGE | (ops.first & 0xFF);
    }

    // Call through one of 16 vectors, selected by the top nibble of the opcode.
    pub(super) fn tcall(&mut self, opcode: u8) {
        self.push_pc();
        let vector = TCALL_BASE + (((15 - (opcode >> 4)) as u16) << 1);
        self.pc = self.read_vector(vector);
    }

    pub(super) fn brk(&mut self) {
        self.push_pc();
        self.push(self.psw());
        self.ps.remove(PSFlags::I);
        self.ps.insert(PSFlags::B);
        self.pc = self.read_vector(BRK_VECTOR);
    }

    pub(super) fn ret(&mut self) {
        self.pc = self.pop_pc();
    }

    pub(super) fn reti(&mut self) {
        let psw = self.pop();
        self.set_psw(psw);
        self.pc = self.pop_pc();
    }

    // Apply the displacement if the condition holds.
    // A taken branch costs extra cycles on the current instruction.
    pub(super) fn branch(&mut self, taken: bool, disp: u16) {
        if taken {
            self.pc = self.pc.wrapping_add(disp);
            self.cycles_left += BRANCH_CYCLES;
        }
    }

    fn push_pc(&mut self) {
        self.push(hi!(self.pc));
        self.push(lo!(self.pc));
    }

    fn pop_pc(&mut self) -> u16 {
        let pc_lo = self.pop();
        let pc_hi = self.pop();
        make16!(pc_hi, pc_lo)
    }

    fn read_vector(&mut self, addr: u16) -> u16 {
        let lo = self.read_data(addr);
        let hi = self.read_data(addr.wrapping_add(1));
        make16!(hi, lo)
    }
}
