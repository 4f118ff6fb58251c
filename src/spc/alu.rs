// Instructions: Arithmetic and logic
use super::{
    SPC,
    types::*
};
use crate::mem::SPCMem;

impl<M: SPCMem> SPC<M> {
    // A = A | m
    pub(super) fn or(&mut self, ops: Operands) {
        let op = self.read_data(ops.first);
        self.a |= op;
        self.set_nz(self.a);
    }

    // d = d | s
    pub(super) fn or_mem(&mut self, ops: Operands) {
        let result = self.read_data(ops.second) | self.read_data(ops.first);
        self.write_data(ops.second, result);
        self.set_nz(result);
    }

    // A = A & m
    pub(super) fn and(&mut self, ops: Operands) {
        let op = self.read_data(ops.first);
        self.a &= op;
        self.set_nz(self.a);
    }

    // d = d & s
    pub(super) fn and_mem(&mut self, ops: Operands) {
        let result = self.read_data(ops.second) & self.read_data(ops.first);
        self.write_data(ops.second, result);
        self.set_nz(result);
    }

    // A = A ^ m
    pub(super) fn eor(&mut self, ops: Operands) {
        let op = self.read_data(ops.first);
        self.a ^= op;
        self.set_nz(self.a);
    }

    // d = d ^ s
    pub(super) fn eor_mem(&mut self, ops: Operands) {
        let result = self.read_data(ops.second) ^ self.read_data(ops.first);
        self.write_data(ops.second, result);
        self.set_nz(result);
    }

    // A = A + m + C
    pub(super) fn adc(&mut self, ops: Operands) {
        let op = self.read_data(ops.first);
        self.a = self.add_with_carry(self.a, op);
    }

    // d = d + s + C
    pub(super) fn adc_mem(&mut self, ops: Operands) {
        let op = self.read_data(ops.first);
        let dst = self.read_data(ops.second);
        let result = self.add_with_carry(dst, op);
        self.write_data(ops.second, result);
    }

    // A = A - m - !C
    pub(super) fn sbc(&mut self, ops: Operands) {
        let op = self.read_data(ops.first);
        self.a = self.add_with_carry(self.a, !op);
    }

    // d = d - s - !C
    pub(super) fn sbc_mem(&mut self, ops: Operands) {
        let op = self.read_data(ops.first);
        let dst = self.read_data(ops.second);
        let result = self.add_with_carry(dst, !op);
        self.write_data(ops.second, result);
    }

    // r - m
    pub(super) fn cmp(&mut self, reg: Reg, ops: Operands) {
        let op = self.read_data(ops.first);
        self.compare(self.reg(reg), op);
    }

    // d - s
    pub(super) fn cmp_mem(&mut self, ops: Operands) {
        let dst = self.read_data(ops.second);
        let op = self.read_data(ops.first);
        self.compare(dst, op);
    }

    pub(super) fn asl(&mut self, ops: Operands) {
        let op = self.read_data(ops.first);
        let result = self.shift_left(op, false);
        self.write_data(ops.first, result);
    }

    pub(super) fn lsr(&mut self, ops: Operands) {
        let op = self.read_data(ops.first);
        let result = self.shift_right(op, false);
        self.write_data(ops.first, result);
    }

    pub(super) fn rol(&mut self, ops: Operands) {
        let op = self.read_data(ops.first);
        let result = self.shift_left(op, self.ps.contains(PSFlags::C));
        self.write_data(ops.first, result);
    }

    pub(super) fn ror(&mut self, ops: Operands) {
        let op = self.read_data(ops.first);
        let result = self.shift_right(op, self.ps.contains(PSFlags::C));
        self.write_data(ops.first, result);
    }

    pub(super) fn inc(&mut self, ops: Operands) {
        let result = self.read_data(ops.first).wrapping_add(1);
        self.set_nz(result);
        self.write_data(ops.first, result);
    }

    pub(super) fn dec(&mut self, ops: Operands) {
        let result = self.read_data(ops.first).wrapping_sub(1);
        self.set_nz(result);
        self.write_data(ops.first, result);
    }

    pub(super) fn inc_reg(&mut self, reg: Reg) {
        let result = self.reg(reg).wrapping_add(1);
        self.set_reg(reg, result);
        self.set_nz(result);
    }

    pub(super) fn dec_reg(&mut self, reg: Reg) {
        let result = self.reg(reg).wrapping_sub(1);
        self.set_reg(reg, result);
        self.set_nz(result);
    }

    // Swap nibbles of A.
    pub(super) fn xcn(&mut self) {
        self.a = self.a.rotate_left(4);
        self.set_nz(self.a);
    }
}

// Instructions: 16-bit
impl<M: SPCMem> SPC<M> {
    // YA = d
    pub(super) fn movw(&mut self, ops: Operands) {
        self.a = self.read_data(ops.first);
        self.y = self.read_data(ops.second);

        self.ps.set(PSFlags::N, test_bit!(self.y, 7, u8));
        self.ps.set(PSFlags::Z, self.a == 0 && self.y == 0);
    }

    // d = YA
    pub(super) fn movw_store(&mut self, ops: Operands) {
        self.read_data(ops.first);
        self.write_data(ops.first, self.a);
        self.write_data(ops.second, self.y);
    }

    pub(super) fn incw(&mut self, ops: Operands) {
        let result = self.read_word(ops).wrapping_add(1);
        self.set_nz16(result);
        self.write_word(ops, result);
    }

    pub(super) fn decw(&mut self, ops: Operands) {
        let result = self.read_word(ops).wrapping_sub(1);
        self.set_nz16(result);
        self.write_word(ops, result);
    }

    // YA = YA + d
    pub(super) fn addw(&mut self, ops: Operands) {
        let op = self.read_word(ops);
        let result = self.add_word(op, 0);

        self.y = hi!(result);
        self.a = lo!(result);
    }

    // YA = YA - d
    pub(super) fn subw(&mut self, ops: Operands) {
        let op = self.read_word(ops);
        let result = self.add_word(!op, 1);

        self.y = hi!(result);
        self.a = lo!(result);
    }

    // YA - d
    pub(super) fn cmpw(&mut self, ops: Operands) {
        let ya = make16!(self.y, self.a) as u32;
        let op = self.read_word(ops);

        let result = ya + ((!op) as u32) + 1;

        self.set_nz16(result as u16);
        self.ps.set(PSFlags::C, result > 0xFFFF);
    }

    // YA = Y * A
    pub(super) fn mul(&mut self) {
        let result = (self.y as u16) * (self.a as u16);

        self.y = hi!(result);
        self.a = lo!(result);
        self.set_nz(self.y);
    }

    // A = YA / X, Y = YA % X
    pub(super) fn div(&mut self) {
        let ya = make16!(self.y, self.a);

        let (quotient, remainder) = if self.x == 0 {
            (0xFFFF, lo!(ya))
        } else {
            let x = self.x as u16;
            (ya / x, lo!(ya % x))
        };

        self.ps.set(PSFlags::V, quotient > 0xFF);
        self.ps.set(PSFlags::H, (self.x & 0xF) <= (self.y & 0xF));

        self.a = lo!(quotient);
        self.y = remainder;
        self.set_nz(self.a);
    }

    // Decimal adjust after addition.
    pub(super) fn daa(&mut self) {
        if self.a > 0x99 || self.ps.contains(PSFlags::C) {
            self.a = self.a.wrapping_add(0x60);
            self.ps.insert(PSFlags::C);
        }
        if (self.a & 0xF) > 9 || self.ps.contains(PSFlags::H) {
            self.a = self.a.wrapping_add(0x06);
        }
        self.set_nz(self.a);
    }

    // Decimal adjust after subtraction.
    pub(super) fn das(&mut self) {
        if self.a > 0x99 || !self.ps.contains(PSFlags::C) {
            self.a = self.a.wrapping_sub(0x60);
            self.ps.remove(PSFlags::C);
        }
        if (self.a & 0xF) > 9 || !self.ps.contains(PSFlags::H) {
            self.a = self.a.wrapping_sub(0x06);
        }
        self.set_nz(self.a);
    }
}

// ALU helpers
impl<M: SPCMem> SPC<M> {
    // op1 + op2 + C, setting NVHZC.
    // Subtraction passes the inverted operand, so C is the inverse of borrow.
    pub(super) fn add_with_carry(&mut self, op1: u8, op2: u8) -> u8 {
        let carry = self.carry() as u16;
        let full = (op1 as u16) + (op2 as u16) + carry;
        let result = lo!(full);

        self.ps.set(PSFlags::V, ((op1 ^ op2) & 0x80) == 0 && ((op2 ^ result) & 0x80) != 0);
        self.ps.set(PSFlags::H, (op1 & 0xF) as u16 + (op2 & 0xF) as u16 + carry > 0xF);
        self.ps.set(PSFlags::C, full > 0xFF);
        self.set_nz(result);

        result
    }

    // op1 - op2 as op1 + !op2 + 1. Sets NZC.
    fn compare(&mut self, op1: u8, op2: u8) {
        let full = (op1 as u16) + ((!op2) as u16) + 1;

        self.ps.set(PSFlags::C, full > 0xFF);
        self.set_nz(lo!(full));
    }

    // YA + op + carry_in, setting NVHZC. H is the carry out of bit 11.
    fn add_word(&mut self, op: u16, carry_in: u32) -> u16 {
        let ya = make16!(self.y, self.a);
        let full = (ya as u32) + (op as u32) + carry_in;
        let result = full as u16;

        self.ps.set(PSFlags::V, ((ya ^ op) & 0x8000) == 0 && ((op ^ result) & 0x8000) != 0);
        self.ps.set(PSFlags::H, ((ya & 0xFFF) as u32) + ((op & 0xFFF) as u32) + carry_in > 0xFFF);
        self.ps.set(PSFlags::C, full > 0xFFFF);
        self.set_nz16(result);

        result
    }

    // Shift left, bringing in the given bit at the bottom. C gets the old top bit.
    pub(super) fn shift_left(&mut self, op: u8, bit_in: bool) -> u8 {
        let result = (op << 1) | (bit_in as u8);

        self.ps.set(PSFlags::C, test_bit!(op, 7, u8));
        self.set_nz(result);

        result
    }

    // Shift right, bringing in the given bit at the top. C gets the old bottom bit.
    pub(super) fn shift_right(&mut self, op: u8, bit_in: bool) -> u8 {
        let result = (op >> 1) | ((bit_in as u8) << 7);

        self.ps.set(PSFlags::C, test_bit!(op, 0, u8));
        self.set_nz(result);

        result
    }

    // Read a little-endian word from the two direct page addresses.
    fn read_word(&mut self, ops: Operands) -> u16 {
        let lo = self.read_data(ops.first);
        let hi = self.read_data(ops.second);
        make16!(hi, lo)
    }

    fn write_word(&mut self, ops: Operands, data: u16) {
        self.write_data(ops.first, lo!(data));
        self.write_data(ops.second, hi!(data));
    }
}
