// Opcode map for the SPC-700.
// Every byte value decodes to an addressing mode, a base cycle count and an operation.

use super::types::*;

// Decode an opcode byte.
pub fn decode(opcode: u8) -> Opcode {
    use AddrMode::*;
    use Cond::*;
    use Op::*;
    use Reg::*;

    match opcode {
        0x00 => op(Imp, 2, Nop),
        0x01 => op(Imp, 8, Tcall),
        0x02 => op(Dir, 4, Set1),
        0x03 => op(DirRel, 5, Bbs),
        0x04 => op(Dir, 3, Or),
        0x05 => op(Abs, 4, Or),
        0x06 => op(XIndir, 3, Or),
        0x07 => op(DirXPtr, 6, Or),
        0x08 => op(Imm, 2, Or),
        0x09 => op(DirDir, 6, OrMem),
        0x0A => op(AbsBit, 5, Or1),
        0x0B => op(Dir, 4, Asl),
        0x0C => op(Abs, 5, Asl),
        0x0D => op(Imp, 4, PushPsw),
        0x0E => op(Abs, 6, Tset1),
        0x0F => op(Imp, 8, Brk),

        0x10 => op(Rel, 2, Branch(Pl)),
        0x11 => op(Imp, 8, Tcall),
        0x12 => op(Dir, 4, Clr1),
        0x13 => op(DirRel, 5, Bbc),
        0x14 => op(DirX, 4, Or),
        0x15 => op(AbsX, 5, Or),
        0x16 => op(AbsY, 5, Or),
        0x17 => op(DirPtrY, 6, Or),
        0x18 => op(ImmDir, 5, OrMem),
        0x19 => op(XYIndir, 5, OrMem),
        0x1A => op(Dir, 6, Decw),
        0x1B => op(DirX, 5, Asl),
        0x1C => op(Imp, 2, AslAcc),
        0x1D => op(Imp, 2, DecReg(X)),
        0x1E => op(Abs, 4, Cmp(X)),
        0x1F => op(AbsXPtr, 6, Jmp),

        0x20 => op(Imp, 2, ClearFlag(PSFlags::P)),
        0x21 => op(Imp, 8, Tcall),
        0x22 => op(Dir, 4, Set1),
        0x23 => op(DirRel, 5, Bbs),
        0x24 => op(Dir, 3, And),
        0x25 => op(Abs, 4, And),
        0x26 => op(XIndir, 3, And),
        0x27 => op(DirXPtr, 6, And),
        0x28 => op(Imm, 2, And),
        0x29 => op(DirDir, 6, AndMem),
        0x2A => op(AbsBit, 5, Or1Not),
        0x2B => op(Dir, 4, Rol),
        0x2C => op(Abs, 5, Rol),
        0x2D => op(Imp, 4, Push(A)),
        0x2E => op(DirRel, 5, Cbne),
        0x2F => op(Rel, 4, Bra),

        0x30 => op(Rel, 2, Branch(Mi)),
        0x31 => op(Imp, 8, Tcall),
        0x32 => op(Dir, 4, Clr1),
        0x33 => op(DirRel, 5, Bbc),
        0x34 => op(DirX, 4, And),
        0x35 => op(AbsX, 5, And),
        0x36 => op(AbsY, 5, And),
        0x37 => op(DirPtrY, 6, And),
        0x38 => op(ImmDir, 5, AndMem),
        0x39 => op(XYIndir, 5, AndMem),
        0x3A => op(Dir, 6, Incw),
        0x3B => op(DirX, 5, Rol),
        0x3C => op(Imp, 2, RolAcc),
        0x3D => op(Imp, 2, IncReg(X)),
        0x3E => op(Dir, 3, Cmp(X)),
        0x3F => op(Abs, 8, Call),

        0x40 => op(Imp, 2, SetFlag(PSFlags::P)),
        0x41 => op(Imp, 8, Tcall),
        0x42 => op(Dir, 4, Set1),
        0x43 => op(DirRel, 5, Bbs),
        0x44 => op(Dir, 3, Eor),
        0x45 => op(Abs, 4, Eor),
        0x46 => op(XIndir, 3, Eor),
        0x47 => op(DirXPtr, 6, Eor),
        0x48 => op(Imm, 2, Eor),
        0x49 => op(DirDir, 6, EorMem),
        0x4A => op(AbsBit, 4, And1),
        0x4B => op(Dir, 4, Lsr),
        0x4C => op(Abs, 5, Lsr),
        0x4D => op(Imp, 4, Push(X)),
        0x4E => op(Abs, 6, Tclr1),
        0x4F => op(Dir, 6, Pcall),

        0x50 => op(Rel, 2, Branch(Vc)),
        0x51 => op(Imp, 8, Tcall),
        0x52 => op(Dir, 4, Clr1),
        0x53 => op(DirRel, 5, Bbc),
        0x54 => op(DirX, 4, Eor),
        0x55 => op(AbsX, 5, Eor),
        0x56 => op(AbsY, 5, Eor),
        0x57 => op(DirPtrY, 6, Eor),
        0x58 => op(ImmDir, 5, EorMem),
        0x59 => op(XYIndir, 5, EorMem),
        0x5A => op(Dir, 4, Cmpw),
        0x5B => op(DirX, 5, Lsr),
        0x5C => op(Imp, 2, LsrAcc),
        0x5D => op(Imp, 2, Transfer(A, X)),
        0x5E => op(Abs, 4, Cmp(Y)),
        0x5F => op(Abs, 3, Jmp),

        0x60 => op(Imp, 2, ClearFlag(PSFlags::C)),
        0x61 => op(Imp, 8, Tcall),
        0x62 => op(Dir, 4, Set1),
        0x63 => op(DirRel, 5, Bbs),
        0x64 => op(Dir, 3, Cmp(A)),
        0x65 => op(Abs, 4, Cmp(A)),
        0x66 => op(XIndir, 3, Cmp(A)),
        0x67 => op(DirXPtr, 6, Cmp(A)),
        0x68 => op(Imm, 2, Cmp(A)),
        0x69 => op(DirDir, 6, CmpMem),
        0x6A => op(AbsBit, 4, And1Not),
        0x6B => op(Dir, 4, Ror),
        0x6C => op(Abs, 5, Ror),
        0x6D => op(Imp, 4, Push(Y)),
        0x6E => op(DirRel, 5, Dbnz),
        0x6F => op(Imp, 5, Ret),

        0x70 => op(Rel, 2, Branch(Vs)),
        0x71 => op(Imp, 8, Tcall),
        0x72 => op(Dir, 4, Clr1),
        0x73 => op(DirRel, 5, Bbc),
        0x74 => op(DirX, 4, Cmp(A)),
        0x75 => op(AbsX, 5, Cmp(A)),
        0x76 => op(AbsY, 5, Cmp(A)),
        0x77 => op(DirPtrY, 6, Cmp(A)),
        0x78 => op(ImmDir, 5, CmpMem),
        0x79 => op(XYIndir, 5, CmpMem),
        0x7A => op(Dir, 5, Addw),
        0x7B => op(DirX, 5, Ror),
        0x7C => op(Imp, 2, RorAcc),
        0x7D => op(Imp, 2, Transfer(X, A)),
        0x7E => op(Dir, 3, Cmp(Y)),
        0x7F => op(Imp, 6, Reti),

        0x80 => op(Imp, 2, SetFlag(PSFlags::C)),
        0x81 => op(Imp, 8, Tcall),
        0x82 => op(Dir, 4, Set1),
        0x83 => op(DirRel, 5, Bbs),
        0x84 => op(Dir, 3, Adc),
        0x85 => op(Abs, 4, Adc),
        0x86 => op(XIndir, 3, Adc),
        0x87 => op(DirXPtr, 6, Adc),
        0x88 => op(Imm, 2, Adc),
        0x89 => op(DirDir, 6, AdcMem),
        0x8A => op(AbsBit, 5, Eor1),
        0x8B => op(Dir, 4, Dec),
        0x8C => op(Abs, 5, Dec),
        0x8D => op(Imm, 2, Load(Y)),
        0x8E => op(Imp, 4, PopPsw),
        0x8F => op(ImmDir, 5, MovMem),

        0x90 => op(Rel, 2, Branch(Cc)),
        0x91 => op(Imp, 8, Tcall),
        0x92 => op(Dir, 4, Clr1),
        0x93 => op(DirRel, 5, Bbc),
        0x94 => op(DirX, 4, Adc),
        0x95 => op(AbsX, 5, Adc),
        0x96 => op(AbsY, 5, Adc),
        0x97 => op(DirPtrY, 6, Adc),
        0x98 => op(ImmDir, 5, AdcMem),
        0x99 => op(XYIndir, 5, AdcMem),
        0x9A => op(Dir, 5, Subw),
        0x9B => op(DirX, 5, Dec),
        0x9C => op(Imp, 2, DecReg(A)),
        0x9D => op(Imp, 2, Transfer(SP, X)),
        0x9E => op(Imp, 12, Div),
        0x9F => op(Imp, 5, Xcn),

        0xA0 => op(Imp, 2, SetFlag(PSFlags::I)),
        0xA1 => op(Imp, 8, Tcall),
        0xA2 => op(Dir, 4, Set1),
        0xA3 => op(DirRel, 5, Bbs),
        0xA4 => op(Dir, 3, Sbc),
        0xA5 => op(Abs, 4, Sbc),
        0xA6 => op(XIndir, 3, Sbc),
        0xA7 => op(DirXPtr, 6, Sbc),
        0xA8 => op(Imm, 2, Sbc),
        0xA9 => op(DirDir, 6, SbcMem),
        0xAA => op(AbsBit, 4, Mov1),
        0xAB => op(Dir, 4, Inc),
        0xAC => op(Abs, 5, Inc),
        0xAD => op(Imm, 2, Cmp(Y)),
        0xAE => op(Imp, 4, Pop(A)),
        0xAF => op(XIndirInc, 4, Store(A)),

        0xB0 => op(Rel, 2, Branch(Cs)),
        0xB1 => op(Imp, 8, Tcall),
        0xB2 => op(Dir, 4, Clr1),
        0xB3 => op(DirRel, 5, Bbc),
        0xB4 => op(DirX, 4, Sbc),
        0xB5 => op(AbsX, 5, Sbc),
        0xB6 => op(AbsY, 5, Sbc),
        0xB7 => op(DirPtrY, 6, Sbc),
        0xB8 => op(ImmDir, 5, SbcMem),
        0xB9 => op(XYIndir, 5, SbcMem),
        0xBA => op(Dir, 5, Movw),
        0xBB => op(DirX, 5, Inc),
        0xBC => op(Imp, 2, IncReg(A)),
        0xBD => op(Imp, 2, Transfer(X, SP)),
        0xBE => op(Imp, 3, Das),
        0xBF => op(XIndirInc, 4, Load(A)),

        0xC0 => op(Imp, 2, ClearFlag(PSFlags::I)),
        0xC1 => op(Imp, 8, Tcall),
        0xC2 => op(Dir, 4, Set1),
        0xC3 => op(DirRel, 5, Bbs),
        0xC4 => op(Dir, 4, Store(A)),
        0xC5 => op(Abs, 5, Store(A)),
        0xC6 => op(XIndir, 4, Store(A)),
        0xC7 => op(DirXPtr, 7, Store(A)),
        0xC8 => op(Imm, 2, Cmp(X)),
        0xC9 => op(Abs, 5, Store(X)),
        0xCA => op(AbsBit, 6, Mov1Store),
        0xCB => op(Dir, 4, Store(Y)),
        0xCC => op(Abs, 5, Store(Y)),
        0xCD => op(Imm, 2, Load(X)),
        0xCE => op(Imp, 4, Pop(X)),
        0xCF => op(Imp, 9, Mul),

        0xD0 => op(Rel, 2, Branch(Ne)),
        0xD1 => op(Imp, 8, Tcall),
        0xD2 => op(Dir, 4, Clr1),
        0xD3 => op(DirRel, 5, Bbc),
        0xD4 => op(DirX, 5, Store(A)),
        0xD5 => op(AbsX, 6, Store(A)),
        0xD6 => op(AbsY, 6, Store(A)),
        0xD7 => op(DirPtrY, 7, Store(A)),
        0xD8 => op(Dir, 4, Store(X)),
        0xD9 => op(DirY, 5, Store(X)),
        0xDA => op(Dir, 5, MovwStore),
        0xDB => op(DirX, 5, Store(Y)),
        0xDC => op(Imp, 2, DecReg(Y)),
        0xDD => op(Imp, 2, Transfer(Y, A)),
        0xDE => op(DirXRel, 6, Cbne),
        0xDF => op(Imp, 3, Daa),

        0xE0 => op(Imp, 2, ClearFlag(PSFlags::V | PSFlags::H)),
        0xE1 => op(Imp, 8, Tcall),
        0xE2 => op(Dir, 4, Set1),
        0xE3 => op(DirRel, 5, Bbs),
        0xE4 => op(Dir, 3, Load(A)),
        0xE5 => op(Abs, 4, Load(A)),
        0xE6 => op(XIndir, 3, Load(A)),
        0xE7 => op(DirXPtr, 6, Load(A)),
        0xE8 => op(Imm, 2, Load(A)),
        0xE9 => op(Abs, 4, Load(X)),
        0xEA => op(AbsBit, 5, Not1),
        0xEB => op(Dir, 3, Load(Y)),
        0xEC => op(Abs, 4, Load(Y)),
        0xED => op(Imp, 3, Notc),
        0xEE => op(Imp, 4, Pop(Y)),
        0xEF => op(Imp, 3, Sleep),

        0xF0 => op(Rel, 2, Branch(Eq)),
        0xF1 => op(Imp, 8, Tcall),
        0xF2 => op(Dir, 4, Clr1),
        0xF3 => op(DirRel, 5, Bbc),
        0xF4 => op(DirX, 4, Load(A)),
        0xF5 => op(AbsX, 5, Load(A)),
        0xF6 => op(AbsY, 5, Load(A)),
        0xF7 => op(DirPtrY, 6, Load(A)),
        0xF8 => op(Dir, 3, Load(X)),
        0xF9 => op(DirY, 4, Load(X)),
        0xFA => op(DirDir, 5, MovMem),
        0xFB => op(DirX, 4, Load(Y)),
        0xFC => op(Imp, 2, IncReg(Y)),
        0xFD => op(Imp, 2, Transfer(A, Y)),
        0xFE => op(Rel, 4, DbnzY),
        0xFF => op(Imp, 3, Stop),
    }
}

#[inline]
fn op(mode: AddrMode, cycles: usize, op: Op) -> Opcode {
    Opcode {
        mode:   mode,
        cycles: cycles,
        op:     op,
    }
}
