// Types and constants used internally in the SPC-700.

use bitflags::bitflags;

bitflags! {
    // Program status word. Bit positions match the byte pushed to the stack.
    #[derive(Default)]
    pub struct PSFlags: u8 {
        const N = bit!(7);  // Negative
        const V = bit!(6);  // Overflow
        const P = bit!(5);  // Direct page
        const B = bit!(4);  // Break
        const H = bit!(3);  // Half carry
        const I = bit!(2);  // Interrupt
        const Z = bit!(1);  // Zero
        const C = bit!(0);  // Carry
    }
}

// Registers that instructions can name directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reg {
    A,
    X,
    Y,
    SP
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AddrMode {
    Imp,        // Implied
    Rel,        // r
    Dir,        // d (and d+1)
    DirRel,     // d, r
    Abs,        // !a
    XIndir,     // (X)
    DirXPtr,    // [d+X]
    Imm,        // #i
    DirX,       // d+X
    AbsX,       // !a+X
    AbsY,       // !a+Y
    DirPtrY,    // [d]+Y
    DirDir,     // dd, ds
    XYIndir,    // (X), (Y)
    ImmDir,     // d, #i
    DirY,       // d+Y
    AbsBit,     // m.b
    DirXRel,    // d+X, r
    AbsXPtr,    // [!a+X]
    XIndirInc,  // (X)+
}

// Resolved operands.
// Two-operand modes give (source, destination). Bit modes give (address, bit).
// Relative modes carry the sign-extended displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Operands {
    pub first:  u16,
    pub second: u16,
}

impl Operands {
    pub fn new(first: u16, second: u16) -> Self {
        Operands {
            first:  first,
            second: second
        }
    }
}

// Branch conditions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cond {
    Pl,
    Mi,
    Vc,
    Vs,
    Cc,
    Cs,
    Ne,
    Eq,
}

// Operations, one per handler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Op {
    // Arithmetic and logic. "Mem" forms combine two memory operands.
    Or,
    OrMem,
    And,
    AndMem,
    Eor,
    EorMem,
    Adc,
    AdcMem,
    Sbc,
    SbcMem,
    Cmp(Reg),
    CmpMem,

    // Shifts and rotates. "Acc" forms act on A.
    Asl,
    AslAcc,
    Lsr,
    LsrAcc,
    Rol,
    RolAcc,
    Ror,
    RorAcc,
    Inc,
    Dec,
    IncReg(Reg),
    DecReg(Reg),
    Xcn,

    // 16-bit
    Movw,
    MovwStore,
    Incw,
    Decw,
    Addw,
    Subw,
    Cmpw,

    Mul,
    Div,
    Daa,
    Das,

    // Bit
    Set1,
    Clr1,
    Tset1,
    Tclr1,
    Or1,
    Or1Not,
    And1,
    And1Not,
    Eor1,
    Not1,
    Mov1,
    Mov1Store,

    // Flow
    Branch(Cond),
    Bbs,
    Bbc,
    Cbne,
    Dbnz,
    DbnzY,
    Bra,
    Jmp,
    Call,
    Pcall,
    Tcall,
    Brk,
    Ret,
    Reti,

    // Stack
    Push(Reg),
    PushPsw,
    Pop(Reg),
    PopPsw,

    // Moves
    Load(Reg),
    Store(Reg),
    Transfer(Reg, Reg), // (from, to)
    MovMem,

    // Flags
    SetFlag(PSFlags),
    ClearFlag(PSFlags),
    Notc,

    Nop,
    Sleep,
    Stop,
}

// A decoded opcode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Opcode {
    pub mode:   AddrMode,
    pub cycles: usize,
    pub op:     Op,
}

// What to do when an instruction faults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FaultPolicy {
    Skip,   // Log the fault and carry on from the next instruction.
    Halt,   // Stop executing until reset.
}

impl Default for FaultPolicy {
    fn default() -> Self {
        FaultPolicy::Skip
    }
}
