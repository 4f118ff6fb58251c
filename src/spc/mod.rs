// SPC-700 Audio processor
mod addressing;
mod alu;
mod bits;
mod decode;
mod flow;
mod transfer;
mod types;


use std::{
    fmt,
    panic::{
        self,
        AssertUnwindSafe
    }
};

use crate::{
    constants::*,
    mem::SPCMem,
    state::SPCState
};

pub use types::{
    AddrMode,
    Cond,
    FaultPolicy,
    Op,
    Opcode,
    PSFlags,
    Reg,
};
pub use decode::decode;

use types::*;

// An instruction that could not be completed.
#[derive(Clone, Debug, PartialEq)]
pub struct Fault {
    pub opcode: u8,
    pub pc:     u16,    // Address of the opcode.
    pub detail: String,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "opcode ${:02X} at ${:04X} faulted: {}", self.opcode, self.pc, self.detail)
    }
}

impl std::error::Error for Fault {}

pub struct SPC<M: SPCMem> {
    a:      u8,         // Accumulator
    x:      u8,         // X-Index
    y:      u8,         // Y-Index
    sp:     u8,         // Stack Pointer
    pc:     u16,        // Program Counter

    ps:     PSFlags,    // Program Status Word

    cycles_left:    usize,  // Cycles until the next fetch.

    policy: FaultPolicy,
    halted: Option<Fault>,

    mem:    M
}

impl<M: SPCMem> SPC<M> {
    pub fn new(mem: M) -> Self {
        Self::with_policy(mem, FaultPolicy::default())
    }

    pub fn with_policy(mem: M, policy: FaultPolicy) -> Self {
        let mut spc = SPC {
            a:      0,
            x:      0,
            y:      0,
            sp:     0,
            pc:     0,

            ps:     PSFlags::default(),

            cycles_left:    RESET_CYCLES,

            policy: policy,
            halted: None,

            mem:    mem
        };
        spc.reset();
        spc
    }

    // Clear registers and flags and start again from the reset vector.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0;
        self.ps = PSFlags::default();

        let pc_lo = self.mem.read(RESET_VECTOR);
        let pc_hi = self.mem.read(RESET_VECTOR.wrapping_add(1));
        self.pc = make16!(pc_hi, pc_lo);

        self.cycles_left = RESET_CYCLES;
        self.halted = None;

        log::info!("SPC reset, PC set to: ${:04X}", self.pc);
    }

    // Advance by a single cycle. An instruction is fetched and executed when the previous one has used up its cycles.
    pub fn step(&mut self) -> Result<(), Fault> {
        if let Some(fault) = &self.halted {
            return Err(fault.clone());
        }

        if self.cycles_left == 0 {
            if let Err(fault) = self.execute_instruction() {
                match self.policy {
                    FaultPolicy::Skip => log::error!("Skipping instruction: {}", fault),
                    FaultPolicy::Halt => {
                        log::warn!("Halting: {}", fault);
                        self.halted = Some(fault.clone());
                        return Err(fault);
                    }
                }
            }
        }

        self.cycles_left -= 1;
        Ok(())
    }

    // Run for a number of cycles.
    pub fn clock(&mut self, cycles: usize) -> Result<(), Fault> {
        for _ in 0..cycles {
            self.step()?;
        }
        Ok(())
    }

    pub fn set_fault_policy(&mut self, policy: FaultPolicy) {
        self.policy = policy;
    }

    pub fn fault_policy(&self) -> FaultPolicy {
        self.policy
    }

    // The fault that halted the processor, if any.
    pub fn halted(&self) -> Option<&Fault> {
        self.halted.as_ref()
    }
}

// Host inspection
impl<M: SPCMem> SPC<M> {
    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn sp(&self) -> u8 {
        self.sp
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn flags(&self) -> PSFlags {
        self.ps
    }

    pub fn flag(&self, flag: PSFlags) -> bool {
        self.ps.contains(flag)
    }

    // Program status word as pushed to the stack.
    pub fn psw(&self) -> u8 {
        self.ps.bits()
    }

    pub fn cycles_left(&self) -> usize {
        self.cycles_left
    }

    // Capture the registers.
    pub fn state(&self) -> SPCState {
        SPCState {
            a:      self.a,
            x:      self.x,
            y:      self.y,
            sp:     self.sp,
            pc:     self.pc,
            psw:    self.psw(),
        }
    }

    // Load registers, for example from a saved SPC snapshot.
    pub fn restore(&mut self, state: &SPCState) {
        self.a = state.a;
        self.x = state.x;
        self.y = state.y;
        self.sp = state.sp;
        self.pc = state.pc;
        self.set_psw(state.psw);
    }

    // Read a memory address. Note this may affect the internal value!
    pub fn read_mem(&mut self, addr: u16) -> u8 {
        self.mem.read(addr)
    }

    pub fn mem(&self) -> &M {
        &self.mem
    }

    pub fn mem_mut(&mut self) -> &mut M {
        &mut self.mem
    }
}

// Internal
impl<M: SPCMem> SPC<M> {
    fn execute_instruction(&mut self) -> Result<(), Fault> {
        let pc = self.pc;
        let opcode = self.fetch();
        let Opcode { mode, cycles, op } = decode(opcode);
        self.cycles_left = cycles;

        #[cfg(feature = "debug")]
        log::trace!("${:04X}: {:02X} {:?} {:?} | {}", pc, opcode, op, mode, self.state());

        panic::catch_unwind(AssertUnwindSafe(|| {
            let operands = self.resolve(mode);
            self.execute(op, operands, opcode);
        })).map_err(|payload| Fault {
            opcode: opcode,
            pc:     pc,
            detail: panic_detail(payload.as_ref()),
        })
    }

    fn execute(&mut self, op: Op, ops: Operands, opcode: u8) {
        use Op::*;

        match op {
            Or          => self.or(ops),
            OrMem       => self.or_mem(ops),
            And         => self.and(ops),
            AndMem      => self.and_mem(ops),
            Eor         => self.eor(ops),
            EorMem      => self.eor_mem(ops),
            Adc         => self.adc(ops),
            AdcMem      => self.adc_mem(ops),
            Sbc         => self.sbc(ops),
            SbcMem      => self.sbc_mem(ops),
            Cmp(r)      => self.cmp(r, ops),
            CmpMem      => self.cmp_mem(ops),

            Asl         => self.asl(ops),
            AslAcc      => self.a = self.shift_left(self.a, false),
            Lsr         => self.lsr(ops),
            LsrAcc      => self.a = self.shift_right(self.a, false),
            Rol         => self.rol(ops),
            RolAcc      => self.a = self.shift_left(self.a, self.ps.contains(PSFlags::C)),
            Ror         => self.ror(ops),
            RorAcc      => self.a = self.shift_right(self.a, self.ps.contains(PSFlags::C)),
            Inc         => self.inc(ops),
            Dec         => self.dec(ops),
            IncReg(r)   => self.inc_reg(r),
            DecReg(r)   => self.dec_reg(r),
            Xcn         => self.xcn(),

            Movw        => self.movw(ops),
            MovwStore   => self.movw_store(ops),
            Incw        => self.incw(ops),
            Decw        => self.decw(ops),
            Addw        => self.addw(ops),
            Subw        => self.subw(ops),
            Cmpw        => self.cmpw(ops),

            Mul         => self.mul(),
            Div         => self.div(),
            Daa         => self.daa(),
            Das         => self.das(),

            Set1        => self.set1(ops, opcode),
            Clr1        => self.clr1(ops, opcode),
            Tset1       => self.tset1(ops),
            Tclr1       => self.tclr1(ops),
            Or1         => self.or1(ops, false),
            Or1Not      => self.or1(ops, true),
            And1        => self.and1(ops, false),
            And1Not     => self.and1(ops, true),
            Eor1        => self.eor1(ops),
            Not1        => self.not1(ops),
            Mov1        => self.mov1(ops),
            Mov1Store   => self.mov1_store(ops),

            Branch(c)   => self.branch_if(c, ops),
            Bbs         => self.bbs(ops, opcode),
            Bbc         => self.bbc(ops, opcode),
            Cbne        => self.cbne(ops),
            Dbnz        => self.dbnz(ops),
            DbnzY       => self.dbnz_y(ops),
            Bra         => self.bra(ops),
            Jmp         => self.jmp(ops),
            Call        => self.call(ops),
            Pcall       => self.pcall(ops),
            Tcall       => self.tcall(opcode),
            Brk         => self.brk(),
            Ret         => self.ret(),
            Reti        => self.reti(),

            Push(r)     => self.push(self.reg(r)),
            PushPsw     => self.push(self.psw()),
            Pop(r)      => {
                let data = self.pop();
                self.set_reg(r, data);
            },
            PopPsw      => {
                let data = self.pop();
                self.set_psw(data);
            },

            Load(r)         => self.load(r, ops),
            Store(r)        => self.store(r, ops, opcode),
            Transfer(f, t)  => self.transfer(f, t),
            MovMem          => self.mov_mem(ops, opcode),

            SetFlag(f)      => self.ps.insert(f),
            ClearFlag(f)    => self.ps.remove(f),
            Notc            => self.ps.toggle(PSFlags::C),

            Nop         => {},
            // No interrupts can wake the processor, so both of these stall forever.
            Sleep | Stop    => self.pc = self.pc.wrapping_sub(1),
        }
    }

    fn fetch(&mut self) -> u8 {
        let data = self.read_data(self.pc);
        self.pc = self.pc.wrapping_add(1);
        data
    }

    #[inline]
    fn read_data(&mut self, addr: u16) -> u8 {
        self.mem.read(addr)
    }

    #[inline]
    fn write_data(&mut self, addr: u16, data: u8) {
        self.mem.write(addr, data);
    }

    fn push(&mut self, data: u8) {
        self.write_data(STACK_PAGE | (self.sp as u16), data);
        self.sp = self.sp.wrapping_sub(1);
    }

    fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read_data(STACK_PAGE | (self.sp as u16))
    }

    fn reg(&self, reg: Reg) -> u8 {
        match reg {
            Reg::A  => self.a,
            Reg::X  => self.x,
            Reg::Y  => self.y,
            Reg::SP => self.sp,
        }
    }

    fn set_reg(&mut self, reg: Reg, data: u8) {
        match reg {
            Reg::A  => self.a = data,
            Reg::X  => self.x = data,
            Reg::Y  => self.y = data,
            Reg::SP => self.sp = data,
        }
    }

    fn set_psw(&mut self, data: u8) {
        self.ps = PSFlags::from_bits_truncate(data);
    }

    #[inline]
    fn carry(&self) -> u8 {
        (self.ps & PSFlags::C).bits()
    }

    // Set N and Z from an 8-bit result.
    fn set_nz(&mut self, result: u8) {
        self.ps.set(PSFlags::N, test_bit!(result, 7, u8));
        self.ps.set(PSFlags::Z, result == 0);
    }

    // Set N and Z from a 16-bit result.
    fn set_nz16(&mut self, result: u16) {
        self.ps.set(PSFlags::N, test_bit!(result, 15));
        self.ps.set(PSFlags::Z, result == 0);
    }
}

fn panic_detail(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
