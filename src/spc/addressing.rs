// Addressing modes
use super::{
    SPC,
    types::*
};
use crate::{
    constants::DIRECT_PAGE_1,
    mem::SPCMem
};

impl<M: SPCMem> SPC<M> {
    // Consume operand bytes at PC and produce the operands for the addressing mode.
    pub(super) fn resolve(&mut self, addr_mode: AddrMode) -> Operands {
        use AddrMode::*;

        match addr_mode {
            Imp => Operands::default(),
            Rel => Operands::new(self.relative(), 0),
            Dir => {
                let addr_lo = self.fetch();
                Operands::new(self.direct_page(addr_lo), self.direct_page(addr_lo.wrapping_add(1)))
            },
            DirRel => {
                let addr = self.direct();
                Operands::new(addr, self.relative())
            },
            Abs => Operands::new(self.absolute(), 0),
            XIndir => Operands::new(self.direct_page(self.x), 0),
            DirXPtr => Operands::new(self.direct_x_ptr(), 0),
            Imm => Operands::new(self.immediate(), 0),
            DirX => Operands::new(self.direct_x(), 0),
            AbsX => Operands::new(self.absolute().wrapping_add(self.x as u16), 0),
            AbsY => Operands::new(self.absolute().wrapping_add(self.y as u16), 0),
            DirPtrY => Operands::new(self.direct_ptr_y(), 0),
            DirDir => {
                let src = self.direct();
                let dst = self.direct();
                Operands::new(src, dst)
            },
            XYIndir => Operands::new(self.direct_page(self.y), self.direct_page(self.x)),
            ImmDir => {
                let imm = self.immediate();
                let dst = self.direct();
                Operands::new(imm, dst)
            },
            DirY => {
                let addr_lo = self.fetch().wrapping_add(self.y);
                Operands::new(self.direct_page(addr_lo), 0)
            },
            AbsBit => {
                let (addr, bit) = self.absolute_bit();
                Operands::new(addr, bit as u16)
            },
            DirXRel => {
                let addr = self.direct_x();
                Operands::new(addr, self.relative())
            },
            AbsXPtr => Operands::new(self.absolute_x_ptr(), 0),
            XIndirInc => {
                let addr = self.direct_page(self.x);
                self.x = self.x.wrapping_add(1);
                Operands::new(addr, 0)
            },
        }
    }

    // Make 16-bit address using direct page as high byte
    pub(super) fn direct_page(&self, addr_lo: u8) -> u16 {
        if self.ps.contains(PSFlags::P) {
            DIRECT_PAGE_1 | (addr_lo as u16)
        } else {
            addr_lo as u16
        }
    }

    // r: sign-extended, so it can be added to PC with wrapping.
    fn relative(&mut self) -> u16 {
        self.fetch() as i8 as u16
    }

    // #i: the address of the immediate byte.
    fn immediate(&mut self) -> u16 {
        let addr = self.pc;
        self.pc = self.pc.wrapping_add(1);
        addr
    }

    // d
    fn direct(&mut self) -> u16 {
        let addr_lo = self.fetch();

        self.direct_page(addr_lo)
    }

    // d+X
    fn direct_x(&mut self) -> u16 {
        let addr_lo = self.fetch().wrapping_add(self.x);

        self.direct_page(addr_lo)
    }

    // !a
    fn absolute(&mut self) -> u16 {
        let addr_lo = self.fetch();
        let addr_hi = self.fetch();

        make16!(addr_hi, addr_lo)
    }

    // [d+X]
    fn direct_x_ptr(&mut self) -> u16 {
        let ptr = self.fetch().wrapping_add(self.x);

        let addr_lo = self.read_data(self.direct_page(ptr));
        let addr_hi = self.read_data(self.direct_page(ptr.wrapping_add(1)));

        make16!(addr_hi, addr_lo)
    }

    // [d]+Y
    fn direct_ptr_y(&mut self) -> u16 {
        let ptr = self.fetch();

        let addr_lo = self.read_data(self.direct_page(ptr));
        let addr_hi = self.read_data(self.direct_page(ptr.wrapping_add(1)));

        make16!(addr_hi, addr_lo).wrapping_add(self.y as u16)
    }

    // [!a+X]
    fn absolute_x_ptr(&mut self) -> u16 {
        let ptr = self.absolute().wrapping_add(self.x as u16);

        let addr_lo = self.read_data(ptr);
        let addr_hi = self.read_data(ptr.wrapping_add(1));

        make16!(addr_hi, addr_lo)
    }

    // m.b: low 13 bits are the address, top 3 bits select the bit.
    fn absolute_bit(&mut self) -> (u16, u8) {
        let abs = self.absolute();

        let addr = abs & 0x1FFF;
        let bit = (abs >> 13) as u8;

        (addr, bit)
    }
}
