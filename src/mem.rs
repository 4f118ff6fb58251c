// Memory seen by the SPC-700.

const SPC_RAM_SIZE: usize = 1024 * 64;  // 64KB of addressable space.

// The bus the SPC-700 is attached to. This is owned by the host.
// Reads may have side effects (I/O latches), so the processor issues exactly the
// accesses the hardware would, including reads whose value is discarded.
pub trait SPCMem {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);
}

// Flat 64KB of RAM with no I/O.
pub struct RAM {
    data: Vec<u8>
}

impl RAM {
    pub fn new() -> Self {
        RAM {
            data: vec![0; SPC_RAM_SIZE]
        }
    }

    // Copy bytes into memory starting at the address. Wraps around the top of memory.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (i, b) in bytes.iter().enumerate() {
            let dst = addr.wrapping_add(i as u16) as usize;
            self.data[dst] = *b;
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Default for RAM {
    fn default() -> Self {
        Self::new()
    }
}

impl SPCMem for RAM {
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.data[addr as usize] = data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_wraps() {
        let mut ram = RAM::new();
        ram.load(0xFFFF, &[0x12, 0x34]);

        assert_eq!(ram.read(0xFFFF), 0x12);
        assert_eq!(ram.read(0x0000), 0x34);
    }
}
