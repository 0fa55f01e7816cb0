use crate::error::{Error, Result};

pub const MEMORY_SIZE: usize = 256;

pub struct Mem {
    pub mem: [u8; MEMORY_SIZE],
}

impl Default for Mem {
    fn default() -> Self {
        Self {
            mem: [0; MEMORY_SIZE],
        }
    }
}

impl Mem {
    pub fn read(&self, addr: u8) -> u8 {
        self.mem[addr as usize]
    }

    /// Stores `val` at `addr` and hands it back.
    pub fn write(&mut self, addr: u8, val: u8) -> u8 {
        self.mem[addr as usize] = val;
        val
    }

    pub fn clear(&mut self) {
        self.mem = [0; MEMORY_SIZE];
    }

    /// Copies `data` in starting at address 0. Cells past the end of `data`
    /// keep their contents.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        if data.len() > MEMORY_SIZE {
            return Err(Error::ImageTooLarge { len: data.len() });
        }
        self.mem[..data.len()].copy_from_slice(data);
        Ok(())
    }
}
