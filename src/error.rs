use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown instruction {opcode:02x} at address {pc:02x}")]
    UnknownInstruction { opcode: u8, pc: u8 },
    #[error("register index {index} out of range at address {pc:02x}")]
    BadRegister { index: u8, pc: u8 },
    #[error("image of {len} bytes does not fit in memory")]
    ImageTooLarge { len: usize },
    #[error("could not read program {}", .path.display())]
    ProgramRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}
