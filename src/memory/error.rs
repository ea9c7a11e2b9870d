// Tue Jan 20 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Access violation at address {0:#x}")]
    AccessViolation(u64),
    #[error("Read failed at address {0:#x}")]
    ReadFailed(u64),
    #[error("Out of bounds: address {0:#x} not in range")]
    OutOfBounds(u64),
}
