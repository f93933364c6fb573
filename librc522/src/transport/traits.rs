// librc522/src/transport/traits.rs

use crate::Result;
use crate::chip::Register;

/// RegisterLink abstracts byte-level register access away from the reader
/// protocol logic. Implementations own the physical transport.
pub trait RegisterLink {
    /// Read `count` bytes from one register address (the address is
    /// repeated per byte, which is how the FIFO is drained).
    fn read_register_bulk(&mut self, reg: Register, count: usize) -> Result<Vec<u8>>;

    /// Write `data` byte by byte to one register address; every byte must
    /// be acknowledged by the chip.
    fn write_register_bulk(&mut self, reg: Register, data: &[u8]) -> Result<()>;

    /// Read a single register.
    fn read_register(&mut self, reg: Register) -> Result<u8> {
        let data = self.read_register_bulk(reg, 1)?;
        data.first().copied().ok_or(crate::Error::InvalidLength {
            expected: 1,
            actual: 0,
        })
    }

    /// Write a single register.
    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        self.write_register_bulk(reg, &[value])
    }

    /// Transport-level reset (e.g. a hardware reset line). Runs before the
    /// chip soft reset during initialization. Default is a no-op.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<L: RegisterLink + ?Sized> RegisterLink for Box<L> {
    fn read_register_bulk(&mut self, reg: Register, count: usize) -> Result<Vec<u8>> {
        (**self).read_register_bulk(reg, count)
    }

    fn write_register_bulk(&mut self, reg: Register, data: &[u8]) -> Result<()> {
        (**self).write_register_bulk(reg, data)
    }

    fn read_register(&mut self, reg: Register) -> Result<u8> {
        (**self).read_register(reg)
    }

    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        (**self).write_register(reg, value)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

impl<L: RegisterLink + ?Sized> RegisterLink for &mut L {
    fn read_register_bulk(&mut self, reg: Register, count: usize) -> Result<Vec<u8>> {
        (**self).read_register_bulk(reg, count)
    }

    fn write_register_bulk(&mut self, reg: Register, data: &[u8]) -> Result<()> {
        (**self).write_register_bulk(reg, data)
    }

    fn read_register(&mut self, reg: Register) -> Result<u8> {
        (**self).read_register(reg)
    }

    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        (**self).write_register(reg, value)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}
