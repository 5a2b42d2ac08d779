//! In-memory register-map I²C device for driver tests.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

/// Single device with a 256-byte auto-incrementing register file.
pub struct RegisterBus {
    pub address: u8,
    pub regs: [u8; 256],
    pub writes: Vec<(u8, u8)>,
    pub offline: bool,
    pointer: u8,
    on_write: Option<fn(&mut [u8; 256], u8, u8)>,
}

impl RegisterBus {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            regs: [0; 256],
            writes: Vec::new(),
            offline: false,
            pointer: 0,
            on_write: None,
        }
    }

    /// Run `hook` after every register write (e.g. to fake a conversion).
    pub fn with_write_hook(mut self, hook: fn(&mut [u8; 256], u8, u8)) -> Self {
        self.on_write = Some(hook);
        self
    }

    pub fn set(&mut self, reg: u8, bytes: &[u8]) {
        let start = reg as usize;
        self.regs[start..start + bytes.len()].copy_from_slice(bytes);
    }

    pub fn written(&self, reg: u8) -> Option<u8> {
        self.writes.iter().rev().find(|(r, _)| *r == reg).map(|(_, v)| *v)
    }
}

impl ErrorType for RegisterBus {
    type Error = ErrorKind;
}

impl I2c for RegisterBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.offline || address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    let Some((&reg, data)) = bytes.split_first() else {
                        continue;
                    };
                    self.pointer = reg;
                    for &value in data {
                        let at = self.pointer;
                        self.regs[at as usize] = value;
                        self.writes.push((at, value));
                        if let Some(hook) = self.on_write {
                            hook(&mut self.regs, at, value);
                        }
                        self.pointer = self.pointer.wrapping_add(1);
                    }
                }
                Operation::Read(buf) => {
                    for byte in buf.iter_mut() {
                        *byte = self.regs[self.pointer as usize];
                        self.pointer = self.pointer.wrapping_add(1);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Delay that returns immediately.
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
