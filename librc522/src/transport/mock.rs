// librc522/src/transport/mock.rs

use std::collections::{HashMap, VecDeque};

use crate::Result;
use crate::chip::Register;
use crate::transport::traits::RegisterLink;

/// Mock link for unit tests. It records register writes and returns queued
/// register values; registers without queued values read as 0x00.
#[derive(Debug, Default)]
pub struct MockLink {
    /// Every write in order: (register, bytes of that burst)
    pub writes: Vec<(Register, Vec<u8>)>,
    /// Every read in order: (register, byte count)
    pub reads: Vec<(Register, usize)>,
    /// Number of transport-level resets requested
    pub resets: usize,
    queued: HashMap<Register, VecDeque<u8>>,
}

impl MockLink {
    /// Empty link; unscripted reads return 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one value for the next read of `reg`.
    pub fn push_read(&mut self, reg: Register, value: u8) {
        self.queued.entry(reg).or_default().push_back(value);
    }

    /// Queue several values for `reg`, in order.
    pub fn push_reads(&mut self, reg: Register, values: &[u8]) {
        for v in values {
            self.push_read(reg, *v);
        }
    }

    /// All bytes written to `reg`, flattened across bursts.
    pub fn writes_to(&self, reg: Register) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(r, _)| *r == reg)
            .flat_map(|(_, data)| data.iter().copied())
            .collect()
    }

    /// Number of single-register reads issued against `reg`.
    pub fn read_count(&self, reg: Register) -> usize {
        self.reads.iter().filter(|(r, _)| *r == reg).count()
    }

    /// Forget recorded traffic but keep queued values.
    pub fn clear_log(&mut self) {
        self.writes.clear();
        self.reads.clear();
    }
}

impl RegisterLink for MockLink {
    fn read_register_bulk(&mut self, reg: Register, count: usize) -> Result<Vec<u8>> {
        self.reads.push((reg, count));
        let queue = self.queued.entry(reg).or_default();
        Ok((0..count).map(|_| queue.pop_front().unwrap_or(0)).collect())
    }

    fn write_register_bulk(&mut self, reg: Register, data: &[u8]) -> Result<()> {
        self.writes.push((reg, data.to_vec()));
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.resets += 1;
        Ok(())
    }
}
