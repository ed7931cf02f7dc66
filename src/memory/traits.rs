// Wed Oct 14 2026 - Alex

use crate::memory::MemoryError;

/// Positional reads. Values are little-endian; a short read is an error,
/// not a retry.
pub trait MemoryReader: Send + Sync {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<usize, MemoryError>;

    /// Reads up to `len` bytes, truncated to what was available.
    fn read_bytes(&self, offset: u64, len: usize) -> Result<Vec<u8>, MemoryError> {
        let mut buf = vec![0u8; len];
        let n = self.read_at(&mut buf, offset)?;
        buf.truncate(n);
        Ok(buf)
    }

    fn read_array<const N: usize>(&self, offset: u64) -> Result<[u8; N], MemoryError>
    where
        Self: Sized,
    {
        let mut buf = [0u8; N];
        let n = self.read_at(&mut buf, offset)?;
        if n != N {
            return Err(MemoryError::ShortTransfer {
                op: "read",
                offset,
                expected: N,
                actual: n,
            });
        }
        Ok(buf)
    }

    fn read_u8(&self, offset: u64) -> Result<u8, MemoryError>
    where
        Self: Sized,
    {
        Ok(self.read_array::<1>(offset)?[0])
    }

    fn read_u16(&self, offset: u64) -> Result<u16, MemoryError>
    where
        Self: Sized,
    {
        self.read_array(offset).map(u16::from_le_bytes)
    }

    fn read_u32(&self, offset: u64) -> Result<u32, MemoryError>
    where
        Self: Sized,
    {
        self.read_array(offset).map(u32::from_le_bytes)
    }

    fn read_u64(&self, offset: u64) -> Result<u64, MemoryError>
    where
        Self: Sized,
    {
        self.read_array(offset).map(u64::from_le_bytes)
    }

    fn read_i32(&self, offset: u64) -> Result<i32, MemoryError>
    where
        Self: Sized,
    {
        self.read_array(offset).map(i32::from_le_bytes)
    }

    fn read_i64(&self, offset: u64) -> Result<i64, MemoryError>
    where
        Self: Sized,
    {
        self.read_array(offset).map(i64::from_le_bytes)
    }
}

pub trait MemoryWriter: Send + Sync {
    fn write_at(&self, buf: &[u8], offset: u64) -> Result<usize, MemoryError>;

    /// Single write that must land in full.
    fn write_exact_at(&self, buf: &[u8], offset: u64) -> Result<(), MemoryError> {
        let n = self.write_at(buf, offset)?;
        if n != buf.len() {
            return Err(MemoryError::ShortTransfer {
                op: "write",
                offset,
                expected: buf.len(),
                actual: n,
            });
        }
        Ok(())
    }

    fn write_u8(&self, offset: u64, value: u8) -> Result<(), MemoryError> {
        self.write_exact_at(&[value], offset)
    }

    fn write_u16(&self, offset: u64, value: u16) -> Result<(), MemoryError> {
        self.write_exact_at(&value.to_le_bytes(), offset)
    }

    fn write_u32(&self, offset: u64, value: u32) -> Result<(), MemoryError> {
        self.write_exact_at(&value.to_le_bytes(), offset)
    }

    fn write_u64(&self, offset: u64, value: u64) -> Result<(), MemoryError> {
        self.write_exact_at(&value.to_le_bytes(), offset)
    }
}
