// Wed Oct 14 2026 - Alex

use crate::memory::{MemoryError, MemoryReader, MemoryWriter, OpenFlags};
use std::ffi::CString;
use std::fmt;
use std::io;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

#[cfg(any(target_os = "linux", target_os = "android"))]
use libc::{off64_t as off_t, pread64 as sys_pread, pwrite64 as sys_pwrite};
#[cfg(not(any(target_os = "linux", target_os = "android")))]
use libc::{off_t, pread as sys_pread, pwrite as sys_pwrite};

const CREATE_MODE: libc::c_uint = 0o600;

/// Owns one descriptor onto a memory file and does positional I/O on it.
///
/// A failed open still produces a value; check [`MemoryFile::is_open`]
/// before use. The descriptor is closed exactly once, on [`close`] or drop.
///
/// [`close`]: MemoryFile::close
#[derive(Default)]
pub struct MemoryFile {
    fd: Option<OwnedFd>,
    open_error: Option<io::Error>,
}

impl MemoryFile {
    pub fn open<P: AsRef<Path>>(path: P, flags: OpenFlags) -> Self {
        let c_path = match CString::new(path.as_ref().as_os_str().as_bytes()) {
            Ok(p) => p,
            Err(e) => return Self::failed(io::Error::new(io::ErrorKind::InvalidInput, e)),
        };

        let fd = unsafe { libc::open(c_path.as_ptr(), flags.to_raw(), CREATE_MODE) };
        if fd < 0 {
            return Self::failed(io::Error::last_os_error());
        }

        Self {
            fd: Some(unsafe { OwnedFd::from_raw_fd(fd) }),
            open_error: None,
        }
    }

    /// Opens `/proc/<pid>/mem`.
    pub fn open_process(pid: libc::pid_t, flags: OpenFlags) -> Self {
        Self::open(Self::process_mem_path(pid), flags)
    }

    pub fn process_mem_path(pid: libc::pid_t) -> PathBuf {
        PathBuf::from(format!("/proc/{}/mem", pid))
    }

    fn failed(error: io::Error) -> Self {
        Self {
            fd: None,
            open_error: Some(error),
        }
    }

    pub fn is_open(&self) -> bool {
        self.fd.is_some()
    }

    /// Why the open failed, if it did.
    pub fn open_error(&self) -> Option<&io::Error> {
        self.open_error.as_ref()
    }

    pub fn close(&mut self) {
        self.fd = None;
    }

    /// Moves the descriptor into a new value and leaves `self` closed.
    pub fn take(&mut self) -> MemoryFile {
        std::mem::take(self)
    }

    pub fn as_raw_fd(&self) -> Option<RawFd> {
        self.fd.as_ref().map(|fd| fd.as_raw_fd())
    }

    /// Reads up to `buf.len()` bytes at `offset`. `Ok(0)` means end of data.
    pub fn pread(&self, buf: &mut [u8], offset: u64) -> Result<usize, MemoryError> {
        let fd = self.checked_fd()?;
        let pos = to_off(offset)?;

        let n = unsafe { sys_pread(fd, buf.as_mut_ptr().cast(), buf.len(), pos) };
        if n < 0 {
            return Err(MemoryError::Io {
                op: "pread",
                offset,
                source: io::Error::last_os_error(),
            });
        }
        Ok(n as usize)
    }

    pub fn pwrite(&self, buf: &[u8], offset: u64) -> Result<usize, MemoryError> {
        let fd = self.checked_fd()?;
        let pos = to_off(offset)?;

        let n = unsafe { sys_pwrite(fd, buf.as_ptr().cast(), buf.len(), pos) };
        if n < 0 {
            return Err(MemoryError::Io {
                op: "pwrite",
                offset,
                source: io::Error::last_os_error(),
            });
        }
        Ok(n as usize)
    }

    fn checked_fd(&self) -> Result<RawFd, MemoryError> {
        self.as_raw_fd().ok_or(MemoryError::NotOpen)
    }
}

fn to_off(offset: u64) -> Result<off_t, MemoryError> {
    off_t::try_from(offset).map_err(|_| MemoryError::InvalidOffset(offset))
}

impl MemoryReader for MemoryFile {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<usize, MemoryError> {
        self.pread(buf, offset)
    }
}

impl MemoryWriter for MemoryFile {
    fn write_at(&self, buf: &[u8], offset: u64) -> Result<usize, MemoryError> {
        self.pwrite(buf, offset)
    }
}

impl fmt::Debug for MemoryFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryFile")
            .field("fd", &self.as_raw_fd())
            .field("open_error", &self.open_error)
            .finish()
    }
}
