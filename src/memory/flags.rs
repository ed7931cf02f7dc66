// Wed Oct 14 2026 - Alex

use bitflags::bitflags;

bitflags! {
    /// Flags handed to `open(2)`. The access mode lives in the low bits, so
    /// `READ_ONLY` is the empty set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OpenFlags: libc::c_int {
        const READ_ONLY = libc::O_RDONLY;
        const WRITE_ONLY = libc::O_WRONLY;
        const READ_WRITE = libc::O_RDWR;
        const CREATE = libc::O_CREAT;
        const TRUNCATE = libc::O_TRUNC;
        const APPEND = libc::O_APPEND;
        const EXCLUSIVE = libc::O_EXCL;
        const SYNC = libc::O_SYNC;
        const NO_FOLLOW = libc::O_NOFOLLOW;
    }
}

impl OpenFlags {
    pub const fn read_only() -> Self {
        Self::READ_ONLY
    }

    pub const fn read_write() -> Self {
        Self::READ_WRITE
    }

    pub fn is_writable(&self) -> bool {
        self.intersects(Self::WRITE_ONLY | Self::READ_WRITE)
    }

    pub(crate) fn to_raw(self) -> libc::c_int {
        self.bits() | libc::O_CLOEXEC
    }
}

impl Default for OpenFlags {
    fn default() -> Self {
        Self::READ_ONLY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_is_empty() {
        assert!(OpenFlags::read_only().is_empty());
        assert!(!OpenFlags::read_only().is_writable());
    }

    #[test]
    fn test_writable_modes() {
        assert!(OpenFlags::read_write().is_writable());
        assert!(OpenFlags::WRITE_ONLY.is_writable());
        assert!((OpenFlags::READ_WRITE | OpenFlags::CREATE).is_writable());
    }

    #[test]
    fn test_raw_always_close_on_exec() {
        let raw = (OpenFlags::READ_WRITE | OpenFlags::TRUNCATE).to_raw();
        assert_ne!(raw & libc::O_CLOEXEC, 0);
        assert_ne!(raw & libc::O_TRUNC, 0);
        assert_eq!(raw & libc::O_ACCMODE, libc::O_RDWR);
    }

    #[test]
    fn test_retain_unknown_bits() {
        let flags = OpenFlags::from_bits_retain(libc::O_RDWR | libc::O_NONBLOCK);
        assert_ne!(flags.to_raw() & libc::O_NONBLOCK, 0);
    }
}
