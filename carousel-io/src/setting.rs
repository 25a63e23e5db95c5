//! Configuration of where scratch pages may live.

use std::fmt;
use std::path::{Path, PathBuf};

/// Controls how much main memory and temporary file storage the scratch
/// allocator may use.
///
/// A `None` limit means unrestricted. Use one of the presets
/// ([`MemoryUsageSetting::main_memory_only`], [`MemoryUsageSetting::temp_file_only`]
/// and [`MemoryUsageSetting::mixed`]) or [`MemoryUsageSetting::new`], which
/// normalizes contradicting combinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryUsageSetting {
    use_main_memory: bool,
    use_temp_file: bool,
    max_main_memory_bytes: Option<u64>,
    max_storage_bytes: Option<u64>,
    temp_dir: Option<PathBuf>,
}

impl MemoryUsageSetting {
    /// Create a new setting.
    ///
    /// The combination is normalized: main memory is always used when the
    /// temporary file is not, a memory limit of zero disables memory residency
    /// (or falls back to the storage limit if no temporary file may be used),
    /// and the storage limit is never smaller than the memory limit.
    pub fn new(
        use_main_memory: bool,
        use_temp_file: bool,
        max_main_memory_bytes: Option<u64>,
        max_storage_bytes: Option<u64>,
    ) -> Self {
        let mut use_memory = if use_temp_file { use_main_memory } else { true };
        let mut max_memory = if use_main_memory {
            max_main_memory_bytes
        } else {
            None
        };
        let mut max_storage = max_storage_bytes.filter(|&b| b > 0);

        if use_memory && max_memory == Some(0) {
            if use_temp_file {
                use_memory = false;
            } else {
                max_memory = max_storage;
            }
        }

        if use_memory {
            if let Some(storage) = max_storage {
                match max_memory {
                    None => max_storage = None,
                    Some(memory) if memory > storage => max_storage = Some(memory),
                    Some(_) => {}
                }
            }
        }

        Self {
            use_main_memory: use_memory,
            use_temp_file,
            max_main_memory_bytes: max_memory,
            max_storage_bytes: max_storage,
            temp_dir: None,
        }
    }

    /// Use only main memory, optionally limited to `max_bytes`.
    pub fn main_memory_only(max_bytes: Option<u64>) -> Self {
        Self::new(true, false, max_bytes, max_bytes)
    }

    /// Use only a temporary file, optionally limited to `max_bytes`.
    pub fn temp_file_only(max_bytes: Option<u64>) -> Self {
        Self::new(false, true, Some(0), max_bytes)
    }

    /// Use main memory up to `max_main_memory_bytes`, and a temporary file
    /// beyond that, with an optional overall limit.
    pub fn mixed(max_main_memory_bytes: u64, max_storage_bytes: Option<u64>) -> Self {
        Self::new(true, true, Some(max_main_memory_bytes), max_storage_bytes)
    }

    /// Store the temporary file in `dir` instead of the system default.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Whether main memory may be used.
    pub fn use_main_memory(&self) -> bool {
        self.use_main_memory
    }

    /// Whether a temporary file may be used.
    pub fn use_temp_file(&self) -> bool {
        self.use_temp_file
    }

    /// Whether only main memory is used.
    pub fn use_main_memory_only(&self) -> bool {
        self.use_main_memory && !self.use_temp_file
    }

    /// Whether only a temporary file is used.
    pub fn use_temp_file_only(&self) -> bool {
        !self.use_main_memory && self.use_temp_file
    }

    /// Whether main memory is limited.
    pub fn is_main_memory_restricted(&self) -> bool {
        self.max_main_memory_bytes.is_some()
    }

    /// Whether the overall storage is limited.
    pub fn is_storage_restricted(&self) -> bool {
        self.max_storage_bytes.is_some()
    }

    /// The main memory limit in bytes.
    pub fn max_main_memory_bytes(&self) -> Option<u64> {
        self.max_main_memory_bytes
    }

    /// The overall storage limit in bytes.
    pub fn max_storage_bytes(&self) -> Option<u64> {
        self.max_storage_bytes
    }

    /// The directory for the temporary file, if one was set.
    pub fn temp_dir(&self) -> Option<&Path> {
        self.temp_dir.as_deref()
    }
}

impl Default for MemoryUsageSetting {
    fn default() -> Self {
        Self::main_memory_only(None)
    }
}

fn limit(bytes: Option<u64>) -> String {
    match bytes {
        Some(bytes) => format!("max. of {bytes}"),
        None => "unrestricted".to_string(),
    }
}

impl fmt::Display for MemoryUsageSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.use_main_memory {
            if self.use_temp_file {
                write!(
                    f,
                    "Mixed mode with {} main memory bytes",
                    limit(self.max_main_memory_bytes)
                )?;

                if self.max_storage_bytes.is_some() {
                    write!(f, " and {} storage bytes", limit(self.max_storage_bytes))?;
                } else {
                    write!(f, " and unrestricted scratch file size")?;
                }

                Ok(())
            } else {
                write!(
                    f,
                    "Main memory only with {} bytes",
                    limit(self.max_main_memory_bytes)
                )
            }
        } else {
            write!(
                f,
                "Scratch file only with {} bytes",
                limit(self.max_storage_bytes)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryUsageSetting;

    #[test]
    fn main_memory_only() {
        let setting = MemoryUsageSetting::main_memory_only(Some(8192));
        assert!(setting.use_main_memory_only());
        assert_eq!(setting.max_main_memory_bytes(), Some(8192));
        assert_eq!(setting.max_storage_bytes(), Some(8192));
    }

    #[test]
    fn main_memory_only_zero_is_unrestricted() {
        let setting = MemoryUsageSetting::main_memory_only(Some(0));
        assert!(setting.use_main_memory());
        assert!(!setting.is_main_memory_restricted());
        assert!(!setting.is_storage_restricted());
    }

    #[test]
    fn temp_file_only() {
        let setting = MemoryUsageSetting::temp_file_only(Some(4096 * 16));
        assert!(setting.use_temp_file_only());
        assert!(!setting.is_main_memory_restricted());
        assert_eq!(setting.max_storage_bytes(), Some(4096 * 16));
    }

    #[test]
    fn temp_file_off_forces_main_memory() {
        let setting = MemoryUsageSetting::new(false, false, None, None);
        assert!(setting.use_main_memory());
    }

    #[test]
    fn mixed_storage_raised_to_memory_limit() {
        let setting = MemoryUsageSetting::mixed(10_000, Some(5_000));
        assert_eq!(setting.max_main_memory_bytes(), Some(10_000));
        assert_eq!(setting.max_storage_bytes(), Some(10_000));
    }

    #[test]
    fn mixed_zero_memory_disables_memory() {
        let setting = MemoryUsageSetting::mixed(0, None);
        assert!(setting.use_temp_file_only());
    }

    #[test]
    fn display() {
        assert_eq!(
            MemoryUsageSetting::mixed(1024, Some(4096)).to_string(),
            "Mixed mode with max. of 1024 main memory bytes and max. of 4096 storage bytes"
        );
        assert_eq!(
            MemoryUsageSetting::main_memory_only(None).to_string(),
            "Main memory only with unrestricted bytes"
        );
        assert_eq!(
            MemoryUsageSetting::temp_file_only(Some(10)).to_string(),
            "Scratch file only with max. of 10 bytes"
        );
    }
}
