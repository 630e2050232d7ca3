use std::path::Path;

use device_fingerprint_types::{attributes::AttributeMap, domain::Domain};
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use crate::errors::CollectError;

use super::Collector;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Raw capacity values of this machine, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HardwareStats {
    /// Total physical memory
    pub total_memory: u64,
    /// Memory available for new processes
    pub available_memory: u64,
    /// Size of the root disk
    pub total_disk: u64,
    /// Used space on the root disk
    pub used_disk: u64,
    /// Number of logical cpus
    pub cpu_count: usize,
    /// Current frequency in MHz, if known
    pub cpu_freq_mhz: Option<u64>,
}

impl HardwareStats {
    /// Reads memory, root disk and cpu values.
    pub fn read() -> Result<Self, CollectError> {
        let sys = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );
        let (total_disk, used_disk) = read_root_disk()?;

        Ok(Self {
            total_memory: sys.total_memory(),
            available_memory: sys.available_memory(),
            total_disk,
            used_disk,
            cpu_count: sys.cpus().len(),
            cpu_freq_mhz: sys
                .cpus()
                .first()
                .map(|cpu| cpu.frequency())
                .filter(|&mhz| mhz > 0),
        })
    }

    /// The attributes of the hardware domain.
    pub fn attributes(&self) -> AttributeMap {
        let cpu_freq = self
            .cpu_freq_mhz
            .map_or_else(|| "N/A".to_string(), |mhz| format!("{:.1}", mhz as f64));
        AttributeMap::from([
            ("total_memory".to_string(), gigabytes(self.total_memory)),
            ("available_memory".to_string(), gigabytes(self.available_memory)),
            ("total_disk".to_string(), gigabytes(self.total_disk)),
            ("used_disk".to_string(), gigabytes(self.used_disk)),
            ("cpu_count".to_string(), self.cpu_count.to_string()),
            ("cpu_freq".to_string(), format!("{cpu_freq} MHz")),
        ])
    }
}

/// Renders bytes as gigabytes with two decimals, e.g. `8.00 GB`.
pub fn gigabytes(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / BYTES_PER_GB)
}

/// Block counts of a file system, as reported by `statvfs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FsBlocks {
    /// Total number of blocks
    pub blocks: u64,
    /// Free blocks, including the ones reserved for root
    pub blocks_free: u64,
    /// Free blocks usable by unprivileged users
    pub blocks_available: u64,
    /// Size of a block in bytes
    pub fragment_size: u64,
}

impl FsBlocks {
    /// Size of the file system in bytes.
    pub const fn total(&self) -> u64 {
        self.blocks.saturating_mul(self.fragment_size)
    }

    /// Bytes in use, reserved blocks do not count as used.
    pub const fn used(&self) -> u64 {
        self.blocks
            .saturating_sub(self.blocks_free)
            .saturating_mul(self.fragment_size)
    }
}

/// `(total, used)` of the file system mounted at `/`.
#[cfg(unix)]
#[allow(clippy::useless_conversion)]
fn read_root_disk() -> Result<(u64, u64), CollectError> {
    let stat = nix::sys::statvfs::statvfs("/")
        .map_err(|err| CollectError::RootDisk(std::io::Error::from(err)))?;
    let blocks = FsBlocks {
        blocks: u64::from(stat.blocks()),
        blocks_free: u64::from(stat.blocks_free()),
        blocks_available: u64::from(stat.blocks_available()),
        fragment_size: u64::from(stat.fragment_size()),
    };
    log::debug!(target: "hardware", "root file system: {blocks:?}");
    Ok((blocks.total(), blocks.used()))
}

/// `(total, used)` of the system drive.
#[cfg(not(unix))]
fn read_root_disk() -> Result<(u64, u64), CollectError> {
    let disks = sysinfo::Disks::new_with_refreshed_list();
    let (total, available) = root_disk(
        disks
            .list()
            .iter()
            .map(|disk| (disk.mount_point(), disk.total_space(), disk.available_space())),
    )
    .ok_or(CollectError::NoRootDisk)?;
    Ok((total, total.saturating_sub(available)))
}

/// Picks `(total, available)` of the disk mounted at `/`,
/// or else of the first disk mounted at a root (e.g. `C:\`).
pub fn root_disk<'a>(disks: impl Iterator<Item = (&'a Path, u64, u64)>) -> Option<(u64, u64)> {
    let roots: Vec<_> = disks
        .filter(|(mount_point, _, _)| mount_point.parent().is_none())
        .collect();
    roots
        .iter()
        .find(|(mount_point, _, _)| *mount_point == Path::new("/"))
        .or_else(|| roots.first())
        .map(|&(_, total, available)| (total, available))
}

/// Collects the [`Domain::Hardware`] attributes.
#[derive(Debug, Default, Clone, Copy)]
pub struct HardwareCollector;

impl Collector for HardwareCollector {
    fn domain(&self) -> Domain {
        Domain::Hardware
    }

    fn collect(&self) -> Result<AttributeMap, CollectError> {
        let stats = HardwareStats::read()?;
        log::debug!(target: "hardware", "{stats:?}");
        Ok(stats.attributes())
    }
}
