use device_fingerprint_types::{attributes::AttributeMap, domain::Domain};
use sysinfo::{CpuRefreshKind, RefreshKind, System};

use crate::errors::CollectError;

use super::Collector;

/// The identity of the OS, not formatted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemIdentity {
    /// Platform family, e.g. `Linux`
    pub os_name: String,
    /// Kernel build version (`uname -v`), empty if unknown
    pub os_version: String,
    /// Kernel release (`uname -r`), empty if unknown
    pub os_release: String,
    /// Size of a pointer in bits
    pub pointer_width: u32,
    /// e.g. `x86_64`
    pub machine: String,
    /// Brand of the first cpu, empty if unknown
    pub processor: String,
    /// Network node name, empty if unknown
    pub node: String,
}

impl SystemIdentity {
    /// Reads the identity of the running OS.
    pub fn read() -> Result<Self, CollectError> {
        let sys = System::new_with_specifics(
            RefreshKind::new().with_cpu(CpuRefreshKind::everything()),
        );
        let (os_version, os_release) = kernel_version_and_release()?;
        Ok(Self {
            os_name: os_family_name(std::env::consts::OS),
            os_version,
            os_release,
            pointer_width: usize::BITS,
            machine: std::env::consts::ARCH.to_string(),
            processor: sys
                .cpus()
                .first()
                .map(|cpu| cpu.brand().trim().to_string())
                .unwrap_or_default(),
            node: System::host_name().unwrap_or_default(),
        })
    }

    /// The attributes of the system domain.
    pub fn attributes(&self) -> AttributeMap {
        [
            ("os_name", self.os_name.clone()),
            ("os_version", self.os_version.clone()),
            ("os_release", self.os_release.clone()),
            ("architecture", format!("{}bit", self.pointer_width)),
            ("machine", self.machine.clone()),
            ("processor", self.processor.clone()),
            ("node", self.node.clone()),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
    }
}

/// `(version, release)` of the running kernel.
#[cfg(unix)]
fn kernel_version_and_release() -> Result<(String, String), CollectError> {
    let uname = nix::sys::utsname::uname().map_err(|err| CollectError::Other(err.into()))?;
    Ok((
        uname.version().to_string_lossy().into_owned(),
        uname.release().to_string_lossy().into_owned(),
    ))
}

/// `(version, release)` of the running OS, e.g. `22631` & `11` on Windows.
#[cfg(not(unix))]
fn kernel_version_and_release() -> Result<(String, String), CollectError> {
    Ok((
        System::kernel_version().unwrap_or_default(),
        System::os_version().unwrap_or_default(),
    ))
}

/// Maps rust's target os names to the usual platform names,
/// e.g. `macos` to `Darwin`.
pub fn os_family_name(os: &str) -> String {
    match os {
        "linux" | "android" => "Linux".to_string(),
        "macos" | "ios" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "dragonfly" => "DragonFly".to_string(),
        "solaris" | "illumos" => "SunOS".to_string(),
        os => {
            let mut chars = os.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect())
                .unwrap_or_default()
        }
    }
}

/// Collects the [`Domain::System`] attributes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCollector;

impl Collector for SystemCollector {
    fn domain(&self) -> Domain {
        Domain::System
    }

    fn collect(&self) -> Result<AttributeMap, CollectError> {
        let identity = SystemIdentity::read()?;
        log::debug!(target: "system", "{identity:?}");
        Ok(identity.attributes())
    }
}
