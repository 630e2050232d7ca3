use crate::{errors::CollectError, hash::sha256_hash};

/// A source of a 48-bit integer that is unique per machine.
pub trait NodeSource {
    /// Returns the node id, only the lower 48 bits are used.
    fn node(&self) -> Result<u64, CollectError>;
}

/// Uses the mac address of the primary network interface.
/// If no interface reports one, the node id is derived from the
/// machine id of the OS instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct HardwareNode;

impl NodeSource for HardwareNode {
    fn node(&self) -> Result<u64, CollectError> {
        match mac_address::get_mac_address() {
            Ok(Some(mac)) => Ok(node_from_octets(mac.bytes())),
            Ok(None) => {
                log::debug!(target: "machine-id", "no interface with a mac address, using the machine id");
                machine_uid_node()
            }
            Err(err) => {
                log::debug!(target: "machine-id", "reading the mac address failed: {err}, using the machine id");
                machine_uid_node()
            }
        }
    }
}

fn machine_uid_node() -> Result<u64, CollectError> {
    #[cfg(not(any(target_arch = "wasm32", target_os = "android")))]
    {
        let uid = ::machine_uid::get().map_err(|err| CollectError::NodeId(err.to_string()))?;
        Ok(node_from_machine_uid(uid.as_bytes()))
    }
    #[cfg(any(target_arch = "wasm32", target_os = "android"))]
    Err(CollectError::NodeId(
        "no mac address found and no machine id on this platform".into(),
    ))
}

/// Interprets 6 octets as big-endian 48-bit integer.
pub fn node_from_octets(octets: [u8; 6]) -> u64 {
    octets
        .iter()
        .fold(0, |node, &octet| (node << 8) | u64::from(octet))
}

/// Derives a node id from the machine id of the OS.
///
/// Like random node ids of RFC 4122 the multicast bit is set, so it
/// can never equal a real mac address.
pub fn node_from_machine_uid(uid: &[u8]) -> u64 {
    let digest = sha256_hash(uid);
    let mut octets = [0; 6];
    octets.copy_from_slice(&digest.as_bytes()[..6]);
    octets[0] |= 0x01;
    node_from_octets(octets)
}

/// Formats the lower 48 bits of the node id as mac address,
/// e.g. `00:1a:2b:3c:4d:5e`.
pub fn format_mac(node: u64) -> String {
    (0..6)
        .rev()
        .map(|octet| format!("{:02x}", (node >> (octet * 8)) & 0xff))
        .collect::<Vec<_>>()
        .join(":")
}
