use sha2::{Digest, Sha256};

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Hotspot id derived from its member report ids, independent of member order.
pub fn stable_hotspot_id<S: AsRef<str>>(member_ids: &[S]) -> String {
    let mut ordered: Vec<&str> = member_ids.iter().map(|s| s.as_ref()).collect();
    ordered.sort_unstable();
    let digest = sha256_hex(ordered.join("|").as_bytes());
    format!("hs_{}", &digest[..16])
}

pub fn stable_record_id(prefix: &str, parts: &[&str]) -> String {
    let digest = sha256_hex(parts.join("|").as_bytes());
    format!("{}_{}", prefix, &digest[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotspot_id_ignores_member_order() {
        let a = stable_hotspot_id(&["r2", "r1", "r3"]);
        let b = stable_hotspot_id(&["r1", "r3", "r2"]);
        assert_eq!(a, b);
        assert!(a.starts_with("hs_"));
        assert_eq!(a.len(), 19);
    }

    #[test]
    fn record_id_depends_on_parts() {
        assert_ne!(
            stable_record_id("rpt", &["a", "b"]),
            stable_record_id("rpt", &["a", "c"])
        );
    }
}
