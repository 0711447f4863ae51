use uuid::Uuid;

/// Generate an opaque item id: millisecond timestamp in base-36 plus a random
/// suffix. Unique with overwhelming probability across reloads; there is no
/// central counter and no collision detection.
pub fn generate_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}{}", to_base36(millis), &suffix[..12])
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    out.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn base36_encodes_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn generated_ids_are_non_empty_and_distinct() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }
}
