//! Short random identifiers.

const ID_LEN: usize = 9;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A 9-character lowercase base-36 string drawn from a v4 UUID.
pub fn random_id() -> String {
    let mut n = uuid::Uuid::new_v4().as_u128();
    let mut out = String::with_capacity(ID_LEN);
    for _ in 0..ID_LEN {
        out.push(ALPHABET[(n % 36) as usize] as char);
        n /= 36;
    }
    out
}

/// Generate `prefix + random_id()` until `taken` rejects nothing.
pub fn unique_id(prefix: &str, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = format!("{}{}", prefix, random_id());
        if !taken(&id) {
            return id;
        }
    }
}
