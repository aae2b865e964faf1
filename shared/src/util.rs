/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a short lower-alphanumeric resource ID (7 chars).
///
/// Matches the id shape of the external data source (base36-style
/// strings, e.g. "ab12cd3"). Uniqueness within an entity type is a
/// contract of the data source, not of this function; 36^7 values
/// make collisions a non-issue at floor scale.
pub fn short_id() -> String {
    use rand::Rng;
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    (0..7)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
