use rand::Rng;

fn hex_digit(nibble: u8) -> u8 {
    match nibble {
        0..=9 => b'0' + nibble,
        10..=15 => b'a' + (nibble - 10),
        // Defensive fallback; callers provide only 0..=15.
        _ => b'0',
    }
}

/// Generate a random version-4 UUID string in canonical hyphenated form.
///
/// Randomness comes from the caller's RNG so record ids are reproducible
/// under a seeded generator in tests.
pub fn random_uuid(rng: &mut impl Rng) -> String {
    let mut raw: [u8; 16] = rng.gen();

    // RFC 4122: version 4 in the high nibble of byte 6, variant 10 in byte 8.
    raw[6] = (raw[6] & 0x0f) | 0x40;
    raw[8] = (raw[8] & 0x3f) | 0x80;

    // Manual hex encoding (avoid extra deps).
    let mut out = Vec::with_capacity(36);
    for (i, b) in raw.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            out.push(b'-');
        }
        out.push(hex_digit(b >> 4));
        out.push(hex_digit(b & 0x0f));
    }
    String::from_utf8_lossy(&out).into_owned()
}
