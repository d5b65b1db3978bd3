// File: src/color_utils.rs

/// Pastel tones, light enough for black text.
const PALETTE: [(u8, u8, u8); 8] = [
    (174, 214, 241),
    (171, 235, 198),
    (249, 231, 159),
    (245, 183, 177),
    (215, 189, 226),
    (250, 215, 160),
    (162, 217, 206),
    (237, 187, 153),
];

/// Deterministic badge color for an event category. FNV-1a keeps the
/// mapping stable across runs and platforms.
pub fn category_color(category: &str) -> (u8, u8, u8) {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in category.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    PALETTE[(hash as usize) % PALETTE.len()]
}
