use super::constants::{MASK_FILLED, NAME_BUFFER_LEN};

/// Heart silhouette. `*` cells receive a character of the name, blanks stay
/// blank. Every row is 29 columns wide.
pub const HEART_MASK: [&str; 15] = [
    "      *****       *****      ",
    "   *********** ***********   ",
    " *************************** ",
    "*****************************",
    "*****************************",
    "*****************************",
    " *************************** ",
    "  *************************  ",
    "    *********************    ",
    "      *****************      ",
    "        *************        ",
    "          *********          ",
    "            *****            ",
    "             ***             ",
    "              *              ",
];

/// Repeat `name` and cut it to exactly `NAME_BUFFER_LEN` characters.
/// Returns an empty buffer for an empty name.
pub fn name_buffer(name: &str) -> Vec<char> {
    name.chars().cycle().take(NAME_BUFFER_LEN).collect()
}

/// Number of filled cells in the mask.
pub fn filled_cells() -> usize {
    HEART_MASK
        .iter()
        .map(|row| row.chars().filter(|&c| c == MASK_FILLED).count())
        .sum()
}

/// Fill the heart mask with the characters of `name`.
///
/// The index into the name buffer runs across the whole mask (it is not reset
/// per row) and wraps at the buffer length. Callers are expected to pass a
/// non-empty, trimmed name; an empty one produces a heart made of spaces.
pub fn build_pattern(name: &str) -> Vec<String> {
    let buffer = name_buffer(name);
    let mut idx = 0usize;
    HEART_MASK
        .iter()
        .map(|row| {
            row.chars()
                .map(|cell| {
                    if cell != MASK_FILLED || buffer.is_empty() {
                        return ' ';
                    }
                    let ch = buffer[idx % buffer.len()];
                    idx += 1;
                    ch
                })
                .collect()
        })
        .collect()
}
