/// Check if a byte is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r')
}

/// Byte classification for scheme names
/// 1 = letter, 2 = digit or `+ - .` (valid after the first byte)
const SCHEME_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = 2;
        i += 1;
    }
    table[b'+' as usize] = 2;
    table[b'-' as usize] = 2;
    table[b'.' as usize] = 2;

    table
};

/// Check if a byte may appear in a scheme name after its first letter
pub fn is_scheme_byte(b: u8) -> bool {
    SCHEME_CHAR_TABLE[b as usize] != 0
}
