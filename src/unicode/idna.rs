/// Decode UTF-8, silently dropping any byte sequence that is not valid UTF-8.
pub fn decode_utf8_ignore(input: &[u8]) -> String {
    let mut result = String::with_capacity(input.len());
    for chunk in input.utf8_chunks() {
        result.push_str(chunk.valid());
    }
    result
}

/// Process a host with the IDNA `ToASCII` algorithm.
///
/// ASCII hosts are returned unchanged. Non-ASCII hosts are decoded as UTF-8
/// (best effort) and converted to their ASCII-compatible encoding; when that
/// fails the decoded text is returned as UTF-8 bytes so the caller can
/// percent-escape it.
pub fn host_to_ascii(host: &[u8]) -> Vec<u8> {
    // Fast path: most hosts are plain ASCII
    if host.is_ascii() {
        return host.to_vec();
    }

    let decoded = decode_utf8_ignore(host);
    match idna::domain_to_ascii(&decoded) {
        Ok(ascii) => ascii.into_bytes(),
        Err(err) => {
            tracing::trace!(host = %decoded, error = ?err, "IDNA conversion failed, keeping decoded host");
            decoded.into_bytes()
        }
    }
}
