//! Conversion between the byte form of the stretched buffer and the
//! little-endian word form the mixing functions operate on.

/// Packs every 4 bytes of `src` into one little-endian word of `dst`.
#[inline]
pub fn bytes_to_words(src: &[u8], dst: &mut [u32]) {
    debug_assert_eq!(src.len(), dst.len() * 4, "length mismatch in bytes_to_words");
    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Unpacks every word of `src` into 4 bytes of `dst`, least significant first.
#[inline]
pub fn words_to_bytes(src: &[u32], dst: &mut [u8]) {
    debug_assert_eq!(src.len() * 4, dst.len(), "length mismatch in words_to_bytes");
    for (chunk, word) in dst.chunks_exact_mut(4).zip(src.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}
