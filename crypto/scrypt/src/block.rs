/// Words in one Salsa20/8 block.
pub const BLOCK_WORDS: usize = 16;

/// One 64-byte Salsa20/8 block as little-endian words.
pub type Block = [u32; BLOCK_WORDS];

/// Copies `len` words from `src[src_pos..]` over `dst[dst_pos..]`.
#[inline(always)]
pub fn copy(src: &[u32], src_pos: usize, dst: &mut [u32], dst_pos: usize, len: usize) {
    dst[dst_pos..dst_pos + len].copy_from_slice(&src[src_pos..src_pos + len]);
}

/// XORs `len` words of `src[src_pos..]` into `dst[dst_pos..]`.
#[inline(always)]
pub fn xor(src: &[u32], src_pos: usize, dst: &mut [u32], dst_pos: usize, len: usize) {
    for (d, s) in dst[dst_pos..dst_pos + len]
        .iter_mut()
        .zip(src[src_pos..src_pos + len].iter())
    {
        *d ^= s;
    }
}
