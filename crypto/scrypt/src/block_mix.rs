use crate::{
    block::{self, Block, BLOCK_WORDS},
    salsa::salsa20_8,
};
use scrypt_common::erase::Erase;

/// `scryptBlockMix` over `2r` blocks.
///
/// `xy` holds `64 * r` words: the input blocks `X` in the first half and
/// scratch space `Y` in the second. On return the first half holds the mixed
/// blocks with the even-indexed outputs first and the odd-indexed outputs
/// after them.
pub fn block_mix(xy: &mut [u32], r: usize) {
    let half = 32 * r;
    debug_assert_eq!(xy.len(), 2 * half, "block_mix needs 64 * r words");
    let (x, y) = xy.split_at_mut(half);
    let mut t: Block = [0; BLOCK_WORDS];
    block::copy(x, (2 * r - 1) * BLOCK_WORDS, &mut t, 0, BLOCK_WORDS);
    for i in 0..2 * r {
        block::xor(x, i * BLOCK_WORDS, &mut t, 0, BLOCK_WORDS);
        salsa20_8(&mut t);
        block::copy(&t, 0, y, i * BLOCK_WORDS, BLOCK_WORDS);
    }
    for i in 0..r {
        block::copy(y, 2 * i * BLOCK_WORDS, x, i * BLOCK_WORDS, BLOCK_WORDS);
        block::copy(y, (2 * i + 1) * BLOCK_WORDS, x, (r + i) * BLOCK_WORDS, BLOCK_WORDS);
    }
    t.erase();
}
