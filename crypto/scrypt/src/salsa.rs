use crate::block::Block;
use scrypt_common::erase::Erase;

// double rounds; Salsa20/8 runs 8 rounds in total
const DOUBLE_ROUNDS: usize = 4;

#[inline(always)]
const fn quarter_round(a: usize, b: usize, c: usize, d: usize, state: &mut Block) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

/// The Salsa20/8 core: replaces `block` with `permute(block) + block`, word
/// by word, modulo 2^32.
#[inline]
pub fn salsa20_8(block: &mut Block) {
    let mut x = *block;
    for _ in 0..DOUBLE_ROUNDS {
        // columns
        quarter_round(0, 4, 8, 12, &mut x);
        quarter_round(5, 9, 13, 1, &mut x);
        quarter_round(10, 14, 2, 6, &mut x);
        quarter_round(15, 3, 7, 11, &mut x);
        // rows
        quarter_round(0, 1, 2, 3, &mut x);
        quarter_round(5, 6, 7, 4, &mut x);
        quarter_round(10, 11, 8, 9, &mut x);
        quarter_round(15, 12, 13, 14, &mut x);
    }
    for (out, permuted) in block.iter_mut().zip(x.iter()) {
        *out = permuted.wrapping_add(*out);
    }
    x.erase();
}
