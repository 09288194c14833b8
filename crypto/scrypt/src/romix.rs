use crate::{
    block::{self, BLOCK_WORDS},
    block_mix::block_mix,
};
use scrypt_common::erase::Erased;

/// The `N`-slot table that `ROMix` fills sequentially and then reads back in a
/// data-dependent order.
pub trait Memory {
    /// Overwrites slot `slot` with `src` (`32 * r` words).
    fn store(&mut self, slot: usize, src: &[u32]);

    /// Returns the `32 * r` words stored in slot `slot`.
    fn load(&self, slot: usize) -> &[u32];
}

/// A heap-allocated table of `n * 32 * r` words, erased on drop.
#[derive(Debug)]
pub struct Table {
    slot_words: usize,
    words: Erased<Vec<u32>>,
}

impl Table {
    #[must_use]
    pub fn new(n: usize, r: usize) -> Self {
        let slot_words = 32 * r;
        Self {
            slot_words,
            words: Erased::words(n * slot_words),
        }
    }

    #[must_use]
    pub fn slots(&self) -> usize {
        self.words.len() / self.slot_words
    }
}

impl Memory for Table {
    #[inline(always)]
    fn store(&mut self, slot: usize, src: &[u32]) {
        block::copy(src, 0, &mut self.words, slot * self.slot_words, self.slot_words);
    }

    #[inline(always)]
    fn load(&self, slot: usize) -> &[u32] {
        &self.words[slot * self.slot_words..(slot + 1) * self.slot_words]
    }
}

/// `scryptROMix` over one `32 * r`-word segment `b`, in place.
///
/// `table` must have `n` slots of `32 * r` words and `xy` must hold
/// `64 * r` words; neither has to be cleared between calls since both are
/// fully overwritten before being read.
#[allow(clippy::many_single_char_names)]
pub fn ro_mix<M: Memory + ?Sized>(
    b: &mut [u32],
    r: usize,
    n: usize,
    table: &mut M,
    xy: &mut [u32],
) {
    #[allow(clippy::cast_possible_truncation)]
    fn integerify(x: &[u32], r: usize, n: usize) -> usize {
        // first word of the last block of X
        (x[(2 * r - 1) * BLOCK_WORDS] as usize) & (n - 1)
    }
    let len = 32 * r;
    debug_assert_eq!(b.len(), len, "ro_mix segment must be 32 * r words");
    debug_assert_eq!(xy.len(), 2 * len, "ro_mix scratch must be 64 * r words");
    debug_assert!(n > 1 && n.is_power_of_two(), "N must be a power of two");
    block::copy(b, 0, xy, 0, len);
    for i in 0..n {
        table.store(i, &xy[..len]);
        block_mix(xy, r);
    }
    for _ in 0..n {
        let j = integerify(xy, r, n);
        block::xor(table.load(j), 0, xy, 0, len);
        block_mix(xy, r);
    }
    block::copy(xy, 0, b, 0, len);
}
