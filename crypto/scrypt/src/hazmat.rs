//! The individual stages of scrypt, for callers that need to test or
//! instrument them in isolation. Misuse (wrong buffer lengths, a table that
//! is too small) panics.

pub use crate::{
    block::{copy as block_copy, xor as block_xor, Block, BLOCK_WORDS},
    block_mix::block_mix,
    romix::{ro_mix, Memory, Table},
    salsa::salsa20_8,
    words::{bytes_to_words, words_to_bytes},
};
