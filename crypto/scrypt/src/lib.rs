#![deny(
    dead_code,
    deprecated,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::inline_always
)]

mod block;
mod block_mix;
mod error;
pub mod hazmat;
mod params;
mod pbkdf2;
mod romix;
mod salsa;
#[cfg(test)]
mod test_vectors;
mod words;

pub use error::Error;
pub use params::{Params, MAX_BUFFER_LEN, MAX_RP};

use crate::{
    pbkdf2::pbkdf2_sha256,
    romix::{ro_mix, Table},
    words::{bytes_to_words, words_to_bytes},
};
use scrypt_common::erase::Erased;

/// Longest output PBKDF2 can produce: it numbers its 32-byte blocks with a
/// `u32` counter.
pub const MAX_OUTPUT_LEN: u64 = 0xffff_ffff * 32;

/// Derives `output.len()` bytes from `password` and `salt`.
///
/// The `p` `ROMix` segments are processed one after another on the calling
/// thread, sharing a single memory table.
pub fn scrypt(
    password: &[u8],
    salt: &[u8],
    params: &Params,
    output: &mut [u8],
) -> Result<(), Error> {
    derive(password, salt, params, output, |words| {
        let r = params.r_usize();
        let n = params.n_usize();
        let mut table = Table::new(n, r);
        let mut xy = Erased::words(2 * params.segment_words());
        for (i, segment) in words.chunks_mut(params.segment_words()).enumerate() {
            tracing::trace!(segment = i, "mixing");
            ro_mix(segment, r, n, &mut table, &mut xy);
        }
    })
}

/// Same as [`scrypt`], but spreads the `p` `ROMix` segments over at most
/// [`std::thread::available_parallelism`] worker threads, each with its own
/// memory table. The output is identical; peak memory grows with the number
/// of workers.
pub fn scrypt_parallel(
    password: &[u8],
    salt: &[u8],
    params: &Params,
    output: &mut [u8],
) -> Result<(), Error> {
    derive(password, salt, params, output, |words| {
        let r = params.r_usize();
        let n = params.n_usize();
        let segment_words = params.segment_words();
        let segments = words.len() / segment_words;
        let workers = worker_count(segments);
        let per_worker = segments.div_ceil(workers);
        let span = tracing::Span::current();
        std::thread::scope(|scope| {
            for (w, run) in words.chunks_mut(per_worker * segment_words).enumerate() {
                let span = &span;
                scope.spawn(move || {
                    let _entered =
                        tracing::trace_span!(parent: span, "worker", index = w).entered();
                    let mut table = Table::new(n, r);
                    let mut xy = Erased::words(2 * segment_words);
                    for (i, segment) in run.chunks_mut(segment_words).enumerate() {
                        tracing::trace!(segment = w * per_worker + i, "mixing");
                        ro_mix(segment, r, n, &mut table, &mut xy);
                    }
                });
            }
        });
    })
}

fn worker_count(segments: usize) -> usize {
    std::thread::available_parallelism()
        .map_or(1, std::num::NonZeroUsize::get)
        .min(segments.max(1))
}

fn derive(
    password: &[u8],
    salt: &[u8],
    params: &Params,
    output: &mut [u8],
    mix: impl FnOnce(&mut [u32]),
) -> Result<(), Error> {
    if output.is_empty() || output.len() as u64 > MAX_OUTPUT_LEN {
        return Err(Error::InvalidOutputLength);
    }
    let span = tracing::debug_span!(
        "scrypt",
        log_n = params.log_n,
        r = params.r,
        p = params.p,
        output_len = output.len()
    );
    let _entered = span.enter();
    let mut b = Erased::bytes(params.stretched_len());
    pbkdf2_sha256(password, salt, &mut b);
    let mut words = Erased::words(b.len() / 4);
    bytes_to_words(&b, &mut words);
    mix(&mut words);
    words_to_bytes(&words, &mut b);
    pbkdf2_sha256(password, &b, output);
    tracing::debug!("derived key");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_vectors::unhex;
    use rand_core::{OsRng, RngCore};

    fn derive_vec(password: &[u8], salt: &[u8], n: u64, r: u32, p: u32, len: usize) -> Vec<u8> {
        let params = Params::new(n, r, p).unwrap();
        let mut out = vec![0; len];
        scrypt(password, salt, &params, &mut out).unwrap();
        out
    }

    #[test]
    fn rfc7914_empty_password() {
        assert_eq!(
            derive_vec(b"", b"", 16, 1, 1, 64),
            unhex(
                "77d6576238657b203b19ca42c18a0497f16b4844e3074ae8dfdffa3fede21442\
                 fcd0069ded0948f8326a753a0fc81f17e8d3e0fb2e0d3628cf35e20c38d18906"
            )
        );
    }

    #[test]
    fn rfc7914_password_nacl() {
        assert_eq!(
            derive_vec(b"password", b"NaCl", 1024, 8, 16, 64),
            unhex(
                "fdbabe1c9d3472007856e7190d01e9fe7c6ad7cbc8237830e77376634b373162\
                 2eaf30d92e22a3886ff109279d9830dac727afb94a83ee6d8360cbdfa2cc0640"
            )
        );
    }

    #[test]
    fn rfc7914_pleaseletmein() {
        assert_eq!(
            derive_vec(b"pleaseletmein", b"SodiumChloride", 16384, 8, 1, 64),
            unhex(
                "7023bdcb3afd7348461c06cd81fd38ebfda8fbba904f8e3ea9b543f6545da1f2\
                 d5432955613f0fcf62d49705242a9af9e61e85dc0d651e40dfcf017b45575887"
            )
        );
    }

    #[test]
    fn parallel_matches_sequential() {
        let params = Params::new(1024, 8, 16).unwrap();
        let mut sequential = [0; 64];
        let mut parallel = [0; 64];
        scrypt(b"password", b"NaCl", &params, &mut sequential).unwrap();
        scrypt_parallel(b"password", b"NaCl", &params, &mut parallel).unwrap();
        assert_eq!(sequential, parallel);

        let params = Params::new(32, 2, 3).unwrap();
        let mut sequential = [0; 48];
        let mut parallel = [0; 48];
        scrypt(b"pw", b"salt", &params, &mut sequential).unwrap();
        scrypt_parallel(b"pw", b"salt", &params, &mut parallel).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn deterministic() {
        let first = derive_vec(b"correct horse", b"battery staple", 64, 2, 2, 40);
        for _ in 0..3 {
            assert_eq!(derive_vec(b"correct horse", b"battery staple", 64, 2, 2, 40), first);
        }
    }

    #[test]
    fn shorter_output_is_a_prefix() {
        let long = derive_vec(b"password", b"salt", 16, 1, 1, 64);
        let short = derive_vec(b"password", b"salt", 16, 1, 1, 20);
        assert_eq!(short, long[..20]);
    }

    fn assert_avalanche(password: [u8; 16], salt: [u8; 16], mutations: &[(bool, usize, u8)]) {
        let params = Params::new(16, 1, 1).unwrap();
        let mut reference = [0; 32];
        scrypt(&password, &salt, &params, &mut reference).unwrap();
        for &(in_password, index, flip) in mutations {
            let (mut p, mut s) = (password, salt);
            if in_password {
                p[index] ^= flip;
            } else {
                s[index] ^= flip;
            }
            let mut out = [0; 32];
            scrypt(&p, &s, &params, &mut out).unwrap();
            assert_ne!(
                out, reference,
                "password {password:02x?} salt {salt:02x?}: byte {index} ^ {flip:#04x} \
                 (in password: {in_password}) did not change the key"
            );
        }
    }

    #[test]
    fn single_byte_changes_avalanche() {
        let mut pattern = [0; 16];
        for (i, b) in pattern.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37);
        }
        let fixed: Vec<_> = (0..16)
            .flat_map(|i| [(true, i, 0x01), (false, i, 0x80)])
            .collect();
        assert_avalanche(pattern, [0; 16], &fixed);

        let mut password = [0; 16];
        let mut salt = [0; 16];
        OsRng.fill_bytes(&mut password);
        OsRng.fill_bytes(&mut salt);
        let random: Vec<_> = (0..32)
            .map(|round| {
                let index = (OsRng.next_u32() as usize) % 16;
                let flip = (OsRng.next_u32() % 255 + 1) as u8;
                (round % 2 == 0, index, flip)
            })
            .collect();
        assert_avalanche(password, salt, &random);
    }

    #[test]
    fn workers_are_capped() {
        assert_eq!(worker_count(1), 1);
        let cores = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        assert_eq!(worker_count(cores * 4 + 1), cores);
    }

    #[test]
    fn parallel_with_more_segments_than_workers() {
        let cores = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        let p = u32::try_from(cores * 3 + 1).unwrap();
        let params = Params::new(16, 1, p).unwrap();
        let mut sequential = [0; 64];
        let mut parallel = [0; 64];
        scrypt(b"pw", b"salt", &params, &mut sequential).unwrap();
        scrypt_parallel(b"pw", b"salt", &params, &mut parallel).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn rejects_bad_output_lengths() {
        let params = Params::new(16, 1, 1).unwrap();
        assert_eq!(
            scrypt(b"", b"", &params, &mut []),
            Err(Error::InvalidOutputLength)
        );
        assert_eq!(
            scrypt_parallel(b"", b"", &params, &mut []),
            Err(Error::InvalidOutputLength)
        );
    }
}
