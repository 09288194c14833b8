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
    clippy::nursery,
    clippy::unwrap_used
)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! scrypt key derivation.
//!
//! [`generate_derived_key`] takes the cost parameters as plain integers and
//! the key length in bits; [`KdfConfig`] carries the same values loaded from
//! TOML. The lower level [`scrypt`] crate works on validated [`Params`] and
//! caller-provided output buffers.

mod config;
mod error;
mod input;

pub use config::KdfConfig;
pub use error::{Error, ErrorKind};
pub use input::Input;
pub use scrypt::{Params, MAX_BUFFER_LEN, MAX_RP};

type Kdf = fn(&[u8], &[u8], &Params, &mut [u8]) -> Result<(), scrypt::Error>;

/// Derives a `key_len_bits / 8`-byte key from `password` and `salt` with
/// cost parameters `N`, `r` and `p`.
///
/// Fails with [`ErrorKind::InvalidParameter`] if `N` is not a power of two
/// greater than one, if `r` or `p` is zero, or if `key_len_bits` is not a
/// non-zero multiple of 8 or asks for more than [`scrypt::MAX_OUTPUT_LEN`]
/// bytes; and with [`ErrorKind::ParametersTooLarge`] if
/// `r * p >= 2^30` or a buffer would exceed [`MAX_BUFFER_LEN`] bytes. Both
/// checks run before anything is allocated.
pub fn generate_derived_key<'p, 's>(
    password: impl Into<Input<'p>>,
    salt: impl Into<Input<'s>>,
    n: u64,
    r: u32,
    p: u32,
    key_len_bits: usize,
) -> Result<Vec<u8>, Error> {
    let params = Params::new(n, r, p)?;
    derive_with(
        scrypt::scrypt,
        password.into(),
        salt.into(),
        &params,
        key_len_bits,
    )
}

/// [`generate_derived_key`], running the `p` segments on `p` threads.
pub fn generate_derived_key_parallel<'p, 's>(
    password: impl Into<Input<'p>>,
    salt: impl Into<Input<'s>>,
    n: u64,
    r: u32,
    p: u32,
    key_len_bits: usize,
) -> Result<Vec<u8>, Error> {
    let params = Params::new(n, r, p)?;
    derive_with(
        scrypt::scrypt_parallel,
        password.into(),
        salt.into(),
        &params,
        key_len_bits,
    )
}

fn key_len_bytes(key_len_bits: usize) -> Result<usize, Error> {
    if key_len_bits == 0 || key_len_bits % 8 != 0 {
        return Err(Error::InvalidParameter(
            "key length must be a non-zero multiple of 8 bits",
        ));
    }
    let len = key_len_bits / 8;
    if len as u64 > scrypt::MAX_OUTPUT_LEN {
        return Err(Error::Scrypt(scrypt::Error::InvalidOutputLength));
    }
    Ok(len)
}

fn derive_with(
    kdf: Kdf,
    password: Input<'_>,
    salt: Input<'_>,
    params: &Params,
    key_len_bits: usize,
) -> Result<Vec<u8>, Error> {
    let len = key_len_bytes(key_len_bits)?;
    let password = password.octets();
    let salt = salt.octets();
    let mut key = vec![0; len];
    kdf(&password, &salt, params, &mut key)?;
    Ok(key)
}
