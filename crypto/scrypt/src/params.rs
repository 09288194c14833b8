use crate::Error;

/// Upper bound, in bytes, on every buffer a derivation sizes from its
/// parameters (`128 * r * p`, `256 * r` and `128 * r * N`).
///
/// This is `i32::MAX`. Sizes are computed in `u64`, so the bound is a
/// compatibility ceiling and not an overflow guard for the computation
/// itself.
pub const MAX_BUFFER_LEN: u64 = 0x7fff_ffff;

/// `r * p` must stay strictly below this.
pub const MAX_RP: u64 = 1 << 30;

/// Validated scrypt cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params {
    pub(crate) log_n: u8,
    pub(crate) r: u32,
    pub(crate) p: u32,
}

impl Params {
    /// Validates `N` (the CPU/memory cost), `r` (the block size factor) and
    /// `p` (the parallelization factor).
    ///
    /// Nothing is allocated here; a rejected parameter set never reaches the
    /// mixing code.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(n: u64, r: u32, p: u32) -> Result<Self, Error> {
        if n <= 1 || !n.is_power_of_two() {
            return Err(Error::InvalidParameter("N must be > 1 and a power of 2"));
        }
        if r == 0 {
            return Err(Error::InvalidParameter("r must be > 0"));
        }
        if p == 0 {
            return Err(Error::InvalidParameter("p must be > 0"));
        }
        let r64 = u64::from(r);
        let p64 = u64::from(p);
        if r64 * p64 >= MAX_RP {
            return Err(Error::ParametersTooLarge);
        }
        let r128 = r64 * 128;
        let within = |len: Option<u64>| matches!(len, Some(len) if len <= MAX_BUFFER_LEN);
        if !(within(r128.checked_mul(p64))
            && within(r64.checked_mul(256))
            && within(r128.checked_mul(n)))
        {
            return Err(Error::ParametersTooLarge);
        }
        Ok(Self {
            log_n: n.trailing_zeros() as u8,
            r,
            p,
        })
    }

    /// Same as [`Params::new`] with `N = 2^log_n`.
    pub fn from_log_n(log_n: u8, r: u32, p: u32) -> Result<Self, Error> {
        let n = 1_u64
            .checked_shl(u32::from(log_n))
            .ok_or(Error::ParametersTooLarge)?;
        Self::new(n, r, p)
    }

    #[must_use]
    pub const fn log_n(&self) -> u8 {
        self.log_n
    }

    #[must_use]
    pub const fn n(&self) -> u64 {
        1 << self.log_n
    }

    #[must_use]
    pub const fn r(&self) -> u32 {
        self.r
    }

    #[must_use]
    pub const fn p(&self) -> u32 {
        self.p
    }

    // the usize accessors below are in range because `new` bounded every
    // derived size by `MAX_BUFFER_LEN`.

    pub(crate) const fn n_usize(&self) -> usize {
        1 << self.log_n
    }

    pub(crate) const fn r_usize(&self) -> usize {
        self.r as usize
    }

    /// Words per `ROMix` segment (`32 * r`).
    pub(crate) const fn segment_words(&self) -> usize {
        32 * self.r_usize()
    }

    /// Bytes produced by the initial PBKDF2 stretch (`128 * r * p`).
    pub(crate) const fn stretched_len(&self) -> usize {
        128 * self.r_usize() * self.p as usize
    }
}
