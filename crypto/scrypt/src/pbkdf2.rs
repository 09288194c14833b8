use sha2::Sha256;

// scrypt only ever runs a single PBKDF2 iteration at each end
const ROUNDS: u32 = 1;

/// PBKDF2-HMAC-SHA256 with one iteration, filling all of `res`.
#[inline]
pub fn pbkdf2_sha256(password: &[u8], salt: &[u8], res: &mut [u8]) {
    ::pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, ROUNDS, res);
}
