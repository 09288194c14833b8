use scrypt_common::erase::Erased;

/// A password or salt, given either as raw bytes or as text.
///
/// Text is reduced to one byte per UTF-16 code unit by keeping the low 8 bits
/// of each unit. This is *not* UTF-8: `"é"` becomes `[0xe9]` and `"€"`
/// becomes `[0xac]`. Keys derived from earlier deployments depend on this
/// mapping, so it must not change without a new, versioned entry point.
/// Callers that want UTF-8 should pass `text.as_bytes()` instead.
#[derive(Clone, Copy)]
pub enum Input<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl core::fmt::Debug for Input<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bytes(b) => write!(f, "Input::Bytes({} bytes)", b.len()),
            Self::Text(t) => write!(f, "Input::Text({} code units)", t.encode_utf16().count()),
        }
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

/// The byte form of an [`Input`]. Narrowed text is a fresh copy of secret
/// material and is erased on drop.
pub(crate) enum Octets<'a> {
    Borrowed(&'a [u8]),
    Narrowed(Erased<Vec<u8>>),
}

impl core::ops::Deref for Octets<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Borrowed(b) => b,
            Self::Narrowed(v) => v,
        }
    }
}

impl<'a> Input<'a> {
    pub(crate) fn octets(self) -> Octets<'a> {
        match self {
            Self::Bytes(b) => Octets::Borrowed(b),
            #[allow(clippy::cast_possible_truncation)]
            Self::Text(t) => {
                Octets::Narrowed(Erased::new(t.encode_utf16().map(|u| u as u8).collect()))
            }
        }
    }
}
