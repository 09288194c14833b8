#![allow(clippy::module_name_repetitions)]

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

#[inline(always)]
fn atomic_fence() {
    core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
}

#[inline(always)]
fn volatile_write<T: Copy + Sized>(src: T, dst: &mut T) {
    unsafe { core::ptr::write_volatile(dst, src) }
}

/// Overwrites a value with zeros in a way the optimizer is not allowed to
/// elide.
pub trait Erase {
    fn erase(&mut self);
}

trait DefaultIsErased: Copy + Default + Sized {}

impl<E: DefaultIsErased> Erase for E {
    fn erase(&mut self) {
        volatile_write(E::default(), self);
        atomic_fence();
    }
}

macro_rules! impl_default_is_erased {
    ($($t:ty),*) => {
        $(
            impl DefaultIsErased for $t {}
        )*
    };
}

#[rustfmt::skip]
impl_default_is_erased! {
    bool,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize
}

impl<E: Erase> Erase for [E] {
    fn erase(&mut self) {
        for elem in self {
            elem.erase();
        }
    }
}

impl<E: Erase, const N: usize> Erase for [E; N] {
    fn erase(&mut self) {
        self.as_mut_slice().erase();
    }
}

impl<E: Erase> Erase for Vec<E> {
    fn erase(&mut self) {
        self.as_mut_slice().erase();
    }
}

/// Owns a value and erases it when dropped.
///
/// Scratch buffers that hold key-dependent state are wrapped in this so that
/// every exit path, including early returns and unwinding, wipes them.
pub struct Erased<T: Erase>(T);

impl<T: Erase> Erased<T> {
    pub const fn new(value: T) -> Self {
        Self(value)
    }
}

impl Erased<Vec<u8>> {
    /// A zero-filled byte buffer of `len` bytes.
    #[must_use]
    pub fn bytes(len: usize) -> Self {
        Self(alloc::vec![0; len])
    }
}

impl Erased<Vec<u32>> {
    /// A zero-filled word buffer of `len` words.
    #[must_use]
    pub fn words(len: usize) -> Self {
        Self(alloc::vec![0; len])
    }
}

impl<T: Erase> Deref for Erased<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Erase> DerefMut for Erased<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Erase> Drop for Erased<T> {
    fn drop(&mut self) {
        self.0.erase();
    }
}

impl<T: Erase> core::fmt::Debug for Erased<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Erased { ... }")
    }
}
