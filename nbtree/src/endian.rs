//! Conversion between host byte order and NBT wire order.
//!
//! NBT stores every multi-byte number big-endian. Values are read from the
//! input in host order and then passed through [`from_wire`], which swaps the
//! bytes on little-endian hosts and does nothing on big-endian ones. The host
//! order is probed once, the first time it is needed.
//!
//! ```
//! use nbtree::endian::{from_wire, to_wire};
//!
//! let wire = i32::from_ne_bytes([0, 0, 0, 7]);
//! assert_eq!(from_wire(wire), 7);
//! assert_eq!(to_wire(from_wire(wire)), wire);
//! ```

use byteorder::{ByteOrder, NativeEndian};
use once_cell::sync::OnceCell;

/// Byte order of the machine we are running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOrder {
    Little,
    Big,
}

// The first byte of this in memory tells us the order. Anything other than
// the lowest or highest byte means an ordering we can't support.
const PROBE: u32 = 0x0299_9801;

static HOST_ORDER: OnceCell<HostOrder> = OnceCell::new();

fn detect() -> HostOrder {
    let first = PROBE.to_ne_bytes()[0];
    match probe(first) {
        Some(order) => {
            log::trace!("host byte order is {:?}", order);
            order
        }
        None => panic!("unsupported host byte order: probe byte {:#04x}", first),
    }
}

pub(crate) fn probe(first_byte: u8) -> Option<HostOrder> {
    match first_byte {
        0x01 => Some(HostOrder::Little),
        0x02 => Some(HostOrder::Big),
        _ => None,
    }
}

/// The byte order of this host.
///
/// # Panics
///
/// If the host is neither little nor big endian. There is no way to decode
/// NBT on such a machine, so this is treated as a broken build rather than an
/// error.
pub fn host_order() -> HostOrder {
    *HOST_ORDER.get_or_init(detect)
}

mod private {
    // Only this crate can implement this trait. Other traits can inherit from
    // Sealed in order to prevent other crates from creating implementations.
    pub trait Sealed {}
}

/// A fixed width number as stored in NBT.
pub trait WireInt: private::Sealed + Copy + Default {
    /// Size on the wire in bytes.
    const WIDTH: usize;

    #[doc(hidden)]
    fn swap(self) -> Self;

    /// Read one value in host order from the start of `src`.
    #[doc(hidden)]
    fn from_native(src: &[u8]) -> Self;

    /// Fill `dst` from `src` in host order. `src` must be exactly
    /// `dst.len() * WIDTH` bytes.
    #[doc(hidden)]
    fn from_native_into(src: &[u8], dst: &mut [Self]);
}

/// Convert a value from NBT wire order to host order.
pub fn from_wire<T: WireInt>(x: T) -> T {
    match host_order() {
        HostOrder::Little => x.swap(),
        HostOrder::Big => x,
    }
}

/// Convert a value from host order to NBT wire order.
pub fn to_wire<T: WireInt>(x: T) -> T {
    // Swapping is its own inverse.
    from_wire(x)
}

impl private::Sealed for i8 {}
impl WireInt for i8 {
    const WIDTH: usize = 1;

    fn swap(self) -> Self {
        self
    }

    fn from_native(src: &[u8]) -> Self {
        src[0] as i8
    }

    fn from_native_into(src: &[u8], dst: &mut [Self]) {
        for (d, s) in dst.iter_mut().zip(src) {
            *d = *s as i8;
        }
    }
}

macro_rules! wire_int {
    ($($ty:ty => $read:ident, $read_into:ident);* $(;)?) => {
        $(
            impl private::Sealed for $ty {}
            impl WireInt for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn swap(self) -> Self {
                    self.swap_bytes()
                }

                fn from_native(src: &[u8]) -> Self {
                    NativeEndian::$read(src)
                }

                fn from_native_into(src: &[u8], dst: &mut [Self]) {
                    NativeEndian::$read_into(src, dst)
                }
            }
        )*
    };
}

wire_int! {
    i16 => read_i16, read_i16_into;
    u16 => read_u16, read_u16_into;
    i32 => read_i32, read_i32_into;
    u32 => read_u32, read_u32_into;
    i64 => read_i64, read_i64_into;
    u64 => read_u64, read_u64_into;
}

// Floats are swapped through their bit pattern, exactly like the integer of
// the same width.
macro_rules! wire_float {
    ($($ty:ty => $read:ident, $read_into:ident);* $(;)?) => {
        $(
            impl private::Sealed for $ty {}
            impl WireInt for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn swap(self) -> Self {
                    <$ty>::from_bits(self.to_bits().swap_bytes())
                }

                fn from_native(src: &[u8]) -> Self {
                    NativeEndian::$read(src)
                }

                fn from_native_into(src: &[u8], dst: &mut [Self]) {
                    NativeEndian::$read_into(src, dst)
                }
            }
        )*
    };
}

wire_float! {
    f32 => read_f32, read_f32_into;
    f64 => read_f64, read_f64_into;
}
