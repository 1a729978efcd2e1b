use anyhow::{anyhow, Result};
use bytes::{Buf, Bytes};

macro_rules! safe_get {
    ($name: ident, $get: ident, $type: ty) => {
        fn $name(&mut self) -> Result<$type> {
            if self.remaining() < std::mem::size_of::<$type>() {
                return Err(anyhow!(
                    "unexpected end of data whilst reading {}",
                    stringify!($type)
                ));
            }

            Ok(self.$get())
        }
    };
}

/// Fallible counterparts to the `Buf` getters, which panic when the buffer
/// runs out of data.
pub trait SafeBuf: Buf {
    safe_get!(try_get_u8, get_u8, u8);
    safe_get!(try_get_u16, get_u16, u16);
    safe_get!(try_get_u32, get_u32, u32);
}

impl SafeBuf for Bytes {}
