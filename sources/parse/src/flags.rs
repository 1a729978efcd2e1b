//! The raw modifier bitsets carried by metadata artifacts.
//! Visibility bits are mutually exclusive; a word with none of them set
//! denotes package private visibility.

use anyhow::{anyhow, Result};
use bitflags::bitflags;

macro_rules! impl_flags {
    ( $flag_type:ident, $impl_type:ident ) => {
        #[derive(Clone, Debug)]
        pub struct $impl_type {
            pub flags: $flag_type,
        }

        impl $impl_type {
            pub fn from_bits(raw: u16) -> Result<Self> {
                let flags = <$flag_type>::from_bits(raw).ok_or_else(|| {
                    anyhow!(
                        "unrecognised bits {:b} for {}",
                        raw,
                        stringify!($flag_type)
                    )
                })?;

                Ok(Self { flags })
            }

            pub fn has(&self, other: $flag_type) -> bool {
                self.flags.contains(other)
            }
        }
    };
}

bitflags! {
    pub struct FieldModifierFlag: u16 {
         const PUBLIC = 0x0001;
         const PRIVATE = 0x0002;
         const PROTECTED = 0x0004;
         const STATIC = 0x0008;
         const FINAL = 0x0010;
    }
}

impl_flags!(FieldModifierFlag, FieldModifierFlags);
