use anyhow::{anyhow, Result};
use bytes::Bytes;

use crate::artifact::{MetaData, RawField, RawMethod, TypeArtifact};
use crate::constants::{MAGIC, SUPPORTED_MAJOR};
use crate::flags::FieldModifierFlags;
use crate::result::ParseResult;
use support::bytes_ext::SafeBuf;

pub struct Parser {
    bytes: Bytes,
}

impl Parser {
    pub fn new(data: &[u8]) -> Self {
        Self {
            bytes: Bytes::copy_from_slice(data),
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        let length = self.bytes.try_get_u16()?;
        let mut bytes: Vec<u8> = Vec::with_capacity(length.into());

        for _ in 0..length {
            bytes.push(self.bytes.try_get_u8()?);
        }

        String::from_utf8(bytes).map_err(|err| anyhow!("string data was not valid utf8: {}", err))
    }

    fn parse_fields(&mut self) -> Result<Vec<RawField>> {
        let length = self.bytes.try_get_u16()?;
        let mut fields = Vec::with_capacity(length.into());

        for _ in 0..length {
            fields.push(RawField {
                flags: FieldModifierFlags::from_bits(self.bytes.try_get_u16()?)?,
                name: self.parse_string()?,
                value_type: self.parse_string()?,
            });
        }

        Ok(fields)
    }

    fn parse_methods(&mut self) -> Result<Vec<RawMethod>> {
        let length = self.bytes.try_get_u16()?;
        let mut methods = Vec::with_capacity(length.into());

        for _ in 0..length {
            let name = self.parse_string()?;

            let parameter_count = self.bytes.try_get_u8()?;
            let mut parameters = Vec::with_capacity(parameter_count.into());
            for _ in 0..parameter_count {
                parameters.push(self.parse_string()?);
            }

            methods.push(RawMethod {
                name,
                parameters,
                return_type: self.parse_string()?,
            });
        }

        Ok(methods)
    }

    pub fn parse(&mut self) -> ParseResult {
        let magic = self.bytes.try_get_u32()?;

        // Format checking: The first four bytes must contain the right magic number
        if magic != MAGIC {
            return Err(anyhow!("invalid magic value '{}'", magic));
        }

        let major = self.bytes.try_get_u16()?;
        let minor = self.bytes.try_get_u16()?;

        if major > SUPPORTED_MAJOR {
            return Err(anyhow!("unsupported artifact version {}.{}", major, minor));
        }

        let meta_data = MetaData {
            major_version: major,
            minor_version: minor,
        };

        let name = self.parse_string()?;

        // A zero length super name marks the root sentinel
        let super_name = Some(self.parse_string()?).filter(|s| !s.is_empty());

        let fields = self.parse_fields()?;
        let methods = self.parse_methods()?;

        // Format checking: The artifact must not be truncated or have extra bytes at the end
        if !self.bytes.is_empty() {
            return Err(anyhow!("artifact has extra bytes at the end"));
        }

        Ok(TypeArtifact {
            meta_data,
            name,
            super_name,
            fields,
            methods,
        })
    }
}
