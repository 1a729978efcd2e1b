use bytes::{BufMut, BytesMut};

use crate::artifact::TypeArtifact;
use crate::constants::MAGIC;

/// Serializes artifacts in the layout `Parser` reads. Used by tooling that
/// emits metadata trees, and by the integration tests.
pub struct Writer {
    buf: BytesMut,
}

impl Writer {
    pub fn new() -> Self {
        Self {
            buf: BytesMut::new(),
        }
    }

    fn put_string(&mut self, value: &str) {
        self.buf.put_u16(value.len() as u16);
        self.buf.put_slice(value.as_bytes());
    }

    pub fn write(mut self, artifact: &TypeArtifact) -> Vec<u8> {
        self.buf.put_u32(MAGIC);
        self.buf.put_u16(artifact.meta_data.major_version);
        self.buf.put_u16(artifact.meta_data.minor_version);

        self.put_string(&artifact.name);
        self.put_string(artifact.super_name.as_deref().unwrap_or(""));

        self.buf.put_u16(artifact.fields.len() as u16);
        for field in artifact.fields.iter() {
            self.buf.put_u16(field.flags.flags.bits());
            self.put_string(&field.name);
            self.put_string(&field.value_type);
        }

        self.buf.put_u16(artifact.methods.len() as u16);
        for method in artifact.methods.iter() {
            self.put_string(&method.name);
            self.buf.put_u8(method.parameters.len() as u8);
            for parameter in method.parameters.iter() {
                self.put_string(parameter);
            }
            self.put_string(&method.return_type);
        }

        self.buf.to_vec()
    }
}
