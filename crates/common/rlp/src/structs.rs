use super::encode::{RLPEncode, encode_length};
use bytes::BufMut;

/// Builds the RLP encoding of a list, one field at a time.
///
/// Fields are buffered as they are added; nothing reaches the output
/// until [`Encoder::finish`] writes the list prefix followed by the
/// accumulated payload.
///
/// ```
/// # use solovm_rlp::structs::Encoder;
/// let mut buf = vec![];
/// Encoder::new()
///     .encode_field(&5u8)
///     .encode_field(&b"cat".as_slice())
///     .finish(&mut buf);
///
/// assert_eq!(buf, [0xc5, 0x05, 0x83, b'c', b'a', b't']);
/// ```
#[derive(Debug, Default)]
#[must_use = "the list is only written out by finish()"]
pub struct Encoder {
    payload: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one field to the list payload.
    pub fn encode_field<T: RLPEncode>(mut self, value: &T) -> Self {
        value.encode(&mut self.payload);
        self
    }

    /// Writes the finished list, prefix plus payload, into `buf`.
    pub fn finish(self, buf: &mut dyn BufMut) {
        encode_length(self.payload.len(), buf);
        buf.put_slice(&self.payload);
    }
}

#[cfg(test)]
mod tests {
    use super::Encoder;
    use crate::encode::RLPEncode;
    use ethereum_types::Address;

    #[test]
    fn encoder_builds_a_two_field_list() {
        let (a, b) = (61u8, 75u16);

        let mut buf = Vec::new();
        Encoder::new()
            .encode_field(&a)
            .encode_field(&b)
            .finish(&mut buf);

        assert_eq!(buf, vec![0xc2, 61, 75]);

        // The tuple impl routes through the same encoder.
        let mut tuple_buf = Vec::new();
        (a, b).encode(&mut tuple_buf);
        assert_eq!(tuple_buf, buf);
    }

    #[test]
    fn encoder_handles_an_address_nonce_pair() {
        // The list CREATE hashes to derive a contract address.
        let deployer = Address::from_slice(
            &hex::decode("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0").unwrap(),
        );
        let mut buf = Vec::new();
        Encoder::new()
            .encode_field(&deployer)
            .encode_field(&0u64)
            .finish(&mut buf);

        let mut expected = vec![0xd6, 0x94];
        expected.extend_from_slice(deployer.as_bytes());
        expected.push(0x80);
        assert_eq!(buf, expected);
    }
}
