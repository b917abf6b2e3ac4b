use bytes::{BufMut, Bytes};
use ethereum_types::U256;

use super::constants::{RLP_EMPTY_LIST, RLP_NULL};

/// Encodes a value into a fresh byte vector.
pub fn encode<T: RLPEncode>(value: T) -> Vec<u8> {
    let mut buf = Vec::new();
    value.encode(&mut buf);
    buf
}

pub trait RLPEncode {
    fn encode(&self, buf: &mut dyn BufMut);
}

impl<T: RLPEncode + ?Sized> RLPEncode for &T {
    fn encode(&self, buf: &mut dyn BufMut) {
        (**self).encode(buf)
    }
}

/// Writes the string form of `payload`: a lone byte under 0x80 stands
/// for itself, anything else gets a length prefix first.
fn encode_bytes(payload: &[u8], buf: &mut dyn BufMut) {
    match payload {
        [byte] if *byte < RLP_NULL => buf.put_u8(*byte),
        short if short.len() < 56 => {
            buf.put_u8(RLP_NULL + short.len() as u8);
            buf.put_slice(short);
        }
        long => {
            put_long_prefix(0xb7, long.len(), buf);
            buf.put_slice(long);
        }
    }
}

/// Writes a long form prefix: `base` plus how many bytes the big endian
/// length takes, then the length itself. Only meaningful for lengths of
/// 56 and up.
fn put_long_prefix(base: u8, len: usize, buf: &mut dyn BufMut) {
    let be = len.to_be_bytes();
    let zeros = (len.leading_zeros() / 8) as usize;
    buf.put_u8(base + (be.len() - zeros) as u8);
    buf.put_slice(&be[zeros..]);
}

/// Writes the list prefix for a payload of `total_len` bytes.
pub fn encode_length(total_len: usize, buf: &mut dyn BufMut) {
    if total_len < 56 {
        buf.put_u8(RLP_EMPTY_LIST + total_len as u8);
    } else {
        put_long_prefix(0xf7, total_len, buf);
    }
}

// Unsigned integers are strings of their big endian bytes with the
// leading zeros stripped, so zero becomes the empty string.
macro_rules! impl_rlp_uint {
    ($($t:ty),*) => {
        $(impl RLPEncode for $t {
            fn encode(&self, buf: &mut dyn BufMut) {
                let be = self.to_be_bytes();
                let zeros = be.iter().take_while(|&&b| b == 0).count();
                encode_bytes(&be[zeros..], buf);
            }
        })*
    };
}

impl_rlp_uint!(u8, u16, u32, u64, usize);

impl RLPEncode for U256 {
    fn encode(&self, buf: &mut dyn BufMut) {
        let be = self.to_big_endian();
        let zeros = (self.leading_zeros() / 8) as usize;
        encode_bytes(&be[zeros..], buf);
    }
}

impl RLPEncode for [u8] {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_bytes(self, buf);
    }
}

impl<const N: usize> RLPEncode for [u8; N] {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_bytes(self.as_slice(), buf);
    }
}

impl RLPEncode for Bytes {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_bytes(self.as_ref(), buf);
    }
}

impl<T: RLPEncode> RLPEncode for Vec<T> {
    fn encode(&self, buf: &mut dyn BufMut) {
        let mut payload = Vec::new();
        for item in self {
            item.encode(&mut payload);
        }
        encode_length(payload.len(), buf);
        buf.put_slice(&payload);
    }
}

impl<S: RLPEncode, T: RLPEncode> RLPEncode for (S, T) {
    fn encode(&self, buf: &mut dyn BufMut) {
        super::structs::Encoder::new()
            .encode_field(&self.0)
            .encode_field(&self.1)
            .finish(buf);
    }
}

// encoding for Ethereum types

impl RLPEncode for ethereum_types::Address {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_bytes(self.as_bytes(), buf);
    }
}

impl RLPEncode for ethereum_types::H256 {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_bytes(self.as_bytes(), buf);
    }
}
