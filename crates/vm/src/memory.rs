use crate::{
    constants::WORD_SIZE_IN_BYTES_USIZE,
    errors::{ExceptionalHalt, InternalError, VMError},
};
use solovm_common::{U256, utils::u256_from_big_endian};

/// Byte addressable, auto expanding scratch space.
///
/// The buffer length is always a multiple of 32: touching any byte at or
/// past the current end grows the buffer to the next word boundary that
/// covers it, filling the new bytes with zeros.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    buffer: Vec<u8>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current length in bytes, as reported by MSIZE.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Grows the buffer so that byte `last_touched` is inside it.
    fn resize_to_cover(&mut self, last_touched: usize) -> Result<(), VMError> {
        if last_touched < self.buffer.len() {
            return Ok(());
        }

        let new_len = last_touched
            .checked_add(1)
            .and_then(|n| n.checked_next_multiple_of(WORD_SIZE_IN_BYTES_USIZE))
            .ok_or(ExceptionalHalt::InvalidOffset)?;
        self.buffer.resize(new_len, 0);

        if self.buffer.len() % WORD_SIZE_IN_BYTES_USIZE != 0 {
            return Err(InternalError::InvalidMemoryLength.into());
        }
        Ok(())
    }

    /// Writes a single byte, expanding to cover it.
    pub fn store_byte(&mut self, offset: usize, value: u8) -> Result<(), VMError> {
        self.resize_to_cover(offset)?;

        #[allow(clippy::indexing_slicing, reason = "the buffer covers the offset after resizing")]
        {
            self.buffer[offset] = value;
        }
        Ok(())
    }

    /// Writes a 32 byte big endian word at `offset`.
    pub fn store_word(&mut self, offset: usize, word: U256) -> Result<(), VMError> {
        let last = offset
            .checked_add(WORD_SIZE_IN_BYTES_USIZE - 1)
            .ok_or(ExceptionalHalt::InvalidOffset)?;
        self.resize_to_cover(last)?;

        #[allow(clippy::indexing_slicing, reason = "the buffer covers the range after resizing")]
        self.buffer[offset..=last].copy_from_slice(&word.to_big_endian());
        Ok(())
    }

    /// Reads a 32 byte big endian word at `offset`, expanding to cover it.
    pub fn load_word(&mut self, offset: usize) -> Result<U256, VMError> {
        let last = offset
            .checked_add(WORD_SIZE_IN_BYTES_USIZE - 1)
            .ok_or(ExceptionalHalt::InvalidOffset)?;
        self.resize_to_cover(last)?;

        #[allow(clippy::indexing_slicing, reason = "the buffer covers the range after resizing")]
        Ok(u256_from_big_endian(&self.buffer[offset..=last]))
    }

    /// Reads a single byte. Reads past the end give 0 and do not expand.
    pub fn load_byte(&self, offset: usize) -> u8 {
        self.buffer.get(offset).copied().unwrap_or_default()
    }

    /// Reads exactly `size` bytes starting at `offset`, expanding to
    /// cover the whole range. A zero size touches nothing.
    pub fn load_range(&mut self, offset: usize, size: usize) -> Result<Vec<u8>, VMError> {
        if size == 0 {
            return Ok(Vec::new());
        }

        let last = offset
            .checked_add(size - 1)
            .ok_or(ExceptionalHalt::InvalidOffset)?;
        self.resize_to_cover(last)?;

        #[allow(clippy::indexing_slicing, reason = "the buffer covers the range after resizing")]
        Ok(self.buffer[offset..=last].to_vec())
    }

    /// Copies `data` into memory at `offset`, expanding to cover it.
    pub fn store_data(&mut self, offset: usize, data: &[u8]) -> Result<(), VMError> {
        if data.is_empty() {
            return Ok(());
        }

        let last = offset
            .checked_add(data.len() - 1)
            .ok_or(ExceptionalHalt::InvalidOffset)?;
        self.resize_to_cover(last)?;

        #[allow(clippy::indexing_slicing, reason = "the buffer covers the range after resizing")]
        self.buffer[offset..=last].copy_from_slice(data);
        Ok(())
    }

    /// Zero fills `size` bytes starting at `offset`. Copy opcodes use it
    /// to pad destinations whose source ran short.
    pub fn store_zeros(&mut self, offset: usize, size: usize) -> Result<(), VMError> {
        if size == 0 {
            return Ok(());
        }

        let last = offset
            .checked_add(size - 1)
            .ok_or(ExceptionalHalt::InvalidOffset)?;
        self.resize_to_cover(last)?;

        #[allow(clippy::indexing_slicing, reason = "the buffer covers the range after resizing")]
        self.buffer[offset..=last].fill(0);
        Ok(())
    }
}
