//! Front-consumable view over an entropy block.
//!
//! All byte-to-value conversions live here so every approach resolves
//! parameters with the same rules:
//!
//! - level: `byte / 255`
//! - categorical pick: `byte mod len`
//! - bounded range: `lo + byte mod (hi - lo + 1)`
//! - linear scale: `base + byte * step`

use thiserror::Error;

/// Errors raised while reading a block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// A read was attempted past the end of the block.
    #[error("byte block exhausted at offset {offset}")]
    Exhausted {
        /// Position of the failed read.
        offset: usize,
    },
}

/// Ordered cursor over a byte slice.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Consumes the next raw byte.
    pub fn next_byte(&mut self) -> Result<u8, CursorError> {
        let byte = *self
            .bytes
            .get(self.pos)
            .ok_or(CursorError::Exhausted { offset: self.pos })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Consumes a byte as a normalized level in `[0, 1]`.
    pub fn level(&mut self) -> Result<f64, CursorError> {
        Ok(f64::from(self.next_byte()?) / 255.0)
    }

    /// Consumes a byte as an index into a list of length `len`.
    pub fn index(&mut self, len: usize) -> Result<usize, CursorError> {
        debug_assert!(len > 0);
        Ok(usize::from(self.next_byte()?) % len)
    }

    /// Consumes a byte and picks from `table` in declared order.
    pub fn pick<T: Copy>(&mut self, table: &[T]) -> Result<T, CursorError> {
        let idx = self.index(table.len())?;
        Ok(table[idx])
    }

    /// Consumes a byte and picks an index not present in `taken`.
    ///
    /// On collision the index advances by one, wrapping, until it is
    /// distinct. If every index is taken the first candidate is returned.
    pub fn pick_distinct(&mut self, len: usize, taken: &[usize]) -> Result<usize, CursorError> {
        let start = self.index(len)?;
        Ok((0..len)
            .map(|step| (start + step) % len)
            .find(|idx| !taken.contains(idx))
            .unwrap_or(start))
    }

    /// Consumes a byte as an integer in `[lo, hi]`.
    pub fn range(&mut self, lo: u32, hi: u32) -> Result<u32, CursorError> {
        debug_assert!(hi >= lo);
        Ok(lo + u32::from(self.next_byte()?) % (hi - lo + 1))
    }

    /// Consumes a byte as `base + byte * step`.
    pub fn linear(&mut self, base: u32, step: u32) -> Result<u32, CursorError> {
        Ok(base + u32::from(self.next_byte()?) * step)
    }

    /// Skips `count` bytes.
    pub fn skip(&mut self, count: usize) -> Result<(), CursorError> {
        if self.remaining() < count {
            return Err(CursorError::Exhausted {
                offset: self.bytes.len(),
            });
        }
        self.pos += count;
        Ok(())
    }

    /// Returns the number of bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes left.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bounds() {
        let mut cursor = ByteCursor::new(&[0, 255, 200]);
        assert_eq!(cursor.level().unwrap(), 0.0);
        assert_eq!(cursor.level().unwrap(), 1.0);
        assert!((cursor.level().unwrap() - 0.7843).abs() < 1e-4);
    }

    #[test]
    fn test_pick_modulo() {
        let table = ["a", "b", "c"];
        let mut cursor = ByteCursor::new(&[0, 4, 255]);
        assert_eq!(cursor.pick(&table).unwrap(), "a");
        assert_eq!(cursor.pick(&table).unwrap(), "b");
        assert_eq!(cursor.pick(&table).unwrap(), "a");
    }

    #[test]
    fn test_pick_distinct_advances_on_collision() {
        let mut cursor = ByteCursor::new(&[2, 2, 9]);
        assert_eq!(cursor.pick_distinct(5, &[]).unwrap(), 2);
        assert_eq!(cursor.pick_distinct(5, &[2]).unwrap(), 3);
        // 9 % 5 = 4, taken; wraps past taken 0 to 1
        assert_eq!(cursor.pick_distinct(5, &[4, 0]).unwrap(), 1);
    }

    #[test]
    fn test_range_and_linear() {
        let mut cursor = ByteCursor::new(&[7, 255, 3]);
        assert_eq!(cursor.range(2, 4).unwrap(), 3);
        assert_eq!(cursor.linear(100, 4).unwrap(), 1120);
        assert_eq!(cursor.range(5, 5).unwrap(), 5);
    }

    #[test]
    fn test_exhausted() {
        let mut cursor = ByteCursor::new(&[1]);
        cursor.next_byte().unwrap();
        assert_eq!(
            cursor.next_byte(),
            Err(CursorError::Exhausted { offset: 1 })
        );
        assert!(cursor.skip(1).is_err());
    }

    #[test]
    fn test_consumed_tracking() {
        let mut cursor = ByteCursor::new(&[0; 10]);
        cursor.level().unwrap();
        cursor.skip(3).unwrap();
        assert_eq!(cursor.consumed(), 4);
        assert_eq!(cursor.remaining(), 6);
    }
}
