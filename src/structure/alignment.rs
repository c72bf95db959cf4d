// Fri Oct 16 2026 - Alex

/// Byte boundary used for layout rounding. Values below 1 collapse to 1,
/// and non power-of-two boundaries are allowed since declared alignments
/// are taken as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment {
    value: i64,
}

impl Alignment {
    pub fn new(value: i64) -> Self {
        Self { value: value.max(1) }
    }

    pub fn as_i64(&self) -> i64 {
        self.value
    }

    pub fn align(&self, offset: i64) -> i64 {
        if self.value <= 1 {
            return offset;
        }
        let rem = offset % self.value;
        if rem == 0 {
            offset
        } else {
            offset + self.value - rem
        }
    }

    /// Bytes needed to bring `offset` up to the next boundary.
    pub fn gap(&self, offset: i64) -> i64 {
        self.align(offset) - offset
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::new(1)
    }
}

impl From<i64> for Alignment {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}
