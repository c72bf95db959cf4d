// Fri Oct 16 2026 - Alex

use crate::structure::field::{Field, PAD_NAME};

/// Builds a blank byte-array field of `size` bytes; non-positive sizes
/// give a zero-length pad.
pub fn pad_field(size: i64) -> Field {
    let size = size.max(0);
    Field {
        name: PAD_NAME.to_string(),
        type_name: format!("[{}]byte", size),
        size,
        align: 1,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pad() {
        let expected = Field::new("_", "[0]byte", 0, 1);
        assert_eq!(pad_field(0), expected);
        assert_eq!(pad_field(-10), expected);
    }

    #[test]
    fn test_positive_pad() {
        let pad = pad_field(10);
        assert_eq!(pad, Field::new("_", "[10]byte", 10, 1));
        assert!(pad.is_pad());
        assert_eq!(pad.ptr, 0);
    }
}
