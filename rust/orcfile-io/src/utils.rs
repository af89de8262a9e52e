use std::ops::Range;

#[macro_export]
macro_rules! verify {
    ($expr:expr) => {{
        let result = $expr;
        $crate::utils::verify(result, stringify!($expr))?;
    }};
}

pub fn verify(predicate: bool, condition: &str) -> std::io::Result<()> {
    if predicate {
        Ok(())
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            condition,
        ))
    }
}

/// Clips `range` to an object of `size` bytes.
///
/// Returns an empty range when the start lies at or past the end of the object.
pub fn clip_range(range: Range<u64>, size: u64) -> Range<u64> {
    if range.start >= size || range.start >= range.end {
        return 0..0;
    }
    range.start..range.end.min(size)
}
