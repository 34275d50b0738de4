//! Python-style `start:stop:step` slicing
//!
//! Bounds are clamped rather than rejected: out-of-range bounds shrink the
//! result, negative bounds count from the end, and a negative step walks
//! backwards. Only a zero step is an error.

use crate::error::{DictupleError, Result};

/// Unresolved slice bounds; `None` means "from the natural end"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Slice {
    /// First position, inclusive
    pub start: Option<isize>,
    /// Last position, exclusive
    pub stop: Option<isize>,
    /// Stride; defaults to 1
    pub step: Option<isize>,
}

impl Slice {
    /// Slice from explicit bounds
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// `[:]`
    pub fn full() -> Self {
        Self::default()
    }

    /// `[::-1]`
    pub fn reversed() -> Self {
        Self::new(None, None, Some(-1))
    }

    /// Resolves the bounds against a sequence of `len` elements
    pub fn resolve(&self, len: usize) -> Result<SliceRange> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(DictupleError::invalid_argument("slice step cannot be zero"));
        }

        let len = len as i128;
        let step = step as i128;
        let backwards = step < 0;
        let clamp = |bound: Option<isize>, default: i128| -> i128 {
            match bound {
                None => default,
                Some(b) => {
                    let b = b as i128;
                    if b < 0 {
                        let b = b + len;
                        if b < 0 {
                            if backwards {
                                -1
                            } else {
                                0
                            }
                        } else {
                            b
                        }
                    } else if b >= len {
                        if backwards {
                            len - 1
                        } else {
                            len
                        }
                    } else {
                        b
                    }
                }
            }
        };

        let (start, stop) = if backwards {
            (clamp(self.start, len - 1), clamp(self.stop, -1))
        } else {
            (clamp(self.start, 0), clamp(self.stop, len))
        };

        let count = if backwards {
            if stop < start {
                (start - stop - 1) / -step + 1
            } else {
                0
            }
        } else if start < stop {
            (stop - start - 1) / step + 1
        } else {
            0
        };

        Ok(SliceRange {
            start: if count > 0 { start as usize } else { 0 },
            step: step as isize,
            len: count as usize,
        })
    }
}

/// Slice bounds resolved against a concrete length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceRange {
    start: usize,
    step: isize,
    len: usize,
}

impl SliceRange {
    /// Number of selected positions
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Selected positions, in slice order
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        let start = self.start as i128;
        let step = self.step as i128;
        (0..self.len).map(move |i| (start + i as i128 * step) as usize)
    }
}
