use crate::error::Error;
use crate::rational::{self, Q};
use num::{BigInt, One, Signed, ToPrimitive, Zero};
use tracing::debug;

/// A heap of growable arrays of rationals, each keyed by a distinct
/// proper reduced fraction.
///
/// An address `a` refers to offset `⌊a⌋` inside the array keyed by
/// `a mod 1`. Key `0` is the static program image: it exists from
/// construction, is never recycled, and reads past its end yield zero
/// (the image is conceptually infinite and zero-filled). All other
/// keys are minted by [`alloc`](Memory::alloc) in a deterministic
/// enumeration of `[0, 1)` and recycled through a LIFO freelist by
/// [`delete`](Memory::delete).
///
/// # Examples
/// ```
/// use num::BigInt;
/// use qvm::{Memory, Q};
///
/// let mut memory = Memory::new();
/// let base = memory.alloc(2);
///
/// assert_eq!(base, Q::new(BigInt::from(1), BigInt::from(2)));
/// assert_eq!(memory.size(&base), Ok(2));
///
/// let address = Q::from_integer(BigInt::from(1)) + &base;
/// memory.write(&address, Q::from_integer(BigInt::from(13))).unwrap();
/// assert_eq!(memory.read(&address), Ok(Q::from_integer(BigInt::from(13))));
/// ```
pub struct Memory {
    arrays: Vec<Option<Vec<Q>>>,
    pool: Vec<Q>,
    next_base: Q,
}

impl Memory {
    /// Constructs a memory holding only the empty static image.
    pub fn new() -> Memory {
        Memory {
            arrays: vec![Some(Vec::new())],
            pool: Vec::new(),
            next_base: Q::new(BigInt::one(), BigInt::from(2)),
        }
    }

    /// Appends words to the static image. Used when loading a program.
    pub fn extend_static<I: IntoIterator<Item = Q>>(&mut self, words: I) {
        if let Some(Some(array)) = self.arrays.get_mut(0) {
            array.extend(words);
        }
    }

    /// Allocates a fresh array of `size` zero cells and returns its key.
    ///
    /// Freed keys are reused in LIFO order before new ones are minted.
    ///
    /// # Examples
    /// ```
    /// use num::BigInt;
    /// use qvm::{Memory, Q};
    ///
    /// let mut memory = Memory::new();
    /// assert_eq!(memory.alloc(0), Q::new(BigInt::from(1), BigInt::from(2)));
    /// assert_eq!(memory.alloc(0), Q::new(BigInt::from(1), BigInt::from(3)));
    /// assert_eq!(memory.alloc(0), Q::new(BigInt::from(2), BigInt::from(3)));
    /// ```
    pub fn alloc(&mut self, size: usize) -> Q {
        let base = match self.pool.pop() {
            Some(base) => base,
            None => {
                let base = self.next_base.clone();
                self.next_base = rational::next_fraction(&base);
                base
            }
        };

        let index = rational::fraction_index(&base).expect("minted keys are proper fractions");

        if self.arrays.len() <= index {
            self.arrays.resize(index + 1, None);
        }

        self.arrays[index] = Some(vec![Q::zero(); size]);
        debug!(base = %base, size, "allocated array");
        base
    }

    /// Frees the array keyed by the fractional part of `base` and
    /// pushes the key onto the freelist.
    ///
    /// Freeing the static image or a key with no live array is an
    /// error.
    pub fn delete(&mut self, base: &Q) -> Result<(), Error> {
        let (_, base) = rational::divmod(base);

        if base.is_zero() {
            return Err(Error::Reserved(base));
        }

        let index = rational::fraction_index(&base).ok_or_else(|| Error::Unallocated(base.clone()))?;
        let freed = self.pool.contains(&base);

        match self.arrays.get_mut(index) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                debug!(base = %base, "freed array");
                self.pool.push(base);
                Ok(())
            }
            _ if freed => Err(Error::Freed(base)),
            _ => Err(Error::Unallocated(base)),
        }
    }

    /// Reads the cell at `address`.
    ///
    /// Reads past the end of the static image return zero; on any
    /// other array they are an error.
    pub fn read(&self, address: &Q) -> Result<Q, Error> {
        let (offset, base) = rational::divmod(address);

        if offset.is_negative() {
            return Err(Error::NegativeOffset(address.clone()));
        }

        let array = self.array(&base)?;

        match offset.to_usize().and_then(|offset| array.get(offset)) {
            Some(value) => Ok(value.clone()),
            None if base.is_zero() => Ok(Q::zero()),
            None => Err(Error::OutOfBounds {
                address: address.clone(),
                base,
                len: array.len(),
            }),
        }
    }

    /// Writes `value` to the cell at `address`.
    ///
    /// Writes past the end of the static image grow it with zero fill;
    /// on any other array they are an error.
    pub fn write(&mut self, address: &Q, value: Q) -> Result<(), Error> {
        let (offset, base) = rational::divmod(address);

        if offset.is_negative() {
            return Err(Error::NegativeOffset(address.clone()));
        }

        let is_static = base.is_zero();
        let array = self.array_mut(&base)?;
        let len = array.len();

        match offset.to_usize() {
            Some(offset) if offset < len => {
                array[offset] = value;
                Ok(())
            }
            Some(offset) if is_static => {
                array.resize(offset, Q::zero());
                array.push(value);
                Ok(())
            }
            _ => Err(Error::OutOfBounds {
                address: address.clone(),
                base,
                len,
            }),
        }
    }

    /// Appends `value` to the end of the array keyed by `base`.
    pub fn push(&mut self, base: &Q, value: Q) -> Result<(), Error> {
        let (_, base) = rational::divmod(base);
        self.array_mut(&base)?.push(value);
        Ok(())
    }

    /// Removes and returns the last cell of the array keyed by `base`.
    pub fn pop(&mut self, base: &Q) -> Result<Q, Error> {
        let (_, base) = rational::divmod(base);
        let value = self.array_mut(&base)?.pop();
        value.ok_or(Error::StackUnderflow(base))
    }

    /// Returns the current length of the array keyed by `base`.
    pub fn size(&self, base: &Q) -> Result<usize, Error> {
        let (_, base) = rational::divmod(base);
        Ok(self.array(&base)?.len())
    }

    fn array(&self, base: &Q) -> Result<&Vec<Q>, Error> {
        rational::fraction_index(base)
            .and_then(|index| self.arrays.get(index))
            .and_then(|slot| slot.as_ref())
            .ok_or_else(|| self.missing(base))
    }

    fn array_mut(&mut self, base: &Q) -> Result<&mut Vec<Q>, Error> {
        let freed = self.pool.contains(base);
        let arrays = &mut self.arrays;

        rational::fraction_index(base)
            .and_then(move |index| arrays.get_mut(index))
            .and_then(|slot| slot.as_mut())
            .ok_or_else(|| {
                if freed {
                    Error::Freed(base.clone())
                } else {
                    Error::Unallocated(base.clone())
                }
            })
    }

    /// Names the fault for a key with no live array: freed keys sit in
    /// the freelist, anything else was never minted.
    fn missing(&self, base: &Q) -> Error {
        if self.pool.contains(base) {
            Error::Freed(base.clone())
        } else {
            Error::Unallocated(base.clone())
        }
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new()
    }
}
