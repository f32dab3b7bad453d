//! Vector type indexed by a newtype.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut, Range};

use itertools::Itertools;

/// Error value returned by some operations related to [`GenericVec`]s when the
/// maximum value of an indexing type is exceeded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IndexOverflow {
    /// Name of the indexing type.
    pub type_name: &'static str,
    /// Maximum allowed value for the indexing type.
    pub max_value: u64,
}
impl fmt::Display for IndexOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exceeded maximum {} count of {}",
            self.type_name, self.max_value,
        )
    }
}
impl std::error::Error for IndexOverflow {}

/// Error value returned by some operations related to [`GenericVec`]s when the
/// index is too large for the vector.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IndexOutOfRange {
    /// Name of the indexing type.
    pub type_name: &'static str,
}
impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} index out of range", self.type_name)
    }
}
impl std::error::Error for IndexOutOfRange {}

/// Constructs a struct that is a simple wrapper around a primitive unsigned
/// integer type used as an index.
#[macro_export]
macro_rules! idx_struct {
    (
        $(
            $(#[$attr:meta])*
            $struct_vis:vis struct $struct_name:ident($inner_vis:vis $inner_type:ty);
        )+
    ) => {
        $(
            $(#[$attr])*
            #[derive(Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
            #[repr(transparent)]
            $struct_vis struct $struct_name($inner_vis $inner_type);

            impl ::std::fmt::Debug for $struct_name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    write!(f, "#{:?}", self.0)
                }
            }
            impl ::std::fmt::Display for $struct_name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    write!(f, "#{}", self.0)
                }
            }

            impl $crate::collections::IndexNewtype for $struct_name {
                const MAX_INDEX: usize = <$inner_type>::MAX as usize;
                const TYPE_NAME: &'static str = stringify!($struct_name);

                fn to_usize(self) -> usize {
                    self.0 as usize
                }

                fn try_from_usize(index: usize) -> Result<Self, $crate::collections::IndexOverflow> {
                    match index.try_into() {
                        Ok(i) => Ok(Self(i)),
                        Err(_) => Err($crate::collections::IndexOverflow {
                            type_name: stringify!($struct_name),
                            max_value: <$inner_type>::MAX as u64,
                        }),
                    }
                }
            }
        )+
    };
}

/// Newtype wrapper around a primitive unsigned integer, which is useful as an
/// index into arrays.
pub trait IndexNewtype:
    fmt::Debug
    + fmt::Display
    + Default
    + Copy
    + Clone
    + PartialEq
    + Eq
    + std::hash::Hash
    + PartialOrd
    + Ord
    + Send
    + Sync
{
    /// Maximum index representable by the type.
    const MAX_INDEX: usize;
    /// User-friendly type name.
    const TYPE_NAME: &'static str;

    /// Returns the index as a `usize`.
    fn to_usize(self) -> usize;

    /// Returns an index from a `usize`, or an error if it does not fit.
    fn try_from_usize(index: usize) -> Result<Self, IndexOverflow>;
}

/// Iterator over possible indices into a [`GenericVec<I, _>`].
#[derive(Debug, Default, Clone)]
pub struct IndexIter<I> {
    range: Range<usize>,
    _phantom: PhantomData<I>,
}
impl<I: IndexNewtype> Iterator for IndexIter<I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        // The collection never grows past the maximum index, so the
        // conversion never fails.
        self.range.next().and_then(|i| I::try_from_usize(i).ok())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}
impl<I: IndexNewtype> ExactSizeIterator for IndexIter<I> {}

/// Wrapper around a `Vec<E>` that is indexed using `I` by converting it to an
/// integer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GenericVec<I, E> {
    values: Vec<E>,
    _phantom: PhantomData<I>,
}
impl<I: fmt::Debug, E: fmt::Debug> fmt::Debug for GenericVec<I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let contents = self.values.iter().map(|v| format!("{v:?}")).join(", ");
        write!(f, "[{contents}]")
    }
}
impl<I, E> Default for GenericVec<I, E> {
    fn default() -> Self {
        Self {
            values: vec![],
            _phantom: PhantomData,
        }
    }
}
impl<I: IndexNewtype, E> Index<I> for GenericVec<I, E> {
    type Output = E;

    fn index(&self, index: I) -> &Self::Output {
        &self.values[index.to_usize()]
    }
}
impl<I: IndexNewtype, E> IndexMut<I> for GenericVec<I, E> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.values[index.to_usize()]
    }
}
impl<I: IndexNewtype, E> GenericVec<I, E> {
    /// Constructs a new empty vector.
    pub const fn new() -> Self {
        GenericVec {
            values: vec![],
            _phantom: PhantomData,
        }
    }

    /// Adds an element to the end of the vector and returns its index.
    pub fn push(&mut self, value: E) -> Result<I, IndexOverflow> {
        let idx = self.next_idx()?;
        self.values.push(value);
        Ok(idx)
    }

    /// Returns whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    /// Returns the number of elements in the collection.
    pub fn len(&self) -> usize {
        self.values.len()
    }
    /// Returns the index of the next element to be added to the collection.
    pub fn next_idx(&self) -> Result<I, IndexOverflow> {
        I::try_from_usize(self.len())
    }

    /// Returns a reference to the element at `index`, or an error if the index
    /// is out of range.
    pub fn get(&self, index: I) -> Result<&E, IndexOutOfRange> {
        self.values.get(index.to_usize()).ok_or(IndexOutOfRange {
            type_name: I::TYPE_NAME,
        })
    }
    /// Returns a mutable reference to the element at `index`, or an error if
    /// the index is out of range.
    pub fn get_mut(&mut self, index: I) -> Result<&mut E, IndexOutOfRange> {
        self.values
            .get_mut(index.to_usize())
            .ok_or(IndexOutOfRange {
                type_name: I::TYPE_NAME,
            })
    }

    /// Returns an iterator over the indices in the collection.
    pub fn iter_keys(&self) -> IndexIter<I> {
        IndexIter {
            range: 0..self.len(),
            _phantom: PhantomData,
        }
    }
    /// Returns a mutating iterator over the values in the collection.
    pub fn iter_values_mut(&mut self) -> impl Iterator<Item = &mut E> {
        self.values.iter_mut()
    }
    /// Returns an iterator over the index-value pairs in the collection.
    pub fn iter(&self) -> impl Iterator<Item = (I, &E)> {
        self.iter_keys().zip(&self.values)
    }
}
impl<I: IndexNewtype, E> FromIterator<E> for GenericVec<I, E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let values = iter.into_iter().take(I::MAX_INDEX + 1).collect_vec();
        GenericVec {
            values,
            _phantom: PhantomData,
        }
    }
}
