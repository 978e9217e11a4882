#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod fnv;

/// A string-keyed hash map using open addressing with linear probing.
///
/// This module provides [`StrMap`] along with its entry API and iterator
/// types.
pub mod str_map;

pub use fnv::FnvBuildHasher;
pub use fnv::FnvHasher;
pub use str_map::Entry;
pub use str_map::StrMap;
