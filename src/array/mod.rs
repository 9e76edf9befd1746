//! # Owned Dynamic Array
//!
//! A growable array that owns its backing buffer exclusively and stores
//! element copies, never references.
//!
//! ## Core Components
//!
//! - [`Array`]: the container. The buffer always holds exactly `len`
//!   elements; every push grows it by one element's worth and every pop
//!   shrinks it, so an empty array holds no allocation at all.
//! - [`ArrayError`]: allocation failure and bounds violations, reported as
//!   values instead of corrupting state.
//!
//! ## Ownership
//!
//! The array alone owns its buffer. Elements are copied in on push and
//! read in place through checked accessors; nothing else may free or alias
//! the storage. The element type must be `Copy`: the array never runs
//! destructors, which is also what makes a failed shrink reallocation
//! recoverable without touching the stored elements.
//!
//! # Examples
//!
//! ```
//! use mesh_collections::array::Array;
//!
//! let mut arr: Array<u32> = Array::new();
//! arr.push(3).unwrap();
//! arr.push(1).unwrap();
//! arr.push(2).unwrap();
//!
//! assert_eq!(arr.len(), 3);
//! assert_eq!(arr.get(1), Some(&1));
//! assert_eq!(arr.get(3), None);
//!
//! arr.pop(arr.len()).unwrap();
//! assert!(arr.is_empty());
//! ```

mod owned;
mod raw;

pub use owned::{Array, ArrayError};
