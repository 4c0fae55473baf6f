//! Index-addressable lists with two storage strategies behind one contract,
//! plus a mini-batch loader built on top of them.
//!
//! - [`DLinkedList`]: doubly-linked, nodes in an arena with head and tail
//!   sentinels. Cheap insertion and removal at the ends and at cursors.
//! - [`ArrayList`]: contiguous buffer with an explicit, doubling capacity.
//!
//! Both implement [`IList`], take an [`ItemEq`] strategy for element
//! matching and may carry a [`DeleteUserData`] callback that sees the
//! container before its contents are discarded.
//!
//! The library logs through the `log` facade and never installs a logger.

pub mod error;
pub mod list;
pub mod loader;

pub use crate::error::{IndexOutOfBounds, LoaderError};
pub use crate::list::array_list::{ArrayList, DEFAULT_CAPACITY};
pub use crate::list::item_eq::{DeleteUserData, ItemEq, NativeEq};
pub use crate::list::linked_list::{Backward, DLinkedList, Direction, Forward};
pub use crate::list::IList;
pub use crate::loader::data_loader::{Batch, DataLoader};
pub use crate::loader::dataset::{DataLabel, Dataset, Labels, VecDataset};
pub use crate::loader::loader_settings::LoaderSettings;
