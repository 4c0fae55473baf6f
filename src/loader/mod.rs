//! Mini-batch iteration over an indexable dataset.
//!
//! ```
//! use ilist::{DataLoader, Labels, LoaderSettings, VecDataset};
//!
//! let dataset = VecDataset::new(
//!     vec![[0.0, 1.0], [1.0, 0.0], [1.0, 1.0]],
//!     Labels::PerItem(vec![1, 1, 0]),
//! )
//! .unwrap();
//! let settings = LoaderSettings {
//!     batch_size: 2,
//!     shuffle: false,
//!     ..Default::default()
//! };
//!
//! let loader = DataLoader::new(&dataset, settings).unwrap();
//! let sizes: Vec<usize> = loader.iter().map(|batch| batch.unwrap().len()).collect();
//! assert_eq!(sizes, [2, 1]);
//! ```

pub mod data_loader;
pub mod dataset;
pub mod loader_settings;
