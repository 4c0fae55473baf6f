use core::cmp::min;
use core::fmt;
use core::iter::FusedIterator;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::dataset::Dataset;
use super::loader_settings::LoaderSettings;
use crate::error::LoaderError;
use crate::list::array_list::ArrayList;

/// The rows and labels of one batch, in the order of the batch's indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<D, L> {
    data: Vec<D>,
    labels: Vec<L>,
}

impl<D, L> Batch<D, L> {
    pub fn data(&self) -> &[D] {
        &self.data
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_parts(self) -> (Vec<D>, Vec<L>) {
        (self.data, self.labels)
    }
}

/// Cuts a borrowed dataset into batches of row indices.
///
/// The row order is fixed when the loader is built: `0..len` or, with
/// `shuffle`, a permutation of it drawn from a `StdRng`. A loader can be
/// iterated any number of times and always yields the same batches.
pub struct DataLoader<'a, S: Dataset> {
    dataset: &'a S,
    settings: LoaderSettings,
    indices: ArrayList<usize>,
}

impl<S: Dataset> fmt::Debug for DataLoader<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataLoader")
            .field("settings", &self.settings)
            .field("indices", &self.indices)
            .finish()
    }
}

impl<'a, S: Dataset> DataLoader<'a, S> {
    pub fn new(dataset: &'a S, settings: LoaderSettings) -> Result<Self, LoaderError> {
        if settings.batch_size == 0 {
            return Err(LoaderError::ZeroBatchSize);
        }

        let rows = dataset.len();
        let mut indices = ArrayList::with_capacity(rows);
        indices.extend(0..rows);
        if settings.shuffle {
            let mut rng = match settings.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            indices.as_mut_slice().shuffle(&mut rng);
        }

        let loader = DataLoader {
            dataset,
            settings,
            indices,
        };
        debug!(
            "data loader over {} rows: {:?}, {} batches",
            rows,
            loader.settings,
            loader.len()
        );
        Ok(loader)
    }

    /// Number of batches an iteration yields.
    pub fn len(&self) -> usize {
        let rows = self.indices.len();
        let batch_size = self.settings.batch_size;
        if self.settings.drop_last {
            rows / batch_size
        } else {
            rows.div_ceil(batch_size)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    /// Row order of the loader, every row exactly once.
    pub fn indices(&self) -> &[usize] {
        self.indices.as_slice()
    }

    /// The row indices of each batch.
    pub fn chunks(&self) -> IndexChunks<'_> {
        IndexChunks {
            indices: self.indices.as_slice(),
            batch_size: self.settings.batch_size,
            remaining: self.len(),
        }
    }

    /// The batches themselves, rows fetched from the dataset.
    pub fn iter(&self) -> Batches<'_, S> {
        Batches {
            dataset: self.dataset,
            chunks: self.chunks(),
        }
    }
}

impl<'l, S: Dataset> IntoIterator for &'l DataLoader<'_, S> {
    type Item = Result<Batch<S::Data, S::Label>, LoaderError>;
    type IntoIter = Batches<'l, S>;

    fn into_iter(self) -> Batches<'l, S> {
        self.iter()
    }
}

/// Iterator over the index chunks of a [`DataLoader`].
#[derive(Debug, Clone)]
pub struct IndexChunks<'a> {
    indices: &'a [usize],
    batch_size: usize,
    remaining: usize,
}

impl<'a> Iterator for IndexChunks<'a> {
    type Item = &'a [usize];

    fn next(&mut self) -> Option<&'a [usize]> {
        if self.remaining == 0 {
            return None;
        }
        let (chunk, rest) = self
            .indices
            .split_at(min(self.batch_size, self.indices.len()));
        self.indices = rest;
        self.remaining -= 1;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for IndexChunks<'_> {}

impl FusedIterator for IndexChunks<'_> {}

/// Iterator over the batches of a [`DataLoader`].
pub struct Batches<'a, S: Dataset> {
    dataset: &'a S,
    chunks: IndexChunks<'a>,
}

impl<S: Dataset> fmt::Debug for Batches<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Batches").field(&self.chunks).finish()
    }
}

impl<'a, S: Dataset> Iterator for Batches<'a, S> {
    type Item = Result<Batch<S::Data, S::Label>, LoaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        Some(stack(self.dataset, chunk))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<S: Dataset> ExactSizeIterator for Batches<'_, S> {}

fn stack<S: Dataset>(
    dataset: &S,
    chunk: &[usize],
) -> Result<Batch<S::Data, S::Label>, LoaderError> {
    let mut data = Vec::with_capacity(chunk.len());
    let mut labels = Vec::with_capacity(chunk.len());
    for &index in chunk {
        let (row, label) = dataset.get_item(index)?.into_parts();
        data.push(row);
        labels.push(label);
    }
    Ok(Batch { data, labels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexOutOfBounds;
    use crate::loader::dataset::{DataLabel, Labels, VecDataset};
    use test_case::test_case;

    fn dataset(rows: usize) -> VecDataset<usize, usize> {
        let data: Vec<usize> = (0..rows).collect();
        let labels = data.iter().map(|x| x * 10).collect();
        VecDataset::new(data, Labels::PerItem(labels)).unwrap()
    }

    fn settings(batch_size: usize, shuffle: bool, drop_last: bool) -> LoaderSettings {
        LoaderSettings {
            batch_size,
            shuffle,
            drop_last,
            seed: Some(7),
        }
    }

    #[test_case(10, 3, false => vec![3, 3, 3, 1]; "ragged tail kept")]
    #[test_case(10, 3, true => vec![3, 3, 3]; "ragged tail dropped")]
    #[test_case(9, 3, false => vec![3, 3, 3]; "exact fit")]
    #[test_case(9, 3, true => vec![3, 3, 3]; "exact fit drop last")]
    #[test_case(2, 5, false => vec![2]; "batch larger than dataset")]
    #[test_case(2, 5, true => Vec::<usize>::new(); "batch larger than dataset drop last")]
    #[test_case(0, 4, false => Vec::<usize>::new(); "empty dataset")]
    #[test_case(3, usize::MAX, false => vec![3]; "batch size at usize max")]
    #[test_case(3, usize::MAX, true => Vec::<usize>::new(); "batch size at usize max drop last")]
    fn batch_sizes(rows: usize, batch_size: usize, drop_last: bool) -> Vec<usize> {
        let data = dataset(rows);
        let loader = DataLoader::new(&data, settings(batch_size, false, drop_last)).unwrap();
        let sizes: Vec<usize> = loader.chunks().map(|chunk| chunk.len()).collect();
        assert_eq!(sizes.len(), loader.len());
        sizes
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let data = dataset(3);
        let err = DataLoader::new(&data, settings(0, false, false)).unwrap_err();
        assert_eq!(err, LoaderError::ZeroBatchSize);
    }

    #[test]
    fn unshuffled_batches_follow_row_order() {
        let data = dataset(5);
        let loader = DataLoader::new(&data, settings(2, false, false)).unwrap();
        let batches: Vec<_> = loader.iter().map(|b| b.unwrap().into_parts()).collect();
        assert_eq!(
            batches,
            vec![
                (vec![0, 1], vec![0, 10]),
                (vec![2, 3], vec![20, 30]),
                (vec![4], vec![40]),
            ]
        );
    }

    #[test]
    fn shuffle_is_a_seeded_permutation() {
        let data = dataset(50);
        let a = DataLoader::new(&data, settings(8, true, false)).unwrap();
        let b = DataLoader::new(&data, settings(8, true, false)).unwrap();
        assert_eq!(a.indices(), b.indices());

        let mut seen = a.indices().to_vec();
        seen.sort_unstable();
        assert_eq!(seen, (0..50).collect::<Vec<_>>());

        for batch in &a {
            let batch = batch.unwrap();
            for (row, label) in batch.data().iter().zip(batch.labels()) {
                assert_eq!(row * 10, *label);
            }
        }
    }

    struct Shrunk;

    impl Dataset for Shrunk {
        type Data = u8;
        type Label = u8;

        fn len(&self) -> usize {
            2
        }

        fn get_item(&self, index: usize) -> Result<DataLabel<u8, u8>, IndexOutOfBounds> {
            match index {
                0 => Ok(DataLabel::new(0, 0)),
                _ => Err(IndexOutOfBounds::new(index, 0..1)),
            }
        }
    }

    #[test]
    fn dataset_errors_surface_per_batch() {
        let loader = DataLoader::new(&Shrunk, settings(1, false, false)).unwrap();
        let results: Vec<_> = loader.iter().collect();
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(LoaderError::IndexOutOfBounds(IndexOutOfBounds::new(1, 0..1)))
        );
    }
}
