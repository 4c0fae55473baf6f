use crate::error::{IndexOutOfBounds, LoaderError};

/// One data row together with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct DataLabel<D, L> {
    data: D,
    label: L,
}

impl<D, L> DataLabel<D, L> {
    pub fn new(data: D, label: L) -> Self {
        DataLabel { data, label }
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    pub fn into_parts(self) -> (D, L) {
        (self.data, self.label)
    }
}

/// An indexable collection of labelled rows.
pub trait Dataset {
    type Data;
    type Label;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the row at `index` with its label, or an error when
    /// `index >= len()`.
    fn get_item(
        &self,
        index: usize,
    ) -> Result<DataLabel<Self::Data, Self::Label>, IndexOutOfBounds>;
}

/// Labels of a [`VecDataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Labels<L> {
    /// One label per data row.
    PerItem(Vec<L>),
    /// A single label returned for every row.
    Shared(L),
}

/// A dataset held in memory.
///
/// ```
/// use ilist::{Dataset, Labels, VecDataset};
///
/// let dataset = VecDataset::new(vec![[0, 1], [2, 3]], Labels::Shared('x')).unwrap();
/// let item = dataset.get_item(1).unwrap();
/// assert_eq!(item.data(), &[2, 3]);
/// assert_eq!(item.label(), &'x');
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VecDataset<D, L> {
    data: Vec<D>,
    labels: Labels<L>,
}

impl<D, L> VecDataset<D, L> {
    /// Fails when per-item labels do not pair up with the data rows.
    pub fn new(data: Vec<D>, labels: Labels<L>) -> Result<Self, LoaderError> {
        if let Labels::PerItem(per_item) = &labels {
            if per_item.len() != data.len() {
                return Err(LoaderError::LabelCountMismatch {
                    rows: data.len(),
                    labels: per_item.len(),
                });
            }
        }
        Ok(VecDataset { data, labels })
    }

    pub fn data(&self) -> &[D] {
        &self.data
    }

    pub fn labels(&self) -> &Labels<L> {
        &self.labels
    }
}

impl<D: Clone, L: Clone> Dataset for VecDataset<D, L> {
    type Data = D;
    type Label = L;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn get_item(&self, index: usize) -> Result<DataLabel<D, L>, IndexOutOfBounds> {
        let data = self
            .data
            .get(index)
            .ok_or_else(|| IndexOutOfBounds::new(index, 0..self.data.len()))?;
        let label = match &self.labels {
            Labels::PerItem(labels) => &labels[index],
            Labels::Shared(label) => label,
        };
        Ok(DataLabel::new(data.clone(), label.clone()))
    }
}
