/// How a [`DataLoader`](crate::DataLoader) cuts a dataset into batches.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LoaderSettings {
    /// Rows per batch; must be at least 1.
    pub batch_size: usize,
    /// Shuffle the row order once, when the loader is built.
    pub shuffle: bool,
    /// Skip the last batch if it is shorter than `batch_size`.
    pub drop_last: bool,
    /// Shuffle seed. `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        LoaderSettings {
            batch_size: 1,
            shuffle: true,
            drop_last: false,
            seed: None,
        }
    }
}

impl LoaderSettings {
    pub fn with_batch_size(batch_size: usize) -> Self {
        LoaderSettings {
            batch_size,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = LoaderSettings::with_batch_size(8);
        assert_eq!(settings.batch_size, 8);
        assert!(settings.shuffle);
        assert!(!settings.drop_last);
        assert_eq!(settings.seed, None);
        assert_eq!(LoaderSettings::default().batch_size, 1);
    }
}
