use crate::error::{Error, Result};
use crate::types::{Batch, FilePair};

/// Split the sorted pairs into contiguous batches of `batch_size`, the last
/// one holding the remainder. Numbering starts at 1.
pub fn partition(pairs: Vec<FilePair>, batch_size: usize) -> Result<Vec<Batch>> {
    if batch_size == 0 {
        return Err(Error::invalid("batch_size", "0", "must be greater than 0"));
    }

    let mut batches = Vec::with_capacity(pairs.len().div_ceil(batch_size));
    let mut iter = pairs.into_iter().peekable();
    while iter.peek().is_some() {
        let chunk: Vec<FilePair> = iter.by_ref().take(batch_size).collect();
        batches.push(Batch {
            number: batches.len() + 1,
            pairs: chunk,
        });
    }
    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn pairs(stems: &[&str]) -> Vec<FilePair> {
        stems
            .iter()
            .map(|s| FilePair {
                stem: s.to_string(),
                text_path: PathBuf::from(format!("{s}.txt")),
                image_path: PathBuf::from(format!("{s}.jpg")),
            })
            .collect()
    }

    #[test]
    fn three_pairs_in_batches_of_two() {
        let batches = partition(pairs(&["a", "b", "c"]), 2).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].number, 1);
        assert_eq!(batches[0].stems(), vec!["a", "b"]);
        assert_eq!(batches[1].number, 2);
        assert_eq!(batches[1].stems(), vec!["c"]);
    }

    #[test]
    fn batch_count_is_ceiling_and_order_is_preserved() {
        let stems: Vec<String> = (0..23).map(|i| format!("doc{i:03}")).collect();
        let refs: Vec<&str> = stems.iter().map(String::as_str).collect();
        for size in 1..=25 {
            let batches = partition(pairs(&refs), size).unwrap();
            assert_eq!(batches.len(), 23usize.div_ceil(size));
            for (i, batch) in batches.iter().enumerate() {
                assert_eq!(batch.number, i + 1);
                if i + 1 < batches.len() {
                    assert_eq!(batch.pairs.len(), size);
                }
            }
            let last = batches.last().unwrap().pairs.len();
            let expected_last = if 23 % size == 0 { size } else { 23 % size };
            assert_eq!(last, expected_last);

            let flattened: Vec<&str> = batches.iter().flat_map(|b| b.stems()).collect();
            assert_eq!(flattened, refs);
        }
    }

    #[test]
    fn empty_input_yields_no_batches() {
        assert!(partition(Vec::new(), 250).unwrap().is_empty());
    }

    #[test]
    fn zero_batch_size_is_invalid() {
        assert!(matches!(
            partition(pairs(&["a"]), 0),
            Err(Error::InvalidConfiguration { .. })
        ));
    }
}
