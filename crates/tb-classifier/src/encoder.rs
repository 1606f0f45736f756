//! Label encoder — label ⇄ dense class index.
//!
//! Classes are the sorted distinct training labels, so index `i` always
//! denotes the `i`-th smallest label. An encoder is fit once and then owned
//! by the model that was trained with it.

use crate::ClassifierError;
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEncoder<L> {
    classes: Vec<L>,
}

impl<L: Ord + Clone + Debug> LabelEncoder<L> {
    pub fn fit<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a L>,
        L: 'a,
    {
        let mut classes: Vec<L> = labels.into_iter().cloned().collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    pub fn encode(&self, label: &L) -> Option<usize> {
        self.classes.binary_search(label).ok()
    }

    pub fn transform(&self, labels: &[L]) -> Result<Vec<usize>, ClassifierError> {
        labels
            .iter()
            .map(|label| {
                self.encode(label).ok_or_else(|| {
                    ClassifierError::Training(format!("label {label:?} was not seen when fitting"))
                })
            })
            .collect()
    }

    pub fn decode(&self, index: usize) -> Option<&L> {
        self.classes.get(index)
    }

    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_sorted_and_distinct() {
        let labels = vec!["ruido".to_string(), "agua".into(), "ruido".into()];
        let enc = LabelEncoder::fit(&labels);
        assert_eq!(enc.classes(), ["agua".to_string(), "ruido".to_string()]);
        assert_eq!(enc.transform(&labels).unwrap(), vec![1, 0, 1]);
    }

    #[test]
    fn decode_inverts_encode() {
        let labels = vec!["b".to_string(), "a".into(), "c".into()];
        let enc = LabelEncoder::fit(&labels);
        for label in &labels {
            let idx = enc.encode(label).unwrap();
            assert_eq!(enc.decode(idx), Some(label));
        }
        assert_eq!(enc.decode(3), None);
    }

    #[test]
    fn unseen_label_is_an_error() {
        let enc = LabelEncoder::fit(&["a".to_string()]);
        assert!(enc.encode(&"z".to_string()).is_none());
        assert!(enc.transform(&["z".to_string()]).is_err());
    }
}
