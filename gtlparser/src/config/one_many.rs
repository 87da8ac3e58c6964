use std::vec::IntoIter;

use serde::{Deserialize, Serialize};

/// A config value that may be absent, a single item, or a list of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptOneMany<T> {
    NoValue,
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OptOneMany<T> {
    fn default() -> Self {
        Self::NoValue
    }
}

impl<T> IntoIterator for OptOneMany<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::NoValue => Vec::new().into_iter(),
            Self::One(v) => vec![v].into_iter(),
            Self::Many(v) => v.into_iter(),
        }
    }
}

impl<T> OptOneMany<T> {
    pub fn new<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        match items.len() {
            0 => Self::NoValue,
            1 => items.pop().map_or(Self::NoValue, Self::One),
            _ => Self::Many(items),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::NoValue)
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::NoValue => &[],
            Self::One(item) => std::slice::from_ref(item),
            Self::Many(v) => v.as_slice(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::OptOneMany::{Many, NoValue, One};
    use super::*;

    #[test]
    fn one_or_many() {
        assert_eq!(OptOneMany::new(vec![1, 2, 3]), Many(vec![1, 2, 3]));
        assert_eq!(OptOneMany::new(vec![1]), One(1));
        assert_eq!(OptOneMany::new(Vec::<i32>::new()), NoValue);

        let many = Many(vec![1, 2, 3]);
        assert_eq!(many.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
        assert_eq!(One(1).as_slice(), &[1]);
        assert!(OptOneMany::<i32>::NoValue.is_empty());
        assert!(OptOneMany::<i32>::Many(vec![]).is_empty());
        assert_eq!(many.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
