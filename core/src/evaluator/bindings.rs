use hashbrown::HashMap;
use rust_decimal::Decimal;

/// Input values by name.
///
/// ```
/// use reckon_core::evaluator::Bindings;
/// use rust_decimal::Decimal;
///
/// let bindings = Bindings::new().bind("a", Decimal::ONE);
/// assert_eq!(bindings.get("a"), Some(Decimal::ONE));
/// assert_eq!(bindings.get("b"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: HashMap<String, Decimal>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, name: impl Into<String>, value: Decimal) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name`, returning its previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: Decimal) -> Option<Decimal> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, Decimal)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, Decimal)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        bindings.extend(iter);
        bindings
    }
}

impl<K: Into<String>> Extend<(K, Decimal)> for Bindings {
    fn extend<I: IntoIterator<Item = (K, Decimal)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Decimal); N]> for Bindings {
    fn from(pairs: [(K, Decimal); N]) -> Self {
        pairs.into_iter().collect()
    }
}
