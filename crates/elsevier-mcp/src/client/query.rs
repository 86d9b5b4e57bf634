//! Query-string parameters for API requests.

/// A single query value. Absent values are dropped, never sent as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParamValue(Option<String>);

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self(Some(value.to_string()))
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self(Some(value))
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self(Some(value.clone()))
    }
}

macro_rules! numeric_param {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ParamValue {
            fn from(value: $ty) -> Self {
                Self(Some(value.to_string()))
            }
        })*
    };
}

numeric_param!(u8, u16, u32, u64, usize, i32, i64);

impl<T: Into<Self>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self(None), Into::into)
    }
}

/// Ordered query parameters with last-write-wins semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`.
    ///
    /// An absent value leaves the list untouched. A repeated name keeps its
    /// original position and takes the new value.
    pub fn set(&mut self, name: &str, value: impl Into<ParamValue>) -> &mut Self {
        let ParamValue(Some(value)) = value.into() else {
            return self;
        };

        match self.pairs.iter_mut().find(|(k, _)| k == name) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((name.to_string(), value)),
        }
        self
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Value currently set for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    /// Iterate over the present pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_are_skipped() {
        let params = QueryParams::new()
            .with("query", "TITLE(graphene)")
            .with("start", None::<u32>)
            .with("view", None::<&str>);

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("start"), None);
    }

    #[test]
    fn test_last_write_wins_in_place() {
        let params = QueryParams::new().with("a", "1").with("b", "2").with("a", "3");
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_absent_does_not_clear_existing() {
        let params = QueryParams::new().with("count", 10u32).with("count", None::<u32>);
        assert_eq!(params.get("count"), Some("10"));
    }

    #[test]
    fn test_numbers_use_decimal_form() {
        let params = QueryParams::new().with("start", 0u32).with("offset", -5i64);
        assert_eq!(params.get("start"), Some("0"));
        assert_eq!(params.get("offset"), Some("-5"));
    }
}
