use crate::objects::Object;

/// PDF dictionary that keeps keys in insertion order.
///
/// Serialization order follows insertion order, so two documents built the
/// same way produce the same bytes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    entries: Vec<(String, Object)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or replaces `key`. A replaced key keeps its original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Object>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Object)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dictionary() {
        let dict = Dictionary::new();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Page"));
        dict.set("Count", 1);
        dict.set("Title", "Kontoauszug");

        assert_eq!(dict.get("Type"), Some(&Object::Name("Page".to_string())));
        assert_eq!(dict.get("Count"), Some(&Object::Integer(1)));
        assert_eq!(
            dict.get("Title"),
            Some(&Object::String("Kontoauszug".to_string()))
        );
        assert_eq!(dict.get("Missing"), None);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Pages"));
        dict.set("Kids", Object::Array(vec![]));
        dict.set("Count", 0);
        dict.set("Type", Object::name("Pages"));

        let keys: Vec<_> = dict.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["Type", "Kids", "Count"]);
    }

    #[test]
    fn test_replace_value() {
        let mut dict = Dictionary::new();
        dict.set("Length", 10);
        dict.set("Length", 42);

        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("Length"), Some(&Object::Integer(42)));
    }
}
