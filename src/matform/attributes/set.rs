use super::value::AttrValue;
use serde::Serialize;

/// A single `(name, value)` markup attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    #[serde(skip_serializing_if = "AttrValue::is_flag")]
    pub value: AttrValue,
}

/// Ordered, append-only attribute collection produced by a render pass.
///
/// Attributes keep the order in which rules appended them. There is no removal and no
/// in-place update: a rule either appends or stays silent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeSet {
    attrs: Vec<Attribute>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name` when `value` is present. `None` and empty text are skipped.
    pub fn add<V: Into<AttrValue>>(&mut self, name: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            let value = value.into();
            if !value.is_empty_text() {
                self.attrs.push(Attribute {
                    name: name.to_string(),
                    value,
                });
            }
        }
        self
    }

    /// Appends a valueless attribute when `present` is true.
    pub fn add_flag(&mut self, name: &str, present: bool) -> &mut Self {
        if present && !name.is_empty() {
            self.attrs.push(Attribute {
                name: name.to_string(),
                value: AttrValue::Flag,
            });
        }
        self
    }

    /// Value of the first attribute called `name`.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| &attr.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attrs.iter().map(|attr| attr.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.iter()
    }
}
