use indexmap::IndexMap;

/// Named values a template can refer to with `[Name]` tokens.
///
/// A `None` value means the field exists but is unset; using it in a
/// template is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: IndexMap<String, Option<String>>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_optional(name, Some(value.into()))
    }

    pub fn with_optional(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Look up a field: `None` if there is no such field, `Some(None)` if it
    /// exists without a value.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.fields.get(name).map(|value| value.as_deref())
    }

    /// Add every field of `other`, replacing fields with the same name.
    pub fn merge(mut self, other: FieldMap) -> Self {
        self.fields.extend(other.fields);
        self
    }
}

/// Types that expose named fields for template substitution.
pub trait NamedFields {
    fn named_fields(&self) -> FieldMap;
}

impl NamedFields for FieldMap {
    fn named_fields(&self) -> FieldMap {
        self.clone()
    }
}

impl<T: NamedFields + ?Sized> NamedFields for &T {
    fn named_fields(&self) -> FieldMap {
        (**self).named_fields()
    }
}
