use crate::types::{Descriptor, SchemaError};
use std::sync::Arc;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Field {
    pub name: Arc<str>,
    pub desc: Descriptor,
}

/// An ordered sequence of uniquely named [`Field`]s.
///
/// The field order is the decode order, and therefore the byte order within a buffer.
///
/// Every [`Field`] admitted into a [`Schema`] has been validated,
/// so that an invalid descriptor is rejected before any buffer is decoded.
///
/// Field names consist of ASCII alphanumerics and `_`,
/// so that every schema can be written out in the textual notation and read back.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        name: impl Into<Arc<str>>,
        desc: Descriptor,
    ) -> Result<(), SchemaError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SchemaError::EmptyFieldName);
        }
        if !name.bytes().all(is_name_byte) {
            return Err(SchemaError::InvalidFieldName { field: name });
        }
        if self.get(&name).is_some() {
            return Err(SchemaError::DuplicateField { field: name });
        }
        Self::validate(&name, &desc)?;
        self.fields.push(Field { name, desc });
        Ok(())
    }

    /// Chaining form of [`Schema::push()`].
    pub fn with(
        mut self,
        name: impl Into<Arc<str>>,
        desc: Descriptor,
    ) -> Result<Self, SchemaError> {
        self.push(name, desc)?;
        Ok(self)
    }

    fn validate(name: &Arc<str>, desc: &Descriptor) -> Result<(), SchemaError> {
        if let Descriptor::FixedArray(elem, _) = desc {
            if elem.contains_cstring() {
                return Err(SchemaError::CStringInArray {
                    field: Arc::clone(name),
                });
            }
        }
        Ok(())
    }
}

pub(crate) fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl Schema {
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.fields
            .iter()
            .find(|field| &*field.name == name)
            .map(|field| &field.desc)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains_cstring(&self) -> bool {
        self.fields
            .iter()
            .any(|field| field.desc.contains_cstring())
    }
}

impl<S> TryFrom<Vec<(S, Descriptor)>> for Schema
where
    S: Into<Arc<str>>,
{
    type Error = SchemaError;
    fn try_from(pairs: Vec<(S, Descriptor)>) -> Result<Self, SchemaError> {
        let mut schema = Self::new();
        for (name, desc) in pairs {
            schema.push(name, desc)?;
        }
        Ok(schema)
    }
}
