use crate::markers::{DocumentMarker, DocumentRequirements};
#[cfg(feature = "serde")]
use crate::{document::Document, error::RegistryError};
use std::{any::TypeId, fmt, sync::Arc};

/// Type alias for the document deserializer function.
#[cfg(feature = "serde")]
type DocumentDeserializer = Arc<
    dyn for<'de> Fn(
            &mut dyn erased_serde::Deserializer<'de>,
        ) -> Result<Box<dyn Document>, erased_serde::Error>
        + Send
        + Sync,
>;

/// Type alias for the bitcode decoder function.
#[cfg(feature = "binary")]
type DocumentDecoder = Arc<dyn Fn(&[u8]) -> Result<Box<dyn Document>, bitcode::Error> + Send + Sync>;

/// Descriptor of a registered document type.
/// Cloning is cheap, the factories are shared.
#[derive(Clone)]
pub struct DocumentEntry {
    class_name: &'static str,
    type_id: TypeId,
    type_name: Arc<str>,
    #[cfg(feature = "serde")]
    deserializer: DocumentDeserializer,
    #[cfg(feature = "binary")]
    decoder: DocumentDecoder,
}

impl DocumentEntry {
    /// Build the entry for document type `D`
    pub fn of<D: DocumentMarker + DocumentRequirements>() -> Self {
        Self {
            class_name: D::_class_name(),
            type_id: TypeId::of::<D>(),
            type_name: tynm::type_name::<D>().into(),
            #[cfg(feature = "serde")]
            deserializer: Arc::new(
                |de: &mut dyn erased_serde::Deserializer<'_>| -> Result<Box<dyn Document>, erased_serde::Error> {
                    let document: D = erased_serde::deserialize(de)?;
                    Ok(Box::new(document))
                },
            ),
            #[cfg(feature = "binary")]
            decoder: Arc::new(|bytes: &[u8]| -> Result<Box<dyn Document>, bitcode::Error> {
                let document: D = bitcode::deserialize(bytes)?;
                Ok(Box::new(document))
            }),
        }
    }

    /// Dotted class name the type registers under
    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    pub fn simple_name(&self) -> &'static str {
        crate::name::simple_name(self.class_name)
    }

    /// Short Rust type name of the document, without module path
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns true if this entry describes `D`
    pub fn is<D: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<D>()
    }

    /// Build a document from any erased serde deserializer.
    #[cfg(feature = "serde")]
    pub fn deserialize(
        &self,
        de: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Result<Box<dyn Document>, RegistryError> {
        (self.deserializer)(de).map_err(|e| self.construct_error(e))
    }

    /// Build a document from JSON bytes.
    #[cfg(feature = "json")]
    pub fn from_json(&self, data: &[u8]) -> Result<Box<dyn Document>, RegistryError> {
        let mut json = serde_json::Deserializer::from_slice(data);
        let document = self.deserialize(&mut <dyn erased_serde::Deserializer>::erase(&mut json))?;
        json.end().map_err(|e| self.construct_error(e))?;
        Ok(document)
    }

    /// Build a document from bitcode bytes.
    #[cfg(feature = "binary")]
    pub fn from_binary(&self, data: &[u8]) -> Result<Box<dyn Document>, RegistryError> {
        (self.decoder)(data).map_err(|e| self.construct_error(e))
    }

    #[cfg(feature = "serde")]
    fn construct_error(&self, reason: impl fmt::Display) -> RegistryError {
        RegistryError::Deserialize {
            class_name: self.class_name.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl PartialEq for DocumentEntry {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.class_name == other.class_name
    }
}

impl fmt::Debug for DocumentEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentEntry")
            .field("class_name", &self.class_name)
            .field("type_name", &self.type_name)
            .finish()
    }
}
