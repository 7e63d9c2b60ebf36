use crate::markers::{DocumentMarker, DocumentRequirements};
use std::{any::Any, fmt::Debug};

/// Object safe view of a document value built from a registry entry
pub trait Document: Send + Sync + Debug + Any + 'static {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn class_name(&self) -> &'static str;
    fn _clone_document(&self) -> Box<dyn Document>;
}

// Blanket implementation for all marked types
impl<T: DocumentMarker + DocumentRequirements> Document for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn class_name(&self) -> &'static str {
        T::_class_name()
    }

    fn _clone_document(&self) -> Box<dyn Document> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Document> {
    fn clone(&self) -> Self {
        self._clone_document()
    }
}

impl dyn Document {
    /// Returns true if the boxed document is a `T`
    pub fn is<T: Document>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Document>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Document>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}
