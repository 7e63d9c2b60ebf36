/// `DocumentMarker` marks a type as a registrable document and should be derived for each document type.
/// `_class_name` is the dotted inheritance chain ending with the type name, eg. `Animal.Mammal.Dog`
pub trait DocumentMarker {
    fn _class_name() -> &'static str;

    /// The final segment of `_class_name`
    fn _simple_name() -> &'static str {
        crate::name::simple_name(Self::_class_name())
    }
}

/// Traits every document type needs before it can be stored in a `DocumentEntry`
pub trait DocumentRequirements:
    'static + Send + Sync + Clone + std::fmt::Debug + std::any::Any + SerdeFeature
{
}
impl<T: 'static + Send + Sync + Clone + std::fmt::Debug + std::any::Any + SerdeFeature>
    DocumentRequirements for T
{
}

/// With `serde` enabled documents must be deserializable so entries can build them
#[cfg(feature = "serde")]
pub trait SerdeFeature: serde::de::DeserializeOwned {}
#[cfg(feature = "serde")]
impl<T: serde::de::DeserializeOwned> SerdeFeature for T {}

#[cfg(not(feature = "serde"))]
pub trait SerdeFeature {}
#[cfg(not(feature = "serde"))]
impl<T> SerdeFeature for T {}
