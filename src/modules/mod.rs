//! Command-line module references
//!
//! A [`ModuleReference`] describes a registered command-line module: where it
//! lives and the XML description it reported. Parsing that XML into a full
//! module description is left to the caller. Clones share the same data.

use std::fmt;
use std::sync::Arc;

#[derive(Debug, Default, PartialEq, Eq)]
struct ModuleReferenceData {
    location: String,
    raw_xml_description: Vec<u8>,
    xml_validation_error: String,
}

/// Shared, immutable handle to a command-line module's registration data
///
/// A reference is valid when it carries a non-empty XML description, i.e.
/// the module reported one successfully.
#[derive(Clone, Default)]
pub struct ModuleReference {
    data: Arc<ModuleReferenceData>,
}

impl ModuleReference {
    pub fn new(
        location: impl Into<String>,
        raw_xml_description: impl Into<Vec<u8>>,
        xml_validation_error: impl Into<String>,
    ) -> Self {
        ModuleReference {
            data: Arc::new(ModuleReferenceData {
                location: location.into(),
                raw_xml_description: raw_xml_description.into(),
                xml_validation_error: xml_validation_error.into(),
            }),
        }
    }

    /// Location of the module, e.g. an executable path
    pub fn location(&self) -> &str {
        &self.data.location
    }

    pub fn raw_xml_description(&self) -> &[u8] {
        &self.data.raw_xml_description
    }

    /// Validation message produced while checking the XML description; empty if none
    pub fn xml_validation_error(&self) -> &str {
        &self.data.xml_validation_error
    }

    pub fn is_valid(&self) -> bool {
        !self.data.raw_xml_description.is_empty()
    }

    /// Whether both handles share the same underlying data
    pub fn ptr_eq(&self, other: &ModuleReference) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl PartialEq for ModuleReference {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.data == other.data
    }
}

impl Eq for ModuleReference {}

impl fmt::Debug for ModuleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleReference")
            .field("location", &self.data.location)
            .field("xml_bytes", &self.data.raw_xml_description.len())
            .field("xml_validation_error", &self.data.xml_validation_error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = "<executable><title>Blur</title></executable>";

    #[test]
    fn test_default_is_invalid() {
        let reference = ModuleReference::default();
        assert!(!reference.is_valid());
        assert_eq!(reference.location(), "");
        assert!(reference.raw_xml_description().is_empty());
    }

    #[test]
    fn test_accessors() {
        let reference = ModuleReference::new("/opt/modules/blur", XML, "");
        assert!(reference.is_valid());
        assert_eq!(reference.location(), "/opt/modules/blur");
        assert_eq!(reference.raw_xml_description(), XML.as_bytes());
        assert_eq!(reference.xml_validation_error(), "");
    }

    #[test]
    fn test_validation_error_without_xml_is_invalid() {
        let reference = ModuleReference::new("/opt/modules/broken", "", "missing <executable>");
        assert!(!reference.is_valid());
        assert_eq!(reference.xml_validation_error(), "missing <executable>");
    }

    #[test]
    fn test_clones_share_data() {
        let reference = ModuleReference::new("/opt/modules/blur", XML, "");
        let copy = reference.clone();
        assert!(copy.ptr_eq(&reference));
        assert_eq!(copy, reference);

        let twin = ModuleReference::new("/opt/modules/blur", XML, "");
        assert!(!twin.ptr_eq(&reference));
        assert_eq!(twin, reference);
    }

    #[test]
    fn test_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ModuleReference>();
    }
}
