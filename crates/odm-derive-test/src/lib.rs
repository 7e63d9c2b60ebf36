#[cfg(test)]
mod tests {
    use odm_core::{Document, DocumentMarker, DocumentRegistry, DocumentRequirements};
    use odm_derive::document;

    /// Helper function to ensure a type implements DocumentMarker
    fn has_impl_marker<T: DocumentMarker + DocumentRequirements>() {}

    /// Test `document` attribute and `DocumentMarker` derive macros for simple structs
    #[test]
    fn document_marker_derive() {
        // Using `document` attribute macro
        #[document]
        struct Account;

        // Using `document` attribute macro with existing derive
        // The `#[document]` macro will duplicate derives if after any `#derive(...)]`
        #[document]
        #[derive(Clone)]
        struct Ledger(String, Vec<u64>);

        // Using `DocumentMarker` derive macro
        #[derive(Clone, Debug, serde::Deserialize, odm_derive::DocumentMarker)]
        #[odm(parent = "Person")]
        struct Employee {
            id: u32,
        }

        has_impl_marker::<Account>();
        has_impl_marker::<Ledger>();
        has_impl_marker::<Employee>();

        assert_eq!(Account::_class_name(), "Account");
        assert_eq!(Ledger::_class_name(), "Ledger");
        assert_eq!(Employee::_class_name(), "Person.Employee");
        assert_eq!(Employee::_simple_name(), "Employee");
    }

    /// Test `document` does not add derives already listed under a shorter path
    #[test]
    fn existing_marker_derive_not_duplicated() {
        use odm_derive::DocumentMarker;
        use serde::Deserialize;

        #[document(parent = "Ledger")]
        #[derive(Clone, DocumentMarker, Deserialize)]
        struct Entry {
            amount: i64,
        }

        has_impl_marker::<Entry>();
        assert_eq!(Entry::_class_name(), "Ledger.Entry");
    }

    /// Test the class names produced by `parent` and `name` arguments
    #[test]
    fn inheritance_chain_names() {
        #[document(parent = "Animal.Mammal")]
        struct Dog {
            name: String,
        }

        #[document(name = "zoo.Keeper")]
        struct ZooKeeper;

        assert_eq!(Dog::_class_name(), "Animal.Mammal.Dog");
        assert_eq!(ZooKeeper::_class_name(), "zoo.Keeper");
        assert_eq!(ZooKeeper::_simple_name(), "Keeper");
    }

    /// Test `document` attribute and `DocumentMarker` derive macros with generics
    #[test]
    fn generic_marker_derive() {
        #[document]
        struct Page<T>(Vec<T>);
        has_impl_marker::<Page<u64>>();
        has_impl_marker::<Page<String>>();
        assert_eq!(Page::<u64>::_class_name(), "Page");
    }

    /// Test derived documents resolved through a registry by partial and snake_case names
    #[test]
    fn derived_documents_resolve() {
        #[document(parent = "Animal")]
        struct Mammal;

        #[document(parent = "Animal.Mammal")]
        struct Dog;

        #[document(parent = "Animal.Mammal.Dog")]
        struct GuideDog;

        let registry = DocumentRegistry::new();
        odm_core::register_document!(registry, Mammal, Dog, GuideDog);

        assert!(registry.resolve("Animal.Mammal.Dog").unwrap().is::<Dog>());
        assert!(registry.resolve("Dog").unwrap().is::<Dog>());
        assert!(registry.resolve("Animal.Dog").unwrap().is::<Dog>());
        assert!(registry.resolve("guide_dog").unwrap().is::<GuideDog>());
        assert!(registry.resolve("Cat").is_err());
        assert_eq!(registry.len(), Ok(3));
    }

    /// Test re-registering a document replaces the previous entry
    #[test]
    fn reregistration_replaces_entry() {
        #[document(name = "Shared.Name")]
        struct First;

        #[document(name = "Shared.Name")]
        struct Second;

        let registry = DocumentRegistry::new();
        assert_eq!(registry.register_document::<First>(), Ok(None));
        let replaced = registry.register_document::<Second>().unwrap();
        assert!(replaced.is_some_and(|entry| entry.is::<First>()));
        assert!(registry.resolve("Name").unwrap().is::<Second>());
    }

    /// Test building a derived document from JSON after resolving its name
    #[test]
    fn construct_from_resolved_entry() {
        #[document(parent = "Organisation")]
        struct BilledOrganisation {
            name: String,
            account: u64,
        }

        let registry = DocumentRegistry::new();
        odm_core::register_document!(registry, BilledOrganisation);

        let entry = registry.resolve("billed_organisation").unwrap();
        let mut json = serde_json::Deserializer::from_str(r#"{"name": "Acme", "account": 3}"#);
        let doc = entry
            .deserialize(&mut <dyn erased_serde::Deserializer>::erase(&mut json))
            .unwrap();
        assert_eq!(doc.class_name(), "Organisation.BilledOrganisation");
        assert_eq!(
            doc.downcast_ref::<BilledOrganisation>(),
            Some(&BilledOrganisation {
                name: "Acme".to_string(),
                account: 3,
            })
        );
    }
}
