//! Tests for macros features

mod fields_macro_tests {
    use sugars_builder_factory::{fields, Fields};

    #[test]
    fn test_fields_literal() {
        let map = fields! {
            "key1" => "value1",
            "key2" => "value2",
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("key1"), Some(&"value1"));

        let empty: Fields<i32> = fields! {};
        assert!(empty.is_empty());
    }

    #[test]
    fn test_fields_literal_accepts_owned_keys() {
        let key = String::from("owned");
        let map = fields! { key => 1, "borrowed" => 2 };
        assert_eq!(map["owned"], 1);
        assert_eq!(map["borrowed"], 2);
    }
}

#[cfg(feature = "macros")]
mod accessor_macro_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use sugars_builder_factory::{field_accessors, fields, BuilderConfig, BuilderFactory, Fields};

    field_accessors! {
        /// Accessors for URL builders.
        pub trait UrlAccessors {
            "host", "port", "queryString", "protocol", "path",
        }
    }

    field_accessors! {
        trait ExampleAccessors {
            "example"
        }
    }

    fn url_factory() -> BuilderFactory<&'static str> {
        BuilderFactory::new(
            BuilderConfig::new()
                .required("host")
                .optional(["port", "queryString"])
                .with_default("protocol", "http")
                .with_default("path", "/"),
        )
        .expect("valid config")
    }

    #[test]
    fn test_generated_setters_chain() {
        let built = url_factory()
            .builder()
            .with_host("example.com")
            .with_port("8080")
            .build()
            .expect("valid");

        assert_eq!(
            built,
            fields! {
                "protocol" => "http",
                "host" => "example.com",
                "path" => "/",
                "port" => "8080",
            }
        );
    }

    #[test]
    fn test_generated_unsetters_revert_to_defaults() {
        let builder = url_factory()
            .builder()
            .with_host("example.com")
            .with_query_string("a=b")
            .with_path("/abc")
            .without_path()
            .without_query_string()
            .without_query_string();

        assert_eq!(builder.value("path"), Some(&"/"));
        assert_eq!(builder.value("queryString"), None);
    }

    #[test]
    fn test_generated_accessors_match_runtime_table() {
        let factory = url_factory();
        let mut dynamic = factory.builder();
        dynamic
            .invoke("withHost", Some("example.com"))
            .and_then(|b| b.invoke("withQueryString", Some("q=1")))
            .expect("generated accessors");

        let generated = factory.builder().with_host("example.com").with_query_string("q=1");

        assert_eq!(
            dynamic.build().expect("valid"),
            generated.build().expect("valid")
        );
    }

    #[test]
    fn test_generated_setter_keeps_reference() {
        let factory = BuilderFactory::<Rc<RefCell<String>>>::new(BuilderConfig::new().required("example"))
            .expect("valid config");
        let input = Rc::new(RefCell::new(String::from("abc")));

        let built: Fields<Rc<RefCell<String>>> = factory
            .builder()
            .with_example(Rc::clone(&input))
            .build()
            .expect("valid");

        assert!(Rc::ptr_eq(&built["example"], &input));
        built["example"].borrow_mut().push_str("def");
        assert_eq!(*input.borrow(), "abcdef");
    }
}
