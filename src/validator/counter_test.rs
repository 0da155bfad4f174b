#[cfg(test)]
mod tests {
    use crate::validator::count_endpoints;
    use serde_yaml::{Mapping, Value};

    fn paths_of(content: &str) -> Mapping {
        let doc: Mapping = serde_yaml::from_str(content).unwrap();
        doc.get("paths")
            .and_then(Value::as_mapping)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_counts_only_known_methods() {
        let paths = paths_of(
            r#"
paths:
  /a:
    get: {}
    post: {}
    foo: {}
  /b:
    delete: {}
"#,
        );

        assert_eq!(count_endpoints(&paths), 3);
    }

    #[test]
    fn test_method_names_are_case_insensitive() {
        let paths = paths_of(
            r#"
paths:
  /a:
    GET: {}
    Post: {}
    PaTcH: {}
"#,
        );

        assert_eq!(count_endpoints(&paths), 3);
    }

    #[test]
    fn test_head_and_options_are_not_counted() {
        let paths = paths_of(
            r#"
paths:
  /a:
    head: {}
    options: {}
    trace: {}
    put: {}
"#,
        );

        assert_eq!(count_endpoints(&paths), 1);
    }

    #[test]
    fn test_empty_paths_counts_zero() {
        assert_eq!(count_endpoints(&Mapping::new()), 0);
    }

    #[test]
    fn test_non_mapping_path_items_are_skipped() {
        let paths = paths_of(
            r#"
paths:
  /a: not-an-operation-map
  /b:
    get: {}
"#,
        );

        assert_eq!(count_endpoints(&paths), 1);
    }
}
