/// Relates the file name of a test source to the name of its test executable.
///
/// With the default convention, a source `widget_test.c` belongs to the executable
/// `widget_unit_test`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    test_marker: String,
    source_extension: String,
    executable_marker: String,
}

/// The names derived from a single test source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// The source file name without its extension.
    pub name: String,
    /// The name of the test executable.
    pub test_name: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        NamingConvention::new("_test".into(), "c".into(), "_unit_test".into())
    }
}

impl NamingConvention {
    /// Creates a convention; `source_extension` is given without the leading dot.
    pub fn new(test_marker: String, source_extension: String, executable_marker: String) -> Self {
        NamingConvention {
            test_marker,
            source_extension,
            executable_marker,
        }
    }

    /// The marker that precedes the extension of a test source, `_test` by default.
    pub fn test_marker(&self) -> &str {
        &self.test_marker
    }

    /// The extension of test sources, `c` by default.
    pub fn source_extension(&self) -> &str {
        &self.source_extension
    }

    /// The marker that ends the name of a test executable, `_unit_test` by default.
    pub fn executable_marker(&self) -> &str {
        &self.executable_marker
    }

    /// The complete suffix a file name must end with, e.g. `_test.c`.
    pub fn source_suffix(&self) -> String {
        format!("{}.{}", self.test_marker, self.source_extension)
    }

    /// Derives the manifest names for the given file name.
    ///
    /// Returns `None` for file names that do not end with the source suffix. The part in
    /// front of the suffix may be empty: `_test.c` belongs to `_unit_test`.
    pub fn derive(&self, file_name: &str) -> Option<DerivedNames> {
        let extension = format!(".{}", self.source_extension);
        let name = file_name.strip_suffix(extension.as_str())?;
        let stem = name.strip_suffix(self.test_marker.as_str())?;

        Some(DerivedNames {
            name: name.to_owned(),
            test_name: format!("{}{}", stem, self.executable_marker),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(file_name: &str) -> Option<DerivedNames> {
        NamingConvention::default().derive(file_name)
    }

    #[test]
    fn unit_test_convention() {
        let names = derive("widget_test.c").unwrap();
        assert_eq!(names.name, "widget_test");
        assert_eq!(names.test_name, "widget_unit_test");
    }

    #[test]
    fn non_matching_names() {
        assert_eq!(derive("widget.c"), None);
        assert_eq!(derive("widget_test.h"), None);
        assert_eq!(derive("widget_test.cpp"), None);
        assert_eq!(derive("widget_test.c.orig"), None);
        assert_eq!(derive("widget_testc"), None);
        assert_eq!(derive("c_other.c"), None);
    }

    #[test]
    fn only_the_suffix_is_rewritten() {
        let names = derive("a.cache_test.c").unwrap();
        assert_eq!(names.name, "a.cache_test");
        assert_eq!(names.test_name, "a.cache_unit_test");

        let names = derive("my_test_helpers_test.c").unwrap();
        assert_eq!(names.name, "my_test_helpers_test");
        assert_eq!(names.test_name, "my_test_helpers_unit_test");
    }

    #[test]
    fn bare_suffix() {
        let names = derive("_test.c").unwrap();
        assert_eq!(names.name, "_test");
        assert_eq!(names.test_name, "_unit_test");
    }

    #[test]
    fn custom_convention() {
        let convention = NamingConvention::new("_spec".into(), "cpp".into(), "_runner".into());
        assert_eq!(convention.source_suffix(), "_spec.cpp");
        assert_eq!(convention.derive("queue_test.c"), None);
        let names = convention.derive("queue_spec.cpp").unwrap();
        assert_eq!(names.name, "queue_spec");
        assert_eq!(names.test_name, "queue_runner");
    }
}
