//! Checker-plugin parameter registration.
//!
//! Checkers declare the inputs they consume (logical line, tokens, file
//! contents, ...) as data, and the runner uses the declared names to
//! assemble arguments. Declaring the names explicitly keeps dispatch
//! free of runtime reflection.

/// A registered checker.
///
/// `parameters` lists the positional inputs the checker consumes, in
/// order, with no implicit receiver.
pub trait CheckerPlugin {
    fn name(&self) -> &str;
    fn parameters(&self) -> &[&str];
}

/// The declared parameter names for a plugin, as owned strings.
pub fn parameters_for(plugin: &dyn CheckerPlugin) -> Vec<String> {
    plugin
        .parameters()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LineLength;

    impl CheckerPlugin for LineLength {
        fn name(&self) -> &str {
            "line-length"
        }

        fn parameters(&self) -> &[&str] {
            &["physical_line", "max_line_length"]
        }
    }

    #[test]
    fn test_parameters_for_reports_declared_names() {
        let plugin = LineLength;

        assert_eq!(plugin.name(), "line-length");
        assert_eq!(
            parameters_for(&plugin),
            vec!["physical_line".to_string(), "max_line_length".to_string()]
        );
    }
}
