#[cfg(test)]
mod tests {
    use crate::security::PathResolver;
    use std::path::Path;

    #[test]
    fn test_resolve_absolute_path() {
        let result = PathResolver::resolve("/css/site.css");
        assert_eq!(result.unwrap(), "/css/site.css");
    }

    #[test]
    fn test_resolve_adds_leading_slash() {
        let result = PathResolver::resolve("css/site.css");
        assert_eq!(result.unwrap(), "/css/site.css");
    }

    #[test]
    fn test_resolve_empty_is_root() {
        assert_eq!(PathResolver::resolve("").unwrap(), "/");
    }

    #[test]
    fn test_resolve_rejects_nul() {
        let result = PathResolver::resolve("/index.html\0.png");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("NUL byte"));
    }

    #[test]
    fn test_resolve_keeps_dot_segments() {
        // No traversal collapsing, the key simply never matches
        assert_eq!(PathResolver::resolve("/a/../b").unwrap(), "/a/../b");
        assert_eq!(PathResolver::resolve("/./a").unwrap(), "/./a");
    }

    #[cfg(windows)]
    #[test]
    fn test_resolve_rejects_native_separator() {
        let result = PathResolver::resolve("/a\\..\\..\\secret");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Reserved separator"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_backslash_is_ordinary_on_unix() {
        assert_eq!(PathResolver::resolve("/a\\b").unwrap(), "/a\\b");
    }

    #[test]
    fn test_sanitize_simple_path() {
        let result = PathResolver::sanitize(Path::new("img/logo.png"));
        assert_eq!(result.unwrap(), "/img/logo.png");
    }

    #[test]
    fn test_sanitize_drops_current_dir_markers() {
        let result = PathResolver::sanitize(Path::new("./img/./logo.png"));
        assert_eq!(result.unwrap(), "/img/logo.png");
    }

    #[test]
    fn test_sanitize_allows_hidden_files() {
        let result = PathResolver::sanitize(Path::new(".well-known/security.txt"));
        assert_eq!(result.unwrap(), "/.well-known/security.txt");
    }

    #[test]
    fn test_sanitize_rejects_parent_traversal() {
        let result = PathResolver::sanitize(Path::new("img/../../etc/passwd"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Parent directory traversal")
        );
    }

    #[test]
    fn test_sanitize_rejects_absolute() {
        let result = PathResolver::sanitize(Path::new("/etc/passwd"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Absolute path"));
    }

    #[test]
    fn test_sanitize_rejects_empty() {
        let result = PathResolver::sanitize(Path::new("./."));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("No valid components")
        );
    }

    #[test]
    fn test_sanitize_unicode() {
        let result = PathResolver::sanitize(Path::new("docs/文档/readme.md"));
        assert_eq!(result.unwrap(), "/docs/文档/readme.md");
    }
}
