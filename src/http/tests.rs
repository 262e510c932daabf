#[cfg(test)]
mod http_tests {
    use std::path::Path;
    use crate::http::http::{https_redirect_location, resolve_static_path};

    #[test]
    fn test_redirect_location_default_port() {
        assert_eq!(
            https_redirect_location("example.com", "/a/b?c=d", 443).as_deref(),
            Some("https://example.com/a/b?c=d")
        );
        assert_eq!(
            https_redirect_location("example.com:80", "/", 443).as_deref(),
            Some("https://example.com/")
        );
    }

    #[test]
    fn test_redirect_location_custom_port() {
        assert_eq!(
            https_redirect_location("example.com:8080", "/index.html", 8443).as_deref(),
            Some("https://example.com:8443/index.html")
        );
        assert_eq!(
            https_redirect_location("[::1]:8080", "/", 8443).as_deref(),
            Some("https://[::1]:8443/")
        );
    }

    #[test]
    fn test_redirect_location_invalid_host() {
        assert_eq!(https_redirect_location("", "/", 443), None);
        assert_eq!(https_redirect_location(":80", "/", 443), None);
        assert_eq!(https_redirect_location("::1", "/", 443), None);
        assert_eq!(https_redirect_location("[::1", "/", 443), None);
    }

    #[test]
    fn test_resolve_static_path() {
        let root = Path::new("/srv/www");
        assert_eq!(resolve_static_path(root, "/"), Some(root.to_path_buf()));
        assert_eq!(resolve_static_path(root, "/docs/"), Some(root.join("docs")));
        assert_eq!(resolve_static_path(root, "/docs/a%20b.txt"), Some(root.join("docs").join("a b.txt")));
        assert_eq!(resolve_static_path(root, "/./style.css"), Some(root.join("style.css")));
    }

    #[test]
    fn test_resolve_static_path_traversal() {
        let root = Path::new("/srv/www");
        assert_eq!(resolve_static_path(root, "/../etc/passwd"), None);
        assert_eq!(resolve_static_path(root, "/docs/%2e%2e/%2e%2e/etc/passwd"), None);
        assert_eq!(resolve_static_path(root, "/..%2fsecret"), None);
        assert_eq!(resolve_static_path(root, "/c:%5cwindows"), None);
        assert_eq!(resolve_static_path(root, "/%ff"), None);
    }
}
