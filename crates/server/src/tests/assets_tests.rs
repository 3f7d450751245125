use super::*;

#[test]
fn root_path_maps_to_the_entry_document() {
    assert_eq!(sanitize_request_path("/"), Some(PathBuf::from(INDEX_FILE)));
    assert_eq!(sanitize_request_path(""), Some(PathBuf::from(INDEX_FILE)));
}

#[test]
fn nested_asset_paths_pass_through() {
    assert_eq!(
        sanitize_request_path("/assets/site.css"),
        Some(PathBuf::from("assets/site.css"))
    );
    assert_eq!(
        sanitize_request_path("resume.pdf"),
        Some(PathBuf::from("resume.pdf"))
    );
}

#[test]
fn traversal_and_relative_components_are_refused() {
    assert_eq!(sanitize_request_path("/../secret"), None);
    assert_eq!(sanitize_request_path("/assets/../../etc/passwd"), None);
    assert_eq!(sanitize_request_path("/./index.html"), None);
}

#[test]
fn dot_prefixed_segments_are_refused() {
    assert_eq!(sanitize_request_path("/.env"), None);
    assert_eq!(sanitize_request_path("/assets/.hidden/logo.png"), None);
}

#[test]
fn percent_encoded_paths_are_refused() {
    assert_eq!(sanitize_request_path("/%2e%2e/secret"), None);
    assert_eq!(sanitize_request_path("/assets%2fsite.css"), None);
}

#[test]
fn content_types_map_by_extension_with_a_binary_fallback() {
    assert_eq!(
        content_type_for(Path::new("index.html")),
        "text/html; charset=utf-8"
    );
    assert_eq!(
        content_type_for(Path::new("assets/site.css")),
        "text/css; charset=utf-8"
    );
    assert_eq!(
        content_type_for(Path::new("assets/page.js")),
        "text/javascript; charset=utf-8"
    );
    assert_eq!(content_type_for(Path::new("resume.pdf")), "application/pdf");
    assert_eq!(content_type_for(Path::new("logo.svg")), "image/svg+xml");
    assert_eq!(
        content_type_for(Path::new("mystery.bin")),
        "application/octet-stream"
    );
    assert_eq!(
        content_type_for(Path::new("no-extension")),
        "application/octet-stream"
    );
}
