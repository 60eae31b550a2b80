//! Maven descriptor (pom.xml) handling.
//!
//! The descriptor tree is namespaced XML; elements are addressed the way the
//! build tool itself addresses them, through the root element's own default
//! namespace. Qualified names use the `{namespace}localname` form.

use crate::error::{ReleaseError, Result};
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;

/// File name of a project descriptor, at the tree root and in each module.
pub const POM: &str = "pom.xml";

/// Read a descriptor file into memory.
pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        ReleaseError::pom(format!(
            "the '{}' file should be accessible: {}",
            path.display(),
            e
        ))
    })
}

/// Parse descriptor text, naming `source` in the diagnostic on failure.
pub fn parse<'input>(text: &'input str, source: &str) -> Result<Document<'input>> {
    Document::parse(text)
        .map_err(|e| ReleaseError::pom(format!("the '{}' descriptor cannot be parsed: {}", source, e)))
}

/// The `{namespace}localname` qualified form of an element's tag.
pub fn qualified_name(node: Node) -> String {
    match node.tag_name().namespace() {
        Some(ns) => format!("{{{}}}{}", ns, node.tag_name().name()),
        None => node.tag_name().name().to_string(),
    }
}

/// Extract the namespace part of a `{namespace}localname` qualified tag.
///
/// # Returns
/// * `Ok(namespace)` - the text between the braces
/// * `Err` - if the tag does not begin with `{` or contains no `}`
pub fn extract_default_namespace(tag: &str) -> Result<String> {
    if !tag.starts_with('{') {
        return Err(ReleaseError::pom(format!(
            "invalid tag missing namespace (open); {}",
            tag
        )));
    }

    match tag.find('}') {
        Some(close) => Ok(tag[1..close].to_string()),
        None => Err(ReleaseError::pom(format!(
            "invalid tag missing namespace (close); {}",
            tag
        ))),
    }
}

fn find_child<'a, 'input>(
    parent: Node<'a, 'input>,
    namespace: &str,
    local_name: &str,
) -> Option<Node<'a, 'input>> {
    parent.children().find(|c| {
        c.is_element()
            && c.tag_name().name() == local_name
            && c.tag_name().namespace() == Some(namespace)
    })
}

/// Locate a direct child of the document root named `{ns}local_name`, where
/// `ns` is the root's own namespace.
///
/// # Returns
/// * `Ok(node)` - the matching element
/// * `Err` - if the root is not namespaced or no such child exists
pub fn find_top_level_element<'a, 'input>(
    doc: &'a Document<'input>,
    local_name: &str,
) -> Result<Node<'a, 'input>> {
    let root = doc.root_element();
    let namespace = extract_default_namespace(&qualified_name(root))?;

    find_child(root, &namespace, local_name)
        .ok_or_else(|| ReleaseError::pom(format!("unable to find the {} element", local_name)))
}

fn element_text(node: Node, local_name: &str) -> Result<String> {
    node.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ReleaseError::pom(format!("the {} element has no text", local_name)))
}

/// Text of the top-level `artifactId` element.
pub fn extract_artifact_id(doc: &Document) -> Result<String> {
    element_text(find_top_level_element(doc, "artifactId")?, "artifactId")
}

/// Text of the top-level `version` element.
pub fn extract_version(doc: &Document) -> Result<String> {
    element_text(find_top_level_element(doc, "version")?, "version")
}

/// Discover module names by scanning the file system rather than reading the
/// top-level descriptor's module list: build profiles may exclude modules
/// (for example an RPM module on a non-linux host), so directory presence is
/// the source of truth.
///
/// Returns immediate subdirectories of `dir` that are not hidden and contain
/// a `pom.xml`. The result is sorted by name; callers must not attach
/// meaning to the order.
pub fn scan_modules(dir: &Path) -> Result<Vec<String>> {
    let mut modules = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };
        if name.starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_dir() && path.join(POM).is_file() {
            modules.push(name);
        }
    }

    modules.sort();
    Ok(modules)
}

/// Check that a module's declared parent version equals `expected_version`.
///
/// Parses `<module_name>/pom.xml` under `dir`, locates the top-level
/// `parent` element and its namespaced `version` child, and compares. On
/// success prints the `"<module>: <version> (ok)"` line.
pub fn ensure_version_consistency(
    dir: &Path,
    module_name: &str,
    expected_version: &str,
) -> Result<()> {
    let pom_path = dir.join(module_name).join(POM);
    let text = fs::read_to_string(&pom_path).map_err(|e| {
        ReleaseError::pom(format!(
            "the 'pom.xml' for module {} should be accessible: {}",
            module_name, e
        ))
    })?;
    let source = format!("{}/{}", module_name, POM);
    let doc = parse(&text, &source)?;

    let parent = find_top_level_element(&doc, "parent")?;
    let namespace = extract_default_namespace(&qualified_name(parent))?;
    let version = find_child(parent, &namespace, "version").ok_or_else(|| {
        ReleaseError::consistency(format!(
            "the parent element of module {} has no version specified",
            module_name
        ))
    })?;
    let actual_version = element_text(version, "version")?;

    if actual_version != expected_version {
        return Err(ReleaseError::consistency(format!(
            "the version of the module {} is inconsistent with the expected; {}",
            module_name, actual_version
        )));
    }

    println!("{}: {} (ok)", module_name, actual_version);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const ROOT_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>org.example</groupId>
  <artifactId>photocat</artifactId>
  <version>2.3.4-SNAPSHOT</version>
</project>"#;

    fn module_pom(parent_version: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <parent>
    <groupId>org.example</groupId>
    <artifactId>photocat</artifactId>
    <version>{}</version>
  </parent>
  <artifactId>photocat-module</artifactId>
</project>"#,
            parent_version
        )
    }

    #[test]
    fn test_extract_default_namespace() {
        let ns = extract_default_namespace("{http://maven.apache.org/POM/4.0.0}project").unwrap();
        assert_eq!(ns, "http://maven.apache.org/POM/4.0.0");
    }

    #[test]
    fn test_extract_default_namespace_missing_open() {
        let err = extract_default_namespace("project").unwrap_err();
        assert!(err.to_string().contains("missing namespace (open)"));
    }

    #[test]
    fn test_extract_default_namespace_missing_close() {
        let err = extract_default_namespace("{http://example.com/project").unwrap_err();
        assert!(err.to_string().contains("missing namespace (close)"));
    }

    #[test]
    fn test_extract_artifact_id_and_version() {
        let doc = parse(ROOT_POM, POM).unwrap();
        assert_eq!(extract_artifact_id(&doc).unwrap(), "photocat");
        assert_eq!(extract_version(&doc).unwrap(), "2.3.4-SNAPSHOT");
    }

    #[test]
    fn test_find_top_level_element_missing() {
        let doc = parse(ROOT_POM, POM).unwrap();
        let err = find_top_level_element(&doc, "parent").unwrap_err();
        assert!(err.to_string().contains("unable to find the parent element"));
    }

    #[test]
    fn test_unnamespaced_root_is_rejected() {
        let text = "<project><artifactId>photocat</artifactId></project>";
        let doc = parse(text, POM).unwrap();
        let err = extract_artifact_id(&doc).unwrap_err();
        assert!(err.to_string().contains("missing namespace (open)"));
    }

    #[test]
    fn test_qualified_name_forms() {
        let doc = parse(ROOT_POM, POM).unwrap();
        assert_eq!(
            qualified_name(doc.root_element()),
            "{http://maven.apache.org/POM/4.0.0}project"
        );

        let plain = parse("<project/>", POM).unwrap();
        assert_eq!(qualified_name(plain.root_element()), "project");
    }

    #[test]
    fn test_scan_modules() {
        let dir = tempdir().unwrap();

        fs::create_dir(dir.path().join("foo")).unwrap();
        fs::write(dir.path().join("foo").join(POM), module_pom("1.2.3-SNAPSHOT")).unwrap();

        fs::create_dir(dir.path().join("bar")).unwrap();
        fs::write(dir.path().join("bar").join(POM), module_pom("1.2.3-SNAPSHOT")).unwrap();

        // No descriptor: not a module.
        fs::create_dir(dir.path().join("docs")).unwrap();

        // Hidden: skipped even with a descriptor.
        fs::create_dir(dir.path().join(".hidden")).unwrap();
        fs::write(
            dir.path().join(".hidden").join(POM),
            module_pom("1.2.3-SNAPSHOT"),
        )
        .unwrap();

        // Plain file named like a module.
        fs::write(dir.path().join("stray"), "not a directory").unwrap();

        let modules = scan_modules(dir.path()).unwrap();
        assert_eq!(modules, vec!["bar".to_string(), "foo".to_string()]);
    }

    #[test]
    fn test_scan_modules_empty_tree() {
        let dir = tempdir().unwrap();
        assert!(scan_modules(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_consistency_ok() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("foo")).unwrap();
        fs::write(dir.path().join("foo").join(POM), module_pom("2.3.4-SNAPSHOT")).unwrap();

        ensure_version_consistency(dir.path(), "foo", "2.3.4-SNAPSHOT").unwrap();
    }

    #[test]
    fn test_consistency_mismatch() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("bar")).unwrap();
        fs::write(dir.path().join("bar").join(POM), module_pom("2.3.3-SNAPSHOT")).unwrap();

        let err = ensure_version_consistency(dir.path(), "bar", "2.3.4-SNAPSHOT").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bar"));
        assert!(msg.contains("2.3.3-SNAPSHOT"));
    }

    #[test]
    fn test_consistency_missing_descriptor() {
        let dir = tempdir().unwrap();
        let err = ensure_version_consistency(dir.path(), "ghost", "2.3.4-SNAPSHOT").unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_consistency_parent_without_version() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("baz")).unwrap();
        fs::write(
            dir.path().join("baz").join(POM),
            r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
  <parent>
    <groupId>org.example</groupId>
    <artifactId>photocat</artifactId>
  </parent>
</project>"#,
        )
        .unwrap();

        let err = ensure_version_consistency(dir.path(), "baz", "2.3.4-SNAPSHOT").unwrap_err();
        assert!(err.to_string().contains("has no version specified"));
    }

    #[test]
    fn test_consistency_module_without_parent() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("orphan")).unwrap();
        fs::write(dir.path().join("orphan").join(POM), ROOT_POM).unwrap();

        let err = ensure_version_consistency(dir.path(), "orphan", "2.3.4-SNAPSHOT").unwrap_err();
        assert!(err.to_string().contains("unable to find the parent element"));
    }
}
