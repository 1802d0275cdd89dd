//! Template Catalog
//!
//! The fixed, ordered set of starter projects the build turns into
//! archives. Definitions are plain data so the catalog can be validated
//! without touching the file system.

mod javascript;
mod php;
mod python;

use std::collections::HashSet;
use std::fmt;

use crate::domain::entities::TemplateDefinition;
use crate::domain::value_objects::EntryPath;
use crate::error::{AssetError, AssetResult};

/// Built-in definitions in build order
pub const BUILTIN_TEMPLATES: &[TemplateDefinition] = &[
    php::PHP,
    php::LARAVEL,
    javascript::NODE,
    javascript::REACT,
    javascript::VUE,
    javascript::NEXT,
    javascript::SVELTE,
    javascript::NUXT,
    javascript::ANGULAR,
    python::FASTAPI,
    python::DJANGO,
    php::WORDPRESS,
];

/// A problem found while validating the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionIssue {
    pub template: String,
    pub path: Option<String>,
    pub reason: String,
}

impl DefinitionIssue {
    fn template(template: &str, reason: impl Into<String>) -> Self {
        Self {
            template: template.to_string(),
            path: None,
            reason: reason.into(),
        }
    }

    fn file(template: &str, path: &str, reason: impl Into<String>) -> Self {
        Self {
            template: template.to_string(),
            path: Some(path.to_string()),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DefinitionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: '{}': {}", self.template, path, self.reason),
            None => write!(f, "{}: {}", self.template, self.reason),
        }
    }
}

impl From<DefinitionIssue> for AssetError {
    fn from(issue: DefinitionIssue) -> Self {
        let reason = match &issue.path {
            Some(path) => format!("path '{}': {}", path, issue.reason),
            None => issue.reason.clone(),
        };
        AssetError::InvalidDefinition {
            template: issue.template,
            reason,
        }
    }
}

/// Template names double as file stems, so keep them to `[a-z0-9_-]`
pub fn is_valid_template_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

/// Ordered collection of template definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    templates: Vec<TemplateDefinition>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The catalog shipped with LocalX
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TEMPLATES.to_vec())
    }

    pub fn new(templates: Vec<TemplateDefinition>) -> Self {
        Self { templates }
    }

    pub fn get(&self, name: &str) -> Option<&TemplateDefinition> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.templates.iter().map(|t| t.name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateDefinition> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Sub-catalog for the requested names, kept in catalog order.
    ///
    /// An empty request selects everything.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> AssetResult<Catalog> {
        if names.is_empty() {
            return Ok(self.clone());
        }

        for name in names {
            if self.get(name.as_ref()).is_none() {
                return Err(AssetError::UnknownTemplate {
                    name: name.as_ref().to_string(),
                    available: self.names().join(", "),
                });
            }
        }

        let wanted: HashSet<&str> = names.iter().map(|n| n.as_ref()).collect();
        Ok(Self::new(
            self.templates
                .iter()
                .filter(|t| wanted.contains(t.name))
                .copied()
                .collect(),
        ))
    }

    /// Collect every definition problem in the catalog
    pub fn validate(&self) -> Vec<DefinitionIssue> {
        let mut issues = Vec::new();
        let mut names = HashSet::new();

        for template in &self.templates {
            if !is_valid_template_name(template.name) {
                issues.push(DefinitionIssue::template(
                    template.name,
                    "name must be lowercase letters, digits, '-' or '_'",
                ));
            }
            if !names.insert(template.name) {
                issues.push(DefinitionIssue::template(template.name, "duplicate template name"));
            }
            if template.files.is_empty() {
                issues.push(DefinitionIssue::template(template.name, "defines no files"));
            }

            let mut paths = HashSet::new();
            for file in template.files {
                if let Err(err) = EntryPath::parse(file.path) {
                    issues.push(DefinitionIssue::file(template.name, file.path, err.to_string()));
                }
                if !paths.insert(file.path) {
                    issues.push(DefinitionIssue::file(template.name, file.path, "duplicate path"));
                }
            }
        }

        issues
    }

    /// Fail on the first definition problem
    pub fn ensure_valid(&self) -> AssetResult<()> {
        match self.validate().into_iter().next() {
            Some(issue) => Err(issue.into()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TemplateFile;

    #[test]
    fn builtin_catalog_order() {
        assert_eq!(
            Catalog::builtin().names(),
            vec![
                "php", "laravel", "node", "react", "vue", "next", "svelte", "nuxt", "angular",
                "fastapi", "django", "wordpress"
            ]
        );
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let issues = Catalog::builtin().validate();
        assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
    }

    #[test]
    fn node_template_contents() {
        let catalog = Catalog::builtin();
        let node = catalog.get("node").unwrap();
        assert_eq!(node.paths().collect::<Vec<_>>(), vec!["package.json", "index.js"]);
        assert_eq!(
            node.file("index.js").unwrap().contents,
            "console.log('LocalX Node app running');\n"
        );
    }

    #[test]
    fn react_template_paths() {
        let catalog = Catalog::builtin();
        let react = catalog.get("react").unwrap();
        assert_eq!(
            react.paths().collect::<Vec<_>>(),
            vec![
                "package.json",
                "vite.config.js",
                "index.html",
                "src/main.jsx",
                "src/App.jsx",
                "src/index.css"
            ]
        );
    }

    #[test]
    fn django_keeps_empty_init_file() {
        let catalog = Catalog::builtin();
        let django = catalog.get("django").unwrap();
        assert_eq!(django.files.len(), 7);
        assert_eq!(django.file("localx_project/__init__.py").unwrap().contents, "");
    }

    #[test]
    fn every_template_file_ends_with_newline_or_is_empty() {
        for template in Catalog::builtin().iter() {
            for file in template.files {
                assert!(
                    file.contents.is_empty() || file.contents.ends_with('\n'),
                    "{}/{} lacks trailing newline",
                    template.name,
                    file.path
                );
            }
        }
    }

    #[test]
    fn select_keeps_catalog_order() {
        let selected = Catalog::builtin().select(&["wordpress", "node"]).unwrap();
        assert_eq!(selected.names(), vec!["node", "wordpress"]);
    }

    #[test]
    fn select_rejects_unknown_names() {
        let err = Catalog::builtin().select(&["rails"]).unwrap_err();
        assert!(matches!(err, AssetError::UnknownTemplate { ref name, .. } if name == "rails"));
    }

    #[test]
    fn validate_reports_traversal_and_duplicates() {
        const FILES: &[TemplateFile] = &[
            TemplateFile::new("ok.txt", "ok"),
            TemplateFile::new("../escape.txt", "nope"),
            TemplateFile::new("ok.txt", "again"),
        ];
        let catalog = Catalog::new(vec![
            TemplateDefinition::new("bad", "Bad", FILES),
            TemplateDefinition::new("Bad Name", "Bad", &[]),
        ]);

        let issues = catalog.validate();
        assert_eq!(issues.len(), 4);
        assert!(issues.iter().any(|i| i.path.as_deref() == Some("../escape.txt")));
        assert!(issues.iter().any(|i| i.reason == "duplicate path"));
        assert!(issues.iter().any(|i| i.reason == "defines no files"));

        let err = catalog.ensure_valid().unwrap_err();
        assert!(matches!(err, AssetError::InvalidDefinition { ref template, .. } if template == "bad"));
    }

    #[test]
    fn template_names_are_file_stems() {
        assert!(is_valid_template_name("next"));
        assert!(is_valid_template_name("my_app-2"));
        assert!(!is_valid_template_name("Next"));
        assert!(!is_valid_template_name("a/b"));
        assert!(!is_valid_template_name(""));
    }
}
