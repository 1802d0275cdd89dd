//! Template entities - a named starter project and its files
//!
//! Definitions are static data: the whole catalog is compiled into the
//! binary and never mutated.

/// One file of a template: relative path plus exact contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    /// Forward-slash path relative to the template root
    pub path: &'static str,
    /// Exact file contents (written as UTF-8 bytes, no newline translation)
    pub contents: &'static str,
}

impl TemplateFile {
    pub const fn new(path: &'static str, contents: &'static str) -> Self {
        Self { path, contents }
    }

    /// Bytes written to disk and stored in the archive
    pub fn contents_bytes(&self) -> &'static [u8] {
        self.contents.as_bytes()
    }
}

/// A named starter project for one framework or runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDefinition {
    /// Unique name, used as the archive file stem
    pub name: &'static str,
    /// Short human description
    pub description: &'static str,
    /// Files in declaration order
    pub files: &'static [TemplateFile],
}

impl TemplateDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        files: &'static [TemplateFile],
    ) -> Self {
        Self {
            name,
            description,
            files,
        }
    }

    /// Archive file name (`<name>.zip`)
    pub fn archive_file_name(&self) -> String {
        format!("{}.zip", self.name)
    }

    /// Declared relative paths in order
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.files.iter().map(|f| f.path)
    }

    /// Look up a declared file by path
    pub fn file(&self, path: &str) -> Option<&TemplateFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Total payload size in bytes
    pub fn payload_size(&self) -> usize {
        self.files.iter().map(|f| f.contents.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILES: &[TemplateFile] = &[
        TemplateFile::new("a.txt", "alpha\n"),
        TemplateFile::new("dir/b.txt", "beta"),
    ];

    #[test]
    fn archive_name_uses_template_name() {
        let def = TemplateDefinition::new("demo", "Demo", FILES);
        assert_eq!(def.archive_file_name(), "demo.zip");
    }

    #[test]
    fn file_lookup_and_payload() {
        let def = TemplateDefinition::new("demo", "Demo", FILES);
        assert_eq!(def.file("dir/b.txt").unwrap().contents_bytes(), b"beta");
        assert!(def.file("missing").is_none());
        assert_eq!(def.payload_size(), 10);
        assert_eq!(def.paths().collect::<Vec<_>>(), vec!["a.txt", "dir/b.txt"]);
    }
}
