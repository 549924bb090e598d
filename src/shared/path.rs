use std::path::{Path, PathBuf};

/// File-name-safe encoding of arbitrary field or category text.
///
/// ASCII alphanumerics and `-` pass through; every other byte (including `_`
/// and `.`) becomes `_` plus two lowercase hex digits, so distinct inputs never
/// collide and no output is a relative path component.
pub fn escape_resource_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            out.push(byte as char);
        } else {
            out.push('_');
            out.push_str(&hex::encode([byte]));
        }
    }
    out
}

/// Where persisted columns and indexes live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub column_dir: PathBuf,
    pub index_dir: PathBuf,
}

impl StorageLayout {
    pub fn new(column_dir: impl Into<PathBuf>, index_dir: impl Into<PathBuf>) -> Self {
        Self {
            column_dir: column_dir.into(),
            index_dir: index_dir.into(),
        }
    }

    /// `<root>/column` and `<root>/index`.
    pub fn under(root: &Path) -> Self {
        Self::new(root.join("column"), root.join("index"))
    }

    pub fn column_path(&self, field: &str) -> PathBuf {
        self.column_dir
            .join(format!("{}.csv", escape_resource_name(field)))
    }

    /// Lists every persisted column and its kind.
    pub fn column_manifest_path(&self) -> PathBuf {
        self.column_dir.join("columns.json")
    }

    pub fn field_index_dir(&self, field: &str) -> PathBuf {
        self.index_dir.join(escape_resource_name(field))
    }

    pub fn bitmap_path(&self, field: &str, category: &str) -> PathBuf {
        self.field_index_dir(field)
            .join(format!("{}.bmp", escape_resource_name(category)))
    }

    pub fn catalog_path(&self, field: &str) -> PathBuf {
        self.field_index_dir(field).join("categories.json")
    }
}
