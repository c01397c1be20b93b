//! License identifiers known to the scaffolder

/// Read-only view of available licenses
pub trait LicenseCatalog: Send + Sync {
    /// Whether a license with this identifier is available
    fn exists(&self, id: &str) -> bool;

    /// All available licenses as `(identifier, description)` pairs
    fn list_available(&self) -> Vec<(String, String)>;
}

/// SPDX identifiers and their full names
const BUILTIN: &[(&str, &str)] = &[
    ("AGPL-3.0", "GNU Affero General Public License v3.0"),
    ("Apache-2.0", "Apache License 2.0"),
    ("BSD-2-Clause", "BSD 2-Clause \"Simplified\" License"),
    ("BSD-3-Clause", "BSD 3-Clause \"New\" or \"Revised\" License"),
    ("GPL-2.0", "GNU General Public License v2.0"),
    ("GPL-3.0", "GNU General Public License v3.0"),
    ("ISC", "ISC License"),
    ("LGPL-2.1", "GNU Lesser General Public License v2.1"),
    ("LGPL-3.0", "GNU Lesser General Public License v3.0"),
    ("MIT", "MIT License"),
    ("MPL-2.0", "Mozilla Public License 2.0"),
    ("Unlicense", "The Unlicense"),
    ("Zlib", "zlib License"),
];

/// The licenses shipped with pkgplate
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLicenses;

impl LicenseCatalog for BuiltinLicenses {
    fn exists(&self, id: &str) -> bool {
        BUILTIN.iter().any(|(name, _)| *name == id)
    }

    fn list_available(&self) -> Vec<(String, String)> {
        BUILTIN
            .iter()
            .map(|(name, description)| (name.to_string(), description.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_license_exists() {
        assert!(BuiltinLicenses.exists("MIT"));
        assert!(BuiltinLicenses.exists("Apache-2.0"));
    }

    #[test]
    fn test_unknown_license_does_not_exist() {
        assert!(!BuiltinLicenses.exists("NOT_A_REAL_LICENSE"));
        // Identifiers are case sensitive
        assert!(!BuiltinLicenses.exists("mit"));
        assert!(!BuiltinLicenses.exists(""));
    }

    #[test]
    fn test_list_available_is_sorted_and_described() {
        let licenses = BuiltinLicenses.list_available();
        assert_eq!(licenses.len(), BUILTIN.len());
        let ids: Vec<&str> = licenses.iter().map(|(id, _)| id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert!(licenses.iter().all(|(_, description)| !description.is_empty()));
    }
}
