use crate::classify::UNKNOWN;
use anyhow::Context;
use maxminddb::PathElement;
use std::net::IpAddr;
use std::path::Path;

/// Label for addresses that cannot be parsed or are absent from the dataset.
pub const NOT_FOUND: &str = "Not found";

/// Anything that can turn an IP string into a country label. The pipeline
/// only depends on this trait, so tests run with a table-backed mock
/// instead of a real GeoLite2 database.
pub trait CountryResolver {
    /// Resolve `ip` to a country name. Never fails: unresolvable input is
    /// encoded as the `"Not found"` label, a located record without a
    /// country name as `"Unknown"`.
    fn resolve_country(&self, ip: &str) -> String;
}

/// Offline GeoLite2 city database. Opened once at startup and held for the
/// life of the run; lookups are read-only.
pub struct GeoDatabase {
    reader: maxminddb::Reader<maxminddb::Mmap>,
}

impl GeoDatabase {
    /// Memory-map the database file.
    /// - File is opened read-only
    /// - Lifetime is bound to GeoDatabase
    /// - The mmdb file is never mutated while mapped
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let reader = unsafe { maxminddb::Reader::open_mmap(path) }
            .with_context(|| format!("failed to open geo database {}", path.display()))?;
        Ok(Self { reader })
    }
}

impl CountryResolver for GeoDatabase {
    fn resolve_country(&self, ip: &str) -> String {
        let addr: IpAddr = match ip.parse() {
            Ok(a) => a,
            Err(_) => return NOT_FOUND.to_string(),
        };
        let lookup = match self.reader.lookup(addr) {
            Ok(l) => l,
            Err(_) => return NOT_FOUND.to_string(),
        };
        let name = lookup
            .decode_path::<String>(&[
                PathElement::Key("country"),
                PathElement::Key("names"),
                PathElement::Key("en"),
            ])
            .ok()
            .flatten();
        if let Some(name) = name {
            return name;
        }
        // A record may exist without an English country name; distinguish
        // that from the address being absent from the dataset entirely.
        let record_present = lookup
            .decode_path::<String>(&[
                PathElement::Key("country"),
                PathElement::Key("iso_code"),
            ])
            .ok()
            .flatten()
            .is_some()
            || lookup
                .decode_path::<String>(&[
                    PathElement::Key("continent"),
                    PathElement::Key("code"),
                ])
                .ok()
                .flatten()
                .is_some();
        if record_present {
            UNKNOWN.to_string()
        } else {
            NOT_FOUND.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_database_fails() {
        assert!(GeoDatabase::open(Path::new("/no/such/GeoLite2-City.mmdb")).is_err());
    }
}
