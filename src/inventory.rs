//! The host/service inventory fetched once per run from the API.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::protocol::Params;

/// Ordered mapping of host name to that host's service names, exactly as
/// the server enumerated them. Built once at startup and read-only after;
/// handlers receive it by shared reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    objects: IndexMap<String, Vec<String>>,
}

impl Inventory {
    /// Host names in server enumeration order.
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Services registered under a host, in stored order.
    pub fn services(&self, host: &str) -> Option<&[String]> {
        self.objects.get(host).map(Vec::as_slice)
    }

    pub fn contains_host(&self, host: &str) -> bool {
        self.objects.contains_key(host)
    }

    pub fn host_count(&self) -> usize {
        self.objects.len()
    }

    fn has_service(&self, host: &str, service: &str) -> bool {
        self.services(host)
            .is_some_and(|services| services.iter().any(|s| s == service))
    }
}

// ── Selector ──────────────────────────────────────────────────────

/// Downtime target consumed from the front of a positional argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub host: String,
    pub service: Option<String>,
}

impl Selector {
    /// Greedy host-then-service consumption, bounded to two tokens.
    ///
    /// Returns the selector plus the leftover arguments, or `None` when
    /// the first token is missing or not a known host. A second token is
    /// only consumed when it names a service registered under that host.
    pub fn resolve<'a>(inventory: &Inventory, args: &'a [String]) -> Option<(Self, &'a [String])> {
        let (host, mut rest) = args.split_first()?;
        if !inventory.contains_host(host) {
            return None;
        }
        let mut selector = Selector {
            host: host.clone(),
            service: None,
        };
        if let Some((service, tail)) = rest.split_first() {
            if inventory.has_service(host, service) {
                selector.service = Some(service.clone());
                rest = tail;
            }
        }
        Some((selector, rest))
    }

    /// Seed a parameter mapping with the selector fields.
    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert("host".into(), Value::String(self.host.clone()));
        if let Some(service) = &self.service {
            params.insert("service".into(), Value::String(service.clone()));
        }
        params
    }
}
