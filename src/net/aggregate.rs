use std::{collections::HashSet, net::Ipv4Addr};

/// Separator used when joining the final allow-list
pub const SEPARATOR: &str = ",";

/// Every IPv4 address collected during a run, direct and resolved
#[derive(Default, Debug, Clone, PartialEq)]
pub struct AddressSet {
    addrs: HashSet<Ipv4Addr>,
}

impl AddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an address (duplicates are automatically eliminated)
    pub fn insert(&mut self, addr: Ipv4Addr) {
        if self.addrs.insert(addr) {
            log::trace!("{} added to allow list", addr);
        }
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    /// Addresses in ascending string order
    ///
    /// The ordering is plain lexicographic comparison of the dotted-decimal
    /// text, so `10.0.0.10` sorts before `10.0.0.2`.
    pub fn sorted(&self) -> Vec<String> {
        let mut out: Vec<String> = self.addrs.iter().map(Ipv4Addr::to_string).collect();
        out.sort();
        out
    }

    /// The finished comma-joined value; empty when no addresses were collected
    pub fn joined(&self) -> String {
        self.sorted().join(SEPARATOR)
    }
}

impl Extend<Ipv4Addr> for AddressSet {
    fn extend<T: IntoIterator<Item = Ipv4Addr>>(&mut self, iter: T) {
        for addr in iter {
            self.insert(addr);
        }
    }
}

impl FromIterator<Ipv4Addr> for AddressSet {
    fn from_iter<T: IntoIterator<Item = Ipv4Addr>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
