//! Collect the targets confirmed as malicious by other malicious users.
use crate::error::Result;
use crate::records::records;
use std::collections::HashSet;
use std::io::BufRead;

/// The set of the identifiers of the malicious objects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaliciousObjects {
    targets: HashSet<String>,
}

impl MaliciousObjects {
    /// Scan all the records once. A target is malicious if an EVIL user scored an EVIL target
    /// with the literal `1.0`. The first malformed record aborts the scan.
    pub fn collect<R: BufRead>(rdr: R) -> Result<Self> {
        debug!("START\tCollecting malicious objects");
        let mut targets = HashSet::new();
        for record in records(rdr) {
            let record = record?;
            if record.confirms_malicious() && targets.insert(record.target.clone()) {
                trace!("MALICIOUS\t{}", record.target);
            }
        }
        info!("Collected {} malicious objects", targets.len());
        debug!("END\tCollecting malicious objects");
        Ok(Self { targets })
    }
    pub fn contains(&self, target: &str) -> bool {
        self.targets.contains(target)
    }
    pub fn len(&self) -> usize {
        self.targets.len()
    }
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl std::iter::FromIterator<String> for MaliciousObjects {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    #[test]
    fn collect_confirmed_targets() {
        let log = "u1\tt1\t1.0\tEVIL\tEVIL\n\
                   u2\tt1\t1.0\tEVIL\tEVIL\n\
                   u1\tt2\t0.9\tEVIL\tEVIL\n\
                   u1\tt3\t1.0\tEVIL\tGOOD\n\
                   u3\tt4\t1.0\tGOOD\tEVIL\n\
                   u1\tt5\tNone\tEVIL\tEVIL\n\
                   \n\
                   u2\tt6\t1\tEVIL\tEVIL\n";
        let malicious = MaliciousObjects::collect(log.as_bytes()).unwrap();
        assert_eq!(malicious.len(), 1);
        assert!(malicious.contains("t1"));
        for target in ["t2", "t3", "t4", "t5", "t6"] {
            assert!(!malicious.contains(target), "{}", target);
        }
    }
    #[test]
    fn empty_log() {
        let malicious = MaliciousObjects::collect("\n\n".as_bytes()).unwrap();
        assert!(malicious.is_empty());
    }
    #[test]
    fn abort_on_malformed() {
        let log = "u1\tt1\t1.0\tEVIL\tEVIL\nu1\tt2\tabc\tEVIL\tEVIL\n";
        match MaliciousObjects::collect(log.as_bytes()) {
            Err(EvalError::Parse { line: 2, .. }) => {}
            other => panic!("{:?}", other),
        }
    }
}
