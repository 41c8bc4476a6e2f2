//! Static catalog of architectures with published stage3 autobuilds.

/// One downloadable target architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchTarget {
    /// Directory name under the mirror's releases root.
    pub id: &'static str,
    pub description: &'static str,
}

pub const CATALOG: &[ArchTarget] = &[
    ArchTarget {
        id: "amd64",
        description: "x86-64 (Intel/AMD, 64-bit)",
    },
    ArchTarget {
        id: "arm64",
        description: "AArch64 (ARM, 64-bit)",
    },
    ArchTarget {
        id: "x86",
        description: "x86 (32-bit)",
    },
    ArchTarget {
        id: "arm",
        description: "ARM (32-bit)",
    },
    ArchTarget {
        id: "ppc",
        description: "PowerPC (incl. ppc64/ppc64le)",
    },
    ArchTarget {
        id: "riscv",
        description: "RISC-V",
    },
    ArchTarget {
        id: "sparc",
        description: "SPARC (64-bit)",
    },
];

/// Look up an architecture by its directory id.
pub fn find(id: &str) -> Option<&'static ArchTarget> {
    CATALOG.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_arch() {
        let a = find("amd64").unwrap();
        assert_eq!(a.id, "amd64");
    }

    #[test]
    fn unknown_arch_is_none() {
        assert!(find("vax").is_none());
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
