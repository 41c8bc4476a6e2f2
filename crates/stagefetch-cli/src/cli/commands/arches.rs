//! Arches command: print the static architecture catalog.

use stagefetch_core::arch;

pub fn run_arches() {
    println!("supported architectures:");
    for a in arch::CATALOG {
        println!("  {:8} {}", a.id, a.description);
    }
}
