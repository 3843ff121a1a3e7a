//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `daybook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use daybook_core::Calendar;

fn main() {
    let calendar = Calendar::new(chrono::Local::now().naive_local());
    println!("daybook_core version={}", daybook_core::core_version());
    println!("daybook_core events={}", calendar.events().count());
}
