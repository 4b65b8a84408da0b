//! One-time host registration.

use std::sync::atomic::{AtomicBool, Ordering};

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Register the engine with the hosting application.
///
/// Idempotent: the first call installs and returns `true`, every later call
/// is a no-op returning `false`. The host calls this once at startup before
/// constructing engine instances.
pub fn install() -> bool {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        log::debug!("dragrect already installed, ignoring repeat registration");
        false
    } else {
        log::info!("dragrect installed");
        true
    }
}

/// Whether [`install`] has run in this process.
pub fn is_installed() -> bool {
    INSTALLED.load(Ordering::SeqCst)
}
