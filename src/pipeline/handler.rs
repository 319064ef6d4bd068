//! Admin record handler.

use log::info;

/// Receives `(name, email)` for every inserted record whose role is admin.
///
/// Called synchronously, in input order, right after the row is stored.
pub trait AdminHandler {
    /// Called once per stored admin record.
    fn on_admin(&self, name: &str, email: &str);
}

impl<F> AdminHandler for F
where
    F: Fn(&str, &str),
{
    fn on_admin(&self, name: &str, email: &str) {
        self(name, email)
    }
}

/// Logs each admin at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingAdminHandler;

impl AdminHandler for LoggingAdminHandler {
    fn on_admin(&self, name: &str, email: &str) {
        info!("Admin user: {} <{}>", name, email);
    }
}
