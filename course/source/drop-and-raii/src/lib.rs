//! Drop & RAII - cleanup tied to scope instead of a with-block

use std::cell::RefCell;

/// Audit log shared by transfers in a test or a session.
pub type AuditLog = RefCell<Vec<String>>;

/// A transfer that rolls back unless explicitly committed.
///
/// Dropping an uncommitted transfer records the rollback; `commit`
/// consumes the guard so a committed transfer can never roll back.
pub struct Transfer<'a> {
    log: &'a AuditLog,
    committed: bool,
}

impl<'a> Transfer<'a> {
    pub fn begin(log: &'a AuditLog) -> Self {
        log.borrow_mut().push("begin".to_string());
        Self {
            log,
            committed: false,
        }
    }

    pub fn commit(mut self) {
        self.log.borrow_mut().push("commit".to_string());
        self.committed = true;
    }
}

impl Drop for Transfer<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.log.borrow_mut().push("rollback".to_string());
        }
    }
}
