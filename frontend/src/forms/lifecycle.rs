use std::cell::RefCell;
use std::rc::Rc;

use crate::forms::session::{FormSession, SubmissionStatus};

/// Time the exit animation needs before the fields may be blanked.
pub const CLOSE_ANIMATION_MS: u32 = 300;

/// Handed out by `close`; only the newest ticket clears the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// Handed out after a successful submit; closes the modal only if the same
/// session is still showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoCloseTicket(u64);

/// Names the session a request was sent for. A result carrying an older
/// ticket belongs to a session that has since been cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryTicket(u64);

/// Hide-then-clear lifecycle of one modal and the session it owns.
pub struct ModalLifecycle {
    session: Rc<RefCell<FormSession>>,
    open: bool,
    epoch: u64,
    pending_reset: Option<u64>,
    next_ticket: u64,
}

impl ModalLifecycle {
    pub fn new(session: FormSession) -> Self {
        Self {
            session: Rc::new(RefCell::new(session)),
            open: false,
            epoch: 0,
            pending_reset: None,
            next_ticket: 0,
        }
    }

    pub fn session(&self) -> Rc<RefCell<FormSession>> {
        self.session.clone()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Shows the modal. A reset still waiting on its timer is applied first.
    pub fn open(&mut self) {
        if let Some(ticket) = self.pending_reset {
            self.apply_reset(ResetTicket(ticket));
        }
        self.open = true;
    }

    /// Hides immediately. The caller applies the returned ticket after
    /// `CLOSE_ANIMATION_MS`.
    pub fn close(&mut self) -> ResetTicket {
        self.open = false;
        self.next_ticket += 1;
        self.pending_reset = Some(self.next_ticket);
        ResetTicket(self.next_ticket)
    }

    /// Returns true if the session was cleared.
    pub fn apply_reset(&mut self, ticket: ResetTicket) -> bool {
        if self.pending_reset != Some(ticket.0) {
            return false;
        }
        self.pending_reset = None;
        self.session.borrow_mut().reset();
        self.epoch += 1;
        true
    }

    /// Ticket for the delayed close after a successful submit, if the session
    /// actually succeeded.
    pub fn success_ticket(&self) -> Option<AutoCloseTicket> {
        (self.session.borrow().status() == SubmissionStatus::Succeeded).then_some(AutoCloseTicket(self.epoch))
    }

    /// Taken when a request is sent and handed back with its result.
    pub fn delivery_ticket(&self) -> DeliveryTicket {
        DeliveryTicket(self.epoch)
    }

    /// Records a delivery result. Results for a session that was reset while
    /// the request was in flight are dropped and false is returned.
    pub fn finish_delivery(&mut self, ticket: DeliveryTicket, succeeded: bool) -> bool {
        if ticket.0 != self.epoch {
            log::debug!("dropping delivery result for a cleared session");
            return false;
        }
        self.session.borrow_mut().finish_submit(succeeded);
        true
    }

    pub fn auto_close(&mut self, ticket: AutoCloseTicket) -> Option<ResetTicket> {
        if ticket.0 != self.epoch || !self.open {
            return None;
        }
        Some(self.close())
    }
}
