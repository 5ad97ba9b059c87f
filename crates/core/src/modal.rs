use folio_protocol::{Target, UiCommand};

pub const MODAL_ID: &str = "resumeModal";
pub const HIDDEN_CLASS: &str = "hidden";
pub const CLOSE_KEY: &str = "Escape";

/// Identifies the content fetch started by one `open()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Resume overlay state.
///
/// Opening always starts a fresh fetch. Each fetch carries a ticket, and
/// only the newest ticket may write into the modal while it is open, so a
/// slow response from an earlier open can never overwrite a newer one.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    open: bool,
    generation: u64,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the overlay and lock scrolling. Opening an open modal only
    /// re-asserts the state; the lock is a flag, not a count.
    pub fn open(&mut self) -> FetchTicket {
        self.open = true;
        self.generation += 1;
        log::debug!("modal open, fetch #{}", self.generation);
        FetchTicket(self.generation)
    }

    pub fn close(&mut self) {
        if self.open {
            log::debug!("modal closed");
        }
        self.open = false;
    }

    /// Whether the response for `ticket` may be rendered.
    pub fn accepts(&self, ticket: FetchTicket) -> bool {
        self.open && ticket.0 == self.generation
    }

    /// Key press anywhere on the page. Returns true if it closed the modal.
    pub fn on_key(&mut self, key: &str) -> bool {
        if self.open && key == CLOSE_KEY {
            self.close();
            return true;
        }
        false
    }

    /// Click on the overlay. Clicks inside the content panel are contained;
    /// anything else closes. Returns true if it closed the modal.
    pub fn on_click(&mut self, inside_content: bool) -> bool {
        if self.open && !inside_content {
            self.close();
            return true;
        }
        false
    }

    pub fn commands(&self) -> Vec<UiCommand> {
        vec![
            UiCommand::set_class(Target::id(MODAL_ID), HIDDEN_CLASS, !self.open),
            UiCommand::SetScrollLock { locked: self.open },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_close_toggles_overlay_and_lock() {
        let mut modal = ModalController::new();
        modal.open();
        assert_eq!(
            modal.commands(),
            vec![
                UiCommand::set_class(Target::id(MODAL_ID), HIDDEN_CLASS, false),
                UiCommand::SetScrollLock { locked: true },
            ]
        );
        modal.close();
        assert_eq!(
            modal.commands(),
            vec![
                UiCommand::set_class(Target::id(MODAL_ID), HIDDEN_CLASS, true),
                UiCommand::SetScrollLock { locked: false },
            ]
        );
    }

    #[test]
    fn double_open_keeps_single_lock() {
        let mut modal = ModalController::new();
        modal.open();
        modal.open();
        assert!(modal.is_open());
        assert_eq!(modal.commands()[1], UiCommand::SetScrollLock { locked: true });
        // One close is enough to unlock.
        modal.close();
        assert_eq!(modal.commands()[1], UiCommand::SetScrollLock { locked: false });
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn stale_fetch_is_rejected() {
        let mut modal = ModalController::new();
        let first = modal.open();
        let second = modal.open();
        assert!(!modal.accepts(first));
        assert!(modal.accepts(second));
    }

    #[test]
    fn response_after_close_is_dropped() {
        let mut modal = ModalController::new();
        let ticket = modal.open();
        modal.close();
        assert!(!modal.accepts(ticket));
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut modal = ModalController::new();
        assert!(!modal.on_key(CLOSE_KEY));
        modal.open();
        assert!(!modal.on_key("Enter"));
        assert!(modal.on_key(CLOSE_KEY));
        assert!(!modal.is_open());
    }

    #[test]
    fn inside_click_is_contained() {
        let mut modal = ModalController::new();
        modal.open();
        assert!(!modal.on_click(true));
        assert!(modal.is_open());
        assert!(modal.on_click(false));
        assert!(!modal.is_open());
    }
}
