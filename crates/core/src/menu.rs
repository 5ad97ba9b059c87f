use folio_protocol::{Target, UiCommand};

pub const MOBILE_MENU_ID: &str = "mobileMenu";
pub const MENU_HIDDEN_CLASS: &str = "hidden";

/// Collapsible navigation shown on narrow screens. Starts closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Following a menu link closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn commands(&self) -> Vec<UiCommand> {
        vec![UiCommand::set_class(
            Target::id(MOBILE_MENU_ID),
            MENU_HIDDEN_CLASS,
            !self.open,
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_hidden_class() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert_eq!(
            menu.commands(),
            vec![UiCommand::set_class(Target::id("mobileMenu"), "hidden", false)]
        );
        assert!(!menu.toggle());
        assert_eq!(
            menu.commands(),
            vec![UiCommand::set_class(Target::id("mobileMenu"), "hidden", true)]
        );
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MobileMenu::default();
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }
}
