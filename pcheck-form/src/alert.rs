//! The dismissible error banner shown above a form.

/// Classes of the container the banner lives in.
pub const ALERT_CONTAINER_CLASS: &str = "form-alert-container mb-3";
pub const ALERT_CONTAINER_SELECTOR: &str = ".form-alert-container";
/// Classes of the banner itself.
pub const ALERT_CLASS: &str = "alert alert-danger alert-dismissible fade show alert-form-error";
pub const ALERT_SELECTOR: &str = ".alert-form-error";
pub const CLOSE_BUTTON_CLASS: &str = "btn-close";

/// A banner message. The text is always rendered as text, never as markup.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AlertBanner {
    pub message: String,
}

/// Holds at most one banner; showing a new one replaces the old.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct AlertSlot {
    current: Option<AlertBanner>,
}

impl AlertSlot {
    pub fn show(&mut self, message: impl Into<String>) {
        self.current = Some(AlertBanner {
            message: message.into(),
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&AlertBanner> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showing_replaces_the_previous_banner() {
        let mut slot = AlertSlot::default();
        slot.show("first");
        slot.show("second");
        assert_eq!(slot.current().map(|b| b.message.as_str()), Some("second"));
    }

    #[test]
    fn dismiss_clears_the_banner() {
        let mut slot = AlertSlot::default();
        slot.show("oops");
        slot.dismiss();
        assert!(slot.current().is_none());
    }

    #[test]
    fn banner_carries_bootstrap_classes() {
        for class in ["alert", "alert-danger", "alert-dismissible", "alert-form-error"] {
            assert!(
                ALERT_CLASS.split(' ').any(|c| c == class),
                "missing class {}",
                class
            );
        }
    }
}
