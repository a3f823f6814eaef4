use std::fmt;

use crate::config::DF;

/// Which category is tap-highlighted and whether its popover is open.
/// Holds the label only; record values are looked up from whatever is on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    label: Option<String>,
    popover_visible: bool,
}

/// Result of feeding one resolved tap into a `Selection`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tap hit no category. Nothing changed.
    Missed,
    /// A new category was selected and its popover opened.
    Selected { label: String },
    /// The already selected category was tapped again.
    Toggled { label: String, visible: bool },
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            None => write!(f, "Selection::None"),
            Some(label) => write!(
                f,
                "Selection::{}({})",
                if self.popover_visible { "Shown" } else { "Hidden" },
                label
            ),
        }
    }
}

impl Selection {
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_popover_visible(&self) -> bool {
        self.popover_visible
    }

    /// Label whose popover is currently open.
    pub fn visible_label(&self) -> Option<&str> {
        self.label().filter(|_| self.popover_visible)
    }

    /// Same category toggles the popover; a different one always opens it.
    /// A miss (`None`) leaves selection and visibility untouched.
    pub fn apply_tap(&mut self, hit: Option<&str>) -> TapOutcome {
        let Some(label) = hit else {
            return TapOutcome::Missed;
        };

        let outcome = if self.label.as_deref() == Some(label) {
            self.popover_visible = !self.popover_visible;
            TapOutcome::Toggled {
                label: label.to_string(),
                visible: self.popover_visible,
            }
        } else {
            self.label = Some(label.to_string());
            self.popover_visible = true;
            TapOutcome::Selected {
                label: label.to_string(),
            }
        };

        if DF.log_selection {
            log::info!("Tap on '{}' -> {}", label, self);
        }
        outcome
    }

    pub fn clear(&mut self) {
        self.label = None;
        self.popover_visible = false;
    }
}
