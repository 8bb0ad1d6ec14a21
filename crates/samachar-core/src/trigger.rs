// Rust guideline compliant 2026-10-14

//! Scroll sentinel for infinite lists.
//!
//! The trigger observes exactly one target, the last rendered item. It
//! fires once per reach: after firing it stays silent until the target
//! scrolls out of range or a new target is observed.

/// Detects when the last rendered item comes within range of the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityTrigger {
    margin: f64,
    target: Option<String>,
    fired: bool,
}

impl VisibilityTrigger {
    /// Creates a disconnected trigger.
    ///
    /// # Arguments
    ///
    /// * `margin` - Distance in pixels below the viewport at which the
    ///   target counts as reached. Negative values are clamped to 0.
    #[must_use]
    pub fn new(margin: f64) -> Self {
        Self {
            margin: margin.max(0.0),
            target: None,
            fired: false,
        }
    }

    /// Observes `target`, replacing any previous target.
    ///
    /// # Returns
    ///
    /// `true` if the trigger was re-armed, `false` if it already observed
    /// `target`.
    pub fn observe(&mut self, target: &str) -> bool {
        if self.target.as_deref() == Some(target) {
            return false;
        }
        self.target = Some(target.to_string());
        self.fired = false;
        true
    }

    /// Stops observing. Later reports are ignored until the next `observe`.
    pub fn disconnect(&mut self) {
        self.target = None;
        self.fired = false;
    }

    /// Whether a target is being observed.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.target.is_some()
    }

    /// Currently observed target.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Configured margin in pixels.
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Reports the position of a rendered element.
    ///
    /// # Arguments
    ///
    /// * `target` - ID of the reported element
    /// * `distance` - Pixels between the viewport's bottom edge and the
    ///   element's top edge; zero or negative once it is on screen
    ///
    /// # Returns
    ///
    /// `true` exactly when the caller should request the next page.
    pub fn report(&mut self, target: &str, distance: f64) -> bool {
        if self.target.as_deref() != Some(target) {
            return false;
        }
        if distance > self.margin {
            self.fired = false;
            return false;
        }
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}
