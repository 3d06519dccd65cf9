//! Star-rating input model
//!
//! An explicit value-holder mirroring a two-way bound rating control:
//! `write_value` sets the value silently (the "model to view" direction),
//! `select` is a user interaction that fires the registered change
//! callback, and the disabled flag makes all interaction inert.

/// Change callback invoked with the newly selected value.
pub type ChangeListener = Box<dyn FnMut(u32) + Send>;

/// A star-rating input with `max_stars` selectable steps.
pub struct StarRating {
    max_stars: u32,
    value: u32,
    hovered: u32,
    disabled: bool,
    on_change: Option<ChangeListener>,
}

impl StarRating {
    /// Default star count.
    pub const DEFAULT_MAX: u32 = 5;

    /// A rating input with the given number of stars (at least 1).
    pub fn new(max_stars: u32) -> Self {
        Self {
            max_stars: max_stars.max(1),
            value: 0,
            hovered: 0,
            disabled: false,
            on_change: None,
        }
    }

    /// The star positions, `1..=max_stars`, for rendering.
    pub fn stars(&self) -> impl Iterator<Item = u32> + use<> {
        1..=self.max_stars
    }

    /// Current committed value; 0 means "no rating".
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Whether interaction is currently ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Register the change callback, replacing any previous one.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(u32) + Send + 'static,
    {
        self.on_change = Some(Box::new(listener));
    }

    /// Set the value without firing the change callback, clamped to
    /// `[0, max_stars]`.
    pub fn write_value(&mut self, value: u32) {
        self.value = value.min(self.max_stars);
    }

    /// User selects a star. Ignored when disabled or out of `[1, max]`;
    /// otherwise commits the value and fires the change callback.
    pub fn select(&mut self, star: u32) {
        if self.disabled || star == 0 || star > self.max_stars {
            return;
        }
        self.value = star;
        if let Some(listener) = self.on_change.as_mut() {
            listener(star);
        }
    }

    /// User hovers a star; ignored when disabled.
    pub fn hover(&mut self, star: u32) {
        if self.disabled {
            return;
        }
        self.hovered = star.min(self.max_stars);
    }

    /// Pointer left the control; ignored when disabled.
    pub fn leave(&mut self) {
        if self.disabled {
            return;
        }
        self.hovered = 0;
    }

    /// The value to render: the hovered star while hovering, the committed
    /// value otherwise.
    pub fn display_value(&self) -> u32 {
        if self.hovered > 0 { self.hovered } else { self.value }
    }

    /// Whether a star position renders filled.
    pub fn is_filled(&self, star: u32) -> bool {
        star <= self.display_value()
    }

    /// Toggle the disabled state. Disabling clears any hover highlight.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.hovered = 0;
        }
    }
}

impl Default for StarRating {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_default_has_five_stars() {
        let rating = StarRating::default();
        assert_eq!(rating.stars().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(rating.value(), 0);
    }

    #[test]
    fn test_select_commits_and_notifies() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut rating = StarRating::default();
        rating.on_change(move |v| sink.lock().unwrap().push(v));

        rating.select(4);
        assert_eq!(rating.value(), 4);
        assert_eq!(*seen.lock().unwrap(), vec![4]);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut rating = StarRating::new(5);
        rating.on_change(move |v| sink.lock().unwrap().push(v));

        rating.select(0);
        rating.select(6);
        assert_eq!(rating.value(), 0);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_disabled_ignores_all_interaction() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut rating = StarRating::default();
        rating.on_change(move |v| sink.lock().unwrap().push(v));
        rating.write_value(3);
        rating.set_disabled(true);

        rating.select(5);
        rating.hover(5);
        assert_eq!(rating.value(), 3);
        assert_eq!(rating.display_value(), 3);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_write_value_is_silent_and_clamped() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut rating = StarRating::default();
        rating.on_change(move |v| sink.lock().unwrap().push(v));

        rating.write_value(9);
        assert_eq!(rating.value(), 5);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_hover_drives_display_value() {
        let mut rating = StarRating::default();
        rating.write_value(2);
        rating.hover(4);
        assert_eq!(rating.display_value(), 4);
        assert!(rating.is_filled(3));
        assert!(!rating.is_filled(5));

        rating.leave();
        assert_eq!(rating.display_value(), 2);
    }

    #[test]
    fn test_disable_clears_hover() {
        let mut rating = StarRating::default();
        rating.write_value(1);
        rating.hover(5);
        rating.set_disabled(true);
        assert_eq!(rating.display_value(), 1);
    }
}
