//! Zoom level bounded to a scale range with a fixed step.

/// Options for [`Zoom`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomOptions {
    /// Scale after load and after a reset (default: 1.2).
    pub default_scale: f64,
    /// Smallest scale (default: 0.5).
    pub min_scale: f64,
    /// Largest scale (default: 3.0).
    pub max_scale: f64,
    /// Scale change per zoom step (default: 0.2).
    pub step: f64,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            default_scale: 1.2,
            min_scale: 0.5,
            max_scale: 3.0,
            step: 0.2,
        }
    }
}

/// Current zoom scale.
///
/// Every mutating method returns `true` iff the scale actually changed; the
/// caller re-renders the whole view only in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct Zoom {
    options: ZoomOptions,
    scale: f64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self::new(ZoomOptions::default())
    }
}

/// Round to one decimal place, so repeated steps don't drift (1.2 + 0.2 = 1.4).
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl Zoom {
    pub fn new(options: ZoomOptions) -> Self {
        Self {
            scale: options.default_scale,
            options,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The scale as a whole percentage for display.
    pub fn percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    pub fn can_zoom_in(&self) -> bool {
        self.scale < self.options.max_scale
    }

    pub fn can_zoom_out(&self) -> bool {
        self.scale > self.options.min_scale
    }

    /// Increase the scale by one step, stopping at `max_scale`.
    pub fn zoom_in(&mut self) -> bool {
        if !self.can_zoom_in() {
            return false;
        }
        self.set(round1(self.scale + self.options.step).min(self.options.max_scale))
    }

    /// Decrease the scale by one step, stopping at `min_scale`.
    pub fn zoom_out(&mut self) -> bool {
        if !self.can_zoom_out() {
            return false;
        }
        self.set(round1(self.scale - self.options.step).max(self.options.min_scale))
    }

    /// Return to the default scale.
    pub fn reset(&mut self) -> bool {
        self.set(self.options.default_scale)
    }

    fn set(&mut self, scale: f64) -> bool {
        if (scale - self.scale).abs() < f64::EPSILON {
            return false;
        }
        self.scale = scale;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_default_scale() {
        let zoom = Zoom::default();
        assert_eq!(zoom.scale(), 1.2);
        assert_eq!(zoom.percent(), 120);
        assert!(zoom.can_zoom_in());
        assert!(zoom.can_zoom_out());
    }

    #[test]
    fn steps_are_rounded_to_one_decimal() {
        let mut zoom = Zoom::default();
        assert!(zoom.zoom_in());
        assert_eq!(zoom.scale(), 1.4);
        assert!(zoom.zoom_in());
        assert_eq!(zoom.scale(), 1.6);
        assert!(zoom.zoom_out());
        assert!(zoom.zoom_out());
        assert!(zoom.zoom_out());
        assert_eq!(zoom.scale(), 1.0);
        assert_eq!(zoom.percent(), 100);
    }

    #[test]
    fn zoom_in_stops_at_max() {
        let mut zoom = Zoom::default();
        let mut steps = 0;
        while zoom.zoom_in() {
            steps += 1;
        }
        assert_eq!(steps, 9);
        assert_eq!(zoom.scale(), 3.0);
        assert!(!zoom.can_zoom_in());
        assert!(!zoom.zoom_in());
    }

    #[test]
    fn zoom_out_stops_at_min() {
        let mut zoom = Zoom::default();
        let mut steps = 0;
        while zoom.zoom_out() {
            steps += 1;
        }
        // 1.2, 1.0, 0.8, 0.6, then clamped to 0.5.
        assert_eq!(steps, 4);
        assert_eq!(zoom.scale(), 0.5);
        assert!(!zoom.can_zoom_out());
        assert_eq!(zoom.percent(), 50);
    }

    #[test]
    fn uneven_step_is_clamped_to_bounds() {
        let options = ZoomOptions {
            default_scale: 1.0,
            min_scale: 0.5,
            max_scale: 3.0,
            step: 0.3,
        };
        let mut zoom = Zoom::new(options.clone());
        while zoom.zoom_in() {
            assert!(zoom.scale() <= 3.0, "scale {} above max", zoom.scale());
        }
        assert_eq!(zoom.scale(), 3.0);

        let mut zoom = Zoom::new(options);
        while zoom.zoom_out() {
            assert!(zoom.scale() >= 0.5, "scale {} below min", zoom.scale());
        }
        assert_eq!(zoom.scale(), 0.5);
    }

    #[test]
    fn reset_reports_whether_scale_changed() {
        let mut zoom = Zoom::default();
        assert!(!zoom.reset());
        zoom.zoom_in();
        assert!(zoom.reset());
        assert_eq!(zoom.scale(), 1.2);
    }
}
