//! Interpolation math for the slide-out fade
//!
//! As an image scrolls out of the view it fades and shrinks along two
//! curves driven by a single progress value. Progress measures how far the
//! image has moved out: 0 while it fills the view, -1/+1 once it is
//! completely gone (negative when moving right).

/// Scrolling progress for an image occupying `[left, right)` in a view of
/// `[0, view_width]`.
///
/// Negative while the image moves right, positive while it moves left;
/// reaches -1/+1 exactly when the image leaves the view. Continuous across
/// the narrow/wide boundary at `right - left == view_width`.
pub fn move_out_progress(left: i32, right: i32, view_width: i32) -> f32 {
    let w = right - left;

    // Narrower than the view: progress is linear in the left edge,
    // spanning left = view_width (gone right) to left = -w (gone left)
    if w < view_width {
        return 1.0 - 2.0 * (left + w) as f32 / (view_width + w) as f32;
    }

    // Wider than the view: a dead zone while the image covers the view,
    // then linear as either edge crosses its side
    if left > 0 {
        return -(left as f32) / view_width as f32;
    }
    if right < view_width {
        return (view_width - right) as f32 / view_width as f32;
    }
    0.0
}

/// Accelerating ease, starting slow and speeding up (`x^(2*factor)`)
#[derive(Debug, Clone, Copy)]
pub struct AccelerateCurve {
    exponent: f32,
}

impl AccelerateCurve {
    pub fn new(factor: f32) -> Self {
        Self {
            exponent: 2.0 * factor,
        }
    }

    pub fn apply(&self, x: f32) -> f32 {
        x.powf(self.exponent)
    }
}

/// Emulates the rate at which the perceived scale of an object changes as
/// its distance from a camera increases, so a shrink animation reads as
/// the object moving away
#[derive(Debug, Clone, Copy)]
pub struct ZCurve {
    focal_length: f32,
}

impl ZCurve {
    pub fn new(focal_length: f32) -> Self {
        Self { focal_length }
    }

    pub fn apply(&self, x: f32) -> f32 {
        let f = self.focal_length;
        (1.0 - f / (f + x)) / (1.0 - f / (f + 1.0))
    }
}

/// The alpha and scale curves for the slide-out fade, built from config
#[derive(Debug, Clone, Copy)]
pub struct ScrollCurves {
    alpha: AccelerateCurve,
    scale: ZCurve,
    transition_scale_factor: f32,
}

impl ScrollCurves {
    pub fn new(alpha_ease_factor: f32, scale_focal_length: f32, transition_scale_factor: f32) -> Self {
        Self {
            alpha: AccelerateCurve::new(alpha_ease_factor),
            scale: ZCurve::new(scale_focal_length),
            transition_scale_factor,
        }
    }

    /// Alpha for a progress value; only rightward movement fades
    pub fn scroll_alpha(&self, progress: f32) -> f32 {
        if progress < 0.0 {
            self.alpha.apply(1.0 - progress.abs())
        } else {
            1.0
        }
    }

    /// Scale factor for a progress value, shrinking toward the transition
    /// scale as the image moves out in either direction
    pub fn scroll_scale(&self, progress: f32) -> f32 {
        let t = self.scale.apply(progress.abs());
        (1.0 - t) + t * self.transition_scale_factor
    }
}
