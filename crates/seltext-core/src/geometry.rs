/// Where a text-layer span sits on its page, in viewport units.
///
/// The origin is the page's top-left corner, so `top < bottom` for any
/// span with a visible extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BBox {
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Return this box multiplied by a viewport scale factor.
    pub fn scaled(&self, factor: f64) -> BBox {
        BBox {
            x0: self.x0 * factor,
            top: self.top * factor,
            x1: self.x1 * factor,
            bottom: self.bottom * factor,
        }
    }
}
