//! Page geometry, in millimetres

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Millimetres per PDF point
pub const MM_PER_PT: f64 = 25.4 / 72.0;

/// Fixed page geometry for one document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
    pub margin_mm: f64,
    pub line_height_mm: f64,
}

impl Default for PageGeometry {
    /// A4 portrait, 20mm margins, 6mm lines
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 20.0,
            line_height_mm: 6.0,
        }
    }
}

impl PageGeometry {
    pub fn validate(&self) -> Result<(), RenderError> {
        let fields = [
            ("width", self.width_mm),
            ("height", self.height_mm),
            ("margin", self.margin_mm),
            ("line height", self.line_height_mm),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(RenderError::InvalidGeometry(format!(
                    "{} must be a positive number of millimetres (got {})",
                    name, value
                )));
            }
        }

        if self.printable_width() <= 0.0 {
            return Err(RenderError::InvalidGeometry(format!(
                "margins of {}mm leave no printable width on a {}mm page",
                self.margin_mm, self.width_mm
            )));
        }

        if self.printable_height() < self.line_height_mm {
            return Err(RenderError::InvalidGeometry(format!(
                "printable height {}mm cannot hold a {}mm line",
                self.printable_height(),
                self.line_height_mm
            )));
        }

        Ok(())
    }

    pub fn printable_width(&self) -> f64 {
        self.width_mm - 2.0 * self.margin_mm
    }

    pub fn printable_height(&self) -> f64 {
        self.height_mm - 2.0 * self.margin_mm
    }

    /// Lowest cursor position at which a line may still be written
    pub fn bottom_limit(&self) -> f64 {
        self.height_mm - self.margin_mm
    }

    /// Plain lines that fit on one page when the cursor starts at the top margin
    pub fn rows_per_page(&self) -> usize {
        (self.printable_height() / self.line_height_mm).floor() as usize + 1
    }

    pub fn width_pt(&self) -> f64 {
        self.width_mm / MM_PER_PT
    }

    pub fn height_pt(&self) -> f64 {
        self.height_mm / MM_PER_PT
    }
}
