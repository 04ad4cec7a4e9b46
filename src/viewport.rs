use crate::responsive::{BreakpointTable, SizeLabel, ViewportWidth};

/// The host's current viewport width and the table used to classify it.
///
/// The width starts [unmeasured](ViewportWidth::Unmeasured), which
/// classifies as the table's smallest label until the first
/// [`resize`](Viewport::resize).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    width: ViewportWidth,
    breakpoints: BreakpointTable,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(width: f64) -> Self {
        Self {
            width: ViewportWidth::Measured(width),
            ..Self::default()
        }
    }

    pub fn breakpoints(mut self, breakpoints: BreakpointTable) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn table(&self) -> &BreakpointTable {
        &self.breakpoints
    }

    pub fn width(&self) -> ViewportWidth {
        self.width
    }

    /// Records a new measurement. Returns `true` when the size label changed.
    pub fn resize(&mut self, width: f64) -> bool {
        self.update(ViewportWidth::Measured(width))
    }

    /// Forgets the last measurement.
    pub fn set_unmeasured(&mut self) -> bool {
        self.update(ViewportWidth::Unmeasured)
    }

    pub fn size_label(&self) -> SizeLabel {
        self.breakpoints.classify_viewport(self.width)
    }

    fn update(&mut self, width: ViewportWidth) -> bool {
        let before = self.size_label();
        self.width = width;
        let after = self.size_label();
        if before != after {
            tracing::debug!(
                from = before.name(),
                to = after.name(),
                width = ?width,
                "viewport size label changed"
            );
        }
        before != after
    }
}
