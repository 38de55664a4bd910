/// Square canvas centered inside its container.
///
/// The canvas is positioned at 50%/50% by the stylesheet; the negative margins
/// pull it back by half its size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasLayout {
    pub size: f64,
    pub margin_top: f64,
    pub margin_left: f64,
}

pub fn fit_canvas(container_width: f64, container_height: f64) -> CanvasLayout {
    let size = container_width.min(container_height).max(0.0);
    CanvasLayout {
        size,
        margin_top: -size / 2.0,
        margin_left: -size / 2.0,
    }
}
