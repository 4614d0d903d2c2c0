// Anything the particle field can be drawn onto. The browser canvas is the
// real one, tests record the draw calls instead.

use crate::color::Color;

pub trait Surface {
    type Error;

    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn set_size(&mut self, width: f64, height: f64);

    fn clear(&mut self) -> Result<(), Self::Error>;

    fn draw_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), Self::Error>;

    fn draw_line(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        color: Color,
        alpha: f64,
        line_width: f64,
    ) -> Result<(), Self::Error>;
}
