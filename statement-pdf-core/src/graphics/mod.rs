mod color;

pub use color::Color;

#[derive(Clone)]
pub struct GraphicsContext {
    operations: String,
    stroke_color: Color,
    line_width: f64,
}

impl Default for GraphicsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsContext {
    pub fn new() -> Self {
        Self {
            operations: String::new(),
            stroke_color: Color::black(),
            line_width: 1.0,
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.operations.push_str(&format!("{x:.2} {y:.2} m\n"));
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.operations.push_str(&format!("{x:.2} {y:.2} l\n"));
        self
    }

    /// Strokes a single straight segment.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.move_to(x1, y1).line_to(x2, y2).stroke()
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.apply_stroke_color();
        self.operations.push_str("S\n");
        self
    }

    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        self.stroke_color = color;
        self
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.line_width = width;
        self.operations.push_str(&format!("{width:.2} w\n"));
        self
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    fn apply_stroke_color(&mut self) {
        let op = match self.stroke_color {
            Color::Rgb(r, g, b) => format!("{r:.3} {g:.3} {b:.3} RG\n"),
            Color::Gray(g) => format!("{g:.3} G\n"),
        };
        self.operations.push_str(&op);
    }

    pub(crate) fn generate_operations(&self) -> Vec<u8> {
        self.operations.as_bytes().to_vec()
    }
}
