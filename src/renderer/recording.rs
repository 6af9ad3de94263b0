use super::RenderSurface;

// Draw calls captured by `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    BeginPath,
    ClosePath,
    Rect(f64, f64, f64, f64),
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc(f64, f64, f64, f64, f64),
    FillStyle(String),
    Fill,
    FillRect(f64, f64, f64, f64),
    ClearRect(f64, f64, f64, f64),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) ops: Vec<Op>,
}

impl RecordingSurface {
    pub(crate) fn fill_rects(&self) -> Vec<(f64, f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FillRect(x, y, w, h) => Some((*x, *y, *w, *h)),
                _ => None,
            })
            .collect()
    }

    // Every save has a matching restore, never popping an empty stack.
    pub(crate) fn is_balanced(&self) -> bool {
        let mut depth = 0i32;
        for op in &self.ops {
            match op {
                Op::Save => depth += 1,
                Op::Restore => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }
}

impl RenderSurface for RecordingSurface {
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(Op::Translate(x, y));
    }

    fn rotate(&mut self, angle: f64) {
        self.ops.push(Op::Rotate(angle));
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::Rect(x, y, w, h));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        self.ops.push(Op::Arc(x, y, radius, start, end));
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ops.push(Op::FillStyle(style.to_string()));
    }

    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::FillRect(x, y, w, h));
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::ClearRect(x, y, w, h));
    }
}
