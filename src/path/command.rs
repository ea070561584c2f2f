use std::fmt;

use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Point, Rect, push_num, push_pair};

/// One command of the surface path grammar. All coordinates are absolute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// `H`: horizontal line to an absolute x.
    HorizontalTo(f64),
    /// `V`: vertical line to an absolute y.
    VerticalTo(f64),
    CurveTo(Point, Point, Point),
}

/// A connector path as an ordered command list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    cmds: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.cmds.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.cmds.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        self.cmds.push(PathCommand::HorizontalTo(x));
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        self.cmds.push(PathCommand::VerticalTo(y));
        self
    }

    pub fn curve_to(mut self, c1: Point, c2: Point, end: Point) -> Self {
        self.cmds.push(PathCommand::CurveTo(c1, c2, end));
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.cmds
    }

    /// Render in the surface grammar, e.g. `M0,0V20H10`.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(self.cmds.len() * 12);
        for cmd in &self.cmds {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    out.push('M');
                    push_pair(&mut out, p.x, p.y);
                }
                PathCommand::LineTo(p) => {
                    out.push('L');
                    push_pair(&mut out, p.x, p.y);
                }
                PathCommand::HorizontalTo(x) => {
                    out.push('H');
                    push_num(&mut out, x);
                }
                PathCommand::VerticalTo(y) => {
                    out.push('V');
                    push_num(&mut out, y);
                }
                PathCommand::CurveTo(c1, c2, end) => {
                    out.push('C');
                    push_pair(&mut out, c1.x, c1.y);
                    out.push(',');
                    push_pair(&mut out, c2.x, c2.y);
                    out.push(',');
                    push_pair(&mut out, end.x, end.y);
                }
            }
        }
        out
    }

    /// Expand into a kurbo path, resolving `H`/`V` against the current point.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut cur = Point::ZERO;
        for cmd in &self.cmds {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    path.move_to(p);
                    cur = p;
                }
                PathCommand::LineTo(p) => {
                    path.line_to(p);
                    cur = p;
                }
                PathCommand::HorizontalTo(x) => {
                    cur = Point::new(x, cur.y);
                    path.line_to(cur);
                }
                PathCommand::VerticalTo(y) => {
                    cur = Point::new(cur.x, y);
                    path.line_to(cur);
                }
                PathCommand::CurveTo(c1, c2, end) => {
                    path.curve_to(c1, c2, end);
                    cur = end;
                }
            }
        }
        path
    }

    /// Tight bounds of the connector on the surface.
    pub fn bounding_box(&self) -> Rect {
        self.to_bez_path().bounding_box()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/command.rs"]
mod tests;
