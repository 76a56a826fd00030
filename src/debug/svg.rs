use std::{fmt, io, path};

use num_traits::Float;

use crate::{Triangle, Winding, event::EventSet, inputs::{Coords, VertexBuffer}, sweep::{MonotoneChain, OrientedEdge, Sweep}};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SvgOutputLevel {
    None,
    ResultOnly,
    MajorSteps,
    AllSteps,
}

pub(crate) struct SvgOutput<'a> {
    pub context: &'a SvgContext,
    pub style: SvgTriangulationStyle,
    content: String,
}

impl<'a> SvgOutput<'a> {
    pub fn new(context: &'a SvgContext, style: SvgTriangulationStyle) -> Self {
        Self {
            context,
            style,
            content: String::new(),
        }
    }

    pub fn append_element<State: ?Sized, E: SvgElement<State> + ?Sized>(&mut self, element: &E, state: &State) -> fmt::Result {
        element.write_svg(self, state)
    }

    pub fn save<P: AsRef<path::Path>>(self, file_name: P) -> io::Result<()> {
        use std::io::Write;

        let path = self.context.output_path.join(file_name);
        let f = std::fs::File::create(path)?;
        let mut w = io::BufWriter::new(&f);

        writeln!(w, "<svg viewBox=\"{}, {}, {}, {}\" xmlns=\"http://www.w3.org/2000/svg\">", self.context.view_x_min, self.context.view_y_min, self.context.view_w(), self.context.view_h())?;
        writeln!(w, "{}", self.content)?;
        writeln!(w, "</svg>")?;
        Ok(())
    }
}

impl<'a> fmt::Write for SvgOutput<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SvgElementStyle {
    Standard,
    Highlight,
}

/// Which vertex, if any, is drawn highlighted
#[derive(Debug, Default)]
pub(crate) struct SvgTriangulationStyle {
    highlight_vertex: Option<usize>,
}

impl SvgTriangulationStyle {
    pub fn highlight_vertex(vi: usize) -> Self {
        Self {
            highlight_vertex: Some(vi),
        }
    }

    pub fn get_v_style(&self, vi: usize) -> SvgElementStyle {
        if self.highlight_vertex == Some(vi) {
            SvgElementStyle::Highlight
        } else {
            SvgElementStyle::Standard
        }
    }
}

pub(crate) struct SvgContext {
    pub output_path: path::PathBuf,
    pub output_level: SvgOutputLevel,
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
}

impl SvgContext {
    /// Reads the environment; `None` unless output is enabled
    pub fn from_env<C: Float>(vertices: &VertexBuffer<C>) -> Option<Self> {
        let output_path = super::env::svg::output_path()?;
        let output_level = super::env::svg::output_level();
        if output_level == SvgOutputLevel::None || vertices.len() == 0 {
            return None;
        }

        let mut view_x_min = f32::MAX;
        let mut view_x_max = f32::MIN;
        let mut view_y_min = f32::MAX;
        let mut view_y_max = f32::MIN;
        for &c in vertices.coords() {
            let [x, y] = point(c);
            view_x_min = view_x_min.min(x);
            view_x_max = view_x_max.max(x);
            view_y_min = view_y_min.min(y);
            view_y_max = view_y_max.max(y);
        }

        let margin_scale = 0.1;
        let w = view_x_max - view_x_min;
        let h = view_y_max - view_y_min;
        view_x_min -= w * margin_scale;
        view_x_max += w * margin_scale;
        view_y_min -= h * margin_scale;
        view_y_max += h * margin_scale;

        Some(Self {
            output_path,
            output_level,
            view_x_min,
            view_x_max,
            view_y_min,
            view_y_max,
            show_labels: super::env::svg::show_labels(),
        })
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }
}

pub(crate) trait SvgElement<State: ?Sized = ()> {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>, state: &State) -> fmt::Result;
}

// svg_fmt is missing a function for Circle
pub(crate) fn circle(x: f32, y: f32, r: f32) -> svg_fmt::Circle {
    svg_fmt::Circle {
        x,
        y,
        radius: r,
        style: svg_fmt::Style::default(),
    }
}

fn point<C: Float>(c: Coords<C>) -> [f32; 2] {
    [c.x().to_f32().unwrap_or(f32::NAN), c.y().to_f32().unwrap_or(f32::NAN)]
}

fn palette(i: usize) -> svg_fmt::Color {
    const COLORS: [(u8, u8, u8); 6] = [(230, 25, 75), (60, 180, 75), (0, 130, 200), (245, 130, 48), (145, 30, 180), (70, 140, 140)];
    let (r, g, b) = COLORS[i % COLORS.len()];
    svg_fmt::rgb(r, g, b)
}

fn write_vertex<C: Float>(svg_output: &mut SvgOutput<'_>, vertices: &VertexBuffer<C>, vi: usize) -> fmt::Result {
    use svg_fmt::*;
    use fmt::Write;

    let [x, y] = point(vertices[vi]);
    let (r, color) = match svg_output.style.get_v_style(vi) {
        SvgElementStyle::Standard => (svg_output.context.percent(0.4), green()),
        SvgElementStyle::Highlight => (svg_output.context.percent(0.8), rgb(255, 126, 0)),
    };
    writeln!(svg_output, "{}",
        circle(x, y, r)
            .fill(Fill::Color(color))
    )?;

    if svg_output.context.show_labels {
        let gap = svg_output.context.percent(1.0);
        writeln!(svg_output, "{}",
            text(x - gap, y, vi.to_string())
                .color(black())
                .align(Align::Right)
                .size(svg_output.context.percent(1.5))
        )?;
    }
    Ok(())
}

fn write_edge<C: Float>(svg_output: &mut SvgOutput<'_>, vertices: &VertexBuffer<C>, edge: OrientedEdge, color: svg_fmt::Color, width: f32) -> fmt::Result {
    use svg_fmt::*;
    use fmt::Write;

    let [x0, y0] = point(vertices[edge.begin]);
    let [x1, y1] = point(vertices[edge.end]);
    writeln!(svg_output, "{}",
        line_segment(x0, y0, x1, y1)
            .color(color)
            .width(width)
    )
}

fn write_polygon<C: Float>(svg_output: &mut SvgOutput<'_>, vertices: &VertexBuffer<C>, indices: &[usize], color: svg_fmt::Color, open: bool) -> fmt::Result {
    use svg_fmt::*;
    use fmt::Write;

    let points: Vec<_> = indices.iter().map(|&vi| point(vertices[vi])).collect();
    let shape = if open { polygon(&points).open() } else { polygon(&points) };
    writeln!(svg_output, "{}",
        shape
            .stroke(Stroke::Color(color, svg_output.context.percent(0.3)))
            .stroke_opacity(0.7)
    )
}

/// Every normalized contour edge, border edges red and hole edges blue, with the vertices in sweep order
impl<C: Float> SvgElement<VertexBuffer<C>> for EventSet<C> {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>, vertices: &VertexBuffer<C>) -> fmt::Result {
        let width = svg_output.context.percent(0.3);
        for event in self.iter() {
            let color = match event.winding() {
                Winding::Clockwise => svg_fmt::red(),
                Winding::Counterclockwise => svg_fmt::blue(),
            };
            write_edge(svg_output, vertices, OrientedEdge::new(event.vertex(), event.next()), color, width)?;
        }
        for event in self.iter() {
            write_vertex(svg_output, vertices, event.vertex())?;
        }
        Ok(())
    }
}

/// The chains built so far, with the edges still open drawn on top
impl<'v, C: Float> SvgElement<VertexBuffer<C>> for Sweep<'v, C> {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>, vertices: &VertexBuffer<C>) -> fmt::Result {
        for (i, chain) in self.chains().iter().enumerate() {
            if chain.len() >= 2 {
                write_polygon(svg_output, vertices, chain.vertices(), palette(i), true)?;
            }
        }
        let width = svg_output.context.percent(0.5);
        for edge in self.open_edges() {
            write_edge(svg_output, vertices, edge, svg_fmt::black(), width)?;
        }
        for vi in 0..vertices.len() {
            write_vertex(svg_output, vertices, vi)?;
        }
        Ok(())
    }
}

impl<C: Float> SvgElement<VertexBuffer<C>> for [MonotoneChain] {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>, vertices: &VertexBuffer<C>) -> fmt::Result {
        for (i, chain) in self.iter().enumerate() {
            write_polygon(svg_output, vertices, chain.vertices(), palette(i), false)?;
        }
        Ok(())
    }
}

impl<C: Float> SvgElement<VertexBuffer<C>> for [Triangle] {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>, vertices: &VertexBuffer<C>) -> fmt::Result {
        for (i, triangle) in self.iter().enumerate() {
            write_polygon(svg_output, vertices, triangle, palette(i), false)?;
        }
        Ok(())
    }
}
