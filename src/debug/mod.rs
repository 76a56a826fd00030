//! Step by step SVG snapshots of a triangulation, enabled through environment variables.
//!
//! `MONOTRI_SVG_OUTPUT_PATH` names the output directory and `MONOTRI_SVG_OUTPUT_LEVEL` selects how much is written:
//! `1` only the triangles, `2` the contours, the monotone polygons and a `state.txt` dump as well, `3` every sweep event too.
//! `MONOTRI_SVG_HIDE_LABELS` omits the vertex labels.

pub(crate) mod env;
pub(crate) mod svg;
mod tree;

use num_traits::Float;

use crate::{Triangulation, inputs::VertexBuffer};
use svg::{SvgContext, SvgElement, SvgOutput, SvgOutputLevel, SvgTriangulationStyle};

/// Writes snapshots into numbered step directories. Failures to write are ignored.
pub(crate) struct Tracer {
    svg_context: Option<SvgContext>,
    current_step: u32,
    current_substep: u32,
}

impl Tracer {
    pub fn new<C: Float>(vertices: &VertexBuffer<C>) -> Self {
        Self {
            svg_context: SvgContext::from_env(vertices),
            current_step: 0,
            current_substep: 0,
        }
    }

    pub fn output_svg<State: ?Sized, E: SvgElement<State> + ?Sized>(&mut self, element: &E, state: &State, style: SvgTriangulationStyle, level: SvgOutputLevel) {
        if let Some(svg_context) = &self.svg_context {
            if svg_context.output_level >= level {
                // Make the directory for this step if this is the first svg
                if self.current_substep == 0 {
                    let path = svg_context.output_path.join(format!("{:03}", self.current_step));
                    if std::fs::create_dir_all(path).is_err() {
                        return;
                    }
                }

                let mut svg = SvgOutput::new(svg_context, style);
                let _ = svg.append_element(element, state);

                let path: std::path::PathBuf = format!("{:03}", self.current_step).into();
                let path = path.join(format!("{:03}.svg", self.current_substep));
                let _ = svg.save(path);

                self.current_substep += 1;
            }
        }
    }

    pub fn advance_step(&mut self) {
        if self.current_substep > 0 {
            self.current_step += 1;
            self.current_substep = 0;
        }
    }

    /// Dumps the decomposition as a text tree into `state.txt`
    pub fn write_state(&self, triangulation: &Triangulation) {
        if let Some(svg_context) = &self.svg_context {
            if svg_context.output_level >= SvgOutputLevel::MajorSteps {
                let path = svg_context.output_path.join("state.txt");
                if let Ok(f) = std::fs::File::create(path) {
                    let mut w = std::io::BufWriter::new(&f);
                    let _ = tree::write_triangulation(&mut w, triangulation);
                }
            }
        }
    }
}
