use crate::config::ShowcaseConfig;
use crate::placement::{Placement, ShowcaseFrame};

/// Errors from producing renderer output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads a composed frame and the showcase configuration and
/// produces output. It never touches the catalog.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &ShowcaseFrame, config: &ShowcaseConfig) -> Self::Output;
}

/// Human-readable listing of a frame, one placement per line.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }

    fn line(out: &mut String, p: &Placement, config: &ShowcaseConfig) {
        let side = p
            .direction
            .map(|d| format!("{d} [{}]", d.index()))
            .unwrap_or_else(|| "centre".into());
        let pos = p.transform.position;
        out.push_str(&format!(
            "  {side:<8} {} rot=({:.1}, {:.1}, {:.1}) pos=({:.2}, {:.2}, {:.2}) path={}\n",
            p.mesh,
            p.rotation.x,
            p.rotation.y,
            p.rotation.z,
            pos.x,
            pos.y,
            pos.z,
            config.mesh_path(&p.mesh).display()
        ));
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &ShowcaseFrame, config: &ShowcaseConfig) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Prototype {} ({} neighbors) ===\n",
            frame.index,
            frame.neighbors.len()
        ));
        for p in frame.placements() {
            Self::line(&mut out, p, config);
        }
        out
    }
}

/// Frame as a single JSON document, with resolved mesh paths.
#[derive(Debug, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

#[derive(serde::Serialize)]
struct JsonFrame<'a> {
    #[serde(flatten)]
    frame: &'a ShowcaseFrame,
    paths: Vec<String>,
}

impl Renderer for JsonRenderer {
    type Output = Result<String, RenderError>;

    fn render(&self, frame: &ShowcaseFrame, config: &ShowcaseConfig) -> Self::Output {
        let doc = JsonFrame {
            frame,
            paths: frame
                .placements()
                .map(|p| config.mesh_path(&p.mesh).display().to_string())
                .collect(),
        };
        let text = if self.pretty {
            serde_json::to_string_pretty(&doc)?
        } else {
            serde_json::to_string(&doc)?
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileview_catalog::Catalog;

    const DOC: &str = "
- mesh: a.glb
  neighbors:
    2: [{ mesh: b.glb, rotation: { y: 90 } }]
- mesh: b.glb
";

    fn frame(index: usize) -> ShowcaseFrame {
        let catalog = Catalog::from_yaml_str(DOC).unwrap();
        ShowcaseFrame::compose(&catalog, index, &ShowcaseConfig::default()).unwrap()
    }

    #[test]
    fn debug_renderer_lists_placements() {
        let output = DebugTextRenderer::new().render(&frame(0), &ShowcaseConfig::default());

        assert!(output.contains("Prototype 0 (1 neighbors)"));
        assert!(output.contains("centre"));
        assert!(output.contains("+y [2]"));
        assert!(output.contains("pos=(0.00, 3.00, 0.00)"));
        assert!(output.contains("rot=(0.0, 90.0, 0.0)"));
        assert!(output.contains("models/b.glb"));
    }

    #[test]
    fn debug_renderer_lone_prototype() {
        let output = DebugTextRenderer::new().render(&frame(1), &ShowcaseConfig::default());
        assert!(output.contains("Prototype 1 (0 neighbors)"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn json_renderer_emits_frame_and_paths() {
        let text = JsonRenderer::default()
            .render(&frame(0), &ShowcaseConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["index"], 0);
        assert_eq!(value["center"]["mesh"], "a.glb");
        assert_eq!(value["neighbors"][0]["direction"], 2);
        assert_eq!(value["paths"].as_array().unwrap().len(), 2);
    }
}
