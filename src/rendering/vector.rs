//! Vector realization of scenes.
//!
//! Emits SVG markup with the recolored logo embedded as a base64 data URI,
//! shape primitives for the background, and a text primitive for the
//! wordmark. The `viewBox` always equals the canvas size.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::color::Fill;
use crate::layout::{Background, Canvas, Scene, TextRun};

const XMLNS: &str = "http://www.w3.org/2000/svg";
const GRADIENT_ID: &str = "bg-gradient";

/// Wrap PNG bytes in a `data:image/png;base64,` URI.
pub fn data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

/// Emit the SVG document for a scene. `logo_href` is the already-encoded
/// data URI of the recolored logo raster.
pub fn render(scene: &Scene, logo_href: &str) -> String {
    let Canvas { width, height } = scene.canvas;
    let mut body = Vec::new();

    match &scene.background {
        Background::None => {}
        Background::Rect(Fill::Solid(color)) => {
            body.push(format!(
                "<rect width=\"{width}\" height=\"{height}\" fill=\"{}\"/>",
                color.css()
            ));
        }
        Background::Rect(Fill::LinearGradient { start, end }) => {
            body.push(format!(
                "<defs>\n<linearGradient id=\"{GRADIENT_ID}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"0%\">\n\
                 <stop offset=\"0%\" stop-color=\"{}\"/>\n\
                 <stop offset=\"100%\" stop-color=\"{}\"/>\n\
                 </linearGradient>\n</defs>",
                start.css(),
                end.css()
            ));
            body.push(format!(
                "<rect width=\"{width}\" height=\"{height}\" fill=\"url(#{GRADIENT_ID})\"/>"
            ));
        }
        Background::Circle { cx, cy, radius, fill } => {
            let fill = match fill {
                Some(color) => color.css(),
                None => "none".to_string(),
            };
            body.push(format!(
                "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{radius}\" fill=\"{fill}\"/>"
            ));
        }
    }

    body.push(format!(
        "<image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" href=\"{logo_href}\"/>",
        scene.logo.x, scene.logo.y, scene.logo.width, scene.logo.height
    ));

    if let Some(run) = &scene.text {
        body.push(text_element(run));
    }

    format!(
        "<svg width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" xmlns=\"{XMLNS}\">\n{}\n</svg>\n",
        body.join("\n")
    )
}

/// A standalone document containing only the text run, used by the raster
/// renderer to rasterize the wordmark.
pub(crate) fn text_document(run: &TextRun, canvas: Canvas) -> String {
    format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"{XMLNS}\">\n{}\n</svg>\n",
        text_element(run),
        w = canvas.width,
        h = canvas.height
    )
}

fn text_element(run: &TextRun) -> String {
    format!(
        "<text x=\"{}\" y=\"{}\" font-family=\"Arial, sans-serif\" font-size=\"{}\" \
         font-weight=\"bold\" fill=\"{}\" dominant-baseline=\"middle\">{}</text>",
        run.x,
        run.y,
        run.font_size,
        run.fill.css(),
        escape_text(&run.content)
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{self, Color};
    use crate::layout::{self, Canvas, LayoutConfig};

    fn parse_view_box(svg: &str) -> (u32, u32) {
        let start = svg.find("viewBox=\"").expect("viewBox present") + "viewBox=\"".len();
        let rest = &svg[start..];
        let end = rest.find('"').unwrap();
        let parts: Vec<u32> = rest[..end]
            .split_whitespace()
            .map(|p| p.parse().unwrap())
            .collect();
        assert_eq!(&parts[..2], &[0, 0]);
        (parts[2], parts[3])
    }

    #[test]
    fn view_box_round_trips_canvas_size() {
        let config = LayoutConfig {
            canvas: Canvas::new(1500, 500),
            background: Some(Fill::Solid(color::BLACK)),
            logo_color: None,
            text_color: Some(color::WHITE),
        };
        let scene = layout::layout_banner(&config, "TOS", (512, 512));
        let svg = render(&scene, "data:image/png;base64,AAAA");
        assert_eq!(parse_view_box(&svg), (1500, 500));
    }

    #[test]
    fn transparent_banner_emits_no_rect() {
        let config = LayoutConfig {
            canvas: Canvas::new(1500, 500),
            background: None,
            logo_color: None,
            text_color: Some(color::WHITE),
        };
        let scene = layout::layout_banner(&config, "TOS", (512, 512));
        let svg = render(&scene, "data:image/png;base64,AAAA");
        assert!(!svg.contains("<rect"));
        assert!(svg.contains("<text"));
    }

    #[test]
    fn transparent_circle_keeps_none_fill() {
        let config = LayoutConfig {
            canvas: Canvas::square(1000),
            background: None,
            logo_color: Some(color::WHITE),
            text_color: None,
        };
        let scene = layout::layout_icon_circle(&config, (512, 512)).unwrap();
        let svg = render(&scene, "data:image/png;base64,AAAA");
        assert!(svg.contains("<circle cx=\"500\" cy=\"500\" r=\"499\" fill=\"none\"/>"));
    }

    #[test]
    fn gradient_background_declares_defs() {
        let config = LayoutConfig {
            canvas: Canvas::new(1500, 500),
            background: Some(Fill::LinearGradient {
                start: color::GRADIENT_START,
                end: color::GRADIENT_END,
            }),
            logo_color: None,
            text_color: Some(color::WHITE),
        };
        let scene = layout::layout_banner(&config, "TOS", (512, 512));
        let svg = render(&scene, "data:image/png;base64,AAAA");
        assert!(svg.contains("<linearGradient id=\"bg-gradient\""));
        assert!(svg.contains("fill=\"url(#bg-gradient)\""));
    }

    #[test]
    fn data_uri_has_png_prefix() {
        let uri = data_uri(&[137, 80, 78, 71]);
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn text_is_escaped() {
        let run = TextRun {
            content: "A&B <C>".into(),
            x: 0,
            y: 0,
            font_size: 10,
            fill: Color::rgb(0, 0, 0),
        };
        assert!(text_element(&run).contains("A&amp;B &lt;C&gt;"));
    }
}
