//! SVG-Dokument im Speicher: Definitionen (Pfeilspitze) + Hauptgruppe.
//!
//! Die UI zeichnet die Elemente direkt, der Export serialisiert sie mit quick-xml.

use super::canvas::{ArcGeometry, ArcHandle, Canvas};
use super::path::PathBuilder;
use crate::core::Axis;
use crate::shared::TutorOptions;
use anyhow::Result;
use glam::Vec2;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const ARROW_ID: &str = "arrow";
const MAIN_GROUP_ID: &str = "svg-main";

/// Geometrie der Pfeilspitze (in Einheiten der Strichstärke).
pub const ARROW_TIP: Vec2 = Vec2::new(8.0, 2.0);
/// Ausdehnung des Marker-Viewports.
pub const ARROW_MARKER_SIZE: f32 = 10.0;

/// Offener Pfeil `M 0 0 L 8 2 L 0 4`, Referenzpunkt ist die Spitze.
pub fn arrow_path() -> PathBuilder {
    PathBuilder::new()
        .move_to(0.0, 0.0)
        .line_to(ARROW_TIP.x, ARROW_TIP.y)
        .line_to(0.0, 2.0 * ARROW_TIP.y)
}

/// Darstellungsparameter der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgStyle {
    pub arc_color: [f32; 4],
    pub arc_stroke_width: f32,
    pub font_size: f32,
}

impl SvgStyle {
    pub fn from_options(options: &TutorOptions) -> Self {
        Self {
            arc_color: options.arc_color,
            arc_stroke_width: options.arc_stroke_width,
            font_size: options.label_font_size,
        }
    }
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self::from_options(&TutorOptions::default())
    }
}

/// Gezeichneter Bogen mit Pfeilspitze am Ende.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcElement {
    pub geometry: ArcGeometry,
    pub path: PathBuilder,
}

/// Zentrierte Beschriftung.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub text: String,
    pub position: Vec2,
}

/// Element der Hauptgruppe.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgElement {
    Arc(ArcElement),
    Text(TextElement),
}

/// Canvas-Implementierung auf einem SVG-Dokumentmodell.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    axis: Axis,
    style: SvgStyle,
    size: [f32; 2],
    generation: u32,
    elements: Vec<SvgElement>,
}

impl SvgCanvas {
    pub fn new(axis: Axis, style: SvgStyle, size: [f32; 2]) -> Self {
        Self {
            axis,
            style,
            size,
            generation: 0,
            elements: Vec::new(),
        }
    }

    /// Canvas gemäß den Optionen (Zahlenstrahl, Farben, Größe).
    pub fn from_options(options: &TutorOptions) -> Self {
        Self::new(
            options.axis,
            SvgStyle::from_options(options),
            options.board_size,
        )
    }

    pub fn axis(&self) -> &Axis {
        &self.axis
    }

    pub fn style(&self) -> &SvgStyle {
        &self.style
    }

    pub fn size(&self) -> [f32; 2] {
        self.size
    }

    /// Elemente der Hauptgruppe in Zeichenreihenfolge.
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// Serialisiert das komplette Dokument als eigenständige SVG-Datei.
    pub fn to_svg_string(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let width = self.size[0].to_string();
        let height = self.size[1].to_string();
        let mut svg = BytesStart::new("svg");
        svg.push_attribute(("xmlns", SVG_NS));
        svg.push_attribute(("width", width.as_str()));
        svg.push_attribute(("height", height.as_str()));
        writer.write_event(Event::Start(svg))?;

        self.write_defs(&mut writer)?;

        let mut main = BytesStart::new("g");
        main.push_attribute(("id", MAIN_GROUP_ID));
        if self.elements.is_empty() {
            writer.write_event(Event::Empty(main))?;
        } else {
            writer.write_event(Event::Start(main))?;
            for element in &self.elements {
                match element {
                    SvgElement::Arc(arc) => self.write_arc(&mut writer, arc)?,
                    SvgElement::Text(text) => self.write_text(&mut writer, text)?,
                }
            }
            writer.write_event(Event::End(BytesEnd::new("g")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("svg")))?;
        Ok(String::from_utf8(writer.into_inner())?)
    }

    fn write_defs(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("defs")))?;

        let size = ARROW_MARKER_SIZE.to_string();
        let ref_x = ARROW_TIP.x.to_string();
        let ref_y = ARROW_TIP.y.to_string();
        let mut marker = BytesStart::new("marker");
        marker.push_attribute(("id", ARROW_ID));
        marker.push_attribute(("markerWidth", size.as_str()));
        marker.push_attribute(("markerHeight", size.as_str()));
        marker.push_attribute(("orient", "auto"));
        marker.push_attribute(("markerUnits", "strokeWidth"));
        marker.push_attribute(("refX", ref_x.as_str()));
        marker.push_attribute(("refY", ref_y.as_str()));
        writer.write_event(Event::Start(marker))?;
        writer.write_event(Event::Empty(self.stroke_path(&arrow_path())))?;
        writer.write_event(Event::End(BytesEnd::new("marker")))?;

        writer.write_event(Event::End(BytesEnd::new("defs")))?;
        Ok(())
    }

    fn write_arc(&self, writer: &mut Writer<Vec<u8>>, arc: &ArcElement) -> Result<()> {
        let mut path = self.stroke_path(&arc.path);
        path.push_attribute(("marker-end", "url(#arrow)"));
        writer.write_event(Event::Empty(path))?;
        Ok(())
    }

    fn write_text(&self, writer: &mut Writer<Vec<u8>>, text: &TextElement) -> Result<()> {
        let x = text.position.x.to_string();
        let y = text.position.y.to_string();
        let font_size = self.style.font_size.to_string();
        let mut elem = BytesStart::new("text");
        elem.push_attribute(("text-anchor", "middle"));
        elem.push_attribute(("fill", "black"));
        elem.push_attribute(("font-size", font_size.as_str()));
        elem.push_attribute(("x", x.as_str()));
        elem.push_attribute(("y", y.as_str()));
        writer.write_event(Event::Start(elem))?;
        writer.write_event(Event::Text(BytesText::new(&text.text)))?;
        writer.write_event(Event::End(BytesEnd::new("text")))?;
        Ok(())
    }

    fn stroke_path(&self, d: &PathBuilder) -> BytesStart<'static> {
        let mut path = BytesStart::new("path");
        path.push_attribute(("stroke", css_color(self.style.arc_color).as_str()));
        path.push_attribute((
            "stroke-width",
            self.style.arc_stroke_width.to_string().as_str(),
        ));
        path.push_attribute(("fill-opacity", "0"));
        path.push_attribute(("d", d.serialize().as_str()));
        path
    }
}

impl Canvas for SvgCanvas {
    fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.elements.clear();
    }

    fn draw_arc(&mut self, start: i32, end: i32) -> ArcHandle {
        let geometry = ArcGeometry::between(&self.axis, start, end);
        self.elements.push(SvgElement::Arc(ArcElement {
            geometry,
            path: geometry.to_path(),
        }));
        ArcHandle {
            generation: self.generation,
            index: self.elements.len() - 1,
        }
    }

    fn midpoint(&self, arc: ArcHandle) -> Option<Vec2> {
        if arc.generation != self.generation {
            return None;
        }
        match self.elements.get(arc.index) {
            Some(SvgElement::Arc(element)) => Some(element.geometry.midpoint()),
            _ => None,
        }
    }

    fn draw_text(&mut self, text: &str, position: Vec2) {
        self.elements.push(SvgElement::Text(TextElement {
            text: text.to_owned(),
            position,
        }));
    }
}

/// RGBA-Farbe als CSS-Hexwert (Alpha wird ignoriert).
fn css_color(rgba: [f32; 4]) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(rgba[0]),
        channel(rgba[1]),
        channel(rgba[2])
    )
}
