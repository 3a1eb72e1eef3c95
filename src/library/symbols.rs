//! Schematic symbols as primitive sets in a normalised frame.
//!
//! Two-terminal parts live in a 2.4 × 1.0 (or 2.0 × 1.0) frame with their
//! terminals on the horizontal centre line; three-terminal semiconductors use
//! a unit square with the control terminal on the left edge. Stroke widths
//! are nominal point sizes and are not scaled with the symbol.

use crate::geometry::{Color, Point, Primitive, Rect, Shape, Style};

/// Thin stroke for leads and marks.
pub const LEAD: f64 = 0.8;
/// Regular stroke for outlines.
pub const BODY: f64 = 1.0;
/// Heavy stroke for plates, bars and channels.
pub const HEAVY: f64 = 1.6;

/// Identifier of a catalog symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolId {
    /// Fixed resistor (IEC box).
    Resistor,
    /// Rectifier / general purpose diode.
    Diode,
    /// Zener diode (also used for unidirectional TVS).
    Zener,
    /// Schottky diode.
    Schottky,
    /// Light emitting diode.
    Led,
    /// Photodiode.
    Photodiode,
    /// Bidirectional TVS diode.
    TvsBidirectional,
    /// Tunnel diode.
    Tunnel,
    /// Varactor (varicap) diode.
    Varactor,
    /// Non-polarised capacitor.
    Capacitor,
    /// Polarised capacitor.
    CapacitorPolarised,
    /// Variable capacitor.
    CapacitorVariable,
    /// Trimmer capacitor.
    CapacitorTrimmer,
    /// NPN bipolar transistor.
    Npn,
    /// PNP bipolar transistor.
    Pnp,
    /// NPN Darlington pair.
    DarlingtonNpn,
    /// PNP Darlington pair.
    DarlingtonPnp,
    /// N-channel enhancement MOSFET.
    NmosEnhancement,
    /// P-channel enhancement MOSFET.
    PmosEnhancement,
    /// N-channel depletion MOSFET.
    NmosDepletion,
    /// P-channel depletion MOSFET.
    PmosDepletion,
    /// N-channel JFET.
    JfetN,
    /// P-channel JFET.
    JfetP,
    /// N-channel IGBT.
    IgbtN,
    /// P-channel IGBT.
    IgbtP,
    /// Silicon controlled rectifier.
    Scr,
    /// Triac.
    Triac,
    /// Generic integrated circuit block.
    IcBlock,
}

impl SymbolId {
    /// Every symbol the built-in catalog provides.
    pub const ALL: [Self; 28] = [
        Self::Resistor,
        Self::Diode,
        Self::Zener,
        Self::Schottky,
        Self::Led,
        Self::Photodiode,
        Self::TvsBidirectional,
        Self::Tunnel,
        Self::Varactor,
        Self::Capacitor,
        Self::CapacitorPolarised,
        Self::CapacitorVariable,
        Self::CapacitorTrimmer,
        Self::Npn,
        Self::Pnp,
        Self::DarlingtonNpn,
        Self::DarlingtonPnp,
        Self::NmosEnhancement,
        Self::PmosEnhancement,
        Self::NmosDepletion,
        Self::PmosDepletion,
        Self::JfetN,
        Self::JfetP,
        Self::IgbtN,
        Self::IgbtP,
        Self::Scr,
        Self::Triac,
        Self::IcBlock,
    ];

    /// Stable lowercase name, used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Resistor => "resistor",
            Self::Diode => "diode",
            Self::Zener => "zener",
            Self::Schottky => "schottky",
            Self::Led => "led",
            Self::Photodiode => "photodiode",
            Self::TvsBidirectional => "tvs_bidirectional",
            Self::Tunnel => "tunnel",
            Self::Varactor => "varactor",
            Self::Capacitor => "capacitor",
            Self::CapacitorPolarised => "capacitor_polarised",
            Self::CapacitorVariable => "capacitor_variable",
            Self::CapacitorTrimmer => "capacitor_trimmer",
            Self::Npn => "npn",
            Self::Pnp => "pnp",
            Self::DarlingtonNpn => "darlington_npn",
            Self::DarlingtonPnp => "darlington_pnp",
            Self::NmosEnhancement => "nmos_enhancement",
            Self::PmosEnhancement => "pmos_enhancement",
            Self::NmosDepletion => "nmos_depletion",
            Self::PmosDepletion => "pmos_depletion",
            Self::JfetN => "jfet_n",
            Self::JfetP => "jfet_p",
            Self::IgbtN => "igbt_n",
            Self::IgbtP => "igbt_p",
            Self::Scr => "scr",
            Self::Triac => "triac",
            Self::IcBlock => "ic_block",
        }
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named connection point on a symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Terminal name (`A`, `K`, `B`, `C`, `E`, `G`, `D`, `S`, ...).
    pub name: &'static str,
    /// Position in the symbol frame.
    pub point: Point,
}

/// A symbol drawn in its own normalised frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolDefinition {
    /// Which symbol this is.
    pub id: SymbolId,
    /// Extent of the normalised frame, origin at the top-left.
    pub frame: Rect,
    /// Primitives in frame coordinates, painted in order.
    pub primitives: Vec<Primitive>,
    /// Lead connection points.
    pub anchors: Vec<Anchor>,
}

impl SymbolDefinition {
    /// Widest stroke used by any primitive.
    #[must_use]
    pub fn max_stroke(&self) -> f64 {
        self.primitives
            .iter()
            .filter_map(|p| p.style.stroke.map(|s| s.width))
            .fold(0.0, f64::max)
    }

    /// Looks up an anchor by terminal name.
    #[must_use]
    pub fn anchor(&self, name: &str) -> Option<Point> {
        self.anchors
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.point)
    }
}

/// Builds the definition for `id`.
#[must_use]
pub fn build(id: SymbolId) -> SymbolDefinition {
    match id {
        SymbolId::Resistor => resistor(),
        SymbolId::Diode
        | SymbolId::Zener
        | SymbolId::Schottky
        | SymbolId::Led
        | SymbolId::Photodiode
        | SymbolId::Tunnel
        | SymbolId::Varactor => diode(id),
        SymbolId::TvsBidirectional => tvs_bidirectional(),
        SymbolId::Capacitor | SymbolId::CapacitorVariable | SymbolId::CapacitorTrimmer => {
            capacitor(id)
        }
        SymbolId::CapacitorPolarised => capacitor_polarised(),
        SymbolId::Npn | SymbolId::Pnp => bjt(id, id == SymbolId::Npn),
        SymbolId::DarlingtonNpn | SymbolId::DarlingtonPnp => {
            darlington(id, id == SymbolId::DarlingtonNpn)
        }
        SymbolId::NmosEnhancement
        | SymbolId::PmosEnhancement
        | SymbolId::NmosDepletion
        | SymbolId::PmosDepletion => mosfet(id),
        SymbolId::JfetN | SymbolId::JfetP => jfet(id, id == SymbolId::JfetN),
        SymbolId::IgbtN | SymbolId::IgbtP => igbt(id, id == SymbolId::IgbtN),
        SymbolId::Scr => scr(),
        SymbolId::Triac => triac(),
        SymbolId::IcBlock => ic_block(),
    }
}

const fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

struct Builder {
    id: SymbolId,
    frame: Rect,
    primitives: Vec<Primitive>,
    anchors: Vec<Anchor>,
}

impl Builder {
    const fn new(id: SymbolId, width: f64, height: f64) -> Self {
        Self {
            id,
            frame: Rect::new(0.0, 0.0, width, height),
            primitives: Vec::new(),
            anchors: Vec::new(),
        }
    }

    fn push(&mut self, shape: Shape, style: Style) -> &mut Self {
        self.primitives.push(Primitive::new(shape, style));
        self
    }

    fn line(&mut self, from: Point, to: Point, width: f64) -> &mut Self {
        self.push(
            Shape::Line { from, to },
            Style::stroked(Color::BLACK, width),
        )
    }

    fn polyline(&mut self, points: &[Point], width: f64) -> &mut Self {
        self.push(
            Shape::Polyline {
                points: points.to_vec(),
                closed: false,
            },
            Style::stroked(Color::BLACK, width),
        )
    }

    fn solid(&mut self, points: &[Point]) -> &mut Self {
        self.push(
            Shape::Polyline {
                points: points.to_vec(),
                closed: true,
            },
            Style::filled(Color::BLACK),
        )
    }

    fn circle(&mut self, centre: Point, radius: f64, width: f64) -> &mut Self {
        self.push(
            Shape::Circle { centre, radius },
            Style::stroked(Color::BLACK, width),
        )
    }

    fn dot(&mut self, centre: Point, radius: f64) -> &mut Self {
        self.push(Shape::Circle { centre, radius }, Style::filled(Color::BLACK))
    }

    fn rect(&mut self, rect: Rect, width: f64) -> &mut Self {
        self.push(
            Shape::Rect {
                rect,
                corner_radius: 0.0,
            },
            Style::stroked(Color::BLACK, width),
        )
    }

    fn arc(&mut self, centre: Point, radius: f64, start: f64, sweep: f64, width: f64) -> &mut Self {
        self.push(
            Shape::Arc {
                centre,
                radius,
                start,
                sweep,
            },
            Style::stroked(Color::BLACK, width),
        )
    }

    /// Filled arrow head with its tip at `tip`, pointing along `from -> tip`.
    fn head(&mut self, from: Point, tip: Point, length: f64, half_width: f64) -> &mut Self {
        let (dx, dy) = (tip.x - from.x, tip.y - from.y);
        let norm = dx.hypot(dy);
        if norm <= f64::EPSILON {
            return self;
        }
        let (ux, uy) = (dx / norm, dy / norm);
        let base = tip.offset(-ux * length, -uy * length);
        let (nx, ny) = (-uy * half_width, ux * half_width);
        self.solid(&[tip, base.offset(nx, ny), base.offset(-nx, -ny)])
    }

    /// Shaft plus head.
    fn arrow(&mut self, from: Point, tip: Point, length: f64, half_width: f64) -> &mut Self {
        let norm = (tip.x - from.x).hypot(tip.y - from.y);
        let shaft_end = from.lerp(tip, 1.0 - length / norm);
        self.line(from, shaft_end, LEAD);
        self.head(from, tip, length, half_width)
    }

    fn anchor(&mut self, name: &'static str, point: Point) -> &mut Self {
        self.anchors.push(Anchor { name, point });
        self
    }

    fn finish(self) -> SymbolDefinition {
        SymbolDefinition {
            id: self.id,
            frame: self.frame,
            primitives: self.primitives,
            anchors: self.anchors,
        }
    }
}

fn resistor() -> SymbolDefinition {
    let mut b = Builder::new(SymbolId::Resistor, 2.4, 1.0);
    b.line(p(0.0, 0.5), p(0.7, 0.5), LEAD)
        .rect(Rect::new(0.7, 0.3, 1.0, 0.4), BODY)
        .line(p(1.7, 0.5), p(2.4, 0.5), LEAD)
        .anchor("1", p(0.0, 0.5))
        .anchor("2", p(2.4, 0.5));
    b.finish()
}

fn diode(id: SymbolId) -> SymbolDefinition {
    let mut b = Builder::new(id, 2.4, 1.0);
    let cathode_lead_start = if id == SymbolId::Varactor { 1.62 } else { 1.5 };

    b.line(p(0.0, 0.5), p(0.9, 0.5), LEAD)
        .solid(&[p(0.9, 0.2), p(0.9, 0.8), p(1.5, 0.5)])
        .line(p(cathode_lead_start, 0.5), p(2.4, 0.5), LEAD)
        .anchor("A", p(0.0, 0.5))
        .anchor("K", p(2.4, 0.5));

    match id {
        SymbolId::Zener => {
            b.polyline(&[p(1.35, 0.11), p(1.5, 0.2), p(1.5, 0.8), p(1.65, 0.89)], HEAVY);
        }
        SymbolId::Schottky => {
            b.polyline(
                &[
                    p(1.68, 0.29),
                    p(1.68, 0.2),
                    p(1.5, 0.2),
                    p(1.5, 0.8),
                    p(1.32, 0.8),
                    p(1.32, 0.71),
                ],
                HEAVY,
            );
        }
        SymbolId::Tunnel => {
            b.polyline(&[p(1.35, 0.2), p(1.5, 0.2), p(1.5, 0.8), p(1.35, 0.8)], HEAVY);
        }
        SymbolId::Varactor => {
            b.line(p(1.5, 0.2), p(1.5, 0.8), HEAVY)
                .line(p(1.62, 0.2), p(1.62, 0.8), HEAVY);
        }
        _ => {
            b.line(p(1.5, 0.2), p(1.5, 0.8), HEAVY);
        }
    }

    // light arrows: emitted for LEDs, received for photodiodes
    let rays = [(p(0.95, 0.18), p(1.2, 0.03)), (p(1.15, 0.18), p(1.4, 0.03))];
    match id {
        SymbolId::Led => {
            for (near, far) in rays {
                b.arrow(near, far, 0.09, 0.04);
            }
        }
        SymbolId::Photodiode => {
            for (near, far) in rays {
                b.arrow(far, near, 0.09, 0.04);
            }
        }
        _ => {}
    }

    b.finish()
}

fn tvs_bidirectional() -> SymbolDefinition {
    let mut b = Builder::new(SymbolId::TvsBidirectional, 2.4, 1.0);
    b.line(p(0.0, 0.5), p(0.7, 0.5), LEAD)
        .solid(&[p(0.7, 0.25), p(0.7, 0.75), p(1.2, 0.5)])
        .solid(&[p(1.7, 0.25), p(1.7, 0.75), p(1.2, 0.5)])
        .polyline(&[p(1.08, 0.17), p(1.2, 0.25), p(1.2, 0.75), p(1.32, 0.83)], HEAVY)
        .line(p(1.7, 0.5), p(2.4, 0.5), LEAD)
        .anchor("1", p(0.0, 0.5))
        .anchor("2", p(2.4, 0.5));
    b.finish()
}

fn capacitor(id: SymbolId) -> SymbolDefinition {
    let mut b = Builder::new(id, 2.0, 1.0);
    b.line(p(0.0, 0.5), p(0.92, 0.5), LEAD)
        .line(p(0.92, 0.2), p(0.92, 0.8), HEAVY)
        .line(p(1.08, 0.2), p(1.08, 0.8), HEAVY)
        .line(p(1.08, 0.5), p(2.0, 0.5), LEAD)
        .anchor("1", p(0.0, 0.5))
        .anchor("2", p(2.0, 0.5));

    match id {
        SymbolId::CapacitorVariable => {
            b.arrow(p(0.65, 0.9), p(1.35, 0.08), 0.1, 0.05);
        }
        SymbolId::CapacitorTrimmer => {
            b.line(p(0.65, 0.9), p(1.35, 0.1), LEAD)
                .line(p(1.274, 0.035), p(1.426, 0.165), BODY);
        }
        _ => {}
    }
    b.finish()
}

fn capacitor_polarised() -> SymbolDefinition {
    let mut b = Builder::new(SymbolId::CapacitorPolarised, 2.0, 1.0);
    b.line(p(0.0, 0.5), p(0.9, 0.5), LEAD)
        .line(p(0.9, 0.2), p(0.9, 0.8), HEAVY)
        .arc(p(1.68, 0.5), 0.6, 150.0, 60.0, HEAVY)
        .line(p(1.08, 0.5), p(2.0, 0.5), LEAD)
        .line(p(0.62, 0.22), p(0.78, 0.22), LEAD)
        .line(p(0.7, 0.14), p(0.7, 0.3), LEAD)
        .anchor("+", p(0.0, 0.5))
        .anchor("-", p(2.0, 0.5));
    b.finish()
}

/// Envelope circle shared by the discrete three-terminal symbols.
fn envelope(b: &mut Builder) {
    b.circle(p(0.56, 0.5), 0.4, BODY);
}

fn bjt(id: SymbolId, npn: bool) -> SymbolDefinition {
    let mut b = Builder::new(id, 1.0, 1.0);
    envelope(&mut b);
    b.line(p(0.0, 0.5), p(0.46, 0.5), LEAD)
        .line(p(0.46, 0.22), p(0.46, 0.78), HEAVY)
        .polyline(&[p(0.46, 0.38), p(0.74, 0.14), p(0.74, 0.0)], LEAD)
        .polyline(&[p(0.46, 0.62), p(0.74, 0.86), p(0.74, 1.0)], LEAD);
    emitter_arrow(&mut b, p(0.46, 0.62), p(0.74, 0.86), npn);
    b.anchor("B", p(0.0, 0.5))
        .anchor("C", p(0.74, 0.0))
        .anchor("E", p(0.74, 1.0));
    b.finish()
}

/// Arrow head on an emitter diagonal: outward for N types, inward for P.
fn emitter_arrow(b: &mut Builder, bar_end: Point, far_end: Point, outward: bool) {
    if outward {
        b.head(bar_end, bar_end.lerp(far_end, 0.85), 0.12, 0.055);
    } else {
        b.head(far_end, far_end.lerp(bar_end, 0.7), 0.12, 0.055);
    }
}

fn darlington(id: SymbolId, npn: bool) -> SymbolDefinition {
    let mut b = Builder::new(id, 1.0, 1.0);
    envelope(&mut b);
    // input stage
    b.line(p(0.0, 0.45), p(0.3, 0.45), LEAD)
        .line(p(0.3, 0.3), p(0.3, 0.6), HEAVY)
        .polyline(&[p(0.3, 0.38), p(0.45, 0.26), p(0.74, 0.26)], LEAD)
        .polyline(&[p(0.3, 0.52), p(0.42, 0.62), p(0.52, 0.62)], LEAD);
    emitter_arrow(&mut b, p(0.3, 0.52), p(0.42, 0.62), npn);
    // output stage
    b.line(p(0.52, 0.5), p(0.52, 0.82), HEAVY)
        .polyline(&[p(0.52, 0.58), p(0.74, 0.42), p(0.74, 0.0)], LEAD)
        .polyline(&[p(0.52, 0.74), p(0.74, 0.88), p(0.74, 1.0)], LEAD);
    emitter_arrow(&mut b, p(0.52, 0.74), p(0.74, 0.88), npn);
    b.anchor("B", p(0.0, 0.45))
        .anchor("C", p(0.74, 0.0))
        .anchor("E", p(0.74, 1.0));
    b.finish()
}

fn mosfet(id: SymbolId) -> SymbolDefinition {
    let n_channel = matches!(id, SymbolId::NmosEnhancement | SymbolId::NmosDepletion);
    let enhancement = matches!(id, SymbolId::NmosEnhancement | SymbolId::PmosEnhancement);

    let mut b = Builder::new(id, 1.0, 1.0);
    envelope(&mut b);
    b.line(p(0.0, 0.76), p(0.34, 0.76), LEAD)
        .line(p(0.34, 0.24), p(0.34, 0.76), BODY);

    if enhancement {
        b.line(p(0.44, 0.2), p(0.44, 0.34), HEAVY)
            .line(p(0.44, 0.43), p(0.44, 0.57), HEAVY)
            .line(p(0.44, 0.66), p(0.44, 0.8), HEAVY);
    } else {
        b.line(p(0.44, 0.2), p(0.44, 0.8), HEAVY);
    }

    b.polyline(&[p(0.44, 0.27), p(0.74, 0.27), p(0.74, 0.0)], LEAD)
        .polyline(&[p(0.44, 0.73), p(0.74, 0.73), p(0.74, 1.0)], LEAD)
        .polyline(&[p(0.44, 0.5), p(0.74, 0.5), p(0.74, 0.73)], LEAD);

    if n_channel {
        b.head(p(0.74, 0.5), p(0.47, 0.5), 0.12, 0.05);
    } else {
        b.head(p(0.44, 0.5), p(0.71, 0.5), 0.12, 0.05);
    }

    b.anchor("G", p(0.0, 0.76))
        .anchor("D", p(0.74, 0.0))
        .anchor("S", p(0.74, 1.0));
    b.finish()
}

fn jfet(id: SymbolId, n_channel: bool) -> SymbolDefinition {
    let mut b = Builder::new(id, 1.0, 1.0);
    envelope(&mut b);
    b.line(p(0.0, 0.62), p(0.44, 0.62), LEAD)
        .line(p(0.44, 0.22), p(0.44, 0.78), HEAVY)
        .polyline(&[p(0.44, 0.3), p(0.74, 0.3), p(0.74, 0.0)], LEAD)
        .polyline(&[p(0.44, 0.7), p(0.74, 0.7), p(0.74, 1.0)], LEAD);

    if n_channel {
        b.head(p(0.0, 0.62), p(0.44, 0.62), 0.12, 0.05);
    } else {
        b.head(p(0.44, 0.62), p(0.26, 0.62), 0.12, 0.05);
    }

    b.anchor("G", p(0.0, 0.62))
        .anchor("D", p(0.74, 0.0))
        .anchor("S", p(0.74, 1.0));
    b.finish()
}

fn igbt(id: SymbolId, n_channel: bool) -> SymbolDefinition {
    let mut b = Builder::new(id, 1.0, 1.0);
    envelope(&mut b);
    b.line(p(0.0, 0.76), p(0.34, 0.76), LEAD)
        .line(p(0.34, 0.24), p(0.34, 0.76), BODY)
        .line(p(0.44, 0.22), p(0.44, 0.78), HEAVY)
        .polyline(&[p(0.44, 0.38), p(0.74, 0.14), p(0.74, 0.0)], LEAD)
        .polyline(&[p(0.44, 0.62), p(0.74, 0.86), p(0.74, 1.0)], LEAD);
    emitter_arrow(&mut b, p(0.44, 0.62), p(0.74, 0.86), n_channel);
    b.anchor("G", p(0.0, 0.76))
        .anchor("C", p(0.74, 0.0))
        .anchor("E", p(0.74, 1.0));
    b.finish()
}

fn scr() -> SymbolDefinition {
    let mut b = Builder::new(SymbolId::Scr, 2.4, 1.0);
    b.line(p(0.0, 0.5), p(0.9, 0.5), LEAD)
        .solid(&[p(0.9, 0.2), p(0.9, 0.8), p(1.5, 0.5)])
        .line(p(1.5, 0.2), p(1.5, 0.8), HEAVY)
        .line(p(1.5, 0.5), p(2.4, 0.5), LEAD)
        .polyline(&[p(1.5, 0.72), p(1.75, 0.97)], LEAD)
        .anchor("A", p(0.0, 0.5))
        .anchor("K", p(2.4, 0.5))
        .anchor("G", p(1.75, 0.97));
    b.finish()
}

fn triac() -> SymbolDefinition {
    let mut b = Builder::new(SymbolId::Triac, 2.4, 1.0);
    b.line(p(0.0, 0.5), p(0.9, 0.5), LEAD)
        .line(p(0.9, 0.15), p(0.9, 0.85), HEAVY)
        .line(p(1.5, 0.15), p(1.5, 0.85), HEAVY)
        .solid(&[p(0.9, 0.15), p(0.9, 0.5), p(1.5, 0.325)])
        .solid(&[p(1.5, 0.5), p(1.5, 0.85), p(0.9, 0.675)])
        .line(p(1.5, 0.5), p(2.4, 0.5), LEAD)
        .polyline(&[p(0.9, 0.85), p(0.72, 0.98)], LEAD)
        .anchor("MT1", p(0.0, 0.5))
        .anchor("MT2", p(2.4, 0.5))
        .anchor("G", p(0.72, 0.98));
    b.finish()
}

fn ic_block() -> SymbolDefinition {
    let mut b = Builder::new(SymbolId::IcBlock, 2.4, 1.0);
    b.rect(Rect::new(0.5, 0.15, 1.4, 0.7), BODY)
        .line(p(0.0, 0.35), p(0.5, 0.35), LEAD)
        .line(p(0.0, 0.65), p(0.5, 0.65), LEAD)
        .line(p(1.9, 0.5), p(2.4, 0.5), LEAD)
        .dot(p(0.62, 0.27), 0.05)
        .anchor("1", p(0.0, 0.35))
        .anchor("2", p(0.0, 0.65))
        .anchor("3", p(2.4, 0.5));
    b.finish()
}
