//! JEDEC-aligned package outlines.
//!
//! Outlines are simplified schematic views authored in millimetres in a y-down
//! frame. Proportions follow the registered JEDEC/EIAJ outlines; only the
//! visible silhouette is kept (body, tab, mounting holes, leads, polarity
//! marking). Pin-count variants are separate entries with their own geometry.
//! Body colour qualifiers (`@glass`, `@insulated`, ...) are parsed into a
//! [`PackageVariant`] and never touch the geometry.

use crate::geometry::{point_on_circle, Color, Point, Rect, Shape};

/// Body material, which selects the fill colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// Black moulded epoxy.
    Epoxy,
    /// Glass (small-signal and zener diodes).
    Glass,
    /// Bare metal (cans, MELF caps).
    Metallic,
    /// Blue lacquer.
    Blue,
    /// Yellow/ochre dip coating (ceramic discs).
    Yellow,
    /// Clear or diffused lens plastic.
    Clear,
}

impl Material {
    /// Parses a qualifier into a material.
    #[must_use]
    pub fn from_qualifier(qualifier: &str) -> Option<Self> {
        match qualifier.trim().to_ascii_lowercase().as_str() {
            "epoxy" | "plastic" | "black" => Some(Self::Epoxy),
            "glass" => Some(Self::Glass),
            "metallic" | "metal" => Some(Self::Metallic),
            "blue" => Some(Self::Blue),
            "yellow" => Some(Self::Yellow),
            "clear" => Some(Self::Clear),
            _ => None,
        }
    }

    /// Body fill colour.
    #[must_use]
    pub fn body_color(self) -> Color {
        match self {
            Self::Epoxy => Color::rgb(0.3, 0.3, 0.3),
            Self::Glass => Color::rgb(0.78, 0.32, 0.06),
            Self::Metallic => Color::rgb(0.7, 0.7, 0.7),
            Self::Blue => Color::rgb(0.0, 0.5, 0.78),
            Self::Yellow => Color::hex(0x00E2_AD58),
            Self::Clear => Color::rgb(0.93, 0.93, 0.9),
        }
    }

    /// Colour of the cathode band or polarity stripe on this body.
    #[must_use]
    pub const fn band_color(self) -> Color {
        match self {
            Self::Epoxy => Color::rgb(0.75, 0.75, 0.75),
            Self::Glass | Self::Yellow | Self::Clear | Self::Metallic => Color::BLACK,
            Self::Blue => Color::WHITE,
        }
    }
}

/// Finish of a metal mounting tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabFinish {
    /// Bare metal tab.
    Metallic,
    /// Tab overmoulded with body plastic (full-pack).
    Insulated,
}

impl TabFinish {
    /// Parses a qualifier into a tab finish.
    #[must_use]
    pub fn from_qualifier(qualifier: &str) -> Option<Self> {
        match qualifier.trim().to_ascii_lowercase().as_str() {
            "insulated" | "fullpack" | "f" => Some(Self::Insulated),
            "bare" | "metal_tab" => Some(Self::Metallic),
            _ => None,
        }
    }
}

/// Outline family, used for logging and per-family render details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Round body, axial leads.
    Axial,
    /// Metal electrode leadless face.
    Melf,
    /// Moulded two-pad SMD (SMA/SMB/SMC).
    SmdTwoPad,
    /// Chip resistor/capacitor.
    Chip,
    /// Small outline transistor.
    Sot,
    /// TO-92 moulded.
    To92,
    /// Flange-mounted power package with tab or hole.
    TabbedPower,
    /// Metal can, bottom view.
    MetalCan,
    /// Diamond base (TO-3), bottom view.
    Diamond,
    /// SOT-89 power SMD.
    Sot89,
    /// Ceramic disc capacitor.
    Disc,
    /// Radial electrolytic can.
    RadialCan,
    /// Round through-hole LED.
    LedRound,
}

/// Body silhouette.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyShape {
    /// Rectangle, optionally with rounded corners.
    Rect {
        /// The body.
        rect: Rect,
        /// Corner radius.
        corner_radius: f64,
    },
    /// Circular body.
    Disc {
        /// Centre.
        centre: Point,
        /// Radius.
        radius: f64,
    },
    /// Closed polygon.
    Outline {
        /// Vertices.
        points: Vec<Point>,
    },
}

impl BodyShape {
    /// The body as a drawable shape.
    #[must_use]
    pub fn to_shape(&self) -> Shape {
        match self {
            Self::Rect {
                rect,
                corner_radius,
            } => Shape::Rect {
                rect: *rect,
                corner_radius: *corner_radius,
            },
            Self::Disc { centre, radius } => Shape::Circle {
                centre: *centre,
                radius: *radius,
            },
            Self::Outline { points } => Shape::Polyline {
                points: points.clone(),
                closed: true,
            },
        }
    }
}

/// How a lead is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadKind {
    /// Wire or formed lead, drawn as a bar.
    Wire,
    /// SMD pad or termination.
    Pad,
    /// Pin seen end-on, drawn as a dot.
    Pin,
}

/// One lead, pad or pin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lead {
    /// Extent of the lead.
    pub rect: Rect,
    /// Drawing style.
    pub kind: LeadKind,
}

/// A circular feature (mounting hole).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hole {
    /// Centre.
    pub centre: Point,
    /// Radius.
    pub radius: f64,
}

/// A package outline.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageGeometry {
    /// Canonical identifier, also the printed caption.
    pub id: &'static str,
    /// Alternative names accepted on lookup.
    pub aliases: Vec<&'static str>,
    /// Outline family.
    pub family: Family,
    /// Body silhouette.
    pub body: BodyShape,
    /// Metal tab or heat slug, if any.
    pub tab: Option<Rect>,
    /// Mounting holes.
    pub holes: Vec<Hole>,
    /// Cathode band or polarity stripe.
    pub marking: Option<Rect>,
    /// Leads in pin order.
    pub leads: Vec<Lead>,
    /// Default body material.
    pub material: Material,
    /// Default tab finish.
    pub tab_finish: TabFinish,
}

impl PackageGeometry {
    /// Bounds of body, tab and leads.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let body = self.body.to_shape().bounds();
        let with_tab = self.tab.map_or(body, |tab| body.union(&tab));
        self.leads
            .iter()
            .fold(with_tab, |acc, lead| acc.union(&lead.rect))
    }

    /// Width over height of the whole outline.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        let b = self.bounds();
        b.width / b.height
    }

    /// Number of leads, pads or pins.
    #[must_use]
    pub fn pin_count(&self) -> usize {
        self.leads.len()
    }

    /// Whether the outline carries a polarity marking.
    #[must_use]
    pub const fn is_marked(&self) -> bool {
        self.marking.is_some()
    }
}

/// Render-time modifier parsed from `@qualifier` suffixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageVariant {
    /// Material override.
    pub material: Option<Material>,
    /// Tab finish override.
    pub tab_finish: Option<TabFinish>,
    /// Qualifiers that matched nothing, kept for reporting.
    pub unrecognised: Vec<String>,
}

impl PackageVariant {
    /// Builds a variant from qualifier strings, last one wins per category.
    #[must_use]
    pub fn from_qualifiers<'a>(qualifiers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut variant = Self::default();
        for q in qualifiers {
            let q = q.trim();
            if q.is_empty() {
                continue;
            }
            if let Some(m) = Material::from_qualifier(q) {
                variant.material = Some(m);
            } else if let Some(t) = TabFinish::from_qualifier(q) {
                variant.tab_finish = Some(t);
            } else {
                variant.unrecognised.push(q.to_string());
            }
        }
        variant
    }

    /// Effective material for `geometry`.
    #[must_use]
    pub fn material_for(&self, geometry: &PackageGeometry) -> Material {
        self.material.unwrap_or(geometry.material)
    }

    /// Effective tab finish for `geometry`.
    #[must_use]
    pub fn tab_finish_for(&self, geometry: &PackageGeometry) -> TabFinish {
        self.tab_finish.unwrap_or(geometry.tab_finish)
    }
}

/// Splits `"DO-35@glass@x"` into the identifier and its qualifiers.
#[must_use]
pub fn split_qualifiers(raw: &str) -> (&str, Vec<&str>) {
    let mut parts = raw.split('@');
    let id = parts.next().unwrap_or_default().trim();
    (id, parts.collect())
}

/// Normalises an identifier for lookup: upper case, separators removed.
#[must_use]
pub fn normalise_id(id: &str) -> String {
    id.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-' | '.' | '/'))
        .flat_map(char::to_uppercase)
        .collect()
}

const fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn entry(
    id: &'static str,
    aliases: &[&'static str],
    family: Family,
    body: BodyShape,
    material: Material,
) -> PackageGeometry {
    PackageGeometry {
        id,
        aliases: aliases.to_vec(),
        family,
        body,
        tab: None,
        holes: Vec::new(),
        marking: None,
        leads: Vec::new(),
        material,
        tab_finish: TabFinish::Metallic,
    }
}

/// Offsets of `count` positions spaced by `pitch`, centred on zero.
#[allow(clippy::cast_precision_loss)] // pin counts are tiny
fn centred_offsets(count: usize, pitch: f64) -> impl Iterator<Item = f64> {
    let half = (count.saturating_sub(1)) as f64 / 2.0;
    (0..count).map(move |i| (i as f64 - half) * pitch)
}

fn axial(
    id: &'static str,
    aliases: &[&'static str],
    len: f64,
    dia: f64,
    material: Material,
    banded: bool,
) -> PackageGeometry {
    let lead_len = (len * 0.55).max(2.5);
    let lead_w = (dia * 0.22).clamp(0.5, 1.0);
    let mut g = entry(
        id,
        aliases,
        Family::Axial,
        BodyShape::Rect {
            rect: Rect::new(-len / 2.0, -dia / 2.0, len, dia),
            corner_radius: dia * 0.25,
        },
        material,
    );
    g.leads = vec![
        Lead {
            rect: Rect::new(-len / 2.0 - lead_len, -lead_w / 2.0, lead_len, lead_w),
            kind: LeadKind::Wire,
        },
        Lead {
            rect: Rect::new(len / 2.0, -lead_w / 2.0, lead_len, lead_w),
            kind: LeadKind::Wire,
        },
    ];
    if banded {
        g.marking = Some(Rect::new(len * 0.3, -dia / 2.0, len * 0.12, dia));
    }
    g
}

fn melf(
    id: &'static str,
    aliases: &[&'static str],
    len: f64,
    dia: f64,
    cap: f64,
    material: Material,
) -> PackageGeometry {
    let mut g = entry(
        id,
        aliases,
        Family::Melf,
        BodyShape::Rect {
            rect: Rect::new(-len / 2.0 + cap, -dia / 2.0, 2.0f64.mul_add(-cap, len), dia),
            corner_radius: 0.0,
        },
        material,
    );
    g.leads = vec![
        Lead {
            rect: Rect::new(-len / 2.0, -dia / 2.0, cap, dia),
            kind: LeadKind::Pad,
        },
        Lead {
            rect: Rect::new(len / 2.0 - cap, -dia / 2.0, cap, dia),
            kind: LeadKind::Pad,
        },
    ];
    g.marking = Some(Rect::new(len / 2.0 - cap - len * 0.15, -dia / 2.0, len * 0.1, dia));
    g
}

fn smd_two_pad(
    id: &'static str,
    aliases: &[&'static str],
    body_w: f64,
    body_h: f64,
    pad_w: f64,
    pad_h: f64,
) -> PackageGeometry {
    let mut g = entry(
        id,
        aliases,
        Family::SmdTwoPad,
        BodyShape::Rect {
            rect: Rect::new(-body_w / 2.0, -body_h / 2.0, body_w, body_h),
            corner_radius: 0.0,
        },
        Material::Epoxy,
    );
    g.leads = vec![
        Lead {
            rect: Rect::new(-body_w / 2.0 - pad_w / 2.0, -pad_h / 2.0, pad_w, pad_h),
            kind: LeadKind::Pad,
        },
        Lead {
            rect: Rect::new(body_w / 2.0 - pad_w / 2.0, -pad_h / 2.0, pad_w, pad_h),
            kind: LeadKind::Pad,
        },
    ];
    g.marking = Some(Rect::new(body_w * 0.22, -body_h / 2.0, body_w * 0.12, body_h));
    g
}

fn chip(
    id: &'static str,
    aliases: &[&'static str],
    len: f64,
    width: f64,
    term: f64,
) -> PackageGeometry {
    let mut g = entry(
        id,
        aliases,
        Family::Chip,
        BodyShape::Rect {
            rect: Rect::new(-len / 2.0 + term, -width / 2.0, 2.0f64.mul_add(-term, len), width),
            corner_radius: 0.0,
        },
        Material::Epoxy,
    );
    g.leads = vec![
        Lead {
            rect: Rect::new(-len / 2.0, -width / 2.0, term, width),
            kind: LeadKind::Pad,
        },
        Lead {
            rect: Rect::new(len / 2.0 - term, -width / 2.0, term, width),
            kind: LeadKind::Pad,
        },
    ];
    g
}

/// Lead row for the SOT outlines: count and pitch.
#[derive(Clone, Copy)]
struct Row {
    count: usize,
    pitch: f64,
}

#[allow(clippy::too_many_arguments)]
fn sot(
    id: &'static str,
    aliases: &[&'static str],
    body_w: f64,
    body_h: f64,
    lead_w: f64,
    lead_len: f64,
    bottom: Row,
    top: Row,
) -> PackageGeometry {
    let mut g = entry(
        id,
        aliases,
        Family::Sot,
        BodyShape::Rect {
            rect: Rect::new(-body_w / 2.0, -body_h / 2.0, body_w, body_h),
            corner_radius: 0.0,
        },
        Material::Epoxy,
    );
    g.leads = centred_offsets(bottom.count, bottom.pitch)
        .map(|x| Lead {
            rect: Rect::new(x - lead_w / 2.0, body_h / 2.0, lead_w, lead_len),
            kind: LeadKind::Pad,
        })
        .chain(centred_offsets(top.count, top.pitch).map(|x| Lead {
            rect: Rect::new(x - lead_w / 2.0, -body_h / 2.0 - lead_len, lead_w, lead_len),
            kind: LeadKind::Pad,
        }))
        .collect();
    g
}

const fn row(count: usize, pitch: f64) -> Row {
    Row { count, pitch }
}

fn sot23(id: &'static str, aliases: &[&'static str], bottom: Row, top: Row) -> PackageGeometry {
    sot(id, aliases, 2.9, 1.3, 0.4, 0.6, bottom, top)
}

fn to92() -> PackageGeometry {
    let mut g = entry(
        "TO-92",
        &["TO-226-AA", "TO-226"],
        Family::To92,
        BodyShape::Rect {
            rect: Rect::new(-2.4, -4.8, 4.8, 4.8),
            corner_radius: 0.8,
        },
        Material::Epoxy,
    );
    g.leads = centred_offsets(3, 1.27)
        .map(|x| Lead {
            rect: Rect::new(x - 0.225, 0.0, 0.45, 11.0),
            kind: LeadKind::Wire,
        })
        .collect();
    g
}

/// Side view of a flange-mounted power package: tab on the left, body,
/// then the leads running right.
#[derive(Clone, Copy)]
struct Power {
    tab: f64,
    body: f64,
    lead: f64,
    width: f64,
    hole_d: f64,
    hole_x: f64,
    pins: usize,
    pitch: f64,
    lead_w: f64,
}

fn power(id: &'static str, aliases: &[&'static str], p: Power) -> PackageGeometry {
    let mut g = entry(
        id,
        aliases,
        Family::TabbedPower,
        BodyShape::Rect {
            rect: Rect::new(p.tab, -p.width / 2.0, p.body, p.width),
            corner_radius: 0.0,
        },
        Material::Epoxy,
    );
    if p.tab > 0.0 {
        g.tab = Some(Rect::new(0.0, -p.width / 2.0, p.tab, p.width));
    }
    g.holes = vec![Hole {
        centre: pt(p.hole_x, 0.0),
        radius: p.hole_d / 2.0,
    }];
    let lead_x = p.tab + p.body;
    g.leads = centred_offsets(p.pins, p.pitch)
        .map(|y| Lead {
            rect: Rect::new(lead_x, y - p.lead_w / 2.0, p.lead, p.lead_w),
            kind: LeadKind::Wire,
        })
        .collect();
    g
}

const TO220: Power = Power {
    tab: 6.5,
    body: 9.5,
    lead: 11.0,
    width: 10.0,
    hole_d: 3.6,
    hole_x: 3.25,
    pins: 3,
    pitch: 2.54,
    lead_w: 0.8,
};

const TO247: Power = Power {
    tab: 0.0,
    body: 20.0,
    lead: 20.0,
    width: 15.6,
    hole_d: 3.6,
    hole_x: 5.5,
    pins: 3,
    pitch: 5.45,
    lead_w: 1.2,
};

const TO264: Power = Power {
    tab: 0.0,
    body: 26.0,
    lead: 20.0,
    width: 20.0,
    hole_d: 3.81,
    hole_x: 6.0,
    pins: 3,
    pitch: 5.75,
    lead_w: 1.2,
};

const TO218: Power = Power {
    tab: 5.0,
    body: 16.0,
    lead: 20.0,
    width: 15.5,
    hole_d: 4.1,
    hole_x: 2.5,
    pins: 3,
    pitch: 5.45,
    lead_w: 1.2,
};

fn metal_can(
    id: &'static str,
    aliases: &[&'static str],
    flange_d: f64,
    pin_circle_d: f64,
) -> PackageGeometry {
    let r = flange_d / 2.0;
    let mut g = entry(
        id,
        aliases,
        Family::MetalCan,
        BodyShape::Disc {
            centre: pt(0.0, 0.0),
            radius: r,
        },
        Material::Metallic,
    );
    let key = point_on_circle(pt(0.0, 0.0), r + 0.2, 135.0);
    g.tab = Some(Rect::centred(key, 0.8, 0.8));
    g.leads = [180.0, 270.0, 0.0]
        .into_iter()
        .map(|angle| Lead {
            rect: Rect::centred(point_on_circle(pt(0.0, 0.0), pin_circle_d / 2.0, angle), 0.8, 0.8),
            kind: LeadKind::Pin,
        })
        .collect();
    g
}

fn to3() -> PackageGeometry {
    let mut g = entry(
        "TO-204-AA",
        &["TO-3", "TO-204"],
        Family::Diamond,
        BodyShape::Outline {
            points: vec![
                pt(-19.7, 0.0),
                pt(-12.0, -13.35),
                pt(12.0, -13.35),
                pt(19.7, 0.0),
                pt(12.0, 13.35),
                pt(-12.0, 13.35),
            ],
        },
        Material::Metallic,
    );
    g.holes = vec![
        Hole {
            centre: pt(-15.1, 0.0),
            radius: 2.05,
        },
        Hole {
            centre: pt(15.1, 0.0),
            radius: 2.05,
        },
    ];
    // pins on a 6 mm radius, 65 degrees either side of the vertical
    g.leads = [25.0, 155.0]
        .into_iter()
        .map(|angle| Lead {
            rect: Rect::centred(point_on_circle(pt(0.0, 0.0), 6.0, angle), 1.0, 1.0),
            kind: LeadKind::Pin,
        })
        .collect();
    g
}

fn sot89(id: &'static str, aliases: &[&'static str], six_lead: bool) -> PackageGeometry {
    let (w, h) = (4.5, 2.76);
    let mut g = entry(
        id,
        aliases,
        Family::Sot89,
        BodyShape::Rect {
            rect: Rect::new(-w / 2.0, -h / 2.0, w, h),
            corner_radius: 0.0,
        },
        Material::Epoxy,
    );
    let bottom = centred_offsets(3, 1.5).map(|x| Lead {
        rect: Rect::new(x - 0.24, h / 2.0, 0.48, 1.0),
        kind: LeadKind::Pad,
    });
    if six_lead {
        let top = centred_offsets(3, 1.5).map(|x| Lead {
            rect: Rect::new(x - 0.24, -h / 2.0 - 1.0, 0.48, 1.0),
            kind: LeadKind::Pad,
        });
        g.leads = bottom.chain(top).collect();
    } else {
        g.leads = bottom.collect();
        g.tab = Some(Rect::new(-0.85, -h / 2.0 - 0.8, 1.7, 0.8));
    }
    g
}

fn disc() -> PackageGeometry {
    let (radius, half_pitch, lead_w): (f64, f64, f64) = (3.5, 2.5, 0.5);
    let exit_y = (radius * radius - half_pitch * half_pitch).sqrt();
    let mut g = entry(
        "DISC",
        &["CERAMIC-DISC", "DISC-7", "CAP-DISC"],
        Family::Disc,
        BodyShape::Disc {
            centre: pt(0.0, 0.0),
            radius,
        },
        Material::Yellow,
    );
    g.leads = [-half_pitch, half_pitch]
        .into_iter()
        .map(|x| Lead {
            rect: Rect::new(x - lead_w / 2.0, exit_y, lead_w, radius + 5.0 - exit_y),
            kind: LeadKind::Wire,
        })
        .collect();
    g
}

fn radial(
    id: &'static str,
    aliases: &[&'static str],
    dia: f64,
    height: f64,
    pitch: f64,
) -> PackageGeometry {
    let mut g = entry(
        id,
        aliases,
        Family::RadialCan,
        BodyShape::Rect {
            rect: Rect::new(-dia / 2.0, -height, dia, height),
            corner_radius: dia * 0.16,
        },
        Material::Blue,
    );
    g.marking = Some(Rect::new(-dia / 2.0 + dia * 0.08, -height, dia * 0.24, height));
    g.leads = centred_offsets(2, pitch)
        .map(|x| Lead {
            rect: Rect::new(x - 0.25, 0.0, 0.5, 5.0),
            kind: LeadKind::Wire,
        })
        .collect();
    g
}

#[allow(clippy::cast_precision_loss)] // fixed segment count
fn led_round(
    id: &'static str,
    aliases: &[&'static str],
    dia: f64,
    height: f64,
    lead_len: f64,
) -> PackageGeometry {
    const DOME_STEPS: usize = 12;
    let r = dia / 2.0;
    let flange = r + dia * 0.08;
    let shoulder = -(height - r);

    let mut points = vec![pt(-flange, 0.0), pt(-flange, -1.0), pt(-r, -1.0)];
    points.extend((0..=DOME_STEPS).map(|i| {
        let angle = 180.0 + 180.0 * i as f64 / DOME_STEPS as f64;
        point_on_circle(pt(0.0, shoulder), r, angle)
    }));
    points.extend([pt(r, -1.0), pt(flange, -1.0), pt(flange, 0.0)]);

    let mut g = entry(
        id,
        aliases,
        Family::LedRound,
        BodyShape::Outline { points },
        Material::Clear,
    );
    // anode (left) longer than cathode
    g.leads = vec![
        Lead {
            rect: Rect::new(-1.27 - 0.3, 0.0, 0.6, lead_len),
            kind: LeadKind::Wire,
        },
        Lead {
            rect: Rect::new(1.27 - 0.3, 0.0, 0.6, lead_len - 1.5),
            kind: LeadKind::Wire,
        },
    ];
    g
}

/// Every built-in outline, in catalog order.
#[must_use]
#[allow(clippy::too_many_lines)] // one table
pub fn builtin() -> Vec<PackageGeometry> {
    use Material::{Epoxy, Glass};

    let mut to220f = power("TO-220-F", &["TO-220FP", "ITO-220"], TO220);
    to220f.tab_finish = TabFinish::Insulated;

    vec![
        // axial resistors
        axial("0207", &["AXIAL-0207", "DIN0207", "R-0207"], 6.3, 2.5, Material::Blue, false),
        axial("0204", &["AXIAL-0204", "DIN0204"], 3.6, 1.6, Material::Blue, false),
        axial("0411", &["AXIAL-0411", "DIN0411"], 9.9, 4.0, Material::Blue, false),
        // axial diodes
        axial("DO-204-AH", &["DO-35", "SOD-27"], 3.9, 1.7, Glass, true),
        axial("DO-204-AL", &["DO-41", "SOD-66"], 4.7, 2.7, Epoxy, true),
        axial("DO-204-AC", &["DO-15"], 7.0, 3.6, Epoxy, true),
        axial("DO-204-AF", &["DO-29"], 9.5, 5.3, Epoxy, true),
        axial("DO-201-AA", &["DO-27"], 8.35, 5.3, Epoxy, true),
        axial("DO-201-AD", &["DO-201"], 9.0, 5.1, Epoxy, true),
        axial("R-6", &["P600"], 8.8, 8.8, Epoxy, true),
        axial("T-18", &[], 8.8, 3.5, Epoxy, true),
        // leadless
        melf("DO-213-AB", &["MELF", "MMB", "SOD-106"], 5.0, 2.4, 0.55, Glass),
        melf("DO-213-AA", &["MINIMELF", "SOD-80", "LL-34"], 3.5, 1.5, 0.4, Glass),
        smd_two_pad("DO-214-AC", &["SMA"], 4.3, 2.6, 1.2, 1.45),
        smd_two_pad("DO-214-AA", &["SMB"], 4.32, 3.62, 1.2, 2.1),
        smd_two_pad("DO-214-AB", &["SMC"], 6.86, 5.9, 1.2, 2.97),
        chip("0402", &["1005M", "R0402", "C0402"], 1.0, 0.5, 0.25),
        chip("0603", &["1608M", "R0603", "C0603"], 1.6, 0.8, 0.35),
        chip("0805", &["2012M", "R0805", "C0805"], 2.0, 1.25, 0.45),
        chip("1206", &["3216M", "R1206", "C1206"], 3.2, 1.6, 0.5),
        // small outline transistors
        sot23("SOT-23", &["SOT-23-3", "TO-236", "TO-236-AB", "SOT-23F"], row(2, 1.9), row(1, 0.0)),
        sot23("SOT-23-4", &["SOT-23-4L", "SOT-143"], row(2, 1.9), row(2, 1.9)),
        sot23("SOT-23-5", &["SOT-23-5L", "SOT-25", "SC-74A"], row(3, 0.95), row(2, 1.9)),
        sot23("SOT-23-6", &["SOT-23-6L", "SOT-26", "SC-74"], row(3, 0.95), row(3, 0.95)),
        sot23("SOT-23-8", &["SOT-23-8L"], row(4, 0.65), row(4, 0.65)),
        sot("SOT-323", &["SOT-323-3", "SC-70"], 2.2, 1.35, 0.4, 0.45, row(2, 1.3), row(1, 0.0)),
        sot89("TO-243-AA", &["TO-243", "SOT-89", "SC-62"], false),
        sot89("TO-243-AB", &["SOT-89-2"], false),
        sot89("TO-243-6", &["SOT-89-6"], true),
        // through-hole transistors
        to92(),
        metal_can("TO-206-AA", &["TO-206", "TO-18"], 5.8, 2.54),
        metal_can("TO-205-AD", &["TO-205", "TO-39"], 9.4, 5.08),
        to3(),
        power("TO-220-AB", &["TO-220"], TO220),
        power("TO-220-AA", &[], TO220),
        power("TO-220-AC", &["TO-220-2"], Power { pins: 2, pitch: 5.08, ..TO220 }),
        power("TO-220-AB-5L", &["TO-220-5", "TO-220-5L"], Power { pins: 5, pitch: 1.7, ..TO220 }),
        power("TO-220-AB-6L", &["TO-220-6", "TO-220-6L"], Power { pins: 6, pitch: 1.27, ..TO220 }),
        power("TO-220-AB-7L", &["TO-220-7", "TO-220-7L"], Power { pins: 7, pitch: 1.27, ..TO220 }),
        to220f,
        power(
            "TO-225-AA",
            &["TO-126", "TO-225"],
            Power {
                tab: 3.0,
                body: 8.0,
                lead: 15.0,
                width: 7.8,
                hole_d: 3.2,
                hole_x: 4.2,
                pins: 3,
                pitch: 2.29,
                lead_w: 0.75,
            },
        ),
        power("TO-218-AA", &["TO-218"], TO218),
        power("TO-218-5", &[], Power { pins: 5, pitch: 2.7, ..TO218 }),
        power("TO-247", &["TO-247-AC", "TO-247-3"], TO247),
        power("TO-247-4", &[], Power { pins: 4, pitch: 2.54, ..TO247 }),
        power("TO-264", &["TO-264-AA", "TO-3P"], TO264),
        power("TO-264-2", &["TO-264-2L"], Power { pins: 2, pitch: 11.5, ..TO264 }),
        power("TO-264-5", &["TO-264-5L"], Power { pins: 5, pitch: 3.81, ..TO264 }),
        // capacitors
        disc(),
        radial("RADIAL-5X11", &["CAP-5X11", "E2-5"], 5.0, 11.0, 2.0),
        radial("RADIAL-6.3X11", &["CAP-6.3X11", "E2.5-6"], 6.3, 11.0, 2.5),
        radial("RADIAL-8X11.5", &["CAP-8X11.5", "E3.5-8"], 8.0, 11.5, 3.5),
        radial("RADIAL-10X16", &["CAP-10X16", "E5-10"], 10.0, 16.0, 5.0),
        // LEDs
        led_round("5MM-ROUND-TH", &["LED5MM", "5MMLED", "T-1-3/4"], 5.0, 8.6, 17.0),
        led_round("3MM-ROUND-TH", &["LED3MM", "3MMLED", "T-1"], 3.0, 5.3, 17.0),
    ]
}
