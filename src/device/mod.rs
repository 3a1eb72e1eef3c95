//! Component specifications and the closed device taxonomy.
//!
//! A [`ComponentSpec`] is one entry of the job document as written by the
//! user. The resolver turns its free-form `kind`/`subtype` strings into a
//! [`Device`], a closed enum over every supported kind × subtype pair, and
//! everything downstream (symbol choice, default package, polarity marking)
//! is an exhaustive match on that enum.

pub mod pins;
pub mod resolver;
pub mod values;

pub use pins::{default_pin_labels, parse_pin_config};
pub use resolver::{DeviceResolver, Label};
pub use values::{BandColour, ResistorValue};

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::library::SymbolId;

/// A scalar from the job document shown as text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SpecValue {
    /// A string.
    Text(String),
    /// A number, printed as written.
    Number(serde_json::Number),
    /// A boolean.
    Bool(bool),
    /// An explicit `null`, which hides the entry.
    Null,
}

impl SpecValue {
    /// Whether the value prints as nothing.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Null => true,
            Self::Number(_) | Self::Bool(_) => false,
        }
    }
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s.trim()),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => Ok(()),
        }
    }
}

/// `spec` key carrying pin names instead of a display line.
pub const PIN_CONFIG_KEY: &str = "pin_config";

/// One label entry as written in the job document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentSpec {
    /// Component kind (`resistor`, `diode`, ...).
    pub kind: String,

    /// Subtype within the kind; the kind's default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,

    /// Resistance in ohms (resistors).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_ohms: Option<f64>,

    /// Part number (every kind except resistors).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<SpecValue>,

    /// Function of an active device (`regulator`, `op-amp`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Package identifier with optional `@qualifier` suffixes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Pin names in lead order (`"g d s"`, `"E,B,C"`), overriding the
    /// device's defaults. Also read from a `pin_config` entry in `spec`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_config: Option<String>,

    /// Display fields in document order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub spec: IndexMap<String, SpecValue>,
}

impl ComponentSpec {
    /// A spec with only `kind` set.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            subtype: None,
            value_ohms: None,
            part_number: None,
            role: None,
            package: None,
            pin_config: None,
            spec: IndexMap::new(),
        }
    }

    /// Sets the subtype.
    #[must_use]
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    /// Sets the resistance.
    #[must_use]
    pub const fn with_ohms(mut self, ohms: f64) -> Self {
        self.value_ohms = Some(ohms);
        self
    }

    /// Sets the part number.
    #[must_use]
    pub fn with_part_number(mut self, part: impl Into<String>) -> Self {
        self.part_number = Some(SpecValue::Text(part.into()));
        self
    }

    /// Sets the package identifier.
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Sets the pin names.
    #[must_use]
    pub fn with_pin_config(mut self, config: impl Into<String>) -> Self {
        self.pin_config = Some(config.into());
        self
    }

    /// The pin-name override, from the field or the `spec` entry.
    #[must_use]
    pub fn pin_override(&self) -> Option<Vec<String>> {
        let from_spec = self.spec.get(PIN_CONFIG_KEY).map(ToString::to_string);
        self.pin_config
            .clone()
            .or(from_spec)
            .map(|config| parse_pin_config(&config))
            .filter(|names| !names.is_empty())
    }

    /// Appends a display field.
    #[must_use]
    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.spec.insert(key.into(), SpecValue::Text(value.into()));
        self
    }
}

/// Top-level component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Resistors.
    Resistor,
    /// Diodes.
    Diode,
    /// Capacitors.
    Capacitor,
    /// Discrete transistors and thyristors.
    Transistor,
    /// Integrated circuits.
    Active,
}

impl Kind {
    /// Parses a kind name, case-insensitively.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "resistor" => Some(Self::Resistor),
            "diode" => Some(Self::Diode),
            "capacitor" => Some(Self::Capacitor),
            "transistor" => Some(Self::Transistor),
            "active" | "ic" => Some(Self::Active),
            _ => None,
        }
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Resistor => "resistor",
            Self::Diode => "diode",
            Self::Capacitor => "capacitor",
            Self::Transistor => "transistor",
            Self::Active => "active",
        }
    }

    /// Canonical names of every subtype of this kind.
    #[must_use]
    pub fn subtypes(self) -> Vec<&'static str> {
        match self {
            Self::Resistor => ResistorType::ALL.iter().map(|t| t.name()).collect(),
            Self::Diode => DiodeType::ALL.iter().map(|t| t.name()).collect(),
            Self::Capacitor => CapacitorType::ALL.iter().map(|t| t.name()).collect(),
            Self::Transistor => TransistorType::ALL.iter().map(|t| t.name()).collect(),
            Self::Active => ActiveType::ALL.iter().map(|t| t.name()).collect(),
        }
    }
}

/// Resistor subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResistorType {
    /// Fixed resistor.
    Fixed,
}

impl ResistorType {
    /// Every subtype.
    pub const ALL: [Self; 1] = [Self::Fixed];

    fn parse(name: &str) -> Option<Self> {
        match name {
            "fixed" | "resistor" => Some(Self::Fixed),
            _ => None,
        }
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
        }
    }
}

/// Diode subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiodeType {
    /// General purpose / rectifier.
    Rectifier,
    /// Zener.
    Zener,
    /// Schottky.
    Schottky,
    /// LED.
    Led,
    /// Photodiode.
    Photodiode,
    /// Unidirectional TVS.
    TvsUnidirectional,
    /// Bidirectional TVS.
    TvsBidirectional,
    /// Tunnel diode.
    Tunnel,
    /// Varactor.
    Varactor,
}

impl DiodeType {
    /// Every subtype.
    pub const ALL: [Self; 9] = [
        Self::Rectifier,
        Self::Zener,
        Self::Schottky,
        Self::Led,
        Self::Photodiode,
        Self::TvsUnidirectional,
        Self::TvsBidirectional,
        Self::Tunnel,
        Self::Varactor,
    ];

    fn parse(name: &str) -> Option<Self> {
        match name {
            "rectifier" | "diode" | "standard" => Some(Self::Rectifier),
            "zener" => Some(Self::Zener),
            "schottky" => Some(Self::Schottky),
            "led" => Some(Self::Led),
            "photodiode" | "photo" => Some(Self::Photodiode),
            "tvs-uni" | "tvs_uni" => Some(Self::TvsUnidirectional),
            "tvs-bi" | "tvs_bi" | "tvs" => Some(Self::TvsBidirectional),
            "tunnel" => Some(Self::Tunnel),
            "varactor" | "varicap" => Some(Self::Varactor),
            _ => None,
        }
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rectifier => "rectifier",
            Self::Zener => "zener",
            Self::Schottky => "schottky",
            Self::Led => "led",
            Self::Photodiode => "photodiode",
            Self::TvsUnidirectional => "tvs-uni",
            Self::TvsBidirectional => "tvs-bi",
            Self::Tunnel => "tunnel",
            Self::Varactor => "varactor",
        }
    }
}

/// Capacitor subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapacitorType {
    /// Ceramic disc or MLCC.
    Ceramic,
    /// Monolithic ceramic.
    Monolithic,
    /// Plastic film.
    Film,
    /// Silver mica.
    Mica,
    /// Paper.
    Paper,
    /// Variable (tuning).
    Variable,
    /// Trimmer.
    Trimmer,
    /// Aluminium electrolytic.
    Electrolytic,
    /// Tantalum.
    Tantalum,
    /// Aluminium polymer.
    Polymer,
    /// Electric double-layer.
    Supercap,
}

impl CapacitorType {
    /// Every subtype.
    pub const ALL: [Self; 11] = [
        Self::Ceramic,
        Self::Monolithic,
        Self::Film,
        Self::Mica,
        Self::Paper,
        Self::Variable,
        Self::Trimmer,
        Self::Electrolytic,
        Self::Tantalum,
        Self::Polymer,
        Self::Supercap,
    ];

    fn parse(name: &str) -> Option<Self> {
        match name {
            "ceramic" => Some(Self::Ceramic),
            "monolithic" => Some(Self::Monolithic),
            "film" => Some(Self::Film),
            "mica" => Some(Self::Mica),
            "paper" => Some(Self::Paper),
            "variable" => Some(Self::Variable),
            "trimmer" => Some(Self::Trimmer),
            "electrolytic" => Some(Self::Electrolytic),
            "tantalum" => Some(Self::Tantalum),
            "polymer" => Some(Self::Polymer),
            "supercap" => Some(Self::Supercap),
            _ => None,
        }
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ceramic => "ceramic",
            Self::Monolithic => "monolithic",
            Self::Film => "film",
            Self::Mica => "mica",
            Self::Paper => "paper",
            Self::Variable => "variable",
            Self::Trimmer => "trimmer",
            Self::Electrolytic => "electrolytic",
            Self::Tantalum => "tantalum",
            Self::Polymer => "polymer",
            Self::Supercap => "supercap",
        }
    }

    /// Whether the part has a marked negative terminal.
    #[must_use]
    pub const fn is_polarised(self) -> bool {
        matches!(
            self,
            Self::Electrolytic | Self::Tantalum | Self::Polymer | Self::Supercap
        )
    }
}

/// Transistor and thyristor subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransistorType {
    /// NPN BJT.
    Npn,
    /// PNP BJT.
    Pnp,
    /// NPN Darlington.
    DarlingtonNpn,
    /// PNP Darlington.
    DarlingtonPnp,
    /// N-channel enhancement MOSFET.
    Nmos,
    /// P-channel enhancement MOSFET.
    Pmos,
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
    /// SCR.
    Scr,
    /// Triac.
    Triac,
}

impl TransistorType {
    /// Every subtype.
    pub const ALL: [Self; 14] = [
        Self::Npn,
        Self::Pnp,
        Self::DarlingtonNpn,
        Self::DarlingtonPnp,
        Self::Nmos,
        Self::Pmos,
        Self::NmosDepletion,
        Self::PmosDepletion,
        Self::JfetN,
        Self::JfetP,
        Self::IgbtN,
        Self::IgbtP,
        Self::Scr,
        Self::Triac,
    ];

    fn parse(name: &str) -> Option<Self> {
        match name {
            "npn" | "bjt_npn" => Some(Self::Npn),
            "pnp" | "bjt_pnp" => Some(Self::Pnp),
            "darlington_npn" => Some(Self::DarlingtonNpn),
            "darlington_pnp" => Some(Self::DarlingtonPnp),
            "nmos" | "nmos_enh" => Some(Self::Nmos),
            "pmos" | "pmos_enh" => Some(Self::Pmos),
            "nmos_dep" => Some(Self::NmosDepletion),
            "pmos_dep" => Some(Self::PmosDepletion),
            "jfet_n" => Some(Self::JfetN),
            "jfet_p" => Some(Self::JfetP),
            "igbt_n" => Some(Self::IgbtN),
            "igbt_p" => Some(Self::IgbtP),
            "scr" => Some(Self::Scr),
            "triac" => Some(Self::Triac),
            _ => None,
        }
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Npn => "npn",
            Self::Pnp => "pnp",
            Self::DarlingtonNpn => "darlington_npn",
            Self::DarlingtonPnp => "darlington_pnp",
            Self::Nmos => "nmos",
            Self::Pmos => "pmos",
            Self::NmosDepletion => "nmos_dep",
            Self::PmosDepletion => "pmos_dep",
            Self::JfetN => "jfet_n",
            Self::JfetP => "jfet_p",
            Self::IgbtN => "igbt_n",
            Self::IgbtP => "igbt_p",
            Self::Scr => "scr",
            Self::Triac => "triac",
        }
    }
}

/// Active device subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActiveType {
    /// Any integrated circuit, drawn as a block.
    Generic,
}

impl ActiveType {
    /// Every subtype.
    pub const ALL: [Self; 1] = [Self::Generic];

    fn parse(name: &str) -> Option<Self> {
        match name {
            "generic" | "ic" => Some(Self::Generic),
            _ => None,
        }
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
        }
    }
}

/// A resolved kind × subtype pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    /// A resistor.
    Resistor(ResistorType),
    /// A diode.
    Diode(DiodeType),
    /// A capacitor.
    Capacitor(CapacitorType),
    /// A transistor or thyristor.
    Transistor(TransistorType),
    /// An integrated circuit.
    Active(ActiveType),
}

impl Device {
    /// Validates `subtype` against `kind`, applying the kind's default when
    /// the subtype is absent or blank.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownSubtype`] when the subtype is not a
    /// member of the kind's subtype set.
    pub fn from_parts(kind: Kind, subtype: Option<&str>) -> Result<Self, ResolveError> {
        let name = subtype.map(|s| s.trim().to_ascii_lowercase());
        let name = match name.as_deref() {
            None | Some("") => return Ok(Self::default_for(kind)),
            Some(n) => n,
        };

        let device = match kind {
            Kind::Resistor => ResistorType::parse(name).map(Self::Resistor),
            Kind::Diode => DiodeType::parse(name).map(Self::Diode),
            Kind::Capacitor => CapacitorType::parse(name).map(Self::Capacitor),
            Kind::Transistor => TransistorType::parse(name).map(Self::Transistor),
            Kind::Active => ActiveType::parse(name).map(Self::Active),
        };

        device.ok_or_else(|| ResolveError::UnknownSubtype {
            kind: kind.name(),
            subtype: subtype.unwrap_or_default().trim().to_string(),
        })
    }

    /// The device a bare kind resolves to.
    #[must_use]
    pub const fn default_for(kind: Kind) -> Self {
        match kind {
            Kind::Resistor => Self::Resistor(ResistorType::Fixed),
            Kind::Diode => Self::Diode(DiodeType::Rectifier),
            Kind::Capacitor => Self::Capacitor(CapacitorType::Ceramic),
            Kind::Transistor => Self::Transistor(TransistorType::Npn),
            Kind::Active => Self::Active(ActiveType::Generic),
        }
    }

    /// The kind.
    #[must_use]
    pub const fn kind(self) -> Kind {
        match self {
            Self::Resistor(_) => Kind::Resistor,
            Self::Diode(_) => Kind::Diode,
            Self::Capacitor(_) => Kind::Capacitor,
            Self::Transistor(_) => Kind::Transistor,
            Self::Active(_) => Kind::Active,
        }
    }

    /// Canonical subtype name.
    #[must_use]
    pub const fn subtype(self) -> &'static str {
        match self {
            Self::Resistor(t) => t.name(),
            Self::Diode(t) => t.name(),
            Self::Capacitor(t) => t.name(),
            Self::Transistor(t) => t.name(),
            Self::Active(t) => t.name(),
        }
    }

    /// Schematic symbol. Never depends on the package.
    #[must_use]
    pub const fn symbol(self) -> SymbolId {
        match self {
            Self::Resistor(ResistorType::Fixed) => SymbolId::Resistor,
            Self::Diode(d) => match d {
                DiodeType::Rectifier => SymbolId::Diode,
                DiodeType::Zener | DiodeType::TvsUnidirectional => SymbolId::Zener,
                DiodeType::Schottky => SymbolId::Schottky,
                DiodeType::Led => SymbolId::Led,
                DiodeType::Photodiode => SymbolId::Photodiode,
                DiodeType::TvsBidirectional => SymbolId::TvsBidirectional,
                DiodeType::Tunnel => SymbolId::Tunnel,
                DiodeType::Varactor => SymbolId::Varactor,
            },
            Self::Capacitor(c) => match c {
                CapacitorType::Variable => SymbolId::CapacitorVariable,
                CapacitorType::Trimmer => SymbolId::CapacitorTrimmer,
                c if c.is_polarised() => SymbolId::CapacitorPolarised,
                _ => SymbolId::Capacitor,
            },
            Self::Transistor(t) => match t {
                TransistorType::Npn => SymbolId::Npn,
                TransistorType::Pnp => SymbolId::Pnp,
                TransistorType::DarlingtonNpn => SymbolId::DarlingtonNpn,
                TransistorType::DarlingtonPnp => SymbolId::DarlingtonPnp,
                TransistorType::Nmos => SymbolId::NmosEnhancement,
                TransistorType::Pmos => SymbolId::PmosEnhancement,
                TransistorType::NmosDepletion => SymbolId::NmosDepletion,
                TransistorType::PmosDepletion => SymbolId::PmosDepletion,
                TransistorType::JfetN => SymbolId::JfetN,
                TransistorType::JfetP => SymbolId::JfetP,
                TransistorType::IgbtN => SymbolId::IgbtN,
                TransistorType::IgbtP => SymbolId::IgbtP,
                TransistorType::Scr => SymbolId::Scr,
                TransistorType::Triac => SymbolId::Triac,
            },
            Self::Active(ActiveType::Generic) => SymbolId::IcBlock,
        }
    }

    /// Package used when the spec names none.
    #[must_use]
    pub const fn default_package(self) -> &'static str {
        match self {
            Self::Resistor(_) => "0207",
            Self::Diode(d) => match d {
                DiodeType::Rectifier
                | DiodeType::Zener
                | DiodeType::Schottky
                | DiodeType::Tunnel
                | DiodeType::TvsUnidirectional
                | DiodeType::TvsBidirectional => "DO-204-AL",
                DiodeType::Varactor | DiodeType::Photodiode => "DO-204-AH",
                DiodeType::Led => "5MM-ROUND-TH",
            },
            Self::Capacitor(c) => {
                if c.is_polarised() {
                    "RADIAL-5X11"
                } else {
                    "DISC"
                }
            }
            Self::Transistor(t) => match t {
                TransistorType::IgbtN
                | TransistorType::IgbtP
                | TransistorType::Scr
                | TransistorType::Triac => "TO-220-AB",
                _ => "TO-92",
            },
            Self::Active(_) => "TO-92",
        }
    }

    /// Whether the package's polarity marking applies to this device.
    #[must_use]
    pub const fn shows_polarity(self) -> bool {
        match self {
            Self::Diode(d) => !matches!(d, DiodeType::TvsBidirectional),
            Self::Capacitor(c) => c.is_polarised(),
            Self::Resistor(_) | Self::Transistor(_) | Self::Active(_) => false,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind().name(), self.subtype())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [Kind; 5] = [
        Kind::Resistor,
        Kind::Diode,
        Kind::Capacitor,
        Kind::Transistor,
        Kind::Active,
    ];

    #[test]
    fn every_canonical_subtype_round_trips() {
        for kind in KINDS {
            for name in kind.subtypes() {
                let device = Device::from_parts(kind, Some(name)).unwrap();
                assert_eq!(device.kind(), kind);
                assert_eq!(device.subtype(), name);
            }
        }
    }

    #[test]
    fn aliases_and_case_are_accepted() {
        assert_eq!(
            Device::from_parts(Kind::Diode, Some("  VariCap ")).unwrap(),
            Device::Diode(DiodeType::Varactor)
        );
        assert_eq!(
            Device::from_parts(Kind::Diode, Some("TVS")).unwrap(),
            Device::Diode(DiodeType::TvsBidirectional)
        );
        assert_eq!(
            Device::from_parts(Kind::Transistor, Some("BJT_NPN")).unwrap(),
            Device::Transistor(TransistorType::Npn)
        );
    }

    #[test]
    fn subtype_outside_kind_is_rejected() {
        let err = Device::from_parts(Kind::Capacitor, Some("zener")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownSubtype {
                kind: "capacitor",
                subtype: "zener".to_string()
            }
        );
        assert!(Device::from_parts(Kind::Resistor, Some("npn")).is_err());
    }

    #[test]
    fn missing_subtype_uses_the_kind_default() {
        assert_eq!(
            Device::from_parts(Kind::Diode, None).unwrap(),
            Device::Diode(DiodeType::Rectifier)
        );
        assert_eq!(
            Device::from_parts(Kind::Capacitor, Some("  ")).unwrap(),
            Device::Capacitor(CapacitorType::Ceramic)
        );
    }

    #[test]
    fn symbol_and_package_dispatch() {
        let tvs = Device::Diode(DiodeType::TvsUnidirectional);
        assert_eq!(tvs.symbol(), SymbolId::Zener);
        assert_eq!(tvs.default_package(), "DO-204-AL");

        let cap = Device::Capacitor(CapacitorType::Tantalum);
        assert_eq!(cap.symbol(), SymbolId::CapacitorPolarised);
        assert_eq!(cap.default_package(), "RADIAL-5X11");
        assert!(cap.shows_polarity());

        assert!(!Device::Diode(DiodeType::TvsBidirectional).shows_polarity());
        assert_eq!(Device::Transistor(TransistorType::Triac).default_package(), "TO-220-AB");
    }

    #[test]
    fn kind_parsing() {
        assert_eq!(Kind::parse(" Resistor "), Some(Kind::Resistor));
        assert_eq!(Kind::parse("IC"), Some(Kind::Active));
        assert_eq!(Kind::parse("relay"), None);
    }

    #[test]
    fn spec_values_display_as_written() {
        let spec: ComponentSpec = serde_json::from_str(
            r#"{"kind": "diode", "part_number": 1, "spec": {"vr": "100V", "n": 2.5, "x": null}}"#,
        )
        .unwrap();
        assert_eq!(spec.part_number.unwrap().to_string(), "1");
        let rendered: Vec<String> = spec.spec.values().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["100V", "2.5", ""]);
        assert!(spec.spec["x"].is_blank());
    }

    #[test]
    fn component_spec_rejects_unknown_fields() {
        let result: Result<ComponentSpec, _> =
            serde_json::from_str(r#"{"kind": "diode", "pakage": "DO-41"}"#);
        assert!(result.is_err());
    }
}
