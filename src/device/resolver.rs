//! Device Resolver: turns a [`ComponentSpec`] into a render-ready [`Label`].

use tracing::debug;

use super::values::{capacitor_code, parse_capacitance_pf, tolerance_letter};
use super::{default_pin_labels, BandColour, ComponentSpec, Device, Kind, ResistorValue, PIN_CONFIG_KEY};
use crate::error::ResolveError;
use crate::library::{Catalog, Family, PackageGeometry, PackageVariant, SymbolDefinition};

/// A resolved label. Never mutated after resolution.
#[derive(Debug, Clone)]
pub struct Label<'c> {
    /// The entry as written.
    pub spec: ComponentSpec,
    /// Resolved kind × subtype.
    pub device: Device,
    /// Schematic symbol.
    pub symbol: &'c SymbolDefinition,
    /// Package outline.
    pub package: &'c PackageGeometry,
    /// Style modifier from the package qualifiers.
    pub variant: PackageVariant,
    /// Display lines, title first.
    pub lines: Vec<String>,
    /// Body colour bands, for axial resistors with a representable value.
    pub bands: Option<Vec<BandColour>>,
    /// Pin names in lead order; empty when the leads are interchangeable.
    pub pins: Vec<String>,
}

impl Label<'_> {
    /// The first display line.
    #[must_use]
    pub fn title(&self) -> &str {
        self.lines.first().map_or("", String::as_str)
    }

    /// Whether the package should carry its polarity marking.
    #[must_use]
    pub const fn shows_polarity(&self) -> bool {
        self.device.shows_polarity() && self.package.is_marked()
    }
}

/// Resolves component specifications against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct DeviceResolver<'c> {
    catalog: &'c Catalog,
}

impl<'c> DeviceResolver<'c> {
    /// Creates a resolver reading from `catalog`.
    #[must_use]
    pub const fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Resolves one specification.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] naming the first problem found: the kind,
    /// then the subtype, then the package and symbol, then required fields.
    pub fn resolve(&self, spec: &ComponentSpec) -> Result<Label<'c>, ResolveError> {
        let kind = Kind::parse(&spec.kind).ok_or_else(|| ResolveError::UnknownKind {
            kind: spec.kind.trim().to_string(),
        })?;
        let device = Device::from_parts(kind, spec.subtype.as_deref())?;

        let package_id = spec
            .package
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| device.default_package());
        let package = self.catalog.resolve_package(package_id).ok_or_else(|| {
            ResolveError::UnknownPackage {
                package: package_id.to_string(),
            }
        })?;
        if !package.variant.unrecognised.is_empty() {
            debug!(
                package = package.geometry.id,
                qualifiers = ?package.variant.unrecognised,
                "Ignoring unrecognised package qualifiers"
            );
        }

        let symbol_id = device.symbol();
        let symbol = self
            .catalog
            .symbol(symbol_id)
            .ok_or(ResolveError::MissingSymbol {
                symbol: symbol_id.name(),
            })?;

        let resistance = match kind {
            Kind::Resistor => {
                let ohms = spec.value_ohms.ok_or(ResolveError::MissingField {
                    kind: kind.name(),
                    field: "value_ohms",
                })?;
                Some(ResistorValue::from_ohms(ohms)?)
            }
            _ => {
                if !matches!(&spec.part_number, Some(part) if !part.is_blank()) {
                    return Err(ResolveError::MissingField {
                        kind: kind.name(),
                        field: "part_number",
                    });
                }
                None
            }
        };

        let pins = spec
            .pin_override()
            .unwrap_or_else(|| default_pin_labels(device, package.geometry));
        if pins.len() > package.geometry.pin_count() {
            debug!(
                package = package.geometry.id,
                names = pins.len(),
                leads = package.geometry.pin_count(),
                "More pin names than leads"
            );
        }

        let lines = display_lines(spec, device, resistance.as_ref(), package.geometry);
        let bands = resistance
            .filter(|_| package.geometry.family == Family::Axial)
            .and_then(|value| value.colour_bands());

        debug!(
            device = %device,
            symbol = symbol_id.name(),
            package = package.geometry.id,
            lines = lines.len(),
            "Resolved label"
        );

        Ok(Label {
            spec: spec.clone(),
            device,
            symbol,
            package: package.geometry,
            variant: package.variant,
            lines,
            bands,
            pins,
        })
    }
}

/// Title, then `spec` entries in document order, then derived lines.
fn display_lines(
    spec: &ComponentSpec,
    device: Device,
    resistance: Option<&ResistorValue>,
    package: &PackageGeometry,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(spec.spec.len() + 3);

    match (resistance, &spec.part_number) {
        (Some(value), _) => lines.push(value.display()),
        (None, Some(part)) => lines.push(part.to_string()),
        (None, None) => {}
    }

    if device.kind() == Kind::Active {
        if let Some(role) = spec.role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            lines.push(role.to_string());
        }
    }

    lines.extend(
        spec.spec
            .iter()
            .filter(|(key, value)| !value.is_blank() && key.as_str() != PIN_CONFIG_KEY)
            .map(|(key, value)| format!("{key}: {value}")),
    );

    match device.kind() {
        Kind::Resistor => {
            let codes = resistance.map(ResistorValue::smd_codes).unwrap_or_default();
            if !codes.is_empty() {
                lines.push(format!("SMD: {}", codes.join(" ")));
            }
        }
        Kind::Capacitor => {
            if let Some(code) = capacitor_marking(spec) {
                lines.push(format!("code: {code}"));
            }
        }
        Kind::Diode | Kind::Transistor | Kind::Active => {}
    }

    if device.kind() != Kind::Resistor {
        lines.push(package.id.to_string());
    }

    lines
}

/// First `spec` entry whose key matches one of `names`, ignoring case.
fn spec_field(spec: &ComponentSpec, names: &[&str]) -> Option<String> {
    spec.spec
        .iter()
        .find(|(key, _)| names.iter().any(|n| key.eq_ignore_ascii_case(n)))
        .map(|(_, value)| value.to_string())
        .filter(|s| !s.is_empty())
}

/// `"104K"` from `c: "100nF"` and `tol: "±10%"`.
fn capacitor_marking(spec: &ComponentSpec) -> Option<String> {
    let pf = parse_capacitance_pf(&spec_field(spec, &["c", "capacitance"])?)?;
    let mut code = capacitor_code(pf)?;
    if let Some(letter) = spec_field(spec, &["tol", "tolerance"]).and_then(|t| tolerance_letter(&t)) {
        code.push(letter);
    }
    Some(code)
}
