//! Pin names printed beside package leads.
//!
//! Polarised two-lead parts are named from the package's polarity marking:
//! the lead nearest the band is the cathode (diodes), the negative terminal
//! (electrolytics) or the positive one (tantalum). Three-lead transistors
//! follow the common JEDEC pinout of their outline family. Anything else
//! with a defined pin order is numbered; passives stay unnamed.

use super::{CapacitorType, Device, DiodeType, TransistorType};
use crate::geometry::Rect;
use crate::library::{Family, PackageGeometry};

/// Splits a `pin_config` string such as `"g d s"` or `"E,B,C"` into
/// upper-case names.
#[must_use]
pub fn parse_pin_config(config: &str) -> Vec<String> {
    config
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Default pin names for `device` in `package`, in lead order. Empty when
/// the leads are interchangeable.
#[must_use]
pub fn default_pin_labels(device: Device, package: &PackageGeometry) -> Vec<String> {
    let pins = package.pin_count();
    let named = match device {
        Device::Resistor(_) | Device::Diode(DiodeType::TvsBidirectional) => return Vec::new(),
        Device::Capacitor(c) if !c.is_polarised() => return Vec::new(),
        Device::Diode(_) => polarised(package, "A", "K", false),
        Device::Capacitor(CapacitorType::Tantalum) => polarised(package, "-", "+", false),
        Device::Capacitor(_) => polarised(package, "+", "-", true),
        Device::Transistor(t) => transistor(t, package.family),
        Device::Active(_) => None,
    };

    match named {
        Some(names) if names.len() == pins => names.iter().map(ToString::to_string).collect(),
        _ => (1..=pins).map(|n| n.to_string()).collect(),
    }
}

/// `marked` goes on the lead nearest the polarity marking, `unmarked` on
/// the other. Without a marking the leads take `[unmarked, marked]`, or the
/// reverse when `marked_first`.
fn polarised(
    package: &PackageGeometry,
    unmarked: &'static str,
    marked: &'static str,
    marked_first: bool,
) -> Option<Vec<&'static str>> {
    let [first, second] = package.leads.as_slice() else {
        return None;
    };
    let Some(mark) = package.marking else {
        return Some(if marked_first {
            vec![marked, unmarked]
        } else {
            vec![unmarked, marked]
        });
    };

    let centre = mark.centre();
    let distance = |r: &Rect| {
        let c = r.centre();
        (c.x - centre.x).hypot(c.y - centre.y)
    };
    Some(if distance(&first.rect) < distance(&second.rect) {
        vec![marked, unmarked]
    } else {
        vec![unmarked, marked]
    })
}

fn transistor(t: TransistorType, family: Family) -> Option<Vec<&'static str>> {
    use TransistorType::{
        DarlingtonNpn, DarlingtonPnp, IgbtN, IgbtP, JfetN, JfetP, Nmos, NmosDepletion, Npn, Pmos,
        PmosDepletion, Pnp, Scr, Triac,
    };

    let names = match t {
        Npn | Pnp | DarlingtonNpn | DarlingtonPnp => match family {
            Family::To92 | Family::MetalCan => vec!["E", "B", "C"],
            Family::Sot => vec!["B", "E", "C"],
            Family::TabbedPower | Family::Sot89 => vec!["B", "C", "E"],
            Family::Diamond => vec!["B", "E"],
            _ => return None,
        },
        Nmos | Pmos | NmosDepletion | PmosDepletion => match family {
            Family::To92 | Family::MetalCan => vec!["S", "G", "D"],
            Family::Sot => vec!["G", "S", "D"],
            Family::TabbedPower | Family::Sot89 => vec!["G", "D", "S"],
            Family::Diamond => vec!["G", "S"],
            _ => return None,
        },
        IgbtN | IgbtP => match family {
            Family::Diamond => vec!["G", "E"],
            _ => vec!["G", "C", "E"],
        },
        JfetN | JfetP => vec!["D", "S", "G"],
        Scr => match family {
            Family::To92 => vec!["K", "G", "A"],
            _ => vec!["K", "A", "G"],
        },
        Triac => vec!["T1", "T2", "G"],
    };
    Some(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{ActiveType, ResistorType};
    use crate::library::Catalog;

    fn labels(device: Device, package: &str) -> Vec<String> {
        default_pin_labels(device, Catalog::shared().package(package).unwrap())
    }

    #[test]
    fn config_strings_split_on_commas_and_spaces() {
        assert_eq!(parse_pin_config("g d s"), ["G", "D", "S"]);
        assert_eq!(parse_pin_config(" e, b,c "), ["E", "B", "C"]);
        assert!(parse_pin_config(" , ").is_empty());
    }

    #[test]
    fn diode_cathode_is_the_banded_end() {
        let rectifier = Device::Diode(DiodeType::Rectifier);
        assert_eq!(labels(rectifier, "DO-41"), ["A", "K"]);
        assert_eq!(labels(rectifier, "SMA"), ["A", "K"]);
        assert_eq!(labels(Device::Diode(DiodeType::Led), "5MM-ROUND-TH"), ["A", "K"]);
    }

    #[test]
    fn electrolytic_stripe_marks_the_negative_lead() {
        let cap = Device::Capacitor(CapacitorType::Electrolytic);
        assert_eq!(labels(cap, "RADIAL-5X11"), ["-", "+"]);
        let tantalum = Device::Capacitor(CapacitorType::Tantalum);
        assert_eq!(labels(tantalum, "SMA"), ["-", "+"]);
    }

    #[test]
    fn transistors_follow_their_outline() {
        let npn = Device::Transistor(TransistorType::Npn);
        assert_eq!(labels(npn, "TO-92"), ["E", "B", "C"]);
        assert_eq!(labels(npn, "SOT-23"), ["B", "E", "C"]);
        assert_eq!(labels(npn, "TO-220-AB"), ["B", "C", "E"]);

        let nmos = Device::Transistor(TransistorType::Nmos);
        assert_eq!(labels(nmos, "TO-220-AB"), ["G", "D", "S"]);
        assert_eq!(labels(nmos, "TO-3"), ["G", "S"]);
    }

    #[test]
    fn unmatched_pin_counts_are_numbered() {
        let npn = Device::Transistor(TransistorType::Npn);
        assert_eq!(labels(npn, "SOT-23-5"), ["1", "2", "3", "4", "5"]);
        assert_eq!(
            labels(Device::Active(ActiveType::Generic), "TO-92"),
            ["1", "2", "3"]
        );
    }

    #[test]
    fn passives_are_unnamed() {
        assert!(labels(Device::Resistor(ResistorType::Fixed), "0207").is_empty());
        assert!(labels(Device::Capacitor(CapacitorType::Ceramic), "DISC").is_empty());
        assert!(labels(Device::Diode(DiodeType::TvsBidirectional), "SMB").is_empty());
    }
}
