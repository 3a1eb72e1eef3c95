//! Value formatting and marking codes.
//!
//! Resistances are held as a three-significant-digit mantissa and a decade
//! exponent (`4700 Ω` is `470 × 10^(3-2)`), which is what every printed form
//! (SI text, SMD codes, colour bands) is derived from.

use crate::error::ResolveError;
use crate::geometry::Color;

/// EIA-96 two-digit codes for the E96 mantissas.
const EIA96: [(u32, &str); 96] = [
    (100, "01"), (102, "02"), (105, "03"), (107, "04"), (110, "05"), (113, "06"),
    (115, "07"), (118, "08"), (121, "09"), (124, "10"), (127, "11"), (130, "12"),
    (133, "13"), (137, "14"), (140, "15"), (143, "16"), (147, "17"), (150, "18"),
    (154, "19"), (158, "20"), (162, "21"), (165, "22"), (169, "23"), (174, "24"),
    (178, "25"), (182, "26"), (187, "27"), (191, "28"), (196, "29"), (200, "30"),
    (205, "31"), (210, "32"), (215, "33"), (221, "34"), (226, "35"), (232, "36"),
    (237, "37"), (243, "38"), (249, "39"), (255, "40"), (261, "41"), (267, "42"),
    (274, "43"), (280, "44"), (287, "45"), (294, "46"), (301, "47"), (309, "48"),
    (316, "49"), (324, "50"), (332, "51"), (340, "52"), (348, "53"), (357, "54"),
    (365, "55"), (374, "56"), (383, "57"), (392, "58"), (402, "59"), (412, "60"),
    (422, "61"), (432, "62"), (442, "63"), (453, "64"), (464, "65"), (475, "66"),
    (487, "67"), (499, "68"), (511, "69"), (523, "70"), (536, "71"), (549, "72"),
    (562, "73"), (576, "74"), (590, "75"), (604, "76"), (619, "77"), (634, "78"),
    (649, "79"), (665, "80"), (681, "81"), (698, "82"), (715, "83"), (732, "84"),
    (750, "85"), (768, "86"), (787, "87"), (806, "88"), (825, "89"), (845, "90"),
    (866, "91"), (887, "92"), (909, "93"), (931, "94"), (953, "95"), (976, "96"),
];

/// EIA-96 multiplier letters, indexed by `exponent + 1`.
const EIA96_MULTIPLIERS: [char; 9] = ['Z', 'Y', 'X', 'A', 'B', 'C', 'D', 'E', 'F'];

/// Smallest and largest resistance accepted, in ohms.
const OHMS_RANGE: (f64, f64) = (1e-9, 1e15);

/// Fixed-point resistance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResistorValue {
    mantissa: u32,
    exponent: i32,
}

impl ResistorValue {
    /// Rounds `ohms` to three significant digits.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidValue`] for negative, non-finite or
    /// out-of-range values.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // range-checked above
    pub fn from_ohms(ohms: f64) -> Result<Self, ResolveError> {
        if !ohms.is_finite() || ohms < 0.0 {
            return Err(ResolveError::InvalidValue {
                field: "value_ohms",
                message: format!("{ohms} is not a valid resistance"),
            });
        }
        if ohms == 0.0 {
            return Ok(Self {
                mantissa: 0,
                exponent: 0,
            });
        }
        if !(OHMS_RANGE.0..=OHMS_RANGE.1).contains(&ohms) {
            return Err(ResolveError::InvalidValue {
                field: "value_ohms",
                message: format!("{ohms} is outside {:e}..{:e}", OHMS_RANGE.0, OHMS_RANGE.1),
            });
        }

        let mut exponent = ohms.log10().floor() as i32;
        let mut mantissa = (ohms / 10f64.powi(exponent - 2)).round() as u32;
        while mantissa >= 1000 {
            exponent += 1;
            mantissa /= 10;
        }
        while mantissa < 100 {
            exponent -= 1;
            mantissa = (ohms / 10f64.powi(exponent - 2)).round() as u32;
        }

        Ok(Self { mantissa, exponent })
    }

    /// The three significant digits (`100..=999`, or `0`).
    #[must_use]
    pub const fn mantissa(&self) -> u32 {
        self.mantissa
    }

    /// Decade of the most significant digit.
    #[must_use]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Value in ohms after rounding.
    #[must_use]
    pub fn ohms(&self) -> f64 {
        f64::from(self.mantissa) * 10f64.powi(self.exponent - 2)
    }

    /// Human-readable form with SI prefix: `4.7k`, `100`, `0.47`, `2.2M`.
    #[must_use]
    pub fn display(&self) -> String {
        let val = self.mantissa;
        if val == 0 {
            return "0".to_string();
        }

        if (-3..0).contains(&self.exponent) {
            let digits = val.to_string();
            let digits = digits.trim_end_matches('0');
            let zeros = "0".repeat(usize::try_from(-self.exponent - 1).unwrap_or(0));
            return format!("0.{zeros}{digits}");
        }

        let prefix = match self.exponent.div_euclid(3) {
            4.. => "T",
            3 => "G",
            2 => "M",
            1 => "k",
            0 => "",
            -1 => "m",
            -2 => "µ",
            _ => "n",
        };

        let number = match self.exponent.rem_euclid(3) {
            0 if val % 100 == 0 => format!("{}", val / 100),
            0 if val % 10 == 0 => format!("{}.{}", val / 100, (val % 100) / 10),
            0 => format!("{}.{:02}", val / 100, val % 100),
            1 if val % 10 == 0 => format!("{}", val / 10),
            1 => format!("{}.{}", val / 10, val % 10),
            _ => val.to_string(),
        };

        format!("{number}{prefix}")
    }

    /// Three-digit SMD code (`472`, `4R7`, `R47`), when representable.
    #[must_use]
    pub fn code3(&self) -> Option<String> {
        let val = self.mantissa;
        if val % 10 != 0 {
            return None;
        }
        if val == 0 {
            return Some("000".to_string());
        }

        let digits = (val / 10).to_string();
        let d: Vec<char> = digits.chars().collect();
        match self.exponent {
            e if e > 0 => Some(format!("{digits}{}", e - 1)),
            0 => Some(format!("{}R{}", d[0], d[1])),
            -1 => Some(format!("R{digits}")),
            -2 if val % 100 == 0 => Some(format!("R0{}", d[0])),
            _ => None,
        }
    }

    /// Four-digit SMD code (`4701`, `47R0`, `4R70`), when representable.
    #[must_use]
    pub fn code4(&self) -> Option<String> {
        let val = self.mantissa;
        if val == 0 {
            return Some("0000".to_string());
        }

        let digits = val.to_string();
        let d: Vec<char> = digits.chars().collect();
        match self.exponent {
            e if e > 1 => Some(format!("{digits}{}", e - 2)),
            1 => Some(format!("{}{}R{}", d[0], d[1], d[2])),
            0 => Some(format!("{}R{}{}", d[0], d[1], d[2])),
            -1 => Some(format!("R{digits}")),
            -2 if val % 10 == 0 => Some(format!("R0{}{}", d[0], d[1])),
            -3 if val % 100 == 0 => Some(format!("R00{}", d[0])),
            _ => None,
        }
    }

    /// EIA-96 code (`01C` is 10 kΩ), for E96 mantissas only.
    #[must_use]
    pub fn eia96(&self) -> Option<String> {
        let (_, digits) = EIA96.iter().find(|(m, _)| *m == self.mantissa)?;
        let index = usize::try_from(self.exponent + 1).ok()?;
        let letter = EIA96_MULTIPLIERS.get(index)?;
        Some(format!("{digits}{letter}"))
    }

    /// All representable SMD codes, in 3-digit, 4-digit, EIA-96 order.
    #[must_use]
    pub fn smd_codes(&self) -> Vec<String> {
        [self.code3(), self.code4(), self.eia96()]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Colour bands for a through-hole body, tolerance band last.
    ///
    /// Values with two significant digits get four bands (gold tolerance),
    /// others five (brown tolerance). `None` when the multiplier falls
    /// outside the silver..white range.
    #[must_use]
    pub fn colour_bands(&self) -> Option<Vec<BandColour>> {
        let val = self.mantissa;
        if val == 0 {
            return Some(vec![BandColour::Black]);
        }

        let (digits, multiplier, tolerance) = if val % 10 == 0 {
            (val / 10, self.exponent - 1, BandColour::Gold)
        } else {
            (val, self.exponent - 2, BandColour::Brown)
        };

        let mut bands: Vec<BandColour> = digits
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .filter_map(BandColour::digit)
            .collect();
        bands.push(BandColour::multiplier(multiplier)?);
        bands.push(tolerance);
        Some(bands)
    }
}

/// Resistor colour code band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandColour {
    /// 0
    Black,
    /// 1
    Brown,
    /// 2
    Red,
    /// 3
    Orange,
    /// 4
    Yellow,
    /// 5
    Green,
    /// 6
    Blue,
    /// 7
    Violet,
    /// 8
    Grey,
    /// 9
    White,
    /// ×0.1
    Gold,
    /// ×0.01
    Silver,
}

impl BandColour {
    const DIGITS: [Self; 10] = [
        Self::Black,
        Self::Brown,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Violet,
        Self::Grey,
        Self::White,
    ];

    /// Band for a significant digit.
    #[must_use]
    pub fn digit(d: u32) -> Option<Self> {
        Self::DIGITS.get(usize::try_from(d).ok()?).copied()
    }

    /// Band for a decade multiplier.
    #[must_use]
    pub fn multiplier(exponent: i32) -> Option<Self> {
        match exponent {
            -2 => Some(Self::Silver),
            -1 => Some(Self::Gold),
            e => Self::DIGITS.get(usize::try_from(e).ok()?).copied(),
        }
    }

    /// Printed colour.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Black => Color::BLACK,
            Self::Brown => Color::hex(0x008B_4513),
            Self::Red => Color::hex(0x00E0_1B24),
            Self::Orange => Color::hex(0x00FF_8C00),
            Self::Yellow => Color::hex(0x00FF_E100),
            Self::Green => Color::hex(0x0026_A269),
            Self::Blue => Color::hex(0x001C_71D8),
            Self::Violet => Color::hex(0x0081_3D9C),
            Self::Grey => Color::hex(0x0080_8080),
            Self::White => Color::WHITE,
            Self::Gold => Color::hex(0x00CF_B53B),
            Self::Silver => Color::hex(0x00C0_C0C0),
        }
    }
}

/// Parses `"100nF"`, `"4.7 µF"`, `"22pf"` into picofarads.
#[must_use]
pub fn parse_capacitance_pf(text: &str) -> Option<f64> {
    let s: String = text
        .trim()
        .to_lowercase()
        .replace(' ', "")
        .replace(['µ', 'μ'], "u");

    let (number, scale) = [("pf", 1.0), ("nf", 1e3), ("uf", 1e6), ("mf", 1e9)]
        .into_iter()
        .find_map(|(suffix, scale)| s.strip_suffix(suffix).map(|n| (n, scale)))?;

    let value: f64 = number.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value * scale)
}

/// EIA body code for a capacitance in picofarads (`100000 → "104"`).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // pf is non-negative and bounded
pub fn capacitor_code(pf: f64) -> Option<String> {
    if !pf.is_finite() || pf < 0.0 {
        return None;
    }

    if pf < 10.0 {
        if (pf - pf.round()).abs() < 0.05 {
            return Some(format!("{}", pf.round() as u64));
        }
        let text = format!("{pf:.1}");
        return Some(text.trim_end_matches('0').trim_end_matches('.').to_string());
    }

    let value = pf.round() as u64;
    if value < 100 {
        return Some(format!("{value:02}0"));
    }

    let mut multiplier = 0u32;
    let mut sig = value;
    while sig >= 100 {
        // round half up at the final digit dropped
        sig = if sig < 1000 { (sig + 5) / 10 } else { sig / 10 };
        multiplier += 1;
    }
    (multiplier <= 9).then(|| format!("{sig:02}{multiplier}"))
}

/// EIA tolerance letter for `"±10%"`, `"+-0.25pF"`, `"+80%-20%"`.
#[must_use]
pub fn tolerance_letter(text: &str) -> Option<char> {
    let key: String = text
        .trim()
        .to_lowercase()
        .replace(' ', "")
        .replace('±', "+-")
        .replace('−', "-")
        .replace("--", "-");

    match key.as_str() {
        "+-0.25pf" => Some('C'),
        "+-0.5pf" => Some('D'),
        "+-1pf" => Some('E'),
        "+-1%" => Some('F'),
        "+-2%" => Some('G'),
        "+-5%" => Some('J'),
        "+-10%" => Some('K'),
        "+-20%" => Some('M'),
        "+80%-20%" => Some('Z'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(ohms: f64) -> ResistorValue {
        ResistorValue::from_ohms(ohms).unwrap()
    }

    #[test]
    fn si_display() {
        assert_eq!(r(4700.0).display(), "4.7k");
        assert_eq!(r(100.0).display(), "100");
        assert_eq!(r(47.0).display(), "47");
        assert_eq!(r(1.0).display(), "1");
        assert_eq!(r(0.47).display(), "0.47");
        assert_eq!(r(0.047).display(), "0.047");
        assert_eq!(r(2_200_000.0).display(), "2.2M");
        assert_eq!(r(10_000.0).display(), "10k");
        assert_eq!(r(4750.0).display(), "4.75k");
        assert_eq!(r(1050.0).display(), "1.05k");
        assert_eq!(r(0.0).display(), "0");
    }

    #[test]
    fn rounding_carries_into_the_next_decade() {
        let v = r(999.7);
        assert_eq!(v.mantissa(), 100);
        assert_eq!(v.exponent(), 3);
        assert_eq!(v.display(), "1k");
    }

    #[test]
    fn sub_milliohm_values_use_prefixes() {
        assert_eq!(r(0.000_47).display(), "470µ");
        assert_eq!(r(0.000_004_7).display(), "4.7µ");
    }

    #[test]
    fn rejects_negative_and_absurd_values() {
        assert!(matches!(
            ResistorValue::from_ohms(-1.0),
            Err(ResolveError::InvalidValue { field: "value_ohms", .. })
        ));
        assert!(ResistorValue::from_ohms(f64::INFINITY).is_err());
        assert!(ResistorValue::from_ohms(1e20).is_err());
    }

    #[test]
    fn three_digit_codes() {
        assert_eq!(r(4700.0).code3().as_deref(), Some("472"));
        assert_eq!(r(4.7).code3().as_deref(), Some("4R7"));
        assert_eq!(r(0.47).code3().as_deref(), Some("R47"));
        assert_eq!(r(0.05).code3().as_deref(), Some("R05"));
        assert_eq!(r(4750.0).code3(), None);
    }

    #[test]
    fn four_digit_codes() {
        assert_eq!(r(4700.0).code4().as_deref(), Some("4701"));
        assert_eq!(r(47.0).code4().as_deref(), Some("47R0"));
        assert_eq!(r(4.7).code4().as_deref(), Some("4R70"));
        assert_eq!(r(4750.0).code4().as_deref(), Some("4751"));
    }

    #[test]
    fn eia96_codes() {
        assert_eq!(r(10_000.0).eia96().as_deref(), Some("01C"));
        assert_eq!(r(4750.0).eia96().as_deref(), Some("66B"));
        assert_eq!(r(4700.0).eia96(), None);
        assert_eq!(r(4750.0).smd_codes(), vec!["4751", "66B"]);
    }

    #[test]
    fn colour_bands_four_and_five() {
        use BandColour::{Black, Brown, Gold, Green, Red, Silver, Violet, Yellow};
        assert_eq!(r(4700.0).colour_bands(), Some(vec![Yellow, Violet, Red, Gold]));
        assert_eq!(r(4750.0).colour_bands(), Some(vec![Yellow, Violet, Green, Brown, Brown]));
        assert_eq!(r(1.0).colour_bands(), Some(vec![Brown, Black, Gold, Gold]));
        assert_eq!(r(0.1).colour_bands(), Some(vec![Brown, Black, Silver, Gold]));
        assert_eq!(r(0.01).colour_bands(), None);
    }

    #[test]
    fn capacitance_parsing_and_codes() {
        assert_eq!(parse_capacitance_pf("100nF"), Some(100_000.0));
        assert_eq!(parse_capacitance_pf(" 4.7 µF"), Some(4_700_000.0));
        assert_eq!(parse_capacitance_pf("22pf"), Some(22.0));
        assert_eq!(parse_capacitance_pf("100V"), None);

        assert_eq!(capacitor_code(100_000.0).as_deref(), Some("104"));
        assert_eq!(capacitor_code(4_700_000.0).as_deref(), Some("475"));
        assert_eq!(capacitor_code(22.0).as_deref(), Some("220"));
        assert_eq!(capacitor_code(4.7).as_deref(), Some("4.7"));
        assert_eq!(capacitor_code(5.0).as_deref(), Some("5"));
        assert_eq!(capacitor_code(150.0).as_deref(), Some("151"));
    }

    #[test]
    fn tolerance_letters() {
        assert_eq!(tolerance_letter("±10%"), Some('K'));
        assert_eq!(tolerance_letter("+- 5 %"), Some('J'));
        assert_eq!(tolerance_letter("+80%-20%"), Some('Z'));
        assert_eq!(tolerance_letter("3%"), None);
    }
}
