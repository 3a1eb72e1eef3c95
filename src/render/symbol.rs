//! Symbol Renderer.

use super::{guide_frame, StrokedFit};
use crate::geometry::{Primitive, Rect};
use crate::library::SymbolDefinition;

/// Draws `symbol` into `target`, uniformly scaled and centred.
///
/// With `draw_outline` a guide frame marks the target box. A target with no
/// area yields no primitives.
#[must_use]
pub fn render_symbol(symbol: &SymbolDefinition, target: Rect, draw_outline: bool) -> Vec<Primitive> {
    let Some(fit) = StrokedFit::new(symbol.frame, target, symbol.max_stroke()) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(symbol.primitives.len() + 1);
    if draw_outline {
        out.extend(guide_frame(target));
    }
    out.extend(symbol.primitives.iter().map(|p| fit.place(p)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{Catalog, SymbolId};

    #[test]
    fn wide_box_centres_horizontally() {
        let symbol = Catalog::shared().symbol(SymbolId::Npn).unwrap();
        let target = Rect::new(0.0, 0.0, 100.0, 20.0);
        let prims = render_symbol(symbol, target, false);
        let bounds = prims
            .iter()
            .map(Primitive::bounds)
            .reduce(|a, b| a.union(&b))
            .unwrap();
        assert!(target.contains_rect(&bounds, 1e-9));
        let left_slack = bounds.x - target.x;
        let right_slack = target.right() - bounds.right();
        assert!(left_slack > 30.0 && right_slack > 30.0);
    }

    #[test]
    fn aspect_ratio_survives() {
        let symbol = Catalog::shared().symbol(SymbolId::Resistor).unwrap();
        for target in [Rect::new(0.0, 0.0, 300.0, 30.0), Rect::new(0.0, 0.0, 30.0, 300.0)] {
            let prims = render_symbol(symbol, target, false);
            let body = prims
                .iter()
                .find_map(|p| match p.shape {
                    crate::geometry::Shape::Rect { rect, .. } => Some(rect),
                    _ => None,
                })
                .unwrap();
            let source = symbol
                .primitives
                .iter()
                .find_map(|p| match p.shape {
                    crate::geometry::Shape::Rect { rect, .. } => Some(rect),
                    _ => None,
                })
                .unwrap();
            let ratio = body.width / body.height;
            assert!((ratio - source.width / source.height).abs() < 1e-9);
        }
    }

    #[test]
    fn outline_flag_adds_one_frame() {
        let symbol = Catalog::shared().symbol(SymbolId::Diode).unwrap();
        let target = Rect::new(5.0, 5.0, 40.0, 20.0);
        let plain = render_symbol(symbol, target, false);
        let framed = render_symbol(symbol, target, true);
        assert_eq!(framed.len(), plain.len() + 1);
    }

    #[test]
    fn empty_box_draws_nothing() {
        let symbol = Catalog::shared().symbol(SymbolId::Led).unwrap();
        assert!(render_symbol(symbol, Rect::new(0.0, 0.0, 0.0, 0.0), true).is_empty());
    }
}
