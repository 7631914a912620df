// File: crates/pie-core/src/label.rs
// Summary: Floating label placement for the highlighted wedge.

use crate::geometry::{ChartGeometry, Point};
use crate::selection::SelectionState;
use crate::series::DataItem;

/// Text shown in the donut hole for the highlighted item.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingLabel<'a> {
    pub index: usize,
    pub text: &'a str,
    /// Center of the label box.
    pub anchor: Point,
    /// Largest box that fits inside the hole (side of the inscribed square).
    pub max_width: f64,
}

pub fn floating_label<'a>(
    data: &'a [DataItem],
    state: &SelectionState,
    geometry: &ChartGeometry,
) -> Option<FloatingLabel<'a>> {
    let index = state.highlighted_index?;
    let item = data.get(index)?;
    Some(FloatingLabel {
        index,
        text: &item.name,
        anchor: geometry.center,
        max_width: geometry.inner_radius * std::f64::consts::SQRT_2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::from_pairs;

    #[test]
    fn label_follows_selection() {
        let data = from_pairs([("Apples", 1.0), ("Pears", 2.0)]);
        let g = ChartGeometry::new(Point::new(140.0, 140.0), 100.0, 40.0).unwrap();
        let l = floating_label(&data, &SelectionState::default(), &g).unwrap();
        assert_eq!(l.text, "Apples");
        assert_eq!(l.anchor, g.center);
        assert!((l.max_width - 60.0 * 2f64.sqrt()).abs() < 1e-9);

        let l = floating_label(&data, &SelectionState::new(Some(1)), &g).unwrap();
        assert_eq!((l.index, l.text), (1, "Pears"));
    }

    #[test]
    fn no_label_without_valid_selection() {
        let data = from_pairs([("Apples", 1.0)]);
        let g = ChartGeometry::new(Point::default(), 100.0, 40.0).unwrap();
        assert!(floating_label(&data, &SelectionState::new(None), &g).is_none());
        assert!(floating_label(&data, &SelectionState::new(Some(7)), &g).is_none());
    }
}
