//! The shipped curve catalogue, in listing order.

mod cartesian;
mod parametric;
mod polar;
mod polygon;

use crate::CurveDefinition;

/// All built-in curves: cartesian, parametric, polar, then polygon.
pub fn builtin_definitions() -> Vec<CurveDefinition> {
    let mut defs = cartesian::definitions();
    defs.extend(parametric::definitions());
    defs.extend(polar::definitions());
    defs.extend(polygon::definitions());
    defs
}
