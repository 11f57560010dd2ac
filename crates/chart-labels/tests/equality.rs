// File: crates/chart-labels/tests/equality.rs
// Purpose: Value equality of generators over template and per-axis formatters.

use chart_labels::{
    DateFormat, NumberFormat, StandardXyToolTipGenerator, StandardXyzToolTipGenerator, DEFAULT_TOOL_TIP_FORMAT,
};

fn numbers(template: &str) -> StandardXyzToolTipGenerator {
    let n = NumberFormat::number;
    StandardXyzToolTipGenerator::with_number_formats(template, n(), n(), n()).unwrap()
}

#[test]
fn reflexive_and_symmetric() {
    let a = numbers(DEFAULT_TOOL_TIP_FORMAT);
    let b = numbers(DEFAULT_TOOL_TIP_FORMAT);
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(a.clone(), a);
}

#[test]
fn template_difference() {
    let a = numbers(DEFAULT_TOOL_TIP_FORMAT);
    let b = numbers("{0} {1} {2} {3}");
    assert_ne!(a, b);
    assert_ne!(b, a);
}

#[test]
fn formatter_differences() {
    let base = StandardXyzToolTipGenerator::builder()
        .template(DEFAULT_TOOL_TIP_FORMAT)
        .x(NumberFormat::number())
        .y(NumberFormat::number())
        .z(NumberFormat::number());

    let same = base.clone().build().unwrap();
    let x_digits = base.clone().x(NumberFormat::number().with_fraction_digits(2, 2).unwrap()).build().unwrap();
    let y_grouping = base.clone().y(NumberFormat::number().with_grouping(false)).build().unwrap();
    let z_date = base.clone().z(DateFormat::short()).build().unwrap();
    let z_other_date = base.clone().z(DateFormat::new("%Y").unwrap()).build().unwrap();
    let z_offset = base.z(DateFormat::short().with_offset_seconds(3600).unwrap()).build().unwrap();

    let all = [&same, &x_digits, &y_grouping, &z_date, &z_other_date, &z_offset];
    for (i, a) in all.iter().enumerate() {
        for (j, b) in all.iter().enumerate() {
            assert_eq!(i == j, a == b, "generators {i} and {j}");
        }
    }
}

#[test]
fn xy_equality() {
    let a = StandardXyToolTipGenerator::default();
    let b = StandardXyToolTipGenerator::with_number_formats("{0}: ({1}, {2})", NumberFormat::number(), NumberFormat::number())
        .unwrap();
    let c = StandardXyToolTipGenerator::with_number_formats("{0}: ({1}, {2})", NumberFormat::integer(), NumberFormat::number())
        .unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}
