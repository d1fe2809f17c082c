extern crate monotone_spline;

use monotone_spline::{Control, MonotoneSpline};

fn main() {

    let mut spline = MonotoneSpline::new(vec![
        Control::new(0.0, 0.0),
        Control::new(0.3, 0.05),
        Control::new(0.5, 0.5),
        Control::new(0.7, 0.95),
        Control::new(1.0, 1.0)
    ]);

    for size in [9, 3, 5] {
        spline.reshape(size).unwrap();

        println!("size {}:", size);
        for control in spline.controls() {
            println!("  {:.3};{:.4}", control.get_key(), control.get_value());
        }
    }
}
