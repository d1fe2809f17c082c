extern crate monotone_spline;

use monotone_spline::{Control, MonotoneSpline};

fn main() {

    let controls = vec![
        Control::new(0.0, 43.76931),
        Control::new(0.25, 19.131026),
        Control::new(0.5, 10.58543),
        Control::new(0.75, 5.7298435),
        Control::new(1.0, 2.627706)
    ];

    let spline = MonotoneSpline::new(controls);

    let t_min = -0.1;
    let t_max = 1.1;
    let number_of_steps = 120;
    let step = (t_max - t_min) / number_of_steps as f64;

    println!("t;value");
    for i in 0..=number_of_steps {
        let t = t_min + step * i as f64;
        println!("{:.3};{:.4}", t, spline.interpolate(t).unwrap());
    }
}
