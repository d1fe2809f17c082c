extern crate monotone_spline;

use monotone_spline::{Control, MonotoneSpline};

fn main() {

    // controls arrive in the order a user clicked them
    let mut spline = MonotoneSpline::default();
    spline.add_control(Control::new(4.0, 3.0));
    spline.add_control(Control::new(0.0, 0.0));
    spline.add_control(Control::new(2.0, 2.9));
    spline.add_control(Control::new(1.0, 0.2));
    spline.add_control(Control::new(6.0, 3.0));

    let number_of_steps = 60;
    let (t_min, t_max) = spline.key_range().unwrap();
    let step = (t_max - t_min) / number_of_steps as f64;

    let mut t_vector = Vec::new();
    for i in 0..=number_of_steps {
        t_vector.push(t_min + step * i as f64);
    }

    let result = spline.batch_interpolate(&t_vector).unwrap();

    println!("t;value");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.3}", t_vector[i], result[i]);
    }
}
