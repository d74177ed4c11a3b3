use polyclip::{difference, intersection, union, Point, Polygon};

fn main() {
    pretty_env_logger::init();

    let subject = Polygon::from_points(vec![
        Point::new(5.0, 5.0),
        Point::new(10.0, 10.0),
        Point::new(10.0, 5.0),
    ]);

    // offset by 2.0 in x
    let clip = Polygon::from_points(vec![
        Point::new(7.0, 5.0),
        Point::new(12.0, 10.0),
        Point::new(12.0, 5.0),
    ]);

    println!("intersection: {:?}", intersection(&subject, &clip));
    println!("union: {:?}", union(&subject, &clip));
    println!("difference: {:?}", difference(&subject, &clip));
}
