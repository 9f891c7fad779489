use morphdk::*;
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // soma contour as read from a morphology file
    let mut soma = Points::from(vec![
        [0.0, 0.0, 0.0],
        [2.0, 0.0, 0.0],
        [2.0, 2.0, 0.0],
        [0.0, 2.0, 0.0],
    ]);

    let center = soma.center_of_gravity()?;
    println!("center of gravity: {}", center);
    println!("radius: {}", soma.max_distance_to_center_of_gravity()?);

    soma -= center;
    soma.scale_in_place(10);
    print!("recentered and scaled contour:\n{}", dump_points(&soma));

    let neurite = Points::from(vec![[0.0, 0.0, 2.0], [0.0, 0.0, 5.0]]);
    let length: FloatType = neurite
        .windows(2)
        .map(|seg| distance(&seg[0], &seg[1]))
        .sum();
    println!("neurite length: {}", length);

    if let Err(err) = Points::new().center_of_gravity() {
        eprintln!("empty soma: {}", err);
    }
    Ok(())
}
