use anyhow::Result;
use ndarray::{Array2, Axis};
use rand::Rng;

use ml_rescale::preprocessing::{normalize, standardize, AxisRescaler};
use ml_rescale::RescaleMethod;

fn main() -> Result<()> {
    env_logger::init();

    // Small random dataset: 5 samples, 3 features on very different scales
    let mut rng = rand::thread_rng();
    let mut values = Vec::with_capacity(15);
    for _ in 0..5 {
        values.push(rng.gen_range(0.0..1.0));
        values.push(rng.gen_range(-50.0..50.0));
        values.push(rng.gen_range(1_000.0..10_000.0));
    }
    let x = Array2::from_shape_vec((5, 3), values)?;

    println!("Input shape: {:?}", x.shape());
    println!("Input:\n{:.3}", x);

    let normalized = normalize(&x)?;
    println!("Min-max normalized (whole array):\n{:.3}", normalized);

    let standardized = standardize(&x)?;
    println!("Z-score standardized (whole array):\n{:.3}", standardized);

    // Per-feature scaling, fitted down the sample axis
    let scaler = AxisRescaler::fit(RescaleMethod::ZScore, &x, Axis(0))?;
    println!("Per-column means: {:.3}", scaler.offsets());
    println!("Per-column stds:  {:.3}", scaler.scales());
    println!("Per-column standardized:\n{:.3}", scaler.transform(&x)?);

    // Integer data is converted explicitly before rescaling
    let counts = ndarray::array![[2u32, 2, 2, 2]];
    println!("Constant counts standardized: {}", standardize(&counts)?);

    Ok(())
}
