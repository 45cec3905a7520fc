use num_bigint::BigInt;
use tracing::info;
use tracing_subscriber::EnvFilter;
use twiddling::Twiddle;

fn binary(value: &BigInt, width: usize) -> String {
    format!("{:0>width$}", value.to_str_radix(2), width = width)
}

fn main() -> Result<(), twiddling::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    info!("gray code table for 0..16");
    for i in 0..16u32 {
        let value = BigInt::from(i);
        let gray = value.to_gray_code();
        println!(
            "{:>2} {} -> {}",
            i,
            binary(&value, 4),
            binary(&gray, 4)
        );
    }

    let wide = BigInt::from(0)
        .with_bit_set(0)?
        .with_bit_set(64)?
        .with_bit_set(128)?;
    info!(bits = wide.bits_set(), msb = ?wide.msb(), "built a wide value");

    for other in [BigInt::from(1), -wide.clone(), wide.with_bit_cleared(64)?] {
        println!(
            "hamming({}, {}) = {}",
            wide,
            other,
            wide.hamming_distance_to(&other)
        );
    }

    Ok(())
}
