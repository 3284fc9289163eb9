//! Generate a synthetic partial-results log for exercising the reporter
//! without a real training run.

use std::fs::File;
use std::io::{BufWriter, Write};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> std::io::Result<()> {
    let mut rng = SimpleRng::new(42);
    let iterations = 40;

    let output_path = "partial_results.txt";
    let mut out = BufWriter::new(File::create(output_path)?);

    let mut r2: f64 = 0.42;
    let mut mae: f64 = 1.65;

    writeln!(
        out,
        "Start: comitê com 5 modelos | Test R2={r2:.4} | Test MAE={mae:.4}"
    )?;

    for it in 1..=iterations {
        let progress = it as f64 / iterations as f64;
        let uncertainty =
            (0.35 * (-2.2 * progress).exp() + rng.gauss(0.0, 0.008)).max(1e-4);
        r2 += (0.93 - r2) * 0.08 + rng.gauss(0.0, 0.01);
        mae += (0.35 - mae) * 0.08 + rng.gauss(0.0, 0.02);

        let picked = 8 + (rng.next_u64() % 5);
        writeln!(
            out,
            "Iteração {it}: {picked} novos pontos | Incerteza Média Batch: {uncertainty:.4} | Test R2: {r2:.4} | Test MAE: {mae:.4}"
        )?;

        // Interleave the kind of chatter a real run emits between metric lines.
        if it % 10 == 0 {
            writeln!(out, "salvando checkpoint da iteração {it}")?;
        }
    }

    out.flush()?;
    println!("Wrote 1 start line and {iterations} iteration lines to {output_path}");
    Ok(())
}
