/// Deterministic scattered samples over `[lo, hi]²` with `z = f(x, y)`.
pub struct Scatter {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

/// Generates `n` pseudo-random samples using a fixed xorshift sequence.
pub fn scatter(n: usize, lo: f64, hi: f64, seed: u64, f: impl Fn(f64, f64) -> f64) -> Scatter {
    assert!(hi > lo, "sampling range must be non-empty");
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    let mut out = Scatter {
        x: Vec::with_capacity(n),
        y: Vec::with_capacity(n),
        z: Vec::with_capacity(n),
    };
    for _ in 0..n {
        let x = lo + (hi - lo) * next();
        let y = lo + (hi - lo) * next();
        out.x.push(x);
        out.y.push(y);
        out.z.push(f(x, y));
    }
    out
}

/// Uniform axis `start, start + step, ...` with `n` nodes.
pub fn axis(start: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| start + i as f64 * step).collect()
}
