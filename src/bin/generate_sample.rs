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

    /// Pick an index according to the given weights.
    fn weighted(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        let mut roll = self.next_f64() * total;
        for (i, w) in weights.iter().enumerate() {
            if roll < *w {
                return i;
            }
            roll -= w;
        }
        weights.len() - 1
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let n_passengers = 891;

    let output_dir = "data";
    let output_path = format!("{output_dir}/passengers.csv");
    std::fs::create_dir_all(output_dir).expect("Failed to create data directory");

    let mut writer = csv::Writer::from_path(&output_path).expect("Failed to create output file");
    writer
        .write_record([
            "PassengerId",
            "Survived",
            "Pclass",
            "Sex",
            "Age",
            "SibSp",
            "Parch",
            "Fare",
            "Embarked",
        ])
        .expect("Failed to write header");

    let classes = [1i64, 2, 3];
    let class_weights = [0.24, 0.21, 0.55];
    let sexes = ["male", "female"];
    let ports = ["S", "C", "Q"];
    let port_weights = [0.72, 0.19, 0.09];
    // Survival odds and fares roughly track class and sex.
    let survival_odds = [[0.37, 0.97], [0.16, 0.92], [0.14, 0.50]];
    let base_fares = [84.0, 20.0, 13.0];

    for id in 1..=n_passengers {
        let class_idx = rng.weighted(&class_weights);
        let pclass = classes[class_idx];
        let sex_idx = usize::from(rng.next_f64() < 0.35);
        let sex = sexes[sex_idx];
        let survived: i64 = i64::from(rng.next_f64() < survival_odds[class_idx][sex_idx]);

        // Age is missing for roughly one passenger in five.
        let age = if rng.next_f64() < 0.20 {
            String::new()
        } else {
            format!("{:.1}", rng.gauss(29.7, 14.5).clamp(0.4, 80.0))
        };

        let sibsp = rng.weighted(&[0.68, 0.23, 0.06, 0.03]) as i64;
        let parch = rng.weighted(&[0.76, 0.13, 0.09, 0.02]) as i64;
        let fare = rng.gauss(base_fares[class_idx], base_fares[class_idx] / 3.0).max(0.0);

        // A couple of embarkation records are blank, as in the real manifest.
        let embarked = if rng.next_f64() < 0.003 {
            ""
        } else {
            ports[rng.weighted(&port_weights)]
        };

        writer
            .write_record([
                id.to_string(),
                survived.to_string(),
                pclass.to_string(),
                sex.to_string(),
                age,
                sibsp.to_string(),
                parch.to_string(),
                format!("{fare:.4}"),
                embarked.to_string(),
            ])
            .expect("Failed to write record");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_passengers} passengers to {output_path}");
}
