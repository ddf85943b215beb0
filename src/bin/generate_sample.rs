use serde::Serialize;

/// One output row; field names are the dashboard's column contract.
#[derive(Serialize)]
struct Row {
    year: i32,
    seniority: &'static str,
    contract_type: &'static str,
    company_size: &'static str,
    role: &'static str,
    remote_type: &'static str,
    residence_country_code: &'static str,
    salary_usd: f64,
}

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let years = [2020, 2021, 2022, 2023, 2024, 2025];
    let seniorities: [(&str, f64); 4] = [
        ("Junior", 0.6),
        ("Mid", 0.85),
        ("Senior", 1.15),
        ("Executive", 1.6),
    ];
    let contract_types = ["Full-time", "Part-time", "Contract", "Freelance"];
    let company_sizes = ["Small", "Medium", "Large"];
    let remote_types = ["On-site", "Hybrid", "Remote"];

    // (role, base salary, spread) – bases roughly mirror the real survey.
    let roles: [(&str, f64, f64); 8] = [
        ("Data Scientist", 140_000.0, 30_000.0),
        ("Data Engineer", 130_000.0, 28_000.0),
        ("Data Analyst", 90_000.0, 20_000.0),
        ("ML Engineer", 155_000.0, 32_000.0),
        ("Analytics Engineer", 120_000.0, 24_000.0),
        ("BI Developer", 95_000.0, 18_000.0),
        ("Research Scientist", 150_000.0, 35_000.0),
        ("Data Architect", 160_000.0, 30_000.0),
    ];

    // (country, cost-of-labour multiplier)
    let countries: [(&str, f64); 8] = [
        ("USA", 1.0),
        ("GBR", 0.75),
        ("DEU", 0.7),
        ("CAN", 0.8),
        ("BRA", 0.35),
        ("IND", 0.25),
        ("ESP", 0.5),
        ("NLD", 0.72),
    ];

    let output_path = "sample_salaries.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let mut rows = 0usize;
    for &year in &years {
        for _ in 0..250 {
            let &(role, base, spread) = rng.pick(&roles);
            let &(seniority, level_factor) = rng.pick(&seniorities);
            let &(country, country_factor) = rng.pick(&countries);

            // Salaries drift upward a little each survey year.
            let year_factor = 1.0 + 0.03 * (year - years[0]) as f64;
            let salary =
                rng.gauss(base * level_factor * country_factor * year_factor, spread * 0.5);

            writer
                .serialize(Row {
                    year,
                    seniority,
                    contract_type: *rng.pick(&contract_types),
                    company_size: *rng.pick(&company_sizes),
                    role,
                    remote_type: *rng.pick(&remote_types),
                    residence_country_code: country,
                    salary_usd: salary.max(12_000.0).round(),
                })
                .expect("Failed to write row");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} salary records to {output_path}");
}
