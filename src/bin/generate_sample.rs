use serde::Serialize;

/// One raw CSV row, with the header spelling of the real Play Store export.
/// Every field is a string on purpose: the generator produces the messy
/// source formats (`"10,000+"`, `"$4.99"`, mixed-case types) that the
/// dashboard's cleaning layer exists to handle.
#[derive(Serialize)]
struct RawRow {
    #[serde(rename = "App")]
    app: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Rating")]
    rating: String,
    #[serde(rename = "Reviews")]
    reviews: String,
    #[serde(rename = "Size")]
    size: String,
    #[serde(rename = "Installs")]
    installs: String,
    #[serde(rename = "Type")]
    app_type: String,
    #[serde(rename = "Price")]
    price: String,
    #[serde(rename = "Content Rating")]
    content_rating: String,
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
}

/// Format an install count the way the export does: thousands separators
/// plus a trailing `+`.
fn installs_string(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push('+');
    out
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let categories = [
        "GAME", "FAMILY", "TOOLS", "FINANCE", "PRODUCTIVITY", "HEALTH_AND_FITNESS",
        "PHOTOGRAPHY", "COMMUNICATION", "SPORTS", "EDUCATION",
    ];
    // Mixed-case types exercise the normalization path.
    let free_types = ["Free", "free", "FREE", " Free "];
    let paid_types = ["Paid", "paid", "PAID"];
    let install_magnitudes: [u64; 7] = [100, 1_000, 10_000, 100_000, 1_000_000, 10_000_000, 100_000_000];

    let output_path = "data/googleplaystore.csv";
    std::fs::create_dir_all("data").expect("Failed to create data directory");
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let n_rows = 2000usize;
    for i in 0..n_rows {
        let category = rng.pick(&categories).to_string();
        let paid = rng.next_f64() < 0.15;

        let rating = if rng.next_f64() < 0.05 {
            // Unrated apps: blank cell, dropped by the cleaner.
            String::new()
        } else {
            format!("{:.1}", 1.0 + rng.next_f64() * 4.0)
        };

        let installs = if rng.next_f64() < 0.02 {
            // The classic shifted-row artifact: a non-numeric install cell.
            "Free".to_string()
        } else {
            installs_string(*rng.pick(&install_magnitudes))
        };

        let (app_type, price) = if paid {
            let dollars = 0.99 + (rng.next_u64() % 20) as f64;
            (rng.pick(&paid_types).to_string(), format!("${dollars:.2}"))
        } else {
            let price = if rng.next_f64() < 0.5 { "0" } else { "Free" };
            (rng.pick(&free_types).to_string(), price.to_string())
        };

        // A few rows with a missing type cell, kept by the cleaner as "Nan".
        let app_type = if rng.next_f64() < 0.01 { String::new() } else { app_type };

        let row = RawRow {
            app: format!("App {i}"),
            category,
            rating,
            reviews: (rng.next_u64() % 5_000_000).to_string(),
            size: format!("{}M", 1 + rng.next_u64() % 99),
            installs,
            app_type,
            price,
            content_rating: "Everyone".to_string(),
        };
        writer.serialize(row).expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_rows} rows to {output_path}");
}
