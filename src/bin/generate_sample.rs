use std::path::Path;

use anyhow::Result;
use tire_dashboard::data::export::{write_csv, write_parquet};
use tire_dashboard::data::model::MarketRow;

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

    /// Uniform value in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

const COMPETITORS: [(&str, [&str; 3]); 6] = [
    ("Michelin", ["Defender LTX", "CrossClimate2", "Primacy Tour"]),
    ("Bridgestone", ["Alenza AS", "Dueler HL", "Turanza QuietTrack"]),
    ("Continental", ["CrossContact LX25", "TerrainContact AT", "PureContact LS"]),
    ("Pirelli", ["Scorpion Verde", "Scorpion AS Plus", "P Zero"]),
    ("Hankook", ["Dynapro HP2", "Kinergy PT", "Ventus S1"]),
    ("Toyo", ["Open Country AT3", "Celsius CUV", "Proxes Sport"]),
];

const DESIGNS: [(&str, &str, &str); 5] = [
    ("Goodyear", "Assurance WeatherReady", "Tier 1"),
    ("Goodyear", "Eagle Sport AS", "Tier 1"),
    ("Kelly", "Edge AS", "Tier 3"),
    ("Cooper", "Discoverer EnduraMax", "Tier 2"),
    ("Dunlop", "Grandtrek AT20", "Tier 2"),
];

const FITMENTS: [&str; 7] = [
    "Toyota RAV4",
    "Honda CR-V",
    "Lexus RX",
    "BMW X5",
    "Audi Q5",
    "Mercedes GLE",
    "Volvo XC90",
];

fn generate(rng: &mut SimpleRng) -> Vec<MarketRow> {
    let years = [2024, 2025];
    let countries = [("USA", 1.0), ("Mexico", 0.25)];
    let sizes = ["225/65R17", "235/55R19", "265/70R17"];

    let mut rows = Vec::new();
    for &year in &years {
        for &(country, scale) in &countries {
            for &size in &sizes {
                let industry = (rng.range(1.5e6, 3.0e6) * scale).round();
                let som = rng.range(0.12, 0.3);
                let goodyear = (industry * som).round();
                let lux_parc = (rng.range(0.8e6, 2.0e6) * scale).round();
                let total_parc = (rng.range(9.0e6, 14.0e6) * scale).round();

                for &(competitor, patterns) in &COMPETITORS {
                    let comp_som = rng.range(0.03, 0.2);
                    let comp_sales = (industry * comp_som).round();
                    let mut remaining = comp_sales;
                    for (p, &pattern) in patterns.iter().enumerate() {
                        let pattern_sales = if p + 1 == patterns.len() {
                            remaining
                        } else {
                            (remaining * rng.range(0.3, 0.6)).round()
                        };
                        remaining -= pattern_sales;

                        let (brand, design, brand_type) =
                            DESIGNS[(rng.next_u64() % DESIGNS.len() as u64) as usize];
                        // Some rows carry no priced design, as in real extracts.
                        let priced = rng.next_f64() > 0.2;
                        let fitment = FITMENTS[(rng.next_u64() % FITMENTS.len() as u64) as usize];

                        rows.push(MarketRow {
                            sales_year: year,
                            country: country.to_string(),
                            tire_size: size.to_string(),
                            total_industry_sales: industry,
                            goodyear_sales: goodyear,
                            som_of_brand: som,
                            competitor_brand: competitor.to_string(),
                            competitor_brand_sales: comp_sales,
                            competitor_som: comp_som,
                            competitor_pattern: pattern.to_string(),
                            competitor_pattern_sales: pattern_sales,
                            brand_name: Some(brand.to_string()),
                            design_name: priced.then(|| design.to_string()),
                            sales_price_usd: priced
                                .then(|| (rng.range(110.0, 320.0) * 100.0).round() / 100.0),
                            brand_type: brand_type.to_string(),
                            lux_suv_carparc: lux_parc,
                            total_carparc: total_parc,
                            lux_suv_ratio: lux_parc / total_parc,
                            top_5_fitments: Some(fitment.to_string()),
                        });
                    }
                }
            }
        }
    }
    rows
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);
    let rows = generate(&mut rng);

    let csv_path = Path::new("sample_market.csv");
    let parquet_path = Path::new("sample_market.parquet");
    write_csv(&rows, csv_path)?;
    write_parquet(&rows, parquet_path)?;

    println!(
        "Wrote {} market rows to {} and {}",
        rows.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
