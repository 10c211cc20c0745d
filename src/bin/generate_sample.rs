use anyhow::{Context, Result};
use laptop_finder::config::DEFAULT_DATA_FILE;
use serde::Serialize;

/// One row of the generated catalogue, serialised with the catalogue's
/// column names.
#[derive(Debug, Serialize)]
struct SampleLaptop {
    #[serde(rename = "Brand")]
    brand: &'static str,
    #[serde(rename = "Model")]
    model: String,
    #[serde(rename = "JobCategory")]
    job_category: &'static str,
    #[serde(rename = "CPU")]
    cpu: &'static str,
    #[serde(rename = "RAM")]
    ram: String,
    #[serde(rename = "Storage")]
    storage: String,
    #[serde(rename = "PriceRange")]
    price_range: &'static str,
    #[serde(rename = "Price_ILS_Estimated")]
    price_ils: u32,
    #[serde(rename = "BatteryEstimate")]
    battery: String,
    #[serde(rename = "Display")]
    display: String,
    #[serde(rename = "URL")]
    url: String,
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

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.below(items.len())]
    }
}

const BRANDS: [&str; 6] = ["Dell", "Lenovo", "HP", "Asus", "Acer", "Apple"];
const CATEGORIES: [&str; 6] = [
    "Gaming",
    "Programming",
    "Design (Graphic / Video)",
    "Office",
    "Student",
    "Business, Office",
];
const INTEL_AMD_CPUS: [&str; 6] = [
    "Intel Core i5-1335U",
    "Intel Core i7-13700H",
    "Intel Core i9-13900HX",
    "AMD Ryzen 5 7530U",
    "AMD Ryzen 7 7840HS",
    "AMD Ryzen 9 7945HX",
];
const APPLE_CPUS: [&str; 3] = ["Apple M1", "Apple M2 Pro", "Apple M3 Max"];
const RAM_GB: [u32; 4] = [8, 16, 32, 64];
const STORAGE: [&str; 4] = ["256GB SSD", "512GB SSD", "1024GB SSD", "2048GB NVMe"];
const DISPLAYS: [&str; 7] = [
    "13.3-inch",
    "13.6\" Retina",
    "14-inch",
    "14.5\" OLED",
    "15.6-inch FHD",
    "16\" QHD",
    "17.3-inch",
];

fn price_range(price: u32) -> &'static str {
    match price {
        0..=3499 => "Budget",
        3500..=5999 => "Mid-range",
        6000..=8999 => "High-end",
        _ => "Premium",
    }
}

fn generate(rng: &mut SimpleRng, id: usize) -> SampleLaptop {
    let brand = rng.pick(&BRANDS);
    let cpu = if brand == "Apple" {
        rng.pick(&APPLE_CPUS)
    } else {
        rng.pick(&INTEL_AMD_CPUS)
    };
    let ram = rng.pick(&RAM_GB);
    let price = 2000 + (rng.below(90) as u32) * 100 + ram * 40;
    let hours = 3 + rng.below(14);
    let battery = if rng.below(10) == 0 {
        "unknown".to_string()
    } else {
        format!("{}-{}h", hours, hours + 2)
    };
    let url = if rng.below(5) == 0 {
        String::new()
    } else {
        format!("https://shop.example.com/laptops/{id}")
    };

    SampleLaptop {
        brand,
        model: format!("Series {} Gen {}", 100 + rng.below(900), 1 + rng.below(5)),
        job_category: rng.pick(&CATEGORIES),
        cpu,
        ram: format!("{ram}GB"),
        storage: rng.pick(&STORAGE).to_string(),
        price_range: price_range(price),
        price_ils: price,
        battery,
        display: rng.pick(&DISPLAYS).to_string(),
        url,
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
    let count = 120;

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    for id in 0..count {
        writer
            .serialize(generate(&mut rng, id))
            .context("writing row")?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {count} laptops to {output_path}");
    Ok(())
}
