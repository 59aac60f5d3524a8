use anyhow::{Context, Result};

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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let zones = [
        "Analytics",
        "Panel",
        "Pricing",
        "Trade",
        "Forecasting",
        "Creative",
        "Media",
        "AI",
        "Insights",
        "",
    ];
    let topics = ["Foundations", "Workshop", "Deep Dive", "Case Studies"];
    // Spelling variants the catalog has to fold into one section each.
    let sections = [
        "Professional",
        "professional ",
        "PROFESSIONAL",
        "Specialty",
        "specialty",
        "Expert",
        "expert",
        "beta",
        "Beta",
        "",
    ];

    let output_path = "academy_sample.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["Title", "Description", "Knowledge zone", "Section"])?;

    let mut rows = 0usize;
    for zone in &zones {
        for topic in &topics {
            let title = if zone.is_empty() {
                format!("General {topic}")
            } else {
                format!("{zone} {topic}")
            };
            let description = format!("A {} session on {title}.", topic.to_lowercase());
            let section = rng.pick(&sections);
            writer.write_record([title.as_str(), description.as_str(), *zone, section])?;
            rows += 1;
        }
    }
    writer.flush().context("flushing sample CSV")?;

    println!("Wrote {rows} courses in {} zones to {output_path}", zones.len());
    Ok(())
}
