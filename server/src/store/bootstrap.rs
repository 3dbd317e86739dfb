//! First-run seed data.
//!
//! A fresh deployment starts with two cars with fixed attributes and two
//! receipts carrying a pseudo-random car serial and purchase date. The
//! receipt generator is fully determined by its seed so tests can pin the
//! output; production draws the seed from the wall clock.

use chrono::{DateTime, TimeZone, Utc};
use dealer_engine::{Car, Receipt};

/// Vendor stamped on the seed receipts.
const SEED_VENDOR: &str = "Carz";

/// The two cars every fresh deployment starts with.
pub fn default_cars() -> Vec<Car> {
    vec![
        Car::new("4512360", "Hyundai", "Venue", "Blue", 2021, 19935.0, 1184.0),
        Car::new("4568989", "Hyundai", "Accent", "Red", 2020, 16270.0, 1356.0),
    ]
}

/// Two seed receipts with ids "1" and "2", a random 4-digit car serial and
/// a purchase date between 2000-01-01 and `now`.
pub fn default_receipts(seed: u64, now: DateTime<Utc>) -> Vec<Receipt> {
    let mut rng = SplitMix64::new(seed);
    (1..=2u32)
        .map(|id| {
            let serial = 1000 + rng.next() % 8999;
            let date = random_date(&mut rng, now);
            Receipt::new(id.to_string(), SEED_VENDOR, serial.to_string(), date)
        })
        .collect()
}

/// Seed drawn from the wall clock, for production bootstrapping.
pub fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Lower bound for seed receipt purchase dates.
fn date_floor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
}

fn random_date(rng: &mut SplitMix64, now: DateTime<Utc>) -> DateTime<Utc> {
    let floor = date_floor().timestamp_millis();
    let span = (now.timestamp_millis() - floor).max(1) as u64;
    let millis = floor + (rng.next() % span) as i64;
    Utc.timestamp_millis_opt(millis).unwrap()
}

/// splitmix64; enough randomness for seed data and nothing else.
struct SplitMix64(u64);

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}
