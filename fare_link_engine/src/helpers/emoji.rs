use rand::Rng;

const CAR_EMOJIS: [&str; 3] = ["🚘", "🚖", "🚗"];

/// A random car emoji for feed-item titles. Cosmetic only.
pub fn random_car_emoji() -> &'static str {
    let i = rand::thread_rng().gen_range(0..CAR_EMOJIS.len());
    CAR_EMOJIS[i]
}
