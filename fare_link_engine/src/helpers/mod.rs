mod emoji;
mod map_url;

pub use emoji::random_car_emoji;
pub use map_url::{map_image_url, MapUrlError};
